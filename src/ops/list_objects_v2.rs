//! [`ListObjectsV2`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListObjectsV2.html)

use crate::dto::{ListObjectsV2Output, ListObjectsV2Request};
use crate::errors::S3Result;
use crate::output::{wrap_output, S3Output};
use crate::query::Query;
use crate::utils::{ResponseExt, XmlWriterExt};
use crate::{BoxStdError, Response};

/// extract operation request
pub fn extract(query: Query, bucket: &str) -> Result<ListObjectsV2Request, BoxStdError> {
    let mut input = ListObjectsV2Request {
        bucket: bucket.into(),
        ..ListObjectsV2Request::default()
    };

    assign_opt!(from query to input fields [
        continuation_token,
        delimiter,
        encoding_type,
        fetch_owner,
        max_keys,
        prefix,
        start_after,
    ]);

    Ok(input)
}

impl S3Output for ListObjectsV2Output {
    fn try_into_response(self) -> S3Result<Response> {
        wrap_output(|res| {
            res.set_xml_body(4096, |w| {
                w.stack("ListBucketResult", |w| {
                    w.opt_element("IsTruncated", self.is_truncated.map(|b| b.to_string()))?;
                    w.iter_element(self.contents.into_iter(), |w, content| {
                        w.stack("Contents", |w| {
                            w.opt_element("Key", Some(content.key))?;
                            w.opt_element("LastModified", content.last_modified)?;
                            w.opt_element("ETag", content.etag)?;
                            w.opt_element("Size", Some(content.size.to_string()))?;
                            w.opt_element("StorageClass", content.storage_class)?;
                            w.opt_stack("Owner", content.owner, |w, owner| {
                                w.opt_element("ID", Some(owner.id))?;
                                w.opt_element("DisplayName", owner.display_name)
                            })
                        })
                    })?;
                    w.opt_element("Name", self.name)?;
                    w.opt_element("Prefix", self.prefix)?;
                    w.opt_element("Delimiter", self.delimiter)?;
                    w.opt_element("MaxKeys", self.max_keys.map(|k| k.to_string()))?;
                    w.iter_element(self.common_prefixes.into_iter(), |w, prefix| {
                        w.stack("CommonPrefixes", |w| w.opt_element("Prefix", Some(prefix)))
                    })?;
                    w.opt_element("EncodingType", self.encoding_type)?;
                    w.opt_element("KeyCount", self.key_count.map(|k| k.to_string()))?;
                    w.opt_element("ContinuationToken", self.continuation_token)?;
                    w.opt_element("NextContinuationToken", self.next_continuation_token)?;
                    w.opt_element("StartAfter", self.start_after)?;
                    Ok(())
                })
            })
        })
    }
}
