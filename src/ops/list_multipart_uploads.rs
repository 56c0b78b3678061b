//! [`ListMultipartUploads`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListMultipartUploads.html)

use crate::dto::{ListMultipartUploadsOutput, ListMultipartUploadsRequest};
use crate::errors::S3Result;
use crate::output::{wrap_output, S3Output};
use crate::query::Query;
use crate::utils::{ResponseExt, XmlWriterExt};
use crate::{BoxStdError, Response};

/// extract operation request
pub fn extract(
    query: Option<Query>,
    bucket: &str,
) -> Result<ListMultipartUploadsRequest, BoxStdError> {
    let mut input = ListMultipartUploadsRequest {
        bucket: bucket.into(),
        ..ListMultipartUploadsRequest::default()
    };

    if let Some(query) = query {
        input.prefix = query.prefix;
        input.delimiter = query.delimiter;
        input.key_marker = query.key_marker;
        input.upload_id_marker = query.upload_id_marker;
        input.max_uploads = query.max_uploads;
    }

    Ok(input)
}

impl S3Output for ListMultipartUploadsOutput {
    fn try_into_response(self) -> S3Result<Response> {
        wrap_output(|res| {
            res.set_xml_body(4096, |w| {
                w.stack("ListMultipartUploadsResult", |w| {
                    w.opt_element("Bucket", self.bucket)?;
                    w.opt_element("KeyMarker", self.key_marker)?;
                    w.opt_element("UploadIdMarker", self.upload_id_marker)?;
                    w.opt_element("NextKeyMarker", self.next_key_marker)?;
                    w.opt_element("NextUploadIdMarker", self.next_upload_id_marker)?;
                    w.opt_element("Prefix", self.prefix)?;
                    w.opt_element("Delimiter", self.delimiter)?;
                    w.opt_element("MaxUploads", self.max_uploads.map(|n| n.to_string()))?;
                    w.opt_element("IsTruncated", self.is_truncated.map(|b| b.to_string()))?;
                    w.iter_element(self.uploads.into_iter(), |w, upload| {
                        w.stack("Upload", |w| {
                            w.opt_element("Key", Some(upload.key))?;
                            w.opt_element("UploadId", Some(upload.upload_id))?;
                            w.opt_element("Initiated", upload.initiated)?;
                            w.opt_element("StorageClass", upload.storage_class)?;
                            w.opt_stack("Initiator", upload.initiator, |w, initiator| {
                                w.opt_element("ID", Some(initiator.id))?;
                                w.opt_element("DisplayName", initiator.display_name)
                            })?;
                            w.opt_stack("Owner", upload.owner, |w, owner| {
                                w.opt_element("ID", Some(owner.id))?;
                                w.opt_element("DisplayName", owner.display_name)
                            })
                        })
                    })?;
                    w.iter_element(self.common_prefixes.into_iter(), |w, prefix| {
                        w.stack("CommonPrefixes", |w| w.opt_element("Prefix", Some(prefix)))
                    })?;
                    Ok(())
                })
            })
        })
    }
}
