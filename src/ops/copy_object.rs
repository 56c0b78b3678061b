//! [`CopyObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_CopyObject.html)

use crate::dto::CopyObjectOutput;
use crate::errors::S3Result;
use crate::headers::{
    AmzCopySource, X_AMZ_COPY_SOURCE_IF_MATCH, X_AMZ_COPY_SOURCE_IF_MODIFIED_SINCE,
    X_AMZ_COPY_SOURCE_IF_NONE_MATCH, X_AMZ_COPY_SOURCE_IF_UNMODIFIED_SINCE,
};
use crate::output::{wrap_output, S3Output};
use crate::utils::{ResponseExt, XmlWriterExt};
use crate::{BoxStdError, Request, Response};

use crate::dto::CopyObjectRequest;

/// extract operation request
pub fn extract(
    req: &Request,
    bucket: &str,
    key: &str,
    copy_source_header: &str,
) -> Result<CopyObjectRequest, BoxStdError> {
    let source = AmzCopySource::from_header_str(copy_source_header)
        .map_err(|e| -> BoxStdError { Box::new(e) })?;

    let mut input = CopyObjectRequest {
        source_bucket: source.bucket.into(),
        source_key: source.key.into(),
        bucket: bucket.into(),
        key: key.into(),
        ..CopyObjectRequest::default()
    };

    assign_opt!(from req to input headers [
        &*X_AMZ_COPY_SOURCE_IF_MATCH => copy_source_if_match,
        &*X_AMZ_COPY_SOURCE_IF_MODIFIED_SINCE => copy_source_if_modified_since,
        &*X_AMZ_COPY_SOURCE_IF_NONE_MATCH => copy_source_if_none_match,
        &*X_AMZ_COPY_SOURCE_IF_UNMODIFIED_SINCE => copy_source_if_unmodified_since,
    ]);

    Ok(input)
}

impl S3Output for CopyObjectOutput {
    fn try_into_response(self) -> S3Result<Response> {
        wrap_output(|res| {
            res.set_xml_body(64, |w| {
                w.stack("CopyObjectResult", |w| {
                    w.opt_element("ETag", self.etag)?;
                    w.opt_element("LastModified", self.last_modified)
                })
            })?;
            Ok(())
        })
    }
}
