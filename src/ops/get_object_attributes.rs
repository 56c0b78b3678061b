//! [`GetObjectAttributes`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetObjectAttributes.html)

use crate::dto::{GetObjectAttributesOutput, GetObjectAttributesRequest};
use crate::errors::S3Result;
use crate::headers::X_AMZ_OBJECT_ATTRIBUTES;
use crate::output::{wrap_output, S3Output};
use crate::utils::{RequestExt, ResponseExt, XmlWriterExt};
use crate::{BoxStdError, Request, Response};

/// extract operation request
pub fn extract(
    req: &Request,
    bucket: &str,
    key: &str,
) -> Result<GetObjectAttributesRequest, BoxStdError> {
    let object_attributes = req
        .get_header_str(&*X_AMZ_OBJECT_ATTRIBUTES)?
        .map(|s| s.split(',').map(str::trim).map(String::from).collect())
        .unwrap_or_default();

    Ok(GetObjectAttributesRequest {
        bucket: bucket.into(),
        key: key.into(),
        object_attributes,
    })
}

impl S3Output for GetObjectAttributesOutput {
    fn try_into_response(self) -> S3Result<Response> {
        wrap_output(|res| {
            res.set_xml_body(256, |w| {
                w.stack("GetObjectAttributesResult", |w| {
                    w.opt_element("ETag", self.etag)?;
                    w.opt_element("ObjectSize", self.object_size.map(|s| s.to_string()))?;
                    w.opt_element("StorageClass", self.storage_class)?;
                    w.opt_element("LastModified", self.last_modified)
                })
            })
        })
    }
}
