//! [`CompleteMultipartUpload`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_CompleteMultipartUpload.html)

use crate::dto::xml::CompletedMultipartUpload;
use crate::dto::{CompleteMultipartUploadOutput, CompleteMultipartUploadRequest, CompletedPart};
use crate::errors::S3Result;
use crate::output::{wrap_output, S3Output};
use crate::utils::{deserialize_xml_body, ResponseExt, XmlWriterExt};
use crate::{Body, BoxStdError, Response};

/// extract operation request
pub async fn extract(
    body: Body,
    bucket: &str,
    key: &str,
    upload_id: String,
) -> Result<CompleteMultipartUploadRequest, BoxStdError> {
    let multipart_upload: CompletedMultipartUpload = deserialize_xml_body(body).await?;

    Ok(CompleteMultipartUploadRequest {
        bucket: bucket.into(),
        key: key.into(),
        upload_id,
        parts: Vec::<CompletedPart>::from(multipart_upload),
    })
}

impl S3Output for CompleteMultipartUploadOutput {
    fn try_into_response(self) -> S3Result<Response> {
        wrap_output(|res| {
            res.set_xml_body(256, |w| {
                w.stack("CompleteMultipartUploadResult", |w| {
                    w.opt_element("Location", self.location)?;
                    w.opt_element("Bucket", self.bucket)?;
                    w.opt_element("Key", self.key)?;
                    w.opt_element("ETag", self.etag)?;
                    Ok(())
                })
            })?;
            Ok(())
        })
    }
}
