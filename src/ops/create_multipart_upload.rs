//! [`CreateMultipartUpload`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_CreateMultipartUpload.html)

use crate::dto::{CreateMultipartUploadOutput, CreateMultipartUploadRequest};
use crate::errors::S3Result;
use crate::headers::metadata;
use crate::output::{wrap_output, S3Output};
use crate::utils::{RequestExt, ResponseExt, XmlWriterExt};
use crate::{BoxStdError, Request, Response};

use hyper::header::CONTENT_TYPE;

/// extract operation request
pub fn extract(
    req: &Request,
    bucket: &str,
    key: &str,
) -> Result<CreateMultipartUploadRequest, BoxStdError> {
    let mut input = CreateMultipartUploadRequest {
        bucket: bucket.into(),
        key: key.into(),
        metadata: metadata::extract(&crate::data_structures::OrderedHeaders::from_req(req)?),
        ..CreateMultipartUploadRequest::default()
    };

    assign_opt!(from req to input headers [
        CONTENT_TYPE => content_type,
    ]);

    Ok(input)
}

impl S3Output for CreateMultipartUploadOutput {
    fn try_into_response(self) -> S3Result<Response> {
        wrap_output(|res| {
            res.set_xml_body(256, |w| {
                w.stack("InitiateMultipartUploadResult", |w| {
                    w.opt_element("Bucket", self.bucket)?;
                    w.opt_element("Key", self.key)?;
                    w.opt_element("UploadId", self.upload_id)?;
                    Ok(())
                })
            })?;
            Ok(())
        })
    }
}
