//! [`AbortMultipartUpload`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_AbortMultipartUpload.html)

use crate::dto::{AbortMultipartUploadOutput, AbortMultipartUploadRequest};
use crate::errors::S3Result;
use crate::output::S3Output;
use crate::utils::{Apply, ResponseExt};
use crate::{Body, BoxStdError, Response};

use hyper::StatusCode;

/// extract operation request
pub fn extract(
    bucket: &str,
    key: &str,
    upload_id: String,
) -> Result<AbortMultipartUploadRequest, BoxStdError> {
    AbortMultipartUploadRequest {
        bucket: bucket.into(),
        key: key.into(),
        upload_id,
    }
    .apply(Ok)
}

impl S3Output for AbortMultipartUploadOutput {
    fn try_into_response(self) -> S3Result<Response> {
        Response::new_with_status(Body::empty(), StatusCode::NO_CONTENT).apply(Ok)
    }
}
