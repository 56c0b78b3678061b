//! [`HeadBucket`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_HeadBucket.html)

use crate::dto::{HeadBucketOutput, HeadBucketRequest};
use crate::errors::S3Result;
use crate::utils::Apply;
use crate::{Body, BoxStdError, Response};

/// extract operation request
pub fn extract(bucket: &str) -> Result<HeadBucketRequest, BoxStdError> {
    HeadBucketRequest {
        bucket: bucket.into(),
    }
    .apply(Ok)
}

impl crate::output::S3Output for HeadBucketOutput {
    fn try_into_response(self) -> S3Result<Response> {
        Response::new(Body::empty()).apply(Ok)
    }
}
