//! [`RestoreObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_RestoreObject.html)

use crate::dto::xml::RestoreRequest;
use crate::dto::{RestoreObjectOutput, RestoreObjectRequest};
use crate::errors::S3Result;
use crate::output::S3Output;
use crate::utils::{deserialize_xml_body, Apply};
use crate::{Body, BoxStdError, Response};

/// extract operation request
pub async fn extract(
    body: Body,
    bucket: &str,
    key: &str,
) -> Result<RestoreObjectRequest, BoxStdError> {
    let restore: RestoreRequest = deserialize_xml_body(body).await?;

    Ok(RestoreObjectRequest {
        bucket: bucket.into(),
        key: key.into(),
        days: restore.days,
        tier: restore.glacier_job_parameters.map(|p| p.tier),
    })
}

impl S3Output for RestoreObjectOutput {
    fn try_into_response(self) -> S3Result<Response> {
        Response::new(Body::empty()).apply(Ok)
    }
}
