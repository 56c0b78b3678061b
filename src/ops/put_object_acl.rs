//! [`PutObjectAcl`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutObjectAcl.html)

use crate::dto::{PutObjectAclOutput, PutObjectAclRequest};
use crate::errors::S3Result;
use crate::headers::acl;
use crate::output::S3Output;
use crate::utils::Apply;
use crate::{Body, BoxStdError, Request, Response};

/// extract operation request
///
/// Callers must check [`acl::check_exclusive`] on the returned `acl` before
/// this branch of the priority ladder is taken (see `service.rs`).
pub fn extract(req: &Request, bucket: &str, key: &str) -> Result<PutObjectAclRequest, BoxStdError> {
    PutObjectAclRequest {
        bucket: bucket.into(),
        key: key.into(),
        acl: acl::extract(req)?,
    }
    .apply(Ok)
}

impl S3Output for PutObjectAclOutput {
    fn try_into_response(self) -> S3Result<Response> {
        Response::new(Body::empty()).apply(Ok)
    }
}
