//! [`PutBucketAcl`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutBucketAcl.html)

use crate::dto::PutBucketAclOutput;
use crate::errors::S3Result;
use crate::headers::acl;
use crate::output::S3Output;
use crate::utils::Apply;
use crate::{Body, BoxStdError, Request, Response};

use crate::dto::{Principal, PutBucketAclRequest};

/// extract operation request
///
/// Callers must check [`acl::check_exclusive`] on the returned `acl` before
/// this branch of the priority ladder is taken (see `service.rs`).
pub fn extract(
    req: &Request,
    bucket: &str,
    principal: Option<&Principal>,
) -> Result<PutBucketAclRequest, BoxStdError> {
    PutBucketAclRequest {
        bucket: bucket.into(),
        owner: principal.map(|p| p.0.clone()),
        acl: acl::extract(req)?,
    }
    .apply(Ok)
}

impl S3Output for PutBucketAclOutput {
    fn try_into_response(self) -> S3Result<Response> {
        Response::new(Body::empty()).apply(Ok)
    }
}
