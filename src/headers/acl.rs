//! Extraction of the canned-ACL/grant-header set shared by the bucket-PUT
//! and object-PUT priority ladders.

use super::{
    X_AMZ_ACL, X_AMZ_GRANT_FULL_CONTROL, X_AMZ_GRANT_READ, X_AMZ_GRANT_READ_ACP,
    X_AMZ_GRANT_WRITE, X_AMZ_GRANT_WRITE_ACP,
};
use crate::dto::AclParams;
use crate::errors::{S3Error, S3ErrorCode, S3Result};
use crate::utils::RequestExt;
use crate::Request;

/// Extract the five grant headers plus `x-amz-acl` from `req`.
///
/// Does not enforce the mutual-exclusion invariant itself; callers decide
/// how canned-ACL-vs-grants conflicts branch the dispatcher's priority
/// ladder (see [`check_exclusive`]).
pub fn extract(req: &Request) -> Result<AclParams, crate::BoxStdError> {
    let mut acl = AclParams::default();
    assign_opt!(from req to acl headers [
        &*X_AMZ_ACL => canned_acl,
        &*X_AMZ_GRANT_FULL_CONTROL => grant_full_control,
        &*X_AMZ_GRANT_READ => grant_read,
        &*X_AMZ_GRANT_READ_ACP => grant_read_acp,
        &*X_AMZ_GRANT_WRITE => grant_write,
        &*X_AMZ_GRANT_WRITE_ACP => grant_write_acp,
    ]);
    Ok(acl)
}

/// `spec.md` §3's P1 invariant: a canned ACL and explicit grants are
/// mutually exclusive on the same request.
///
/// # Errors
/// Returns `S3ErrorCode::InvalidRequest` if both are present.
pub fn check_exclusive(acl: &AclParams) -> S3Result<()> {
    if acl.canned_acl.is_some() && acl.has_grants() {
        return Err(S3Error::from_code(S3ErrorCode::InvalidRequest)
            .message("x-amz-acl and x-amz-grant-* headers are mutually exclusive")
            .finish());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_both_canned_and_grants() {
        let acl = AclParams {
            canned_acl: Some("private".into()),
            grant_read: Some("id=abc".into()),
            ..AclParams::default()
        };
        assert!(check_exclusive(&acl).is_err());
    }

    #[test]
    fn accepts_canned_alone() {
        let acl = AclParams {
            canned_acl: Some("private".into()),
            ..AclParams::default()
        };
        assert!(check_exclusive(&acl).is_ok());
    }

    #[test]
    fn accepts_grants_alone() {
        let acl = AclParams {
            grant_write: Some("id=abc".into()),
            ..AclParams::default()
        };
        assert!(check_exclusive(&acl).is_ok());
    }

    #[test]
    fn accepts_neither() {
        assert!(check_exclusive(&AclParams::default()).is_ok());
    }
}
