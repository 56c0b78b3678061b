//! [`GetBucketAcl`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetBucketAcl.html)

use crate::dto::{GetBucketAclOutput, GetBucketAclRequest};
use crate::errors::S3Result;
use crate::output::{wrap_output, S3Output};
use crate::utils::{Apply, ResponseExt, XmlWriterExt};
use crate::{BoxStdError, Response};

/// extract operation request
pub fn extract(bucket: &str) -> Result<GetBucketAclRequest, BoxStdError> {
    GetBucketAclRequest {
        bucket: bucket.into(),
    }
    .apply(Ok)
}

impl S3Output for GetBucketAclOutput {
    fn try_into_response(self) -> S3Result<Response> {
        wrap_output(|res| {
            res.set_xml_body(256, |w| {
                w.stack("AccessControlPolicy", |w| {
                    w.stack("Owner", |w| {
                        w.opt_element("ID", Some(self.policy.owner_id))?;
                        w.opt_element("DisplayName", self.policy.owner_display_name)
                    })?;
                    w.stack("AccessControlList", |w| {
                        w.iter_element(self.policy.grants.into_iter(), |w, grant| {
                            w.stack("Grant", |w| {
                                w.opt_element("Grantee", Some(grant.grantee))?;
                                w.opt_element("Permission", Some(grant.permission))
                            })
                        })
                    })
                })
            })
        })
    }
}
