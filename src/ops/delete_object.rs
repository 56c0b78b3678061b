//! [`DeleteObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_DeleteObject.html)

use crate::dto::{DeleteObjectOutput, DeleteObjectRequest};
use crate::errors::S3Result;
use crate::headers::{X_AMZ_DELETE_MARKER, X_AMZ_VERSION_ID};
use crate::output::{wrap_output, S3Output};
use crate::utils::{RequestExt, ResponseExt};
use crate::{BoxStdError, Request, Response};

use hyper::StatusCode;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
/// `DeleteObject` request query
struct Query {
    /// `versionId`
    #[serde(rename = "versionId")]
    version_id: Option<String>,
}

/// extract operation request
pub fn extract(req: &Request, bucket: &str, key: &str) -> Result<DeleteObjectRequest, BoxStdError> {
    let mut input = DeleteObjectRequest {
        bucket: bucket.into(),
        key: key.into(),
        ..DeleteObjectRequest::default()
    };

    if let Some(query) = req.extract_query::<Query>()? {
        assign_opt!(from query to input fields [
            version_id,
        ]);
    }

    Ok(input)
}

impl S3Output for DeleteObjectOutput {
    fn try_into_response(self) -> S3Result<Response> {
        wrap_output(|res| {
            res.set_status(StatusCode::NO_CONTENT);
            res.set_opt_header(
                X_AMZ_DELETE_MARKER.clone(),
                self.delete_marker.map(|b| b.to_string()),
            )?;
            res.set_opt_header(X_AMZ_VERSION_ID.clone(), self.version_id)?;
            Ok(())
        })
    }
}
