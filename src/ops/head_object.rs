//! [`HeadObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_HeadObject.html)

use crate::dto::{HeadObjectOutput, HeadObjectRequest};
use crate::errors::S3Result;
use crate::headers::metadata;
use crate::output::{wrap_output, S3Output};
use crate::utils::{time, Apply, ResponseExt};
use crate::{Body, BoxStdError, Response};

use hyper::header::{CONTENT_ENCODING, CONTENT_LENGTH, CONTENT_TYPE, ETAG};

/// extract operation request
pub fn extract(bucket: &str, key: &str) -> Result<HeadObjectRequest, BoxStdError> {
    HeadObjectRequest {
        bucket: bucket.into(),
        key: key.into(),
    }
    .apply(Ok)
}

impl S3Output for HeadObjectOutput {
    fn try_into_response(self) -> S3Result<Response> {
        wrap_output(|res| {
            res.set_opt_header(CONTENT_LENGTH, Some(self.meta.content_length.to_string()))?;
            res.set_opt_header(CONTENT_TYPE, self.meta.content_type)?;
            res.set_opt_header(CONTENT_ENCODING, self.meta.content_encoding)?;
            res.set_opt_header(ETAG, self.meta.etag)?;
            res.set_opt_last_modified(time::map_opt_rfc3339_to_last_modified(
                self.meta.last_modified,
            )?)?;

            metadata::apply(res, &self.meta.metadata)?;

            *res.body_mut() = Body::empty();

            Ok(())
        })
    }
}
