//! [`GetObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetObject.html)

use crate::dto::{GetObjectOutput, GetObjectRequest};
use crate::errors::S3Result;
use crate::headers::metadata;
use crate::output::{wrap_output, S3Output};
use crate::utils::{time, ResponseExt};
use crate::{Body, BoxStdError, Request, Response};

use hyper::header::{CONTENT_ENCODING, CONTENT_LENGTH, CONTENT_TYPE, ETAG, LAST_MODIFIED, RANGE};

/// extract operation request
pub fn extract(req: &Request, bucket: &str, key: &str) -> Result<GetObjectRequest, BoxStdError> {
    let mut input = GetObjectRequest {
        bucket: bucket.into(),
        key: key.into(),
        ..GetObjectRequest::default()
    };

    assign_opt!(from req to input headers [
        RANGE => range,
    ]);

    Ok(input)
}

impl S3Output for GetObjectOutput {
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

            if let Some(body) = self.body {
                *res.body_mut() = Body::wrap_stream(body);
            }

            Ok(())
        })
    }
}
