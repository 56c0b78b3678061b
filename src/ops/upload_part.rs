//! [`UploadPart`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_UploadPart.html)

use crate::dto::{ByteStream, UploadPartOutput, UploadPartRequest};
use crate::errors::S3Result;
use crate::output::{wrap_output, S3Output};
use crate::utils::{RequestExt, ResponseExt};
use crate::{Body, BoxStdError, Request, Response};

use std::io;

use futures::stream::StreamExt as _;
use hyper::header::{CONTENT_LENGTH, ETAG};

/// transform the incoming body into the stream shape `UploadPartRequest` expects
fn transform_stream(body: Body) -> ByteStream {
    Box::new(body.map(|try_chunk| {
        try_chunk.map_err(|e| io::Error::new(io::ErrorKind::Other, format!("error reading body chunk: {}", e)))
    }))
}

/// extract operation request
pub fn extract(
    req: &Request,
    bucket: &str,
    key: &str,
    part_number: i64,
    upload_id: String,
    body: Body,
) -> Result<UploadPartRequest, BoxStdError> {
    let content_length = req
        .get_header_str(CONTENT_LENGTH)?
        .map(str::parse::<i64>)
        .transpose()?
        .unwrap_or(0);

    Ok(UploadPartRequest {
        bucket: bucket.into(),
        key: key.into(),
        upload_id,
        part_number,
        content_length,
        body: transform_stream(body),
    })
}

impl S3Output for UploadPartOutput {
    fn try_into_response(self) -> S3Result<Response> {
        wrap_output(|res| {
            res.set_opt_header(ETAG, self.etag)?;
            Ok(())
        })
    }
}
