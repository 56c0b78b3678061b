//! [`PutObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutObject.html)

use crate::dto::{ByteStream, PutObjectOutput, PutObjectRequest};
use crate::errors::S3Result;
use crate::headers::{metadata, X_AMZ_ACL};
use crate::output::{wrap_output, S3Output};
use crate::utils::{Apply, RequestExt, ResponseExt};
use crate::{Body, BoxStdError, Request, Response};

use futures::stream::StreamExt as _;
use std::io;

use hyper::header::{CONTENT_LENGTH, CONTENT_TYPE, ETAG};

/// extract operation request
pub fn extract(
    req: &Request,
    body: Body,
    bucket: &str,
    key: &str,
) -> Result<PutObjectRequest, BoxStdError> {
    let content_length = req
        .get_header_str(CONTENT_LENGTH)?
        .map(str::parse::<i64>)
        .transpose()?
        .unwrap_or(0);

    let stream = body.map(|try_chunk| {
        try_chunk.map_err(|e| io::Error::new(io::ErrorKind::Other, format!("error reading body chunk: {}", e)))
    });

    let mut input = PutObjectRequest {
        bucket: bucket.into(),
        key: key.into(),
        content_length,
        metadata: metadata::extract(&crate::data_structures::OrderedHeaders::from_req(req)?),
        acl: None,
        content_type: None,
        body: Box::new(stream) as ByteStream,
    };

    assign_opt!(from req to input headers [
        &*X_AMZ_ACL => acl,
        CONTENT_TYPE => content_type,
    ]);

    Ok(input)
}

impl S3Output for PutObjectOutput {
    fn try_into_response(self) -> S3Result<Response> {
        wrap_output(|res| {
            res.set_opt_header(ETAG, self.etag)?;
            Ok(())
        })
    }
}
