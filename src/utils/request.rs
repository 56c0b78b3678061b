//! request util

use crate::errors::{S3Error, S3ErrorCode};
use crate::Request;

use hyper::header::{AsHeaderName, HeaderValue, ToStrError};
use serde::de::DeserializeOwned;

/// `RequestExt`
pub trait RequestExt {
    /// get header value as `&str`
    fn get_header_str(&self, name: impl AsHeaderName) -> Result<Option<&str>, ToStrError>;

    /// deserialize the query string into `Q`, if the request has one
    ///
    /// # Errors
    /// Returns an error if the query string fails to deserialize
    fn extract_query<Q: DeserializeOwned>(&self) -> Result<Option<Q>, S3Error>;
}

impl RequestExt for Request {
    fn get_header_str(&self, name: impl AsHeaderName) -> Result<Option<&str>, ToStrError> {
        self.headers()
            .get(name)
            .map(HeaderValue::to_str)
            .transpose()
    }

    fn extract_query<Q: DeserializeOwned>(&self) -> Result<Option<Q>, S3Error> {
        match self.uri().query() {
            None => Ok(None),
            Some(s) => serde_urlencoded::from_str::<Q>(s)
                .map(Some)
                .map_err(|e| {
                    S3Error::from_code(S3ErrorCode::InvalidRequest)
                        .message("failed to parse query string")
                        .source(e)
                        .finish()
                }),
        }
    }
}
