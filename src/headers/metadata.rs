//! The `x-amz-meta-*` user metadata namespace: ingest on request headers,
//! re-emit on response headers.

use crate::data_structures::OrderedHeaders;
use crate::dto::UserMetadata;
use crate::Response;

use hyper::header::{HeaderName, HeaderValue};

const PREFIX: &str = "x-amz-meta-";

/// Collect every `x-amz-meta-*` header into a map keyed by the lower-cased
/// suffix (the part after the prefix).
#[must_use]
pub fn extract(headers: &OrderedHeaders<'_>) -> UserMetadata {
    let mut metadata = UserMetadata::new();
    for &(name, value) in headers.as_ref() {
        if let Some(suffix) = name.strip_prefix(PREFIX) {
            metadata.insert(suffix.to_owned(), value.to_owned());
        }
    }
    metadata
}

/// Re-emit `metadata` onto `res` as `x-amz-meta-*` response headers.
///
/// # Errors
/// Returns an error if a key or value cannot be turned into a valid header
/// name/value.
pub fn apply(res: &mut Response, metadata: &UserMetadata) -> Result<(), crate::BoxStdError> {
    for (key, value) in metadata {
        let name = HeaderName::from_bytes(format!("{}{}", PREFIX, key).as_bytes())?;
        let value = HeaderValue::from_str(value)?;
        res.headers_mut().insert(name, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::OrderedHeaders;

    #[test]
    fn extracts_meta_prefixed_headers() {
        let headers = OrderedHeaders::from_slice_unchecked(&[
            ("x-amz-meta-foo", "bar"),
            ("x-amz-meta-baz", "qux"),
            ("content-type", "text/plain"),
        ]);
        let metadata = extract(&headers);
        assert_eq!(metadata.get("foo").map(String::as_str), Some("bar"));
        assert_eq!(metadata.get("baz").map(String::as_str), Some("qux"));
        assert_eq!(metadata.len(), 2);
    }
}
