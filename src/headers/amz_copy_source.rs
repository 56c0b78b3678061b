//! x-amz-copy-source

use crate::path::S3Path;

/// x-amz-copy-source
///
/// Only the plain `bucket/key` form is supported; S3 access-point ARNs are
/// out of scope.
#[derive(Debug)]
pub struct AmzCopySource<'a> {
    /// source bucket
    pub bucket: &'a str,
    /// source key
    pub key: &'a str,
}

/// `ParseAmzCopySourceError`
#[allow(missing_copy_implementations)] // Why? See `crate::path::ParseS3PathError`.
#[derive(Debug, thiserror::Error)]
pub enum ParseAmzCopySourceError {
    /// pattern mismatch
    #[error("ParseAmzCopySourceError: PatternMismatch")]
    PatternMismatch,

    /// invalid bucket name
    #[error("ParseAmzCopySourceError: InvalidBucketName")]
    InvalidBucketName,

    /// invalid key
    #[error("ParseAmzCopySourceError: InvalidKey")]
    InvalidKey,
}

impl<'a> AmzCopySource<'a> {
    /// Parses `AmzCopySource` from header
    /// # Errors
    /// Returns an error if the header is invalid
    pub fn from_header_str(header: &'a str) -> Result<Self, ParseAmzCopySourceError> {
        let idx = header
            .find('/')
            .ok_or(ParseAmzCopySourceError::PatternMismatch)?;

        let (bucket, rest) = header.split_at(idx);
        let key = &rest[1..];

        if bucket.is_empty() || key.is_empty() {
            return Err(ParseAmzCopySourceError::PatternMismatch);
        }

        if !S3Path::check_bucket_name(bucket) {
            return Err(ParseAmzCopySourceError::InvalidBucketName);
        }

        if !S3Path::check_key(key) {
            return Err(ParseAmzCopySourceError::InvalidKey);
        }

        Ok(Self { bucket, key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_copy_source() {
        let src = AmzCopySource::from_header_str("my-bucket/my/key").unwrap();
        assert_eq!(src.bucket, "my-bucket");
        assert_eq!(src.key, "my/key");

        assert!(matches!(
            AmzCopySource::from_header_str("no-slash-here"),
            Err(ParseAmzCopySourceError::PatternMismatch)
        ));

        assert!(matches!(
            AmzCopySource::from_header_str("/key-only"),
            Err(ParseAmzCopySourceError::PatternMismatch)
        ));
    }
}
