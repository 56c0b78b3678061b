//! Url query
//!
//! The S3 wire protocol overloads a single URL shape with many operations,
//! disambiguated by which query parameters are *present* (possibly with an
//! empty value) rather than by their parsed value. Every dispatcher-relevant
//! parameter therefore lives in one flat struct and stays `Option<String>`
//! when the dispatcher only cares about presence or needs to validate the
//! raw text itself (see `S3ErrorCode::InvalidMaxParts`).

use serde::Deserialize;

/// The full set of S3 query parameters this core recognizes.
///
/// Not every operation reads every field; `ops::*::extract` picks out what
/// it needs. Presence (`Some(_)`, including `Some(String::new())` for a
/// bare `?acl`) is what the dispatcher's priority ladder checks.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Query {
    /// `?location` on bucket GET
    pub location: Option<String>,
    /// `?acl` on bucket/object GET or PUT
    pub acl: Option<String>,
    /// `?uploads` on bucket GET or object POST
    pub uploads: Option<String>,
    /// `?restore` on object POST
    pub restore: Option<String>,

    /// `?uploadId=...`
    #[serde(rename = "uploadId")]
    pub upload_id: Option<String>,
    /// `?partNumber=...`, kept as text so the dispatcher can return
    /// `InvalidPart` on a non-numeric value instead of a generic 400.
    #[serde(rename = "partNumber")]
    pub part_number: Option<String>,

    /// `?max-parts=...`, kept as text for `InvalidMaxParts` validation.
    pub max_parts: Option<String>,
    /// `?part-number-marker=...`, kept as text for `InvalidPartNumberMarker`.
    pub part_number_marker: Option<String>,

    /// `?delimiter=...`
    pub delimiter: Option<String>,
    /// `?encoding-type=...`
    pub encoding_type: Option<String>,
    /// `?marker=...` (ListObjects v1)
    pub marker: Option<String>,
    /// `?max-keys=...`
    pub max_keys: Option<i64>,
    /// `?prefix=...`
    pub prefix: Option<String>,
    /// `?list-type=2` selects `ListObjectsV2`
    pub list_type: Option<u8>,
    /// `?continuation-token=...` (ListObjectsV2)
    pub continuation_token: Option<String>,
    /// `?fetch-owner=...`
    pub fetch_owner: Option<bool>,
    /// `?start-after=...`
    pub start_after: Option<String>,

    /// `?key-marker=...` (ListMultipartUploads)
    pub key_marker: Option<String>,
    /// `?upload-id-marker=...` (ListMultipartUploads)
    pub upload_id_marker: Option<String>,
    /// `?max-uploads=...`
    pub max_uploads: Option<i64>,

    /// `?delete` on bucket DELETE (batch delete)
    pub delete: Option<String>,
    /// `?versionId=...`
    #[serde(rename = "versionId")]
    pub version_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_flag_is_present_with_empty_value() {
        let q: Query = serde_urlencoded::from_str("acl").unwrap();
        assert_eq!(q.acl, Some(String::new()));
        assert!(q.uploads.is_none());
    }

    #[test]
    fn list_v2_params() {
        let q: Query =
            serde_urlencoded::from_str("list-type=2&prefix=p&max-keys=100").unwrap();
        assert_eq!(q.list_type, Some(2));
        assert_eq!(q.prefix.as_deref(), Some("p"));
        assert_eq!(q.max_keys, Some(100));
    }
}
