//! Data transfer objects exchanged between the dispatcher and the backend.
//!
//! These are plain structs, not wire types: the XML/header codec in `ops/*`
//! and `output.rs` is responsible for (de)serializing them from/to the S3
//! wire format. `storage::S3Storage` is generic over none of this — every
//! method takes and returns these concrete types.

use std::collections::BTreeMap;

use futures::stream::Stream;
use hyper::body::Bytes;

/// A boxed stream of body bytes, used for both inbound (`PutObject`) and
/// outbound (`GetObject`) object payloads so the dispatcher never buffers a
/// full object in memory.
pub type ByteStream = Box<dyn Stream<Item = std::io::Result<Bytes>> + Send + Sync + Unpin>;

/// User metadata: the `x-amz-meta-*` namespace, keyed by lower-cased suffix.
pub type UserMetadata = BTreeMap<String, String>;

/// One of the five explicit ACL grant headers, or a canned ACL token.
///
/// `spec.md` §3's P1 invariant: at most one of `canned_acl` or the grant set
/// is populated by the dispatcher; it rejects both being present before
/// this type is ever constructed.
#[derive(Debug, Clone, Default)]
pub struct AclParams {
    /// `x-amz-acl`
    pub canned_acl: Option<String>,
    /// `x-amz-grant-full-control`
    pub grant_full_control: Option<String>,
    /// `x-amz-grant-read`
    pub grant_read: Option<String>,
    /// `x-amz-grant-read-acp`
    pub grant_read_acp: Option<String>,
    /// `x-amz-grant-write`
    pub grant_write: Option<String>,
    /// `x-amz-grant-write-acp`
    pub grant_write_acp: Option<String>,
}

impl AclParams {
    /// True if any of the five grant headers is non-empty once concatenated,
    /// matching `spec.md` §4.1's "grant concatenation" tie-break rule.
    #[must_use]
    pub fn has_grants(&self) -> bool {
        [
            self.grant_full_control.as_deref(),
            self.grant_read.as_deref(),
            self.grant_read_acp.as_deref(),
            self.grant_write.as_deref(),
            self.grant_write_acp.as_deref(),
        ]
        .iter()
        .flatten()
        .any(|s| !s.is_empty())
    }
}

/// A grantee entry in an ACL document, as returned by `GetBucketAcl`/`GetObjectAcl`.
#[derive(Debug, Clone)]
pub struct Grant {
    /// grantee display name or id
    pub grantee: String,
    /// permission (`FULL_CONTROL`, `READ`, `READ_ACP`, `WRITE`, `WRITE_ACP`)
    pub permission: String,
}

/// An ACL document: an owner plus a list of grants.
#[derive(Debug, Clone)]
pub struct AccessControlPolicy {
    /// bucket/object owner id
    pub owner_id: String,
    /// owner display name
    pub owner_display_name: Option<String>,
    /// grants
    pub grants: Vec<Grant>,
}

/// Bucket owner, as embedded in `ListBuckets` and ACL responses.
#[derive(Debug, Clone)]
pub struct Owner {
    /// owner id
    pub id: String,
    /// display name
    pub display_name: Option<String>,
}

/// The authenticated caller, injected by upstream middleware into the
/// request's extensions map and threaded explicitly from there into the
/// dispatcher entry points that need it (`PutBucket`, `PutBucketAcl`),
/// rather than read back out of ambient/global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal(pub String);

/// One entry of `ListBuckets`.
#[derive(Debug, Clone)]
pub struct Bucket {
    /// bucket name
    pub name: String,
    /// creation timestamp, RFC3339
    pub creation_date: Option<String>,
}

// ---- ListBuckets ----

/// `ListBuckets` request (no parameters beyond the authenticated principal)
#[derive(Debug, Clone, Copy, Default)]
pub struct ListBucketsRequest {}

/// `ListBuckets` output
#[derive(Debug, Clone, Default)]
pub struct ListBucketsOutput {
    /// buckets owned by the principal
    pub buckets: Vec<Bucket>,
    /// owner of all the listed buckets
    pub owner: Option<Owner>,
}

// ---- HeadBucket ----

/// `HeadBucket` request
#[derive(Debug, Clone)]
pub struct HeadBucketRequest {
    /// bucket name
    pub bucket: String,
}

/// `HeadBucket` output
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadBucketOutput {}

// ---- PutBucket (CreateBucket) ----

/// `PutBucket` request
#[derive(Debug, Clone, Default)]
pub struct CreateBucketRequest {
    /// bucket name
    pub bucket: String,
    /// authenticated principal, becomes the bucket owner
    pub owner: Option<String>,
    /// optional location constraint parsed from the request body
    pub location_constraint: Option<String>,
    /// `x-amz-acl`
    pub acl: Option<String>,
    /// `x-amz-grant-full-control`
    pub grant_full_control: Option<String>,
    /// `x-amz-grant-read`
    pub grant_read: Option<String>,
    /// `x-amz-grant-read-acp`
    pub grant_read_acp: Option<String>,
    /// `x-amz-grant-write`
    pub grant_write: Option<String>,
    /// `x-amz-grant-write-acp`
    pub grant_write_acp: Option<String>,
    /// `x-amz-bucket-object-lock-enabled`
    pub object_lock_enabled_for_bucket: Option<String>,
}

/// `PutBucket` output
#[derive(Debug, Clone, Default)]
pub struct CreateBucketOutput {
    /// `Location` response header
    pub location: Option<String>,
}

/// `<CreateBucketConfiguration>` request body
#[derive(Debug, Clone, Default)]
pub struct CreateBucketConfiguration {
    /// `LocationConstraint`
    pub location_constraint: Option<String>,
}

// ---- DeleteBucket ----

/// `DeleteBucket` request
#[derive(Debug, Clone)]
pub struct DeleteBucketRequest {
    /// bucket name
    pub bucket: String,
}

/// `DeleteBucket` output
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteBucketOutput {}

// ---- PutBucketAcl / GetBucketAcl ----

/// `PutBucketAcl` request
#[derive(Debug, Clone)]
pub struct PutBucketAclRequest {
    /// bucket name
    pub bucket: String,
    /// authenticated principal applying the ACL
    pub owner: Option<String>,
    /// grant parameters
    pub acl: AclParams,
}

/// `PutBucketAcl` output
#[derive(Debug, Clone, Copy, Default)]
pub struct PutBucketAclOutput {}

/// `GetBucketAcl` request
#[derive(Debug, Clone)]
pub struct GetBucketAclRequest {
    /// bucket name
    pub bucket: String,
}

/// `GetBucketAcl` output
#[derive(Debug, Clone)]
pub struct GetBucketAclOutput {
    /// the bucket's ACL document
    pub policy: AccessControlPolicy,
}

// ---- ListObjects / ListObjectsV2 ----

/// One entry of a listing.
#[derive(Debug, Clone)]
pub struct Object {
    /// object key
    pub key: String,
    /// last modified time, RFC3339
    pub last_modified: Option<String>,
    /// entity tag
    pub etag: Option<String>,
    /// size in bytes
    pub size: i64,
    /// storage class
    pub storage_class: Option<String>,
    /// object owner, present only if `fetch-owner` was requested
    pub owner: Option<Owner>,
}

/// `ListObjects` request
#[derive(Debug, Clone, Default)]
pub struct ListObjectsRequest {
    /// bucket name
    pub bucket: String,
    /// key prefix filter
    pub prefix: Option<String>,
    /// pagination marker (v1)
    pub marker: Option<String>,
    /// grouping delimiter
    pub delimiter: Option<String>,
    /// max keys to return
    pub max_keys: Option<i64>,
    /// encoding applied to returned keys
    pub encoding_type: Option<String>,
}

/// `ListObjects` output
#[derive(Debug, Clone, Default)]
pub struct ListObjectsOutput {
    /// bucket name
    pub name: Option<String>,
    /// echoed prefix
    pub prefix: Option<String>,
    /// echoed marker
    pub marker: Option<String>,
    /// next marker, if truncated
    pub next_marker: Option<String>,
    /// echoed delimiter
    pub delimiter: Option<String>,
    /// echoed max-keys
    pub max_keys: Option<i64>,
    /// true if the listing was truncated
    pub is_truncated: Option<bool>,
    /// matched objects
    pub contents: Vec<Object>,
    /// common prefixes under the delimiter
    pub common_prefixes: Vec<String>,
    /// echoed encoding-type
    pub encoding_type: Option<String>,
}

/// `ListObjectsV2` request
#[derive(Debug, Clone, Default)]
pub struct ListObjectsV2Request {
    /// bucket name
    pub bucket: String,
    /// key prefix filter
    pub prefix: Option<String>,
    /// pagination token (v2)
    pub continuation_token: Option<String>,
    /// grouping delimiter
    pub delimiter: Option<String>,
    /// max keys to return
    pub max_keys: Option<i64>,
    /// whether to populate `Object::owner`
    pub fetch_owner: Option<bool>,
    /// start listing after this key
    pub start_after: Option<String>,
    /// encoding applied to returned keys
    pub encoding_type: Option<String>,
}

/// `ListObjectsV2` output
#[derive(Debug, Clone, Default)]
pub struct ListObjectsV2Output {
    /// bucket name
    pub name: Option<String>,
    /// echoed prefix
    pub prefix: Option<String>,
    /// echoed delimiter
    pub delimiter: Option<String>,
    /// echoed max-keys
    pub max_keys: Option<i64>,
    /// true if the listing was truncated
    pub is_truncated: Option<bool>,
    /// matched objects
    pub contents: Vec<Object>,
    /// common prefixes under the delimiter
    pub common_prefixes: Vec<String>,
    /// number of keys returned
    pub key_count: Option<i64>,
    /// echoed continuation token
    pub continuation_token: Option<String>,
    /// token to pass as `continuation-token` for the next page
    pub next_continuation_token: Option<String>,
    /// echoed start-after
    pub start_after: Option<String>,
    /// echoed encoding-type
    pub encoding_type: Option<String>,
}

// ---- ListMultipartUploads ----

/// One in-progress multipart upload.
#[derive(Debug, Clone)]
pub struct MultipartUpload {
    /// object key
    pub key: String,
    /// upload id
    pub upload_id: String,
    /// initiation timestamp, RFC3339
    pub initiated: Option<String>,
    /// storage class requested at initiation
    pub storage_class: Option<String>,
    /// upload initiator
    pub initiator: Option<Owner>,
    /// upload owner
    pub owner: Option<Owner>,
}

/// `ListMultipartUploads` request
#[derive(Debug, Clone, Default)]
pub struct ListMultipartUploadsRequest {
    /// bucket name
    pub bucket: String,
    /// key prefix filter
    pub prefix: Option<String>,
    /// grouping delimiter
    pub delimiter: Option<String>,
    /// key to start listing after
    pub key_marker: Option<String>,
    /// upload id to start listing after
    pub upload_id_marker: Option<String>,
    /// max uploads to return
    pub max_uploads: Option<i64>,
}

/// `ListMultipartUploads` output
#[derive(Debug, Clone, Default)]
pub struct ListMultipartUploadsOutput {
    /// bucket name
    pub bucket: Option<String>,
    /// echoed key-marker
    pub key_marker: Option<String>,
    /// echoed upload-id-marker
    pub upload_id_marker: Option<String>,
    /// next key-marker, if truncated
    pub next_key_marker: Option<String>,
    /// next upload-id-marker, if truncated
    pub next_upload_id_marker: Option<String>,
    /// echoed prefix
    pub prefix: Option<String>,
    /// echoed delimiter
    pub delimiter: Option<String>,
    /// echoed max-uploads
    pub max_uploads: Option<i64>,
    /// true if the listing was truncated
    pub is_truncated: Option<bool>,
    /// in-progress uploads
    pub uploads: Vec<MultipartUpload>,
    /// common prefixes under the delimiter
    pub common_prefixes: Vec<String>,
}

// ---- GetObject / HeadObject ----

/// `GetObject` request
#[derive(Debug, Default)]
pub struct GetObjectRequest {
    /// bucket name
    pub bucket: String,
    /// object key
    pub key: String,
    /// `Range` header, verbatim
    pub range: Option<String>,
}

/// Fields shared by `GetObject` and `HeadObject` responses.
#[derive(Debug, Default)]
pub struct ObjectMeta {
    /// user metadata
    pub metadata: UserMetadata,
    /// content length in bytes
    pub content_length: i64,
    /// `Content-Type`
    pub content_type: Option<String>,
    /// `Content-Encoding`
    pub content_encoding: Option<String>,
    /// entity tag
    pub etag: Option<String>,
    /// last modified time, RFC3339
    pub last_modified: Option<String>,
}

/// `GetObject` output
#[derive(Debug, Default)]
pub struct GetObjectOutput {
    /// shared metadata fields
    pub meta: ObjectMeta,
    /// object body stream
    pub body: Option<ByteStream>,
}

/// `HeadObject` request
#[derive(Debug, Clone)]
pub struct HeadObjectRequest {
    /// bucket name
    pub bucket: String,
    /// object key
    pub key: String,
}

/// `HeadObject` output
#[derive(Debug, Default)]
pub struct HeadObjectOutput {
    /// shared metadata fields
    pub meta: ObjectMeta,
}

// ---- GetObjectAcl / PutObjectAcl ----

/// `GetObjectAcl` request
#[derive(Debug, Clone)]
pub struct GetObjectAclRequest {
    /// bucket name
    pub bucket: String,
    /// object key
    pub key: String,
}

/// `GetObjectAcl` output
#[derive(Debug, Clone)]
pub struct GetObjectAclOutput {
    /// the object's ACL document
    pub policy: AccessControlPolicy,
}

/// `PutObjectAcl` request
#[derive(Debug, Clone)]
pub struct PutObjectAclRequest {
    /// bucket name
    pub bucket: String,
    /// object key
    pub key: String,
    /// grant parameters
    pub acl: AclParams,
}

/// `PutObjectAcl` output
#[derive(Debug, Clone, Copy, Default)]
pub struct PutObjectAclOutput {}

// ---- GetObjectAttributes ----

/// `GetObjectAttributes` request
#[derive(Debug, Clone)]
pub struct GetObjectAttributesRequest {
    /// bucket name
    pub bucket: String,
    /// object key
    pub key: String,
    /// requested attribute names, from the comma-separated
    /// `x-amz-object-attributes` header
    pub object_attributes: Vec<String>,
}

/// `GetObjectAttributes` output; only the requested attributes are `Some`.
#[derive(Debug, Clone, Default)]
pub struct GetObjectAttributesOutput {
    /// entity tag, if `ETag` was requested
    pub etag: Option<String>,
    /// size in bytes, if `ObjectSize` was requested
    pub object_size: Option<i64>,
    /// storage class, if `StorageClass` was requested
    pub storage_class: Option<String>,
    /// last modified time, RFC3339
    pub last_modified: Option<String>,
}

// ---- PutObject ----

/// `PutObject` request
#[derive(Debug)]
pub struct PutObjectRequest {
    /// bucket name
    pub bucket: String,
    /// object key
    pub key: String,
    /// `Content-Length`
    pub content_length: i64,
    /// user metadata (`x-amz-meta-*`)
    pub metadata: UserMetadata,
    /// `x-amz-acl`
    pub acl: Option<String>,
    /// `Content-Type`
    pub content_type: Option<String>,
    /// object body stream
    pub body: ByteStream,
}

/// `PutObject` output
#[derive(Debug, Clone, Default)]
pub struct PutObjectOutput {
    /// entity tag assigned by the backend
    pub etag: Option<String>,
}

// ---- CopyObject ----

/// `CopyObject` request
#[derive(Debug, Clone, Default)]
pub struct CopyObjectRequest {
    /// source bucket
    pub source_bucket: String,
    /// source key
    pub source_key: String,
    /// destination bucket
    pub bucket: String,
    /// destination key
    pub key: String,
    /// `x-amz-copy-source-if-match`
    pub copy_source_if_match: Option<String>,
    /// `x-amz-copy-source-if-none-match`
    pub copy_source_if_none_match: Option<String>,
    /// `x-amz-copy-source-if-modified-since`
    pub copy_source_if_modified_since: Option<String>,
    /// `x-amz-copy-source-if-unmodified-since`
    pub copy_source_if_unmodified_since: Option<String>,
}

/// `CopyObject` output
#[derive(Debug, Clone, Default)]
pub struct CopyObjectOutput {
    /// entity tag of the copy
    pub etag: Option<String>,
    /// last modified time of the copy, RFC3339
    pub last_modified: Option<String>,
}

// ---- DeleteObject / DeleteObjects ----

/// `DeleteObject` request
#[derive(Debug, Clone, Default)]
pub struct DeleteObjectRequest {
    /// bucket name
    pub bucket: String,
    /// object key
    pub key: String,
    /// specific version to delete
    pub version_id: Option<String>,
}

/// `DeleteObject` output
#[derive(Debug, Clone, Default)]
pub struct DeleteObjectOutput {
    /// true if the delete created a delete marker
    pub delete_marker: Option<bool>,
    /// version id removed or marked deleted
    pub version_id: Option<String>,
}

/// One entry of a `DeleteObjects` request.
#[derive(Debug, Clone)]
pub struct ObjectIdentifier {
    /// object key
    pub key: String,
    /// specific version to delete
    pub version_id: Option<String>,
}

/// `DeleteObjects` request
#[derive(Debug, Clone, Default)]
pub struct DeleteObjectsRequest {
    /// bucket name
    pub bucket: String,
    /// keys (and optional versions) to delete
    pub objects: Vec<ObjectIdentifier>,
    /// suppress per-key success entries in the response
    pub quiet: bool,
}

/// A successfully deleted object, as echoed by `DeleteObjects`.
#[derive(Debug, Clone)]
pub struct DeletedObject {
    /// object key
    pub key: String,
    /// version id removed, if versioned
    pub version_id: Option<String>,
    /// true if the delete created a delete marker
    pub delete_marker: Option<bool>,
}

/// A per-key failure, as echoed by `DeleteObjects`.
#[derive(Debug, Clone)]
pub struct DeleteError {
    /// object key
    pub key: String,
    /// version id, if any
    pub version_id: Option<String>,
    /// S3 error code string
    pub code: String,
    /// human-readable message
    pub message: String,
}

/// `DeleteObjects` output
#[derive(Debug, Clone, Default)]
pub struct DeleteObjectsOutput {
    /// successfully deleted objects
    pub deleted: Vec<DeletedObject>,
    /// per-key failures
    pub errors: Vec<DeleteError>,
}

// ---- Multipart upload lifecycle ----

/// `CreateMultipartUpload` request
#[derive(Debug, Clone, Default)]
pub struct CreateMultipartUploadRequest {
    /// bucket name
    pub bucket: String,
    /// object key
    pub key: String,
    /// user metadata to carry onto the completed object
    pub metadata: UserMetadata,
    /// `Content-Type` to carry onto the completed object
    pub content_type: Option<String>,
}

/// `CreateMultipartUpload` output
#[derive(Debug, Clone, Default)]
pub struct CreateMultipartUploadOutput {
    /// bucket name
    pub bucket: Option<String>,
    /// object key
    pub key: Option<String>,
    /// assigned upload id
    pub upload_id: Option<String>,
}

/// `UploadPart` (`PutObjectPart`) request
#[derive(Debug)]
pub struct UploadPartRequest {
    /// bucket name
    pub bucket: String,
    /// object key
    pub key: String,
    /// upload id from `CreateMultipartUpload`
    pub upload_id: String,
    /// client-chosen part number, &ge; 1
    pub part_number: i64,
    /// `Content-Length`
    pub content_length: i64,
    /// part body stream
    pub body: ByteStream,
}

/// `UploadPart` output
#[derive(Debug, Clone, Default)]
pub struct UploadPartOutput {
    /// entity tag assigned to the part
    pub etag: Option<String>,
}

/// One entry of a `ListObjectParts` response.
#[derive(Debug, Clone)]
pub struct Part {
    /// part number
    pub part_number: i64,
    /// entity tag
    pub etag: Option<String>,
    /// last modified time, RFC3339
    pub last_modified: Option<String>,
    /// size in bytes
    pub size: i64,
}

/// `ListObjectParts` request
#[derive(Debug, Clone, Default)]
pub struct ListObjectPartsRequest {
    /// bucket name
    pub bucket: String,
    /// object key
    pub key: String,
    /// upload id
    pub upload_id: String,
    /// part number to start listing after
    pub part_number_marker: Option<i64>,
    /// max parts to return
    pub max_parts: Option<i64>,
}

/// `ListObjectParts` output
#[derive(Debug, Clone, Default)]
pub struct ListObjectPartsOutput {
    /// bucket name
    pub bucket: Option<String>,
    /// object key
    pub key: Option<String>,
    /// upload id
    pub upload_id: Option<String>,
    /// echoed part-number-marker
    pub part_number_marker: Option<i64>,
    /// next part-number-marker, if truncated
    pub next_part_number_marker: Option<i64>,
    /// echoed max-parts
    pub max_parts: Option<i64>,
    /// true if the listing was truncated
    pub is_truncated: Option<bool>,
    /// uploaded parts
    pub parts: Vec<Part>,
    /// upload initiator
    pub initiator: Option<Owner>,
    /// upload owner
    pub owner: Option<Owner>,
    /// storage class requested at initiation
    pub storage_class: Option<String>,
}

/// One entry of a `CompleteMultipartUpload` request body.
#[derive(Debug, Clone)]
pub struct CompletedPart {
    /// part number
    pub part_number: i64,
    /// entity tag the client observed from `PutObjectPart`
    pub etag: String,
}

/// `CompleteMultipartUpload` request
#[derive(Debug, Clone, Default)]
pub struct CompleteMultipartUploadRequest {
    /// bucket name
    pub bucket: String,
    /// object key
    pub key: String,
    /// upload id
    pub upload_id: String,
    /// parts in the order they should be assembled
    pub parts: Vec<CompletedPart>,
}

/// `CompleteMultipartUpload` output
#[derive(Debug, Clone, Default)]
pub struct CompleteMultipartUploadOutput {
    /// bucket name
    pub bucket: Option<String>,
    /// object key
    pub key: Option<String>,
    /// object location
    pub location: Option<String>,
    /// entity tag of the assembled object
    pub etag: Option<String>,
}

/// `AbortMultipartUpload` request
#[derive(Debug, Clone, Default)]
pub struct AbortMultipartUploadRequest {
    /// bucket name
    pub bucket: String,
    /// object key
    pub key: String,
    /// upload id
    pub upload_id: String,
}

/// `AbortMultipartUpload` output
#[derive(Debug, Clone, Copy, Default)]
pub struct AbortMultipartUploadOutput {}

// ---- RestoreObject ----

/// `RestoreObject` request
#[derive(Debug, Clone, Default)]
pub struct RestoreObjectRequest {
    /// bucket name
    pub bucket: String,
    /// object key
    pub key: String,
    /// number of days the restored copy should remain available
    pub days: Option<i64>,
    /// restore tier (e.g. `Standard`, `Expedited`, `Bulk`)
    pub tier: Option<String>,
}

/// `RestoreObject` output
#[derive(Debug, Clone, Copy, Default)]
pub struct RestoreObjectOutput {}

/// Inbound XML wire types, kept separate from the DTOs above because their
/// field names and shapes are dictated by the S3 XML schema, not by
/// anything the backend needs to see.
pub(crate) mod xml {
    use serde::Deserialize;

    /// `<Delete>` request body for batch `DeleteObjects`
    #[derive(Debug, Deserialize)]
    pub(crate) struct Delete {
        /// `Quiet` flag
        #[serde(rename = "Quiet", default)]
        pub(crate) quiet: bool,
        /// `<Object>` entries
        #[serde(rename = "Object", default)]
        pub(crate) objects: Vec<ObjectIdentifier>,
    }

    /// one `<Object>` entry of a `<Delete>` body
    #[derive(Debug, Deserialize)]
    pub(crate) struct ObjectIdentifier {
        /// `Key`
        #[serde(rename = "Key")]
        pub(crate) key: String,
        /// `VersionId`
        #[serde(rename = "VersionId", default)]
        pub(crate) version_id: Option<String>,
    }

    impl From<Delete> for super::DeleteObjectsRequest {
        fn from(d: Delete) -> Self {
            Self {
                bucket: String::new(),
                quiet: d.quiet,
                objects: d
                    .objects
                    .into_iter()
                    .map(|o| super::ObjectIdentifier {
                        key: o.key,
                        version_id: o.version_id,
                    })
                    .collect(),
            }
        }
    }

    /// `<CompleteMultipartUpload>` request body
    #[derive(Debug, Deserialize)]
    pub(crate) struct CompletedMultipartUpload {
        /// `<Part>` entries, in client-submitted order
        #[serde(rename = "Part", default)]
        pub(crate) parts: Vec<CompletedPart>,
    }

    /// one `<Part>` entry of a `<CompleteMultipartUpload>` body
    #[derive(Debug, Deserialize)]
    pub(crate) struct CompletedPart {
        /// `PartNumber`
        #[serde(rename = "PartNumber")]
        pub(crate) part_number: i64,
        /// `ETag`
        #[serde(rename = "ETag")]
        pub(crate) etag: String,
    }

    impl From<CompletedMultipartUpload> for Vec<super::CompletedPart> {
        fn from(body: CompletedMultipartUpload) -> Self {
            body.parts
                .into_iter()
                .map(|p| super::CompletedPart {
                    part_number: p.part_number,
                    etag: p.etag,
                })
                .collect()
        }
    }

    /// `<RestoreRequest>` request body
    #[derive(Debug, Deserialize)]
    pub(crate) struct RestoreRequest {
        /// `Days`
        #[serde(rename = "Days", default)]
        pub(crate) days: Option<i64>,
        /// `GlacierJobParameters/Tier`
        #[serde(rename = "GlacierJobParameters", default)]
        pub(crate) glacier_job_parameters: Option<GlacierJobParameters>,
    }

    /// `<GlacierJobParameters>` nested in `<RestoreRequest>`
    #[derive(Debug, Deserialize)]
    pub(crate) struct GlacierJobParameters {
        /// `Tier`
        #[serde(rename = "Tier")]
        pub(crate) tier: String,
    }
}
