//! S3 operations: one module per operation, each exposing an `extract`
//! function that builds a `dto` request from the wire, plus an
//! `impl S3Output` for its response on the corresponding output type.
//!
//! `service.rs` owns the dispatch decision (which operation a request maps
//! to); these modules never decide that for themselves.

#![allow(clippy::unnecessary_wraps)]

pub mod abort_multipart_upload;
pub mod complete_multipart_upload;
pub mod copy_object;
pub mod create_bucket;
pub mod create_multipart_upload;
pub mod delete_bucket;
pub mod delete_object;
pub mod delete_objects;
pub mod get_bucket_acl;
pub mod get_object;
pub mod get_object_acl;
pub mod get_object_attributes;
pub mod head_bucket;
pub mod head_object;
pub mod list_buckets;
pub mod list_multipart_uploads;
pub mod list_object_parts;
pub mod list_objects;
pub mod list_objects_v2;
pub mod put_bucket_acl;
pub mod put_object;
pub mod put_object_acl;
pub mod restore_object;
pub mod upload_part;
