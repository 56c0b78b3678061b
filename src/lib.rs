#![forbid(unsafe_code)]
#![deny(
    // The following are allowed by default lints according to
    // https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html
    anonymous_parameters,
    bare_trait_objects,
    // box_pointers,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    missing_debug_implementations,
    // missing_docs, // TODO: add documents
    single_use_lifetimes,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unstable_features,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results,
    variant_size_differences,

    // Deny all Clippy lints even Clippy allow some by default
    // https://rust-lang.github.io/rust-clippy/master/
    clippy::all,
    clippy::restriction,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]
#![allow(
    // Some explicitly allowed Clippy lints, must have clear reason to allow
    clippy::implicit_return, // actually omitting the return keyword is idiomatic Rust code
    clippy::missing_inline_in_public_items, // In general, it is not bad
    clippy::module_name_repetitions, // Allowed by default
)]
#![cfg_attr(test, allow(
    clippy::panic, // Panic when fatal failures occur
))]
#![allow(
    // TODO: Deny lints below
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::multiple_crate_versions
)]

#[macro_use]
mod internal_macros;

mod data_structures;
mod dto;
mod errors;
mod headers;
mod ops;
mod output;
mod path;
mod query;
mod service;
mod storage;
mod utils;

pub use errors::{S3Error, S3ErrorCode, S3Result};
pub use path::{ParseS3PathError, S3Path, S3PathErrorKind};
pub use service::{S3Service, SharedS3Service};
pub use storage::S3Storage;

pub use dto::*;
pub use output::S3Output;

/// HTTP status code, re-exported for downstream backends
pub use hyper::StatusCode;

/// incoming request type used throughout the crate
pub(crate) type Request = hyper::Request<hyper::Body>;

/// outgoing response type used throughout the crate
pub(crate) type Response = hyper::Response<hyper::Body>;

/// boxed standard error, used where the concrete error type does not matter
pub(crate) type BoxStdError = Box<dyn std::error::Error + Send + Sync + 'static>;
