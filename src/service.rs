//! Generic S3 service which wraps a S3 storage backend and dispatches
//! incoming requests to it.
//!
//! One handler per HTTP method, each following the strict priority ladder
//! the S3 wire protocol requires: the first matching rule wins and no
//! further rules apply. See the per-method doc comments below for the
//! exact ladder each one runs.

use crate::dto::*;
use crate::headers::{X_AMZ_COPY_SOURCE, X_AMZ_OBJECT_ATTRIBUTES};
use crate::ops;
use crate::path::S3Path;
use crate::query::Query;
use crate::storage::S3Storage;
use crate::utils::RequestExt;
use crate::{
    errors::{S3Error, S3ErrorCode, S3Result},
    BoxStdError,
};
use crate::{output::S3Output, Request, Response};

use std::{
    convert::Infallible,
    ops::Deref,
    sync::Arc,
    task::{Context, Poll},
};

use futures::future::BoxFuture;
use hyper::header::AsHeaderName;
use hyper::{Body, Method};

/// Generic S3 service which wraps a S3 storage backend.
#[derive(Debug)]
pub struct S3Service<T> {
    /// inner storage
    storage: T,
}

/// Shared S3 service, cheaply cloneable for handing to `hyper`.
#[derive(Debug)]
pub struct SharedS3Service<T> {
    /// inner service
    inner: Arc<S3Service<T>>,
}

impl<T> S3Service<T> {
    /// Constructs a S3 service
    pub const fn new(storage: T) -> Self {
        Self { storage }
    }

    /// convert `S3Service<T>` to `SharedS3Service<T>`
    pub fn into_shared(self) -> SharedS3Service<T> {
        SharedS3Service {
            inner: Arc::new(self),
        }
    }
}

impl<T> AsRef<T> for S3Service<T> {
    fn as_ref(&self) -> &T {
        &self.storage
    }
}

impl<T> Deref for SharedS3Service<T> {
    type Target = S3Service<T>;
    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl<T> Clone for SharedS3Service<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> hyper::service::Service<Request> for SharedS3Service<T>
where
    T: S3Storage + Send + Sync + 'static,
{
    type Response = Response;

    type Error = Infallible;

    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let service = self.clone();
        Box::pin(async move { Ok(service.hyper_call(req).await) })
    }
}

/// reads the authenticated principal upstream middleware injected into the
/// request's extensions map, if any
fn extract_principal(req: &Request) -> Option<Principal> {
    req.extensions().get::<Principal>().cloned()
}

/// helper function for parsing request path
fn parse_path(req: &Request) -> S3Result<S3Path<'_>> {
    S3Path::try_from_path(req.uri().path()).map_err(|e| {
        S3Error::from_code(S3ErrorCode::InvalidURI)
            .message("invalid request path")
            .source(e)
            .finish()
    })
}

/// reads a header as `&str`, converting a non-ASCII value into a protocol error
/// rather than the raw `ToStrError`
fn get_header_str<'a>(req: &'a Request, name: impl AsHeaderName) -> S3Result<Option<&'a str>> {
    req.get_header_str(name).map_err(|e| {
        S3Error::from_code(S3ErrorCode::InvalidRequest)
            .message("header value is not valid ASCII")
            .source(e)
            .finish()
    })
}

/// splits a request into its header/method/uri parts and its body, so an
/// `ops::*::extract` can read headers while a body is consumed separately
fn split_body(req: Request) -> (Request, Body) {
    let (parts, body) = req.into_parts();
    (Request::from_parts(parts, Body::empty()), body)
}

/// Turns an `ops::*::extract` failure into a protocol error.
///
/// Some `extract` functions already build an `S3Error` themselves (to pick
/// a specific catalog code, e.g. `InvalidMaxParts`); this recovers that
/// exact error instead of flattening everything to `InvalidRequest`.
fn protocol_error(e: BoxStdError) -> S3Error {
    match e.downcast::<S3Error>() {
        Ok(err) => *err,
        Err(e) => S3Error::from_code(S3ErrorCode::InvalidRequest)
            .message("invalid request")
            .source(e)
            .finish(),
    }
}

impl<T> S3Service<T>
where
    T: S3Storage + Send + Sync + 'static,
{
    /// Call the s3 service with `hyper::Request<hyper::Body>`
    pub async fn hyper_call(&self, req: Request) -> Response {
        let method = req.method().clone();
        let uri = req.uri().clone();
        tracing::debug!("{} {}", method, uri);

        let principal = extract_principal(&req);
        match self.handle(req, principal).await {
            Ok(resp) => resp,
            Err(err) => {
                tracing::error!("{} {} => error: {}", method, uri, err);
                crate::output::render_error(err)
            }
        }
    }

    /// dispatch on HTTP method
    async fn handle(&self, req: Request, principal: Option<Principal>) -> S3Result<Response> {
        match *req.method() {
            Method::GET => self.handle_get(req).await,
            Method::POST => self.handle_post(req).await,
            Method::PUT => self.handle_put(req, principal).await,
            Method::DELETE => self.handle_delete(req).await,
            Method::HEAD => self.handle_head(req).await,
            _ => Err(S3Error::from_code(S3ErrorCode::NotSupported)
                .message(format!("unsupported method: {}", req.method()))
                .finish()),
        }
    }

    /// **GET**: object-scope ladder (`ListObjectParts` / `GetObjectAcl` /
    /// `GetObjectAttributes` / `GetObject`), bucket-scope ladder
    /// (`GetBucketAcl` / `ListMultipartUploads` / `ListObjectsV2` /
    /// `ListObjects`), root (`ListBuckets`).
    async fn handle_get(&self, req: Request) -> S3Result<Response> {
        match parse_path(&req)? {
            S3Path::Root => self
                .storage
                .list_buckets(ListBucketsRequest {})
                .await
                .try_into_response(),

            S3Path::Bucket { bucket } => {
                let query = req.extract_query::<Query>()?.unwrap_or_default();

                if query.acl.is_some() {
                    let input = ops::get_bucket_acl::extract(bucket).map_err(protocol_error)?;
                    return self.storage.get_bucket_acl(input).await.try_into_response();
                }

                if query.uploads.is_some() {
                    let input = ops::list_multipart_uploads::extract(Some(query), bucket)
                        .map_err(protocol_error)?;
                    return self
                        .storage
                        .list_multipart_uploads(input)
                        .await
                        .try_into_response();
                }

                if query.list_type == Some(2) {
                    let input =
                        ops::list_objects_v2::extract(query, bucket).map_err(protocol_error)?;
                    return self
                        .storage
                        .list_objects_v2(input)
                        .await
                        .try_into_response();
                }

                let input =
                    ops::list_objects::extract(Some(query), bucket).map_err(protocol_error)?;
                self.storage.list_objects(input).await.try_into_response()
            }

            S3Path::Object { bucket, key } => {
                let query = req.extract_query::<Query>()?.unwrap_or_default();

                if let Some(upload_id) = query.upload_id.clone() {
                    let input = ops::list_object_parts::extract(&query, bucket, key, upload_id)
                        .map_err(protocol_error)?;
                    return self
                        .storage
                        .list_object_parts(input)
                        .await
                        .try_into_response();
                }

                if query.acl.is_some() {
                    let input =
                        ops::get_object_acl::extract(bucket, key).map_err(protocol_error)?;
                    return self.storage.get_object_acl(input).await.try_into_response();
                }

                if get_header_str(&req, &*X_AMZ_OBJECT_ATTRIBUTES)?.is_some() {
                    let input = ops::get_object_attributes::extract(&req, bucket, key)
                        .map_err(protocol_error)?;
                    return self
                        .storage
                        .get_object_attributes(input)
                        .await
                        .try_into_response();
                }

                let input = ops::get_object::extract(&req, bucket, key).map_err(protocol_error)?;
                self.storage.get_object(input).await.try_into_response()
            }
        }
    }

    /// **POST** (`CreateActions`), object-scope only: `RestoreObject`
    /// (`?restore`), `CompleteMultipartUpload` (`?uploadId`), else
    /// `CreateMultipartUpload`.
    async fn handle_post(&self, req: Request) -> S3Result<Response> {
        match parse_path(&req)? {
            S3Path::Root | S3Path::Bucket { .. } => {
                Err(S3Error::from_code(S3ErrorCode::NotSupported)
                    .message("POST is only supported on an object")
                    .finish())
            }
            S3Path::Object { bucket, key } => {
                let bucket = bucket.to_owned();
                let key = key.to_owned();
                let query = req.extract_query::<Query>()?.unwrap_or_default();
                let (req, body) = split_body(req);

                if query.restore.is_some() {
                    let input = ops::restore_object::extract(body, &bucket, &key)
                        .await
                        .map_err(protocol_error)?;
                    return self
                        .storage
                        .restore_object(input)
                        .await
                        .try_into_response();
                }

                if let Some(upload_id) = query.upload_id {
                    let input =
                        ops::complete_multipart_upload::extract(body, &bucket, &key, upload_id)
                            .await
                            .map_err(protocol_error)?;
                    return self
                        .storage
                        .complete_multipart_upload(input)
                        .await
                        .try_into_response();
                }

                let input = ops::create_multipart_upload::extract(&req, &bucket, &key)
                    .map_err(protocol_error)?;
                self.storage
                    .create_multipart_upload(input)
                    .await
                    .try_into_response()
            }
        }
    }

    /// **PUT**: bucket ladder (`PutBucketAcl` vs `PutBucket`, rejecting a
    /// request that carries both a canned ACL and grant headers), object
    /// ladder (`PutObjectPart`, `PutObjectAcl`, `CopyObject`, `PutObject`).
    async fn handle_put(&self, req: Request, principal: Option<Principal>) -> S3Result<Response> {
        match parse_path(&req)? {
            S3Path::Root => Err(S3Error::from_code(S3ErrorCode::NotSupported)
                .message("PUT is not supported on the service root")
                .finish()),

            S3Path::Bucket { bucket } => {
                let bucket = bucket.to_owned();

                let acl = crate::headers::acl::extract(&req).map_err(protocol_error)?;
                if acl.canned_acl.is_some() || acl.has_grants() {
                    crate::headers::acl::check_exclusive(&acl)?;
                    let input = ops::put_bucket_acl::extract(&req, &bucket, principal.as_ref())
                        .map_err(protocol_error)?;
                    return self.storage.put_bucket_acl(input).await.try_into_response();
                }

                let (req, body) = split_body(req);
                let input = ops::create_bucket::extract(&req, body, &bucket, principal.as_ref())
                    .await
                    .map_err(protocol_error)?;
                self.storage.create_bucket(input).await.try_into_response()
            }

            S3Path::Object { bucket, key } => {
                let bucket = bucket.to_owned();
                let key = key.to_owned();

                let query = req.extract_query::<Query>()?.unwrap_or_default();

                if let (Some(upload_id), Some(part_number_str)) =
                    (query.upload_id.clone(), query.part_number.clone())
                {
                    let part_number: i64 = part_number_str.parse().map_err(|e| {
                        S3Error::from_code(S3ErrorCode::InvalidPart)
                            .message("partNumber must be an integer")
                            .source(e)
                            .finish()
                    })?;
                    if part_number < 1 {
                        return Err(S3Error::from_code(S3ErrorCode::InvalidPart)
                            .message("partNumber must be >= 1")
                            .finish());
                    }

                    let (req, body) = split_body(req);
                    let input = ops::upload_part::extract(
                        &req,
                        &bucket,
                        &key,
                        part_number,
                        upload_id,
                        body,
                    )
                    .map_err(protocol_error)?;
                    return self.storage.upload_part(input).await.try_into_response();
                }

                let acl = crate::headers::acl::extract(&req).map_err(protocol_error)?;
                if acl.canned_acl.is_some() || acl.has_grants() {
                    crate::headers::acl::check_exclusive(&acl)?;
                    let input = ops::put_object_acl::extract(&req, &bucket, &key)
                        .map_err(protocol_error)?;
                    return self.storage.put_object_acl(input).await.try_into_response();
                }

                if let Some(copy_source) = get_header_str(&req, &*X_AMZ_COPY_SOURCE)? {
                    let input = ops::copy_object::extract(&req, &bucket, &key, copy_source)
                        .map_err(protocol_error)?;
                    return self.storage.copy_object(input).await.try_into_response();
                }

                let (req, body) = split_body(req);
                let input = ops::put_object::extract(&req, body, &bucket, &key)
                    .map_err(protocol_error)?;
                self.storage.put_object(input).await.try_into_response()
            }
        }
    }

    /// **DELETE**: bucket, bucket batch-delete (`?delete`, XML body), object
    /// ladder (`AbortMultipartUpload` vs `DeleteObject`).
    async fn handle_delete(&self, req: Request) -> S3Result<Response> {
        match parse_path(&req)? {
            S3Path::Root => Err(S3Error::from_code(S3ErrorCode::NotSupported)
                .message("DELETE is not supported on the service root")
                .finish()),

            S3Path::Bucket { bucket } => {
                let bucket = bucket.to_owned();
                let query = req.extract_query::<Query>()?.unwrap_or_default();

                if query.delete.is_some() {
                    let (_req, body) = split_body(req);
                    let input = ops::delete_objects::extract(body, &bucket)
                        .await
                        .map_err(protocol_error)?;
                    return self.storage.delete_objects(input).await.try_into_response();
                }

                let input = ops::delete_bucket::extract(&bucket).map_err(protocol_error)?;
                self.storage.delete_bucket(input).await.try_into_response()
            }

            S3Path::Object { bucket, key } => {
                let query = req.extract_query::<Query>()?.unwrap_or_default();

                if let Some(upload_id) = query.upload_id {
                    let input = ops::abort_multipart_upload::extract(bucket, key, upload_id)
                        .map_err(protocol_error)?;
                    return self
                        .storage
                        .abort_multipart_upload(input)
                        .await
                        .try_into_response();
                }

                let input =
                    ops::delete_object::extract(&req, bucket, key).map_err(protocol_error)?;
                self.storage.delete_object(input).await.try_into_response()
            }
        }
    }

    /// **HEAD**: bucket (`HeadBucket`) or object (`HeadObject`).
    async fn handle_head(&self, req: Request) -> S3Result<Response> {
        match parse_path(&req)? {
            S3Path::Root => Err(S3Error::from_code(S3ErrorCode::NotSupported)
                .message("HEAD is not supported on the service root")
                .finish()),

            S3Path::Bucket { bucket } => {
                let input = ops::head_bucket::extract(bucket).map_err(protocol_error)?;
                self.storage.head_bucket(input).await.try_into_response()
            }

            S3Path::Object { bucket, key } => {
                let input = ops::head_object::extract(bucket, key).map_err(protocol_error)?;
                self.storage.head_object(input).await.try_into_response()
            }
        }
    }
}
