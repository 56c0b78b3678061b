//! Shared test fixtures: an in-memory [`S3Storage`] double that records which
//! operation the dispatcher picked, plus small request-building helpers.

use s3_gateway_core::{
    AbortMultipartUploadOutput, AbortMultipartUploadRequest, CompleteMultipartUploadOutput,
    CompleteMultipartUploadRequest, CopyObjectOutput, CopyObjectRequest, CreateBucketOutput,
    CreateBucketRequest, CreateMultipartUploadOutput, CreateMultipartUploadRequest,
    DeleteBucketOutput, DeleteBucketRequest, DeleteObjectOutput, DeleteObjectRequest,
    DeleteObjectsOutput, DeleteObjectsRequest, GetBucketAclOutput, GetBucketAclRequest,
    GetObjectAclOutput, GetObjectAclRequest, GetObjectAttributesOutput, GetObjectAttributesRequest,
    GetObjectOutput, GetObjectRequest, HeadBucketOutput, HeadBucketRequest, HeadObjectOutput,
    HeadObjectRequest, ListBucketsOutput, ListBucketsRequest, ListMultipartUploadsOutput,
    ListMultipartUploadsRequest, ListObjectPartsOutput, ListObjectPartsRequest, ListObjectsOutput,
    ListObjectsRequest, ListObjectsV2Output, ListObjectsV2Request, PutBucketAclOutput,
    PutBucketAclRequest, PutObjectAclOutput, PutObjectAclRequest, PutObjectOutput,
    PutObjectRequest, RestoreObjectOutput, RestoreObjectRequest, UploadPartOutput,
    UploadPartRequest,
};
use s3_gateway_core::{S3Result, S3Storage};

use std::mem;
use std::sync::Mutex;

use async_trait::async_trait;
use hyper::{Body, HeaderMap, Method};

/// One call observed by [`MockStorage`], named and tagged by the identifying
/// parts of its request so a test can assert exactly one branch of the
/// priority ladder fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    ListBuckets,
    HeadBucket { bucket: String },
    CreateBucket { bucket: String, owner: Option<String> },
    DeleteBucket { bucket: String },
    PutBucketAcl { bucket: String, owner: Option<String> },
    GetBucketAcl { bucket: String },
    ListObjects { bucket: String },
    ListObjectsV2 { bucket: String },
    ListMultipartUploads { bucket: String },
    HeadObject { bucket: String, key: String },
    GetObject { bucket: String, key: String },
    GetObjectAcl { bucket: String, key: String },
    PutObjectAcl { bucket: String, key: String },
    GetObjectAttributes { bucket: String, key: String },
    PutObject { bucket: String, key: String },
    CopyObject { bucket: String, key: String },
    DeleteObject { bucket: String, key: String },
    DeleteObjects { bucket: String },
    CreateMultipartUpload { bucket: String, key: String },
    UploadPart { bucket: String, key: String, upload_id: String, part_number: i64 },
    ListObjectParts { bucket: String, key: String, upload_id: String },
    CompleteMultipartUpload { bucket: String, key: String, upload_id: String },
    AbortMultipartUpload { bucket: String, key: String, upload_id: String },
    RestoreObject { bucket: String, key: String },
}

/// A storage double: every method records an [`Op`] and returns a minimal
/// successful output. It never consults bucket/object state, so it is only
/// suited to asserting *which* operation the dispatcher chose, not backend
/// semantics.
#[derive(Debug, Default)]
pub struct MockStorage {
    calls: Mutex<Vec<Op>>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the calls observed so far, draining the log.
    pub fn take_calls(&self) -> Vec<Op> {
        mem::take(&mut *self.calls.lock().unwrap())
    }

    /// Returns the single call observed so far, panicking if it was not
    /// exactly one.
    pub fn take_one_call(&self) -> Op {
        let mut calls = self.take_calls();
        assert_eq!(calls.len(), 1, "expected exactly one storage call, got {:?}", calls);
        calls.remove(0)
    }

    fn record(&self, op: Op) {
        self.calls.lock().unwrap().push(op);
    }
}

#[async_trait]
impl S3Storage for MockStorage {
    async fn list_buckets(&self, _input: ListBucketsRequest) -> S3Result<ListBucketsOutput> {
        self.record(Op::ListBuckets);
        Ok(ListBucketsOutput::default())
    }

    async fn head_bucket(&self, input: HeadBucketRequest) -> S3Result<HeadBucketOutput> {
        self.record(Op::HeadBucket { bucket: input.bucket });
        Ok(HeadBucketOutput {})
    }

    async fn create_bucket(&self, input: CreateBucketRequest) -> S3Result<CreateBucketOutput> {
        self.record(Op::CreateBucket { bucket: input.bucket, owner: input.owner });
        Ok(CreateBucketOutput::default())
    }

    async fn delete_bucket(&self, input: DeleteBucketRequest) -> S3Result<DeleteBucketOutput> {
        self.record(Op::DeleteBucket { bucket: input.bucket });
        Ok(DeleteBucketOutput {})
    }

    async fn put_bucket_acl(&self, input: PutBucketAclRequest) -> S3Result<PutBucketAclOutput> {
        self.record(Op::PutBucketAcl { bucket: input.bucket, owner: input.owner });
        Ok(PutBucketAclOutput {})
    }

    async fn get_bucket_acl(&self, input: GetBucketAclRequest) -> S3Result<GetBucketAclOutput> {
        self.record(Op::GetBucketAcl { bucket: input.bucket });
        Ok(GetBucketAclOutput {
            policy: s3_gateway_core::AccessControlPolicy {
                owner_id: "owner".into(),
                owner_display_name: None,
                grants: Vec::new(),
            },
        })
    }

    async fn list_objects(&self, input: ListObjectsRequest) -> S3Result<ListObjectsOutput> {
        self.record(Op::ListObjects { bucket: input.bucket });
        Ok(ListObjectsOutput::default())
    }

    async fn list_objects_v2(&self, input: ListObjectsV2Request) -> S3Result<ListObjectsV2Output> {
        self.record(Op::ListObjectsV2 { bucket: input.bucket });
        Ok(ListObjectsV2Output::default())
    }

    async fn list_multipart_uploads(
        &self,
        input: ListMultipartUploadsRequest,
    ) -> S3Result<ListMultipartUploadsOutput> {
        self.record(Op::ListMultipartUploads { bucket: input.bucket });
        Ok(ListMultipartUploadsOutput::default())
    }

    async fn head_object(&self, input: HeadObjectRequest) -> S3Result<HeadObjectOutput> {
        self.record(Op::HeadObject { bucket: input.bucket, key: input.key });
        Ok(HeadObjectOutput::default())
    }

    async fn get_object(&self, input: GetObjectRequest) -> S3Result<GetObjectOutput> {
        self.record(Op::GetObject { bucket: input.bucket, key: input.key });
        Ok(GetObjectOutput::default())
    }

    async fn get_object_acl(&self, input: GetObjectAclRequest) -> S3Result<GetObjectAclOutput> {
        self.record(Op::GetObjectAcl { bucket: input.bucket, key: input.key });
        Ok(GetObjectAclOutput {
            policy: s3_gateway_core::AccessControlPolicy {
                owner_id: "owner".into(),
                owner_display_name: None,
                grants: Vec::new(),
            },
        })
    }

    async fn put_object_acl(&self, input: PutObjectAclRequest) -> S3Result<PutObjectAclOutput> {
        self.record(Op::PutObjectAcl { bucket: input.bucket, key: input.key });
        Ok(PutObjectAclOutput {})
    }

    async fn get_object_attributes(
        &self,
        input: GetObjectAttributesRequest,
    ) -> S3Result<GetObjectAttributesOutput> {
        self.record(Op::GetObjectAttributes { bucket: input.bucket, key: input.key });
        Ok(GetObjectAttributesOutput::default())
    }

    async fn put_object(&self, input: PutObjectRequest) -> S3Result<PutObjectOutput> {
        self.record(Op::PutObject { bucket: input.bucket, key: input.key });
        Ok(PutObjectOutput::default())
    }

    async fn copy_object(&self, input: CopyObjectRequest) -> S3Result<CopyObjectOutput> {
        self.record(Op::CopyObject { bucket: input.bucket, key: input.key });
        Ok(CopyObjectOutput::default())
    }

    async fn delete_object(&self, input: DeleteObjectRequest) -> S3Result<DeleteObjectOutput> {
        self.record(Op::DeleteObject { bucket: input.bucket, key: input.key });
        Ok(DeleteObjectOutput::default())
    }

    async fn delete_objects(&self, input: DeleteObjectsRequest) -> S3Result<DeleteObjectsOutput> {
        self.record(Op::DeleteObjects { bucket: input.bucket });
        Ok(DeleteObjectsOutput::default())
    }

    async fn create_multipart_upload(
        &self,
        input: CreateMultipartUploadRequest,
    ) -> S3Result<CreateMultipartUploadOutput> {
        self.record(Op::CreateMultipartUpload { bucket: input.bucket, key: input.key });
        Ok(CreateMultipartUploadOutput::default())
    }

    async fn upload_part(&self, input: UploadPartRequest) -> S3Result<UploadPartOutput> {
        self.record(Op::UploadPart {
            bucket: input.bucket,
            key: input.key,
            upload_id: input.upload_id,
            part_number: input.part_number,
        });
        Ok(UploadPartOutput::default())
    }

    async fn list_object_parts(
        &self,
        input: ListObjectPartsRequest,
    ) -> S3Result<ListObjectPartsOutput> {
        self.record(Op::ListObjectParts {
            bucket: input.bucket,
            key: input.key,
            upload_id: input.upload_id,
        });
        Ok(ListObjectPartsOutput::default())
    }

    async fn complete_multipart_upload(
        &self,
        input: CompleteMultipartUploadRequest,
    ) -> S3Result<CompleteMultipartUploadOutput> {
        self.record(Op::CompleteMultipartUpload {
            bucket: input.bucket,
            key: input.key,
            upload_id: input.upload_id,
        });
        Ok(CompleteMultipartUploadOutput::default())
    }

    async fn abort_multipart_upload(
        &self,
        input: AbortMultipartUploadRequest,
    ) -> S3Result<AbortMultipartUploadOutput> {
        self.record(Op::AbortMultipartUpload {
            bucket: input.bucket,
            key: input.key,
            upload_id: input.upload_id,
        });
        Ok(AbortMultipartUploadOutput {})
    }

    async fn restore_object(&self, input: RestoreObjectRequest) -> S3Result<RestoreObjectOutput> {
        self.record(Op::RestoreObject { bucket: input.bucket, key: input.key });
        Ok(RestoreObjectOutput {})
    }
}

/// A storage double that always fails, used to assert that the dispatcher
/// never reaches the backend when a request should be rejected at the
/// protocol layer.
#[derive(Debug, Default)]
pub struct UnreachableStorage;

macro_rules! unreachable_methods {
    ($($name:ident($input:ty) -> $output:ty;)*) => {
        $(
            async fn $name(&self, _input: $input) -> S3Result<$output> {
                panic!(concat!("dispatcher unexpectedly reached S3Storage::", stringify!($name)));
            }
        )*
    };
}

#[async_trait]
impl S3Storage for UnreachableStorage {
    unreachable_methods! {
        list_buckets(ListBucketsRequest) -> ListBucketsOutput;
        head_bucket(HeadBucketRequest) -> HeadBucketOutput;
        create_bucket(CreateBucketRequest) -> CreateBucketOutput;
        delete_bucket(DeleteBucketRequest) -> DeleteBucketOutput;
        put_bucket_acl(PutBucketAclRequest) -> PutBucketAclOutput;
        get_bucket_acl(GetBucketAclRequest) -> GetBucketAclOutput;
        list_objects(ListObjectsRequest) -> ListObjectsOutput;
        list_objects_v2(ListObjectsV2Request) -> ListObjectsV2Output;
        list_multipart_uploads(ListMultipartUploadsRequest) -> ListMultipartUploadsOutput;
        head_object(HeadObjectRequest) -> HeadObjectOutput;
        get_object(GetObjectRequest) -> GetObjectOutput;
        get_object_acl(GetObjectAclRequest) -> GetObjectAclOutput;
        put_object_acl(PutObjectAclRequest) -> PutObjectAclOutput;
        get_object_attributes(GetObjectAttributesRequest) -> GetObjectAttributesOutput;
        put_object(PutObjectRequest) -> PutObjectOutput;
        copy_object(CopyObjectRequest) -> CopyObjectOutput;
        delete_object(DeleteObjectRequest) -> DeleteObjectOutput;
        delete_objects(DeleteObjectsRequest) -> DeleteObjectsOutput;
        create_multipart_upload(CreateMultipartUploadRequest) -> CreateMultipartUploadOutput;
        upload_part(UploadPartRequest) -> UploadPartOutput;
        list_object_parts(ListObjectPartsRequest) -> ListObjectPartsOutput;
        complete_multipart_upload(CompleteMultipartUploadRequest) -> CompleteMultipartUploadOutput;
        abort_multipart_upload(AbortMultipartUploadRequest) -> AbortMultipartUploadOutput;
        restore_object(RestoreObjectRequest) -> RestoreObjectOutput;
    }
}

/// Builds a bare request with the given method and path/query, no body.
pub fn req(method: Method, uri: &str) -> hyper::Request<Body> {
    hyper::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Builds a request with a body.
pub fn req_with_body(method: Method, uri: &str, body: impl Into<Body>) -> hyper::Request<Body> {
    hyper::Request::builder()
        .method(method)
        .uri(uri)
        .body(body.into())
        .unwrap()
}

/// Reads the full response body into a `String`.
pub async fn body_string(res: hyper::Response<Body>) -> String {
    let bytes = hyper::body::to_bytes(res.into_body()).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Sets a header by raw ASCII name/value on a request that has already been built.
pub fn with_header(mut r: hyper::Request<Body>, name: &str, value: &str) -> hyper::Request<Body> {
    r.headers_mut().insert(
        hyper::header::HeaderName::from_bytes(name.as_bytes()).unwrap(),
        hyper::header::HeaderValue::from_str(value).unwrap(),
    );
    r
}

#[allow(dead_code)]
pub fn empty_headers() -> HeaderMap {
    HeaderMap::new()
}
