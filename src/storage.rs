//! Trait representing the capabilities of the Amazon S3 API at server side

use crate::dto::{
    AbortMultipartUploadOutput, AbortMultipartUploadRequest, CompleteMultipartUploadOutput,
    CompleteMultipartUploadRequest, CopyObjectOutput, CopyObjectRequest,
    CreateBucketOutput, CreateBucketRequest, CreateMultipartUploadOutput,
    CreateMultipartUploadRequest, DeleteBucketOutput, DeleteBucketRequest, DeleteObjectOutput,
    DeleteObjectRequest, DeleteObjectsOutput, DeleteObjectsRequest, GetBucketAclOutput,
    GetBucketAclRequest, GetObjectAclOutput, GetObjectAclRequest, GetObjectAttributesOutput,
    GetObjectAttributesRequest, GetObjectOutput, GetObjectRequest, HeadBucketOutput,
    HeadBucketRequest, HeadObjectOutput, HeadObjectRequest, ListBucketsOutput, ListBucketsRequest,
    ListMultipartUploadsOutput, ListMultipartUploadsRequest, ListObjectPartsOutput,
    ListObjectPartsRequest, ListObjectsOutput, ListObjectsRequest, ListObjectsV2Output,
    ListObjectsV2Request, PutBucketAclOutput, PutBucketAclRequest, PutObjectAclOutput,
    PutObjectAclRequest, PutObjectOutput, PutObjectRequest, RestoreObjectOutput,
    RestoreObjectRequest, UploadPartOutput, UploadPartRequest,
};
use crate::errors::{S3Error, S3ErrorCode, S3Result};

use async_trait::async_trait;

/// Trait representing the capabilities of the Amazon S3 API at server side.
///
/// Every method returns the unified [`S3Result`]; a backend that hits an
/// error outside the catalog should wrap it with `S3ErrorCode::InternalError`
/// (the dispatcher does the same for its own unexpected failures, see
/// `internal_error!`).
#[async_trait]
pub trait S3Storage {
    /// [`ListBuckets`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListBuckets.html)
    async fn list_buckets(&self, input: ListBucketsRequest) -> S3Result<ListBucketsOutput>;

    /// [`HeadBucket`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_HeadBucket.html)
    async fn head_bucket(&self, input: HeadBucketRequest) -> S3Result<HeadBucketOutput>;

    /// [`PutBucket`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_CreateBucket.html)
    async fn create_bucket(&self, input: CreateBucketRequest) -> S3Result<CreateBucketOutput>;

    /// [`DeleteBucket`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_DeleteBucket.html)
    async fn delete_bucket(&self, input: DeleteBucketRequest) -> S3Result<DeleteBucketOutput>;

    /// [`PutBucketAcl`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutBucketAcl.html)
    async fn put_bucket_acl(&self, input: PutBucketAclRequest) -> S3Result<PutBucketAclOutput>;

    /// [`GetBucketAcl`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetBucketAcl.html)
    async fn get_bucket_acl(&self, input: GetBucketAclRequest) -> S3Result<GetBucketAclOutput>;

    /// [`ListObjects`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListObjects.html)
    async fn list_objects(&self, input: ListObjectsRequest) -> S3Result<ListObjectsOutput>;

    /// [`ListObjectsV2`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListObjectsV2.html)
    async fn list_objects_v2(&self, input: ListObjectsV2Request) -> S3Result<ListObjectsV2Output>;

    /// [`ListMultipartUploads`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListMultipartUploads.html)
    async fn list_multipart_uploads(
        &self,
        input: ListMultipartUploadsRequest,
    ) -> S3Result<ListMultipartUploadsOutput>;

    /// [`HeadObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_HeadObject.html)
    async fn head_object(&self, input: HeadObjectRequest) -> S3Result<HeadObjectOutput>;

    /// [`GetObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetObject.html)
    async fn get_object(&self, input: GetObjectRequest) -> S3Result<GetObjectOutput>;

    /// [`GetObjectAcl`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetObjectAcl.html)
    async fn get_object_acl(&self, input: GetObjectAclRequest) -> S3Result<GetObjectAclOutput>;

    /// [`PutObjectAcl`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutObjectAcl.html)
    async fn put_object_acl(&self, input: PutObjectAclRequest) -> S3Result<PutObjectAclOutput>;

    /// [`GetObjectAttributes`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetObjectAttributes.html)
    async fn get_object_attributes(
        &self,
        input: GetObjectAttributesRequest,
    ) -> S3Result<GetObjectAttributesOutput>;

    /// [`PutObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutObject.html)
    async fn put_object(&self, input: PutObjectRequest) -> S3Result<PutObjectOutput>;

    /// [`CopyObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_CopyObject.html)
    async fn copy_object(&self, input: CopyObjectRequest) -> S3Result<CopyObjectOutput>;

    /// [`DeleteObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_DeleteObject.html)
    async fn delete_object(&self, input: DeleteObjectRequest) -> S3Result<DeleteObjectOutput>;

    /// [`DeleteObjects`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_DeleteObjects.html)
    async fn delete_objects(&self, input: DeleteObjectsRequest) -> S3Result<DeleteObjectsOutput>;

    /// [`CreateMultipartUpload`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_CreateMultipartUpload.html)
    async fn create_multipart_upload(
        &self,
        input: CreateMultipartUploadRequest,
    ) -> S3Result<CreateMultipartUploadOutput>;

    /// [`UploadPart`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_UploadPart.html) (`PutObjectPart`)
    async fn upload_part(&self, input: UploadPartRequest) -> S3Result<UploadPartOutput>;

    /// [`ListParts`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListParts.html)
    async fn list_object_parts(
        &self,
        input: ListObjectPartsRequest,
    ) -> S3Result<ListObjectPartsOutput>;

    /// [`CompleteMultipartUpload`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_CompleteMultipartUpload.html)
    async fn complete_multipart_upload(
        &self,
        input: CompleteMultipartUploadRequest,
    ) -> S3Result<CompleteMultipartUploadOutput>;

    /// [`AbortMultipartUpload`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_AbortMultipartUpload.html)
    async fn abort_multipart_upload(
        &self,
        input: AbortMultipartUploadRequest,
    ) -> S3Result<AbortMultipartUploadOutput>;

    /// [`RestoreObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_RestoreObject.html)
    ///
    /// Optional capability: the default implementation reports
    /// `NotImplemented` so backends that don't support archival tiers (e.g.
    /// a plain filesystem backend) don't need to override it.
    async fn restore_object(&self, input: RestoreObjectRequest) -> S3Result<RestoreObjectOutput> {
        let _ = input;
        Err(S3Error::from_code(S3ErrorCode::NotImplemented)
            .message("RestoreObject is not supported by this backend")
            .finish())
    }
}
