//! Dispatch priority-ladder tests.
//!
//! These exercise `S3Service::hyper_call` end to end against an in-memory
//! `S3Storage` double, asserting which backend operation the dispatcher
//! picked (not backend semantics, which the double does not implement).

mod common;

use common::{body_string, req, req_with_body, with_header, MockStorage, Op, UnreachableStorage};

use s3_gateway_core::S3Service;

use hyper::{Method, StatusCode};

#[tokio::test]
async fn list_objects_v2_scenario() {
    // 1. GET /b1?list-type=2&prefix=p&max-keys=100
    let storage = MockStorage::new();
    let service = S3Service::new(storage);

    let r = req(Method::GET, "http://localhost/b1?list-type=2&prefix=p&max-keys=100");
    let res = service.hyper_call(r).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        service.as_ref().take_one_call(),
        Op::ListObjectsV2 { bucket: "b1".into() }
    );
}

#[tokio::test]
async fn copy_object_scenario() {
    // 2. PUT /b1/k1 with X-Amz-Copy-Source: src/obj/sub
    let storage = MockStorage::new();
    let service = S3Service::new(storage);

    let r = req(Method::PUT, "http://localhost/b1/k1");
    let r = with_header(r, "x-amz-copy-source", "src/obj/sub");
    let res = service.hyper_call(r).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        service.as_ref().take_one_call(),
        Op::CopyObject { bucket: "b1".into(), key: "k1".into() }
    );
}

#[tokio::test]
async fn upload_part_scenario() {
    // 3. PUT /b1/k1?uploadId=U&partNumber=3, body "abc", Content-Length: 3
    let storage = MockStorage::new();
    let service = S3Service::new(storage);

    let r = req_with_body(Method::PUT, "http://localhost/b1/k1?uploadId=U&partNumber=3", "abc");
    let r = with_header(r, "content-length", "3");
    let res = service.hyper_call(r).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        service.as_ref().take_one_call(),
        Op::UploadPart {
            bucket: "b1".into(),
            key: "k1".into(),
            upload_id: "U".into(),
            part_number: 3,
        }
    );
}

#[tokio::test]
async fn abort_multipart_upload_scenario() {
    // 4. DELETE /b1/k1?uploadId=U
    let storage = MockStorage::new();
    let service = S3Service::new(storage);

    let r = req(Method::DELETE, "http://localhost/b1/k1?uploadId=U");
    let res = service.hyper_call(r).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        service.as_ref().take_one_call(),
        Op::AbortMultipartUpload {
            bucket: "b1".into(),
            key: "k1".into(),
            upload_id: "U".into(),
        }
    );
}

#[tokio::test]
async fn invalid_max_parts_rejected_before_backend() {
    // 5. GET /b1/k1?max-parts=-1&uploadId=U -> 400 InvalidMaxParts, no backend call
    let service = S3Service::new(UnreachableStorage);

    let r = req(Method::GET, "http://localhost/b1/k1?max-parts=-1&uploadId=U");
    let res = service.hyper_call(r).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = body_string(res).await;
    assert!(body.contains("InvalidMaxParts"), "body was: {}", body);
}

#[tokio::test]
async fn acl_canned_and_grant_conflict_rejected_before_backend() {
    // 6. PUT /b1 with X-Amz-Acl: private and X-Amz-Grant-Read: id=alice -> protocol error, no backend call
    let service = S3Service::new(UnreachableStorage);

    let r = req(Method::PUT, "http://localhost/b1");
    let r = with_header(r, "x-amz-acl", "private");
    let r = with_header(r, "x-amz-grant-read", "id=alice");
    let res = service.hyper_call(r).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = body_string(res).await;
    assert!(body.contains("InvalidRequest"), "body was: {}", body);
}

#[tokio::test]
async fn list_buckets_at_root() {
    let storage = MockStorage::new();
    let service = S3Service::new(storage);

    let r = req(Method::GET, "http://localhost/");
    let res = service.hyper_call(r).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(service.as_ref().take_one_call(), Op::ListBuckets);
}

#[tokio::test]
async fn put_bucket_acl_wins_over_create_bucket() {
    let storage = MockStorage::new();
    let service = S3Service::new(storage);

    let r = req(Method::PUT, "http://localhost/b1");
    let r = with_header(r, "x-amz-acl", "public-read");
    let res = service.hyper_call(r).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        service.as_ref().take_one_call(),
        Op::PutBucketAcl { bucket: "b1".into(), owner: None }
    );
}

#[tokio::test]
async fn plain_put_bucket_creates() {
    let storage = MockStorage::new();
    let service = S3Service::new(storage);

    let body = "<CreateBucketConfiguration><LocationConstraint>us-west-2</LocationConstraint></CreateBucketConfiguration>";
    let r = req_with_body(Method::PUT, "http://localhost/b1", body);
    let res = service.hyper_call(r).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        service.as_ref().take_one_call(),
        Op::CreateBucket { bucket: "b1".into(), owner: None }
    );
}

#[tokio::test]
async fn create_bucket_picks_up_principal_from_request_extensions() {
    // The authenticated principal is injected by upstream middleware into
    // the request's extensions map, not parsed from a header here.
    let storage = MockStorage::new();
    let service = S3Service::new(storage);

    let mut r = req(Method::PUT, "http://localhost/b1");
    r.extensions_mut().insert(s3_gateway_core::Principal("alice".into()));
    let res = service.hyper_call(r).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        service.as_ref().take_one_call(),
        Op::CreateBucket { bucket: "b1".into(), owner: Some("alice".into()) }
    );
}

#[tokio::test]
async fn put_bucket_acl_picks_up_principal_from_request_extensions() {
    let storage = MockStorage::new();
    let service = S3Service::new(storage);

    let mut r = req(Method::PUT, "http://localhost/b1");
    r.extensions_mut().insert(s3_gateway_core::Principal("alice".into()));
    let r = with_header(r, "x-amz-acl", "public-read");
    let res = service.hyper_call(r).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        service.as_ref().take_one_call(),
        Op::PutBucketAcl { bucket: "b1".into(), owner: Some("alice".into()) }
    );
}

#[tokio::test]
async fn get_bucket_acl_wins_over_list_objects() {
    let storage = MockStorage::new();
    let service = S3Service::new(storage);

    let r = req(Method::GET, "http://localhost/b1?acl");
    let res = service.hyper_call(r).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        service.as_ref().take_one_call(),
        Op::GetBucketAcl { bucket: "b1".into() }
    );
}

#[tokio::test]
async fn list_multipart_uploads_wins_over_list_objects() {
    let storage = MockStorage::new();
    let service = S3Service::new(storage);

    let r = req(Method::GET, "http://localhost/b1?uploads");
    let res = service.hyper_call(r).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        service.as_ref().take_one_call(),
        Op::ListMultipartUploads { bucket: "b1".into() }
    );
}

#[tokio::test]
async fn plain_list_objects_v1_is_default() {
    let storage = MockStorage::new();
    let service = S3Service::new(storage);

    let r = req(Method::GET, "http://localhost/b1");
    let res = service.hyper_call(r).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        service.as_ref().take_one_call(),
        Op::ListObjects { bucket: "b1".into() }
    );
}

#[tokio::test]
async fn list_object_parts_wins_over_get_object() {
    let storage = MockStorage::new();
    let service = S3Service::new(storage);

    let r = req(Method::GET, "http://localhost/b1/k1?uploadId=U");
    let res = service.hyper_call(r).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        service.as_ref().take_one_call(),
        Op::ListObjectParts { bucket: "b1".into(), key: "k1".into(), upload_id: "U".into() }
    );
}

#[tokio::test]
async fn get_object_acl_wins_over_get_object() {
    let storage = MockStorage::new();
    let service = S3Service::new(storage);

    let r = req(Method::GET, "http://localhost/b1/k1?acl");
    let res = service.hyper_call(r).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        service.as_ref().take_one_call(),
        Op::GetObjectAcl { bucket: "b1".into(), key: "k1".into() }
    );
}

#[tokio::test]
async fn get_object_attributes_wins_over_get_object() {
    let storage = MockStorage::new();
    let service = S3Service::new(storage);

    let r = req(Method::GET, "http://localhost/b1/k1");
    let r = with_header(r, "x-amz-object-attributes", "ETag");
    let res = service.hyper_call(r).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        service.as_ref().take_one_call(),
        Op::GetObjectAttributes { bucket: "b1".into(), key: "k1".into() }
    );
}

#[tokio::test]
async fn plain_get_object_is_default() {
    let storage = MockStorage::new();
    let service = S3Service::new(storage);

    let r = req(Method::GET, "http://localhost/b1/k1");
    let res = service.hyper_call(r).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        service.as_ref().take_one_call(),
        Op::GetObject { bucket: "b1".into(), key: "k1".into() }
    );
}

#[tokio::test]
async fn restore_object_scenario() {
    let storage = MockStorage::new();
    let service = S3Service::new(storage);

    let body = "<RestoreRequest><Days>1</Days></RestoreRequest>";
    let r = req_with_body(Method::POST, "http://localhost/b1/k1?restore", body);
    let res = service.hyper_call(r).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        service.as_ref().take_one_call(),
        Op::RestoreObject { bucket: "b1".into(), key: "k1".into() }
    );
}

#[tokio::test]
async fn complete_multipart_upload_scenario() {
    let storage = MockStorage::new();
    let service = S3Service::new(storage);

    let body = concat!(
        "<CompleteMultipartUpload>",
        "<Part><PartNumber>1</PartNumber><ETag>\"abc\"</ETag></Part>",
        "</CompleteMultipartUpload>"
    );
    let r = req_with_body(Method::POST, "http://localhost/b1/k1?uploadId=U", body);
    let res = service.hyper_call(r).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        service.as_ref().take_one_call(),
        Op::CompleteMultipartUpload { bucket: "b1".into(), key: "k1".into(), upload_id: "U".into() }
    );
}

#[tokio::test]
async fn plain_post_creates_multipart_upload() {
    let storage = MockStorage::new();
    let service = S3Service::new(storage);

    let r = req(Method::POST, "http://localhost/b1/k1");
    let res = service.hyper_call(r).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        service.as_ref().take_one_call(),
        Op::CreateMultipartUpload { bucket: "b1".into(), key: "k1".into() }
    );
}

#[tokio::test]
async fn post_on_bucket_is_not_supported() {
    let service = S3Service::new(UnreachableStorage);

    let r = req(Method::POST, "http://localhost/b1");
    let res = service.hyper_call(r).await;

    assert_eq!(res.status(), StatusCode::NOT_IMPLEMENTED);
}

#[tokio::test]
async fn delete_objects_batch_uses_delete_method() {
    // spec.md's explicit, deliberate deviation: batch delete is DELETE + ?delete, not POST.
    let storage = MockStorage::new();
    let service = S3Service::new(storage);

    let body = concat!(
        "<Delete><Object><Key>a</Key></Object><Object><Key>b</Key></Object></Delete>"
    );
    let r = req_with_body(Method::DELETE, "http://localhost/b1?delete", body);
    let res = service.hyper_call(r).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        service.as_ref().take_one_call(),
        Op::DeleteObjects { bucket: "b1".into() }
    );
}

#[tokio::test]
async fn plain_delete_bucket() {
    let storage = MockStorage::new();
    let service = S3Service::new(storage);

    let r = req(Method::DELETE, "http://localhost/b1");
    let res = service.hyper_call(r).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        service.as_ref().take_one_call(),
        Op::DeleteBucket { bucket: "b1".into() }
    );
}

#[tokio::test]
async fn head_bucket_and_head_object() {
    let storage = MockStorage::new();
    let service = S3Service::new(storage);

    let res = service
        .hyper_call(req(Method::HEAD, "http://localhost/b1"))
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        service.as_ref().take_one_call(),
        Op::HeadBucket { bucket: "b1".into() }
    );

    let res = service
        .hyper_call(req(Method::HEAD, "http://localhost/b1/k1"))
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        service.as_ref().take_one_call(),
        Op::HeadObject { bucket: "b1".into(), key: "k1".into() }
    );
}

#[tokio::test]
async fn head_and_delete_on_root_are_not_supported() {
    let service = S3Service::new(UnreachableStorage);

    let res = service.hyper_call(req(Method::HEAD, "http://localhost/")).await;
    assert_eq!(res.status(), StatusCode::NOT_IMPLEMENTED);

    let res = service.hyper_call(req(Method::DELETE, "http://localhost/")).await;
    assert_eq!(res.status(), StatusCode::NOT_IMPLEMENTED);

    let res = service.hyper_call(req(Method::PUT, "http://localhost/")).await;
    assert_eq!(res.status(), StatusCode::NOT_IMPLEMENTED);
}

#[tokio::test]
async fn unsupported_method_is_rejected() {
    let service = S3Service::new(UnreachableStorage);

    let r = req(Method::PATCH, "http://localhost/b1/k1");
    let res = service.hyper_call(r).await;

    assert_eq!(res.status(), StatusCode::NOT_IMPLEMENTED);
}
