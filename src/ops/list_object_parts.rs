//! [`ListParts`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListParts.html) (`ListObjectParts`)

use crate::dto::{ListObjectPartsOutput, ListObjectPartsRequest};
use crate::errors::{S3Error, S3ErrorCode, S3Result};
use crate::output::{wrap_output, S3Output};
use crate::query::Query;
use crate::utils::{ResponseExt, XmlWriterExt};
use crate::{BoxStdError, Response};

/// Parses a query parameter that must be a non-negative integer, a missing
/// parameter defaulting to `None` (treated as 0 by `spec.md` §4.1).
fn parse_nonnegative(raw: Option<&str>, code: S3ErrorCode, name: &str) -> Result<Option<i64>, BoxStdError> {
    let value = match raw {
        None => return Ok(None),
        Some(s) => s.parse::<i64>().ok().filter(|&n| n >= 0),
    };
    value.map(Some).ok_or_else(|| -> BoxStdError {
        Box::new(
            S3Error::from_code(code)
                .message(format!("{} must be a non-negative integer", name))
                .finish(),
        )
    })
}

/// extract operation request
pub fn extract(
    query: &Query,
    bucket: &str,
    key: &str,
    upload_id: String,
) -> Result<ListObjectPartsRequest, BoxStdError> {
    let max_parts = parse_nonnegative(query.max_parts.as_deref(), S3ErrorCode::InvalidMaxParts, "max-parts")?;

    let part_number_marker = parse_nonnegative(
        query.part_number_marker.as_deref(),
        S3ErrorCode::InvalidPartNumberMarker,
        "part-number-marker",
    )?;

    Ok(ListObjectPartsRequest {
        bucket: bucket.into(),
        key: key.into(),
        upload_id,
        max_parts,
        part_number_marker,
    })
}

impl S3Output for ListObjectPartsOutput {
    fn try_into_response(self) -> S3Result<Response> {
        wrap_output(|res| {
            res.set_xml_body(4096, |w| {
                w.stack("ListPartsResult", |w| {
                    w.opt_element("Bucket", self.bucket)?;
                    w.opt_element("Key", self.key)?;
                    w.opt_element("UploadId", self.upload_id)?;
                    w.opt_element(
                        "PartNumberMarker",
                        self.part_number_marker.map(|n| n.to_string()),
                    )?;
                    w.opt_element(
                        "NextPartNumberMarker",
                        self.next_part_number_marker.map(|n| n.to_string()),
                    )?;
                    w.opt_element("MaxParts", self.max_parts.map(|n| n.to_string()))?;
                    w.opt_element("IsTruncated", self.is_truncated.map(|b| b.to_string()))?;
                    w.opt_element("StorageClass", self.storage_class)?;
                    w.opt_stack("Initiator", self.initiator, |w, initiator| {
                        w.opt_element("ID", Some(initiator.id))?;
                        w.opt_element("DisplayName", initiator.display_name)
                    })?;
                    w.opt_stack("Owner", self.owner, |w, owner| {
                        w.opt_element("ID", Some(owner.id))?;
                        w.opt_element("DisplayName", owner.display_name)
                    })?;
                    w.iter_element(self.parts.into_iter(), |w, part| {
                        w.stack("Part", |w| {
                            w.opt_element("PartNumber", Some(part.part_number.to_string()))?;
                            w.opt_element("ETag", part.etag)?;
                            w.opt_element("LastModified", part.last_modified)?;
                            w.opt_element("Size", Some(part.size.to_string()))
                        })
                    })?;
                    Ok(())
                })
            })
        })
    }
}
