//! [`DeleteObjects`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_DeleteObjects.html)

use crate::dto::xml::Delete;
use crate::dto::{DeleteObjectsOutput, DeleteObjectsRequest};
use crate::errors::S3Result;
use crate::output::{wrap_output, S3Output};
use crate::utils::{deserialize_xml_body, ResponseExt, XmlWriterExt};
use crate::{Body, BoxStdError};

/// extract operation request
pub async fn extract(body: Body, bucket: &str) -> Result<DeleteObjectsRequest, BoxStdError> {
    let delete: Delete = deserialize_xml_body(body).await?;
    let mut input: DeleteObjectsRequest = delete.into();
    input.bucket = bucket.into();
    Ok(input)
}

impl S3Output for DeleteObjectsOutput {
    fn try_into_response(self) -> S3Result<crate::Response> {
        wrap_output(|res| {
            res.set_xml_body(4096, |w| {
                w.stack("DeleteResult", |w| {
                    w.iter_element(self.deleted.into_iter(), |w, deleted| {
                        w.stack("Deleted", |w| {
                            w.opt_element("Key", Some(deleted.key))?;
                            w.opt_element("VersionId", deleted.version_id)?;
                            w.opt_element(
                                "DeleteMarker",
                                deleted.delete_marker.map(|b| b.to_string()),
                            )
                        })
                    })?;
                    w.iter_element(self.errors.into_iter(), |w, error| {
                        w.stack("Error", |w| {
                            w.opt_element("Key", Some(error.key))?;
                            w.opt_element("VersionId", error.version_id)?;
                            w.opt_element("Code", Some(error.code))?;
                            w.opt_element("Message", Some(error.message))
                        })
                    })?;
                    Ok(())
                })
            })?;
            Ok(())
        })
    }
}
