//! [`ListBuckets`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListBuckets.html)

use crate::dto::ListBucketsOutput;
use crate::errors::S3Result;
use crate::output::{wrap_output, S3Output};
use crate::utils::{ResponseExt, XmlWriterExt};
use crate::Response;

impl S3Output for ListBucketsOutput {
    fn try_into_response(self) -> S3Result<Response> {
        wrap_output(|res| {
            res.set_xml_body(4096, |w| {
                w.stack("ListAllMyBucketsResult", |w| {
                    w.stack("Buckets", |w| {
                        for bucket in self.buckets {
                            w.stack("Bucket", |w| {
                                w.opt_element("Name", Some(bucket.name))?;
                                w.opt_element("CreationDate", bucket.creation_date)
                            })?;
                        }
                        Ok(())
                    })?;

                    w.opt_stack("Owner", self.owner, |w, owner| {
                        w.opt_element("ID", Some(owner.id))?;
                        w.opt_element("DisplayName", owner.display_name)
                    })?;
                    Ok(())
                })
            })
        })
    }
}
