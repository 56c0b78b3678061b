//! utils

mod also;
mod apply;
mod request;
mod response;
mod xml;

pub use self::also::Also;
pub use self::apply::Apply;
pub use self::request::RequestExt;
pub use self::response::ResponseExt;
pub use self::xml::XmlWriterExt;

pub mod time;

use hyper::Body;
use serde::de::DeserializeOwned;

use crate::BoxStdError;

/// deserialize xml body
pub async fn deserialize_xml_body<T: DeserializeOwned>(body: Body) -> Result<T, BoxStdError> {
    let bytes = hyper::body::to_bytes(body).await?;
    let ans: T = quick_xml::de::from_reader(&*bytes)?;
    Ok(ans)
}
