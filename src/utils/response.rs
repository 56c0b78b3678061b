//! response util

use crate::Response;
use hyper::{
    header, header::HeaderName, header::HeaderValue, header::InvalidHeaderValue, Body, StatusCode,
};
use mime::Mime;
use std::convert::TryFrom;
use xml::{
    common::XmlVersion,
    writer::{EventWriter, XmlEvent},
};

/// `ResponseExt`
pub trait ResponseExt {
    /// create response with body and status
    fn new_with_status(body: impl Into<Body>, status: StatusCode) -> Self;

    /// set status code
    fn set_status(&mut self, status: StatusCode);

    /// set optional header
    fn set_opt_header(
        &mut self,
        name: HeaderName,
        value: Option<String>,
    ) -> Result<(), InvalidHeaderValue>;

    /// set optional `Last-Modified`
    fn set_opt_last_modified(&mut self, time: Option<String>) -> Result<(), InvalidHeaderValue>;

    /// set `Content-Type` by mime
    fn set_mime(&mut self, mime: &Mime) -> Result<(), InvalidHeaderValue>;

    /// render an xml document into the response body
    ///
    /// # Errors
    /// Returns an error if the writer closure fails or the mime header is invalid
    fn set_xml_body<F>(&mut self, cap: usize, f: F) -> Result<(), crate::BoxStdError>
    where
        F: FnOnce(&mut EventWriter<&mut Vec<u8>>) -> Result<(), xml::writer::Error>;
}

impl ResponseExt for Response {
    fn new_with_status(body: impl Into<Body>, status: StatusCode) -> Self {
        let mut res = Self::new(body.into());
        *res.status_mut() = status;
        res
    }

    fn set_status(&mut self, status: StatusCode) {
        *self.status_mut() = status;
    }

    fn set_opt_header(
        &mut self,
        name: HeaderName,
        value: Option<String>,
    ) -> Result<(), InvalidHeaderValue> {
        if let Some(value) = value {
            let val = HeaderValue::try_from(value)?;
            let _ = self.headers_mut().insert(name, val);
        }
        Ok(())
    }

    fn set_opt_last_modified(&mut self, time: Option<String>) -> Result<(), InvalidHeaderValue> {
        self.set_opt_header(header::LAST_MODIFIED, time)
    }

    fn set_mime(&mut self, mime: &Mime) -> Result<(), InvalidHeaderValue> {
        let val = HeaderValue::try_from(mime.as_ref())?;
        let _ = self.headers_mut().insert(header::CONTENT_TYPE, val);
        Ok(())
    }

    fn set_xml_body<F>(&mut self, cap: usize, f: F) -> Result<(), crate::BoxStdError>
    where
        F: FnOnce(&mut EventWriter<&mut Vec<u8>>) -> Result<(), xml::writer::Error>,
    {
        let mut body = Vec::with_capacity(cap);
        {
            let mut w = EventWriter::new(&mut body);
            w.write(XmlEvent::StartDocument {
                version: XmlVersion::Version10,
                encoding: Some("UTF-8"),
                standalone: None,
            })?;

            f(&mut w)?;
        }

        *self.body_mut() = Body::from(body);
        self.set_mime(&mime::TEXT_XML)?;
        Ok(())
    }
}
