//! Types which can be converted into a response, and the two response
//! writers every dispatcher handler goes through.

use crate::errors::{S3Error, S3ErrorCode, S3Result, XmlErrorResponse};
use crate::utils::{ResponseExt, XmlWriterExt};
use crate::{BoxStdError, Response};

use hyper::{Body, StatusCode};

/// Types which can be converted into a response
pub trait S3Output {
    /// Try to convert into a response
    ///
    /// # Errors
    /// Returns an `Err` if the output can not be converted into a response
    fn try_into_response(self) -> S3Result<Response>;
}

/// helper function for error converting: runs `f` against a freshly created,
/// empty-body response, wrapping any failure as `S3ErrorCode::InternalError`
pub(crate) fn wrap_output(f: impl FnOnce(&mut Response) -> Result<(), BoxStdError>) -> S3Result<Response> {
    let mut res = Response::new(Body::empty());
    match f(&mut res) {
        Ok(()) => Ok(res),
        Err(e) => Err(internal_error!(e)),
    }
}

impl S3Output for XmlErrorResponse {
    fn try_into_response(self) -> S3Result<Response> {
        wrap_output(|res| {
            let status = self
                .code
                .as_status_code()
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            res.set_status(status);

            res.set_xml_body(64, |w| {
                w.stack("Error", |w| {
                    w.element("Code", self.code.as_static_str())?;
                    w.opt_element("Message", self.message)?;
                    w.opt_element("Resource", self.resource)?;
                    w.opt_element("RequestId", self.request_id)?;
                    Ok(())
                })
            })?;

            Ok(())
        })
    }
}

/// Render an `S3Error` as a response, logging unexpected internal errors.
///
/// This is the path `S3Service::hyper_call` falls back to when dispatch
/// itself fails before reaching an `S3Output` impl.
pub(crate) fn render_error(err: S3Error) -> Response {
    if matches!(err.code(), S3ErrorCode::InternalError) {
        tracing::error!("{}", err);
    }

    err.into_xml_response()
        .try_into_response()
        .unwrap_or_else(|e| {
            // rendering the error document itself failed; fall back to a bare 500
            tracing::error!("failed to render error response: {}", e);
            Response::new_with_status(Body::empty(), StatusCode::INTERNAL_SERVER_ERROR)
        })
}

/// The only way a dispatcher handler may produce an empty-body response.
///
/// On `Ok`, status 200 with an empty body. On `Err`, the corresponding error
/// document (see `S3ErrorCode::as_status_code`/`as_static_str`).
#[must_use]
pub fn send_response(result: S3Result<()>) -> Response {
    match result {
        Ok(()) => Response::new_with_status(Body::empty(), StatusCode::OK),
        Err(e) => render_error(e),
    }
}

/// The only way a dispatcher handler may produce an XML-body response.
///
/// On `Ok(Some(value))`, marshals `value` via its `S3Output` impl. On
/// `Ok(None)`, an empty-body 200. On `Err`, the corresponding error document.
#[must_use]
pub fn send_xml_response<T: S3Output>(result: S3Result<Option<T>>) -> Response {
    match result {
        Ok(Some(value)) => value.try_into_response().unwrap_or_else(render_error),
        Ok(None) => Response::new_with_status(Body::empty(), StatusCode::OK),
        Err(e) => render_error(e),
    }
}

impl<T: S3Output> S3Output for S3Result<T> {
    fn try_into_response(self) -> S3Result<Response> {
        match self {
            Ok(output) => output.try_into_response(),
            Err(err) => Err(err),
        }
    }
}
