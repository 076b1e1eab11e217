//! Response handling module that converts handler results into HTTP responses.
//!
//! This module provides the [`Responder`] trait which defines how different types
//! can be converted into HTTP responses. Besides the common types like Result, Option and
//! String, [`DecodeError`] renders a rejected body as `{"error": "<message>"}`.

use crate::RequestContext;
use crate::body::ResponseBody;
use crate::error::DecodeError;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Response, StatusCode};
use std::convert::Infallible;
use tracing::debug;

/// A trait for types that can be converted into HTTP responses.
pub trait Responder {
    fn response_to(self, req: &RequestContext<'_>) -> Response<ResponseBody>;
}

/// The Ok and Err variants must both implement Responder.
impl<T: Responder, E: Responder> Responder for Result<T, E> {
    fn response_to(self, req: &RequestContext<'_>) -> Response<ResponseBody> {
        match self {
            Ok(t) => t.response_to(req),
            Err(e) => e.response_to(req),
        }
    }
}

/// None case returns an empty response.
impl<T: Responder> Responder for Option<T> {
    fn response_to(self, req: &RequestContext<'_>) -> Response<ResponseBody> {
        match self {
            Some(t) => t.response_to(req),
            None => Response::new(ResponseBody::empty()),
        }
    }
}

/// Pre-built responses pass through, their body converted to [`ResponseBody`].
impl<B> Responder for Response<B>
where
    B: Into<ResponseBody>,
{
    fn response_to(self, _req: &RequestContext<'_>) -> Response<ResponseBody> {
        self.map(Into::into)
    }
}

/// Sets the status code along with the response content.
impl<T: Responder> Responder for (StatusCode, T) {
    fn response_to(self, req: &RequestContext<'_>) -> Response<ResponseBody> {
        let (status, responder) = self;
        let mut response = responder.response_to(req);
        *response.status_mut() = status;
        response
    }
}

impl Responder for () {
    fn response_to(self, _req: &RequestContext<'_>) -> Response<ResponseBody> {
        Response::new(ResponseBody::empty())
    }
}

impl Responder for &'static str {
    fn response_to(self, _req: &RequestContext<'_>) -> Response<ResponseBody> {
        text_response(ResponseBody::from(self))
    }
}

impl Responder for String {
    fn response_to(self, _req: &RequestContext<'_>) -> Response<ResponseBody> {
        text_response(ResponseBody::from(self))
    }
}

impl Responder for Infallible {
    fn response_to(self, _req: &RequestContext<'_>) -> Response<ResponseBody> {
        match self {}
    }
}

/// Renders the rejection as `{"error": "<message>"}`.
///
/// Internal failures only get the generic status text, their cause was logged when they occurred.
impl Responder for DecodeError {
    fn response_to(self, req: &RequestContext<'_>) -> Response<ResponseBody> {
        let status = self.status();
        debug!(
            status = status.as_u16(),
            reason = %self.message(),
            method = %req.method(),
            uri = %req.uri(),
            "rejected request body"
        );

        let body = serde_json::json!({ "error": self.message() }).to_string();

        let mut response = Response::new(ResponseBody::from(body));
        *response.status_mut() = status;
        response.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        response
    }
}

fn text_response(body: ResponseBody) -> Response<ResponseBody> {
    let mut response = Response::new(body);
    response.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"));
    response
}
