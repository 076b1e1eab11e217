//! Strict JSON request body decoding.
//!
//! This crate decodes the body of a request into a strongly typed [`Shape`] and, when the body
//! does not fit, rejects it with a precise message meant for the client:
//!
//! | input | status | message |
//! |-------|--------|---------|
//! | no bytes, or only whitespace | 400 | `Request body must not be empty` |
//! | invalid token | 400 | `Request body contains badly-formed JSON (at position P)` |
//! | body ends in the middle of a value | 400 | `Request body contains badly-formed JSON` |
//! | value of the wrong type | 400 | `Request body contains an invalid value for the "Field" field (at position P)` |
//! | key the shape does not declare | 400 | `Request body contains unknown field "key"` |
//! | required key absent | 400 | `Request body is missing the "Field" field` |
//! | anything after the first value | 400 | `Request body must only contain a single JSON object` |
//! | body over the configured limit | 413 | `Request body must not be larger than N bytes` |
//! | content type not json, when required | 415 | `Content-Type header is not application/json` |
//! | failure reading the body | 500 | `Internal Server Error` |
//!
//! Rejections render as `{"error": "<message>"}` through the [`Responder`] trait. Only the first
//! fault is ever reported: syntax faults in the first value come first, then type and field
//! faults in document order, then trailing content.
//!
//! Keys are matched exactly, case included, so `{"STR": ..}` is an unknown field for a shape
//! declaring `str`. Strings must be valid UTF-8: invalid bytes are badly-formed JSON, they are
//! never replaced.
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use http::{Request, StatusCode};
//! use http_body_util::Full;
//! use serde::Deserialize;
//! use strict_json::{Shape, handle_json};
//!
//! #[derive(Deserialize, Debug)]
//! struct NewUser {
//!     name: String,
//! }
//!
//! impl Shape for NewUser {}
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let body = Full::new(Bytes::from_static(br#"{"name": "zava", "admin": true}"#));
//!     let request = Request::post("/users").body(body).unwrap();
//!
//!     let response = handle_json(request, |user: NewUser| async move { format!("created {}", user.name) }).await;
//!
//!     // `admin` is not part of `NewUser`
//!     assert_eq!(response.status(), StatusCode::BAD_REQUEST);
//! }
//! ```
//!
//! # Logging
//!
//! Internal failures are logged through [`tracing`] at `error`, together with their cause, as
//! soon as they occur, whether or not the error is ever rendered. Rendering a rejection logs it
//! at `debug`. Installing a subscriber is left to the application.

mod body;
mod config;
mod decode;
mod error;
mod handler;
mod request;
mod responder;
mod shape;
mod utils;

pub mod extract;

pub use body::OptionReqBody;
pub use body::ResponseBody;
pub use config::DEFAULT_LIMIT;
pub use config::JsonConfig;
pub use decode::decode;
pub use decode::decode_reader;
pub use error::BoxError;
pub use error::DecodeError;
pub use handler::handle;
pub use handler::handle_json;
pub use request::RequestContext;
pub use responder::Responder;
pub use shape::Shape;
