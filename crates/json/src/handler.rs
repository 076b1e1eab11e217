//! Glue running an extractor and an async function over a single request.
//!
//! The function is only called when extraction succeeds; otherwise the rejection is rendered as
//! the response and the function never sees the request.

use crate::body::{OptionReqBody, ResponseBody};
use crate::error::BoxError;
use crate::extract::{FromRequest, Json};
use crate::responder::Responder;
use crate::shape::Shape;
use crate::RequestContext;
use bytes::Bytes;
use http::{Request, Response};
use http_body::Body as HttpBody;
use std::future::Future;

/// Extracts `Args` from `request`, then hands it to `f` and renders what `f` returns.
pub async fn handle<Args, B, F, Fut>(request: Request<B>, f: F) -> Response<ResponseBody>
where
    Args: FromRequest<B>,
    F: FnOnce(Args) -> Fut,
    Fut: Future,
    Fut::Output: Responder,
{
    let (parts, body) = request.into_parts();
    let req = RequestContext::new(&parts);

    match Args::from_request(&req, OptionReqBody::from(body)).await {
        Ok(args) => f(args).await.response_to(&req),
        Err(e) => e.response_to(&req),
    }
}

/// Decodes the request body strictly into `T`, then hands the value to `f`.
///
/// # Example
/// ```
/// # use bytes::Bytes;
/// # use http::{Request, StatusCode};
/// # use http_body_util::Full;
/// # use serde::Deserialize;
/// # use strict_json::{handle_json, Shape};
/// #[derive(Deserialize, Debug)]
/// struct Greeting {
///     name: String,
/// }
///
/// impl Shape for Greeting {}
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let request = Request::post("/greet").body(Full::new(Bytes::from_static(b"{\"name\": \"zava\"}"))).unwrap();
/// let response = handle_json(request, |greeting: Greeting| async move { format!("hello {}", greeting.name) }).await;
/// assert_eq!(response.status(), StatusCode::OK);
/// # }
/// ```
pub async fn handle_json<T, B, F, Fut>(request: Request<B>, f: F) -> Response<ResponseBody>
where
    T: Shape + Send + 'static,
    B: HttpBody<Data = Bytes> + Send + 'static,
    B::Error: Into<BoxError>,
    F: FnOnce(T) -> Fut,
    Fut: Future,
    Fut::Output: Responder,
{
    handle(request, |Json(value): Json<T>| f(value)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecodeError, JsonConfig};
    use http::StatusCode;
    use http_body_util::{BodyExt, Full};
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    struct Counter {
        count: u32,
    }

    impl Shape for Counter {}

    fn request(body: &'static str) -> Request<Full<Bytes>> {
        Request::post("/count").body(Full::new(Bytes::from_static(body.as_bytes()))).unwrap()
    }

    #[tokio::test]
    async fn handler_runs_on_success() {
        let response = handle_json(request(r#"{"count": 41}"#), |counter: Counter| async move {
            (StatusCode::OK, (counter.count + 1).to_string())
        })
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"42");
    }

    #[tokio::test]
    async fn handler_skipped_on_rejection() {
        let mut called = false;
        let response = handle_json(request(r#"{"count": "many"}"#), |_counter: Counter| {
            called = true;
            async {}
        })
        .await;

        assert!(!called);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn config_from_extensions() {
        let mut request = request(r#"{"count": 1, "extra": true}"#);
        request.extensions_mut().insert(JsonConfig::new().deny_unknown_fields(false));

        let response = handle_json(request, |counter: Counter| async move { counter.count.to_string() }).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn optional_extractor_never_rejects() {
        let response = handle(request(""), |counter: Option<Json<Counter>>| async move {
            match counter {
                Some(_) => "some",
                None => "none",
            }
        })
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"none");
    }

    #[tokio::test]
    async fn result_extractor_sees_rejection() {
        let response = handle(request("[]"), |counter: Result<Json<Counter>, DecodeError>| async move {
            match counter {
                Ok(_) => (StatusCode::OK, String::new()),
                Err(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.message().into_owned()),
            }
        })
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
