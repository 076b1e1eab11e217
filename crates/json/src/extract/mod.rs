mod extract_json;
mod from_request;

pub use from_request::FromRequest;

/// Represented as json data
///
/// when `post` as a `application/json`, we can using this struct to inject data,
/// note: the struct must impl [`Shape`](crate::Shape) and [`Send`].
///
/// Decoding is strict: an empty body, badly-formed JSON, a value of the wrong type, a key the
/// struct does not declare or anything after the first JSON value rejects the request, see
/// [`DecodeError`](crate::DecodeError) for the exact messages.
///
/// # Example
/// ```
/// # use serde::Deserialize;
/// # use strict_json::Shape;
/// # use strict_json::extract::Json;
/// # #[allow(dead_code, reason = "doc example")]
/// #[derive(Deserialize, Debug)]
/// struct Params {
///     name: String,
///     zip: String,
/// }
///
/// impl Shape for Params {}
///
/// pub async fn handle(Json(params): Json<Params>) -> String {
///     format!("received params: {:?}", params)
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}
