//! Decoding options.
//!
//! A [`JsonConfig`] can be passed explicitly to [`decode`](crate::decode) or attached to a request
//! through its extensions, where the [`Json`](crate::extract::Json) extractor picks it up:
//!
//! ```
//! # use strict_json::JsonConfig;
//! let mut request = http::Request::new(());
//! request.extensions_mut().insert(JsonConfig::new().limit(64 * 1024));
//! ```

use crate::RequestContext;
use http::HeaderMap;
use mime::Mime;

/// Default maximum size of a request body, 1 MiB.
pub const DEFAULT_LIMIT: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonConfig {
    deny_unknown_fields: bool,
    limit: Option<usize>,
    require_content_type: bool,
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self { deny_unknown_fields: true, limit: Some(DEFAULT_LIMIT), require_content_type: false }
    }
}

impl JsonConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects keys the target shape does not declare. Enabled by default.
    ///
    /// When disabled, unknown keys are skipped silently unless the target type itself carries
    /// `#[serde(deny_unknown_fields)]`.
    #[must_use]
    pub fn deny_unknown_fields(mut self, deny: bool) -> Self {
        self.deny_unknown_fields = deny;
        self
    }

    /// Caps how many body bytes are read before the request is rejected.
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Reads the body whatever its size.
    #[must_use]
    pub fn unlimited(mut self) -> Self {
        self.limit = None;
        self
    }

    /// Rejects requests whose `Content-Type` is not a json media type.
    #[must_use]
    pub fn require_content_type(mut self, require: bool) -> Self {
        self.require_content_type = require;
        self
    }

    pub fn denies_unknown_fields(&self) -> bool {
        self.deny_unknown_fields
    }

    pub fn max_size(&self) -> Option<usize> {
        self.limit
    }

    pub fn content_type_required(&self) -> bool {
        self.require_content_type
    }

    /// The config attached to the request, or the default one.
    pub fn from_request(req: &RequestContext<'_>) -> Self {
        req.extensions().get::<JsonConfig>().cloned().unwrap_or_default()
    }
}

/// Whether the headers declare `application/json` or any `application/*+json` media type.
pub(crate) fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(http::header::CONTENT_TYPE) else {
        return false;
    };

    let Ok(mime) = value.to_str().unwrap_or_default().parse::<Mime>() else {
        return false;
    };

    mime.type_() == mime::APPLICATION
        && (mime.subtype() == mime::JSON || mime.suffix().is_some_and(|suffix| suffix == mime::JSON))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn headers_with(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(http::header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn defaults() {
        let config = JsonConfig::default();

        assert!(config.denies_unknown_fields());
        assert_eq!(config.max_size(), Some(DEFAULT_LIMIT));
        assert!(!config.content_type_required());
    }

    #[test]
    fn builder() {
        let config = JsonConfig::new().deny_unknown_fields(false).limit(16).require_content_type(true);

        assert!(!config.denies_unknown_fields());
        assert_eq!(config.max_size(), Some(16));
        assert!(config.content_type_required());

        assert_eq!(config.unlimited().max_size(), None);
    }

    #[test]
    fn json_content_types() {
        assert!(is_json_content_type(&headers_with("application/json")));
        assert!(is_json_content_type(&headers_with("application/json; charset=utf-8")));
        assert!(is_json_content_type(&headers_with("application/problem+json")));

        assert!(!is_json_content_type(&headers_with("text/plain")));
        assert!(!is_json_content_type(&headers_with("application/x-www-form-urlencoded")));
        assert!(!is_json_content_type(&headers_with("not a mime")));
        assert!(!is_json_content_type(&HeaderMap::new()));
    }
}
