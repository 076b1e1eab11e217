//! Read-only access to the head of the request whose body is being decoded.

use http::request::Parts;
use http::{Extensions, HeaderMap, Method, Uri, Version};

/// Represents the context of an HTTP request: everything but its body.
///
/// Extractors read it to find their configuration, responders read it to decide how to
/// render a response.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'req> {
    parts: &'req Parts,
}

impl<'req> RequestContext<'req> {
    pub fn new(parts: &'req Parts) -> Self {
        Self { parts }
    }

    /// Returns a reference to the underlying request parts
    pub fn parts(&self) -> &'req Parts {
        self.parts
    }

    pub fn method(&self) -> &'req Method {
        &self.parts.method
    }

    pub fn uri(&self) -> &'req Uri {
        &self.parts.uri
    }

    pub fn version(&self) -> Version {
        self.parts.version
    }

    pub fn headers(&self) -> &'req HeaderMap {
        &self.parts.headers
    }

    pub fn extensions(&self) -> &'req Extensions {
        &self.parts.extensions
    }
}
