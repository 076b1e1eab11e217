use http::StatusCode;
use std::borrow::Cow;
use std::error::Error;
use thiserror::Error;
use tracing::error;

/// A boxed error as produced by body streams and readers.
pub type BoxError = Box<dyn Error + Send + Sync>;

/// Every way decoding a request body can fail.
///
/// The `Display` output of the client caused variants is the exact message sent back to the
/// client. [`DecodeError::Internal`] displays its cause so it can be logged, clients only ever
/// see [`DecodeError::message`].
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Request body must not be empty")]
    EmptyBody,

    #[error("Request body contains badly-formed JSON (at position {offset})")]
    Syntax { offset: usize },

    #[error("Request body contains badly-formed JSON")]
    TruncatedSyntax,

    #[error("Request body contains an invalid value for the {field:?} field (at position {offset})")]
    TypeMismatch { field: String, offset: usize },

    #[error("Request body contains unknown field {name:?}")]
    UnknownField { name: String },

    #[error("Request body is missing the {field:?} field")]
    MissingField { field: String },

    #[error("Request body must only contain a single JSON object")]
    TrailingContent,

    #[error("Request body must not be larger than {limit} bytes")]
    TooLarge { limit: usize },

    #[error("Content-Type header is not application/json")]
    UnsupportedMediaType,

    #[error("internal error: {source}")]
    Internal { source: BoxError },
}

impl DecodeError {
    pub fn syntax(offset: usize) -> Self {
        Self::Syntax { offset }
    }

    pub fn type_mismatch<S: ToString>(field: S, offset: usize) -> Self {
        Self::TypeMismatch { field: field.to_string(), offset }
    }

    pub fn unknown_field<S: ToString>(name: S) -> Self {
        Self::UnknownField { name: name.to_string() }
    }

    pub fn missing_field<S: ToString>(field: S) -> Self {
        Self::MissingField { field: field.to_string() }
    }

    /// Wraps a failure that is not the client's fault.
    ///
    /// The cause is logged at `error` level right away, it is never part of a response.
    pub fn internal<E: Into<BoxError>>(e: E) -> Self {
        let source = e.into();
        error!(cause = %source, "failed to decode request body");
        Self::Internal { source }
    }

    /// The status code a response rejecting the body should carry.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::EmptyBody
            | Self::Syntax { .. }
            | Self::TruncatedSyntax
            | Self::TypeMismatch { .. }
            | Self::UnknownField { .. }
            | Self::MissingField { .. }
            | Self::TrailingContent => StatusCode::BAD_REQUEST,
            Self::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message safe to hand to the client.
    pub fn message(&self) -> Cow<'static, str> {
        match self {
            Self::Internal { .. } => {
                Cow::Borrowed(StatusCode::INTERNAL_SERVER_ERROR.canonical_reason().unwrap_or("Internal Server Error"))
            }
            other => Cow::Owned(other.to_string()),
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}
