//! Strict decoding of a single JSON document into a [`Shape`].
//!
//! Decoding runs in two passes over the body:
//!
//! 1. the first JSON value is scanned without being materialized, so that syntax errors anywhere
//!    in it are reported before any type error, together with the byte offset they were detected at
//! 2. the scanned value is decoded into the target, tracking the path of the value being decoded
//!    and every key the target does not declare
//!
//! Whatever follows the first value must be whitespace. A number or literal directly followed by
//! other characters, such as `1x` or `truex`, is a complete value with trailing content.
//!
//! Offsets are byte counts: a fault detected while reading the byte at index `i` is reported at
//! position `i + 1`, and a type mismatch is reported at the offset right after the offending value.
//!
//! Keys are matched exactly, case included: `{"STR": ..}` does not fill a field named `str`, it is
//! an unknown field. Strings must be valid UTF-8, invalid bytes are a syntax fault and are never
//! replaced. A number too large for the field it targets, such as `1e400` for an `f64`, is a type
//! mismatch.

use crate::config::JsonConfig;
use crate::error::DecodeError;
use crate::shape::Shape;
use crate::utils::ensure;
use serde::de::IgnoredAny;
use serde_json::error::Category;
use serde_path_to_error::{Path, Segment};
use std::io::Read;

/// Decodes `bytes` into `T`.
///
/// # Example
/// ```
/// # use serde::Deserialize;
/// # use strict_json::{decode, DecodeError, JsonConfig, Shape};
/// #[derive(Deserialize, Debug)]
/// struct Login {
///     user: String,
/// }
///
/// impl Shape for Login {}
///
/// let login: Login = decode(br#"{"user": "zava"}"#, &JsonConfig::default()).unwrap();
/// assert_eq!(login.user, "zava");
///
/// let error = decode::<Login>(br#"{"user": "zava", "admin": true}"#, &JsonConfig::default()).unwrap_err();
/// assert!(matches!(error, DecodeError::UnknownField { name } if name == "admin"));
/// ```
pub fn decode<T: Shape>(bytes: &[u8], config: &JsonConfig) -> Result<T, DecodeError> {
    ensure!(!is_blank(bytes), DecodeError::EmptyBody);

    let end = scan_first_value(bytes)?;
    let value = decode_value::<T>(&bytes[..end], config)?;

    ensure!(is_blank(&bytes[end..]), DecodeError::TrailingContent);
    Ok(value)
}

/// Reads `reader` to its end, then decodes what was read into `T`.
///
/// The reader is consumed once, front to back. When the config carries a limit, at most one byte
/// past it is read before the body is rejected. Read failures are internal errors.
pub fn decode_reader<T: Shape, R: Read>(mut reader: R, config: &JsonConfig) -> Result<T, DecodeError> {
    let mut buf = Vec::new();

    match config.max_size() {
        Some(limit) => {
            let read = (&mut reader)
                .take((limit as u64).saturating_add(1))
                .read_to_end(&mut buf)
                .map_err(DecodeError::internal)?;
            ensure!(read <= limit, DecodeError::TooLarge { limit });
        }
        None => {
            reader.read_to_end(&mut buf).map_err(DecodeError::internal)?;
        }
    }

    decode(&buf, config)
}

/// JSON insignificant whitespace, as defined by RFC 8259.
#[inline]
fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

#[inline]
fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| is_whitespace(b))
}

/// Checks the syntax of the first value and returns the offset right after it.
fn scan_first_value(bytes: &[u8]) -> Result<usize, DecodeError> {
    let mut stream = serde_json::Deserializer::from_slice(bytes).into_iter::<IgnoredAny>();

    match stream.next() {
        Some(Ok(_)) => Ok(stream.byte_offset()),
        // the error points one past the first trailing byte, which is where the value ended
        Some(Err(e)) if message_of(&e) == "trailing characters" => {
            Ok(offset_of(bytes, e.line(), e.column()).saturating_sub(1))
        }
        Some(Err(e)) => Err(classify_syntax(bytes, e)),
        None => Err(DecodeError::EmptyBody),
    }
}

fn classify_syntax(input: &[u8], e: serde_json::Error) -> DecodeError {
    match e.classify() {
        Category::Eof => DecodeError::TruncatedSyntax,
        Category::Syntax => DecodeError::syntax(offset_of(input, e.line(), e.column())),
        Category::Io | Category::Data => DecodeError::internal(e),
    }
}

fn decode_value<T: Shape>(value: &[u8], config: &JsonConfig) -> Result<T, DecodeError> {
    let mut unknown_field: Option<String> = None;
    let mut deserializer = serde_json::Deserializer::from_slice(value);

    let result = {
        let mut on_ignored = |path: serde_ignored::Path<'_>| {
            if unknown_field.is_none() {
                unknown_field = Some(match path {
                    serde_ignored::Path::Map { key, .. } => key,
                    other => other.to_string(),
                });
            }
        };
        let tracked = serde_ignored::Deserializer::new(&mut deserializer, &mut on_ignored);
        serde_path_to_error::deserialize::<_, T>(tracked)
    };

    // an ignored key is recorded before any later failure aborts decoding, so it comes first
    if let Some(name) = unknown_field.filter(|_| config.denies_unknown_fields()) {
        return Err(DecodeError::UnknownField { name });
    }

    result.map_err(|e| classify_data::<T>(value, e))
}

fn classify_data<T: Shape>(input: &[u8], e: serde_path_to_error::Error<serde_json::Error>) -> DecodeError {
    let field = declared_path::<T>(e.path());
    let inner = e.into_inner();

    match inner.classify() {
        Category::Data => {
            let message = message_of(&inner);

            if let Some(name) = unknown_field_name(&message) {
                return DecodeError::unknown_field(name);
            }

            if let Some(name) = missing_field_name(&message) {
                return DecodeError::missing_field(join_field::<T>(&field, name));
            }

            DecodeError::type_mismatch(field, offset_of(input, inner.line(), inner.column()))
        }
        Category::Eof => DecodeError::TruncatedSyntax,
        // the syntax is already checked, only the value itself can be out of range here
        Category::Syntax if message_of(&inner) == "number out of range" => {
            DecodeError::type_mismatch(field, offset_of(input, inner.line(), inner.column()))
        }
        Category::Syntax => DecodeError::syntax(offset_of(input, inner.line(), inner.column())),
        Category::Io => DecodeError::internal(inner),
    }
}

/// Converts a 1-based line and a byte column into a byte offset into `input`.
fn offset_of(input: &[u8], line: usize, column: usize) -> usize {
    let line_start = match line {
        0 | 1 => 0,
        line => input
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b == b'\n')
            .nth(line - 2)
            .map_or(input.len(), |(index, _)| index + 1),
    };

    line_start + column
}

/// Renders the path of a failing value as dotted declared names.
///
/// Sequence indices are not part of a field name and are skipped.
fn declared_path<T: Shape>(path: &Path) -> String {
    let mut rendered = String::new();

    for segment in path.iter() {
        match segment {
            Segment::Map { key } => push_declared::<T>(&mut rendered, key),
            Segment::Enum { variant } => push_key(&mut rendered, variant),
            Segment::Seq { .. } => {}
            Segment::Unknown => push_key(&mut rendered, "?"),
        }
    }

    rendered
}

fn join_field<T: Shape>(parent: &str, name: &str) -> String {
    let mut joined = parent.to_owned();
    push_declared::<T>(&mut joined, name);
    joined
}

fn push_declared<T: Shape>(rendered: &mut String, wire_key: &str) {
    let name = T::declared_name(rendered.as_str(), wire_key).unwrap_or(wire_key);
    push_key(rendered, name);
}

fn push_key(rendered: &mut String, key: &str) {
    if !rendered.is_empty() {
        rendered.push('.');
    }
    rendered.push_str(key);
}

/// The error message without the position suffix serde_json appends to it.
fn message_of(e: &serde_json::Error) -> String {
    let message = e.to_string();
    if e.line() == 0 {
        return message;
    }

    let suffix = format!(" at line {} column {}", e.line(), e.column());
    if let Some(stripped) = message.strip_suffix(&suffix) {
        return stripped.to_owned();
    }
    message
}

/// Extracts the key of serde's "unknown field `...`, expected ..." messages.
fn unknown_field_name(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("unknown field `")?;
    rest.rsplit_once("`, expected")
        .or_else(|| rest.rsplit_once("`, there are no fields"))
        .map(|(name, _)| name)
}

/// Extracts the field of serde's "missing field `...`" messages.
fn missing_field_name(message: &str) -> Option<&str> {
    message.strip_prefix("missing field `")?.strip_suffix('`')
}
