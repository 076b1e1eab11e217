//! Description of the target a request body is decoded into.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// A type a JSON request body can be decoded into.
///
/// Rejections name fields in two different ways: a type mismatch or a missing field reports the
/// field name as *declared* by the shape, while an unknown field reports the key exactly as it
/// appeared on the wire. By default the declared name is the wire key itself. Override
/// [`Shape::declared_name`] when a `#[serde(rename)]` makes the two differ, in the shape itself or
/// in any record nested in it.
///
/// # Example
/// ```
/// # use serde::Deserialize;
/// # use strict_json::Shape;
/// #[derive(Deserialize, Debug)]
/// #[allow(non_snake_case, reason = "field names are reported to clients as declared")]
/// struct CreateUser {
///     #[serde(rename = "name")]
///     Name: String,
///     #[serde(rename = "address")]
///     Address: Address,
/// }
///
/// #[derive(Deserialize, Debug)]
/// #[allow(non_snake_case, reason = "field names are reported to clients as declared")]
/// struct Address {
///     #[serde(rename = "zip")]
///     Zip: String,
/// }
///
/// impl Shape for CreateUser {
///     fn declared_name(parent: &str, wire_key: &str) -> Option<&'static str> {
///         match (parent, wire_key) {
///             ("", "name") => Some("Name"),
///             ("", "address") => Some("Address"),
///             ("Address", "zip") => Some("Zip"),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Shape: DeserializeOwned {
    /// Maps a wire key to the field name declared by the shape.
    ///
    /// `parent` is the dotted declared path of the record holding the key, empty at the top level.
    /// Array indices never appear in it: keys of the records in `items` all have the parent
    /// `Items`. Returns `None` when the wire key should be reported as is.
    fn declared_name(_parent: &str, _wire_key: &str) -> Option<&'static str> {
        None
    }
}

impl Shape for Value {}

impl<T: DeserializeOwned> Shape for Vec<T> {}

impl<V: DeserializeOwned> Shape for HashMap<String, V> {}

impl<V: DeserializeOwned> Shape for BTreeMap<String, V> {}
