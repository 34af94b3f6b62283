//! Small value types and JSON round-trip helpers.
//!
//! The object katas: a rectangle value type with an area method, plus thin
//! wrappers over [`serde_json`] that serialize any value to JSON text and
//! revive a typed value from JSON text. The target type parameter of
//! [`from_json`] plays the role a prototype object plays in dynamic
//! languages: it decides what the parsed data becomes.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with a width and a height.
///
/// ```
/// use kata_objects::Rectangle;
///
/// let r = Rectangle::new(10.0, 20.0);
/// assert_eq!(r.width, 10.0);
/// assert_eq!(r.height, 20.0);
/// assert_eq!(r.area(), 200.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle from its width and height.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The area, `width * height`.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Serialize a value to its JSON text representation.
///
/// ```
/// assert_eq!(kata_objects::to_json(&[1, 2, 3]).unwrap(), "[1,2,3]");
/// ```
///
/// # Errors
///
/// Propagates any [`serde_json`] serialization failure, e.g. a map with
/// non-string keys.
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

/// Revive a typed value from its JSON text representation.
///
/// ```
/// use kata_objects::{Rectangle, from_json};
///
/// let r: Rectangle = from_json(r#"{"width":10,"height":20}"#).unwrap();
/// assert_eq!(r.area(), 200.0);
/// ```
///
/// # Errors
///
/// Propagates any [`serde_json`] parse or shape failure.
pub fn from_json<T: DeserializeOwned>(json: &str) -> serde_json::Result<T> {
    serde_json::from_str(json)
}
