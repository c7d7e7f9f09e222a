//! Objects: a typed rectangle and JSON round-tripping.
//!
//! The target type of [`from_json`] plays the role of a prototype: the
//! parsed value comes back as that type, methods included.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ExerciseError;

/// A rectangle with a width and a height.
///
/// ```
/// use kata_exercises::objects::{from_json, Rectangle};
///
/// let r: Rectangle = from_json(r#"{"width":10,"height":20}"#)?;
/// assert_eq!(r.area(), 200.0);
/// # Ok::<(), kata_exercises::ExerciseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height`.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Compact JSON for `value`.
///
/// # Errors
///
/// [`ExerciseError::Json`] if `value` cannot be represented as JSON, e.g. a
/// map with non-string keys.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ExerciseError> {
    Ok(serde_json::to_string(value)?)
}

/// Parse `json` as a `T`.
///
/// # Errors
///
/// [`ExerciseError::Json`] if `json` is malformed or does not fit `T`.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, ExerciseError> {
    Ok(serde_json::from_str(json)?)
}
