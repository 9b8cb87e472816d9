//! Write pixel points as JSON.

use crate::{PixelPoint, Result};

/// Serializes pixel points into a JSON array.
///
/// Each point becomes an object with `x`, `y`, and `elevation` members. A missing elevation is
/// written as `null`.
///
/// # Examples
///
/// ```
/// use gps_transposer::{PixelPoint, json};
/// let points = [PixelPoint::new(1., 2.5, None), PixelPoint::new(3., 4., Some(120.))];
/// assert_eq!(
///     r#"[{"x":1.0,"y":2.5,"elevation":null},{"x":3.0,"y":4.0,"elevation":120.0}]"#,
///     json::to_string(&points).unwrap()
/// );
/// ```
pub fn to_string(points: &[PixelPoint]) -> Result<String> {
    serde_json::to_string(points).map_err(Into::into)
}

/// Deserializes pixel points from a JSON array written by [to_string].
pub fn from_str(json: &str) -> Result<Vec<PixelPoint>> {
    serde_json::from_str(json).map_err(Into::into)
}
