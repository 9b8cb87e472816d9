//! Crate-specific errors.

use crate::vector::Axis;

/// Crate-specific error enum.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The calibration points have no geographic span on this axis after transposition, so no
    /// scaling factor can be computed.
    #[error("the calibration points share the same transposed {axis} coordinate")]
    DivisionDegenerate {
        /// The axis with the zero span.
        axis: Axis,
    },

    /// A projection was requested for a track without any points.
    #[error("cannot derive a projection from an empty track")]
    EmptyTrack,

    /// The step length must be a positive number of milli-pixels.
    #[error("step length must be positive, got {0} milli-pixels")]
    InvalidStep(i32),

    /// A track point is missing a required attribute.
    #[cfg(feature = "gpx")]
    #[error("track point is missing the `{0}` attribute")]
    MissingAttribute(&'static str),

    /// A numeric field could not be parsed.
    #[cfg(feature = "gpx")]
    #[error("invalid {field} value: '{value}'")]
    InvalidNumber {
        /// The name of the field.
        field: &'static str,
        /// The raw text that failed to parse.
        value: String,
    },

    /// The document root is not a `gpx` element.
    #[cfg(feature = "gpx")]
    #[error("expected a gpx root element, found '{0}'")]
    UnexpectedRoot(String),

    /// [quick_xml::Error]
    #[cfg(feature = "gpx")]
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    /// [serde_json::Error]
    #[cfg(feature = "serde")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
