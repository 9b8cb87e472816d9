//! Transpose GPS tracks onto images.
//!
//! A track recorded by a GPS receiver is a sequence of longitude, latitude, and (sometimes)
//! elevation samples. This crate maps such a track onto the pixels of an image, such as a scanned
//! map or a rendered route sketch, and evens out the spacing between consecutive points.
//!
//! # Calibration
//!
//! The mapping is pinned down by two reference points whose positions are known both on the
//! globe and on the image, plus a step length in thousandths of a pixel:
//!
//! ```
//! use gps_transposer::{Calibration, GeoPoint, PixelPoint};
//!
//! let calibration = Calibration::new(
//!     PixelPoint::new(219., 686., None),
//!     PixelPoint::new(1167., 64., None),
//!     GeoPoint::new(2.42463, 39.57731, None),
//!     GeoPoint::new(3.07493, 39.90439, None),
//!     1000,
//! ).unwrap();
//! ```
//!
//! # Transposing
//!
//! Use a `Transposer` to project and resample a track:
//!
//! ```
//! use gps_transposer::{Calibration, GeoPoint, PixelPoint, Transposer};
//!
//! # let calibration = Calibration::new(
//! #     PixelPoint::new(219., 686., None),
//! #     PixelPoint::new(1167., 64., None),
//! #     GeoPoint::new(2.42463, 39.57731, None),
//! #     GeoPoint::new(3.07493, 39.90439, None),
//! #     1000,
//! # ).unwrap();
//! let track = vec![calibration.geo_start(), calibration.geo_end()];
//! let transposer = Transposer::new(calibration);
//! let points = transposer.transpose(&track).unwrap();
//! assert_eq!(PixelPoint::new(1167., 64., None), *points.last().unwrap());
//! ```
//!
//! An empty track transposes to an empty list of points:
//!
//! ```
//! # use gps_transposer::{Calibration, GeoPoint, PixelPoint, Transposer};
//! # let calibration = Calibration::new(
//! #     PixelPoint::new(219., 686., None),
//! #     PixelPoint::new(1167., 64., None),
//! #     GeoPoint::new(2.42463, 39.57731, None),
//! #     GeoPoint::new(3.07493, 39.90439, None),
//! #     1000,
//! # ).unwrap();
//! assert!(gps_transposer::transpose(&[], &calibration).unwrap().is_empty());
//! ```
//!
//! # GPX
//!
//! With the `gpx` feature (on by default) tracks can be read straight from GPX documents, and
//! with the `serde` feature (also on by default) the result can be written as JSON:
//!
//! ```
//! # #[cfg(all(feature = "gpx", feature = "serde"))]
//! # {
//! # use gps_transposer::{Calibration, GeoPoint, PixelPoint, Transposer};
//! # let calibration = Calibration::new(
//! #     PixelPoint::new(0., 0., None),
//! #     PixelPoint::new(100., 100., None),
//! #     GeoPoint::new(0., 1., None),
//! #     GeoPoint::new(1., 0., None),
//! #     1000,
//! # ).unwrap();
//! let xml = r#"<gpx><trk><trkseg>
//!     <trkpt lat="1" lon="0"/>
//!     <trkpt lat="1" lon="0.015"/>
//! </trkseg></trk></gpx>"#;
//! let json = Transposer::new(calibration).transpose_gpx_to_json(xml).unwrap();
//! assert!(json.starts_with(r#"[{"x":0.0,"y":0.0,"elevation":null}"#));
//! # }
//! ```

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

#[cfg(feature = "gpx")]
pub mod gpx;
#[cfg(feature = "serde")]
pub mod json;
pub mod projection;
pub mod resample;

mod bounds;
mod calibration;
mod error;
mod point;
mod transform;
mod vector;

pub use bounds::Bounds;
pub use calibration::{Calibration, DEFAULT_STEP};
pub use error::Error;
pub use point::{GeoPoint, PixelPoint};
pub use projection::Projection;
pub use resample::{Resampler, Summary};
pub use transform::Transform;
pub use vector::{Axis, Vector};

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Projects and resamples tracks with one calibration.
///
/// Every call derives its own projection from the track it is given, so one transposer can be
/// reused for any number of tracks.
#[derive(Clone, Copy, Debug)]
pub struct Transposer {
    calibration: Calibration,
}

impl Transposer {
    /// Creates a new transposer.
    pub fn new(calibration: Calibration) -> Transposer {
        Transposer { calibration }
    }

    /// Returns this transposer's calibration.
    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Transposes a track into evenly spaced pixel points.
    ///
    /// An empty track yields an empty list.
    pub fn transpose(&self, points: &[GeoPoint]) -> Result<Vec<PixelPoint>> {
        self.transpose_with_summary(points).map(|(points, _)| points)
    }

    /// Transposes a track, also returning a summary of the resampling.
    pub fn transpose_with_summary(
        &self,
        points: &[GeoPoint],
    ) -> Result<(Vec<PixelPoint>, Summary)> {
        if points.is_empty() {
            return Ok((Vec::new(), Summary::default()));
        }
        let projection = Projection::derive(points, &self.calibration)?;
        Ok(Resampler::new(&projection, &self.calibration).resample_with_summary(points))
    }

    /// Reads the track points of a GPX document and transposes them.
    ///
    /// Unlike [gpx::parse_lenient], a document that cannot be parsed is an error.
    #[cfg(feature = "gpx")]
    pub fn transpose_gpx(&self, xml: &str) -> Result<Vec<PixelPoint>> {
        let points = gpx::parse(xml)?;
        self.transpose(&points)
    }

    /// Reads the track points of a GPX document, transposes them, and writes them as JSON.
    #[cfg(all(feature = "gpx", feature = "serde"))]
    pub fn transpose_gpx_to_json(&self, xml: &str) -> Result<String> {
        json::to_string(&self.transpose_gpx(xml)?)
    }
}

/// Transposes a track with the given calibration.
///
/// Shorthand for `Transposer::new(*calibration).transpose(points)`.
pub fn transpose(points: &[GeoPoint], calibration: &Calibration) -> Result<Vec<PixelPoint>> {
    Transposer::new(*calibration).transpose(points)
}
