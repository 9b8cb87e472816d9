//! Geographic and pixel points.
//!
//! Both point types carry an optional elevation. `None` means the source did not record one,
//! which is different from an elevation of zero.

use std::fmt;

/// A geographic track point.
///
/// # Examples
///
/// ```
/// use gps_transposer::GeoPoint;
/// let point = GeoPoint::new(2.42463, 39.57731, Some(12.5));
/// assert_eq!(Some(12.5), point.elevation);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// The longitude, in decimal degrees.
    pub longitude: f64,
    /// The latitude, in decimal degrees.
    pub latitude: f64,
    /// The elevation, if recorded.
    pub elevation: Option<f64>,
}

impl GeoPoint {
    /// Creates a new geographic point.
    pub fn new(longitude: f64, latitude: f64, elevation: Option<f64>) -> GeoPoint {
        GeoPoint {
            longitude,
            latitude,
            elevation,
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(lon {}, lat {})", self.longitude, self.latitude)
    }
}

/// A point on the image, in pixels.
///
/// X grows from left to right and y grows from top to bottom.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelPoint {
    /// The horizontal position.
    pub x: f64,
    /// The vertical position.
    pub y: f64,
    /// The elevation carried over from the track, if any.
    pub elevation: Option<f64>,
}

impl PixelPoint {
    /// Creates a new pixel point.
    pub fn new(x: f64, y: f64, elevation: Option<f64>) -> PixelPoint {
        PixelPoint { x, y, elevation }
    }

    /// Returns the euclidean distance to another point, in pixels.
    ///
    /// # Examples
    ///
    /// ```
    /// use gps_transposer::PixelPoint;
    /// let a = PixelPoint::new(0., 0., None);
    /// let b = PixelPoint::new(3., 4., None);
    /// assert_eq!(5., a.distance(&b));
    /// ```
    pub fn distance(&self, other: &PixelPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for PixelPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric() {
        let a = PixelPoint::new(1., 1., None);
        let b = PixelPoint::new(4., 5., Some(3.));
        assert_eq!(5., a.distance(&b));
        assert_eq!(5., b.distance(&a));
        assert_eq!(0., a.distance(&a));
    }

    #[test]
    fn unknown_elevation_is_not_zero() {
        let unknown = GeoPoint::new(1., 2., None);
        let zero = GeoPoint::new(1., 2., Some(0.));
        assert_ne!(unknown, zero);
    }
}
