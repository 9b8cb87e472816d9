//! Projection of geographic points onto the image.
//!
//! A projection is derived once per track:
//!
//! 1. The track's westernmost longitude and northernmost latitude are flipped onto zero.
//! 2. Each axis is scaled so the two geographic calibration points are as far apart as the two
//!    image calibration points.
//! 3. Each axis is offset so the first geographic calibration point lands on the first image
//!    calibration point.
//!
//! ```
//! use gps_transposer::{Calibration, GeoPoint, PixelPoint, Projection};
//!
//! let calibration = Calibration::new(
//!     PixelPoint::new(0., 0., None),
//!     PixelPoint::new(100., 100., None),
//!     GeoPoint::new(0., 1., None),
//!     GeoPoint::new(1., 0., None),
//!     1000,
//! ).unwrap();
//! let track = [GeoPoint::new(0., 1., None), GeoPoint::new(0.5, 0.5, Some(7.))];
//! let projection = Projection::derive(&track, &calibration).unwrap();
//! let point = projection.project(&track[1]);
//! assert_eq!(PixelPoint::new(50., 50., Some(7.)), point);
//! ```

use crate::{Axis, Bounds, Calibration, Error, GeoPoint, PixelPoint, Result, Transform, Vector};
use log::debug;

/// The flip, scale, and offset for both axes, derived from a track and its calibration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// The transform for each axis.
    pub transforms: Vector<Transform>,
}

impl Projection {
    /// Derives a projection for this track.
    ///
    /// The flip depends on the extent of the entire track, so every point that will be projected
    /// must be in `points`. Returns an error if `points` is empty or if the geographic calibration
    /// points have no span on an axis after transposition.
    ///
    /// # Examples
    ///
    /// ```
    /// use gps_transposer::{Calibration, Error, GeoPoint, PixelPoint, Projection};
    ///
    /// let calibration = Calibration::new(
    ///     PixelPoint::new(0., 0., None),
    ///     PixelPoint::new(100., 100., None),
    ///     GeoPoint::new(1., 1., None),
    ///     GeoPoint::new(1., 0., None),
    ///     1000,
    /// ).unwrap();
    /// let track = [GeoPoint::new(1., 1., None), GeoPoint::new(1., 0., None)];
    /// assert!(matches!(
    ///     Projection::derive(&track, &calibration),
    ///     Err(Error::DivisionDegenerate { .. })
    /// ));
    /// ```
    pub fn derive(points: &[GeoPoint], calibration: &Calibration) -> Result<Projection> {
        let bounds = Bounds::from_points(points).ok_or(Error::EmptyTrack)?;

        // The longitude reference is the track's minimum, not its maximum. Calibrations that
        // already exist depend on it.
        let mut transforms = Vector {
            x: Transform {
                flip: Transform::flip_against(bounds.min.x),
                scale: 1.,
                offset: 0.,
            },
            y: Transform {
                flip: Transform::flip_against(bounds.max.y),
                scale: 1.,
                offset: 0.,
            },
        };
        let first = transpose(&transforms, &calibration.geo_start());
        let last = transpose(&transforms, &calibration.geo_end());

        let img_start = calibration.img_start();
        let img_end = calibration.img_end();
        transforms.x.scale = scaling_factor(Axis::X, img_start.x - img_end.x, first.x - last.x)?;
        transforms.y.scale = scaling_factor(Axis::Y, img_start.y - img_end.y, first.y - last.y)?;
        transforms.x.offset = (img_start.x - transforms.x.dislocate(first.x)).abs();
        transforms.y.offset = (img_start.y - transforms.y.dislocate(first.y)).abs();

        let projection = Projection { transforms };
        debug!(
            "derived projection from {} points: x = {}, y = {}, elevation {:?}..{:?}",
            points.len(),
            projection.transforms.x,
            projection.transforms.y,
            bounds.min_elevation,
            bounds.max_elevation,
        );
        Ok(projection)
    }

    /// Flips a geographic point.
    ///
    /// Longitude keeps its sign; latitude is folded onto its absolute value.
    pub fn transpose(&self, point: &GeoPoint) -> Vector<f64> {
        transpose(&self.transforms, point)
    }

    /// Scales a transposed point into pixel units, without the offset.
    pub fn dislocate(&self, transposed: Vector<f64>) -> Vector<f64> {
        Vector {
            x: self.transforms.x.dislocate(transposed.x),
            y: self.transforms.y.dislocate(transposed.y),
        }
    }

    /// Projects a geographic point onto the image.
    ///
    /// The elevation is carried through unchanged.
    pub fn project(&self, point: &GeoPoint) -> PixelPoint {
        let transposed = self.transpose(point);
        PixelPoint {
            x: self.transforms.x.direct(transposed.x),
            y: self.transforms.y.direct(transposed.y),
            elevation: point.elevation,
        }
    }
}

fn transpose(transforms: &Vector<Transform>, point: &GeoPoint) -> Vector<f64> {
    Vector {
        x: transforms.x.translate(point.longitude),
        y: transforms.y.translate(point.latitude).abs(),
    }
}

fn scaling_factor(axis: Axis, pixel_span: f64, geo_span: f64) -> Result<f64> {
    let geo_span = geo_span.abs();
    if geo_span == 0. {
        return Err(Error::DivisionDegenerate { axis });
    }
    let factor = pixel_span.abs() / geo_span;
    if factor.is_finite() {
        Ok(factor)
    } else {
        Err(Error::DivisionDegenerate { axis })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn calibration() -> Calibration {
        Calibration::new(
            PixelPoint::new(219., 686., None),
            PixelPoint::new(1167., 64., None),
            GeoPoint::new(2.42463, 39.577310000000004, None),
            GeoPoint::new(3.07493, 39.90439000000001, None),
            1000,
        )
        .unwrap()
    }

    fn track() -> Vec<GeoPoint> {
        vec![
            calibration().geo_start(),
            GeoPoint::new(2.7, 39.7, Some(40.)),
            calibration().geo_end(),
        ]
    }

    #[test]
    fn empty_track() {
        assert!(matches!(
            Projection::derive(&[], &calibration()),
            Err(Error::EmptyTrack)
        ));
    }

    #[test]
    fn flips_against_min_longitude_and_max_latitude() {
        let projection = Projection::derive(&track(), &calibration()).unwrap();
        assert_eq!(-2.42463, projection.transforms.x.flip);
        assert_eq!(-39.90439000000001, projection.transforms.y.flip);
    }

    #[test]
    fn negative_longitudes_flip_positive() {
        let track = [
            GeoPoint::new(-3., 10., None),
            GeoPoint::new(-1., 12., None),
        ];
        let calibration = Calibration::new(
            PixelPoint::new(0., 0., None),
            PixelPoint::new(20., 20., None),
            track[0],
            track[1],
            1000,
        )
        .unwrap();
        let projection = Projection::derive(&track, &calibration).unwrap();
        assert_eq!(3., projection.transforms.x.flip);
        assert_eq!(-12., projection.transforms.y.flip);
        assert_eq!(10., projection.transforms.x.scale);
        assert_eq!(10., projection.transforms.y.scale);
    }

    #[test]
    fn latitude_is_folded_longitude_is_not() {
        let projection = Projection::derive(&track(), &calibration()).unwrap();
        let transposed = projection.transpose(&GeoPoint::new(2., 39.5, None));
        assert!(transposed.x < 0.);
        assert!(transposed.y > 0.);
    }

    #[test]
    fn dislocate_scales_without_offset() {
        let projection = Projection {
            transforms: Vector {
                x: Transform {
                    flip: -1.,
                    scale: 10.,
                    offset: 5.,
                },
                y: Transform {
                    flip: -2.,
                    scale: 4.,
                    offset: 3.,
                },
            },
        };
        let transposed = projection.transpose(&GeoPoint::new(0.5, 1.5, None));
        assert_eq!(-0.5, transposed.x);
        assert_eq!(0.5, transposed.y);
        let dislocated = projection.dislocate(transposed);
        assert_eq!(-5., dislocated.x);
        assert_eq!(2., dislocated.y);
        assert_eq!(
            PixelPoint::new(10., 5., None),
            projection.project(&GeoPoint::new(0.5, 1.5, None))
        );
    }

    #[test]
    fn calibration_points_land_on_image_points() {
        let calibration = calibration();
        let projection = Projection::derive(&track(), &calibration).unwrap();
        let start = projection.project(&calibration.geo_start());
        let end = projection.project(&calibration.geo_end());
        assert_relative_eq!(219., start.x, epsilon = 1e-9);
        assert_relative_eq!(686., start.y, epsilon = 1e-9);
        assert_relative_eq!(1167., end.x, epsilon = 1e-9);
        assert_relative_eq!(64., end.y, epsilon = 1e-9);
    }

    #[test]
    fn elevation_is_carried_through() {
        let projection = Projection::derive(&track(), &calibration()).unwrap();
        assert_eq!(Some(40.), projection.project(&track()[1]).elevation);
        assert_eq!(None, projection.project(&track()[0]).elevation);
    }

    #[test]
    fn degenerate_latitude() {
        let calibration = Calibration::new(
            PixelPoint::new(0., 0., None),
            PixelPoint::new(10., 10., None),
            GeoPoint::new(1., 5., None),
            GeoPoint::new(2., 5., None),
            1000,
        )
        .unwrap();
        let track = [calibration.geo_start(), calibration.geo_end()];
        assert!(matches!(
            Projection::derive(&track, &calibration),
            Err(Error::DivisionDegenerate { axis: Axis::Y })
        ));
    }

    #[test]
    fn degenerate_longitude() {
        let calibration = Calibration::new(
            PixelPoint::new(0., 0., None),
            PixelPoint::new(10., 10., None),
            GeoPoint::new(1., 5., None),
            GeoPoint::new(1., 6., None),
            1000,
        )
        .unwrap();
        let track = [calibration.geo_start(), calibration.geo_end()];
        assert!(matches!(
            Projection::derive(&track, &calibration),
            Err(Error::DivisionDegenerate { axis: Axis::X })
        ));
    }
}
