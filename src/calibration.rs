//! Calibration of a track against an image.
//!
//! Two geographic points with known positions on the image pin down the scale and position of
//! the whole track. The step length sets the target distance between consecutive output points.

use crate::{Error, GeoPoint, PixelPoint, Result};
use log::{Level, log};

/// The default step length, one pixel.
pub const DEFAULT_STEP: i32 = 1000;

/// Reference points and step length for one transposition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Calibration {
    img_start: PixelPoint,
    img_end: PixelPoint,
    geo_start: GeoPoint,
    geo_end: GeoPoint,
    step: i32,
}

impl Calibration {
    /// Creates a new calibration.
    ///
    /// `img_start` is where `geo_start` lands on the image, and `img_end` is where `geo_end`
    /// lands. The step is expressed in thousandths of a pixel and must be positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use gps_transposer::{Calibration, GeoPoint, PixelPoint};
    /// let calibration = Calibration::new(
    ///     PixelPoint::new(219., 686., None),
    ///     PixelPoint::new(1167., 64., None),
    ///     GeoPoint::new(2.42463, 39.57731, None),
    ///     GeoPoint::new(3.07493, 39.90439, None),
    ///     1000,
    /// ).unwrap();
    /// assert_eq!(1., calibration.step_pixels());
    ///
    /// assert!(Calibration::new(
    ///     PixelPoint::new(0., 0., None),
    ///     PixelPoint::new(1., 1., None),
    ///     GeoPoint::new(0., 1., None),
    ///     GeoPoint::new(1., 0., None),
    ///     0,
    /// ).is_err());
    /// ```
    pub fn new(
        img_start: PixelPoint,
        img_end: PixelPoint,
        geo_start: GeoPoint,
        geo_end: GeoPoint,
        step: i32,
    ) -> Result<Calibration> {
        if step <= 0 {
            return Err(Error::InvalidStep(step));
        }
        if img_start.x == img_end.x || img_start.y == img_end.y {
            log!(
                Level::Warn,
                "image calibration points {} and {} share an axis, the track will collapse onto a line",
                img_start,
                img_end
            );
        }
        Ok(Calibration {
            img_start,
            img_end,
            geo_start,
            geo_end,
            step,
        })
    }

    /// Creates a new calibration with the default one pixel step.
    pub fn with_default_step(
        img_start: PixelPoint,
        img_end: PixelPoint,
        geo_start: GeoPoint,
        geo_end: GeoPoint,
    ) -> Result<Calibration> {
        Calibration::new(img_start, img_end, geo_start, geo_end, DEFAULT_STEP)
    }

    /// Returns the image position of the first reference point.
    pub fn img_start(&self) -> PixelPoint {
        self.img_start
    }

    /// Returns the image position of the second reference point.
    pub fn img_end(&self) -> PixelPoint {
        self.img_end
    }

    /// Returns the geographic position of the first reference point.
    pub fn geo_start(&self) -> GeoPoint {
        self.geo_start
    }

    /// Returns the geographic position of the second reference point.
    pub fn geo_end(&self) -> GeoPoint {
        self.geo_end
    }

    /// Returns the step length in milli-pixels.
    pub fn step(&self) -> i32 {
        self.step
    }

    /// Returns the step length in pixels.
    pub fn step_pixels(&self) -> f64 {
        f64::from(self.step) / 1000.
    }
}
