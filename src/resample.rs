//! Even out the spacing of a projected track.
//!
//! GPS receivers record points at irregular distances: clusters when standing still, gaps when
//! moving fast or losing signal. The resampler walks the projected track once and, for every
//! point, measures the distance to the last point it emitted (rounded to whole milli-pixels):
//!
//! - below one step, the point is skipped,
//! - from one step up to two steps, the point is emitted,
//! - at two steps or more, filler points are emitted one step apart towards the point, and the
//!   point itself is dropped.
//!
//! If the last point of the track is within one step of the image end point, it is snapped onto
//! the end point exactly.

use crate::{Calibration, GeoPoint, PixelPoint, Projection, Vector};
use log::{Level, debug, log, trace};

/// Counts of what happened during one resampling run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of track points read.
    pub input: usize,
    /// Number of points written, fillers included.
    pub emitted: usize,
    /// Number of track points dropped for being too close to the last emitted point.
    pub skipped: usize,
    /// Number of synthesized filler points.
    pub fillers: usize,
    /// Number of gaps whose filler direction could not be computed.
    pub degenerate: usize,
    /// Whether the last point was snapped onto the image end point.
    pub anchored: bool,
}

/// Projects and resamples a track.
///
/// # Examples
///
/// ```
/// use gps_transposer::{Calibration, GeoPoint, PixelPoint, Projection, Resampler};
///
/// let calibration = Calibration::new(
///     PixelPoint::new(0., 0., None),
///     PixelPoint::new(100., 100., None),
///     GeoPoint::new(0., 1., None),
///     GeoPoint::new(1., 0., None),
///     1000,
/// ).unwrap();
/// let track = [GeoPoint::new(0., 1., None), GeoPoint::new(0.05, 1., None)];
/// let projection = Projection::derive(&track, &calibration).unwrap();
/// let points = Resampler::new(&projection, &calibration).resample(&track);
/// assert_eq!(vec![PixelPoint::new(0., 0., None), PixelPoint::new(1., 0., None)], points);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Resampler<'a> {
    projection: &'a Projection,
    calibration: &'a Calibration,
}

impl<'a> Resampler<'a> {
    /// Creates a resampler for a projection and the calibration it was derived from.
    pub fn new(projection: &'a Projection, calibration: &'a Calibration) -> Resampler<'a> {
        Resampler {
            projection,
            calibration,
        }
    }

    /// Projects every point and evens out the spacing.
    pub fn resample(&self, points: &[GeoPoint]) -> Vec<PixelPoint> {
        self.resample_with_summary(points).0
    }

    /// Projects every point and evens out the spacing, also returning what was done.
    pub fn resample_with_summary(&self, points: &[GeoPoint]) -> (Vec<PixelPoint>, Summary) {
        let step = f64::from(self.calibration.step());
        let step_pixels = self.calibration.step_pixels();
        let img_end = self.calibration.img_end();
        let mut summary = Summary {
            input: points.len(),
            ..Default::default()
        };
        let mut output = Vec::with_capacity(points.len());
        let mut last: Option<PixelPoint> = None;

        for (i, point) in points.iter().enumerate() {
            let mut current = self.projection.project(point);

            if i == points.len() - 1 && current.distance(&img_end) < step_pixels {
                trace!("snapping final point {} onto {}", current, img_end);
                current.x = img_end.x;
                current.y = img_end.y;
                output.push(current);
                summary.anchored = true;
                break;
            }

            let Some(last_emitted) = last else {
                output.push(current);
                last = Some(current);
                continue;
            };

            let distance = current.distance(&last_emitted);
            let rounded = milli_pixels(distance);
            if (step..2. * step).contains(&rounded) {
                output.push(current);
                last = Some(current);
            } else if rounded >= 2. * step {
                last = Some(self.fill(last_emitted, &current, distance, &mut output, &mut summary));
            } else {
                trace!(
                    "skipping point {} at {}, {} milli-pixels from the last point",
                    i, current, rounded
                );
                summary.skipped += 1;
            }
        }

        summary.emitted = output.len();
        debug!(
            "resampled {} points into {} ({} skipped, {} fillers, anchored: {})",
            summary.input, summary.emitted, summary.skipped, summary.fillers, summary.anchored
        );
        (output, summary)
    }

    /// Emits filler points from `last` towards `current` and returns the last one emitted.
    ///
    /// `current` itself is never emitted here unless the direction towards it is undefined.
    fn fill(
        &self,
        mut last: PixelPoint,
        current: &PixelPoint,
        distance: f64,
        output: &mut Vec<PixelPoint>,
        summary: &mut Summary,
    ) -> PixelPoint {
        let step = f64::from(self.calibration.step());
        let step_pixels = self.calibration.step_pixels();

        // Axis-aligned gaps get a single filler.
        if last.x == current.x {
            last.y = towards(last.y, current.y, step_pixels);
            output.push(last);
            summary.fillers += 1;
            return last;
        }
        if last.y == current.y {
            last.x = towards(last.x, current.x, step_pixels);
            output.push(last);
            summary.fillers += 1;
            return last;
        }

        let Some(delta) = filler_delta((current.x - last.x).abs(), distance, step_pixels) else {
            log!(
                Level::Warn,
                "cannot compute a filler direction from {} to {}, emitting the point as is",
                last,
                current
            );
            summary.degenerate += 1;
            output.push(*current);
            return *current;
        };

        let limit = (distance / step_pixels).ceil() as usize + 1;
        let mut iterations = 0;
        loop {
            last.x = towards(last.x, current.x, delta.x);
            last.y = towards(last.y, current.y, delta.y);
            output.push(last);
            summary.fillers += 1;
            iterations += 1;

            if milli_pixels(current.distance(&last)) < 2. * step {
                break;
            }
            if iterations >= limit {
                log!(
                    Level::Warn,
                    "gap from {} to {} not closed after {} fillers",
                    last,
                    current,
                    iterations
                );
                break;
            }
        }
        last
    }
}

/// Rounds a pixel distance to whole milli-pixels, ties to even.
fn milli_pixels(distance: f64) -> f64 {
    (distance * 1000.).round_ties_even()
}

fn towards(from: f64, to: f64, step: f64) -> f64 {
    if from < to { from + step } else { from - step }
}

/// Returns the unsigned per-axis step along a gap, or `None` if the gap has no direction.
fn filler_delta(dx: f64, distance: f64, step_pixels: f64) -> Option<Vector<f64>> {
    if distance.is_nan() || distance <= f64::EPSILON {
        return None;
    }
    let ratio = dx / distance;
    if ratio.is_nan() {
        return None;
    }
    let angle = ratio.min(1.).acos();
    Some(Vector {
        x: angle.cos() * step_pixels,
        y: angle.sin() * step_pixels,
    })
}
