use crate::{GeoPoint, Vector};

/// Minimum and maximum extent of a track.
///
/// `x` holds longitudes and `y` holds latitudes. Elevation bounds are only set once a point with
/// a recorded elevation has been seen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// The minimum values.
    pub min: Vector<f64>,

    /// The maximum values.
    pub max: Vector<f64>,

    /// The lowest recorded elevation.
    pub min_elevation: Option<f64>,

    /// The highest recorded elevation.
    pub max_elevation: Option<f64>,
}

impl Bounds {
    /// Computes the bounds of every point in the slice.
    ///
    /// Returns `None` if the slice is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use gps_transposer::{Bounds, GeoPoint};
    /// let points = [GeoPoint::new(1., 2., None), GeoPoint::new(-1., 3., Some(10.))];
    /// let bounds = Bounds::from_points(&points).unwrap();
    /// assert_eq!(-1., bounds.min.x);
    /// assert_eq!(3., bounds.max.y);
    /// assert_eq!(Some(10.), bounds.max_elevation);
    /// ```
    pub fn from_points(points: &[GeoPoint]) -> Option<Bounds> {
        if points.is_empty() {
            return None;
        }
        let mut bounds = Bounds::default();
        for point in points {
            bounds.grow(point);
        }
        Some(bounds)
    }

    /// Grows the bounds to encompass this point.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gps_transposer::{Bounds, GeoPoint};
    /// let mut bounds = Bounds { ..Default::default() };
    /// bounds.grow(&GeoPoint::new(1., 2., None));
    /// assert_eq!(1., bounds.min.x);
    /// assert_eq!(None, bounds.min_elevation);
    /// ```
    pub fn grow(&mut self, point: &GeoPoint) {
        if point.longitude < self.min.x {
            self.min.x = point.longitude;
        }
        if point.latitude < self.min.y {
            self.min.y = point.latitude;
        }
        if point.longitude > self.max.x {
            self.max.x = point.longitude;
        }
        if point.latitude > self.max.y {
            self.max.y = point.latitude;
        }
        if let Some(elevation) = point.elevation {
            self.min_elevation = Some(self.min_elevation.map_or(elevation, |e| e.min(elevation)));
            self.max_elevation = Some(self.max_elevation.map_or(elevation, |e| e.max(elevation)));
        }
    }
}

impl Default for Bounds {
    fn default() -> Bounds {
        Bounds {
            min: Vector {
                x: f64::INFINITY,
                y: f64::INFINITY,
            },
            max: Vector {
                x: f64::NEG_INFINITY,
                y: f64::NEG_INFINITY,
            },
            min_elevation: None,
            max_elevation: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grow() {
        let mut bounds = Bounds {
            ..Default::default()
        };
        bounds.grow(&GeoPoint::new(1., 2., Some(3.)));
        assert_eq!(1., bounds.min.x);
        assert_eq!(1., bounds.max.x);
        assert_eq!(2., bounds.min.y);
        assert_eq!(2., bounds.max.y);
        assert_eq!(Some(3.), bounds.min_elevation);
        assert_eq!(Some(3.), bounds.max_elevation);
        bounds.grow(&GeoPoint::new(0., 1., None));
        assert_eq!(0., bounds.min.x);
        assert_eq!(1., bounds.max.x);
        assert_eq!(1., bounds.min.y);
        assert_eq!(2., bounds.max.y);
        assert_eq!(Some(3.), bounds.min_elevation);
        bounds.grow(&GeoPoint::new(2., 3., Some(-4.)));
        assert_eq!(0., bounds.min.x);
        assert_eq!(2., bounds.max.x);
        assert_eq!(1., bounds.min.y);
        assert_eq!(3., bounds.max.y);
        assert_eq!(Some(-4.), bounds.min_elevation);
        assert_eq!(Some(3.), bounds.max_elevation);
    }

    #[test]
    fn empty() {
        assert_eq!(None, Bounds::from_points(&[]));
    }

    #[test]
    fn without_elevation() {
        let bounds = Bounds::from_points(&[
            GeoPoint::new(-3., -40., None),
            GeoPoint::new(-1., -39., None),
        ])
        .unwrap();
        assert_eq!(-3., bounds.min.x);
        assert_eq!(-1., bounds.max.x);
        assert_eq!(-40., bounds.min.y);
        assert_eq!(-39., bounds.max.y);
        assert_eq!(None, bounds.min_elevation);
        assert_eq!(None, bounds.max_elevation);
    }
}
