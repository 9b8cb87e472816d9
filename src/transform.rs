use std::fmt;

/// A flip, a scale, and an offset that move one geographic axis onto one image axis.
///
/// The full mapping is `|(n + flip) * scale| + offset`. On the latitude axis the translated value
/// is also folded onto its absolute value before scaling, see [Projection::transpose]. The steps
/// are exposed one by one because the calibration is derived from the intermediate values.
///
/// [Projection::transpose]: crate::Projection::transpose
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Translation that moves the track's reference extremum onto zero.
    pub flip: f64,
    /// Pixels per degree.
    pub scale: f64,
    /// Pixel distance added after scaling.
    pub offset: f64,
}

impl Transform {
    /// Returns the flip that moves `extremum` onto zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gps_transposer::Transform;
    /// assert_eq!(-39.9, Transform::flip_against(39.9));
    /// assert_eq!(3.5, Transform::flip_against(-3.5));
    /// ```
    pub fn flip_against(extremum: f64) -> f64 {
        if extremum < 0. {
            extremum.abs()
        } else {
            -extremum
        }
    }

    /// Applies the flip.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gps_transposer::Transform;
    /// let transform = Transform { flip: -2., scale: 10., offset: 5. };
    /// assert_eq!(1., transform.translate(3.));
    /// ```
    pub fn translate(&self, n: f64) -> f64 {
        n + self.flip
    }

    /// Applies the scale to an already translated value.
    pub fn dislocate(&self, n: f64) -> f64 {
        n * self.scale
    }

    /// Scales an already translated value and applies the offset.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gps_transposer::Transform;
    /// let transform = Transform { flip: -2., scale: 10., offset: 5. };
    /// assert_eq!(15., transform.direct(-1.));
    /// ```
    pub fn direct(&self, n: f64) -> f64 {
        self.dislocate(n).abs() + self.offset
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`|(n + {}) * {}| + {}`",
            self.flip, self.scale, self.offset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_is_sign_corrected() {
        assert_eq!(-2.5, Transform::flip_against(2.5));
        assert_eq!(2.5, Transform::flip_against(-2.5));
        assert_eq!(0., Transform::flip_against(0.));
    }

    #[test]
    fn direct_takes_absolute_value_before_offset() {
        let transform = Transform {
            flip: 0.,
            scale: 2.,
            offset: 1.,
        };
        assert_eq!(7., transform.direct(3.));
        assert_eq!(7., transform.direct(-3.));
    }
}
