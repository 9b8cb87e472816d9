use std::fmt;

/// An xy collection.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector<T> {
    /// X, the horizontal (longitude) axis.
    pub x: T,
    /// Y, the vertical (latitude) axis.
    pub y: T,
}

impl<T> Vector<T> {
    /// Returns the value for one axis.
    ///
    /// # Examples
    ///
    /// ```
    /// use gps_transposer::{Axis, Vector};
    /// let vector = Vector { x: 1., y: 2. };
    /// assert_eq!(2., *vector.get(Axis::Y));
    /// ```
    pub fn get(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}

/// One of the two axes of the plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal: longitude on the globe, x on the image.
    X,
    /// Vertical: latitude on the globe, y on the image.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x (longitude)"),
            Axis::Y => write!(f, "y (latitude)"),
        }
    }
}
