use crate::scalar::Scalar;
use crate::{Point, Vector};

/// A linear segment.
///
/// Besides straight edges, line segments represent the second derivative of
/// cubic bézier curves, in which case the points are to be read as vectors.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment<S> {
    pub from: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> LineSegment<S> {
    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: S) -> Point<S> {
        self.from.lerp(self.to, t)
    }

    /// Sample the x coordinate of the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn x(&self, t: S) -> S {
        self.from.x * (S::ONE - t) + self.to.x * t
    }

    /// Sample the y coordinate of the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn y(&self, t: S) -> S {
        self.from.y * (S::ONE - t) + self.to.y * t
    }

    /// Returns an inverted version of this segment where the beginning and the end
    /// points are swapped.
    #[inline]
    pub fn flip(&self) -> Self {
        LineSegment {
            from: self.to,
            to: self.from,
        }
    }

    /// Returns the vector between this segment's `from` and `to` points.
    #[inline]
    pub fn to_vector(&self) -> Vector<S> {
        self.to - self.from
    }

    /// Computes the length of this segment.
    #[inline]
    pub fn length(&self) -> S {
        self.to_vector().length()
    }

    /// Computes the squared length of this segment.
    #[inline]
    pub fn square_length(&self) -> S {
        self.to_vector().square_length()
    }
}

#[cfg(test)]
use crate::point;

#[test]
fn sample_and_length() {
    let segment = LineSegment {
        from: point(1.0f64, 1.0),
        to: point(4.0, 5.0),
    };

    assert_eq!(segment.sample(0.0), point(1.0, 1.0));
    assert_eq!(segment.sample(1.0), point(4.0, 5.0));
    assert_eq!(segment.sample(0.5), point(2.5, 3.0));
    assert_eq!(segment.x(0.5), 2.5);
    assert_eq!(segment.y(0.5), 3.0);
    assert_eq!(segment.length(), 5.0);
    assert_eq!(segment.square_length(), 25.0);
    assert_eq!(segment.flip().from, point(4.0, 5.0));
}
