use crate::scalar::Scalar;
use crate::{CubicBezierSegment, LineSegment, Point, Vector};

/// A 2d curve segment defined by three points: the beginning of the segment, a control
/// point and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * from + 2 * (1 - t) * t * ctrl + t² * to```
///
/// Quadratic segments are also the hodograph (first derivative curve) of cubic
/// bézier segments, in which case the points are to be read as vectors.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct QuadraticBezierSegment<S> {
    pub from: Point<S>,
    pub ctrl: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> QuadraticBezierSegment<S> {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: S) -> Point<S> {
        let t2 = t * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;

        self.from * one_t2 + self.ctrl.to_vector() * S::TWO * one_t * t + self.to.to_vector() * t2
    }

    /// Sample the x coordinate of the curve at t (expecting t between 0 and 1).
    pub fn x(&self, t: S) -> S {
        let t2 = t * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;

        self.from.x * one_t2 + self.ctrl.x * S::TWO * one_t * t + self.to.x * t2
    }

    /// Sample the y coordinate of the curve at t (expecting t between 0 and 1).
    pub fn y(&self, t: S) -> S {
        let t2 = t * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;

        self.from.y * one_t2 + self.ctrl.y * S::TWO * one_t * t + self.to.y * t2
    }

    #[inline]
    fn derivative_coefficients(&self, t: S) -> (S, S, S) {
        (S::TWO * t - S::TWO, -S::FOUR * t + S::TWO, S::TWO * t)
    }

    /// Sample the curve's derivative at t (expecting t between 0 and 1).
    pub fn derivative(&self, t: S) -> Vector<S> {
        let (c0, c1, c2) = self.derivative_coefficients(t);
        self.from.to_vector() * c0 + self.ctrl.to_vector() * c1 + self.to.to_vector() * c2
    }

    /// The control polygon of this curve's derivative.
    pub fn hodograph(&self) -> LineSegment<S> {
        LineSegment {
            from: ((self.ctrl - self.from) * S::TWO).to_point(),
            to: ((self.to - self.ctrl) * S::TWO).to_point(),
        }
    }

    /// Swap the beginning and the end of the segment.
    pub fn flip(&self) -> Self {
        QuadraticBezierSegment {
            from: self.to,
            ctrl: self.ctrl,
            to: self.from,
        }
    }

    /// Elevate the curve to an equivalent cubic bézier segment.
    ///
    /// The control points are `from + 2/3 (ctrl - from)` and `to + 2/3 (ctrl - to)`,
    /// so the cubic traces exactly the same curve.
    pub fn to_cubic(&self) -> CubicBezierSegment<S> {
        let two_thirds = S::TWO / S::THREE;
        CubicBezierSegment {
            from: self.from,
            ctrl1: self.from + (self.ctrl - self.from) * two_thirds,
            ctrl2: self.to + (self.ctrl - self.to) * two_thirds,
            to: self.to,
        }
    }
}

#[cfg(test)]
use crate::point;

#[test]
fn degree_elevation_is_exact() {
    let quadratic = QuadraticBezierSegment {
        from: point(1.0f64, 3.0),
        ctrl: point(7.5, -2.25),
        to: point(10.0, 11.0),
    };
    let cubic = quadratic.to_cubic();

    let two_thirds = 2.0 / 3.0;
    assert_eq!(cubic.from, quadratic.from);
    assert_eq!(cubic.to, quadratic.to);
    assert_eq!(
        cubic.ctrl1,
        quadratic.from + (quadratic.ctrl - quadratic.from) * two_thirds
    );
    assert_eq!(
        cubic.ctrl2,
        quadratic.to + (quadratic.ctrl - quadratic.to) * two_thirds
    );

    for i in 0..=10 {
        let t = i as f64 / 10.0;
        let a = quadratic.sample(t);
        let b = cubic.sample(t);
        assert!((a - b).length() < 1e-12, "{:?} != {:?} at {}", a, b, t);
    }
}

#[test]
fn derivative_matches_hodograph() {
    let curve = QuadraticBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl: point(5.0, 10.0),
        to: point(10.0, 0.0),
    };
    let hodograph = curve.hodograph();
    for i in 0..=4 {
        let t = i as f64 / 4.0;
        assert_eq!(curve.derivative(t), hodograph.sample(t).to_vector());
    }
    assert_eq!(curve.sample(0.5), point(5.0, 5.0));
    assert_eq!(curve.flip().flip(), curve);
}
