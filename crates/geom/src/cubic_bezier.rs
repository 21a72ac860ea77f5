use crate::scalar::{Float, Scalar};
use crate::utils::gauss_legendre_24;
use crate::{point, Point, QuadraticBezierSegment, Vector};

/// A 2d curve segment defined by four points: the beginning of the segment, two control
/// points and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * from + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezierSegment<S> {
    pub from: Point<S>,
    pub ctrl1: Point<S>,
    pub ctrl2: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> CubicBezierSegment<S> {
    /// A straight segment expressed as a cubic bézier curve.
    ///
    /// The control points coincide with the endpoints.
    pub fn straight(from: Point<S>, to: Point<S>) -> Self {
        CubicBezierSegment {
            from,
            ctrl1: from,
            ctrl2: to,
            to,
        }
    }

    /// Sample the curve at t (expecting t between 0 and 1).
    ///
    /// The endpoints are returned exactly for t = 0 and t = 1.
    pub fn sample(&self, t: S) -> Point<S> {
        if t == S::ZERO {
            return self.from;
        }
        if t == S::ONE {
            return self.to;
        }

        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        self.from * one_t3
            + self.ctrl1.to_vector() * S::THREE * one_t2 * t
            + self.ctrl2.to_vector() * S::THREE * one_t * t2
            + self.to.to_vector() * t3
    }

    /// Sample the x coordinate of the curve at t (expecting t between 0 and 1).
    pub fn x(&self, t: S) -> S {
        self.sample(t).x
    }

    /// Sample the y coordinate of the curve at t (expecting t between 0 and 1).
    pub fn y(&self, t: S) -> S {
        self.sample(t).y
    }

    #[inline]
    fn derivative_coefficients(&self, t: S) -> (S, S, S, S) {
        let t2 = t * t;
        (
            -S::THREE * t2 + S::SIX * t - S::THREE,
            S::value(9.0) * t2 - S::value(12.0) * t + S::THREE,
            -S::value(9.0) * t2 + S::SIX * t,
            S::THREE * t2,
        )
    }

    /// Sample the curve's derivative at t (expecting t between 0 and 1).
    pub fn derivative(&self, t: S) -> Vector<S> {
        let (c0, c1, c2, c3) = self.derivative_coefficients(t);
        self.from.to_vector() * c0
            + self.ctrl1.to_vector() * c1
            + self.ctrl2.to_vector() * c2
            + self.to.to_vector() * c3
    }

    /// Sample the x coordinate of the curve's derivative at t (expecting t between 0 and 1).
    pub fn dx(&self, t: S) -> S {
        let (c0, c1, c2, c3) = self.derivative_coefficients(t);
        self.from.x * c0 + self.ctrl1.x * c1 + self.ctrl2.x * c2 + self.to.x * c3
    }

    /// Sample the y coordinate of the curve's derivative at t (expecting t between 0 and 1).
    pub fn dy(&self, t: S) -> S {
        let (c0, c1, c2, c3) = self.derivative_coefficients(t);
        self.from.y * c0 + self.ctrl1.y * c1 + self.ctrl2.y * c2 + self.to.y * c3
    }

    /// The first derivative curve.
    ///
    /// The points of the returned segment are to be read as vectors.
    pub fn hodograph(&self) -> QuadraticBezierSegment<S> {
        QuadraticBezierSegment {
            from: ((self.ctrl1 - self.from) * S::THREE).to_point(),
            ctrl: ((self.ctrl2 - self.ctrl1) * S::THREE).to_point(),
            to: ((self.to - self.ctrl2) * S::THREE).to_point(),
        }
    }

    /// Split this curve into two sub-curves.
    pub fn split(&self, t: S) -> (CubicBezierSegment<S>, CubicBezierSegment<S>) {
        let ctrl1a = self.from + (self.ctrl1 - self.from) * t;
        let ctrl2a = self.ctrl1 + (self.ctrl2 - self.ctrl1) * t;
        let ctrl1aa = ctrl1a + (ctrl2a - ctrl1a) * t;
        let ctrl3a = self.ctrl2 + (self.to - self.ctrl2) * t;
        let ctrl2aa = ctrl2a + (ctrl3a - ctrl2a) * t;
        let ctrl1aaa = ctrl1aa + (ctrl2aa - ctrl1aa) * t;

        (
            CubicBezierSegment {
                from: self.from,
                ctrl1: ctrl1a,
                ctrl2: ctrl1aa,
                to: ctrl1aaa,
            },
            CubicBezierSegment {
                from: ctrl1aaa,
                ctrl1: ctrl2aa,
                ctrl2: ctrl3a,
                to: self.to,
            },
        )
    }

    /// The four points of the curve expressed in a frame where the baseline lies on
    /// the positive x axis, starting at the origin.
    pub fn aligned(&self) -> [Point<S>; 4] {
        let origin = self.from;
        let baseline = self.to - self.from;
        let angle = -Float::atan2(baseline.y, baseline.x);
        let (sin, cos) = Float::sin_cos(angle);
        let align = |p: Point<S>| {
            let v = p - origin;
            point(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
        };

        [
            align(self.from),
            align(self.ctrl1),
            align(self.ctrl2),
            align(self.to),
        ]
    }

    /// Returns true if all four points lie within `tolerance` of the baseline.
    ///
    /// When the endpoints coincide the baseline degenerates to the x axis through
    /// the first point.
    pub fn is_linear(&self, tolerance: S) -> bool {
        self.aligned()
            .iter()
            .all(|p| Float::abs(p.y) <= tolerance)
    }

    /// Signed curvature at t.
    ///
    /// Returns zero where the curvature is undefined (null speed) or where the
    /// curve is locally straight.
    pub fn curvature(&self, t: S) -> S {
        curvature_and_radius(self.derivative(t), self.hodograph().derivative(t)).0
    }

    /// Computes the length of this segment.
    ///
    /// Integrates the speed of the curve with a 24 points Gauss-Legendre quadrature.
    pub fn length(&self) -> S {
        let hodograph = self.hodograph();
        gauss_legendre_24(|t| hodograph.sample(t).to_vector().length())
    }

    /// Swap the beginning and the end of the segment.
    pub fn flip(&self) -> Self {
        CubicBezierSegment {
            from: self.to,
            ctrl1: self.ctrl2,
            ctrl2: self.ctrl1,
            to: self.from,
        }
    }
}

/// Curvature and radius of curvature from the first and second derivatives.
///
/// Both are zero when either the numerator or the denominator vanishes.
pub(crate) fn curvature_and_radius<S: Scalar>(d: Vector<S>, dd: Vector<S>) -> (S, S) {
    let num = d.x * dd.y - d.y * dd.x;
    let dnm = Float::powf(d.square_length(), S::THREE / S::TWO);
    if num == S::ZERO || dnm == S::ZERO {
        return (S::ZERO, S::ZERO);
    }

    (num / dnm, dnm / num)
}

#[cfg(test)]
fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

#[test]
fn sample_endpoints_exactly() {
    let curve = CubicBezierSegment {
        from: point(0.1f64, 0.7),
        ctrl1: point(3.3, 9.1),
        ctrl2: point(-4.0, 2.2),
        to: point(7.7, 1.3),
    };
    assert_eq!(curve.sample(0.0), curve.from);
    assert_eq!(curve.sample(1.0), curve.to);
    assert_eq!(curve.x(1.0), 7.7);
    assert_eq!(curve.y(0.0), 0.7);
}

#[test]
fn derivative_matches_hodograph() {
    let curve = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(1.0, 4.0),
        ctrl2: point(5.0, -2.0),
        to: point(6.0, 3.0),
    };
    let hodograph = curve.hodograph();
    for i in 0..=8 {
        let t = i as f64 / 8.0;
        let a = curve.derivative(t);
        let b = hodograph.sample(t).to_vector();
        assert!((a - b).length() < 1e-12);
        assert!(approx_eq(curve.dx(t), a.x, 1e-12));
        assert!(approx_eq(curve.dy(t), a.y, 1e-12));
    }
}

#[test]
fn length_of_straight_curve() {
    let curve = CubicBezierSegment::straight(point(0.0f64, 0.0), point(3.0, 4.0));
    assert!(approx_eq(curve.length(), 5.0, 1e-9));

    // Evenly spaced control points give a constant speed.
    let curve = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(1.0, 0.0),
        ctrl2: point(2.0, 0.0),
        to: point(3.0, 0.0),
    };
    assert!(approx_eq(curve.length(), 3.0, 1e-12));
}

#[test]
fn length_of_quarter_circle() {
    let k = 0.5522847498;
    let r = 100.0f64;
    let curve = CubicBezierSegment {
        from: point(r, 0.0),
        ctrl1: point(r, r * k),
        ctrl2: point(r * k, r),
        to: point(0.0, r),
    };
    let expected = std::f64::consts::FRAC_PI_2 * r;
    // The cubic approximation of the circle is within 0.03% of the radius.
    assert!(approx_eq(curve.length(), expected, 0.05));
}

#[test]
fn split_is_continuous() {
    let curve = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(1.0, 4.0),
        ctrl2: point(5.0, -2.0),
        to: point(6.0, 3.0),
    };
    let (a, b) = curve.split(0.3);
    assert_eq!(a.to, b.from);
    assert!((a.to - curve.sample(0.3)).length() < 1e-12);
    assert!(approx_eq(a.length() + b.length(), curve.length(), 1e-6));
}

#[test]
fn linearity() {
    let straight = CubicBezierSegment {
        from: point(1.0f64, 1.0),
        ctrl1: point(2.0, 2.0),
        ctrl2: point(3.0, 3.0),
        to: point(4.0, 4.0),
    };
    assert!(straight.is_linear(1e-4));

    let bent = CubicBezierSegment {
        ctrl1: point(2.0, 2.1),
        ..straight
    };
    assert!(!bent.is_linear(1e-4));

    let aligned = bent.aligned();
    assert!(approx_eq(aligned[0].x, 0.0, 1e-12));
    assert!(approx_eq(aligned[3].y, 0.0, 1e-12));
    assert!(approx_eq(aligned[3].x, 18.0f64.sqrt(), 1e-12));
}

#[test]
fn curvature_of_degenerate_curves_is_zero() {
    let point_curve = CubicBezierSegment::straight(point(2.0f64, 2.0), point(2.0, 2.0));
    assert_eq!(point_curve.curvature(0.5), 0.0);

    let straight = CubicBezierSegment::straight(point(0.0f64, 0.0), point(10.0, 0.0));
    assert_eq!(straight.curvature(0.5), 0.0);
}

#[test]
fn curvature_sign_follows_orientation() {
    let curve = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(0.0, 10.0),
        ctrl2: point(10.0, 10.0),
        to: point(10.0, 0.0),
    };
    assert!(curve.curvature(0.5) < 0.0);
    assert!(curve.flip().curvature(0.5) > 0.0);
}
