use crate::cubic_bezier::curvature_and_radius;
use crate::scalar::Scalar;
use crate::utils::{gauss_legendre_24, tangent};
use crate::{CubicBezierSegment, LineSegment, Point, QuadraticBezierSegment, Vector};

/// A cubic bézier segment along with its derivative curves.
///
/// The first derivative (a quadratic curve) and the second derivative (a line) are
/// computed once at construction. The curve is immutable afterwards, use
/// [`CubicCurve::new`] on a modified segment instead.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicCurve<S> {
    segment: CubicBezierSegment<S>,
    first_derivative: QuadraticBezierSegment<S>,
    second_derivative: LineSegment<S>,
}

impl<S: Scalar> CubicCurve<S> {
    pub fn new(segment: CubicBezierSegment<S>) -> Self {
        let first_derivative = segment.hodograph();
        let second_derivative = first_derivative.hodograph();

        CubicCurve {
            segment,
            first_derivative,
            second_derivative,
        }
    }

    /// Builds the curve joining two anchors.
    ///
    /// A missing handle is replaced with the anchor's own point, which turns a pair
    /// of handle-less anchors into a straight edge.
    pub fn from_anchors(
        from: Point<S>,
        handle_out: Option<Point<S>>,
        handle_in: Option<Point<S>>,
        to: Point<S>,
    ) -> Self {
        CubicCurve::new(CubicBezierSegment {
            from,
            ctrl1: handle_out.unwrap_or(from),
            ctrl2: handle_in.unwrap_or(to),
            to,
        })
    }

    #[inline]
    pub fn segment(&self) -> &CubicBezierSegment<S> {
        &self.segment
    }

    #[inline]
    pub fn from(&self) -> Point<S> {
        self.segment.from
    }

    #[inline]
    pub fn to(&self) -> Point<S> {
        self.segment.to
    }

    #[inline]
    pub fn point_at(&self, t: S) -> Point<S> {
        self.segment.sample(t)
    }

    #[inline]
    pub fn derivative_at(&self, t: S) -> Vector<S> {
        self.first_derivative.sample(t).to_vector()
    }

    #[inline]
    pub fn second_derivative_at(&self, t: S) -> Vector<S> {
        self.second_derivative.sample(t).to_vector()
    }

    /// Unit tangent at t.
    ///
    /// Zero where the curve has a null speed.
    pub fn tangent_at(&self, t: S) -> Vector<S> {
        let d = self.derivative_at(t);
        let length = d.length();
        if length == S::ZERO {
            return d;
        }

        d / length
    }

    /// Unit normal at t, the tangent rotated by 90 degrees.
    pub fn normal_at(&self, t: S) -> Vector<S> {
        tangent(self.tangent_at(t))
    }

    pub fn curvature_at(&self, t: S) -> S {
        curvature_and_radius(self.derivative_at(t), self.second_derivative_at(t)).0
    }

    /// Radius of curvature at t, zero where the curvature is.
    pub fn radius_at(&self, t: S) -> S {
        curvature_and_radius(self.derivative_at(t), self.second_derivative_at(t)).1
    }

    /// Arclength of the curve, computed with a 24 points Gauss-Legendre quadrature.
    pub fn length(&self) -> S {
        gauss_legendre_24(|t| self.derivative_at(t).length())
    }

    /// Whether the control points are within `LINEAR_TOLERANCE` of the baseline.
    pub fn is_linear(&self) -> bool {
        self.segment.is_linear(S::LINEAR_TOLERANCE)
    }

    /// The straight curve between the same endpoints.
    pub fn without_handles(&self) -> Self {
        CubicCurve::new(CubicBezierSegment::straight(self.segment.from, self.segment.to))
    }
}

impl<S: Scalar> From<CubicBezierSegment<S>> for CubicCurve<S> {
    fn from(segment: CubicBezierSegment<S>) -> Self {
        CubicCurve::new(segment)
    }
}

#[cfg(test)]
use crate::{point, vector};

#[test]
fn straight_edge_from_anchors() {
    let curve = CubicCurve::from_anchors(point(0.0f64, 0.0), None, None, point(3.0, 4.0));

    assert!(curve.is_linear());
    assert!((curve.length() - 5.0).abs() < 1e-9);
    assert_eq!(curve.curvature_at(0.5), 0.0);
    assert_eq!(curve.radius_at(0.5), 0.0);
    assert_eq!(curve.point_at(0.0), point(0.0, 0.0));
    assert_eq!(curve.point_at(1.0), point(3.0, 4.0));

    let tangent = curve.tangent_at(0.3);
    assert!((tangent - vector(0.6, 0.8)).length() < 1e-12);
    let normal = curve.normal_at(0.3);
    assert!((normal - vector(-0.8, 0.6)).length() < 1e-12);
}

#[test]
fn precomputed_derivatives_match_the_segment() {
    let segment = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(1.0, 5.0),
        ctrl2: point(6.0, 5.0),
        to: point(8.0, -1.0),
    };
    let curve = CubicCurve::new(segment);

    for i in 0..=8 {
        let t = i as f64 / 8.0;
        assert!((curve.derivative_at(t) - segment.derivative(t)).length() < 1e-9);
        assert!((curve.curvature_at(t) - segment.curvature(t)).abs() < 1e-9);
    }
    assert!((curve.length() - segment.length()).abs() < 1e-12);
    assert!(!curve.is_linear());
}

#[test]
fn curvature_of_a_circular_arc() {
    // Quarter circle of radius 10, counter-clockwise.
    let k = 0.5522847498 * 10.0;
    let curve = CubicCurve::new(CubicBezierSegment {
        from: point(10.0f64, 0.0),
        ctrl1: point(10.0, k),
        ctrl2: point(k, 10.0),
        to: point(0.0, 10.0),
    });

    for i in 0..=4 {
        let t = i as f64 / 4.0;
        assert!((curve.radius_at(t) - 10.0).abs() < 0.5, "{}", curve.radius_at(t));
        assert!((curve.curvature_at(t) - 0.1).abs() < 0.005);
    }

    // The normal of a counter-clockwise arc points towards the center.
    let n = curve.normal_at(0.5);
    let p = curve.point_at(0.5);
    assert!(n.dot(p.to_vector()) < 0.0);
}

#[test]
fn removing_handles() {
    let curve = CubicCurve::from_anchors(
        point(0.0f64, 0.0),
        Some(point(0.0, 10.0)),
        Some(point(10.0, 10.0)),
        point(10.0, 0.0),
    );
    let straight = curve.without_handles();

    assert!(!curve.is_linear());
    assert!(straight.is_linear());
    assert_eq!(straight.from(), curve.from());
    assert_eq!(straight.to(), curve.to());
}

#[test]
fn null_speed_tangent() {
    let curve = CubicCurve::from_anchors(point(1.0f64, 1.0), None, None, point(1.0, 1.0));
    assert_eq!(curve.tangent_at(0.5), vector(0.0, 0.0));
    assert_eq!(curve.length(), 0.0);
}
