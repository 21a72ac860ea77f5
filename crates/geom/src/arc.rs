//! Elliptic arc related maths and tools.
//!
//! Arcs are described the way SVG describes them: two endpoints, two radii, a rotation
//! of the ellipse's x axis and two flags selecting one of the four arcs that join the
//! endpoints. They are only ever consumed as a sequence of cubic bézier segments.

use crate::scalar::{Float, FloatConst, Scalar};
use crate::utils::VectorExt;
use crate::{point, Angle, CubicBezierSegment, Point, Vector};

/// The largest sweep covered by a single cubic bézier segment, in degrees.
///
/// Beyond this the cubic approximation of the ellipse degrades quickly.
pub const MAX_ARC_SWEEP_DEGREES: f64 = 120.0;

/// An elliptic arc curve segment using the SVG's end-point notation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SvgArc<S> {
    pub from: Point<S>,
    pub to: Point<S>,
    pub radii: Vector<S>,
    pub x_rotation: Angle<S>,
    pub flags: ArcFlags,
}

/// Flag parameters for arcs as described by the SVG specification.
///
/// For most situations using the SVG arc notation, there are four different arcs
/// (two different ellipses, each with two different arc sweeps) that satisfy the
/// arc parameters. The `large_arc` and `sweep` flags indicate which one of the
/// four arcs are drawn, as follows:
///
/// * Of the four candidate arc sweeps, two will represent an arc sweep of greater
///   than or equal to 180 degrees (the "large-arc"), and two will represent an arc
///   sweep of less than or equal to 180 degrees (the "small arc"). If `large_arc`
///   is `true`, then one of the two larger arc sweeps will be chosen; otherwise, if
///   `large_arc` is `false`, one of the smaller arc sweeps will be chosen.
/// * If `sweep` is `true`, then the arc will be drawn in a "positive-angle" direction
///   (the angle increases as the arc is traversed). A value of `false` causes the arc
///   to be drawn in a "negative-angle" direction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ArcFlags {
    pub large_arc: bool,
    pub sweep: bool,
}

impl<S: Scalar> SvgArc<S> {
    /// An arc with a null radius is drawn as a straight line.
    pub fn is_straight_line(&self) -> bool {
        self.radii.x == S::ZERO || self.radii.y == S::ZERO
    }

    /// An arc with a non-null radius whose endpoints coincide draws nothing.
    pub fn is_empty(&self) -> bool {
        self.from == self.to && !self.is_straight_line()
    }

    /// Approximates the arc with a sequence of cubic bézier segments.
    ///
    /// Each segment covers at most `MAX_ARC_SWEEP_DEGREES`. The first segment starts
    /// exactly at `from` and the last one ends exactly at `to`. An arc with a null
    /// radius produces a single straight segment, even if its endpoints coincide, and
    /// an empty arc produces nothing.
    pub fn for_each_cubic_bezier<F>(&self, cb: &mut F)
    where
        F: FnMut(&CubicBezierSegment<S>),
    {
        if self.is_straight_line() {
            log::debug!("Arc with a null radius {:?} drawn as a line", self.radii);
            cb(&CubicBezierSegment::straight(self.from, self.to));
            return;
        }

        if self.is_empty() {
            log::debug!("Skipping arc with coincident endpoints {:?}", self.from);
            return;
        }

        let mut rx = Float::abs(self.radii.x);
        let mut ry = Float::abs(self.radii.y);

        // Work in the frame of the ellipse's axes.
        let inv_rotation = -self.x_rotation;
        let from = self.from.to_vector().rotated(inv_rotation).to_point();
        let to = self.to.to_vector().rotated(inv_rotation).to_point();

        let hx = (from.x - to.x) * S::HALF;
        let hy = (from.y - to.y) * S::HALF;

        // Radii too small to join the endpoints are scaled up uniformly.
        let h = (hx * hx) / (rx * rx) + (hy * hy) / (ry * ry);
        if h > S::ONE {
            let h = h.sqrt();
            log::debug!("Scaling arc radii {:?} up by {}", self.radii, h);
            rx *= h;
            ry *= h;
        }

        let sign = if self.flags.large_arc == self.flags.sweep {
            -S::ONE
        } else {
            S::ONE
        };
        let rx2 = rx * rx;
        let ry2 = ry * ry;
        let left = rx2 * ry2 - rx2 * hy * hy - ry2 * hx * hx;
        let right = rx2 * hy * hy + ry2 * hx * hx;
        let k = sign * Float::abs(left / right).sqrt();

        let center = point(
            k * rx * hy / ry + (from.x + to.x) * S::HALF,
            -k * ry * hx / rx + (from.y + to.y) * S::HALF,
        );

        let mut start_angle = endpoint_angle(from, center, ry);
        let mut end_angle = endpoint_angle(to, center, ry);
        if self.flags.sweep && start_angle > end_angle {
            start_angle -= S::TWO * S::PI();
        }
        if !self.flags.sweep && end_angle > start_angle {
            end_angle -= S::TWO * S::PI();
        }

        let max_sweep = S::value(MAX_ARC_SWEEP_DEGREES).to_radians();
        let direction = if self.flags.sweep { S::ONE } else { -S::ONE };
        let radii = Vector::new(rx, ry);
        let on_ellipse = |angle: S| {
            let (sin, cos) = Float::sin_cos(angle);
            point(center.x + rx * cos, center.y + ry * sin)
        };

        let mut local_from = from;
        let mut global_from = self.from;
        let mut angle = start_angle;
        while Float::abs(end_angle - angle) > max_sweep {
            let next_angle = angle + max_sweep * direction;
            let local_to = on_ellipse(next_angle);
            let segment = self.arc_segment(
                global_from,
                (local_from, angle),
                (local_to, next_angle),
                radii,
                None,
            );
            cb(&segment);

            global_from = segment.to;
            local_from = local_to;
            angle = next_angle;
        }

        cb(&self.arc_segment(
            global_from,
            (local_from, angle),
            (to, end_angle),
            radii,
            Some(self.to),
        ));
    }

    /// Approximates the arc with a sequence of cubic bézier segments.
    pub fn to_cubic_beziers(&self) -> Vec<CubicBezierSegment<S>> {
        let mut segments = Vec::new();
        self.for_each_cubic_bezier(&mut |segment| segments.push(*segment));

        segments
    }

    // Builds the cubic bézier segment for a sweep of at most 120 degrees, from
    // points and angles expressed in the ellipse's frame, then rotates it back.
    fn arc_segment(
        &self,
        global_from: Point<S>,
        (from, start_angle): (Point<S>, S),
        (to, end_angle): (Point<S>, S),
        radii: Vector<S>,
        global_to: Option<Point<S>>,
    ) -> CubicBezierSegment<S> {
        let t = Float::tan((end_angle - start_angle) / S::FOUR);
        let hx = S::FOUR / S::THREE * radii.x * t;
        let hy = S::FOUR / S::THREE * radii.y * t;
        let (s1, c1) = Float::sin_cos(start_angle);
        let (s2, c2) = Float::sin_cos(end_angle);

        let ctrl1 = point(from.x - hx * s1, from.y + hy * c1);
        let ctrl2 = point(to.x + hx * s2, to.y - hy * c2);

        let rotate = |p: Point<S>| p.to_vector().rotated(self.x_rotation).to_point();

        CubicBezierSegment {
            from: global_from,
            ctrl1: rotate(ctrl1),
            ctrl2: rotate(ctrl2),
            to: global_to.unwrap_or_else(|| rotate(to)),
        }
    }
}

// Angle of an endpoint on the ellipse, in [0, 2π).
//
// The arcsine only covers the right half of the ellipse; points left of the center
// are mirrored.
fn endpoint_angle<S: Scalar>(p: Point<S>, center: Point<S>, ry: S) -> S {
    let sin = ((p.y - center.y) / ry).max(-S::ONE).min(S::ONE);
    let mut angle = sin.asin();
    if p.x < center.x {
        angle = S::PI() - angle;
    }
    if angle < S::ZERO {
        angle += S::TWO * S::PI();
    }

    angle
}

#[cfg(test)]
fn assert_approx_eq(a: Point<f64>, b: Point<f64>, epsilon: f64) {
    assert!((a - b).length() <= epsilon, "{:?} != {:?}", a, b);
}

#[test]
fn half_circle() {
    let arc = SvgArc {
        from: point(50.0f64, 0.0),
        to: point(-50.0, 0.0),
        radii: Vector::new(50.0, 50.0),
        x_rotation: Angle::zero(),
        flags: ArcFlags {
            large_arc: false,
            sweep: true,
        },
    };

    let segments = arc.to_cubic_beziers();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].from, point(50.0, 0.0));
    assert_eq!(segments.last().unwrap().to, point(-50.0, 0.0));
    assert_eq!(segments[0].to, segments[1].from);

    for segment in &segments {
        for i in 0..=16 {
            let p = segment.sample(i as f64 / 16.0);
            let deviation = (p.to_vector().length() - 50.0).abs();
            assert!(deviation < 0.5, "deviation {} at {:?}", deviation, p);
        }
    }

    // The positive-angle direction goes through positive y.
    assert!(segments[0].sample(0.5).y > 0.0);
}

#[test]
fn sweep_flag_selects_the_direction() {
    let arc = SvgArc {
        from: point(50.0f64, 0.0),
        to: point(-50.0, 0.0),
        radii: Vector::new(50.0, 50.0),
        x_rotation: Angle::zero(),
        flags: ArcFlags {
            large_arc: false,
            sweep: false,
        },
    };

    let segments = arc.to_cubic_beziers();
    assert!(segments[0].sample(0.5).y < 0.0);
    assert_eq!(segments.last().unwrap().to, point(-50.0, 0.0));
}

#[test]
fn large_arc_flag_selects_the_long_way() {
    let quarter = |large_arc| SvgArc {
        from: point(10.0f64, 0.0),
        to: point(0.0, 10.0),
        radii: Vector::new(10.0, 10.0),
        x_rotation: Angle::zero(),
        flags: ArcFlags {
            large_arc,
            sweep: true,
        },
    };

    let small: f64 = quarter(false).to_cubic_beziers().iter().map(|s| s.length()).sum();
    let large: f64 = quarter(true).to_cubic_beziers().iter().map(|s| s.length()).sum();
    let circumference = 2.0 * std::f64::consts::PI * 10.0;
    assert!((small - circumference / 4.0).abs() < 0.01);
    assert!((large - circumference * 3.0 / 4.0).abs() < 0.2);
    assert_eq!(quarter(true).to_cubic_beziers().len(), 3);
}

#[test]
fn null_radius_is_a_line() {
    let arc = SvgArc {
        from: point(1.0f64, 2.0),
        to: point(5.0, 7.0),
        radii: Vector::new(0.0, 3.0),
        x_rotation: Angle::zero(),
        flags: ArcFlags::default(),
    };

    let segments = arc.to_cubic_beziers();
    assert_eq!(
        segments,
        vec![CubicBezierSegment {
            from: point(1.0, 2.0),
            ctrl1: point(1.0, 2.0),
            ctrl2: point(5.0, 7.0),
            to: point(5.0, 7.0),
        }]
    );
}

#[test]
fn empty_arc() {
    let arc = SvgArc {
        from: point(1.0f64, 2.0),
        to: point(1.0, 2.0),
        radii: Vector::new(4.0, 3.0),
        x_rotation: Angle::zero(),
        flags: ArcFlags::default(),
    };

    assert!(arc.to_cubic_beziers().is_empty());
}

#[test]
fn null_radius_wins_over_coincident_endpoints() {
    let arc = SvgArc {
        from: point(1.0f64, 1.0),
        to: point(1.0, 1.0),
        radii: Vector::new(0.0, 0.0),
        x_rotation: Angle::zero(),
        flags: ArcFlags::default(),
    };

    assert!(!arc.is_empty());
    assert_eq!(
        arc.to_cubic_beziers(),
        vec![CubicBezierSegment::straight(point(1.0, 1.0), point(1.0, 1.0))]
    );
}

#[test]
fn radii_too_small_are_scaled_up() {
    let arc = SvgArc {
        from: point(0.0f64, 0.0),
        to: point(10.0, 0.0),
        radii: Vector::new(1.0, 1.0),
        x_rotation: Angle::zero(),
        flags: ArcFlags {
            large_arc: false,
            sweep: true,
        },
    };

    let segments = arc.to_cubic_beziers();
    assert_eq!(segments.last().unwrap().to, point(10.0, 0.0));
    let center = point(5.0, 0.0);
    for segment in &segments {
        let p = segment.sample(0.5);
        assert!(((p - center).length() - 5.0).abs() < 0.05);
    }
}

#[test]
fn rotated_ellipse() {
    let x_rotation = Angle::degrees(30.0f64);
    let on_ellipse = |x: f64, y: f64| Vector::new(x, y).rotated(x_rotation).to_point();
    let arc = SvgArc {
        from: on_ellipse(20.0, 0.0),
        to: on_ellipse(-20.0, 0.0),
        radii: Vector::new(20.0, 10.0),
        x_rotation,
        flags: ArcFlags {
            large_arc: true,
            sweep: true,
        },
    };

    let segments = arc.to_cubic_beziers();
    assert_eq!(segments[0].from, arc.from);
    assert_eq!(segments.last().unwrap().to, arc.to);
    for segment in &segments {
        for i in 0..=8 {
            let p = segment.sample(i as f64 / 8.0).to_vector().rotated(-x_rotation);
            let value = (p.x / 20.0).powi(2) + (p.y / 10.0).powi(2);
            assert!((value - 1.0).abs() < 0.01, "{} at {:?}", value, p);
        }
    }
    for pair in segments.windows(2) {
        assert_approx_eq(pair[0].to, pair[1].from, 0.0);
    }
}
