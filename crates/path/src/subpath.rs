//! The decomposition of a path into anchors and curves.

use crate::geom::CubicCurve;
use crate::math::Point;
use crate::PathCommand;

/// A vertex of a path along with its optional bézier handles.
///
/// `handle_in` is the second control point of the curve arriving at this anchor and
/// `handle_out` the first control point of the curve leaving it. An anchor without
/// handles is a sharp corner.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Anchor {
    pub point: Point,
    pub handle_in: Option<Point>,
    pub handle_out: Option<Point>,
}

impl Anchor {
    #[inline]
    pub fn new(point: Point) -> Self {
        Anchor {
            point,
            handle_in: None,
            handle_out: None,
        }
    }

    #[inline]
    pub fn has_handles(&self) -> bool {
        self.handle_in.is_some() || self.handle_out.is_some()
    }

    /// The same anchor as a sharp corner.
    #[inline]
    pub fn without_handles(&self) -> Self {
        Anchor::new(self.point)
    }
}

/// An unbroken run of curves.
///
/// A closed sub-path has an extra curve from its last anchor back to its first
/// one, so it always has as many curves as anchors. An open sub-path has one less.
#[derive(Clone, Debug, PartialEq)]
pub struct BezierSubpath {
    anchors: Vec<Anchor>,
    curves: Vec<CubicCurve<f64>>,
    curve_lengths: Vec<f64>,
    closed: bool,
    length: f64,
}

impl BezierSubpath {
    pub fn new(anchors: Vec<Anchor>, closed: bool) -> Self {
        let mut curves: Vec<CubicCurve<f64>> = anchors
            .windows(2)
            .map(|pair| join(&pair[0], &pair[1]))
            .collect();

        if closed {
            if let (Some(last), Some(first)) = (anchors.last(), anchors.first()) {
                curves.push(join(last, first));
            }
        }

        let curve_lengths: Vec<f64> = curves.iter().map(CubicCurve::length).collect();
        let length = curve_lengths.iter().sum();

        BezierSubpath {
            anchors,
            curves,
            curve_lengths,
            closed,
            length,
        }
    }

    #[inline]
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    #[inline]
    pub fn curves(&self) -> &[CubicCurve<f64>] {
        &self.curves
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Sum of the arclengths of the curves.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Arclength of each curve, in order.
    #[inline]
    pub fn curve_lengths(&self) -> &[f64] {
        &self.curve_lengths
    }

    /// The first point of the sub-path.
    pub fn first_point(&self) -> Option<Point> {
        self.anchors.first().map(|anchor| anchor.point)
    }

    /// The point the sub-path ends at: its first point if it is closed.
    pub fn last_point(&self) -> Option<Point> {
        if self.closed {
            return self.first_point();
        }

        self.anchors.last().map(|anchor| anchor.point)
    }

    /// Finds the curve at `distance` along the sub-path.
    ///
    /// Returns the curve index, the parameter on that curve and the remaining
    /// distance inside it. Distances past the end resolve to the end of the last
    /// curve.
    pub(crate) fn curve_at(&self, distance: f64) -> Option<(usize, f64, f64)> {
        let mut start = 0.0;
        for (idx, &curve_length) in self.curve_lengths.iter().enumerate() {
            let end = start + curve_length;
            if end > distance {
                let local = distance - start;
                return Some((idx, local / curve_length, local));
            }
            start = end;
        }

        let last = self.curve_lengths.len().checked_sub(1)?;

        Some((last, 1.0, self.curve_lengths[last]))
    }
}

fn join(from: &Anchor, to: &Anchor) -> CubicCurve<f64> {
    CubicCurve::from_anchors(from.point, from.handle_out, to.handle_in, to.point)
}

/// Splits the commands into sub-paths.
///
/// A sub-path ends at a `Close`, at the next `MoveTo` or at the end of the commands.
/// Drawing after a `Close` without moving first starts a new sub-path at the first
/// point of the closed one.
pub fn build_subpaths(commands: &[PathCommand]) -> Vec<BezierSubpath> {
    let mut subpaths = Vec::new();
    let mut anchors: Vec<Anchor> = Vec::new();
    let mut subpath_start = Point::origin();

    for command in commands {
        match *command {
            PathCommand::MoveTo { to } => {
                if !anchors.is_empty() {
                    subpaths.push(BezierSubpath::new(std::mem::take(&mut anchors), false));
                }
                subpath_start = to;
                anchors.push(Anchor::new(to));
            }
            PathCommand::LineTo { to } => {
                if anchors.is_empty() {
                    anchors.push(Anchor::new(subpath_start));
                }
                anchors.push(Anchor::new(to));
            }
            PathCommand::CurveTo { ctrl1, ctrl2, to } => {
                match anchors.last_mut() {
                    Some(previous) => previous.handle_out = Some(ctrl1),
                    None => anchors.push(Anchor {
                        handle_out: Some(ctrl1),
                        ..Anchor::new(subpath_start)
                    }),
                }
                anchors.push(Anchor {
                    point: to,
                    handle_in: Some(ctrl2),
                    handle_out: None,
                });
            }
            PathCommand::Close => {
                if !anchors.is_empty() {
                    subpaths.push(BezierSubpath::new(std::mem::take(&mut anchors), true));
                }
            }
        }
    }

    if !anchors.is_empty() {
        subpaths.push(BezierSubpath::new(anchors, false));
    }

    subpaths
}

#[cfg(test)]
use crate::math::point;

#[test]
fn anchors_take_handles_from_neighbouring_curves() {
    let subpaths = build_subpaths(&[
        PathCommand::MoveTo { to: point(0.0, 0.0) },
        PathCommand::CurveTo {
            ctrl1: point(1.0, 2.0),
            ctrl2: point(3.0, 2.0),
            to: point(4.0, 0.0),
        },
        PathCommand::LineTo { to: point(8.0, 0.0) },
    ]);

    assert_eq!(subpaths.len(), 1);
    let anchors = subpaths[0].anchors();
    assert_eq!(anchors.len(), 3);
    assert_eq!(anchors[0].handle_in, None);
    assert_eq!(anchors[0].handle_out, Some(point(1.0, 2.0)));
    assert_eq!(anchors[1].handle_in, Some(point(3.0, 2.0)));
    assert_eq!(anchors[1].handle_out, None);
    assert!(!anchors[2].has_handles());
    assert!(!anchors[1].without_handles().has_handles());

    assert!(!subpaths[0].is_closed());
    assert_eq!(subpaths[0].curves().len(), 2);
    assert_eq!(subpaths[0].last_point(), Some(point(8.0, 0.0)));
}

#[test]
fn closed_subpaths_have_a_closing_curve() {
    let subpaths = build_subpaths(&[
        PathCommand::MoveTo { to: point(0.0, 0.0) },
        PathCommand::LineTo { to: point(3.0, 0.0) },
        PathCommand::LineTo { to: point(3.0, 4.0) },
        PathCommand::Close,
    ]);

    assert_eq!(subpaths.len(), 1);
    let subpath = &subpaths[0];
    assert!(subpath.is_closed());
    assert_eq!(subpath.curves().len(), 3);
    assert_eq!(subpath.curves()[2].to(), point(0.0, 0.0));
    assert!((subpath.length() - 12.0).abs() < 1e-9);
    assert_eq!(subpath.last_point(), Some(point(0.0, 0.0)));
}

#[test]
fn split_at_move_to_and_close() {
    let subpaths = build_subpaths(&[
        PathCommand::MoveTo { to: point(0.0, 0.0) },
        PathCommand::LineTo { to: point(1.0, 0.0) },
        PathCommand::MoveTo { to: point(5.0, 5.0) },
        PathCommand::LineTo { to: point(6.0, 5.0) },
        PathCommand::Close,
        PathCommand::LineTo { to: point(5.0, 9.0) },
        PathCommand::Close,
        PathCommand::Close,
    ]);

    assert_eq!(subpaths.len(), 3);
    assert!(!subpaths[0].is_closed());
    assert!(subpaths[1].is_closed());
    // Drawing after a close starts from the closed sub-path's first point.
    assert_eq!(subpaths[2].first_point(), Some(point(5.0, 5.0)));
    assert_eq!(subpaths[2].anchors().len(), 2);
    assert!(subpaths[2].is_closed());
}

#[test]
fn locate_a_curve_by_distance() {
    let subpath = BezierSubpath::new(
        vec![
            Anchor::new(point(0.0, 0.0)),
            Anchor::new(point(10.0, 0.0)),
            Anchor::new(point(10.0, 5.0)),
        ],
        false,
    );

    let (curve, t, distance) = subpath.curve_at(12.5).unwrap();
    assert_eq!(curve, 1);
    assert!((t - 0.5).abs() < 1e-9);
    assert!((distance - 2.5).abs() < 1e-9);

    assert_eq!(subpath.curve_at(0.0).map(|(c, t, _)| (c, t)), Some((0, 0.0)));
    assert_eq!(subpath.curve_at(100.0).map(|(c, t, _)| (c, t)), Some((1, 1.0)));

    let lone = BezierSubpath::new(vec![Anchor::new(point(1.0, 1.0))], false);
    assert_eq!(lone.curve_at(0.0), None);
    assert_eq!(lone.length(), 0.0);
}
