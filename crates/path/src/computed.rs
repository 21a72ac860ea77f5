//! Measurements of a path and arclength-parametrized queries.

use crate::geom::CubicCurve;
use crate::math::{Box2D, Point, Vector};
use crate::subpath::{build_subpaths, BezierSubpath};
use crate::PathCommand;

/// The position of a point on a path, expressed in terms of the curve it lies on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CurveLocation {
    /// Index of the sub-path.
    pub subpath: usize,
    /// Index of the curve in the sub-path.
    pub curve: usize,
    /// Parameter on the curve, between 0 and 1.
    pub t: f64,
    /// Arclength between the beginning of the curve and the location.
    pub distance: f64,
}

/// A path decomposed into sub-paths of cubic bézier curves, with their lengths and
/// the bounding box of the anchors.
///
/// Computed once, immutable afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct ComputedPath {
    subpaths: Vec<BezierSubpath>,
    length: f64,
    bounding_box: Box2D,
}

impl ComputedPath {
    pub fn new(commands: &[PathCommand]) -> Self {
        let subpaths = build_subpaths(commands);
        let length = subpaths.iter().map(BezierSubpath::length).sum();
        let bounding_box = anchors_bounding_box(&subpaths);

        log::trace!(
            "Measured {} commands: {} sub-paths, length {}",
            commands.len(),
            subpaths.len(),
            length
        );

        ComputedPath {
            subpaths,
            length,
            bounding_box,
        }
    }

    #[inline]
    pub fn subpaths(&self) -> &[BezierSubpath] {
        &self.subpaths
    }

    /// Total arclength of the path.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// The axis-aligned box containing every anchor point.
    ///
    /// Control points are not included, so curves may leave the box. An empty path
    /// has a zero box.
    #[inline]
    pub fn bounding_box(&self) -> Box2D {
        self.bounding_box
    }

    /// Finds the curve at the fraction `t` of the total length.
    ///
    /// `t` is clamped to `[0, 1]`. `t = 1` resolves to the end of the last curve.
    /// Returns `None` if the path has no curve.
    pub fn locate_at(&self, t: f64) -> Option<CurveLocation> {
        let offset = self.length * t.max(0.0).min(1.0);

        let mut start = 0.0;
        for (idx, subpath) in self.subpaths.iter().enumerate() {
            let end = start + subpath.length();
            if end > offset {
                let (curve, t, distance) = subpath.curve_at(offset - start)?;
                return Some(CurveLocation {
                    subpath: idx,
                    curve,
                    t,
                    distance,
                });
            }
            start = end;
        }

        let (idx, subpath) = self
            .subpaths
            .iter()
            .enumerate()
            .rev()
            .find(|(_, subpath)| !subpath.curves().is_empty())?;
        let curve = subpath.curves().len() - 1;

        Some(CurveLocation {
            subpath: idx,
            curve,
            t: 1.0,
            distance: subpath.curve_lengths()[curve],
        })
    }

    /// The curve a location refers to.
    pub fn curve(&self, location: &CurveLocation) -> Option<&CubicCurve<f64>> {
        self.subpaths
            .get(location.subpath)?
            .curves()
            .get(location.curve)
    }

    fn query<T>(&self, t: f64, f: impl FnOnce(&CubicCurve<f64>, f64) -> T) -> Option<T> {
        let location = self.locate_at(t)?;
        let curve = self.curve(&location)?;

        Some(f(curve, location.t))
    }

    pub fn point_at(&self, t: f64) -> Option<Point> {
        self.query(t, |curve, t| curve.point_at(t))
    }

    pub fn tangent_at(&self, t: f64) -> Option<Vector> {
        self.query(t, |curve, t| curve.tangent_at(t))
    }

    pub fn normal_at(&self, t: f64) -> Option<Vector> {
        self.query(t, |curve, t| curve.normal_at(t))
    }

    pub fn curvature_at(&self, t: f64) -> Option<f64> {
        self.query(t, |curve, t| curve.curvature_at(t))
    }

    pub fn radius_at(&self, t: f64) -> Option<f64> {
        self.query(t, |curve, t| curve.radius_at(t))
    }
}

fn anchors_bounding_box(subpaths: &[BezierSubpath]) -> Box2D {
    // from_points yields a zero box when there are no points.
    Box2D::from_points(
        subpaths
            .iter()
            .flat_map(|subpath| subpath.anchors())
            .map(|anchor| anchor.point),
    )
}

#[cfg(test)]
use crate::math::point;

#[cfg(test)]
fn square() -> ComputedPath {
    ComputedPath::new(&[
        PathCommand::MoveTo { to: point(0.0, 0.0) },
        PathCommand::LineTo { to: point(10.0, 0.0) },
        PathCommand::LineTo { to: point(10.0, 10.0) },
        PathCommand::LineTo { to: point(0.0, 10.0) },
        PathCommand::Close,
    ])
}

#[test]
fn locate_on_a_square() {
    let path = square();
    assert!((path.length() - 40.0).abs() < 1e-9);

    let location = path.locate_at(0.375).unwrap();
    assert_eq!(location.subpath, 0);
    assert_eq!(location.curve, 1);
    assert!((location.t - 0.5).abs() < 1e-9);
    assert!((location.distance - 5.0).abs() < 1e-9);

    let p = path.point_at(0.375).unwrap();
    assert!((p - point(10.0, 5.0)).length() < 1e-9);

    assert_eq!(path.point_at(0.0), Some(point(0.0, 0.0)));
    assert_eq!(path.point_at(1.0), Some(point(0.0, 0.0)));
    assert_eq!(path.locate_at(1.0).map(|l| (l.curve, l.t)), Some((3, 1.0)));

    // Out of range parameters are clamped.
    assert_eq!(path.point_at(-3.0), path.point_at(0.0));
    assert_eq!(path.point_at(7.0), path.point_at(1.0));
}

#[test]
fn differential_queries_on_a_square() {
    let path = square();

    let tangent = path.tangent_at(0.125).unwrap();
    assert!((tangent - Vector::new(1.0, 0.0)).length() < 1e-9);
    let normal = path.normal_at(0.125).unwrap();
    assert!((normal - Vector::new(0.0, 1.0)).length() < 1e-9);
    assert_eq!(path.curvature_at(0.5), Some(0.0));
    assert_eq!(path.radius_at(0.5), Some(0.0));
}

#[test]
fn bounding_box_of_the_anchors() {
    let path = ComputedPath::new(&[
        PathCommand::MoveTo { to: point(-5.0, 2.0) },
        PathCommand::CurveTo {
            ctrl1: point(-5.0, 100.0),
            ctrl2: point(5.0, 100.0),
            to: point(5.0, 2.0),
        },
        PathCommand::MoveTo { to: point(0.0, -1.0) },
    ]);

    let bounding_box = path.bounding_box();
    assert_eq!(bounding_box.min, point(-5.0, -1.0));
    assert_eq!(bounding_box.max, point(5.0, 2.0));
}

#[test]
fn empty_paths() {
    let path = ComputedPath::new(&[]);
    assert_eq!(path.length(), 0.0);
    assert_eq!(path.bounding_box(), Box2D::zero());
    assert_eq!(path.locate_at(0.5), None);
    assert_eq!(path.point_at(0.5), None);

    let lone = ComputedPath::new(&[PathCommand::MoveTo { to: point(3.0, 3.0) }]);
    assert_eq!(lone.subpaths().len(), 1);
    assert_eq!(lone.point_at(0.0), None);
    assert_eq!(lone.bounding_box(), Box2D::new(point(3.0, 3.0), point(3.0, 3.0)));
}

#[test]
fn zero_length_curves_resolve_to_the_last_curve() {
    let path = ComputedPath::new(&[
        PathCommand::MoveTo { to: point(1.0, 1.0) },
        PathCommand::LineTo { to: point(1.0, 1.0) },
        PathCommand::MoveTo { to: point(2.0, 2.0) },
    ]);

    let location = path.locate_at(0.0).unwrap();
    assert_eq!((location.subpath, location.curve, location.t), (0, 0, 1.0));
    assert_eq!(path.point_at(0.3), Some(point(1.0, 1.0)));
}
