//! The default path data structure.

use crate::builder::{BorderRadii, Builder};
use crate::computed::{ComputedPath, CurveLocation};
use crate::geom::{merge_transforms, rotation_about, scale_about, translation};
use crate::math::{Angle, Box2D, Point, Transform, Vector};
use crate::surface::{render_commands, DrawingSurface, SvgSerializer};
use crate::PathCommand;

use std::fmt;
use std::iter::FromIterator;
use std::sync::OnceLock;

/// A simple path data structure.
///
/// The commands are immutable once built. Geometric queries decompose the path into
/// curves and measure them on first use, once per path, and reuse the result
/// afterwards (see [`Path::compute`]). The measurements can be shared between threads.
///
/// Transforms never modify a path: they return a new one which measures itself
/// again.
pub struct Path {
    commands: Box<[PathCommand]>,
    computed: OnceLock<ComputedPath>,
}

impl Path {
    /// Creates a [Builder](struct.Builder.html) to build a path.
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Creates an empty path.
    pub fn new() -> Path {
        Path::from_normalized(Vec::new())
    }

    /// Creates a path from a list of commands.
    ///
    /// A move to the origin is inserted if the first command isn't a `MoveTo`.
    pub fn from_commands<I: IntoIterator<Item = PathCommand>>(commands: I) -> Path {
        let mut builder = Builder::new();
        builder.extend(commands);

        builder.build()
    }

    pub(crate) fn from_normalized(commands: Vec<PathCommand>) -> Path {
        Path {
            commands: commands.into_boxed_slice(),
            computed: OnceLock::new(),
        }
    }

    /// A closed axis-aligned rectangle.
    pub fn rectangle(rect: &Box2D) -> Path {
        let mut builder = Builder::with_capacity(5);
        builder.add_rectangle(rect);
        builder.build()
    }

    /// A closed axis-aligned rectangle with rounded corners.
    pub fn rounded_rectangle(rect: &Box2D, radii: &BorderRadii) -> Path {
        let mut builder = Builder::with_capacity(10);
        builder.add_rounded_rectangle(rect, radii);
        builder.build()
    }

    /// A closed axis-aligned ellipse.
    pub fn ellipse(center: Point, radii: Vector) -> Path {
        let mut builder = Builder::with_capacity(6);
        builder.add_ellipse(center, radii);
        builder.build()
    }

    /// A closed circle.
    pub fn circle(center: Point, radius: f64) -> Path {
        let mut builder = Builder::with_capacity(6);
        builder.add_circle(center, radius);
        builder.build()
    }

    #[inline]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<PathCommand> {
        self.commands.iter()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The decomposition of the path into sub-paths and curves, with its measurements.
    ///
    /// Computed on the first call only.
    pub fn compute(&self) -> &ComputedPath {
        self.computed
            .get_or_init(|| ComputedPath::new(&self.commands))
    }

    /// Total arclength.
    pub fn length(&self) -> f64 {
        self.compute().length()
    }

    /// The axis-aligned box containing every anchor point (control points excluded).
    pub fn bounding_box(&self) -> Box2D {
        self.compute().bounding_box()
    }

    /// Finds the curve at the fraction `t` of the total length.
    pub fn locate_at(&self, t: f64) -> Option<CurveLocation> {
        self.compute().locate_at(t)
    }

    /// The point at the fraction `t` of the total length.
    pub fn point_at(&self, t: f64) -> Option<Point> {
        self.compute().point_at(t)
    }

    pub fn tangent_at(&self, t: f64) -> Option<Vector> {
        self.compute().tangent_at(t)
    }

    pub fn normal_at(&self, t: f64) -> Option<Vector> {
        self.compute().normal_at(t)
    }

    pub fn curvature_at(&self, t: f64) -> Option<f64> {
        self.compute().curvature_at(t)
    }

    pub fn radius_at(&self, t: f64) -> Option<f64> {
        self.compute().radius_at(t)
    }

    pub fn translate(&self, x: f64, y: f64) -> Path {
        self.transformed(&translation(x, y))
    }

    /// Scales the path around the center of its bounding box.
    pub fn scale(&self, sx: f64, sy: f64) -> Path {
        let center = self.bounding_box().center();
        self.transformed(&scale_about(sx, sy, center))
    }

    /// Rotates the path around the center of its bounding box.
    pub fn rotate(&self, angle: Angle) -> Path {
        let center = self.bounding_box().center();
        self.transformed(&rotation_about(angle, center))
    }

    /// Applies a sequence of transforms, in order.
    pub fn transform(&self, transforms: &[Transform]) -> Path {
        self.transformed(&merge_transforms(transforms))
    }

    /// Applies the transform to every point of the path.
    pub fn transformed(&self, transform: &Transform) -> Path {
        Path::from_normalized(
            self.commands
                .iter()
                .map(|command| command.transformed(transform))
                .collect(),
        )
    }

    /// Feeds the commands to a drawing surface, in order.
    pub fn render_to<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        render_commands(&self.commands, surface);
    }

    /// The path as SVG path data, made of absolute `M`, `L`, `C` and `Z` commands.
    pub fn to_svg(&self) -> String {
        let mut serializer = SvgSerializer::new();
        self.render_to(&mut serializer);

        serializer.build()
    }
}

impl Default for Path {
    fn default() -> Self {
        Path::new()
    }
}

impl Clone for Path {
    fn clone(&self) -> Self {
        Path {
            commands: self.commands.clone(),
            computed: self.computed.clone(),
        }
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.commands == other.commands
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "Path(\"{}\")", self.to_svg())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(&self.to_svg())
    }
}

impl<'l> IntoIterator for &'l Path {
    type Item = &'l PathCommand;
    type IntoIter = std::slice::Iter<'l, PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<PathCommand> for Path {
    fn from_iter<T: IntoIterator<Item = PathCommand>>(iter: T) -> Path {
        Path::from_commands(iter)
    }
}

#[cfg(test)]
use crate::math::{point, rect};

#[cfg(test)]
fn triangle() -> Path {
    Path::from_commands([
        PathCommand::MoveTo { to: point(0.0, 0.0) },
        PathCommand::LineTo { to: point(10.0, 0.0) },
        PathCommand::LineTo { to: point(10.0, 10.0) },
        PathCommand::Close,
    ])
}

#[test]
fn length_of_a_closed_triangle() {
    let path = triangle();
    let expected = 20.0 + 200.0f64.sqrt();
    assert!((path.length() - expected).abs() < 1e-3);
}

#[test]
fn missing_move_to_is_inserted() {
    let path = Path::from_commands([PathCommand::LineTo { to: point(3.0, 4.0) }]);
    assert_eq!(
        path.commands(),
        &[
            PathCommand::MoveTo { to: point(0.0, 0.0) },
            PathCommand::LineTo { to: point(3.0, 4.0) },
        ]
    );
    assert!((path.length() - 5.0).abs() < 1e-9);

    let empty = Path::from_commands([]);
    assert!(empty.is_empty());
    assert_eq!(empty.length(), 0.0);
    assert_eq!(empty.point_at(0.5), None);
}

#[test]
fn measurements_are_computed_once() {
    let path = triangle();
    let first = path.compute() as *const ComputedPath;
    let second = path.compute() as *const ComputedPath;
    assert_eq!(first, second);
}

#[test]
fn transforms_return_new_paths() {
    let path = triangle();
    let length = path.length();

    let moved = path.translate(5.0, -2.0);
    assert_eq!(path.commands()[1], PathCommand::LineTo { to: point(10.0, 0.0) });
    assert_eq!(moved.commands()[1], PathCommand::LineTo { to: point(15.0, -2.0) });
    assert!((moved.length() - length).abs() < 1e-9);

    let back = moved.translate(-5.0, 2.0);
    for (a, b) in back.iter().zip(path.iter()) {
        match (a, b) {
            (PathCommand::Close, PathCommand::Close) => {}
            _ => assert!((a.to().unwrap() - b.to().unwrap()).length() < 1e-12),
        }
    }
}

#[test]
fn scale_about_the_bounding_box_center() {
    let path = Path::rectangle(&rect(0.0, 0.0, 10.0, 4.0));
    let scaled = path.scale(2.0, 3.0);

    assert_eq!(
        scaled.bounding_box(),
        Box2D::new(point(-5.0, -4.0), point(15.0, 8.0))
    );
    assert!((scaled.length() - 2.0 * (20.0 + 12.0)).abs() < 1e-9);
}

#[test]
fn rotate_about_the_bounding_box_center() {
    let path = Path::rectangle(&rect(0.0, 0.0, 10.0, 4.0));
    let rotated = path.rotate(Angle::degrees(90.0));
    let bounding_box = rotated.bounding_box();

    assert!((bounding_box.min - point(3.0, -3.0)).length() < 1e-9);
    assert!((bounding_box.max - point(7.0, 7.0)).length() < 1e-9);
    assert!((rotated.length() - path.length()).abs() < 1e-9);
}

#[test]
fn transform_in_call_order() {
    let path = Path::from_commands([PathCommand::MoveTo { to: point(1.0, 1.0) }]);
    let transformed = path.transform(&[
        translation(10.0, 0.0),
        scale_about(2.0, 2.0, point(0.0, 0.0)),
    ]);

    assert_eq!(transformed.commands()[0], PathCommand::MoveTo { to: point(22.0, 2.0) });
}

#[test]
fn serialize_to_svg() {
    let path = triangle();
    assert_eq!(path.to_svg(), "M 0 0 L 10 0 L 10 10 Z");
    assert_eq!(format!("{}", path), "M 0 0 L 10 0 L 10 10 Z");
    assert_eq!(Path::new().to_svg(), "");
}

#[test]
fn shape_constructors() {
    let circle = Path::circle(point(0.0, 0.0), 5.0);
    assert_eq!(circle.bounding_box(), Box2D::new(point(-5.0, -5.0), point(5.0, 5.0)));

    let ellipse = Path::ellipse(point(0.0, 0.0), Vector::new(4.0, 2.0));
    assert_eq!(ellipse.point_at(0.0), Some(point(4.0, 0.0)));
    assert!(ellipse.compute().subpaths()[0].is_closed());

    let rounded = Path::rounded_rectangle(&rect(0.0, 0.0, 10.0, 10.0), &BorderRadii::new(0.0));
    assert!((rounded.length() - 40.0).abs() < 1e-9);
}

#[test]
fn collect_commands() {
    let path: Path = vec![
        PathCommand::MoveTo { to: point(0.0, 0.0) },
        PathCommand::LineTo { to: point(1.0, 0.0) },
    ]
    .into_iter()
    .collect();

    assert_eq!((&path).into_iter().count(), 2);
    assert_eq!(path.clone(), path);
}
