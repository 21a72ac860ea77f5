//! Path building utilities.
//!
//! ## Examples
//!
//! ```
//! use vecpath_path::{Path, BorderRadii};
//! use vecpath_path::math::{point, rect};
//!
//! let mut builder = Path::builder();
//!
//! builder.move_to(point(0.0, 0.0));
//! builder.line_to(point(1.0, 0.0));
//! builder.quadratic_bezier_to(point(2.0, 0.0), point(2.0, 1.0));
//!
//! builder.move_to(point(10.0, 0.0));
//! builder.cubic_bezier_to(point(12.0, 2.0), point(11.0, 2.0), point(5.0, 0.0));
//! builder.close();
//!
//! builder.add_rounded_rectangle(&rect(0.0, 0.0, 100.0, 50.0), &BorderRadii::new(10.0));
//!
//! let path = builder.build();
//! ```

use crate::geom::QuadraticBezierSegment;
use crate::math::{point, vector, Box2D, Point, Vector};
use crate::{Path, PathCommand, KAPPA};

/// The radius of each corner of a rounded rectangle.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
pub struct BorderRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_left: f64,
    pub bottom_right: f64,
}

impl BorderRadii {
    pub fn new(radius: f64) -> Self {
        let r = radius.abs();
        BorderRadii {
            top_left: r,
            top_right: r,
            bottom_left: r,
            bottom_right: r,
        }
    }
}

/// Builds a `Path` from absolute drawing instructions.
///
/// The first instruction of a path is always a move-to: if something else comes
/// first, a move to the origin is inserted.
#[derive(Clone, Debug, Default)]
pub struct Builder {
    commands: Vec<PathCommand>,
    current_position: Point,
    subpath_start: Point,
}

impl Builder {
    pub fn new() -> Self {
        Builder::with_capacity(0)
    }

    pub fn with_capacity(commands: usize) -> Self {
        Builder {
            commands: Vec::with_capacity(commands),
            current_position: Point::origin(),
            subpath_start: Point::origin(),
        }
    }

    /// Appends a command, tracking the current position.
    pub fn push(&mut self, command: PathCommand) {
        if self.commands.is_empty() && !command.is_move_to() {
            self.commands.push(PathCommand::MoveTo {
                to: Point::origin(),
            });
        }

        match command {
            PathCommand::MoveTo { to } => {
                self.subpath_start = to;
                self.current_position = to;
            }
            PathCommand::LineTo { to } | PathCommand::CurveTo { to, .. } => {
                self.current_position = to;
            }
            PathCommand::Close => {
                self.current_position = self.subpath_start;
            }
        }

        self.commands.push(command);
    }

    pub fn move_to(&mut self, to: Point) {
        self.push(PathCommand::MoveTo { to });
    }

    pub fn line_to(&mut self, to: Point) {
        self.push(PathCommand::LineTo { to });
    }

    pub fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.push(PathCommand::CurveTo { ctrl1, ctrl2, to });
    }

    /// Adds a quadratic bézier curve, stored as the equivalent cubic curve.
    pub fn quadratic_bezier_to(&mut self, ctrl: Point, to: Point) {
        let cubic = QuadraticBezierSegment {
            from: self.current_position,
            ctrl,
            to,
        }
        .to_cubic();
        self.cubic_bezier_to(cubic.ctrl1, cubic.ctrl2, cubic.to);
    }

    pub fn close(&mut self) {
        self.push(PathCommand::Close);
    }

    /// The position the next drawing command starts from.
    pub fn current_position(&self) -> Point {
        self.current_position
    }

    /// Adds a closed axis-aligned rectangle, starting at its minimum corner.
    pub fn add_rectangle(&mut self, rect: &Box2D) {
        self.move_to(rect.min);
        self.line_to(point(rect.max.x, rect.min.y));
        self.line_to(rect.max);
        self.line_to(point(rect.min.x, rect.max.y));
        self.close();
    }

    /// Adds a closed axis-aligned rectangle with rounded corners.
    ///
    /// Radii that don't fit in the rectangle are reduced.
    pub fn add_rounded_rectangle(&mut self, rect: &Box2D, radii: &BorderRadii) {
        add_rounded_rectangle(self, rect, radii);
    }

    /// Adds a closed axis-aligned ellipse made of four cubic bézier curves.
    pub fn add_ellipse(&mut self, center: Point, radii: Vector) {
        let (rx, ry) = (radii.x, radii.y);
        let (kx, ky) = (rx * KAPPA, ry * KAPPA);

        self.move_to(center + vector(rx, 0.0));
        self.cubic_bezier_to(
            center + vector(rx, -ky),
            center + vector(kx, -ry),
            center + vector(0.0, -ry),
        );
        self.cubic_bezier_to(
            center + vector(-kx, -ry),
            center + vector(-rx, -ky),
            center + vector(-rx, 0.0),
        );
        self.cubic_bezier_to(
            center + vector(-rx, ky),
            center + vector(-kx, ry),
            center + vector(0.0, ry),
        );
        self.cubic_bezier_to(
            center + vector(kx, ry),
            center + vector(rx, ky),
            center + vector(rx, 0.0),
        );
        self.close();
    }

    pub fn add_circle(&mut self, center: Point, radius: f64) {
        let r = radius.abs();
        self.add_ellipse(center, vector(r, r));
    }

    pub fn build(self) -> Path {
        Path::from_normalized(self.commands)
    }
}

impl Extend<PathCommand> for Builder {
    fn extend<T: IntoIterator<Item = PathCommand>>(&mut self, iter: T) {
        for command in iter {
            self.push(command);
        }
    }
}

fn add_rounded_rectangle(builder: &mut Builder, rect: &Box2D, radii: &BorderRadii) {
    let w = rect.width();
    let h = rect.height();
    let x_min = rect.min.x;
    let y_min = rect.min.y;
    let x_max = rect.max.x;
    let y_max = rect.max.y;
    let min_wh = w.min(h);
    let mut tl = radii.top_left.abs().min(min_wh);
    let mut tr = radii.top_right.abs().min(min_wh);
    let mut bl = radii.bottom_left.abs().min(min_wh);
    let mut br = radii.bottom_right.abs().min(min_wh);

    // clamp border radii if they don't fit in the rectangle.
    if tl + tr > w {
        let x = (tl + tr - w) * 0.5;
        tl -= x;
        tr -= x;
    }
    if bl + br > w {
        let x = (bl + br - w) * 0.5;
        bl -= x;
        br -= x;
    }
    if tr + br > h {
        let x = (tr + br - h) * 0.5;
        tr -= x;
        br -= x;
    }
    if tl + bl > h {
        let x = (tl + bl - h) * 0.5;
        tl -= x;
        bl -= x;
    }

    // Distance from the corner to the control points of a quarter circle of radius r.
    let inset = |r: f64| r * (1.0 - KAPPA);

    builder.move_to(point(x_min, y_min + tl));
    builder.cubic_bezier_to(
        point(x_min, y_min + inset(tl)),
        point(x_min + inset(tl), y_min),
        point(x_min + tl, y_min),
    );
    builder.line_to(point(x_max - tr, y_min));
    builder.cubic_bezier_to(
        point(x_max - inset(tr), y_min),
        point(x_max, y_min + inset(tr)),
        point(x_max, y_min + tr),
    );
    builder.line_to(point(x_max, y_max - br));
    builder.cubic_bezier_to(
        point(x_max, y_max - inset(br)),
        point(x_max - inset(br), y_max),
        point(x_max - br, y_max),
    );
    builder.line_to(point(x_min + bl, y_max));
    builder.cubic_bezier_to(
        point(x_min + inset(bl), y_max),
        point(x_min, y_max - inset(bl)),
        point(x_min, y_max - bl),
    );
    builder.close();
}

#[cfg(test)]
use crate::math::rect;

#[test]
fn implicit_move_to() {
    let mut builder = Builder::new();
    builder.line_to(point(1.0, 1.0));
    builder.close();
    builder.line_to(point(2.0, 0.0));

    let path = builder.build();
    assert_eq!(
        path.commands(),
        &[
            PathCommand::MoveTo { to: point(0.0, 0.0) },
            PathCommand::LineTo { to: point(1.0, 1.0) },
            PathCommand::Close,
            PathCommand::LineTo { to: point(2.0, 0.0) },
        ]
    );
}

#[test]
fn current_position() {
    let mut builder = Builder::new();
    builder.move_to(point(1.0, 2.0));
    builder.cubic_bezier_to(point(3.0, 3.0), point(4.0, 4.0), point(5.0, 2.0));
    assert_eq!(builder.current_position(), point(5.0, 2.0));
    builder.close();
    assert_eq!(builder.current_position(), point(1.0, 2.0));
}

#[test]
fn quadratic_curves_are_elevated() {
    let mut builder = Builder::new();
    builder.move_to(point(0.0, 0.0));
    builder.quadratic_bezier_to(point(3.0, 6.0), point(6.0, 0.0));

    let path = builder.build();
    assert_eq!(
        path.commands()[1],
        PathCommand::CurveTo {
            ctrl1: point(2.0, 4.0),
            ctrl2: point(4.0, 4.0),
            to: point(6.0, 0.0),
        }
    );
}

#[test]
fn rectangle() {
    let mut builder = Builder::new();
    builder.add_rectangle(&rect(1.0, 2.0, 10.0, 5.0));
    let path = builder.build();

    assert_eq!(path.commands().len(), 5);
    assert!((path.length() - 30.0).abs() < 1e-9);
    assert_eq!(
        path.bounding_box(),
        Box2D::new(point(1.0, 2.0), point(11.0, 7.0))
    );
}

#[test]
fn circle_length() {
    let mut builder = Builder::new();
    builder.add_circle(point(5.0, 5.0), 10.0);
    let path = builder.build();

    let circumference = 2.0 * std::f64::consts::PI * 10.0;
    assert!((path.length() - circumference).abs() < 0.05);
    assert_eq!(path.point_at(0.0), Some(point(15.0, 5.0)));
    assert_eq!(path.point_at(1.0), Some(point(15.0, 5.0)));
    assert_eq!(path.compute().subpaths().len(), 1);
}

#[test]
fn rounded_rectangle() {
    let mut builder = Builder::new();
    builder.add_rounded_rectangle(&rect(0.0, 0.0, 100.0, 50.0), &BorderRadii::new(10.0));
    let path = builder.build();

    // Four straight sides shortened by the radii and four quarter circles.
    let expected = 2.0 * (80.0 + 30.0) + 2.0 * std::f64::consts::PI * 10.0;
    assert!((path.length() - expected).abs() < 0.05);
    assert_eq!(path.commands()[0], PathCommand::MoveTo { to: point(0.0, 10.0) });
}

#[test]
fn rounded_rectangle_radii_are_clamped() {
    let mut builder = Builder::new();
    builder.add_rounded_rectangle(&rect(0.0, 0.0, 20.0, 20.0), &BorderRadii::new(50.0));
    let path = builder.build();

    // Clamped to a circle of radius 10.
    let circumference = 2.0 * std::f64::consts::PI * 10.0;
    assert!((path.length() - circumference).abs() < 0.05);
}
