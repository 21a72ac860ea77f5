//! The canonical drawing instructions a path is made of.

use crate::geom::traits::Transformation;
use crate::math::Point;

/// A drawing instruction, in absolute coordinates.
///
/// Every path description is normalized into this small instruction set: quadratic
/// curves, smooth curves, arcs and axis-aligned lines are all rewritten in terms of
/// `LineTo` and `CurveTo`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathCommand {
    /// Starts a new sub-path.
    MoveTo { to: Point },
    LineTo { to: Point },
    /// A cubic bézier curve from the current position.
    CurveTo { ctrl1: Point, ctrl2: Point, to: Point },
    /// Closes the current sub-path, the current position goes back to its first point.
    Close,
}

impl PathCommand {
    /// The position after this command, if it has an explicit one.
    pub fn to(&self) -> Option<Point> {
        match *self {
            PathCommand::MoveTo { to }
            | PathCommand::LineTo { to }
            | PathCommand::CurveTo { to, .. } => Some(to),
            PathCommand::Close => None,
        }
    }

    pub fn is_move_to(&self) -> bool {
        matches!(self, PathCommand::MoveTo { .. })
    }

    /// Applies the transform to every point of this command.
    pub fn transformed<T: Transformation<f64>>(&self, transform: &T) -> Self {
        match *self {
            PathCommand::MoveTo { to } => PathCommand::MoveTo {
                to: transform.transform_point(to),
            },
            PathCommand::LineTo { to } => PathCommand::LineTo {
                to: transform.transform_point(to),
            },
            PathCommand::CurveTo { ctrl1, ctrl2, to } => PathCommand::CurveTo {
                ctrl1: transform.transform_point(ctrl1),
                ctrl2: transform.transform_point(ctrl2),
                to: transform.transform_point(to),
            },
            PathCommand::Close => PathCommand::Close,
        }
    }
}

#[cfg(test)]
use crate::geom::translation;
#[cfg(test)]
use crate::math::point;

#[test]
fn transform_commands() {
    let t = translation(1.0, 2.0);
    assert_eq!(
        PathCommand::CurveTo {
            ctrl1: point(0.0, 0.0),
            ctrl2: point(1.0, 1.0),
            to: point(2.0, 2.0),
        }
        .transformed(&t),
        PathCommand::CurveTo {
            ctrl1: point(1.0, 2.0),
            ctrl2: point(2.0, 3.0),
            to: point(3.0, 4.0),
        }
    );
    assert_eq!(PathCommand::Close.transformed(&t), PathCommand::Close);
    assert_eq!(PathCommand::Close.to(), None);
    assert_eq!(
        PathCommand::LineTo { to: point(1.0, 1.0) }.transformed(&t).to(),
        Some(point(2.0, 3.0))
    );
}
