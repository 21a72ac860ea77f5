//! Output of paths as drawing calls.

use crate::math::Point;
use crate::PathCommand;
use std::fmt::Write;

/// A 2D drawing surface receiving the commands of a path.
///
/// The method set mirrors the path building APIs of the usual 2D canvas
/// libraries. Nothing is rasterized here.
pub trait DrawingSurface {
    fn move_to(&mut self, to: Point);
    fn line_to(&mut self, to: Point);
    fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point);
    fn close_path(&mut self);
}

/// Feeds the commands to the surface, in order.
pub fn render_commands<S: DrawingSurface + ?Sized>(commands: &[PathCommand], surface: &mut S) {
    for command in commands {
        match *command {
            PathCommand::MoveTo { to } => surface.move_to(to),
            PathCommand::LineTo { to } => surface.line_to(to),
            PathCommand::CurveTo { ctrl1, ctrl2, to } => surface.cubic_to(ctrl1, ctrl2, to),
            PathCommand::Close => surface.close_path(),
        }
    }
}

/// A `DrawingSurface` that builds a `String` representation of the path
/// using the SVG syntax.
///
/// Only absolute `M`, `L`, `C` and `Z` commands are produced, separated by single
/// spaces.
#[derive(Clone, Debug, Default)]
pub struct SvgSerializer {
    path: String,
}

impl SvgSerializer {
    pub fn new() -> Self {
        SvgSerializer {
            path: String::new(),
        }
    }

    pub fn build(self) -> String {
        self.path
    }

    fn separate(&mut self) {
        if !self.path.is_empty() {
            self.path.push(' ');
        }
    }
}

impl DrawingSurface for SvgSerializer {
    fn move_to(&mut self, to: Point) {
        self.separate();
        let _ = write!(self.path, "M {} {}", to.x, to.y);
    }

    fn line_to(&mut self, to: Point) {
        self.separate();
        let _ = write!(self.path, "L {} {}", to.x, to.y);
    }

    fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.separate();
        let _ = write!(
            self.path,
            "C {} {} {} {} {} {}",
            ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
        );
    }

    fn close_path(&mut self) {
        self.separate();
        self.path.push('Z');
    }
}

#[cfg(test)]
use crate::math::point;

#[test]
fn serialize_commands() {
    let mut serializer = SvgSerializer::new();
    render_commands(
        &[
            PathCommand::MoveTo { to: point(0.0, 0.5) },
            PathCommand::CurveTo {
                ctrl1: point(1.0, 2.0),
                ctrl2: point(-3.0, 4.25),
                to: point(5.0, 6.0),
            },
            PathCommand::LineTo { to: point(10.0, 0.0) },
            PathCommand::Close,
        ],
        &mut serializer,
    );

    assert_eq!(serializer.build(), "M 0 0.5 C 1 2 -3 4.25 5 6 L 10 0 Z");
}

#[test]
fn render_calls_in_order() {
    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl DrawingSurface for Recorder {
        fn move_to(&mut self, to: Point) {
            self.0.push(format!("move {:?}", to.to_tuple()));
        }
        fn line_to(&mut self, to: Point) {
            self.0.push(format!("line {:?}", to.to_tuple()));
        }
        fn cubic_to(&mut self, _: Point, _: Point, to: Point) {
            self.0.push(format!("cubic {:?}", to.to_tuple()));
        }
        fn close_path(&mut self) {
            self.0.push("close".to_string());
        }
    }

    let mut recorder = Recorder::default();
    render_commands(
        &[
            PathCommand::MoveTo { to: point(1.0, 2.0) },
            PathCommand::LineTo { to: point(3.0, 4.0) },
            PathCommand::Close,
        ],
        &mut recorder,
    );

    assert_eq!(
        recorder.0,
        vec!["move (1.0, 2.0)", "line (3.0, 4.0)", "close"]
    );
}
