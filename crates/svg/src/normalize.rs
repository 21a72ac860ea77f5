//! Rewrites raw segments into the canonical commands of a path.
//!
//! This happens in two passes: [`absolutize`] resolves relative coordinates, then
//! [`canonicalize`] rewrites every segment kind in terms of move-to, line-to,
//! cubic curve-to and close commands.

use crate::parser::{RawSegment, SegmentKey, SegmentKind};

use vecpath_path::geom::{ArcFlags, QuadraticBezierSegment, SvgArc};
use vecpath_path::math::{point, vector, Angle, Point};
use vecpath_path::PathCommand;

/// Resolves relative segments against the current position.
///
/// The output only contains absolute segments, with the same kinds and parameters
/// as the input.
pub fn absolutize(segments: &[RawSegment]) -> Vec<RawSegment> {
    let mut output = Vec::with_capacity(segments.len());
    let mut current = Point::origin();
    let mut subpath_start = Point::origin();

    for segment in segments {
        let mut data = segment.data.clone();
        let kind = segment.key.kind;

        if segment.key.relative {
            match kind {
                SegmentKind::HorizontalLineTo => data[0] += current.x,
                SegmentKind::VerticalLineTo => data[0] += current.y,
                SegmentKind::ArcTo => {
                    data[5] += current.x;
                    data[6] += current.y;
                }
                _ => {
                    // All other parameters are coordinate pairs.
                    for pair in data.chunks_mut(2) {
                        pair[0] += current.x;
                        pair[1] += current.y;
                    }
                }
            }
        }

        let n = data.len();
        match kind {
            SegmentKind::MoveTo => {
                current = point(data[0], data[1]);
                subpath_start = current;
            }
            SegmentKind::HorizontalLineTo => current.x = data[0],
            SegmentKind::VerticalLineTo => current.y = data[0],
            SegmentKind::Close => current = subpath_start,
            _ => current = point(data[n - 2], data[n - 1]),
        }

        output.push(RawSegment {
            key: SegmentKey::absolute(kind),
            data,
        });
    }

    output
}

/// Rewrites absolute segments into path commands.
///
/// Axis-aligned lines become line-to commands, quadratic curves are elevated to
/// cubic curves and arcs are approximated with cubic curves. Smooth curves reflect
/// the previous control point only if the previous segment is a curve of the same
/// degree, otherwise their first control point is the current position.
///
/// Relative segments must have gone through [`absolutize`] first, their coordinates
/// are read as absolute here.
pub fn canonicalize(segments: &[RawSegment]) -> Vec<PathCommand> {
    let mut output = Vec::with_capacity(segments.len());
    let mut current = Point::origin();
    let mut subpath_start = Point::origin();
    // Kind of the previous segment and its last control point.
    let mut previous: Option<(SegmentKind, Point)> = None;

    for segment in segments {
        let d = &segment.data;
        let kind = segment.key.kind;
        let mut last_ctrl = None;

        match kind {
            SegmentKind::MoveTo => {
                current = point(d[0], d[1]);
                subpath_start = current;
                output.push(PathCommand::MoveTo { to: current });
            }
            SegmentKind::LineTo => {
                current = point(d[0], d[1]);
                output.push(PathCommand::LineTo { to: current });
            }
            SegmentKind::HorizontalLineTo => {
                current.x = d[0];
                output.push(PathCommand::LineTo { to: current });
            }
            SegmentKind::VerticalLineTo => {
                current.y = d[0];
                output.push(PathCommand::LineTo { to: current });
            }
            SegmentKind::CubicTo | SegmentKind::SmoothCubicTo => {
                let (ctrl1, rest) = if kind == SegmentKind::CubicTo {
                    (point(d[0], d[1]), &d[2..])
                } else {
                    let reflected = match previous {
                        Some((SegmentKind::CubicTo, ctrl))
                        | Some((SegmentKind::SmoothCubicTo, ctrl)) => reflect(ctrl, current),
                        _ => current,
                    };
                    (reflected, &d[..])
                };
                let ctrl2 = point(rest[0], rest[1]);
                let to = point(rest[2], rest[3]);

                output.push(PathCommand::CurveTo { ctrl1, ctrl2, to });
                last_ctrl = Some(ctrl2);
                current = to;
            }
            SegmentKind::QuadraticTo | SegmentKind::SmoothQuadraticTo => {
                let (ctrl, to) = if kind == SegmentKind::QuadraticTo {
                    (point(d[0], d[1]), point(d[2], d[3]))
                } else {
                    let reflected = match previous {
                        Some((SegmentKind::QuadraticTo, ctrl))
                        | Some((SegmentKind::SmoothQuadraticTo, ctrl)) => reflect(ctrl, current),
                        _ => current,
                    };
                    (reflected, point(d[0], d[1]))
                };

                let cubic = QuadraticBezierSegment {
                    from: current,
                    ctrl,
                    to,
                }
                .to_cubic();

                output.push(PathCommand::CurveTo {
                    ctrl1: cubic.ctrl1,
                    ctrl2: cubic.ctrl2,
                    to,
                });
                last_ctrl = Some(ctrl);
                current = to;
            }
            SegmentKind::ArcTo => {
                let to = point(d[5], d[6]);
                let arc = SvgArc {
                    from: current,
                    to,
                    radii: vector(d[0], d[1]),
                    x_rotation: Angle::degrees(d[2]),
                    flags: ArcFlags {
                        large_arc: d[3] != 0.0,
                        sweep: d[4] != 0.0,
                    },
                };

                arc.for_each_cubic_bezier(&mut |curve| {
                    output.push(PathCommand::CurveTo {
                        ctrl1: curve.ctrl1,
                        ctrl2: curve.ctrl2,
                        to: curve.to,
                    });
                });
                current = to;
            }
            SegmentKind::Close => {
                output.push(PathCommand::Close);
                current = subpath_start;
            }
        }

        previous = last_ctrl.map(|ctrl| (kind, ctrl));
    }

    output
}

/// Absolutizes then canonicalizes raw segments.
pub fn normalize(segments: &[RawSegment]) -> Vec<PathCommand> {
    canonicalize(&absolutize(segments))
}

// The reflection of `ctrl` about `center`.
fn reflect(ctrl: Point, center: Point) -> Point {
    center + (center - ctrl)
}

impl From<PathCommand> for RawSegment {
    fn from(command: PathCommand) -> Self {
        match command {
            PathCommand::MoveTo { to } => {
                RawSegment::new(SegmentKey::absolute(SegmentKind::MoveTo), &[to.x, to.y])
            }
            PathCommand::LineTo { to } => {
                RawSegment::new(SegmentKey::absolute(SegmentKind::LineTo), &[to.x, to.y])
            }
            PathCommand::CurveTo { ctrl1, ctrl2, to } => RawSegment::new(
                SegmentKey::absolute(SegmentKind::CubicTo),
                &[ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y],
            ),
            PathCommand::Close => RawSegment::new(SegmentKey::absolute(SegmentKind::Close), &[]),
        }
    }
}

#[cfg(test)]
use crate::parser::{parse_segments, ParserOptions};

#[cfg(test)]
fn normalized(src: &str) -> Vec<PathCommand> {
    normalize(&parse_segments(src, &ParserOptions::DEFAULT).unwrap())
}

#[test]
fn relative_commands() {
    let segments = parse_segments("m 1 1 l 2 0 h 3 v 4 c 1 1 2 2 3 3 z l 1 1", &ParserOptions::DEFAULT)
        .unwrap();
    let absolute = absolutize(&segments);

    assert!(absolute.iter().all(|segment| !segment.key.relative));
    assert_eq!(absolute[1].data.as_slice(), &[3.0, 1.0]);
    assert_eq!(absolute[2].data.as_slice(), &[6.0]);
    assert_eq!(absolute[3].data.as_slice(), &[5.0]);
    assert_eq!(absolute[4].data.as_slice(), &[7.0, 6.0, 8.0, 7.0, 9.0, 8.0]);
    // Close goes back to the start of the sub-path.
    assert_eq!(absolute[6].data.as_slice(), &[2.0, 2.0]);
}

#[test]
fn relative_arc() {
    let segments = parse_segments("M 10 10 a 5 5 30 1 0 10 -2", &ParserOptions::DEFAULT).unwrap();
    let absolute = absolutize(&segments);
    assert_eq!(
        absolute[1].data.as_slice(),
        &[5.0, 5.0, 30.0, 1.0, 0.0, 20.0, 8.0]
    );
}

#[test]
fn horizontal_and_vertical_lines() {
    assert_eq!(
        normalized("M 1 2 H 5 V 7"),
        vec![
            PathCommand::MoveTo { to: point(1.0, 2.0) },
            PathCommand::LineTo { to: point(5.0, 2.0) },
            PathCommand::LineTo { to: point(5.0, 7.0) },
        ]
    );
}

#[test]
fn quadratic_elevation_is_exact() {
    let commands = normalized("M 1 3 Q 7.5 -2.25 10 11");
    let p0 = point(1.0, 3.0);
    let ctrl = point(7.5, -2.25);
    let p3 = point(10.0, 11.0);

    assert_eq!(
        commands[1],
        PathCommand::CurveTo {
            ctrl1: p0 + (ctrl - p0) * (2.0 / 3.0),
            ctrl2: p3 + (ctrl - p3) * (2.0 / 3.0),
            to: p3,
        }
    );
}

#[test]
fn smooth_cubic_reflects_previous_cubic() {
    let commands = normalized("M 0 0 C 0 10 10 10 10 0 S 20 -10 20 0");
    assert_eq!(
        commands[2],
        PathCommand::CurveTo {
            ctrl1: point(10.0, -10.0),
            ctrl2: point(20.0, -10.0),
            to: point(20.0, 0.0),
        }
    );

    // Chained smooth curves reflect each other.
    let commands = normalized("M 0 0 C 0 10 10 10 10 0 S 20 -10 20 0 S 30 10 30 0");
    assert_eq!(
        commands[3],
        PathCommand::CurveTo {
            ctrl1: point(20.0, 10.0),
            ctrl2: point(30.0, 10.0),
            to: point(30.0, 0.0),
        }
    );
}

#[test]
fn smooth_curves_without_a_matching_predecessor() {
    // After a line, S starts with the current point.
    let commands = normalized("M 0 0 L 10 0 S 20 10 20 0");
    assert_eq!(
        commands[2],
        PathCommand::CurveTo {
            ctrl1: point(10.0, 0.0),
            ctrl2: point(20.0, 10.0),
            to: point(20.0, 0.0),
        }
    );

    // T after a cubic curve doesn't reflect the cubic's control point.
    let commands = normalized("M 0 0 C 0 10 10 10 10 0 T 20 0");
    assert_eq!(
        commands[2],
        PathCommand::CurveTo {
            ctrl1: point(10.0, 0.0),
            ctrl2: point(20.0, 0.0),
            to: point(20.0, 0.0),
        }
    );
}

#[test]
fn smooth_quadratic_reflects_previous_quadratic() {
    let commands = normalized("M 0 0 Q 3 6 6 0 T 12 0");
    // The reflected control point is (9, -6).
    let from = point(6.0, 0.0);
    let ctrl = point(9.0, -6.0);
    let to = point(12.0, 0.0);
    assert_eq!(
        commands[2],
        PathCommand::CurveTo {
            ctrl1: from + (ctrl - from) * (2.0 / 3.0),
            ctrl2: to + (ctrl - to) * (2.0 / 3.0),
            to,
        }
    );
}

#[test]
fn arcs_become_cubic_curves() {
    let commands = normalized("M0,0 A5,5 0 0,1 10,0");
    assert_eq!(commands.len(), 3);
    assert!(matches!(commands[1], PathCommand::CurveTo { .. }));
    assert_eq!(commands[2].to(), Some(point(10.0, 0.0)));

    // A null radius draws a straight curve.
    assert_eq!(
        normalized("M 1 1 A 0 5 0 0 1 4 5"),
        vec![
            PathCommand::MoveTo { to: point(1.0, 1.0) },
            PathCommand::CurveTo {
                ctrl1: point(1.0, 1.0),
                ctrl2: point(4.0, 5.0),
                to: point(4.0, 5.0),
            },
        ]
    );

    // Coincident endpoints draw nothing.
    assert_eq!(normalized("M 1 1 A 5 5 0 0 1 1 1").len(), 1);

    // Unless the radius is null.
    assert_eq!(
        normalized("M 1 1 A 0 0 0 0 0 1 1"),
        vec![
            PathCommand::MoveTo { to: point(1.0, 1.0) },
            PathCommand::CurveTo {
                ctrl1: point(1.0, 1.0),
                ctrl2: point(1.0, 1.0),
                to: point(1.0, 1.0),
            },
        ]
    );
}

#[test]
fn canonical_commands_are_left_untouched() {
    let commands = normalized("M 0 0 C 1 2 3 4 5 6 L 7 8 Z M 9 9 L 1 1");
    let segments: Vec<RawSegment> = commands.iter().copied().map(RawSegment::from).collect();

    assert_eq!(normalize(&segments), commands);
}
