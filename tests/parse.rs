extern crate vecpath;

use vecpath::math::{point, Angle, Point};
use vecpath::path::DrawingSurface;
use vecpath::{parse, parse_with_options, ParseError, ParserOptions, PathCommand};

fn approx_eq(a: Point, b: Point) -> bool {
    (a - b).length() < 1e-9
}

#[test]
fn closed_triangle() {
    let path = parse("M0,0 L10,0 L10,10 Z").unwrap();

    assert_eq!(
        path.commands(),
        &[
            PathCommand::MoveTo { to: point(0.0, 0.0) },
            PathCommand::LineTo { to: point(10.0, 0.0) },
            PathCommand::LineTo { to: point(10.0, 10.0) },
            PathCommand::Close,
        ]
    );
    assert!((path.length() - 34.142).abs() < 1e-3);
    assert_eq!(path.to_svg(), "M 0 0 L 10 0 L 10 10 Z");

    // Three quarters along the perimeter is on the closing diagonal edge.
    let p = path.point_at(0.75).unwrap();
    assert!((p.x - p.y).abs() < 1e-6);
    assert!(p.x > 0.0 && p.x < 10.0);
}

#[test]
fn arcs_are_converted() {
    let path = parse("M0,0 A5,5 0 0,1 10,0").unwrap();

    assert!(path.iter().all(|command| matches!(
        command,
        PathCommand::MoveTo { .. } | PathCommand::CurveTo { .. }
    )));
    assert_eq!(path.point_at(0.0), Some(point(0.0, 0.0)));
    assert_eq!(path.point_at(1.0), Some(point(10.0, 0.0)));

    // Half of a circle of radius 5.
    assert!((path.length() - 5.0 * std::f64::consts::PI).abs() < 0.01);
    let top = path.point_at(0.5).unwrap();
    assert!((top.x - 5.0).abs() < 0.05);
    assert!((top.y.abs() - 5.0).abs() < 0.05);
    assert!((path.radius_at(0.5).unwrap() - 5.0).abs() < 0.2);
}

#[test]
fn null_radius_arc_between_coincident_points() {
    let path = parse("M 1 1 A 0 0 0 0 0 1 1").unwrap();

    assert_eq!(path.commands().len(), 2);
    assert!(matches!(path.commands()[1], PathCommand::CurveTo { .. }));
    assert_eq!(path.length(), 0.0);
    assert_eq!(path.point_at(0.0), Some(point(1.0, 1.0)));
    assert_eq!(path.point_at(1.0), Some(point(1.0, 1.0)));
    assert_eq!(path.curvature_at(0.5), Some(0.0));
}

#[test]
fn relative_and_smooth_commands() {
    let absolute = parse("M 10 10 L 20 10 C 20 20 30 20 30 10 S 40 0 40 10 Q 45 20 50 10 T 60 10").unwrap();
    let relative = parse("m 10 10 l 10 0 c 0 10 10 10 10 0 s 10 -10 10 0 q 5 10 10 0 t 10 0").unwrap();

    assert_eq!(absolute.commands().len(), relative.commands().len());
    for (a, b) in absolute.iter().zip(relative.iter()) {
        assert!(approx_eq(a.to().unwrap(), b.to().unwrap()));
    }
}

#[test]
fn endpoints_are_exact() {
    let path = parse("M 3 4 C 10 20 30 -5 40 7 L 50 50").unwrap();
    assert_eq!(path.point_at(0.0), Some(point(3.0, 4.0)));
    assert_eq!(path.point_at(1.0), Some(point(50.0, 50.0)));

    // Out of range fractions are clamped.
    assert_eq!(path.point_at(-1.0), path.point_at(0.0));
    assert_eq!(path.point_at(2.0), path.point_at(1.0));
}

#[test]
fn length_is_the_sum_of_the_curve_lengths() {
    let path = parse("M 0 0 C 0 10 10 10 10 0 L 20 0 Z M 30 0 Q 40 10 50 0 A 10 5 30 1 1 30 20").unwrap();
    let computed = path.compute();

    let sum: f64 = computed
        .subpaths()
        .iter()
        .flat_map(|subpath| subpath.curve_lengths().iter())
        .sum();

    assert_eq!(computed.subpaths().len(), 2);
    assert!((path.length() - sum).abs() < 1e-9);
}

#[test]
fn transforms_keep_the_length() {
    let path = parse("M 0 0 C 0 10 10 10 10 0 Q 15 -5 20 0 Z").unwrap();

    let moved = path.translate(12.0, -3.5);
    let back = moved.translate(-12.0, 3.5);
    for (a, b) in back.iter().zip(path.iter()) {
        match (a.to(), b.to()) {
            (Some(a), Some(b)) => assert!(approx_eq(a, b)),
            (None, None) => {}
            _ => panic!("mismatched commands {:?} {:?}", a, b),
        }
    }

    let rotated = path.rotate(Angle::degrees(33.0));
    assert!((rotated.length() - path.length()).abs() < 1e-6);

    let scaled = path.scale(2.0, 2.0);
    assert!((scaled.length() - 2.0 * path.length()).abs() < 1e-6);
}

#[test]
fn serialized_paths_parse_back() {
    let path = parse("M 1 2 h 5 v 5 q 3 3 0 6 a 2 3 10 0 0 -4 -4 z").unwrap();
    let reparsed = parse(&path.to_svg()).unwrap();

    assert_eq!(reparsed, path);
}

#[test]
fn missing_move_to() {
    let path = parse("L 10 0").unwrap();
    assert_eq!(path.commands()[0], PathCommand::MoveTo { to: point(0.0, 0.0) });
    assert!((path.length() - 10.0).abs() < 1e-9);

    let mut options = ParserOptions::DEFAULT;
    options.implicit_move_to = false;
    assert!(matches!(
        parse_with_options("L 10 0", &options),
        Err(ParseError::MissingMoveTo { ref src, .. }) if src == "L"
    ));
    assert_eq!(
        parse_with_options("5 5", &options).unwrap_err().to_string(),
        "Line 0 Column 0: Expected move-to command, got \"5\"."
    );
}

#[test]
fn malformed_path_data() {
    assert!(matches!(
        parse("M 0 0 L 10 0 ?"),
        Err(ParseError::InvalidCharacter { src: '?', .. })
    ));
    assert!(matches!(
        parse("M 0 0 C 1 2 3 4"),
        Err(ParseError::UnexpectedEnd {
            command: 'C',
            expected: 6,
            found: 4
        })
    ));
    assert!(matches!(
        parse("M 0 0 L 1 A"),
        Err(ParseError::Number { command: 'L', .. })
    ));
    assert!(matches!(
        parse("M 0 0 L 1 1 z 4"),
        Err(ParseError::ImplicitCommand { .. })
    ));

    assert!(matches!(
        parse("M 0 0 1e999 0"),
        Err(ParseError::NumberOutOfRange { .. })
    ));

    let error = parse("M 0 0\nL 1 x").unwrap_err();
    assert_eq!(error.to_string(), "Line 1 Column 4: Invalid character 'x'.");
}

#[test]
fn empty_path_data() {
    let path = parse("").unwrap();
    assert!(path.is_empty());
    assert_eq!(path.length(), 0.0);
    assert_eq!(path.point_at(0.5), None);
    assert_eq!(path.tangent_at(0.5), None);
}

#[derive(Default)]
struct Recorder {
    calls: Vec<String>,
}

impl DrawingSurface for Recorder {
    fn move_to(&mut self, to: Point) {
        self.calls.push(format!("move {} {}", to.x, to.y));
    }

    fn line_to(&mut self, to: Point) {
        self.calls.push(format!("line {} {}", to.x, to.y));
    }

    fn cubic_to(&mut self, _ctrl1: Point, _ctrl2: Point, to: Point) {
        self.calls.push(format!("cubic {} {}", to.x, to.y));
    }

    fn close_path(&mut self) {
        self.calls.push("close".to_string());
    }
}

#[test]
fn render_to_a_surface() {
    let path = parse("M 0 0 H 4 Q 6 0 6 2 Z").unwrap();
    let mut recorder = Recorder::default();
    path.render_to(&mut recorder);

    assert_eq!(
        recorder.calls,
        vec!["move 0 0", "line 4 0", "cubic 6 2", "close"]
    );
}
