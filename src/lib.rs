#![deny(bare_trait_objects)]

//! Vector paths made of cubic bézier curves.
//!
//! This crate reexports the vecpath crates:
//!
//! - [geom](geom/index.html): curve segments, elliptic arcs and transforms.
//! - [path](path/index.html): the [`Path`](path::Path) data structure, its builder
//!   and its arclength-parametrized queries.
//! - [svg](svg/index.html): the SVG path data parser.
//!
//! Every drawable segment of the path data is rewritten as an absolute cubic bézier
//! curve, and queries take the fraction of the total length of the path rather than
//! a per-curve parameter.
//!
//! # Examples
//!
//! ```
//! use vecpath::math::{point, Angle};
//!
//! let path = vecpath::parse("M0,0 L10,0 L10,10 Z").unwrap();
//!
//! assert!((path.length() - 34.142).abs() < 1e-3);
//! assert_eq!(path.point_at(0.0), Some(point(0.0, 0.0)));
//!
//! let rotated = path.rotate(Angle::degrees(45.0));
//! assert!((rotated.length() - path.length()).abs() < 1e-9);
//! ```

pub extern crate vecpath_geom;
pub extern crate vecpath_path;
pub extern crate vecpath_svg;

pub use vecpath_geom as geom;
pub use vecpath_path as path;
pub use vecpath_svg as svg;

pub use path::math;
pub use path::{Path, PathCommand};
pub use svg::{ParseError, ParserOptions};

/// Parses SVG path data with the default options.
///
/// Path data that doesn't start with a move-to command is read as if it started
/// at the origin.
pub fn parse(src: &str) -> Result<Path, ParseError> {
    parse_with_options(src, &ParserOptions::DEFAULT)
}

pub fn parse_with_options(src: &str, options: &ParserOptions) -> Result<Path, ParseError> {
    svg::parse_path(src, options)
}
