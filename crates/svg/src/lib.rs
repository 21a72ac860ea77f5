#![deny(bare_trait_objects)]

//! Reading SVG path data into vecpath paths.
//!
//! Path data goes through three stages: [`tokenize`](tokenizer::tokenize) splits it
//! into command letters and numbers, [`parse_segments`](parser::parse_segments)
//! groups them into [`RawSegment`]s and [`normalize`](normalize::normalize) rewrites
//! those into absolute move-to, line-to, cubic curve-to and close commands.
//!
//! # Examples
//!
//! ```
//! use vecpath_svg::{parse_path, ParserOptions};
//! use vecpath_svg::path::math::point;
//!
//! let path = parse_path("M 0 0 h 10 q 5 0 5 5 a 5 5 0 0 1 -5 5 z", &ParserOptions::DEFAULT).unwrap();
//!
//! assert_eq!(path.point_at(0.0), Some(point(0.0, 0.0)));
//! assert!(path.to_svg().starts_with("M 0 0 L 10 0 C "));
//! ```

pub extern crate vecpath_path as path;

mod error;
pub mod normalize;
pub mod parser;
pub mod tokenizer;

pub use crate::error::ParseError;
pub use crate::normalize::{absolutize, canonicalize, normalize};
pub use crate::parser::{parse_segments, ParserOptions, RawSegment, SegmentKey, SegmentKind};

use crate::path::{Path, PathCommand};

/// Parses path data into canonical commands.
///
/// Any error invalidates the whole input.
pub fn parse_commands(src: &str, options: &ParserOptions) -> Result<Vec<PathCommand>, ParseError> {
    let segments = parse_segments(src, options)?;

    Ok(normalize(&segments))
}

/// Parses path data into a [`Path`].
pub fn parse_path(src: &str, options: &ParserOptions) -> Result<Path, ParseError> {
    Ok(Path::from_commands(parse_commands(src, options)?))
}

#[test]
fn parse_errors_produce_no_path() {
    assert!(parse_path("M 0 0 L 10", &ParserOptions::DEFAULT).is_err());
    assert!(parse_path("M 0 0 L 10 10 #", &ParserOptions::DEFAULT).is_err());
    assert_eq!(parse_commands("", &ParserOptions::DEFAULT), Ok(Vec::new()));
}
