//! Reads path data into raw segments, one per command.

use crate::tokenizer::{tokenize, Token, TokenKind};
use crate::ParseError;

use arrayvec::ArrayVec;

/// The drawing operation of a segment, regardless of its coordinates being
/// relative or absolute.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CubicTo,
    SmoothCubicTo,
    QuadraticTo,
    SmoothQuadraticTo,
    ArcTo,
    Close,
}

impl SegmentKind {
    /// Number of parameters of the segment.
    pub fn arity(self) -> usize {
        match self {
            SegmentKind::ArcTo => 7,
            SegmentKind::CubicTo => 6,
            SegmentKind::QuadraticTo | SegmentKind::SmoothCubicTo => 4,
            SegmentKind::MoveTo | SegmentKind::LineTo | SegmentKind::SmoothQuadraticTo => 2,
            SegmentKind::HorizontalLineTo | SegmentKind::VerticalLineTo => 1,
            SegmentKind::Close => 0,
        }
    }
}

/// The command letter of a segment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SegmentKey {
    pub kind: SegmentKind,
    pub relative: bool,
}

impl SegmentKey {
    pub fn new(kind: SegmentKind, relative: bool) -> Self {
        SegmentKey { kind, relative }
    }

    pub fn absolute(kind: SegmentKind) -> Self {
        SegmentKey::new(kind, false)
    }

    pub fn from_char(c: char) -> Option<Self> {
        let kind = match c.to_ascii_uppercase() {
            'M' => SegmentKind::MoveTo,
            'L' => SegmentKind::LineTo,
            'H' => SegmentKind::HorizontalLineTo,
            'V' => SegmentKind::VerticalLineTo,
            'C' => SegmentKind::CubicTo,
            'S' => SegmentKind::SmoothCubicTo,
            'Q' => SegmentKind::QuadraticTo,
            'T' => SegmentKind::SmoothQuadraticTo,
            'A' => SegmentKind::ArcTo,
            'Z' => SegmentKind::Close,
            _ => return None,
        };

        Some(SegmentKey::new(kind, c.is_ascii_lowercase()))
    }

    pub fn to_char(self) -> char {
        let c = match self.kind {
            SegmentKind::MoveTo => 'M',
            SegmentKind::LineTo => 'L',
            SegmentKind::HorizontalLineTo => 'H',
            SegmentKind::VerticalLineTo => 'V',
            SegmentKind::CubicTo => 'C',
            SegmentKind::SmoothCubicTo => 'S',
            SegmentKind::QuadraticTo => 'Q',
            SegmentKind::SmoothQuadraticTo => 'T',
            SegmentKind::ArcTo => 'A',
            SegmentKind::Close => 'Z',
        };

        if self.relative {
            c.to_ascii_lowercase()
        } else {
            c
        }
    }

    #[inline]
    pub fn arity(self) -> usize {
        self.kind.arity()
    }
}

/// A command with its parameters, as written in the path data.
#[derive(Clone, Debug, PartialEq)]
pub struct RawSegment {
    pub key: SegmentKey,
    pub data: ArrayVec<f64, 7>,
}

impl RawSegment {
    pub fn new(key: SegmentKey, data: &[f64]) -> Self {
        RawSegment {
            key,
            data: data.iter().copied().collect(),
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct ParserOptions {
    /// Insert a move to the origin when the path data doesn't start with a move-to
    /// command. Otherwise such path data is an error.
    pub implicit_move_to: bool,
    /// Optionally stop parsing when encountering a provided special character.
    pub stop_at: Option<char>,
}

impl ParserOptions {
    pub const DEFAULT: ParserOptions = ParserOptions {
        implicit_move_to: true,
        stop_at: None,
    };
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions::DEFAULT
    }
}

/// Reads path data into raw segments.
///
/// Numbers that follow a segment's parameters repeat its command, except after a
/// move-to where they are line-to parameters.
pub fn parse_segments(src: &str, options: &ParserOptions) -> Result<Vec<RawSegment>, ParseError> {
    let mut tokens = tokenize(src, options.stop_at)?;

    let starts_with_move_to = match tokens.first() {
        None => return Ok(Vec::new()),
        Some(token) => matches!(token.kind, TokenKind::Command('M') | TokenKind::Command('m')),
    };

    if !starts_with_move_to {
        let first = tokens[0];
        if !options.implicit_move_to {
            return Err(ParseError::MissingMoveTo {
                src: first.text.to_string(),
                line: first.line,
                column: first.column,
            });
        }

        log::debug!("Path data starts with {:?}, moving to the origin first", first.text);
        let injected = |kind| Token {
            kind,
            text: "",
            line: first.line,
            column: first.column,
        };
        tokens.splice(
            0..0,
            [
                injected(TokenKind::Command('M')),
                injected(TokenKind::Number(0.0)),
                injected(TokenKind::Number(0.0)),
            ],
        );
    }

    read_segments(&tokens)
}

fn read_segments(tokens: &[Token]) -> Result<Vec<RawSegment>, ParseError> {
    let mut segments = Vec::new();
    let mut implicit_key: Option<SegmentKey> = None;
    let mut idx = 0;

    while let Some(token) = tokens.get(idx) {
        let key = match token.kind {
            TokenKind::Command(c) => {
                idx += 1;
                SegmentKey::from_char(c).ok_or_else(|| ParseError::InvalidCharacter {
                    src: c,
                    line: token.line,
                    column: token.column,
                })?
            }
            TokenKind::Number(_) => implicit_key.ok_or_else(|| ParseError::ImplicitCommand {
                src: token.text.to_string(),
                line: token.line,
                column: token.column,
            })?,
        };

        let arity = key.arity();
        let mut data: ArrayVec<f64, 7> = ArrayVec::new();
        while data.len() < arity {
            match tokens.get(idx) {
                Some(Token {
                    kind: TokenKind::Number(value),
                    ..
                }) => {
                    data.push(*value);
                    idx += 1;
                }
                Some(other) => {
                    return Err(ParseError::Number {
                        command: key.to_char(),
                        src: other.text.to_string(),
                        line: other.line,
                        column: other.column,
                    });
                }
                None => {
                    return Err(ParseError::UnexpectedEnd {
                        command: key.to_char(),
                        expected: arity,
                        found: data.len(),
                    });
                }
            }
        }

        segments.push(RawSegment { key, data });

        implicit_key = match key.kind {
            SegmentKind::MoveTo => Some(SegmentKey::new(SegmentKind::LineTo, key.relative)),
            SegmentKind::Close => None,
            _ => Some(key),
        };
    }

    Ok(segments)
}

#[cfg(test)]
fn keys(segments: &[RawSegment]) -> String {
    segments.iter().map(|segment| segment.key.to_char()).collect()
}

#[test]
fn arity_of_every_command() {
    for (c, arity) in [
        ('A', 7),
        ('c', 6),
        ('Q', 4),
        ('s', 4),
        ('L', 2),
        ('m', 2),
        ('T', 2),
        ('h', 1),
        ('V', 1),
        ('z', 0),
    ] {
        let key = SegmentKey::from_char(c).unwrap();
        assert_eq!(key.arity(), arity);
        assert_eq!(key.to_char(), c);
    }
    assert_eq!(SegmentKey::from_char('x'), None);
}

#[test]
fn simple_square() {
    let segments = parse_segments("M 0 0 L 1 0 L 1 1 L 0 1 Z", &ParserOptions::DEFAULT).unwrap();
    assert_eq!(keys(&segments), "MLLLZ");
    assert_eq!(segments[2].data.as_slice(), &[1.0, 1.0]);
    assert!(segments[4].data.is_empty());
}

#[test]
fn implicit_repetition() {
    let segments = parse_segments("M 0 0 1 1 2 2 c 1 1 2 2 3 3 4 4 5 5 6 6", &ParserOptions::DEFAULT)
        .unwrap();
    assert_eq!(keys(&segments), "MLLcc");
    assert_eq!(segments[4].data.as_slice(), &[4.0, 4.0, 5.0, 5.0, 6.0, 6.0]);

    let segments = parse_segments("m 1 1 2 2", &ParserOptions::DEFAULT).unwrap();
    assert_eq!(keys(&segments), "ml");
}

#[test]
fn implicit_move_to() {
    let segments = parse_segments("L 10 10", &ParserOptions::DEFAULT).unwrap();
    assert_eq!(keys(&segments), "ML");
    assert_eq!(segments[0].data.as_slice(), &[0.0, 0.0]);

    // Numbers first are line-to parameters after the injected move.
    let segments = parse_segments("5 5 6 6", &ParserOptions::DEFAULT).unwrap();
    assert_eq!(keys(&segments), "MLL");

    let options = ParserOptions {
        implicit_move_to: false,
        ..ParserOptions::DEFAULT
    };
    assert_eq!(
        parse_segments(" L 10 10", &options),
        Err(ParseError::MissingMoveTo {
            src: "L".to_string(),
            line: 0,
            column: 1,
        })
    );
    // A leading number is reported as written, not as a command letter.
    assert_eq!(
        parse_segments("-5.5 5", &options),
        Err(ParseError::MissingMoveTo {
            src: "-5.5".to_string(),
            line: 0,
            column: 0,
        })
    );
}

#[test]
fn empty() {
    assert_eq!(parse_segments("", &ParserOptions::DEFAULT), Ok(Vec::new()));
    assert_eq!(parse_segments(" \n ", &ParserOptions::DEFAULT), Ok(Vec::new()));
}

#[test]
fn path_data_ended_short() {
    assert_eq!(
        parse_segments("M 0 0 C 1 1 2 2 3", &ParserOptions::DEFAULT),
        Err(ParseError::UnexpectedEnd {
            command: 'C',
            expected: 6,
            found: 5,
        })
    );
    // Only complete repetitions are accepted.
    assert_eq!(
        parse_segments("M 0 0 L 1 1 2", &ParserOptions::DEFAULT),
        Err(ParseError::UnexpectedEnd {
            command: 'L',
            expected: 2,
            found: 1,
        })
    );
}

#[test]
fn param_not_a_number() {
    assert_eq!(
        parse_segments("M 0 0 L 1 Z", &ParserOptions::DEFAULT),
        Err(ParseError::Number {
            command: 'L',
            src: "Z".to_string(),
            line: 0,
            column: 10,
        })
    );
}

#[test]
fn number_after_close() {
    assert_eq!(
        parse_segments("M 0 0 L 1 1 Z 2 2", &ParserOptions::DEFAULT),
        Err(ParseError::ImplicitCommand {
            src: "2".to_string(),
            line: 0,
            column: 14,
        })
    );
}

#[test]
fn invalid_character_fails_everything() {
    assert_eq!(
        parse_segments("M 0 0 L 1 1 x", &ParserOptions::DEFAULT),
        Err(ParseError::InvalidCharacter {
            src: 'x',
            line: 0,
            column: 12,
        })
    );
}

#[test]
fn stop_at() {
    let options = ParserOptions {
        stop_at: Some('|'),
        ..ParserOptions::DEFAULT
    };
    let segments = parse_segments("M 0 0 L 1 1|L 2 2", &options).unwrap();
    assert_eq!(keys(&segments), "ML");
}
