use thiserror::Error;

/// Errors produced while reading path data.
///
/// Lines and columns are 0-based. Any error invalidates the whole input, no partial
/// path is produced.
#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ParseError {
    #[error("Line {line} Column {column}: Invalid character {src:?}.")]
    InvalidCharacter { src: char, line: i32, column: i32 },
    #[error("Line {line} Column {column}: Expected number for command {command:?}, got {src:?}.")]
    Number {
        command: char,
        src: String,
        line: i32,
        column: i32,
    },
    #[error("Path data ended short: command {command:?} expects {expected} numbers, got {found}.")]
    UnexpectedEnd {
        command: char,
        expected: usize,
        found: usize,
    },
    #[error("Line {line} Column {column}: Number {src:?} has no command to repeat.")]
    ImplicitCommand { src: String, line: i32, column: i32 },
    #[error("Line {line} Column {column}: Number {src:?} is out of range.")]
    NumberOutOfRange { src: String, line: i32, column: i32 },
    #[error("Line {line} Column {column}: Expected move-to command, got {src:?}.")]
    MissingMoveTo { src: String, line: i32, column: i32 },
}
