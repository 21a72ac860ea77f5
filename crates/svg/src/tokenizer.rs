//! Splits path data into command letters and numbers.

use crate::ParseError;

/// The twenty command letters of the path data syntax.
pub const COMMANDS: &str = "MmLlCcQqSsTtAaHhVvZz";

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TokenKind {
    Command(char),
    Number(f64),
}

/// A command letter or a number, with the text it was read from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Token<'l> {
    pub kind: TokenKind,
    pub text: &'l str,
    pub line: i32,
    pub column: i32,
}

// A cursor over the characters of the source keeping track of line and column.
struct Source<'l> {
    src: &'l str,
    pos: usize,
    line: i32,
    col: i32,
}

impl<'l> Source<'l> {
    fn new(src: &'l str) -> Self {
        Source {
            src,
            pos: 0,
            line: 0,
            col: 0,
        }
    }

    fn current(&self) -> Option<char> {
        self.peek(0)
    }

    fn peek(&self, n: usize) -> Option<char> {
        self.src[self.pos..].chars().nth(n)
    }

    fn advance_one(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.col = 0;
            } else {
                self.col += 1;
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current() {
            if !c.is_whitespace() && c != ',' {
                break;
            }
            self.advance_one();
        }
    }

    fn skip_digits(&mut self) -> usize {
        let mut count = 0;
        while self.current().map_or(false, |c| c.is_ascii_digit()) {
            self.advance_one();
            count += 1;
        }

        count
    }
}

fn is_digit(c: Option<char>) -> bool {
    c.map_or(false, |c| c.is_ascii_digit())
}

/// Splits `src` into tokens.
///
/// Whitespace and commas separate tokens and are otherwise ignored. Tokenizing stops
/// at the end of the input or at the first `stop_at` character. Any character
/// that is neither a command letter nor part of a number fails the whole input, and
/// so does a number too large to be represented.
pub fn tokenize(src: &str, stop_at: Option<char>) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut source = Source::new(src);

    source.skip_whitespace();
    while let Some(c) = source.current() {
        if stop_at == Some(c) {
            break;
        }

        let start = source.pos;
        let line = source.line;
        let column = source.col;
        let invalid = ParseError::InvalidCharacter {
            src: c,
            line,
            column,
        };

        let kind = if COMMANDS.contains(c) {
            source.advance_one();
            TokenKind::Command(c)
        } else if c.is_ascii_digit() || c == '.' || c == '-' || c == '+' {
            if !scan_number(&mut source) {
                return Err(invalid);
            }
            let text = &source.src[start..source.pos];
            match text.parse::<f64>() {
                Ok(value) if value.is_finite() => TokenKind::Number(value),
                Ok(_) => {
                    return Err(ParseError::NumberOutOfRange {
                        src: text.to_string(),
                        line,
                        column,
                    })
                }
                Err(_) => return Err(invalid),
            }
        } else {
            return Err(invalid);
        };

        tokens.push(Token {
            kind,
            text: &src[start..source.pos],
            line,
            column,
        });

        source.skip_whitespace();
    }

    Ok(tokens)
}

// Consumes `[-+]?[0-9]+(\.[0-9]*)?` or `[-+]?\.[0-9]+`, followed by an optional
// exponent. The exponent is only consumed if it has digits.
fn scan_number(source: &mut Source) -> bool {
    if matches!(source.current(), Some('-') | Some('+')) {
        source.advance_one();
    }

    if source.skip_digits() > 0 {
        if source.current() == Some('.') {
            source.advance_one();
            source.skip_digits();
        }
    } else if source.current() == Some('.') && is_digit(source.peek(1)) {
        source.advance_one();
        source.skip_digits();
    } else {
        return false;
    }

    if matches!(source.current(), Some('e') | Some('E')) {
        let signed = matches!(source.peek(1), Some('-') | Some('+'));
        let digits_at = if signed { 2 } else { 1 };
        if is_digit(source.peek(digits_at)) {
            for _ in 0..digits_at {
                source.advance_one();
            }
            source.skip_digits();
        }
    }

    true
}

#[cfg(test)]
fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize(src, None)
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn commands_and_numbers() {
    use TokenKind::*;

    assert_eq!(
        kinds("M0,0 L10 -2.5Z"),
        vec![
            Command('M'),
            Number(0.0),
            Number(0.0),
            Command('L'),
            Number(10.0),
            Number(-2.5),
            Command('Z'),
        ]
    );
    assert_eq!(kinds(""), vec![]);
    assert_eq!(kinds(" ,\n\t "), vec![]);
}

#[test]
fn number_forms() {
    use TokenKind::*;

    assert_eq!(
        kinds("1e-2 -1E3 +4 .5 -.25 3. 0.6.5"),
        vec![
            Number(0.01),
            Number(-1000.0),
            Number(4.0),
            Number(0.5),
            Number(-0.25),
            Number(3.0),
            Number(0.6),
            Number(0.5),
        ]
    );
    // A sign starts a new number.
    assert_eq!(kinds("1-2"), vec![Number(1.0), Number(-2.0)]);
    assert_eq!(kinds("2e+1"), vec![Number(20.0)]);
}

#[test]
fn dangling_exponent() {
    assert_eq!(
        tokenize("1e", None),
        Err(ParseError::InvalidCharacter {
            src: 'e',
            line: 0,
            column: 1,
        })
    );
    assert_eq!(
        tokenize("M 1 2e+L", None),
        Err(ParseError::InvalidCharacter {
            src: 'e',
            line: 0,
            column: 5,
        })
    );
}

#[test]
fn invalid_characters() {
    assert_eq!(
        tokenize("M 0 0\n L 1 x", None),
        Err(ParseError::InvalidCharacter {
            src: 'x',
            line: 1,
            column: 5,
        })
    );
    assert_eq!(
        tokenize("M -", None),
        Err(ParseError::InvalidCharacter {
            src: '-',
            line: 0,
            column: 2,
        })
    );
    assert_eq!(
        tokenize("M 0 0 é", None),
        Err(ParseError::InvalidCharacter {
            src: 'é',
            line: 0,
            column: 6,
        })
    );
}

#[test]
fn numbers_out_of_range() {
    assert_eq!(
        tokenize("M 0 0 1e999 0", None),
        Err(ParseError::NumberOutOfRange {
            src: "1e999".to_string(),
            line: 0,
            column: 6,
        })
    );
    assert!(tokenize("M 0 0 -1e400 0", None).is_err());
    // Underflow rounds to zero.
    assert_eq!(kinds("1e-400"), vec![TokenKind::Number(0.0)]);
}

#[test]
fn positions_and_text() {
    let tokens = tokenize("M 10\n  -3.5e1", None).unwrap();
    assert_eq!(tokens[1].text, "10");
    assert_eq!((tokens[1].line, tokens[1].column), (0, 2));
    assert_eq!(tokens[2].text, "-3.5e1");
    assert_eq!((tokens[2].line, tokens[2].column), (1, 2));
}

#[test]
fn stop_at() {
    let tokens = tokenize("M 1 1 L 2 2 | garbage", Some('|')).unwrap();
    assert_eq!(tokens.len(), 6);
}
