//! Sequential whitespace-delimited integer tokenizer over any buffered reader.

use std::io::{self, BufRead};

use crate::types::{GraphError, GraphResult};

/// Token text reported for a line that is not valid UTF-8.
const INVALID_UTF8: &str = "<invalid UTF-8>";

/// Reads whitespace-separated tokens from a buffered source, one line at a time.
///
/// Tokens may be split across lines arbitrarily. Positions reported in
/// errors are 1-based token counts. A line that is not valid UTF-8 is
/// reported as an invalid token, not as an I/O failure.
pub struct TokenReader<R> {
    reader: R,
    line: String,
    cursor: usize,
    position: usize,
}

impl<R: BufRead> TokenReader<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            cursor: 0,
            position: 0,
        }
    }

    /// Number of tokens consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Next raw token, or `None` at end of input.
    pub fn next_token(&mut self) -> GraphResult<Option<String>> {
        loop {
            let rest = &self.line[self.cursor..];
            if let Some(start) = rest.find(|c: char| !c.is_whitespace()) {
                let tail = &rest[start..];
                let len = tail.find(char::is_whitespace).unwrap_or(tail.len());
                let token = tail[..len].to_string();
                self.cursor += start + len;
                self.position += 1;
                return Ok(Some(token));
            }

            self.line.clear();
            self.cursor = 0;
            match self.reader.read_line(&mut self.line) {
                Ok(0) => return Ok(None),
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    return Err(GraphError::InvalidToken {
                        token: INVALID_UTF8.to_string(),
                        position: self.position + 1,
                    });
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Next token parsed as an integer; `expected` names it in errors.
    pub fn next_int(&mut self, expected: &'static str) -> GraphResult<i64> {
        match self.next_token()? {
            Some(token) => token.parse::<i64>().map_err(|_| GraphError::InvalidToken {
                token,
                position: self.position,
            }),
            None => Err(GraphError::UnexpectedEof {
                expected,
                position: self.position + 1,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_any_whitespace() {
        let mut tokens = TokenReader::new("  3\t2\n\n1   2\r\n 1\n3".as_bytes());
        let mut values = Vec::new();
        while let Some(t) = tokens.next_token().unwrap() {
            values.push(t);
        }
        assert_eq!(values, vec!["3", "2", "1", "2", "1", "3"]);
        assert_eq!(tokens.position(), 6);
    }

    #[test]
    fn empty_input_has_no_tokens() {
        let mut tokens = TokenReader::new("".as_bytes());
        assert!(tokens.next_token().unwrap().is_none());
        let mut tokens = TokenReader::new(" \n\t\n".as_bytes());
        assert!(tokens.next_token().unwrap().is_none());
    }

    #[test]
    fn next_int_parses_signed_values() {
        let mut tokens = TokenReader::new("-4 +7 12".as_bytes());
        assert_eq!(tokens.next_int("a").unwrap(), -4);
        assert_eq!(tokens.next_int("b").unwrap(), 7);
        assert_eq!(tokens.next_int("c").unwrap(), 12);
    }

    #[test]
    fn next_int_reports_eof_position() {
        let mut tokens = TokenReader::new("5".as_bytes());
        tokens.next_int("node count").unwrap();
        match tokens.next_int("edge count") {
            Err(GraphError::UnexpectedEof { expected, position }) => {
                assert_eq!(expected, "edge count");
                assert_eq!(position, 2);
            }
            other => panic!("expected UnexpectedEof, got {:?}", other),
        }
    }

    #[test]
    fn invalid_utf8_is_an_invalid_token() {
        let bytes: &[u8] = b"3 2\n1 \xff\xfe 2\n";
        let mut tokens = TokenReader::new(bytes);
        tokens.next_int("node count").unwrap();
        tokens.next_int("edge count").unwrap();
        match tokens.next_int("edge source") {
            Err(GraphError::InvalidToken { token, position }) => {
                assert_eq!(token, INVALID_UTF8);
                assert_eq!(position, 3);
            }
            other => panic!("expected InvalidToken, got {:?}", other),
        }
    }

    #[test]
    fn next_int_rejects_non_numeric() {
        let mut tokens = TokenReader::new("3 x".as_bytes());
        tokens.next_int("node count").unwrap();
        match tokens.next_int("edge count") {
            Err(GraphError::InvalidToken { token, position }) => {
                assert_eq!(token, "x");
                assert_eq!(position, 2);
            }
            other => panic!("expected InvalidToken, got {:?}", other),
        }
    }
}
