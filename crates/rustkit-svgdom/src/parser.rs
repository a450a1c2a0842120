//! Byte scanner shared by the attribute grammars.
//!
//! The scanner only ever steps over ASCII bytes it recognised, so `pos` is
//! always on a char boundary of the source text.

use crate::error::{Result, SvgError};

pub(crate) struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn eat_digits(&mut self) -> usize {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.bump();
        }
        self.pos - start
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.bump();
        }
    }

    /// Skip `wsp* (',' wsp*)?`. Returns true when a comma was consumed.
    pub(crate) fn skip_comma_whitespace(&mut self) -> bool {
        self.skip_whitespace();
        let comma = self.eat(b',');
        if comma {
            self.skip_whitespace();
        }
        comma
    }

    /// Consume `byte` or fail with `reason`.
    pub(crate) fn expect(&mut self, byte: u8, reason: &str) -> Result<()> {
        if self.eat(byte) {
            Ok(())
        } else {
            Err(self.error(reason))
        }
    }

    /// Consume a run of ASCII letters.
    pub(crate) fn identifier(&mut self) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
            self.bump();
        }
        &self.text[start..self.pos]
    }

    /// Parse an SVG number: `sign? (digits ('.' digits?)? | '.' digits) exponent?`.
    pub(crate) fn number(&mut self) -> Result<f64> {
        let start = self.pos;

        if !self.eat(b'+') {
            self.eat(b'-');
        }

        let int_digits = self.eat_digits();
        let mut frac_digits = 0;
        if self.eat(b'.') {
            frac_digits = self.eat_digits();
        }
        if int_digits == 0 && frac_digits == 0 {
            self.pos = start;
            return Err(self.error("expected number"));
        }

        // Only take the exponent when digits follow, so "1e" leaves the 'e' behind.
        if matches!(self.peek(), Some(b'e') | Some(b'E')) {
            let mark = self.pos;
            self.bump();
            if !self.eat(b'+') {
                self.eat(b'-');
            }
            if self.eat_digits() == 0 {
                self.pos = mark;
            }
        }

        let literal = &self.text[start..self.pos];
        match literal.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(SvgError::format(start, literal, "number out of range")),
        }
    }

    /// Format error for the token starting at the current position.
    pub(crate) fn error(&self, reason: &str) -> SvgError {
        self.error_at(self.pos, reason)
    }

    pub(crate) fn error_at(&self, pos: usize, reason: &str) -> SvgError {
        SvgError::format(pos, self.token_at(pos), reason)
    }

    /// The token starting at `pos`, for error messages.
    fn token_at(&self, pos: usize) -> &'a str {
        let rest = match self.text.get(pos..) {
            Some(rest) => rest,
            None => return "",
        };
        let end = rest
            .char_indices()
            .find(|&(_, c)| c.is_ascii_whitespace() || matches!(c, ',' | '(' | ')'))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        if end > 0 {
            return &rest[..end];
        }
        // Separators report themselves.
        rest.chars()
            .next()
            .map(|c| &rest[..c.len_utf8()])
            .unwrap_or("")
    }
}
