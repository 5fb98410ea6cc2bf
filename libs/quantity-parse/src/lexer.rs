//! Quantity-expression tokenizer.
//!
//! Single left-to-right scan over a character vector with bounded lookahead.
//! Number scanning first classifies the literal by looking ahead without
//! consuming (complex, then rational/mixed, then scientific, then plain
//! decimal) and re-scans the matched span to build the literal text.
//!
//! In the default lenient mode unrecognized characters are dropped one at a
//! time and never produce an error; the strict toggle turns them into syntax
//! errors instead.

use crate::error::{ParseError, Result};
use crate::token::{Token, TokenKind};

/// Pre-sized token pool bound. The pool grows past this when an expression
/// needs more tokens; the cursor resets at the start of each tokenize call.
pub const TOKEN_POOL_SIZE: usize = 64;

/// The quantity-expression tokenizer.
///
/// Tokens are pooled: `tokenize` overwrites the previous call's slots in
/// place, so the returned slice is only valid until the next call into this
/// instance.
pub struct Tokenizer {
    chars: Vec<char>,
    pos: usize,
    len: usize,
    tokens: Vec<Token>,
    strict: bool,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::with_strict(false)
    }

    /// A tokenizer that rejects unrecognized characters instead of skipping them.
    pub fn with_strict(strict: bool) -> Self {
        Self {
            chars: Vec::new(),
            pos: 0,
            len: 0,
            tokens: Vec::with_capacity(TOKEN_POOL_SIZE),
            strict,
        }
    }

    /// Tokenize `text` into a sequence terminated by exactly one Eof token.
    ///
    /// Empty input yields the single Eof token. Only the strict mode can
    /// fail; the lenient mode drops anything it does not recognize.
    pub fn tokenize(&mut self, text: &str) -> Result<&[Token]> {
        self.chars.clear();
        self.chars.extend(text.chars());
        self.pos = 0;
        self.len = 0;

        while self.pos < self.chars.len() {
            self.scan_one()?;
        }
        let end = self.chars.len();
        self.begin_token(TokenKind::Eof, end);
        Ok(self.tokens())
    }

    /// The tokens produced by the most recent tokenize call.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens[..self.len]
    }

    fn scan_one(&mut self) -> Result<()> {
        let offset = self.pos;
        let c = self.chars[offset];

        if c.is_whitespace() {
            self.pos += 1;
            return Ok(());
        }

        match c {
            '0'..='9' => {
                self.scan_number();
                Ok(())
            }
            // A sign is part of the number only when a digit follows directly.
            '+' | '-' if self.digit(offset + 1) => {
                self.scan_number();
                Ok(())
            }
            '*' | '/' | '^' | '+' | '-' => {
                self.emit_span(TokenKind::Operator, offset, offset + 1);
                Ok(())
            }
            '(' => {
                self.emit_span(TokenKind::LParen, offset, offset + 1);
                Ok(())
            }
            ')' => {
                self.emit_span(TokenKind::RParen, offset, offset + 1);
                Ok(())
            }
            '\'' | '"' | '$' | '%' => {
                self.emit_span(TokenKind::Unit, offset, offset + 1);
                Ok(())
            }
            '\u{00b0}' => {
                // °C / °F form a single two-character unit token; a bare
                // degree sign is the angle unit.
                match self.chars.get(offset + 1) {
                    Some('C') | Some('F') => self.emit_span(TokenKind::Unit, offset, offset + 2),
                    _ => self.emit_span(TokenKind::Unit, offset, offset + 1),
                }
                Ok(())
            }
            ':' => {
                // Time separator between digits; the components stay separate
                // Number tokens (no HH:MM:SS fusion here).
                if self.digit_before(offset) && self.digit(offset + 1) {
                    self.pos += 1;
                    Ok(())
                } else if self.strict {
                    Err(ParseError::syntax(offset, "unexpected ':'"))
                } else {
                    self.pos += 1;
                    Ok(())
                }
            }
            c if c.is_alphabetic() => {
                self.scan_unit();
                Ok(())
            }
            other => {
                if self.strict {
                    Err(ParseError::syntax(
                        offset,
                        format!("unrecognized character '{other}'"),
                    ))
                } else {
                    self.pos += 1;
                    Ok(())
                }
            }
        }
    }

    /// Classify the numeric literal starting at the cursor by lookahead, then
    /// consume it. Precedence: complex, rational/mixed, scientific, decimal.
    fn scan_number(&mut self) {
        let start = self.pos;
        if let Some(end) = self.complex_end(start) {
            self.emit_span(TokenKind::Number, start, end);
        } else if let Some(end) = self.rational_end(start) {
            self.emit_span(TokenKind::Number, start, end);
        } else if let Some(end) = self.scientific_end(start) {
            self.emit_span(TokenKind::Number, start, end);
        } else {
            self.scan_decimal();
        }
    }

    /// `[+-]? decimal ( [+-] \d* (.\d+)? )? i` not followed by an alphanumeric.
    fn complex_end(&self, start: usize) -> Option<usize> {
        let mut i = start;
        if matches!(self.chars.get(i), Some('+') | Some('-')) {
            i += 1;
        }
        i = self.decimal_end(i)?;
        if self.chars.get(i) == Some(&'i') && !self.alnum(i + 1) {
            return Some(i + 1);
        }
        if matches!(self.chars.get(i), Some('+') | Some('-')) {
            let mut j = i + 1;
            while self.digit(j) {
                j += 1;
            }
            if self.chars.get(j) == Some(&'.') && self.digit(j + 1) {
                j += 1;
                while self.digit(j) {
                    j += 1;
                }
            }
            if self.chars.get(j) == Some(&'i') && !self.alnum(j + 1) {
                return Some(j + 1);
            }
        }
        None
    }

    /// `[+-]? \d+ (\s+ \d+)? / \d+` — plain rational or mixed number.
    fn rational_end(&self, start: usize) -> Option<usize> {
        let mut i = start;
        if matches!(self.chars.get(i), Some('+') | Some('-')) {
            i += 1;
        }
        let whole = self.digits_end(i)?;

        // Mixed form: whole, whitespace, numerator/denominator.
        let mut k = whole;
        while self.chars.get(k).is_some_and(|c| c.is_whitespace()) {
            k += 1;
        }
        if k > whole && self.digit(k) {
            let numer = self.digits_end(k).unwrap();
            if self.chars.get(numer) == Some(&'/') && self.digit(numer + 1) {
                return self.digits_end(numer + 1);
            }
        }

        if self.chars.get(whole) == Some(&'/') && self.digit(whole + 1) {
            return self.digits_end(whole + 1);
        }
        None
    }

    /// `[+-]? \d+ (.\d+)? [eE] [+-]? \d+`
    fn scientific_end(&self, start: usize) -> Option<usize> {
        let mut i = start;
        if matches!(self.chars.get(i), Some('+') | Some('-')) {
            i += 1;
        }
        i = self.decimal_end(i)?;
        if !matches!(self.chars.get(i), Some('e') | Some('E')) {
            return None;
        }
        let mut j = i + 1;
        if matches!(self.chars.get(j), Some('+') | Some('-')) {
            j += 1;
        }
        self.digits_end(j)
    }

    /// Plain decimal; commas between digits are thousands separators and are
    /// folded out of the literal text.
    fn scan_decimal(&mut self) {
        let start = self.pos;
        let mut i = start;
        if matches!(self.chars.get(i), Some('+') | Some('-')) {
            i += 1;
        }
        while i < self.chars.len() {
            if self.digit(i) {
                i += 1;
            } else if self.chars[i] == ',' && self.digit(i + 1) {
                i += 1;
            } else {
                break;
            }
        }
        if self.chars.get(i) == Some(&'.') && self.digit(i + 1) {
            i += 1;
            while self.digit(i) {
                i += 1;
            }
        }

        let idx = self.begin_token(TokenKind::Number, start);
        for p in start..i {
            let c = self.chars[p];
            if c != ',' {
                self.tokens[idx].text.push(c);
            }
        }
        self.pos = i;
    }

    /// Unit names accumulate letters, digits and interior hyphens.
    fn scan_unit(&mut self) {
        let start = self.pos;
        let mut i = start;
        while i < self.chars.len() {
            let c = self.chars[i];
            if c.is_alphanumeric() {
                i += 1;
            } else if c == '-' && self.alnum(i + 1) {
                i += 1;
            } else {
                break;
            }
        }
        self.emit_span(TokenKind::Unit, start, i);
    }

    fn digit(&self, i: usize) -> bool {
        self.chars.get(i).is_some_and(|c| c.is_ascii_digit())
    }

    fn digit_before(&self, i: usize) -> bool {
        i > 0 && self.chars[i - 1].is_ascii_digit()
    }

    fn alnum(&self, i: usize) -> bool {
        self.chars.get(i).is_some_and(|c| c.is_alphanumeric())
    }

    /// End of a digit run starting at `i`; requires at least one digit.
    fn digits_end(&self, mut i: usize) -> Option<usize> {
        if !self.digit(i) {
            return None;
        }
        while self.digit(i) {
            i += 1;
        }
        Some(i)
    }

    /// End of `\d+ (.\d+)?` starting at `i`.
    fn decimal_end(&self, i: usize) -> Option<usize> {
        let mut i = self.digits_end(i)?;
        if self.chars.get(i) == Some(&'.') && self.digit(i + 1) {
            i += 1;
            while self.digit(i) {
                i += 1;
            }
        }
        Some(i)
    }

    /// Claim the next pooled slot, reusing its string allocation.
    fn begin_token(&mut self, kind: TokenKind, offset: usize) -> usize {
        if self.len == self.tokens.len() {
            self.tokens.push(Token {
                kind,
                text: String::new(),
                offset,
            });
        } else {
            let slot = &mut self.tokens[self.len];
            slot.kind = kind;
            slot.offset = offset;
            slot.text.clear();
        }
        self.len += 1;
        self.len - 1
    }

    fn emit_span(&mut self, kind: TokenKind, start: usize, end: usize) {
        let idx = self.begin_token(kind, start);
        for p in start..end {
            let c = self.chars[p];
            self.tokens[idx].text.push(c);
        }
        self.pos = end;
    }
}
