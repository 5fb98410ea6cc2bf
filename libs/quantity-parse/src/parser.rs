//! Recursive-descent parser for quantity expressions.
//!
//! Grammar (precedence high to low: exponent, then multiply/divide,
//! left-associative; parentheses override):
//!
//! ```text
//! expression := term (('*' | '/') term)*
//! term       := factor ('^' INTEGER)?
//! factor     := NUMBER [UNIT]
//!             | UNIT
//!             | '(' expression ')'
//! ```
//!
//! Unlike the tokenizer, the parser is strict: trailing tokens after a
//! complete expression are an error, not silently ignored.

use crate::error::{ParseError, Result};
use crate::lexer::Tokenizer;
use crate::numeric;
use crate::result::{ParseResult, ResultId, ResultPool};
use crate::token::TokenKind;
use crate::trie::UnitTrie;

/// Parser for quantity expressions.
///
/// Holds the token and result pools, so one instance serves one expression
/// at a time: the `ParseResult` returned by [`parse`](Parser::parse) borrows
/// the pool and is only valid until the next call.
pub struct Parser<'t> {
    trie: &'t UnitTrie,
    lexer: Tokenizer,
    pool: ResultPool,
    pos: usize,
}

impl<'t> Parser<'t> {
    pub fn new(trie: &'t UnitTrie) -> Self {
        Self::with_strict_lexer(trie, false)
    }

    pub fn with_strict_lexer(trie: &'t UnitTrie, strict: bool) -> Self {
        Self {
            trie,
            lexer: Tokenizer::with_strict(strict),
            pool: ResultPool::new(),
            pos: 0,
        }
    }

    /// Parse `text` into a pooled result, valid until the next call into
    /// this parser.
    pub fn parse(&mut self, text: &str) -> Result<&ParseResult> {
        if text.trim().is_empty() {
            return Err(ParseError::EmptyInput);
        }
        self.lexer.tokenize(text)?;
        self.pool.reset();
        self.pos = 0;

        let id = self.expression()?;
        if !self.current_is(TokenKind::Eof) {
            return Err(ParseError::syntax(
                self.current_offset(),
                format!("unexpected trailing token '{}'", self.current_text()),
            ));
        }
        Ok(self.pool.get(id))
    }

    /// Parse and copy the result out of the pool.
    pub fn parse_owned(&mut self, text: &str) -> Result<ParseResult> {
        self.parse(text).map(|r| r.clone())
    }

    fn expression(&mut self) -> Result<ResultId> {
        let left = self.term()?;
        loop {
            if self.current_is_operator("*") {
                self.advance();
                let right = self.term()?;
                let (l, r) = self.pool.pair_mut(left, right);
                l.multiply(r);
            } else if self.current_is_operator("/") {
                self.advance();
                let right = self.term()?;
                let (l, r) = self.pool.pair_mut(left, right);
                l.divide(r);
            } else {
                break;
            }
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<ResultId> {
        let factor = self.factor()?;
        if self.current_is_operator("^") {
            self.advance();
            if !self.current_is(TokenKind::Number) {
                return Err(ParseError::syntax(
                    self.current_offset(),
                    "expected an integer exponent after '^'",
                ));
            }
            let offset = self.current_offset();
            let exponent: i32 = self.current_text().parse().map_err(|_| {
                ParseError::syntax(
                    offset,
                    format!("exponent '{}' is not an integer", self.current_text()),
                )
            })?;
            self.advance();
            self.pool.get_mut(factor).pow(exponent);
        }
        Ok(factor)
    }

    fn factor(&mut self) -> Result<ResultId> {
        match self.current_kind() {
            TokenKind::Number => {
                let text = self.current_text().to_owned();
                let offset = self.current_offset();
                self.advance();
                let value = numeric::interpret(&text).ok_or_else(|| {
                    ParseError::syntax(offset, format!("malformed numeric literal '{text}'"))
                })?;

                let id = self.pool.alloc();
                self.pool.get_mut(id).scalar = value;

                // A unit directly after a number attaches to it; the unit's
                // own scalar contribution is always 1.0.
                if self.current_is(TokenKind::Unit) {
                    let name = self.current_text().to_owned();
                    let unit_offset = self.current_offset();
                    self.advance();
                    self.attach_unit(id, &name, unit_offset)?;
                }
                Ok(id)
            }
            TokenKind::Unit => {
                let name = self.current_text().to_owned();
                let offset = self.current_offset();
                self.advance();
                let id = self.pool.alloc();
                self.attach_unit(id, &name, offset)?;
                Ok(id)
            }
            TokenKind::LParen => {
                self.advance();
                let id = self.expression()?;
                if !self.current_is(TokenKind::RParen) {
                    return Err(ParseError::syntax(
                        self.current_offset(),
                        "expected closing parenthesis",
                    ));
                }
                self.advance();
                Ok(id)
            }
            TokenKind::Eof => Err(ParseError::syntax(
                self.current_offset(),
                "unexpected end of expression",
            )),
            _ => Err(ParseError::syntax(
                self.current_offset(),
                format!("unexpected token '{}'", self.current_text()),
            )),
        }
    }

    /// Resolve a unit name through the trie and push its atoms.
    ///
    /// The prefix's canonical alias (when present) leads the unit atom in the
    /// numerator; its scale factor is deliberately not applied to the scalar
    /// here — that happens at quantity-construction time.
    fn attach_unit(&mut self, id: ResultId, name: &str, offset: usize) -> Result<()> {
        let trie = self.trie;
        let (prefix, unit) = trie.parse_unit_with_prefix(canonicalize_symbol(name));
        let Some(unit) = unit else {
            return Err(ParseError::UnknownUnit {
                name: name.to_string(),
                offset,
            });
        };
        let kind = trie.kind_of(&unit.canonical);
        let result = self.pool.get_mut(id);
        if let Some(prefix) = prefix {
            result.numerator.push(format!("<{}>", prefix.canonical));
        }
        result.numerator.push(format!("<{}>", unit.canonical));
        result.kind = kind;
        Ok(())
    }

    fn current_kind(&self) -> TokenKind {
        self.lexer.tokens()[self.pos].kind
    }

    fn current_text(&self) -> &str {
        &self.lexer.tokens()[self.pos].text
    }

    fn current_offset(&self) -> usize {
        self.lexer.tokens()[self.pos].offset
    }

    fn current_is(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    fn current_is_operator(&self, op: &str) -> bool {
        self.lexer.tokens()[self.pos].is_operator(op)
    }

    fn advance(&mut self) {
        // The token sequence always ends in Eof; never step past it.
        if self.pos + 1 < self.lexer.tokens().len() {
            self.pos += 1;
        }
    }
}

/// Canonical spellings for the single-character symbolic units and the
/// degree-prefixed temperature symbols.
pub(crate) fn canonicalize_symbol(name: &str) -> &str {
    match name {
        "'" => "foot",
        "\"" => "inch",
        "$" => "dollar",
        "%" => "percent",
        "\u{00b0}C" => "degC",
        "\u{00b0}F" => "degF",
        other => other,
    }
}
