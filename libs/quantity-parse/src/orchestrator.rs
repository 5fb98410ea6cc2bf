//! Dual-parser orchestration.
//!
//! The gateway routes each expression through the new tokenizing parser, the
//! legacy regex parser, or both, per [`Config`]. In checked mode the two
//! results are compared and the legacy answer wins any disagreement, so the
//! new parser can be rolled out without changing observed behavior.

use std::num::NonZeroUsize;

use lru::LruCache;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::Result;
use crate::legacy::LegacyParser;
use crate::parser::Parser;
use crate::result::ParseResult;
use crate::trie::UnitTrie;

/// Relative scalar tolerance used when cross-checking the two parsers.
pub const SCALAR_TOLERANCE: f64 = 1e-10;

/// Anything that turns expression text into a [`ParseResult`].
pub trait ExpressionParser {
    fn parse(&mut self, text: &str) -> Result<ParseResult>;
}

impl ExpressionParser for Parser<'_> {
    fn parse(&mut self, text: &str) -> Result<ParseResult> {
        self.parse_owned(text)
    }
}

impl ExpressionParser for LegacyParser<'_> {
    fn parse(&mut self, text: &str) -> Result<ParseResult> {
        LegacyParser::parse(self, text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserMode {
    /// Legacy parser only.
    LegacyOnly,
    /// New parser only, no cross-check.
    NewOnly,
    /// New parser, cross-checked against legacy; legacy wins disagreements
    /// and serves as fallback when the new parser errors.
    NewChecked,
}

impl ParserMode {
    pub fn from_config(config: &Config) -> Self {
        if !config.use_new_parser {
            ParserMode::LegacyOnly
        } else if config.compatibility_mode {
            ParserMode::NewChecked
        } else {
            ParserMode::NewOnly
        }
    }
}

/// Front door for expression parsing: mode dispatch plus an LRU cache of
/// successful results keyed by the raw expression text.
pub struct ParserGateway<'t> {
    mode: ParserMode,
    debug: bool,
    new_parser: Parser<'t>,
    legacy: LegacyParser<'t>,
    cache: Option<LruCache<String, ParseResult>>,
}

impl<'t> ParserGateway<'t> {
    pub fn new(trie: &'t UnitTrie, config: &Config) -> Self {
        Self {
            mode: ParserMode::from_config(config),
            debug: config.parser_debug,
            new_parser: Parser::with_strict_lexer(trie, config.strict_lexer),
            legacy: LegacyParser::new(trie),
            cache: NonZeroUsize::new(config.cache_size).map(LruCache::new),
        }
    }

    pub fn mode(&self) -> ParserMode {
        self.mode
    }

    pub fn parse(&mut self, text: &str) -> Result<ParseResult> {
        if let Some(cache) = &mut self.cache {
            if let Some(hit) = cache.get(text) {
                return Ok(hit.clone());
            }
        }

        let result = match self.mode {
            ParserMode::LegacyOnly => self.legacy.parse(text),
            ParserMode::NewOnly => self.new_parser.parse_owned(text),
            ParserMode::NewChecked => self.checked(text),
        };

        if self.debug {
            match &result {
                Ok(r) => debug!(expression = text, result = %r.expression(), "parsed"),
                Err(e) => debug!(expression = text, error = %e, "parse failed"),
            }
        }

        if let (Some(cache), Ok(r)) = (&mut self.cache, &result) {
            cache.put(text.to_owned(), r.clone());
        }
        result
    }

    fn checked(&mut self, text: &str) -> Result<ParseResult> {
        match self.new_parser.parse_owned(text) {
            Ok(new) => match self.legacy.parse(text) {
                Ok(old) => {
                    if new.agrees_with(&old, SCALAR_TOLERANCE) {
                        Ok(new)
                    } else {
                        warn!(
                            expression = text,
                            new = %new.expression(),
                            legacy = %old.expression(),
                            "parser disagreement, keeping legacy result"
                        );
                        Ok(old)
                    }
                }
                // Legacy can't parse it; the new result stands.
                Err(_) => Ok(new),
            },
            Err(new_err) => match self.legacy.parse(text) {
                Ok(old) => {
                    debug!(expression = text, error = %new_err, "falling back to legacy parser");
                    Ok(old)
                }
                // Both failed; the new parser's error is the better one.
                Err(_) => Err(new_err),
            },
        }
    }
}
