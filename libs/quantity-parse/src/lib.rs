//! Quantity expression parsing - tokenizer, unit trie, and dual-parser pipeline
//!
//! This crate turns free-form quantity text (`"9.8 kg*m/s^2"`, `"5'6\""`,
//! `"1:30:15"`) into a normalized [`ParseResult`]: a scalar plus numerator
//! and denominator lists of canonical unit atoms.
//!
//! # Pipeline Overview
//!
//! ```text
//! Expression String
//!      |
//!   Tokenizer -> pooled Token stream
//!      |
//!   Parser (recursive descent, UnitTrie lookups) -> ParseResult
//!      |
//!   ParserGateway -- cross-checks against the LegacyParser per Config,
//!      |             caches successful results
//!   ParseResult -> Quantity (mensura-units)
//! ```
//!
//! Two parser implementations coexist: the tokenizing recursive-descent
//! [`Parser`] and the regex-driven [`LegacyParser`] it replaces. The
//! [`ParserGateway`] runs one or both per [`Config`] and, in compatibility
//! mode, lets the legacy answer win any disagreement.

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod legacy;
pub mod lexer;
mod numeric;
pub mod orchestrator;
pub mod parser;
pub mod result;
pub mod token;
pub mod trie;

// Re-export main types
pub use config::{Config, ConfigError, ConfigKey, ConfigValue, ConfigValueType};
pub use error::{ParseError, Result};
pub use legacy::LegacyParser;
pub use lexer::Tokenizer;
pub use orchestrator::{ExpressionParser, ParserGateway, ParserMode, SCALAR_TOLERANCE};
pub use parser::Parser;
pub use result::{AtomList, ParseResult};
pub use token::{Token, TokenKind};
pub use trie::{PrefixInfo, UnitInfo, UnitTrie};
