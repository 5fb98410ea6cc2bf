//! Runtime configuration for the parsing pipeline.
//!
//! Keys are registered in [`ConfigKey`]; values are validated at set time
//! (type and range), never clamped or coerced.

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown configuration key '{0}'")]
    UnknownKey(String),

    #[error("configuration key '{key}' expects a {expected} value")]
    WrongType {
        key: &'static str,
        expected: &'static str,
    },

    #[error("configuration key '{key}' must be between {min} and {max}, got {got}")]
    OutOfRange {
        key: &'static str,
        min: i64,
        max: i64,
        got: i64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigValueType {
    Boolean,
    Integer,
}

impl ConfigValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigValueType::Boolean => "boolean",
            ConfigValueType::Integer => "integer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigValue {
    Boolean(bool),
    Integer(i64),
}

impl ConfigValue {
    fn value_type(&self) -> ConfigValueType {
        match self {
            ConfigValue::Boolean(_) => ConfigValueType::Boolean,
            ConfigValue::Integer(_) => ConfigValueType::Integer,
        }
    }
}

/// Every key the pipeline understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    UseNewParser,
    CompatibilityMode,
    ParserDebug,
    StrictLexer,
    CacheSize,
}

impl ConfigKey {
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::UseNewParser,
            ConfigKey::CompatibilityMode,
            ConfigKey::ParserDebug,
            ConfigKey::StrictLexer,
            ConfigKey::CacheSize,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::UseNewParser => "use-new-parser",
            ConfigKey::CompatibilityMode => "compatibility-mode",
            ConfigKey::ParserDebug => "parser-debug",
            ConfigKey::StrictLexer => "strict-lexer",
            ConfigKey::CacheSize => "parser-cache-size",
        }
    }

    pub fn from_str(name: &str) -> Option<ConfigKey> {
        ConfigKey::all().iter().copied().find(|k| k.as_str() == name)
    }

    pub fn value_type(&self) -> ConfigValueType {
        match self {
            ConfigKey::CacheSize => ConfigValueType::Integer,
            _ => ConfigValueType::Boolean,
        }
    }

    /// Inclusive bounds for integer-valued keys.
    pub fn integer_bounds(&self) -> Option<(i64, i64)> {
        match self {
            ConfigKey::CacheSize => Some((0, 1_000_000)),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ConfigKey::UseNewParser => "route expressions through the new tokenizing parser",
            ConfigKey::CompatibilityMode => {
                "cross-check new-parser results against the legacy parser"
            }
            ConfigKey::ParserDebug => "log each parse at debug level",
            ConfigKey::StrictLexer => "reject unrecognized characters instead of skipping them",
            ConfigKey::CacheSize => "number of parse results to keep in the LRU cache (0 disables)",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effective pipeline settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub use_new_parser: bool,
    pub compatibility_mode: bool,
    pub parser_debug: bool,
    pub strict_lexer: bool,
    pub cache_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            use_new_parser: true,
            compatibility_mode: true,
            parser_debug: false,
            strict_lexer: false,
            cache_size: 256,
        }
    }
}

impl Config {
    /// Apply a keyed value, validating type and range first.
    pub fn set(&mut self, key: &str, value: ConfigValue) -> Result<(), ConfigError> {
        let key = ConfigKey::from_str(key).ok_or_else(|| ConfigError::UnknownKey(key.to_owned()))?;

        let expected = key.value_type();
        if value.value_type() != expected {
            return Err(ConfigError::WrongType {
                key: key.as_str(),
                expected: expected.as_str(),
            });
        }
        if let (ConfigValue::Integer(got), Some((min, max))) = (value, key.integer_bounds()) {
            if got < min || got > max {
                return Err(ConfigError::OutOfRange {
                    key: key.as_str(),
                    min,
                    max,
                    got,
                });
            }
        }

        match (key, value) {
            (ConfigKey::UseNewParser, ConfigValue::Boolean(v)) => self.use_new_parser = v,
            (ConfigKey::CompatibilityMode, ConfigValue::Boolean(v)) => self.compatibility_mode = v,
            (ConfigKey::ParserDebug, ConfigValue::Boolean(v)) => self.parser_debug = v,
            (ConfigKey::StrictLexer, ConfigValue::Boolean(v)) => self.strict_lexer = v,
            (ConfigKey::CacheSize, ConfigValue::Integer(v)) => self.cache_size = v as usize,
            // Type mismatches are rejected above.
            _ => unreachable!(),
        }
        Ok(())
    }
}
