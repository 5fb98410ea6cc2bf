//! Regex-driven legacy parser.
//!
//! The original single-pass parser, kept as the compatibility baseline. It
//! recognizes a handful of fixed idioms up front (compound imperial lengths
//! and weights, clock-style durations, currency) and falls back to a
//! number-then-units pattern for everything else. It has no grammar: no
//! parentheses, no operator precedence beyond one `/` split.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ParseError, Result};
use crate::numeric;
use crate::parser::canonicalize_symbol;
use crate::result::ParseResult;
use crate::trie::UnitTrie;
use mensura_units::Kind;

// "5 feet 6 inches", "5 ft 6 in", 5'6", 5' 6"
static FEET_INCHES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?x)^\s*
        (\d+(?:\.\d+)?) \s* (?: ' | (?:feet|foot|ft)\b ) \s*
        (\d+(?:\.\d+)?) \s* (?: " | (?:inches|inch|in)\b ) \s*$"#,
    )
    .unwrap()
});

// "150 lbs 4 oz", "150 pounds 4 ounces"
static POUNDS_OUNCES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)^\s*
        (\d+(?:\.\d+)?) \s* (?:lbs?|pounds?) \b \s*
        (\d+(?:\.\d+)?) \s* (?:oz|ounces?) \b \s*$",
    )
    .unwrap()
});

// "11 stone 4", "11 st 4 lb"
static STONE_POUNDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)^\s*
        (\d+(?:\.\d+)?) \s* (?:stone|st) \b \s*
        (\d+(?:\.\d+)?) \s* (?:lbs?|pounds?)? \s*$",
    )
    .unwrap()
});

// "1:30", "1:30:15", "0:05:30.5"
static CLOCK_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d+):(\d{1,2})(?::(\d{1,2}(?:\.\d+)?))?\s*$").unwrap());

// "$1.25", "$ 1,250"
static CURRENCY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\$\s*(\d[\d,]*(?:\.\d+)?)\s*$").unwrap());

// Leading numeric literal: complex, mixed, rational, then decimal/scientific.
static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)^\s*(
          [-+]?(?:\d+(?:\.\d+)?[-+])?\d+(?:\.\d+)?i
        | [-+]?\d+\s+\d+/\d+
        | [-+]?\d+/\d+
        | [-+]?\d[\d,]*(?:\.\d+)?(?:[eE][-+]?\d+)?
        )",
    )
    .unwrap()
});

// One unit factor with an optional exponent, caret or bare ("m^2", "m2").
static UNIT_FACTOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^([^\d\^]+?)(?:\^([-+]?\d+)|(\d+))?$"#).unwrap());

pub struct LegacyParser<'t> {
    trie: &'t UnitTrie,
}

impl<'t> LegacyParser<'t> {
    pub fn new(trie: &'t UnitTrie) -> Self {
        Self { trie }
    }

    pub fn parse(&self, text: &str) -> Result<ParseResult> {
        if text.trim().is_empty() {
            return Err(ParseError::EmptyInput);
        }
        if let Some(result) = self.special_form(text)? {
            return Ok(result);
        }
        self.general_form(text)
    }

    /// The fixed idioms, tried in order before the general pattern.
    fn special_form(&self, text: &str) -> Result<Option<ParseResult>> {
        if let Some(caps) = FEET_INCHES.captures(text) {
            let feet = parse_capture(&caps, 1)?;
            let inches = parse_capture(&caps, 2)?;
            return Ok(Some(single_unit(feet + inches / 12.0, "foot", Kind::Length)));
        }
        if let Some(caps) = POUNDS_OUNCES.captures(text) {
            let pounds = parse_capture(&caps, 1)?;
            let ounces = parse_capture(&caps, 2)?;
            return Ok(Some(single_unit(
                pounds + ounces / 16.0,
                "pound",
                Kind::Mass,
            )));
        }
        if let Some(caps) = STONE_POUNDS.captures(text) {
            let stone = parse_capture(&caps, 1)?;
            let pounds = parse_capture(&caps, 2)?;
            return Ok(Some(single_unit(
                stone + pounds / 14.0,
                "stone",
                Kind::Mass,
            )));
        }
        if let Some(caps) = CLOCK_TIME.captures(text) {
            let hours = parse_capture(&caps, 1)?;
            let minutes = parse_capture(&caps, 2)?;
            let seconds = match caps.get(3) {
                Some(m) => m
                    .as_str()
                    .parse::<f64>()
                    .map_err(|_| ParseError::syntax(m.start(), "malformed seconds field"))?,
                None => 0.0,
            };
            return Ok(Some(single_unit(
                hours * 3600.0 + minutes * 60.0 + seconds,
                "second",
                Kind::Time,
            )));
        }
        if let Some(caps) = CURRENCY.captures(text) {
            let amount = caps[1].replace(',', "");
            let value = amount
                .parse::<f64>()
                .map_err(|_| ParseError::syntax(0, "malformed currency amount"))?;
            return Ok(Some(single_unit(value, "dollar", Kind::Currency)));
        }
        Ok(None)
    }

    /// `NUMBER? FACTOR ('*' FACTOR)* ('/' FACTOR ('*' FACTOR)*)*`
    fn general_form(&self, text: &str) -> Result<ParseResult> {
        if let Some(offset) = text.find(['(', ')']) {
            return Err(ParseError::syntax(
                offset,
                "parentheses are not supported in legacy expressions",
            ));
        }

        let mut result = ParseResult::new();
        let mut rest = text;
        if let Some(caps) = LEADING_NUMBER.captures(rest) {
            let matched = caps.get(1).unwrap();
            let literal = matched.as_str().replace(',', "");
            result.scalar = numeric::interpret(&literal).ok_or_else(|| {
                ParseError::syntax(matched.start(), format!("malformed numeric literal '{literal}'"))
            })?;
            rest = &rest[matched.end()..];
        }

        let rest = rest.trim();
        if rest.is_empty() {
            return Ok(result);
        }

        let mut unit_factors = 0usize;
        let mut last_kind = None;
        for (side, chunk) in rest.split('/').enumerate() {
            for factor in chunk.split(['*', ' ']).filter(|f| !f.trim().is_empty()) {
                let factor = factor.trim();
                let caps = UNIT_FACTOR.captures(factor).ok_or_else(|| {
                    ParseError::syntax(0, format!("unparseable unit factor '{factor}'"))
                })?;
                let name = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
                let exponent: i32 = match (caps.get(2), caps.get(3)) {
                    (Some(m), _) | (_, Some(m)) => m.as_str().parse().map_err(|_| {
                        ParseError::syntax(0, format!("exponent overflow in '{factor}'"))
                    })?,
                    _ => 1,
                };

                let (prefix, unit) = self.trie.parse_unit_with_prefix(canonicalize_symbol(name));
                let Some(unit) = unit else {
                    return Err(ParseError::UnknownUnit {
                        name: name.to_string(),
                        offset: 0,
                    });
                };
                last_kind = self.trie.kind_of(&unit.canonical);
                unit_factors += 1;

                // `/` flips sides once; a negative exponent flips again.
                let top = (side == 0) == (exponent >= 0);
                let list = if top {
                    &mut result.numerator
                } else {
                    &mut result.denominator
                };
                for _ in 0..exponent.unsigned_abs() {
                    if let Some(prefix) = &prefix {
                        list.push(format!("<{}>", prefix.canonical));
                    }
                    list.push(format!("<{}>", unit.canonical));
                }
            }
        }

        if unit_factors == 1 && result.denominator.is_empty() && result.numerator.len() <= 2 {
            result.kind = last_kind;
        }
        Ok(result)
    }
}

fn single_unit(value: f64, canonical: &str, kind: Kind) -> ParseResult {
    let mut result = ParseResult::dimensionless(value);
    result.numerator.push(format!("<{canonical}>"));
    result.kind = Some(kind);
    result
}

fn parse_capture(caps: &regex::Captures<'_>, index: usize) -> Result<f64> {
    let m = caps.get(index).ok_or_else(|| ParseError::syntax(0, "missing numeric field"))?;
    m.as_str()
        .parse::<f64>()
        .map_err(|_| ParseError::syntax(m.start(), "malformed numeric field"))
}
