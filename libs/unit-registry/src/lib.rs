#![forbid(unsafe_code)]

//! Unit and metric-prefix definitions for quantity parsing.
//!
//! This crate owns the definition side of the parsing boundary: alias tables
//! mapping user-facing spellings to canonical unit and prefix names, the
//! dimensional kind of each canonical unit, prefix scale factors, and the
//! [`Quantity`] constructor that consumes a parsed `scalar / numerator /
//! denominator` triple and applies the prefix factors the parser leaves
//! symbolic.
//!
//! The tables are explicit, read-only snapshots: callers hand them to the
//! parser-side index builder rather than the builder reaching into ambient
//! global state. A built-in default set is available through
//! [`default_units`] / [`default_prefixes`].

mod defaults;
mod error;
mod kind;
mod quantity;
mod tables;

use once_cell::sync::Lazy;

pub use error::{Error, Result};
pub use kind::Kind;
pub use quantity::Quantity;
pub use tables::{PrefixTable, UnitTable};

static DEFAULT_TABLES: Lazy<(UnitTable, PrefixTable)> = Lazy::new(defaults::build_default_tables);

/// The built-in unit definition table (SI base and common derived units,
/// imperial lengths and weights, temperatures, currency, percent).
pub fn default_units() -> &'static UnitTable {
    &DEFAULT_TABLES.0
}

/// The built-in metric-prefix table (full SI ladder, yotta through yocto).
pub fn default_prefixes() -> &'static PrefixTable {
    &DEFAULT_TABLES.1
}
