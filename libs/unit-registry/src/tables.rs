//! Alias tables for units and metric prefixes.
//!
//! Both tables are plain snapshots: once handed to an index builder they are
//! copied, so later registrations never leak into an already-built index.
//! Alias lookup is case-sensitive and performs no normalization.

use crate::kind::Kind;
use std::collections::HashMap;

/// Alias table for units: alias -> canonical name, canonical name -> kind.
#[derive(Clone, Debug, Default)]
pub struct UnitTable {
    aliases: HashMap<String, String>,
    kinds: HashMap<String, Kind>,
}

impl UnitTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canonical unit with its dimensional kind and aliases.
    ///
    /// The canonical name is always registered as an alias of itself, so a
    /// canonical spelling resolves without being listed twice.
    pub fn register(&mut self, canonical: &str, kind: Kind, aliases: &[&str]) {
        self.kinds.insert(canonical.to_string(), kind);
        self.aliases
            .insert(canonical.to_string(), canonical.to_string());
        for alias in aliases {
            self.aliases.insert(alias.to_string(), canonical.to_string());
        }
    }

    pub fn canonical_of(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    pub fn kind_of(&self, canonical: &str) -> Option<Kind> {
        self.kinds.get(canonical).copied()
    }

    pub fn contains(&self, canonical: &str) -> bool {
        self.kinds.contains_key(canonical)
    }

    /// Iterate over every `(alias, canonical)` pair.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(a, c)| (a.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

/// Alias table for metric prefixes: alias -> canonical name,
/// canonical name -> scale factor.
#[derive(Clone, Debug, Default)]
pub struct PrefixTable {
    aliases: HashMap<String, String>,
    factors: HashMap<String, f64>,
}

impl PrefixTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, canonical: &str, factor: f64, aliases: &[&str]) {
        self.factors.insert(canonical.to_string(), factor);
        self.aliases
            .insert(canonical.to_string(), canonical.to_string());
        for alias in aliases {
            self.aliases.insert(alias.to_string(), canonical.to_string());
        }
    }

    pub fn canonical_of(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    pub fn factor_of(&self, canonical: &str) -> Option<f64> {
        self.factors.get(canonical).copied()
    }

    pub fn contains(&self, canonical: &str) -> bool {
        self.factors.contains_key(canonical)
    }

    /// Iterate over every `(alias, canonical)` pair.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(a, c)| (a.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}
