//! Quantity constructor: consumes a parsed `scalar / numerator / denominator`
//! triple and turns it into a unit-bearing value.
//!
//! The parser keeps metric prefixes symbolic (a leading `<kilo>` atom before
//! the unit atom); this is where the scale factors are finally applied and
//! the prefix atoms folded away.

use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::tables::{PrefixTable, UnitTable};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quantity {
    pub value: f64,
    /// Canonical unit names, one entry per dimensional power, prefixes folded in.
    pub numerator: Vec<String>,
    pub denominator: Vec<String>,
    /// Dimensional kind, when the quantity reduces to a single registered unit.
    pub kind: Option<Kind>,
}

impl Quantity {
    /// Build a quantity from parsed parts.
    ///
    /// Atoms must be angle-bracket-wrapped canonical names (`"<meter>"`,
    /// `"<kilo>"`). Prefix atoms multiply (numerator) or divide (denominator)
    /// the value and are dropped from the atom lists; unknown names are an
    /// error.
    pub fn from_parts(
        scalar: f64,
        numerator: &[String],
        denominator: &[String],
        units: &UnitTable,
        prefixes: &PrefixTable,
    ) -> Result<Self> {
        let mut value = scalar;
        let mut num = Vec::with_capacity(numerator.len());
        let mut den = Vec::with_capacity(denominator.len());

        for atom in numerator {
            match resolve_atom(atom, units, prefixes)? {
                Resolved::Unit(name) => num.push(name),
                Resolved::Prefix(factor) => value *= factor,
            }
        }
        for atom in denominator {
            match resolve_atom(atom, units, prefixes)? {
                Resolved::Unit(name) => den.push(name),
                Resolved::Prefix(factor) => value /= factor,
            }
        }

        let kind = if num.len() == 1 && den.is_empty() {
            units.kind_of(&num[0])
        } else if num.is_empty() && den.is_empty() {
            Some(Kind::Unity)
        } else {
            None
        };

        Ok(Self {
            value,
            numerator: num,
            denominator: den,
            kind,
        })
    }

    /// Build a quantity from a canonical expression string, the
    /// `"scalar <atom>*<atom>/<atom>"` form the parsing pipeline renders.
    pub fn from_expression(
        expression: &str,
        units: &UnitTable,
        prefixes: &PrefixTable,
    ) -> Result<Self> {
        let expression = expression.trim();
        let (scalar_text, atoms) = match expression.split_once(' ') {
            Some((s, rest)) => (s, rest.trim()),
            None => (expression, ""),
        };
        let scalar: f64 = scalar_text
            .parse()
            .map_err(|_| Error::MalformedAtom(scalar_text.to_string()))?;

        let (num_text, den_text) = match atoms.split_once('/') {
            Some((n, d)) => (n, d),
            None => (atoms, ""),
        };
        let split = |side: &str| -> Vec<String> {
            side.split('*')
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(str::to_string)
                .collect()
        };
        Self::from_parts(scalar, &split(num_text), &split(den_text), units, prefixes)
    }
}

enum Resolved {
    Unit(String),
    Prefix(f64),
}

fn resolve_atom(atom: &str, units: &UnitTable, prefixes: &PrefixTable) -> Result<Resolved> {
    let name = atom
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .ok_or_else(|| Error::MalformedAtom(atom.to_string()))?;

    if let Some(factor) = prefixes.factor_of(name) {
        return Ok(Resolved::Prefix(factor));
    }
    if units.contains(name) {
        return Ok(Resolved::Unit(name.to_string()));
    }
    Err(Error::UnknownUnit(name.to_string()))
}
