//! Parse result value type and its combination algebra.
//!
//! A `ParseResult` is `scalar × numerator / denominator`, the atom lists
//! holding one angle-bracket-wrapped canonical name per dimensional power
//! (`m^3` carries `<meter>` three times). The scalar only ever reflects
//! numeric-literal contributions: prefixes stay symbolic atoms, and exponents
//! rearrange the lists without touching the scalar.

use mensura_units::Kind;
use smallvec::SmallVec;

/// Atom list; inline capacity covers common expressions without heap traffic.
pub type AtomList = SmallVec<[String; 4]>;

/// Result of parsing one quantity expression.
///
/// Equality is order-sensitive on the atom lists; compare [`sorted`]
/// (`ParseResult::sorted`) copies when insertion order is irrelevant.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseResult {
    pub scalar: f64,
    pub numerator: AtomList,
    pub denominator: AtomList,
    /// Dimension tag when the result reduces to a single registered unit.
    pub kind: Option<Kind>,
}

impl Default for ParseResult {
    fn default() -> Self {
        Self {
            scalar: 1.0,
            numerator: AtomList::new(),
            denominator: AtomList::new(),
            kind: None,
        }
    }
}

impl ParseResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dimensionless(scalar: f64) -> Self {
        Self {
            scalar,
            ..Self::default()
        }
    }

    pub fn is_dimensionless(&self) -> bool {
        self.numerator.is_empty() && self.denominator.is_empty()
    }

    pub(crate) fn reset(&mut self) {
        self.scalar = 1.0;
        self.numerator.clear();
        self.denominator.clear();
        self.kind = None;
    }

    /// Multiply `rhs` in: scalars multiply, atom lists concatenate with the
    /// left operand's atoms first.
    pub fn multiply(&mut self, rhs: &ParseResult) {
        self.kind = combine_kind(self, rhs);
        self.scalar *= rhs.scalar;
        self.numerator.extend(rhs.numerator.iter().cloned());
        self.denominator.extend(rhs.denominator.iter().cloned());
    }

    /// Divide by `rhs`: reciprocal composition of the atom lists.
    pub fn divide(&mut self, rhs: &ParseResult) {
        self.kind = if rhs.is_dimensionless() { self.kind } else { None };
        self.scalar /= rhs.scalar;
        self.numerator.extend(rhs.denominator.iter().cloned());
        self.denominator.extend(rhs.numerator.iter().cloned());
    }

    /// Apply an integer exponent to the unit part.
    ///
    /// Positive `n` replicates both atom lists `n` times; negative `n` swaps
    /// them first; zero clears them. The scalar is never touched — numeric
    /// exponentiation of a dimensionless value is the caller's concern.
    pub fn pow(&mut self, n: i32) {
        if n == 0 {
            self.numerator.clear();
            self.denominator.clear();
            self.kind = None;
            return;
        }
        if n < 0 {
            std::mem::swap(&mut self.numerator, &mut self.denominator);
            self.kind = None;
        }
        let reps = n.unsigned_abs() as usize;
        if reps > 1 {
            let num: Vec<String> = self.numerator.to_vec();
            let den: Vec<String> = self.denominator.to_vec();
            for _ in 1..reps {
                self.numerator.extend(num.iter().cloned());
                self.denominator.extend(den.iter().cloned());
            }
        }
    }

    /// A copy with both atom lists sorted, for order-insensitive comparison.
    pub fn sorted(&self) -> ParseResult {
        let mut out = self.clone();
        out.numerator.sort();
        out.denominator.sort();
        out
    }

    /// Numeric-and-structural agreement check used by the compatibility
    /// layer: scalars within `tol` relative tolerance, sorted atom lists
    /// equal. The kind tag is advisory and not compared.
    pub fn agrees_with(&self, other: &ParseResult, tol: f64) -> bool {
        let scale = self.scalar.abs().max(other.scalar.abs());
        let scalars_agree = if scale == 0.0 {
            true
        } else {
            (self.scalar - other.scalar).abs() <= tol * scale
        };
        let a = self.sorted();
        let b = other.sorted();
        scalars_agree && a.numerator == b.numerator && a.denominator == b.denominator
    }

    /// Canonical expression string for the quantity-constructor handoff:
    /// `"scalar atoms"` with `*` between atoms and `/` before the denominator.
    pub fn expression(&self) -> String {
        let mut out = format!("{}", self.scalar);
        // The scalar/atom separator is emitted for a denominator-only result
        // too, so the rendering always splits cleanly at the first space.
        if !self.numerator.is_empty() || !self.denominator.is_empty() {
            out.push(' ');
            out.push_str(&self.numerator.join("*"));
        }
        if !self.denominator.is_empty() {
            out.push('/');
            out.push_str(&self.denominator.join("*"));
        }
        out
    }
}

fn combine_kind(lhs: &ParseResult, rhs: &ParseResult) -> Option<Kind> {
    if rhs.is_dimensionless() {
        lhs.kind
    } else if lhs.is_dimensionless() {
        rhs.kind
    } else {
        None
    }
}

/// Pre-sized result pool bound.
pub(crate) const RESULT_POOL_SIZE: usize = 32;

/// Index of a pooled result slot, valid for one parse call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ResultId(usize);

/// Arena of result slots with a cursor that resets per top-level parse.
///
/// Slots are mutated in place and reused across calls; allocation past the
/// pre-sized bound grows the arena rather than clobbering a live slot.
pub(crate) struct ResultPool {
    slots: Vec<ParseResult>,
    live: usize,
}

impl ResultPool {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::with_capacity(RESULT_POOL_SIZE),
            live: 0,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.live = 0;
    }

    pub(crate) fn alloc(&mut self) -> ResultId {
        if self.live == self.slots.len() {
            self.slots.push(ParseResult::default());
        } else {
            self.slots[self.live].reset();
        }
        self.live += 1;
        ResultId(self.live - 1)
    }

    pub(crate) fn get(&self, id: ResultId) -> &ParseResult {
        &self.slots[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: ResultId) -> &mut ParseResult {
        &mut self.slots[id.0]
    }

    /// Mutable left operand and shared right operand, for pairwise combination.
    pub(crate) fn pair_mut(&mut self, left: ResultId, right: ResultId) -> (&mut ParseResult, &ParseResult) {
        assert_ne!(left.0, right.0, "combining a slot with itself");
        if left.0 < right.0 {
            let (a, b) = self.slots.split_at_mut(right.0);
            (&mut a[left.0], &b[0])
        } else {
            let (a, b) = self.slots.split_at_mut(left.0);
            (&mut b[0], &a[right.0])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atoms(names: &[&str]) -> AtomList {
        names.iter().map(|n| format!("<{n}>")).collect()
    }

    #[test]
    fn test_multiply_concatenates() {
        let mut left = ParseResult {
            scalar: 2.0,
            numerator: atoms(&["kilogram"]),
            ..ParseResult::default()
        };
        let right = ParseResult {
            scalar: 3.0,
            numerator: atoms(&["meter"]),
            denominator: atoms(&["second"]),
            ..ParseResult::default()
        };
        left.multiply(&right);
        assert_eq!(left.scalar, 6.0);
        assert_eq!(left.numerator, atoms(&["kilogram", "meter"]));
        assert_eq!(left.denominator, atoms(&["second"]));
    }

    #[test]
    fn test_divide_composes_reciprocally() {
        let mut left = ParseResult {
            scalar: 6.0,
            numerator: atoms(&["meter"]),
            denominator: atoms(&["hour"]),
            ..ParseResult::default()
        };
        let right = ParseResult {
            scalar: 2.0,
            numerator: atoms(&["second"]),
            denominator: atoms(&["kilogram"]),
            ..ParseResult::default()
        };
        left.divide(&right);
        assert_eq!(left.scalar, 3.0);
        assert_eq!(left.numerator, atoms(&["meter", "kilogram"]));
        assert_eq!(left.denominator, atoms(&["hour", "second"]));
    }

    #[test]
    fn test_pow_replicates_without_touching_scalar() {
        let mut r = ParseResult {
            scalar: 5.0,
            numerator: atoms(&["meter"]),
            ..ParseResult::default()
        };
        r.pow(3);
        assert_eq!(r.scalar, 5.0);
        assert_eq!(r.numerator, atoms(&["meter", "meter", "meter"]));
    }

    #[test]
    fn test_pow_negative_swaps() {
        let mut r = ParseResult {
            numerator: atoms(&["second"]),
            ..ParseResult::default()
        };
        r.pow(-2);
        assert!(r.numerator.is_empty());
        assert_eq!(r.denominator, atoms(&["second", "second"]));
    }

    #[test]
    fn test_pow_zero_clears_lists_keeps_scalar() {
        let mut r = ParseResult {
            scalar: 4.0,
            numerator: atoms(&["meter"]),
            denominator: atoms(&["second"]),
            ..ParseResult::default()
        };
        r.pow(0);
        assert_eq!(r.scalar, 4.0);
        assert!(r.numerator.is_empty());
        assert!(r.denominator.is_empty());
    }

    #[test]
    fn test_agreement_tolerance() {
        let a = ParseResult::dimensionless(1.0);
        let mut b = ParseResult::dimensionless(1.0 + 1e-12);
        assert!(a.agrees_with(&b, 1e-10));
        b.scalar = 1.0 + 1e-6;
        assert!(!a.agrees_with(&b, 1e-10));
    }

    #[test]
    fn test_agreement_ignores_atom_order() {
        let a = ParseResult {
            numerator: atoms(&["kilogram", "meter"]),
            ..ParseResult::default()
        };
        let b = ParseResult {
            numerator: atoms(&["meter", "kilogram"]),
            ..ParseResult::default()
        };
        assert!(a.agrees_with(&b, 1e-10));
    }

    #[test]
    fn test_expression_rendering() {
        let r = ParseResult {
            scalar: 9.8,
            numerator: atoms(&["kilogram", "meter"]),
            denominator: atoms(&["second", "second"]),
            ..ParseResult::default()
        };
        assert_eq!(r.expression(), "9.8 <kilogram>*<meter>/<second>*<second>");

        let scalar_only = ParseResult::dimensionless(0.5);
        assert_eq!(scalar_only.expression(), "0.5");

        let denominator_only = ParseResult {
            denominator: atoms(&["second"]),
            ..ParseResult::default()
        };
        assert_eq!(denominator_only.expression(), "1 /<second>");
    }

    #[test]
    fn test_pool_reuses_slots() {
        let mut pool = ResultPool::new();
        let a = pool.alloc();
        pool.get_mut(a).scalar = 7.0;
        pool.reset();
        let b = pool.alloc();
        assert_eq!(pool.get(b).scalar, 1.0);
    }
}
