//! Prefix-tree index over unit and metric-prefix aliases.
//!
//! Built once, lazily, from read-only snapshots of the two alias tables.
//! After the build the node tree is immutable, so a `UnitTrie` can be shared
//! across threads and across parser instances.

use mensura_units::{Kind, PrefixTable, UnitTable};
use once_cell::sync::OnceCell;
use std::collections::HashMap;

/// Resolved unit entry stored at a trie node.
#[derive(Clone, Debug, PartialEq)]
pub struct UnitInfo {
    pub canonical: String,
}

/// Resolved prefix entry stored at a trie node.
#[derive(Clone, Debug, PartialEq)]
pub struct PrefixInfo {
    pub canonical: String,
    pub factor: f64,
}

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    unit: Option<UnitInfo>,
    prefix: Option<PrefixInfo>,
    terminal: bool,
}

impl TrieNode {
    fn child_path(&mut self, name: &str) -> &mut TrieNode {
        let mut node = self;
        for c in name.chars() {
            node = node.children.entry(c).or_default();
        }
        node
    }

    fn walk(&self, name: &str) -> Option<&TrieNode> {
        let mut node = self;
        for c in name.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }
}

#[derive(Debug)]
struct TrieIndex {
    root: TrieNode,
    /// Prefix aliases sorted longest-first for the decomposition tie-break.
    prefixes_by_len: Vec<(String, PrefixInfo)>,
}

/// Alias index answering exact-match and prefix-decomposition queries.
pub struct UnitTrie {
    units: UnitTable,
    prefixes: PrefixTable,
    index: OnceCell<TrieIndex>,
}

impl UnitTrie {
    /// Snapshot the given tables. The index itself is built on first lookup,
    /// at most once.
    pub fn new(units: &UnitTable, prefixes: &PrefixTable) -> Self {
        Self {
            units: units.clone(),
            prefixes: prefixes.clone(),
            index: OnceCell::new(),
        }
    }

    fn index(&self) -> &TrieIndex {
        self.index.get_or_init(|| build_index(&self.units, &self.prefixes))
    }

    /// Exact, case-sensitive unit lookup. O(length of name).
    pub fn lookup_unit(&self, name: &str) -> Option<&UnitInfo> {
        self.index().root.walk(name)?.unit.as_ref()
    }

    /// Exact, case-sensitive prefix lookup.
    pub fn lookup_prefix(&self, name: &str) -> Option<&PrefixInfo> {
        self.index().root.walk(name)?.prefix.as_ref()
    }

    /// Resolve `name` as either an exact unit or a prefix+unit decomposition.
    ///
    /// The exact match wins outright. Otherwise prefix aliases are tried
    /// longest-first; the first alias that both leads `name` and leaves a
    /// remainder resolving to a unit wins. A bare prefix alias (empty
    /// remainder) is never accepted.
    pub fn parse_unit_with_prefix(&self, name: &str) -> (Option<&PrefixInfo>, Option<&UnitInfo>) {
        if let Some(unit) = self.lookup_unit(name) {
            return (None, Some(unit));
        }
        for (alias, info) in &self.index().prefixes_by_len {
            if name.len() > alias.len() && name.starts_with(alias.as_str()) {
                if let Some(unit) = self.lookup_unit(&name[alias.len()..]) {
                    return (Some(info), Some(unit));
                }
            }
        }
        (None, None)
    }

    /// Every viable interpretation of `name`: the direct match (if any)
    /// followed by each valid prefix+unit split, for ambiguity diagnostics.
    pub fn find_all_matches(&self, name: &str) -> Vec<(Option<&PrefixInfo>, Option<&UnitInfo>)> {
        let mut matches = Vec::new();
        if let Some(unit) = self.lookup_unit(name) {
            matches.push((None, Some(unit)));
        }
        for (alias, info) in &self.index().prefixes_by_len {
            if name.len() > alias.len() && name.starts_with(alias.as_str()) {
                if let Some(unit) = self.lookup_unit(&name[alias.len()..]) {
                    matches.push((Some(info), Some(unit)));
                }
            }
        }
        matches
    }

    /// Dimensional kind of a canonical unit name, from the snapshot table.
    pub fn kind_of(&self, canonical: &str) -> Option<Kind> {
        self.units.kind_of(canonical)
    }
}

fn build_index(units: &UnitTable, prefixes: &PrefixTable) -> TrieIndex {
    let mut root = TrieNode::default();

    for (alias, canonical) in units.aliases() {
        let node = root.child_path(alias);
        node.unit = Some(UnitInfo {
            canonical: canonical.to_string(),
        });
        node.terminal = true;
    }

    let mut prefixes_by_len = Vec::with_capacity(prefixes.len());
    for (alias, canonical) in prefixes.aliases() {
        let factor = prefixes
            .factor_of(canonical)
            .expect("prefix alias maps to a registered canonical name");
        let info = PrefixInfo {
            canonical: canonical.to_string(),
            factor,
        };
        let node = root.child_path(alias);
        node.prefix = Some(info.clone());
        node.terminal = true;
        prefixes_by_len.push((alias.to_string(), info));
    }

    // Longest alias first; equal lengths ordered lexicographically so the
    // enumeration is reproducible across builds.
    prefixes_by_len.sort_by(|(a, _), (b, _)| {
        b.chars().count().cmp(&a.chars().count()).then_with(|| a.cmp(b))
    });

    TrieIndex {
        root,
        prefixes_by_len,
    }
}
