//! Accumulated flags: the imports and type aliases a template discovers while
//! it renders.

use std::collections::BTreeSet;
use std::fmt;

/// Which accumulator a flag belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKind {
    Imports,
    TypeAliases,
}

impl FlagKind {
    pub fn all() -> &'static [FlagKind] {
        &[FlagKind::Imports, FlagKind::TypeAliases]
    }

    /// Template-facing name of the reset entry
    pub fn reset_name(&self) -> &'static str {
        match self {
            FlagKind::Imports => "resetImports",
            FlagKind::TypeAliases => "resetTypeAliases",
        }
    }

    /// Template-facing name of the add entry
    pub fn add_name(&self) -> &'static str {
        match self {
            FlagKind::Imports => "addImport",
            FlagKind::TypeAliases => "addTypeAlias",
        }
    }

    /// Template-facing name of the get entry
    pub fn get_name(&self) -> &'static str {
        match self {
            FlagKind::Imports => "getImports",
            FlagKind::TypeAliases => "getTypeAliases",
        }
    }
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagKind::Imports => write!(f, "imports"),
            FlagKind::TypeAliases => write!(f, "type aliases"),
        }
    }
}

/// A resettable set of unique keys
///
/// Keys are kept in lexicographic order so `get` is deterministic for a given
/// set of keys regardless of the order they were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSet {
    keys: BTreeSet<String>,
}

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every stored key
    pub fn reset(&mut self) {
        self.keys.clear();
    }

    /// Insert `key` if absent. Returns whether it was newly added.
    pub fn add(&mut self, key: impl Into<String>) -> bool {
        self.keys.insert(key.into())
    }

    /// All stored keys joined by newlines
    pub fn get(&self) -> String {
        self.keys.iter().map(String::as_str).collect::<Vec<_>>().join("\n")
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Stored keys as an owned list, in listing order
    pub fn to_vec(&self) -> Vec<String> {
        self.keys.iter().cloned().collect()
    }
}
