//! Identifier decoration helpers for code generation
//!
//! Template contexts carry property names such as `"name?"`, where the trailing
//! `?` marks the property optional. These helpers split the marker from the
//! semantic name, for one identifier or a list of them.

use serde::{Deserialize, Serialize};

/// Trailing character marking an identifier optional
pub const OPTIONALITY_MARKER: char = '?';

/// One identifier or an ordered list of identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifiers {
    Single(String),
    Many(Vec<String>),
}

impl Identifiers {
    /// Apply `f` to every identifier, preserving shape, length and order
    pub fn map<F>(&self, f: F) -> Identifiers
    where
        F: Fn(&str) -> &str,
    {
        match self {
            Identifiers::Single(name) => Identifiers::Single(f(name).to_string()),
            Identifiers::Many(names) => {
                Identifiers::Many(names.iter().map(|name| f(name).to_string()).collect())
            }
        }
    }

    /// Whether this counts as an absent subject
    ///
    /// An empty string is absent; an empty list is a real, empty list.
    pub fn is_absent(&self) -> bool {
        matches!(self, Identifiers::Single(name) if name.is_empty())
    }
}

impl From<&str> for Identifiers {
    fn from(name: &str) -> Self {
        Identifiers::Single(name.to_string())
    }
}

impl From<Vec<String>> for Identifiers {
    fn from(names: Vec<String>) -> Self {
        Identifiers::Many(names)
    }
}

/// Removes the optionality marker from one identifier.
///
/// # Examples
/// ```
/// use gen_api_models::generation::naming::strip_marker;
///
/// assert_eq!(strip_marker("arg?"), "arg");
/// assert_eq!(strip_marker("arg"), "arg");
/// assert_eq!(strip_marker("?"), "");
/// ```
pub fn strip_marker(name: &str) -> &str {
    name.strip_suffix(OPTIONALITY_MARKER).unwrap_or(name)
}

/// Returns `"?"` when the identifier carries the optionality marker, else `""`.
///
/// # Examples
/// ```
/// use gen_api_models::generation::naming::optionality_symbol;
///
/// assert_eq!(optionality_symbol("arg?"), "?");
/// assert_eq!(optionality_symbol("arg"), "");
/// ```
pub fn optionality_symbol(name: &str) -> &'static str {
    if name.ends_with(OPTIONALITY_MARKER) {
        "?"
    } else {
        ""
    }
}

/// Removes the optionality marker from one identifier or each of a list.
///
/// Returns `None` for an absent or empty subject.
pub fn strip_optionality_marker(subject: Option<&Identifiers>) -> Option<Identifiers> {
    subject
        .filter(|subject| !subject.is_absent())
        .map(|subject| subject.map(strip_marker))
}

/// Extracts the optionality symbol from one identifier or each of a list.
///
/// Returns `None` for an absent or empty subject.
pub fn extract_optionality_symbol(subject: Option<&Identifiers>) -> Option<Identifiers> {
    subject
        .filter(|subject| !subject.is_absent())
        .map(|subject| subject.map(|name| optionality_symbol(name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn many(names: &[&str]) -> Identifiers {
        Identifiers::Many(names.iter().map(|name| name.to_string()).collect())
    }

    #[test]
    fn test_strip_single() {
        let stripped = strip_optionality_marker(Some(&"arg?".into()));
        assert_eq!(stripped, Some(Identifiers::from("arg")));

        let untouched = strip_optionality_marker(Some(&"arg".into()));
        assert_eq!(untouched, Some(Identifiers::from("arg")));
    }

    #[test]
    fn test_strip_list() {
        let stripped = strip_optionality_marker(Some(&many(&["arg1?", "arg2"])));
        assert_eq!(stripped, Some(many(&["arg1", "arg2"])));
    }

    #[test]
    fn test_strip_absent() {
        assert_eq!(strip_optionality_marker(None), None);
        assert_eq!(strip_optionality_marker(Some(&"".into())), None);
        assert_eq!(strip_optionality_marker(Some(&many(&[]))), Some(many(&[])));
    }

    #[test]
    fn test_strip_marker_only() {
        assert_eq!(
            strip_optionality_marker(Some(&"?".into())),
            Some(Identifiers::from(""))
        );
    }

    #[test]
    fn test_strip_only_last_marker() {
        assert_eq!(strip_marker("arg??"), "arg?");
        assert_eq!(strip_marker("a?rg"), "a?rg");
    }

    #[test]
    fn test_extract_single() {
        assert_eq!(
            extract_optionality_symbol(Some(&"arg?".into())),
            Some(Identifiers::from("?"))
        );
        assert_eq!(
            extract_optionality_symbol(Some(&"arg".into())),
            Some(Identifiers::from(""))
        );
    }

    #[test]
    fn test_extract_list() {
        assert_eq!(
            extract_optionality_symbol(Some(&many(&["arg1?", "arg2"]))),
            Some(many(&["?", ""]))
        );
        assert_eq!(extract_optionality_symbol(None), None);
    }

    #[test]
    fn test_identifiers_deserialize_untagged() {
        let single: Identifiers = serde_json::from_str("\"arg?\"").unwrap();
        assert_eq!(single, Identifiers::from("arg?"));
        let list: Identifiers = serde_json::from_str("[\"a\", \"b?\"]").unwrap();
        assert_eq!(list, many(&["a", "b?"]));
    }
}
