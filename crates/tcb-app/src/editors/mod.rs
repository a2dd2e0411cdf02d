//! Record and parameter editors.
//!
//! Editors are pure functions over a read-only snapshot of the slice they
//! own. Each operation returns either a complete replacement (a new
//! [`Record`](tcb_core::Record) or [`Params`](tcb_core::Params)) or nothing.
//! The update loop merges replacements into the document.

pub mod param_editor;
pub mod record_editor;

use indexmap::IndexMap;

/// Result of committing a rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome<T> {
    /// The entry now lives under the new name
    Renamed(T),
    /// The candidate was empty or equal to the current name
    Unchanged,
    /// Another entry already uses the candidate name
    Collision { name: String },
}

impl<T> RenameOutcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RenameOutcome<U> {
        match self {
            Self::Renamed(value) => RenameOutcome::Renamed(f(value)),
            Self::Unchanged => RenameOutcome::Unchanged,
            Self::Collision { name } => RenameOutcome::Collision { name },
        }
    }
}

/// Trim a rename candidate; `None` if nothing is left
pub(crate) fn normalize_candidate(candidate: &str) -> Option<&str> {
    let trimmed = candidate.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Move the value under `old` to `candidate`, appending it at the end.
///
/// Every other entry keeps its relative order. An unknown `old` key is
/// treated as unchanged.
pub(crate) fn rekey<V: Clone>(
    map: &IndexMap<String, V>,
    old: &str,
    candidate: &str,
) -> RenameOutcome<IndexMap<String, V>> {
    let Some(new) = normalize_candidate(candidate) else {
        return RenameOutcome::Unchanged;
    };
    if new == old || !map.contains_key(old) {
        return RenameOutcome::Unchanged;
    }
    if map.contains_key(new) {
        return RenameOutcome::Collision {
            name: new.to_string(),
        };
    }

    let mut next = map.clone();
    if let Some(value) = next.shift_remove(old) {
        next.insert(new.to_string(), value);
    }
    RenameOutcome::Renamed(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> IndexMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_rekey_moves_entry_to_end() {
        let before = map(&[("a", "1"), ("b", "2"), ("c", "3")]);
        let RenameOutcome::Renamed(after) = rekey(&before, "a", "z") else {
            panic!("expected rename");
        };
        let keys: Vec<_> = after.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "c", "z"]);
        assert_eq!(after["z"], "1");
    }

    #[test]
    fn test_rekey_empty_or_same_is_unchanged() {
        let before = map(&[("a", "1")]);
        assert_eq!(rekey(&before, "a", ""), RenameOutcome::Unchanged);
        assert_eq!(rekey(&before, "a", "   "), RenameOutcome::Unchanged);
        assert_eq!(rekey(&before, "a", "a"), RenameOutcome::Unchanged);
        assert_eq!(rekey(&before, "a", " a "), RenameOutcome::Unchanged);
    }

    #[test]
    fn test_rekey_trims_surrounding_whitespace() {
        let before = map(&[("a", "1"), ("b", "2")]);
        let RenameOutcome::Renamed(after) = rekey(&before, "a", "  z ") else {
            panic!("expected rename");
        };
        assert!(after.keys().eq(["b", "z"]));
        assert_eq!(
            rekey(&before, "a", " b "),
            RenameOutcome::Collision { name: "b".into() }
        );
    }

    #[test]
    fn test_rekey_collision_is_reported() {
        let before = map(&[("a", "1"), ("b", "2")]);
        assert_eq!(
            rekey(&before, "a", "b"),
            RenameOutcome::Collision { name: "b".into() }
        );
    }

    #[test]
    fn test_rekey_unknown_key_is_unchanged() {
        let before = map(&[("a", "1")]);
        assert_eq!(rekey(&before, "missing", "x"), RenameOutcome::Unchanged);
    }
}
