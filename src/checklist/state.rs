use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Item id to done flag
///
/// An absent key means "not done". Keys are kept sorted so the stored
/// JSON is stable between saves. Ids that are no longer part of the
/// checklist are kept as-is; progress only looks up defined items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionState {
    entries: BTreeMap<String, bool>,
}

impl CompletionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the item is marked done
    pub fn is_checked(&self, id: &str) -> bool {
        self.entries.get(id).copied().unwrap_or(false)
    }

    /// Invert the flag for `id` and return the new value
    pub fn toggle(&mut self, id: &str) -> bool {
        let checked = !self.is_checked(id);
        self.entries.insert(id.to_string(), checked);
        checked
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Owned copy of every stored entry, stale ids included
    pub fn snapshot(&self) -> BTreeMap<String, bool> {
        self.entries.clone()
    }

    /// Serialize as a flat JSON object, e.g. `{"bceid":true,"cgl":false}`
    pub fn to_json(&self) -> Result<String, StorageError> {
        serde_json::to_string(self).map_err(|e| StorageError::Malformed(e.to_string()))
    }

    /// Parse a stored value
    ///
    /// Only a JSON object whose values are all booleans is accepted.
    /// Anything else is rejected as a whole rather than partially adopted.
    pub fn from_json(content: &str) -> Result<Self, StorageError> {
        serde_json::from_str(content).map_err(|e| StorageError::Malformed(e.to_string()))
    }
}

impl FromIterator<(String, bool)> for CompletionState {
    fn from_iter<T: IntoIterator<Item = (String, bool)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_key_is_unchecked() {
        let state = CompletionState::new();
        assert!(!state.is_checked("bceid"));
    }

    #[test]
    fn test_first_toggle_sets_true() {
        let mut state = CompletionState::new();
        assert!(state.toggle("bceid"));
        assert!(state.is_checked("bceid"));
        assert!(!state.toggle("bceid"));
        // A toggled-off item stays in the map as an explicit false
        assert_eq!(state.snapshot().get("bceid"), Some(&false));
    }

    #[test]
    fn test_json_shape() {
        let state: CompletionState = [("cgl".to_string(), false), ("bceid".to_string(), true)]
            .into_iter()
            .collect();
        assert_eq!(state.to_json().unwrap(), r#"{"bceid":true,"cgl":false}"#);
    }

    #[test]
    fn test_from_json_accepts_object_of_bools() {
        let state = CompletionState::from_json(r#"{"bceid": true, "cgl": false}"#).unwrap();
        assert!(state.is_checked("bceid"));
        assert!(!state.is_checked("cgl"));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_from_json_rejects_other_shapes() {
        for bad in [
            "not json",
            "[true, false]",
            "true",
            "null",
            r#"{"bceid": 1}"#,
            r#"{"bceid": "yes"}"#,
            r#"{"bceid": true, "cgl": null}"#,
        ] {
            let result = CompletionState::from_json(bad);
            assert!(
                matches!(result, Err(StorageError::Malformed(_))),
                "expected rejection for {bad}"
            );
        }
    }

    #[test]
    fn test_from_json_empty_object() {
        let state = CompletionState::from_json("{}").unwrap();
        assert!(state.is_empty());
    }
}
