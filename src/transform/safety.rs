//! Safety gate for the rewrite.
//!
//! Deliberately separate from the classifier: the transformer re-derives
//! safety from the tree it is about to rewrite instead of trusting earlier
//! analysis output.

use crate::analyzers::syntax::{CallConfig, CallSite, EntryShape};
use crate::api::keys::VALIDATION_SCHEMA;
use crate::classifier::rules::{HOOK_MAX_SAFE_KEYS, HOOK_SAFE_KEYS, SCHEMA_METHOD_REASON};
use std::collections::BTreeSet;

/// True when a hook configuration only uses keys with a direct `useForm`
/// equivalent.
pub fn is_safe_hook_config(keys: &[&str]) -> bool {
    let unique: BTreeSet<&str> = keys.iter().copied().collect();
    unique.len() <= HOOK_MAX_SAFE_KEYS && unique.iter().all(|k| HOOK_SAFE_KEYS.contains(k))
}

/// Why a hook call cannot be rewritten, or `None` if it can.
pub fn unsafe_hook_reason(site: &CallSite) -> Option<String> {
    let CallConfig::Object { entries, .. } = &site.config else {
        return Some("configuration is not an object literal".to_string());
    };

    let keys: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();
    if !is_safe_hook_config(&keys) {
        let unsupported: BTreeSet<&str> = keys
            .iter()
            .copied()
            .filter(|k| !HOOK_SAFE_KEYS.contains(k))
            .collect();
        let listed = unsupported.into_iter().collect::<Vec<_>>().join(", ");
        return Some(format!("unsupported configuration keys: {listed}"));
    }

    let schema_is_method = entries
        .iter()
        .any(|e| e.key == VALIDATION_SCHEMA && matches!(e.shape, EntryShape::Method { .. }));
    if schema_is_method {
        return Some(SCHEMA_METHOD_REASON.to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_list_subsets_are_safe() {
        assert!(is_safe_hook_config(&[]));
        assert!(is_safe_hook_config(&["onSubmit"]));
        assert!(is_safe_hook_config(&[
            "initialValues",
            "onSubmit",
            "validationSchema"
        ]));
    }

    #[test]
    fn anything_else_is_unsafe() {
        assert!(!is_safe_hook_config(&["initialValues", "validate"]));
        assert!(!is_safe_hook_config(&["enableReinitialize"]));
        assert!(!is_safe_hook_config(&["initialErrors"]));
    }
}
