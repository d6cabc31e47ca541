//! Complexity classification of detected usages.
//!
//! Classification is a pure function of a pattern kind and the set of
//! configuration keys (object keys for hook calls, attribute names for JSX
//! elements). It never looks at values, so it cannot be fooled into calling
//! something safe that it does not understand.

pub mod rules;

use crate::api::keys::VALIDATION_SCHEMA;
use crate::core::{Classification, Complexity, PatternKind};
use rules::*;
use std::collections::BTreeSet;

/// Classify a usage of the given kind. `keys` is `None` when the
/// configuration is not a literal key/value structure.
pub fn classify(kind: PatternKind, keys: Option<&[&str]>) -> Classification {
    match kind {
        PatternKind::HookInvocation => classify_hook_config(keys),
        PatternKind::WrapperComponent => classify_wrapper(keys.unwrap_or_default()),
        PatternKind::FieldElement
        | PatternKind::FieldArrayElement
        | PatternKind::FastFieldElement => classify_field(keys.unwrap_or_default()),
        PatternKind::ErrorMessageElement => Classification::medium(ERROR_MESSAGE_REASON),
        PatternKind::FieldAccessorHook => Classification::medium(FIELD_ACCESSOR_REASON),
    }
}

/// Policy for `useFormik(config)`.
pub fn classify_hook_config(keys: Option<&[&str]>) -> Classification {
    let Some(keys) = keys else {
        return Classification::complex(NON_STANDARD_CONFIG);
    };
    let props: BTreeSet<&str> = keys.iter().copied().collect();

    if props.len() <= HOOK_MAX_SAFE_KEYS && props.iter().all(|k| HOOK_SAFE_KEYS.contains(k)) {
        return Classification::simple();
    }

    match HOOK_DENIED_KEYS.iter().find(|(key, _)| props.contains(key)) {
        Some((_, reason)) => Classification::complex(*reason),
        None => Classification::medium(COMPLEX_CONFIG),
    }
}

/// Hook policy refined by how entries are written. `method_keys` are the
/// keys written as `key() { ... }`; a method `validationSchema` has no value
/// to hand to the resolver.
pub fn classify_hook_entries(keys: Option<&[&str]>, method_keys: &[&str]) -> Classification {
    let classification = classify_hook_config(keys);
    if classification.complexity == Complexity::Simple && method_keys.contains(&VALIDATION_SCHEMA) {
        return Classification::medium(SCHEMA_METHOD_REASON);
    }
    classification
}

/// Policy for `<Formik>`.
pub fn classify_wrapper(attributes: &[&str]) -> Classification {
    if let Some(attr) = attributes
        .iter()
        .find(|a| WRAPPER_RENDER_ATTRIBUTES.contains(a))
    {
        return Classification::medium(format!("{WRAPPER_RENDER_REASON} (`{attr}`)"));
    }
    if attributes.contains(&SPREAD_KEY) {
        return Classification::medium(SPREAD_REASON);
    }
    if attributes
        .iter()
        .any(|a| WRAPPER_DENIED_ATTRIBUTES.contains(a))
    {
        return Classification::complex(WRAPPER_VALIDATION_REASON);
    }
    Classification::simple()
}

/// Policy for `<Field>`, `<FastField>` and `<FieldArray>`.
pub fn classify_field(attributes: &[&str]) -> Classification {
    if let Some(attr) = attributes
        .iter()
        .find(|a| FIELD_RENDER_ATTRIBUTES.contains(a))
    {
        return Classification::medium(format!("custom render via `{attr}`"));
    }
    if attributes.contains(&SPREAD_KEY) {
        return Classification::medium(SPREAD_REASON);
    }
    Classification::simple()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hook_allow_list_is_simple() {
        let c = classify_hook_config(Some(&["initialValues", "onSubmit", "validationSchema"]));
        assert_eq!(c, Classification::simple());
        assert_eq!(classify_hook_config(Some(&[])), Classification::simple());
        assert_eq!(
            classify_hook_config(Some(&["onSubmit", "onSubmit"])).complexity,
            Complexity::Simple
        );
    }

    #[test]
    fn hook_non_literal_is_complex() {
        let c = classify_hook_config(None);
        assert_eq!(c.complexity, Complexity::Complex);
        assert_eq!(c.reason.as_deref(), Some(NON_STANDARD_CONFIG));
    }

    #[test]
    fn hook_deny_reasons_are_tier_specific() {
        let validate = classify_hook_config(Some(&["initialValues", "validate"]));
        assert_eq!(validate.complexity, Complexity::Complex);
        assert!(validate.reason.unwrap().contains("validation schema"));

        let reinit = classify_hook_config(Some(&["enableReinitialize"]));
        assert!(reinit.reason.unwrap().contains("different pattern downstream"));

        let trigger = classify_hook_config(Some(&["validateOnBlur", "onSubmit"]));
        assert!(trigger.reason.unwrap().contains("mode"));
    }

    #[test]
    fn method_validation_schema_needs_review() {
        let keys = ["initialValues", "validationSchema"];
        let c = classify_hook_entries(Some(&keys[..]), &["validationSchema"]);
        assert_eq!(c, Classification::medium(SCHEMA_METHOD_REASON));

        // a method onSubmit is fine, and denied keys keep their own reason
        assert_eq!(
            classify_hook_entries(Some(&["onSubmit"]), &["onSubmit"]),
            Classification::simple()
        );
        assert_eq!(
            classify_hook_entries(Some(&["validate", "validationSchema"]), &["validationSchema"])
                .complexity,
            Complexity::Complex
        );
    }

    #[test]
    fn hook_unknown_keys_are_medium() {
        let c = classify_hook_config(Some(&["initialValues", "initialErrors"]));
        assert_eq!(c, Classification::medium(COMPLEX_CONFIG));
    }

    #[test]
    fn wrapper_policy() {
        assert_eq!(
            classify_wrapper(&["initialValues", "onSubmit"]),
            Classification::simple()
        );
        assert_eq!(
            classify_wrapper(&["initialValues", "children"]).complexity,
            Complexity::Medium
        );
        assert_eq!(
            classify_wrapper(&["validateOnChange"]).complexity,
            Complexity::Complex
        );
        // render props win over validation flags
        assert_eq!(
            classify_wrapper(&["validate", "render"]).complexity,
            Complexity::Medium
        );
    }

    #[test]
    fn field_policy() {
        assert_eq!(classify_field(&["name", "type"]), Classification::simple());
        assert_eq!(
            classify_field(&["name", "component"]).complexity,
            Complexity::Medium
        );
        assert_eq!(classify_field(&["name", SPREAD_KEY]).complexity, Complexity::Medium);
        assert_eq!(
            classify_field(&["as", "name"]),
            Classification::medium("custom render via `as`")
        );
    }

    #[test]
    fn accessor_and_error_message_always_need_review() {
        assert_eq!(
            classify(PatternKind::ErrorMessageElement, Some(&["name"])).complexity,
            Complexity::Medium
        );
        assert_eq!(
            classify(PatternKind::FieldAccessorHook, None).complexity,
            Complexity::Medium
        );
    }
}
