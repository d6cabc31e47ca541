//! `useFormik(...)` → `useForm(...)`

use super::plan::RewritePlan;
use crate::analyzers::parser::node_text;
use crate::analyzers::syntax::{CallConfig, CallSite, EntryShape};
use crate::api::keys::{DEFAULT_VALUES, INITIAL_VALUES, RESOLVER, VALIDATION_SCHEMA};
use crate::api::{REPLACEMENT_HOOK, SCHEMA_ADAPTER, TARGET_HOOK};

/// Plan the rewrite of one hook call that already passed the safety gate.
/// Returns whether a schema adapter call was introduced.
pub fn rewrite_hook_call(site: &CallSite, source: &str, plan: &mut RewritePlan) -> bool {
    plan.replace(
        &site.callee,
        REPLACEMENT_HOOK,
        format!("renamed {TARGET_HOOK}() to {REPLACEMENT_HOOK}()"),
    );

    let CallConfig::Object { entries, .. } = &site.config else {
        return false;
    };

    let mut uses_resolver = false;
    for entry in entries {
        match (entry.key.as_str(), entry.shape) {
            (INITIAL_VALUES, EntryShape::Pair { key, .. })
            | (INITIAL_VALUES, EntryShape::Method { name: key }) => {
                plan.replace(
                    &key,
                    DEFAULT_VALUES,
                    format!("renamed {INITIAL_VALUES} to {DEFAULT_VALUES}"),
                );
            }
            (INITIAL_VALUES, EntryShape::Shorthand) => {
                plan.replace(
                    &entry.node,
                    format!("{DEFAULT_VALUES}: {INITIAL_VALUES}"),
                    format!("renamed {INITIAL_VALUES} to {DEFAULT_VALUES}"),
                );
            }
            (VALIDATION_SCHEMA, EntryShape::Pair { value, .. }) => {
                plan.replace(
                    &entry.node,
                    format!("{RESOLVER}: {SCHEMA_ADAPTER}({})", node_text(&value, source)),
                    format!("wrapped {VALIDATION_SCHEMA} in {SCHEMA_ADAPTER}() as {RESOLVER}"),
                );
                uses_resolver = true;
            }
            (VALIDATION_SCHEMA, EntryShape::Shorthand) => {
                plan.replace(
                    &entry.node,
                    format!("{RESOLVER}: {SCHEMA_ADAPTER}({VALIDATION_SCHEMA})"),
                    format!("wrapped {VALIDATION_SCHEMA} in {SCHEMA_ADAPTER}() as {RESOLVER}"),
                );
                uses_resolver = true;
            }
            _ => {}
        }
    }

    uses_resolver
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::parser::parse_source;
    use crate::core::ast::SourceTree;
    use std::path::Path;

    fn rewrite(source: &str) -> (String, bool) {
        let tree: SourceTree = parse_source(source, Path::new("a.js")).unwrap();
        let call = tree
            .root()
            .named_child(0)
            .and_then(|stmt| stmt.named_child(0))
            .unwrap();
        let site = CallSite::from_node(call, &tree.source).unwrap();
        let mut plan = RewritePlan::new();
        let uses_resolver = rewrite_hook_call(&site, &tree.source, &mut plan);
        let (output, _) = plan.apply(&tree.source).unwrap();
        (output, uses_resolver)
    }

    #[test]
    fn renames_pairs_and_wraps_schema() {
        let (output, uses_resolver) =
            rewrite("useFormik({ initialValues: { a: 1 }, onSubmit: go, validationSchema: schema });");
        assert_eq!(
            output,
            "useForm({ defaultValues: { a: 1 }, onSubmit: go, resolver: yupResolver(schema) });"
        );
        assert!(uses_resolver);
    }

    #[test]
    fn expands_shorthand_entries() {
        let (output, uses_resolver) = rewrite("useFormik({ initialValues, validationSchema });");
        assert_eq!(
            output,
            "useForm({ defaultValues: initialValues, resolver: yupResolver(validationSchema) });"
        );
        assert!(uses_resolver);
    }

    #[test]
    fn leaves_on_submit_method_untouched() {
        let (output, uses_resolver) = rewrite("useFormik({ onSubmit(values) { save(values); } });");
        assert_eq!(output, "useForm({ onSubmit(values) { save(values); } });");
        assert!(!uses_resolver);
    }
}
