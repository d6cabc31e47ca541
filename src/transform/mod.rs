//! Whole-file conversion from formik to react-hook-form.
//!
//! Conversion is check-then-commit:
//!
//! 1. Every `useFormik` call is re-detected and run through
//!    [`safety::unsafe_hook_reason`]. One unsafe call aborts the file and
//!    nothing is rewritten.
//! 2. Otherwise hook calls, `<Field>` elements and the formik imports are
//!    planned as subtree replacements and spliced in a single pass.
//!
//! There is no partially converted state: a result either carries the full
//! new text or an error and no text.

pub mod field;
pub mod hook;
pub mod imports;
pub mod plan;
pub mod safety;

use crate::analyzers::imports::{find_target_imports, imports_target_api};
use crate::analyzers::parser::{node_line, node_text, parse_source};
use crate::analyzers::syntax::{bare_callee, CallSite, JsxElement};
use crate::api::{
    FIELD_COMPONENT, REGISTER_FN, REPLACEMENT_HOOK, SCHEMA_ADAPTER, SCHEMA_ADAPTER_MODULE,
    TARGET_HOOK,
};
use crate::core::ast::SourceTree;
use crate::core::ConversionResult;
use field::FieldRewrite;
use imports::{rewrite_imports, ImportRewrite};
use plan::RewritePlan;
use std::path::Path;
use tree_sitter::Node;

/// Parse and convert one file's source text.
pub fn convert_source(content: &str, path: &Path) -> ConversionResult {
    match parse_source(content, path) {
        Ok(tree) => convert_tree(&tree),
        Err(e) => ConversionResult::failed(format!("cannot convert: {e}"), vec![], vec![]),
    }
}

/// Convert an already parsed file.
pub fn convert_tree(tree: &SourceTree) -> ConversionResult {
    let source = tree.source.as_str();
    let targets = collect_targets(tree);
    let target_imports = find_target_imports(tree);

    if targets.hooks.is_empty() && targets.fields.is_empty() && target_imports.is_empty() {
        return ConversionResult::failed("no formik usage found", vec![], vec![]);
    }
    if !imports_target_api(tree) {
        return ConversionResult::failed(
            "file does not import formik; file left unchanged",
            vec![],
            vec![],
        );
    }

    // Phase 1: check
    let blocked: Vec<(usize, String)> = targets
        .hooks
        .iter()
        .filter_map(|site| {
            safety::unsafe_hook_reason(site).map(|reason| (node_line(&site.node), reason))
        })
        .collect();
    if let Some((line, reason)) = blocked.first() {
        log::debug!(
            "{}: {} unsafe {TARGET_HOOK} call(s), conversion aborted",
            tree.path.display(),
            blocked.len()
        );
        return ConversionResult::failed(
            format!(
                "{} {TARGET_HOOK} call(s) cannot be converted safely (first at line {line}: {reason}); file left unchanged",
                blocked.len()
            ),
            vec![],
            vec![],
        );
    }

    // Phase 2: commit
    let mut plan = RewritePlan::new();
    let mut warnings = Vec::new();

    let mut uses_resolver = false;
    for site in &targets.hooks {
        uses_resolver |= hook::rewrite_hook_call(site, source, &mut plan);
    }

    let mut fields_left = 0;
    let mut fields_rewritten = 0;
    for element in &targets.fields {
        match field::rewrite_field(element, source, &mut plan) {
            FieldRewrite::Rewritten { dropped } => {
                fields_rewritten += 1;
                if !dropped.is_empty() {
                    warnings.push(format!(
                        "<{FIELD_COMPONENT}> at line {} lost attributes {}; re-add them to the <input> if needed",
                        node_line(&element.node),
                        dropped.join(", ")
                    ));
                }
            }
            FieldRewrite::Skipped(warning) => {
                fields_left += 1;
                warnings.push(warning);
            }
        }
    }

    if targets.hooks.is_empty() && fields_rewritten == 0 {
        return ConversionResult::failed(
            "no convertible formik usage found",
            warnings,
            vec![],
        );
    }

    warnings.extend(rewrite_imports(
        &target_imports,
        ImportRewrite {
            drop_field: fields_left == 0,
        },
        &mut plan,
    ));

    if uses_resolver {
        warnings.push(format!(
            "add `import {{ {SCHEMA_ADAPTER} }} from '{SCHEMA_ADAPTER_MODULE}'` by hand"
        ));
    }
    if fields_rewritten > 0 && !targets.has_register_binding {
        warnings.push(format!(
            "`{REGISTER_FN}` is not in scope; destructure it with `const {{ {REGISTER_FN} }} = {REPLACEMENT_HOOK}(...)`"
        ));
    }

    match plan.apply(source) {
        Ok((code, changes)) => {
            log::debug!("{}: {} change(s) planned", tree.path.display(), changes.len());
            ConversionResult::converted(code, warnings, changes)
        }
        Err(e) => ConversionResult::failed(e.to_string(), warnings, vec![]),
    }
}

/// Nodes the rewrite acts on, gathered in one walk.
struct Targets<'t> {
    hooks: Vec<CallSite<'t>>,
    fields: Vec<JsxElement<'t>>,
    has_register_binding: bool,
}

fn collect_targets(tree: &SourceTree) -> Targets<'_> {
    let mut targets = Targets {
        hooks: Vec::new(),
        fields: Vec::new(),
        has_register_binding: false,
    };
    walk(tree.root(), &tree.source, &mut targets);
    targets
}

fn walk<'t>(node: Node<'t>, source: &str, targets: &mut Targets<'t>) {
    match node.kind() {
        "call_expression" if bare_callee(&node, source) == Some(TARGET_HOOK) => {
            if let Some(site) = CallSite::from_node(node, source) {
                targets.hooks.push(site);
            }
        }
        "jsx_element" | "jsx_self_closing_element" => {
            if let Some(element) = JsxElement::from_node(node, source) {
                if element.tag == FIELD_COMPONENT {
                    targets.fields.push(element);
                }
            }
        }
        "identifier" | "shorthand_property_identifier_pattern"
            if node_text(&node, source) == REGISTER_FN =>
        {
            targets.has_register_binding = true;
        }
        _ => {}
    }

    let mut cursor = node.walk();
    let children: Vec<Node<'t>> = node.children(&mut cursor).collect();
    for child in children {
        walk(child, source, targets);
    }
}
