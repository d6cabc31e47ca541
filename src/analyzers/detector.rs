//! Pattern detection
//!
//! Walks a parsed tree and records every formik-shaped usage in document
//! order, classifying each one as it is found.

use crate::analyzers::imports::imports_target_api;
use crate::analyzers::parser::{node_column, node_line};
use crate::analyzers::syntax::{bare_callee, CallSite, JsxElement};
use crate::api;
use crate::classifier::{classify, classify_hook_entries, rules::SPREAD_KEY};
use crate::core::ast::SourceTree;
use crate::core::{Location, Pattern, PatternKind};
use tree_sitter::Node;

/// Patterns found in one file plus whether it imports formik.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub has_formik: bool,
    pub patterns: Vec<Pattern>,
}

/// Detect and classify every target-API usage in a tree.
pub fn detect_patterns(tree: &SourceTree) -> Detection {
    let mut patterns = Vec::new();
    collect_patterns(&tree.root(), tree, &mut patterns);

    Detection {
        has_formik: imports_target_api(tree),
        patterns,
    }
}

/// Map a JSX tag name to the pattern it represents.
pub fn element_kind(tag: &str) -> Option<PatternKind> {
    match tag {
        api::WRAPPER_COMPONENT => Some(PatternKind::WrapperComponent),
        api::FIELD_COMPONENT => Some(PatternKind::FieldElement),
        api::FAST_FIELD_COMPONENT => Some(PatternKind::FastFieldElement),
        api::FIELD_ARRAY_COMPONENT => Some(PatternKind::FieldArrayElement),
        api::ERROR_MESSAGE_COMPONENT => Some(PatternKind::ErrorMessageElement),
        _ => None,
    }
}

/// Attribute key set an element is classified on. Function children count
/// as a `children` render prop; on field-family elements any other content
/// does too, since a rewrite would drop it.
pub fn element_config_keys<'a>(element: &'a JsxElement, kind: PatternKind) -> Vec<&'a str> {
    let mut keys = element.attribute_names();
    let content_is_render = kind.is_field_family() && element.has_content_children;
    if element.has_function_child || content_is_render {
        keys.push("children");
    }
    if element.has_spread_attribute {
        keys.push(SPREAD_KEY);
    }
    keys
}

fn collect_patterns(node: &Node, tree: &SourceTree, patterns: &mut Vec<Pattern>) {
    match node.kind() {
        "call_expression" => {
            if let Some(pattern) = detect_call(node, tree) {
                patterns.push(pattern);
            }
        }
        "jsx_element" | "jsx_self_closing_element" => {
            if let Some(pattern) = detect_element(node, tree) {
                patterns.push(pattern);
            }
        }
        _ => {}
    }

    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    for child in &children {
        collect_patterns(child, tree, patterns);
    }
}

fn detect_call(node: &Node, tree: &SourceTree) -> Option<Pattern> {
    let kind = match bare_callee(node, &tree.source)? {
        api::TARGET_HOOK => PatternKind::HookInvocation,
        api::FIELD_ACCESSOR_HOOK => PatternKind::FieldAccessorHook,
        _ => return None,
    };
    let site = CallSite::from_node(*node, &tree.source)?;
    let keys = site.config.keys();
    let classification = match kind {
        PatternKind::HookInvocation => {
            classify_hook_entries(keys.as_deref(), &site.config.method_keys())
        }
        _ => classify(kind, keys.as_deref()),
    };

    Some(Pattern::new(kind, location(node, tree), classification))
}

fn detect_element(node: &Node, tree: &SourceTree) -> Option<Pattern> {
    let element = JsxElement::from_node(*node, &tree.source)?;
    let kind = element_kind(&element.tag)?;
    let keys = element_config_keys(&element, kind);
    let classification = classify(kind, Some(keys.as_slice()));

    Some(Pattern::new(kind, location(node, tree), classification))
}

fn location(node: &Node, tree: &SourceTree) -> Location {
    Location {
        file: tree.path.clone(),
        line: node_line(node),
        column: node_column(node),
    }
}
