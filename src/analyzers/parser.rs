//! Tree-sitter parser integration for JavaScript/TypeScript
//!
//! Provides parsing using tree-sitter grammars for JS/TS/JSX/TSX.

use crate::core::ast::{SourceTree, SourceVariant};
use crate::errors::{Error, Result};
use std::path::Path;
use tree_sitter::{Language as TsLanguage, Node, Parser};

/// Get the tree-sitter language for a source variant
fn get_language(variant: SourceVariant) -> TsLanguage {
    match variant {
        SourceVariant::JavaScript | SourceVariant::Jsx => tree_sitter_javascript::LANGUAGE.into(),
        SourceVariant::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        SourceVariant::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
    }
}

/// Parse JavaScript/TypeScript source code into a tree-sitter tree.
///
/// A tree containing ERROR or MISSING nodes is rejected: neither the
/// classifier nor the rewriter can reason about a partially parsed file.
pub fn parse_source(content: &str, path: &Path) -> Result<SourceTree> {
    let variant = detect_variant(path);
    let mut parser = Parser::new();

    parser
        .set_language(&get_language(variant))
        .map_err(|e| Error::parse(path, format!("failed to set tree-sitter language: {e}")))?;

    let tree = parser
        .parse(content, None)
        .ok_or_else(|| Error::parse(path, "parser produced no tree"))?;

    if tree.root_node().has_error() {
        let line = first_error_line(tree.root_node()).unwrap_or(1);
        return Err(Error::parse(path, format!("syntax error near line {line}")));
    }

    Ok(SourceTree {
        tree,
        source: content.to_string(),
        path: path.to_path_buf(),
        variant,
    })
}

/// Determine source variant from file path. Unknown extensions fall back to
/// the TSX grammar, which accepts the widest range of syntax.
pub fn detect_variant(path: &Path) -> SourceVariant {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(SourceVariant::from_extension)
        .unwrap_or(SourceVariant::Tsx)
}

fn first_error_line(node: Node) -> Option<usize> {
    if node.is_error() || node.is_missing() {
        return Some(node_line(&node));
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| child.has_error())
        .find_map(first_error_line)
}

/// Get text for a tree-sitter node
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}

/// Get the line number for a tree-sitter node (1-indexed)
pub fn node_line(node: &Node) -> usize {
    node.start_position().row + 1
}

/// Get the column number for a tree-sitter node (1-indexed)
pub fn node_column(node: &Node) -> usize {
    node.start_position().column + 1
}
