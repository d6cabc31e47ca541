//! Import extraction for the target API.
//!
//! Finds `import ... from 'formik'` statements and `require('formik')` calls.

use crate::analyzers::parser::{node_line, node_text};
use crate::analyzers::syntax::{bare_callee, named_children, unquote};
use crate::api::TARGET_MODULE;
use crate::core::ast::SourceTree;
use tree_sitter::Node;

/// One `{ name as alias }` entry of a named import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedName {
    pub name: String,
    pub alias: Option<String>,
}

impl ImportedName {
    /// Name the binding is visible under in the importing file.
    pub fn local(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    /// Specifier as it would be written back out.
    pub fn to_source(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{} as {}", self.name, alias),
            None => self.name.clone(),
        }
    }
}

/// A parsed `import` statement whose source is the target module.
#[derive(Debug, Clone)]
pub struct TargetImport<'t> {
    pub node: Node<'t>,
    pub line: usize,
    pub default_import: Option<String>,
    pub namespace_import: Option<String>,
    pub named: Vec<ImportedName>,
    /// `import type { ... }`
    pub type_only: bool,
    pub quote: char,
    pub has_semicolon: bool,
}

/// Every ES import of the target module, in document order.
pub fn find_target_imports(tree: &SourceTree) -> Vec<TargetImport<'_>> {
    named_children(&tree.root())
        .into_iter()
        .filter(|node| node.kind() == "import_statement")
        .filter_map(|node| read_target_import(node, &tree.source))
        .collect()
}

/// Whether the file pulls in the target module through `import` or
/// `require`.
pub fn imports_target_api(tree: &SourceTree) -> bool {
    !find_target_imports(tree).is_empty() || has_target_require(&tree.root(), &tree.source)
}

fn read_target_import<'t>(node: Node<'t>, source: &str) -> Option<TargetImport<'t>> {
    let source_node = node.child_by_field_name("source")?;
    let source_text = node_text(&source_node, source);
    if unquote(source_text) != TARGET_MODULE {
        return None;
    }

    let mut import = TargetImport {
        node,
        line: node_line(&node),
        default_import: None,
        namespace_import: None,
        named: Vec::new(),
        type_only: false,
        quote: source_text.chars().next().unwrap_or('\''),
        has_semicolon: node_text(&node, source).trim_end().ends_with(';'),
    };

    let mut cursor = node.walk();
    let children: Vec<Node<'t>> = node.children(&mut cursor).collect();
    for child in children {
        match child.kind() {
            "type" => import.type_only = true,
            "import_clause" => read_import_clause(&child, source, &mut import),
            _ => {}
        }
    }

    Some(import)
}

fn read_import_clause(clause: &Node, source: &str, import: &mut TargetImport) {
    for part in named_children(clause) {
        match part.kind() {
            "identifier" => import.default_import = Some(node_text(&part, source).to_string()),
            "namespace_import" => {
                import.namespace_import = named_children(&part)
                    .first()
                    .map(|id| node_text(id, source).to_string());
            }
            "named_imports" => {
                for spec in named_children(&part) {
                    if spec.kind() != "import_specifier" {
                        continue;
                    }
                    let Some(name) = spec.child_by_field_name("name") else {
                        continue;
                    };
                    import.named.push(ImportedName {
                        name: node_text(&name, source).to_string(),
                        alias: spec
                            .child_by_field_name("alias")
                            .map(|a| node_text(&a, source).to_string()),
                    });
                }
            }
            _ => {}
        }
    }
}

fn has_target_require(node: &Node, source: &str) -> bool {
    if node.kind() == "call_expression" && bare_callee(node, source) == Some("require") {
        let is_target = node
            .child_by_field_name("arguments")
            .map(|args| named_children(&args))
            .and_then(|args| args.first().copied())
            .is_some_and(|arg| {
                arg.kind() == "string" && unquote(node_text(&arg, source)) == TARGET_MODULE
            });
        if is_target {
            return true;
        }
    }

    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children.iter().any(|child| has_target_require(child, source))
}
