//! Read-only views over the tree-sitter nodes the detector and the rewriter
//! care about: call expressions with an object configuration argument, and
//! JSX elements with their attributes and children.

use crate::analyzers::parser::node_text;
use tree_sitter::Node;

/// Named, non-comment children of a node.
pub fn named_children<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    let children = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect();
    children
}

/// Strip one layer of JS string quotes.
pub fn unquote(text: &str) -> &str {
    text.trim_matches(|c| c == '"' || c == '\'' || c == '`')
}

/// Callee name of a call expression when the callee is a bare identifier.
pub fn bare_callee<'s>(call: &Node, source: &'s str) -> Option<&'s str> {
    let callee = call.child_by_field_name("function")?;
    (callee.kind() == "identifier").then(|| node_text(&callee, source))
}

/// How one entry of an object configuration is written.
#[derive(Debug, Clone, Copy)]
pub enum EntryShape<'t> {
    /// `key: value`
    Pair { key: Node<'t>, value: Node<'t> },
    /// `key`
    Shorthand,
    /// `key() { ... }`
    Method { name: Node<'t> },
}

#[derive(Debug, Clone)]
pub struct ConfigEntry<'t> {
    pub key: String,
    pub node: Node<'t>,
    pub shape: EntryShape<'t>,
}

/// Configuration argument of a hook call.
#[derive(Debug, Clone)]
pub enum CallConfig<'t> {
    /// A literal object whose every key is statically known.
    Object {
        node: Node<'t>,
        entries: Vec<ConfigEntry<'t>>,
    },
    /// No argument, a non-object argument, extra arguments, a spread or a
    /// computed key.
    NonStandard,
}

impl<'t> CallConfig<'t> {
    /// Configuration keys, or `None` when they cannot be known statically.
    pub fn keys(&self) -> Option<Vec<&str>> {
        match self {
            Self::Object { entries, .. } => Some(entries.iter().map(|e| e.key.as_str()).collect()),
            Self::NonStandard => None,
        }
    }

    /// Keys written as `key() { ... }`.
    pub fn method_keys(&self) -> Vec<&str> {
        match self {
            Self::Object { entries, .. } => entries
                .iter()
                .filter(|e| matches!(e.shape, EntryShape::Method { .. }))
                .map(|e| e.key.as_str())
                .collect(),
            Self::NonStandard => Vec::new(),
        }
    }
}

/// A call expression with its callee and parsed configuration.
#[derive(Debug, Clone)]
pub struct CallSite<'t> {
    pub node: Node<'t>,
    pub callee: Node<'t>,
    pub config: CallConfig<'t>,
}

impl<'t> CallSite<'t> {
    pub fn from_node(call: Node<'t>, source: &str) -> Option<Self> {
        let callee = call.child_by_field_name("function")?;
        let config = read_call_config(&call, source);
        Some(Self {
            node: call,
            callee,
            config,
        })
    }
}

fn read_call_config<'t>(call: &Node<'t>, source: &str) -> CallConfig<'t> {
    let Some(arguments) = call.child_by_field_name("arguments") else {
        return CallConfig::NonStandard;
    };
    let args = named_children(&arguments);
    match args.as_slice() {
        [object] if object.kind() == "object" => read_object(*object, source),
        _ => CallConfig::NonStandard,
    }
}

fn read_object<'t>(object: Node<'t>, source: &str) -> CallConfig<'t> {
    let mut entries = Vec::new();

    for child in named_children(&object) {
        let entry = match child.kind() {
            "pair" => {
                let (Some(key), Some(value)) = (
                    child.child_by_field_name("key"),
                    child.child_by_field_name("value"),
                ) else {
                    return CallConfig::NonStandard;
                };
                let Some(name) = static_key(&key, source) else {
                    return CallConfig::NonStandard;
                };
                ConfigEntry {
                    key: name,
                    node: child,
                    shape: EntryShape::Pair { key, value },
                }
            }
            "shorthand_property_identifier" => ConfigEntry {
                key: node_text(&child, source).to_string(),
                node: child,
                shape: EntryShape::Shorthand,
            },
            "method_definition" => {
                let Some(name_node) = child.child_by_field_name("name") else {
                    return CallConfig::NonStandard;
                };
                let Some(name) = static_key(&name_node, source) else {
                    return CallConfig::NonStandard;
                };
                ConfigEntry {
                    key: name,
                    node: child,
                    shape: EntryShape::Method { name: name_node },
                }
            }
            _ => return CallConfig::NonStandard,
        };
        entries.push(entry);
    }

    CallConfig::Object {
        node: object,
        entries,
    }
}

fn static_key(key: &Node, source: &str) -> Option<String> {
    match key.kind() {
        "property_identifier" | "number" => Some(node_text(key, source).to_string()),
        "string" => Some(unquote(node_text(key, source)).to_string()),
        _ => None,
    }
}

/// One attribute on a JSX opening tag.
#[derive(Debug, Clone)]
pub struct JsxAttribute<'t> {
    pub name: String,
    pub node: Node<'t>,
    pub value: Option<Node<'t>>,
}

impl JsxAttribute<'_> {
    /// The attribute value as a JS expression: string literals keep their
    /// quotes, `{expr}` containers are unwrapped. `None` for bare
    /// attributes such as `disabled`.
    pub fn value_expression<'s>(&self, source: &'s str) -> Option<&'s str> {
        let value = self.value?;
        match value.kind() {
            "jsx_expression" => named_children(&value)
                .first()
                .map(|inner| node_text(inner, source)),
            _ => Some(node_text(&value, source)),
        }
    }

    /// True for `attr="..."`, as opposed to `attr={...}` or a bare attribute.
    pub fn is_string_literal(&self) -> bool {
        self.value.is_some_and(|v| v.kind() == "string")
    }

    /// The attribute as JSX source, e.g. `type="email"` or `type={kind}`.
    pub fn source_text<'s>(&self, source: &'s str) -> &'s str {
        node_text(&self.node, source)
    }
}

/// A JSX element, self-closing or not.
#[derive(Debug, Clone)]
pub struct JsxElement<'t> {
    pub node: Node<'t>,
    pub tag: String,
    pub attributes: Vec<JsxAttribute<'t>>,
    /// `{...props}` on the opening tag
    pub has_spread_attribute: bool,
    /// `{(props) => ...}` as a child
    pub has_function_child: bool,
    /// Any other non-whitespace child
    pub has_content_children: bool,
}

impl<'t> JsxElement<'t> {
    pub fn from_node(node: Node<'t>, source: &str) -> Option<Self> {
        let (opening, children): (Node<'t>, Vec<Node<'t>>) = match node.kind() {
            "jsx_self_closing_element" => (node, Vec::new()),
            "jsx_element" => {
                let all = named_children(&node);
                let opening = all
                    .iter()
                    .copied()
                    .find(|c| c.kind() == "jsx_opening_element")?;
                let children = all
                    .into_iter()
                    .filter(|c| !matches!(c.kind(), "jsx_opening_element" | "jsx_closing_element"))
                    .collect();
                (opening, children)
            }
            _ => return None,
        };

        let tag = opening
            .child_by_field_name("name")
            .map(|n| node_text(&n, source).to_string())?;

        let mut attributes = Vec::new();
        let mut has_spread_attribute = false;
        for attr in named_children(&opening) {
            match attr.kind() {
                "jsx_attribute" => {
                    let parts = named_children(&attr);
                    let Some(name) = parts.first() else { continue };
                    attributes.push(JsxAttribute {
                        name: node_text(name, source).to_string(),
                        node: attr,
                        value: parts.get(1).copied(),
                    });
                }
                "jsx_expression" => has_spread_attribute = true,
                _ => {}
            }
        }

        let mut has_function_child = false;
        let mut has_content_children = false;
        for child in &children {
            match child.kind() {
                "jsx_text" | "html_character_reference" => {
                    if !node_text(child, source).trim().is_empty() {
                        has_content_children = true;
                    }
                }
                "jsx_expression" => match named_children(child).first().map(|n| n.kind()) {
                    Some("arrow_function" | "function_expression" | "function") => {
                        has_function_child = true
                    }
                    Some(_) => has_content_children = true,
                    None => {}
                },
                _ => has_content_children = true,
            }
        }

        Some(Self {
            node,
            tag,
            attributes,
            has_spread_attribute,
            has_function_child,
            has_content_children,
        })
    }

    pub fn attribute(&self, name: &str) -> Option<&JsxAttribute<'t>> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn attribute_names(&self) -> Vec<&str> {
        self.attributes.iter().map(|a| a.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::parser::parse_source;
    use crate::core::ast::SourceTree;
    use std::path::Path;

    fn parse(source: &str) -> SourceTree {
        parse_source(source, Path::new("test.tsx")).unwrap()
    }

    fn find<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
        if node.kind() == kind {
            return Some(node);
        }
        let mut cursor = node.walk();
        let children: Vec<Node<'t>> = node.children(&mut cursor).collect();
        children.into_iter().find_map(|c| find(c, kind))
    }

    #[test]
    fn reads_object_config_keys() {
        let tree = parse("useFormik({ initialValues: {}, onSubmit, 'validationSchema': s, validate() {} });");
        let call = find(tree.root(), "call_expression").unwrap();
        let site = CallSite::from_node(call, &tree.source).unwrap();
        assert_eq!(
            site.config.keys().unwrap(),
            vec!["initialValues", "onSubmit", "validationSchema", "validate"]
        );
    }

    #[test]
    fn spread_and_computed_keys_are_non_standard() {
        for src in [
            "useFormik({ ...base, onSubmit });",
            "useFormik({ [key]: 1 });",
            "useFormik(config);",
            "useFormik();",
        ] {
            let tree = parse(src);
            let call = find(tree.root(), "call_expression").unwrap();
            let site = CallSite::from_node(call, &tree.source).unwrap();
            assert!(site.config.keys().is_none(), "{src}");
        }
    }

    #[test]
    fn bare_callee_ignores_member_calls() {
        let tree = parse("formik.useFormik({});");
        let call = find(tree.root(), "call_expression").unwrap();
        assert_eq!(bare_callee(&call, &tree.source), None);
    }

    #[test]
    fn reads_jsx_attributes_and_children() {
        let tree = parse("const a = <Field name=\"email\" type={kind} disabled>{(p) => <input {...p} />}</Field>;");
        let node = find(tree.root(), "jsx_element").unwrap();
        let el = JsxElement::from_node(node, &tree.source).unwrap();

        assert_eq!(el.tag, "Field");
        assert_eq!(el.attribute_names(), vec!["name", "type", "disabled"]);
        assert_eq!(
            el.attribute("name").unwrap().value_expression(&tree.source),
            Some("\"email\"")
        );
        assert_eq!(
            el.attribute("type").unwrap().value_expression(&tree.source),
            Some("kind")
        );
        assert!(el.attribute("disabled").unwrap().value.is_none());
        assert!(el.has_function_child);
        assert!(!el.has_content_children);
    }

    #[test]
    fn whitespace_children_are_not_content() {
        let tree = parse("const a = <Field name=\"x\">\n  </Field>;");
        let node = find(tree.root(), "jsx_element").unwrap();
        let el = JsxElement::from_node(node, &tree.source).unwrap();
        assert!(!el.has_content_children);
        assert!(!el.has_function_child);
    }

    #[test]
    fn spread_attribute_is_flagged() {
        let tree = parse("const a = <Field {...rest} name=\"x\" />;");
        let node = find(tree.root(), "jsx_self_closing_element").unwrap();
        let el = JsxElement::from_node(node, &tree.source).unwrap();
        assert!(el.has_spread_attribute);
        assert_eq!(el.attribute_names(), vec!["name"]);
    }
}
