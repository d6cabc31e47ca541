//! `<Field name="x" type="y" />` → `<input {...register("x")} type="y" />`

use super::plan::RewritePlan;
use crate::analyzers::detector::element_config_keys;
use crate::analyzers::parser::node_line;
use crate::analyzers::syntax::JsxElement;
use crate::api::{FIELD_COMPONENT, NATIVE_INPUT_TAG, REGISTER_FN};
use crate::classifier::classify_field;
use crate::core::{Complexity, PatternKind};

const NAME_ATTRIBUTE: &str = "name";
const TYPE_ATTRIBUTE: &str = "type";
const DEFAULT_TYPE: &str = "type=\"text\"";

/// What happened to one `<Field>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRewrite {
    /// Rewritten; lists attributes the native input does not carry over.
    Rewritten { dropped: Vec<String> },
    /// Left as is, with the warning to report.
    Skipped(String),
}

pub fn rewrite_field(element: &JsxElement, source: &str, plan: &mut RewritePlan) -> FieldRewrite {
    let line = node_line(&element.node);

    let keys = element_config_keys(element, PatternKind::FieldElement);
    let classification = classify_field(&keys);
    if classification.complexity != Complexity::Simple {
        return FieldRewrite::Skipped(format!(
            "<{FIELD_COMPONENT}> at line {line} left unchanged: {}",
            classification.reason.unwrap_or_default()
        ));
    }

    let Some(name_attribute) = element.attribute(NAME_ATTRIBUTE) else {
        return FieldRewrite::Skipped(format!(
            "<{FIELD_COMPONENT}> at line {line} left unchanged: it has no `name` attribute"
        ));
    };
    let Some(name) = name_attribute.value_expression(source) else {
        return FieldRewrite::Skipped(format!(
            "<{FIELD_COMPONENT}> at line {line} left unchanged: it has no `name` attribute"
        ));
    };
    // JSX strings decode `&...;` entities and take `\` literally; JS strings do not
    if name_attribute.is_string_literal() && name.contains(['&', '\\']) {
        return FieldRewrite::Skipped(format!(
            "<{FIELD_COMPONENT}> at line {line} left unchanged: `name` {name} reads differently as a JS string"
        ));
    }

    let type_attribute = element
        .attribute(TYPE_ATTRIBUTE)
        .map(|attr| attr.source_text(source))
        .unwrap_or(DEFAULT_TYPE);

    let dropped = element
        .attributes
        .iter()
        .filter(|attr| attr.name != NAME_ATTRIBUTE && attr.name != TYPE_ATTRIBUTE)
        .map(|attr| attr.name.clone())
        .collect();

    plan.replace(
        &element.node,
        format!("<{NATIVE_INPUT_TAG} {{...{REGISTER_FN}({name})}} {type_attribute} />"),
        format!("converted <{FIELD_COMPONENT} name={name}> to <{NATIVE_INPUT_TAG}>"),
    );

    FieldRewrite::Rewritten { dropped }
}
