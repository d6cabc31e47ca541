//! `import { useFormik, Field } from 'formik'` → `import { useForm } from 'react-hook-form'`

use super::plan::RewritePlan;
use crate::analyzers::imports::{ImportedName, TargetImport};
use crate::api::{
    FIELD_COMPONENT, REPLACEMENT_HOOK, REPLACEMENT_MODULE, TARGET_HOOK, TARGET_MODULE,
};

/// Which target names the rest of the rewrite has made obsolete.
#[derive(Debug, Clone, Copy)]
pub struct ImportRewrite {
    /// Every `<Field>` in the file was rewritten.
    pub drop_field: bool,
}

impl ImportRewrite {
    fn drops(&self, name: &ImportedName) -> bool {
        name.alias.is_none()
            && (name.name == TARGET_HOOK || (self.drop_field && name.name == FIELD_COMPONENT))
    }
}

/// Plan the rewrite of every target import. Returns warnings.
pub fn rewrite_imports(
    imports: &[TargetImport],
    options: ImportRewrite,
    plan: &mut RewritePlan,
) -> Vec<String> {
    let mut warnings = Vec::new();
    let mut hook_imported = false;

    for import in imports {
        if import.type_only {
            warnings.push(format!(
                "type-only import from '{TARGET_MODULE}' at line {} left unchanged; replace its types by hand",
                import.line
            ));
            continue;
        }
        if let Some(namespace) = &import.namespace_import {
            warnings.push(format!(
                "namespace import `* as {namespace}` from '{TARGET_MODULE}' at line {} left unchanged; migrate its uses by hand",
                import.line
            ));
            continue;
        }

        let kept: Vec<&ImportedName> = import
            .named
            .iter()
            .filter(|name| !options.drops(name))
            .collect();

        for name in &kept {
            warnings.push(format!(
                "`{}` is still imported at line {} but '{REPLACEMENT_MODULE}' has no such export; migrate it by hand",
                name.local(),
                import.line
            ));
        }
        if let Some(default) = &import.default_import {
            warnings.push(format!(
                "default import `{default}` at line {} has no '{REPLACEMENT_MODULE}' equivalent; migrate it by hand",
                import.line
            ));
        }

        let mut names: Vec<String> = Vec::new();
        if !hook_imported {
            names.push(REPLACEMENT_HOOK.to_string());
            hook_imported = true;
        }
        names.extend(kept.iter().map(|name| name.to_source()));

        let text = render_import(import, &names);
        let description = if text.is_empty() {
            format!("removed '{TARGET_MODULE}' import")
        } else {
            format!("redirected '{TARGET_MODULE}' import to '{REPLACEMENT_MODULE}'")
        };
        plan.replace(&import.node, text, description);
    }

    if !hook_imported {
        warnings.push(format!(
            "no '{TARGET_MODULE}' import could be rewritten; add `import {{ {REPLACEMENT_HOOK} }} from '{REPLACEMENT_MODULE}'` by hand"
        ));
    }

    warnings
}

fn render_import(import: &TargetImport, names: &[String]) -> String {
    let bindings = match (&import.default_import, names.is_empty()) {
        (None, true) => return String::new(),
        (Some(default), true) => default.clone(),
        (None, false) => format!("{{ {} }}", names.join(", ")),
        (Some(default), false) => format!("{default}, {{ {} }}", names.join(", ")),
    };
    let quote = import.quote;
    let semicolon = if import.has_semicolon { ";" } else { "" };

    format!("import {bindings} from {quote}{REPLACEMENT_MODULE}{quote}{semicolon}")
}
