mod common;

use common::{SIGNUP_FORM, SIGNUP_FORM_WITH_VALIDATE};
use formshift::transform::convert_source;
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::path::Path;

#[test]
fn simple_signup_form_converts_completely() {
    let result = convert_source(SIGNUP_FORM, Path::new("Signup.jsx"));

    assert!(result.success, "{:?}", result.error);
    assert!(result.error.is_none());
    assert_eq!(
        result.converted_code.as_deref().unwrap(),
        indoc! {r#"
            import { useForm } from 'react-hook-form';
            import * as yup from 'yup';

            const schema = yup.object({ email: yup.string().required() });

            export function Signup() {
              const { register, handleSubmit } = useForm({
                defaultValues: { email: '' },
                onSubmit: (values) => save(values),
                resolver: yupResolver(schema),
              });
              return (
                <form onSubmit={handleSubmit}>
                  <input {...register("email")} type="email" />
                </form>
              );
            }
        "#}
    );
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("yupResolver"));
    assert!(result.warnings[0].contains("@hookform/resolvers/yup"));
    assert_eq!(result.changes.len(), 5);
}

#[test]
fn custom_validate_blocks_the_whole_file() {
    let result = convert_source(SIGNUP_FORM_WITH_VALIDATE, Path::new("Signup.jsx"));

    assert!(!result.success);
    assert!(result.converted_code.is_none());
    let error = result.error.unwrap();
    assert!(error.contains("line 7"), "{error}");
    assert!(error.contains("file left unchanged"));
    assert!(result.changes.is_empty());
}

#[test]
fn one_unsafe_hook_among_many_blocks_everything() {
    let source = indoc! {r#"
        import { useFormik } from 'formik';
        const a = useFormik({ initialValues: {}, onSubmit: save });
        const b = useFormik({ initialValues: {}, enableReinitialize: true });
        const c = useFormik(config);
    "#};
    let result = convert_source(source, Path::new("forms.js"));

    assert!(!result.success);
    let error = result.error.unwrap();
    assert!(error.starts_with("2 useFormik call(s)"), "{error}");
    assert!(error.contains("line 3"));
}

#[test]
fn converted_output_has_nothing_left_to_convert() {
    let first = convert_source(SIGNUP_FORM, Path::new("Signup.jsx"));
    let converted = first.converted_code.unwrap();

    let second = convert_source(&converted, Path::new("Signup.jsx"));
    assert!(!second.success);
    assert_eq!(second.error.as_deref(), Some("no formik usage found"));
}

#[test]
fn nameless_field_is_kept_and_reported() {
    let source = indoc! {r#"
        import { useFormik, Field } from 'formik';

        export function Settings() {
          const { register } = useFormik({ initialValues: {}, onSubmit: save });
          return <Field type="text" />;
        }
    "#};
    let result = convert_source(source, Path::new("Settings.jsx"));

    assert!(result.success, "{:?}", result.error);
    let code = result.converted_code.unwrap();
    assert!(code.contains("useForm({ defaultValues: {}, onSubmit: save })"));
    assert!(code.contains(r#"<Field type="text" />"#));
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("line 5") && w.contains("no `name`")));
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("`Field` is still imported")));
}

#[test]
fn custom_render_field_does_not_block_hook_conversion() {
    let source = indoc! {r#"
        import { useFormik, Field } from 'formik';

        export function Profile() {
          const { register } = useFormik({ initialValues, onSubmit });
          return (
            <>
              <Field name="bio" component={RichText} />
              <Field name="age" type="number" placeholder="Age" />
            </>
          );
        }
    "#};
    let result = convert_source(source, Path::new("Profile.tsx"));

    assert!(result.success, "{:?}", result.error);
    let code = result.converted_code.unwrap();
    assert!(code.contains("useForm({ defaultValues: initialValues, onSubmit })"));
    assert!(code.contains(r#"<Field name="bio" component={RichText} />"#));
    assert!(code.contains(r#"<input {...register("age")} type="number" />"#));
    assert!(code.starts_with("import { useForm, Field } from 'react-hook-form';"));
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("placeholder")));
}

#[test]
fn quote_style_and_semicolons_are_preserved() {
    let source = "import { useFormik } from \"formik\"\nconst f = useFormik({ onSubmit })\n";
    let result = convert_source(source, Path::new("a.js"));

    assert_eq!(
        result.converted_code.as_deref(),
        Some("import { useForm } from \"react-hook-form\"\nconst f = useForm({ onSubmit })\n")
    );
}

#[test]
fn field_only_file_warns_about_register() {
    let source = indoc! {r#"
        import { Field } from 'formik';
        export const Email = () => <Field name="email" />;
    "#};
    let result = convert_source(source, Path::new("Email.jsx"));

    assert!(result.success);
    assert_eq!(
        result.converted_code.as_deref(),
        Some(indoc! {r#"
            import { useForm } from 'react-hook-form';
            export const Email = () => <input {...register("email")} type="text" />;
        "#})
    );
    assert!(result.warnings.iter().any(|w| w.contains("`register` is not in scope")));
}

#[test]
fn look_alike_usages_without_formik_import_are_refused() {
    let other_library = indoc! {r#"
        import { Field } from 'react-final-form';
        export const A = () => <Field name="email" />;
    "#};
    let local_hook = indoc! {r#"
        import { useFormik } from './my-forms';
        const f = useFormik({ onSubmit: go });
    "#};

    for source in [other_library, local_hook] {
        let result = convert_source(source, Path::new("A.jsx"));
        assert!(!result.success, "{source}");
        assert!(result.converted_code.is_none());
        assert_eq!(
            result.error.as_deref(),
            Some("file does not import formik; file left unchanged")
        );
    }
}

#[test]
fn schema_method_is_refused_with_the_analysis_reason() {
    let source = indoc! {r#"
        import { useFormik } from 'formik';
        const f = useFormik({ initialValues: {}, validationSchema() { return schema; } });
    "#};
    let result = convert_source(source, Path::new("a.js"));

    assert!(!result.success);
    assert!(result
        .error
        .unwrap()
        .contains("validationSchema is written as a method"));
}
