mod common;

use common::{create_project, SIGNUP_FORM, SIGNUP_FORM_WITH_VALIDATE};
use formshift::aggregate::aggregate;
use formshift::analyzers::{analyze_files, analyze_source};
use formshift::config::DiscoveryConfig;
use formshift::io::walker::find_source_files;
use formshift::{Complexity, EffortLevel, FileStatus, PatternKind};
use indicatif::ProgressBar;
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::path::Path;

fn summary(source: &str, file: &str) -> Vec<(PatternKind, Complexity)> {
    analyze_source(source, Path::new(file))
        .patterns
        .iter()
        .map(|p| (p.kind(), p.complexity()))
        .collect()
}

#[test]
fn simple_signup_form_is_fully_convertible() {
    let analysis = analyze_source(SIGNUP_FORM, Path::new("Signup.jsx"));

    assert_eq!(analysis.status, FileStatus::UsesTargetApi);
    assert!(analysis.has_formik);
    assert_eq!(
        summary(SIGNUP_FORM, "Signup.jsx"),
        vec![
            (PatternKind::HookInvocation, Complexity::Simple),
            (PatternKind::FieldElement, Complexity::Simple),
        ]
    );
    assert!(analysis.patterns.iter().all(|p| p.is_convertible()));
    assert!(analysis.patterns.iter().all(|p| p.reason().is_none()));
    assert_eq!(analysis.effort, EffortLevel::Low);
    assert!(analysis.is_conversion_candidate());
}

#[test]
fn custom_validate_makes_the_hook_complex() {
    let analysis = analyze_source(SIGNUP_FORM_WITH_VALIDATE, Path::new("Signup.jsx"));

    let hook = &analysis.patterns[0];
    assert_eq!(hook.kind(), PatternKind::HookInvocation);
    assert_eq!(hook.complexity(), Complexity::Complex);
    assert!(!hook.is_convertible());
    assert!(hook.reason().unwrap().contains("validate"));
    assert_eq!(hook.line(), 7);

    // The field on its own is still simple
    assert_eq!(analysis.patterns[1].complexity(), Complexity::Simple);
    assert_eq!(analysis.effort, EffortLevel::High);
}

#[test]
fn wrapper_and_field_family_patterns() {
    let source = indoc! {r#"
        import { Formik, Field, FieldArray, ErrorMessage, useField } from 'formik';

        function Email() {
          const [field] = useField('email');
          return <input {...field} />;
        }

        export const Profile = () => (
          <Formik initialValues={{ tags: [] }} onSubmit={save}>
            {({ values }) => (
              <form>
                <Field name="nickname" component={FancyInput} />
                <FieldArray name="tags" />
                <ErrorMessage name="nickname" />
              </form>
            )}
          </Formik>
        );
    "#};

    assert_eq!(
        summary(source, "Profile.jsx"),
        vec![
            (PatternKind::FieldAccessorHook, Complexity::Medium),
            (PatternKind::WrapperComponent, Complexity::Medium),
            (PatternKind::FieldElement, Complexity::Medium),
            (PatternKind::FieldArrayElement, Complexity::Simple),
            (PatternKind::ErrorMessageElement, Complexity::Medium),
        ]
    );
}

#[test]
fn wrapper_with_validation_flags_is_complex() {
    let source = indoc! {r#"
        import { Formik } from 'formik';
        const a = <Formik initialValues={{}} onSubmit={save} validateOnBlur={false} />;
    "#};
    assert_eq!(
        summary(source, "A.jsx"),
        vec![(PatternKind::WrapperComponent, Complexity::Complex)]
    );
}

#[test]
fn non_literal_hook_config_is_complex() {
    let source = indoc! {r#"
        import { useFormik } from 'formik';
        const form = useFormik(buildConfig());
        const other = useFormik({ ...defaults, onSubmit });
    "#};
    assert_eq!(
        summary(source, "a.ts"),
        vec![
            (PatternKind::HookInvocation, Complexity::Complex),
            (PatternKind::HookInvocation, Complexity::Complex),
        ]
    );
}

#[test]
fn typescript_files_are_analyzed() {
    let source = indoc! {r#"
        import type { FormikProps } from 'formik';
        import { useFormik } from 'formik';

        interface Values { email: string }

        export function useLogin(onSubmit: (v: Values) => void) {
          return useFormik<Values>({ initialValues: { email: '' }, onSubmit });
        }
    "#};
    let analysis = analyze_source(source, Path::new("useLogin.ts"));

    assert!(analysis.has_formik);
    assert_eq!(analysis.patterns.len(), 1);
    assert!(analysis.patterns[0].is_convertible());
}

#[test]
fn look_alike_field_from_another_library_is_not_a_candidate() {
    let source = indoc! {r#"
        import { Field } from 'react-final-form';
        export const A = () => <Field name="email" />;
    "#};
    let analysis = analyze_source(source, Path::new("A.jsx"));

    assert!(!analysis.has_formik);
    assert_eq!(analysis.patterns.len(), 1);
    assert!(!analysis.is_conversion_candidate());
}

#[test]
fn schema_method_is_not_counted_as_convertible() {
    let source = indoc! {r#"
        import { useFormik } from 'formik';
        const f = useFormik({ initialValues: {}, validationSchema() { return schema; } });
    "#};
    let analysis = analyze_source(source, Path::new("a.js"));

    assert_eq!(
        summary(source, "a.js"),
        vec![(PatternKind::HookInvocation, Complexity::Medium)]
    );
    assert_eq!(analysis.convertible_count(), 0);
    assert!(analysis.patterns[0]
        .reason()
        .unwrap()
        .contains("cannot be passed to yupResolver"));
    assert!(!analysis.is_conversion_candidate());
}

#[test]
fn unparsable_file_is_not_reported_as_clean() {
    let clean = analyze_source("export const x = 1;\n", Path::new("a.js"));
    let broken = analyze_source("export const = ;\n", Path::new("b.js"));

    assert_eq!(clean.status, FileStatus::Clean);
    assert!(matches!(broken.status, FileStatus::AnalysisFailed { .. }));
    assert!(!broken.uses_target_api());
    assert!(!broken.is_conversion_candidate());
}

#[test]
fn project_analysis_aggregates_every_file() {
    let project = create_project(&[
        ("src/Signup.jsx", SIGNUP_FORM),
        ("src/Strict.jsx", SIGNUP_FORM_WITH_VALIDATE),
        ("src/util.js", "export const add = (a, b) => a + b;\n"),
        ("src/broken.js", "function (\n"),
        ("node_modules/formik/index.js", "export const useFormik = () => {};\n"),
    ]);

    let files = find_source_files(project.path(), DiscoveryConfig::default()).unwrap();
    assert_eq!(files.len(), 4);

    let analyses = analyze_files(&files, &ProgressBar::hidden());
    let results = aggregate(project.path().to_path_buf(), analyses);

    assert_eq!(results.total_files, 4);
    assert_eq!(results.files_using_target_api, 2);
    assert_eq!(results.files_failed, 1);
    assert_eq!(results.count_for_kind(PatternKind::HookInvocation), 2);
    assert_eq!(results.count_for_kind(PatternKind::FieldElement), 2);
    assert_eq!(results.count_for_complexity(Complexity::Simple), 3);
    assert_eq!(results.count_for_complexity(Complexity::Complex), 1);
    assert_eq!(results.convertible, 3);
    assert_eq!(results.needs_review, 1);
    // 3 * 0.25 + 1 * 1.5
    assert_eq!(results.estimated_manual_hours, 2.3);
}
