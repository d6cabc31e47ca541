// Test utility module for formshift integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Signup form using only the hook and a plain field, with a schema.
pub const SIGNUP_FORM: &str = r#"import { useFormik, Field } from 'formik';
import * as yup from 'yup';

const schema = yup.object({ email: yup.string().required() });

export function Signup() {
  const { register, handleSubmit } = useFormik({
    initialValues: { email: '' },
    onSubmit: (values) => save(values),
    validationSchema: schema,
  });
  return (
    <form onSubmit={handleSubmit}>
      <Field name="email" type="email" />
    </form>
  );
}
"#;

/// Same form with a custom validate function.
pub const SIGNUP_FORM_WITH_VALIDATE: &str = r#"import { useFormik, Field } from 'formik';
import * as yup from 'yup';

const schema = yup.object({ email: yup.string().required() });

export function Signup() {
  const { register, handleSubmit } = useFormik({
    initialValues: { email: '' },
    onSubmit: (values) => save(values),
    validationSchema: schema,
    validate: (values) => ({}),
  });
  return (
    <form onSubmit={handleSubmit}>
      <Field name="email" type="email" />
    </form>
  );
}
"#;

// Helper to create a project tree in a temporary directory
pub fn create_project(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for (relative, content) in files {
        write_file(temp_dir.path(), relative, content);
    }
    temp_dir
}

pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(&path, content).expect("Failed to write test file");
    path
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("Failed to read test file")
}
