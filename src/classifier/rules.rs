//! Classification decision table.
//!
//! Adding a safe or unsafe key is a one-line change to one of these slices.

use crate::api::keys::{
    ENABLE_REINITIALIZE, INITIAL_VALUES, ON_SUBMIT, VALIDATE, VALIDATE_ON_BLUR,
    VALIDATE_ON_CHANGE, VALIDATION_SCHEMA,
};

/// Hook configuration keys with a direct `useForm` equivalent.
pub const HOOK_SAFE_KEYS: &[&str] = &[INITIAL_VALUES, ON_SUBMIT, VALIDATION_SCHEMA];

/// Upper bound on the number of keys in a safe hook configuration.
pub const HOOK_MAX_SAFE_KEYS: usize = 3;

/// Hook keys that make a configuration complex, with the reason reported.
/// Checked in order; the first hit wins.
pub const HOOK_DENIED_KEYS: &[(&str, &str)] = &[
    (
        VALIDATE,
        "custom validate function: convert it to a validation schema first",
    ),
    (
        ENABLE_REINITIALIZE,
        "enableReinitialize: react-hook-form re-initialises through reset(), a different pattern downstream",
    ),
    (
        VALIDATE_ON_CHANGE,
        "validateOnChange: adjust the useForm `mode` option downstream",
    ),
    (
        VALIDATE_ON_BLUR,
        "validateOnBlur: adjust the useForm `mode` option downstream",
    ),
];

pub const NON_STANDARD_CONFIG: &str = "non-standard configuration";
pub const SCHEMA_METHOD_REASON: &str =
    "validationSchema is written as a method and cannot be passed to yupResolver";
pub const COMPLEX_CONFIG: &str = "complex configuration needs review";

/// Render-prop style attributes on `<Formik>`.
pub const WRAPPER_RENDER_ATTRIBUTES: &[&str] = &["render", "children", "component"];
pub const WRAPPER_RENDER_REASON: &str = "complex render pattern";

/// Validation attributes on `<Formik>` with no direct equivalent.
pub const WRAPPER_DENIED_ATTRIBUTES: &[&str] = &[VALIDATE, VALIDATE_ON_CHANGE, VALIDATE_ON_BLUR];
pub const WRAPPER_VALIDATION_REASON: &str = "custom validation settings on <Formik>";

/// Custom render attributes on field-family elements. `as` swaps the
/// rendered tag, which the native input rewrite cannot keep.
pub const FIELD_RENDER_ATTRIBUTES: &[&str] = &["render", "component", "children", "as"];

/// Pseudo attribute standing for `{...spread}` on a JSX element.
pub const SPREAD_KEY: &str = "...";
pub const SPREAD_REASON: &str = "spread attributes cannot be inspected";

pub const ERROR_MESSAGE_REASON: &str = "render the message from formState.errors instead";
pub const FIELD_ACCESSOR_REASON: &str = "replace with useController or register";
