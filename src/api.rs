//! Names of the API being migrated away from and the one being migrated to.

/// Module specifier of the target API.
pub const TARGET_MODULE: &str = "formik";
/// Module specifier of the replacement API.
pub const REPLACEMENT_MODULE: &str = "react-hook-form";

pub const TARGET_HOOK: &str = "useFormik";
pub const REPLACEMENT_HOOK: &str = "useForm";
pub const FIELD_ACCESSOR_HOOK: &str = "useField";

pub const WRAPPER_COMPONENT: &str = "Formik";
pub const FIELD_COMPONENT: &str = "Field";
pub const FAST_FIELD_COMPONENT: &str = "FastField";
pub const FIELD_ARRAY_COMPONENT: &str = "FieldArray";
pub const ERROR_MESSAGE_COMPONENT: &str = "ErrorMessage";

/// Tag the rewritten `<Field>` becomes.
pub const NATIVE_INPUT_TAG: &str = "input";
/// Registration function the rewritten input spreads.
pub const REGISTER_FN: &str = "register";

pub const SCHEMA_ADAPTER: &str = "yupResolver";
pub const SCHEMA_ADAPTER_MODULE: &str = "@hookform/resolvers/yup";

pub mod keys {
    pub const INITIAL_VALUES: &str = "initialValues";
    pub const DEFAULT_VALUES: &str = "defaultValues";
    pub const ON_SUBMIT: &str = "onSubmit";
    pub const VALIDATION_SCHEMA: &str = "validationSchema";
    pub const RESOLVER: &str = "resolver";
    pub const VALIDATE: &str = "validate";
    pub const VALIDATE_ON_CHANGE: &str = "validateOnChange";
    pub const VALIDATE_ON_BLUR: &str = "validateOnBlur";
    pub const ENABLE_REINITIALIZE: &str = "enableReinitialize";
}
