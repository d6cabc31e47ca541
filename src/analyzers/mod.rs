//! JavaScript/TypeScript source analysis for formik usages.
//!
//! - [`parser`]: tree-sitter integration
//! - [`syntax`]: views over call expressions and JSX elements
//! - [`imports`]: target-module import extraction
//! - [`detector`]: pattern detection with per-node classification
//! - [`orchestration`]: per-file and batch entry points
//!
//! # Example
//!
//! ```
//! use formshift::analyzers::analyze_source;
//! use std::path::Path;
//!
//! let source = "import { useFormik } from 'formik';\nconst f = useFormik({ onSubmit });\n";
//! let analysis = analyze_source(source, Path::new("Form.jsx"));
//! assert!(analysis.has_formik);
//! assert_eq!(analysis.patterns.len(), 1);
//! ```

pub mod detector;
pub mod imports;
pub mod orchestration;
pub mod parser;
pub mod syntax;

pub use detector::{detect_patterns, Detection};
pub use orchestration::{analyze_file, analyze_files, analyze_source};
pub use parser::parse_source;
