//! Compiles a stylesheet source file through a fixed CSS transformation
//! pipeline and embeds the result in a generated Elm module.
//!
//! The pipeline runs three stages in order: nesting expansion, vendor
//! prefixing against a fixed browserslist matrix, and minification.
//! Each run reads one file and writes one file; reruns on unchanged
//! input are byte-identical.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use stylegen_core::{compile, BuildTarget};
//!
//! let target = BuildTarget::new("Admin.Styles")?;
//! compile(Path::new("styles/styles.pcss"), &target)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod compiler;
pub mod elm;
pub mod pipeline;

pub use compiler::{compile, BuildTarget, CompileError};
pub use pipeline::{Stage, StageError, BROWSERSLIST, PIPELINE};
