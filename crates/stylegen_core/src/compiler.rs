//! File-to-file compilation: read the stylesheet source, run the
//! pipeline, emit the generated module, write it out.

use std::fs;
use std::path::{Path, PathBuf};

use crate::elm;
use crate::pipeline;
use crate::pipeline::StageError;

/// One output target: a generated module and where it lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTarget {
  pub module_name: String,
  pub output_path: PathBuf,
}

impl BuildTarget {
  /// Target for `module_name` with the output path derived from it
  /// (`Admin.Styles` -> `src/Admin/Styles.elm`).
  pub fn new(module_name: &str) -> Result<Self, elm::InvalidModuleName> {
    elm::validate_module_name(module_name)?;
    Ok(BuildTarget {
      module_name: module_name.to_string(),
      output_path: elm::module_output_path(module_name),
    })
  }

  pub fn with_output_path(module_name: &str, output_path: impl Into<PathBuf>) -> Result<Self, elm::InvalidModuleName> {
    elm::validate_module_name(module_name)?;
    Ok(BuildTarget {
      module_name: module_name.to_string(),
      output_path: output_path.into(),
    })
  }
}

#[derive(Debug, thiserror::Error)]
pub enum CompileError {
  #[error("failed to read {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error(transparent)]
  Transform(#[from] StageError),
  #[error("failed to write {path}: {source}")]
  Write {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

/// Compile the stylesheet at `input_path` into the generated module for
/// `target`.
///
/// The output file is written only after every stage has succeeded, so
/// a failed run leaves any previous artifact untouched. Exactly one
/// file is written per call; the input is never mutated.
pub fn compile(input_path: &Path, target: &BuildTarget) -> Result<(), CompileError> {
  let source = fs::read_to_string(input_path).map_err(|source| CompileError::Read {
    path: input_path.to_path_buf(),
    source,
  })?;

  let css = pipeline::run(&source, &input_path.to_string_lossy())?;
  let module = elm::emit_module(&target.module_name, &css);

  fs::write(&target.output_path, module).map_err(|source| CompileError::Write {
    path: target.output_path.clone(),
    source,
  })?;

  log::info!(
    "compiled {} -> {} ({})",
    input_path.display(),
    target.output_path.display(),
    target.module_name
  );

  Ok(())
}
