//! The fixed transformation pipeline.
//!
//! Three stages run in declared order over the stylesheet text: nesting
//! expansion, vendor prefixing, minification. Each stage is a pure
//! text-to-text function; a stage failure short-circuits the run and no
//! later stage sees partial output.

use lightningcss::printer::PrinterOptions;
use lightningcss::stylesheet::{MinifyOptions, ParserOptions, StyleSheet};
use lightningcss::targets::{Browsers, Features, Targets};

/// Browserslist query resolved into the vendor-prefixing support matrix.
pub const BROWSERSLIST: &[&str] = &["defaults"];

/// The stages, in the order they run. Never reordered or skipped.
pub const PIPELINE: [Stage; 3] = [Stage::ExpandNesting, Stage::VendorPrefix, Stage::Minify];

#[derive(Debug, thiserror::Error)]
#[error("{stage} stage failed for {filename}: {message}")]
pub struct StageError {
  pub stage: &'static str,
  pub filename: String,
  pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
  /// Flatten nested selectors into top-level rules.
  ExpandNesting,
  /// Duplicate declarations with vendor prefixes ahead of the
  /// unprefixed declaration, per [`BROWSERSLIST`].
  VendorPrefix,
  /// Strip insignificant whitespace and comments, shorten tokens.
  Minify,
}

impl Stage {
  pub fn name(self) -> &'static str {
    match self {
      Stage::ExpandNesting => "nesting expansion",
      Stage::VendorPrefix => "vendor prefixing",
      Stage::Minify => "minification",
    }
  }

  /// Apply this stage to `css`, producing new text. `filename` is only
  /// used in diagnostics.
  pub fn apply(self, css: &str, filename: &str) -> Result<String, StageError> {
    let fail = |message: String| StageError {
      stage: self.name(),
      filename: filename.to_string(),
      message,
    };

    let mut stylesheet = StyleSheet::parse(
      css,
      ParserOptions {
        filename: filename.to_string(),
        ..ParserOptions::default()
      },
    )
    .map_err(|err| fail(err.to_string()))?;

    match self {
      Stage::ExpandNesting => {
        // Force lowering regardless of what the browser matrix would
        // allow, so the prefixing stage never sees nested rules.
        let targets = Targets {
          browsers: None,
          include: Features::Nesting,
          exclude: Features::empty(),
        };
        stylesheet
          .minify(MinifyOptions {
            targets,
            ..MinifyOptions::default()
          })
          .map_err(|err| fail(err.to_string()))?;
        stylesheet
          .to_css(PrinterOptions {
            targets,
            ..PrinterOptions::default()
          })
          .map(|output| output.code)
          .map_err(|err| fail(err.to_string()))
      }
      Stage::VendorPrefix => {
        let browsers = Browsers::from_browserslist(BROWSERSLIST.iter().copied())
          .map_err(|err| fail(err.to_string()))?;
        let targets = Targets {
          browsers,
          include: Features::empty(),
          exclude: Features::empty(),
        };
        // Prefixes are added during minify, not printing.
        stylesheet
          .minify(MinifyOptions {
            targets,
            ..MinifyOptions::default()
          })
          .map_err(|err| fail(err.to_string()))?;
        stylesheet
          .to_css(PrinterOptions {
            targets,
            ..PrinterOptions::default()
          })
          .map(|output| output.code)
          .map_err(|err| fail(err.to_string()))
      }
      Stage::Minify => {
        stylesheet
          .minify(MinifyOptions::default())
          .map_err(|err| fail(err.to_string()))?;
        stylesheet
          .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
          })
          .map(|output| output.code)
          .map_err(|err| fail(err.to_string()))
      }
    }
  }
}

/// Run the whole pipeline over `css`, stopping at the first failing
/// stage.
pub fn run(css: &str, filename: &str) -> Result<String, StageError> {
  PIPELINE.iter().try_fold(css.to_string(), |css, stage| {
    let output = stage.apply(&css, filename)?;
    log::debug!(
      "{}: {} bytes in, {} bytes out",
      stage.name(),
      css.len(),
      output.len()
    );
    Ok(output)
  })
}
