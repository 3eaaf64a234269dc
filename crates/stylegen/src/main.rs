#![deny(unused_crate_dependencies)]

use std::path::Path;

use anyhow::bail;
use stylegen_core::{compile, BuildTarget};

/// The stylesheet source, relative to the working directory.
const INPUT_PATH: &str = "styles/styles.pcss";

/// Generated style modules. Output paths are derived from the module
/// names (`src/Admin/Styles.elm`, `src/Client/Styles.elm`).
const MODULE_NAMES: [&str; 2] = ["Admin.Styles", "Client.Styles"];

fn build_targets() -> anyhow::Result<Vec<BuildTarget>> {
  MODULE_NAMES
    .iter()
    .map(|name| Ok(BuildTarget::new(name)?))
    .collect()
}

fn main() -> anyhow::Result<()> {
  env_logger::init();

  let input = Path::new(INPUT_PATH);
  let mut failures = 0usize;

  // The targets are independent: one failing must not stop the other
  // from being regenerated.
  for target in build_targets()? {
    if let Err(err) = compile(input, &target) {
      log::error!("{}: {err}", target.module_name);
      failures += 1;
    }
  }

  if failures > 0 {
    bail!("{failures} of {} targets failed", MODULE_NAMES.len());
  }

  Ok(())
}
