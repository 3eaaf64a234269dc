//! Generated Elm module emitter.
//!
//! The compiled CSS is embedded into a fixed module template as a
//! triple-quoted string literal. The CSS is escaped first so no byte
//! sequence in it can terminate the literal.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
#[error("invalid Elm module name {name:?}: {reason}")]
pub struct InvalidModuleName {
  pub name: String,
  pub reason: &'static str,
}

/// Validate a dotted Elm module path such as `Admin.Styles`. Each
/// segment must start with an uppercase ASCII letter.
pub fn validate_module_name(name: &str) -> Result<(), InvalidModuleName> {
  let invalid = |reason| InvalidModuleName {
    name: name.to_string(),
    reason,
  };

  if name.is_empty() {
    return Err(invalid("module name is empty"));
  }

  for segment in name.split('.') {
    let mut chars = segment.chars();
    match chars.next() {
      None => return Err(invalid("empty module path segment")),
      Some(first) if !first.is_ascii_uppercase() => {
        return Err(invalid("segment must start with an uppercase letter"));
      }
      Some(_) => {}
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
      return Err(invalid("segment contains a non-identifier character"));
    }
  }

  Ok(())
}

/// Source path for a module name, e.g. `Admin.Styles` ->
/// `src/Admin/Styles.elm`.
pub fn module_output_path(name: &str) -> PathBuf {
  let mut path = PathBuf::from("src");
  for segment in name.split('.') {
    path.push(segment);
  }
  path.set_extension("elm");
  path
}

/// Escape CSS for embedding in an Elm triple-quoted string literal.
///
/// Every quote is escaped, not just `"""` runs: a lone quote adjacent
/// to the closing delimiter would otherwise terminate the literal
/// early.
pub fn escape_string_literal(css: &str) -> String {
  css.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render the generated module for `module_name` around the compiled
/// CSS. The caller validates the module name first.
pub fn emit_module(module_name: &str, css: &str) -> String {
  format!(
    r#"module {module_name} exposing (..)

import Html as H exposing (Html)

globalStyles : Html msg
globalStyles =
    H.node "style"
        []
        [ H.text """{css}""" ]"#,
    module_name = module_name,
    css = escape_string_literal(css),
  )
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn emits_the_fixed_template() {
    let module = emit_module("Admin.Styles", ".a:hover{color:red}");

    assert_eq!(
      module,
      "module Admin.Styles exposing (..)\n\
       \n\
       import Html as H exposing (Html)\n\
       \n\
       globalStyles : Html msg\n\
       globalStyles =\n\
       \x20   H.node \"style\"\n\
       \x20       []\n\
       \x20       [ H.text \"\"\".a:hover{color:red}\"\"\" ]"
    );
  }

  #[test]
  fn module_name_substitutes_into_declaration_only() {
    let a = emit_module("A", ".x{color:red}");
    let b = emit_module("B", ".x{color:red}");

    assert_eq!(a.replacen("module A", "module B", 1), b);
  }

  #[test]
  fn escapes_literal_terminators() {
    assert_eq!(
      escape_string_literal(r#".a:before{content:'"""'}"#),
      r#".a:before{content:'\"\"\"'}"#
    );
    assert_eq!(escape_string_literal(r"url(a\ b)"), r"url(a\\ b)");
  }

  #[test]
  fn escapes_a_quote_adjacent_to_the_delimiter() {
    let module = emit_module("A", r#".a{content:'"'}"#);

    assert!(!module.contains(r#""""" ]"#));
    assert!(module.ends_with(r#"[ H.text """.a{content:'\"'}""" ]"#));
  }

  #[test]
  fn accepts_dotted_module_paths() {
    assert!(validate_module_name("Admin.Styles").is_ok());
    assert!(validate_module_name("Client.Styles").is_ok());
    assert!(validate_module_name("A").is_ok());
  }

  #[test]
  fn rejects_malformed_module_names() {
    assert!(validate_module_name("").is_err());
    assert!(validate_module_name("admin.Styles").is_err());
    assert!(validate_module_name("Admin..Styles").is_err());
    assert!(validate_module_name("Admin.Sty-les").is_err());
  }

  #[test]
  fn derives_output_paths_from_module_names() {
    assert_eq!(
      module_output_path("Admin.Styles"),
      PathBuf::from("src/Admin/Styles.elm")
    );
    assert_eq!(module_output_path("Main"), PathBuf::from("src/Main.elm"));
  }
}
