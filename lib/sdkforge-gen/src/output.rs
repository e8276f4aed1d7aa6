//! Output assembly: validation with `syn`, formatting with `prettyplease`
//! and atomic file writes.

use std::fs;
use std::path::Path;

use proc_macro2::TokenStream;
use tracing::debug;

use crate::errors::GeneratorError;

/// Parses the tokens as a complete Rust file.
///
/// # Errors
///
/// Returns [`GeneratorError::InvalidTokens`] if the code does not parse.
pub fn validate_code(tokens: TokenStream) -> Result<syn::File, GeneratorError> {
    syn::parse2(tokens).map_err(|error| GeneratorError::InvalidTokens { error })
}

/// Formats the file, prefixed by the generated-code notice.
pub fn format_code(file: &syn::File, source: &str) -> String {
    let formatted = prettyplease::unparse(file);
    format!(
        "// This code was automatically generated by sdkforge-gen from {source}. Do not edit manually.\n\n{formatted}"
    )
}

/// Writes to a temporary file, then renames it over the target.
///
/// # Errors
///
/// Returns [`GeneratorError::Io`] when a directory, the temporary file or
/// the rename fails.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    let io_error = |path: &Path| {
        let path = path.display().to_string();
        move |error| GeneratorError::Io { path, error }
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }

    let temp_path = path.with_extension("rs.tmp");
    fs::write(&temp_path, content).map_err(io_error(&temp_path))?;
    fs::rename(&temp_path, path).map_err(io_error(path))?;
    debug!(path = %path.display(), bytes = content.len(), "generated file written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    #[test]
    fn should_format_with_notice() -> Result<(), GeneratorError> {
        let file = validate_code(quote! { pub type Cursor = String; })?;

        let code = format_code(&file, "Demo 1.0.0");

        insta::assert_snapshot!(code, @r"
        // This code was automatically generated by sdkforge-gen from Demo 1.0.0. Do not edit manually.

        pub type Cursor = String;
        ");
        Ok(())
    }

    #[test]
    fn should_reject_invalid_tokens() {
        let result = validate_code(quote! { pub struct { } });

        assert!(matches!(result, Err(GeneratorError::InvalidTokens { .. })));
    }

    #[test]
    fn should_write_into_missing_directory() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("generated").join("api.rs");

        write_atomic(&path, "pub type Cursor = String;\n")?;

        assert_eq!(fs::read_to_string(&path)?, "pub type Cursor = String;\n");
        assert!(!path.with_extension("rs.tmp").exists());
        Ok(())
    }
}
