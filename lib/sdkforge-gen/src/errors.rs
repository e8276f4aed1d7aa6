//! Error types for the generator.

/// Errors that can occur during code generation.
#[derive(Debug, derive_more::Error, derive_more::Display)]
pub enum GeneratorError {
    /// The OpenAPI document cannot be parsed.
    #[display("failed to parse OpenAPI document: {message}")]
    Parse {
        /// Parser message, with the failing path when known.
        message: String,
    },

    /// A `$ref` points to nothing.
    #[display("unresolved reference '{reference}'")]
    UnresolvedReference {
        /// The reference target.
        reference: String,
    },

    /// A name cannot be turned into a Rust identifier.
    #[display("'{name}' cannot be used as a Rust identifier")]
    InvalidIdentifier {
        /// The offending name.
        name: String,
    },

    /// The generated tokens do not form a valid Rust file.
    #[display("generated code is invalid: {error}")]
    InvalidTokens {
        /// The parser error.
        #[error(source)]
        error: syn::Error,
    },

    /// Reading or writing a file failed.
    #[display("I/O error on '{path}': {error}")]
    Io {
        /// The file path.
        path: String,
        /// The underlying error.
        #[error(source)]
        error: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_unresolved_reference() {
        let error = GeneratorError::UnresolvedReference {
            reference: "#/components/schemas/AppOut".to_string(),
        };

        insta::assert_snapshot!(error, @"unresolved reference '#/components/schemas/AppOut'");
    }

    #[test]
    fn should_be_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}

        assert_send_sync::<GeneratorError>();
    }
}
