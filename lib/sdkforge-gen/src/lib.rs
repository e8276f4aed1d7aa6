//! # SDKForge Gen
//!
//! Generates the model and operation code of a client SDK from an OpenAPI
//! document. The generated code depends on `sdkforge-core` for HTTP
//! execution, parameter serialization and authentication.
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use sdkforge_gen::document::OpenApiDocument;
//! use sdkforge_gen::{GenerationSettings, Generator, InterfaceStyle};
//!
//! # fn main() -> Result<(), sdkforge_gen::errors::GeneratorError> {
//! let document = OpenApiDocument::load(Path::new("openapi.json"))?;
//!
//! let mut settings = GenerationSettings::default();
//! settings
//!     .with_interface(InterfaceStyle::Grouped)
//!     .with_derive("Eq");
//!
//! Generator::new(&settings).generate_file(&document, Path::new("src/generated.rs"))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Generated items
//!
//! - one model per `components.schemas` entry: structs for objects, enums for
//!   string enumerations, type aliases for everything else
//! - one `async fn` per operation, taking an `&ApiClient<E>` and returning a
//!   `TypedResponse` keyed by the declared status codes
//! - one `{Tag}Api` facade per operation tag, reached through the generated
//!   `Resources` trait: `client.application().create_app(&body)`
//!
//! Nullable fields follow the three state convention of
//! `sdkforge_core::Nullable`: absent, explicit `null` or a value.

use std::path::Path;

use proc_macro2::TokenStream;
use quote::quote;
use tracing::info;

pub mod codegen;
pub mod document;
pub mod errors;
pub mod naming;
pub mod output;
pub mod types;

use self::codegen::{Context, ModelGenerator, OperationGenerator, doc_attrs};
use self::document::OpenApiDocument;
use self::errors::GeneratorError;
use self::types::TypeResolver;

/// Default path of the runtime crate in generated code.
pub const DEFAULT_RUNTIME_CRATE: &str = "sdkforge_core";

/// How operation arguments are exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterfaceStyle {
    /// One function argument per parameter.
    #[default]
    Positional,
    /// One `{Operation}Params` struct per operation.
    Grouped,
}

/// Options of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    interface: InterfaceStyle,
    extra_derives: Vec<String>,
    runtime_crate: String,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            interface: InterfaceStyle::default(),
            extra_derives: Vec::new(),
            runtime_crate: DEFAULT_RUNTIME_CRATE.to_string(),
        }
    }
}

impl GenerationSettings {
    /// Default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the interface style.
    pub fn with_interface(&mut self, interface: InterfaceStyle) -> &mut Self {
        self.interface = interface;
        self
    }

    /// Adds a derive to every generated model.
    pub fn with_derive(&mut self, derive: impl Into<String>) -> &mut Self {
        self.extra_derives.push(derive.into());
        self
    }

    /// Sets the path of the runtime crate, `sdkforge_core` by default.
    pub fn with_runtime_crate(&mut self, runtime_crate: impl Into<String>) -> &mut Self {
        self.runtime_crate = runtime_crate.into();
        self
    }

    /// The interface style.
    pub fn interface(&self) -> InterfaceStyle {
        self.interface
    }

    /// Extra derives for models.
    pub fn extra_derives(&self) -> &[String] {
        &self.extra_derives
    }

    /// The runtime crate path.
    pub fn runtime_crate(&self) -> &str {
        &self.runtime_crate
    }
}

/// Generates SDK code from a document.
#[derive(Debug, Clone)]
pub struct Generator {
    settings: GenerationSettings,
}

impl Generator {
    /// Creates a generator with the given settings.
    pub fn new(settings: &GenerationSettings) -> Self {
        Self {
            settings: settings.clone(),
        }
    }

    /// Generates the tokens of the SDK module.
    ///
    /// # Errors
    ///
    /// Fails on unresolved references, names that are not identifiers and
    /// invalid settings.
    pub fn generate_tokens(&self, document: &OpenApiDocument) -> Result<TokenStream, GeneratorError> {
        info!(
            title = %document.info.title,
            version = %document.info.version,
            schemas = document.components.schemas.len(),
            paths = document.paths.len(),
            "generating SDK"
        );
        let ctx = Context::new(TypeResolver::new(document), &self.settings)?;
        let runtime = ctx.runtime();

        let models = ModelGenerator::new(&ctx).generate()?;
        let operations = OperationGenerator::new(&ctx).generate()?;

        let version = &document.info.version;
        let version_docs = doc_attrs([format!("Version of `{}`.", document.info.title).as_str()]);
        let server = document.servers.first().map(|server| {
            let url = &server.url;
            let docs = doc_attrs(
                ["First server declared by the document."]
                    .into_iter()
                    .chain(server.description.as_deref()),
            );
            quote! {
                #docs
                pub const DEFAULT_SERVER_URL: &str = #url;
            }
        });

        Ok(quote! {
            #[allow(unused_imports)]
            use #runtime::{
                ApiClient, ApiClientError, AuthScheme, FilePart, HttpExecutor, Method, Nullable,
                ParamArg, ParamSpec, ResponseTable, StatusKey, TypedResponse,
            };
            #[allow(unused_imports)]
            use serde::{Deserialize, Serialize};

            #version_docs
            pub const API_VERSION: &str = #version;

            #server

            #models

            #operations
        })
    }

    /// Generates formatted SDK code.
    ///
    /// # Errors
    ///
    /// Same as [`Generator::generate_tokens`], plus
    /// [`GeneratorError::InvalidTokens`] if the result does not parse.
    pub fn generate_text(&self, document: &OpenApiDocument) -> Result<String, GeneratorError> {
        let tokens = self.generate_tokens(document)?;
        let file = output::validate_code(tokens)?;
        let source = format!("{} {}", document.info.title, document.info.version);
        Ok(output::format_code(&file, &source))
    }

    /// Generates formatted SDK code and writes it to `path`.
    ///
    /// # Errors
    ///
    /// Same as [`Generator::generate_text`], plus [`GeneratorError::Io`].
    pub fn generate_file(
        &self,
        document: &OpenApiDocument,
        path: &Path,
    ) -> Result<(), GeneratorError> {
        let code = self.generate_text(document)?;
        output::write_atomic(path, &code)?;
        info!(path = %path.display(), "SDK written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_chain_settings() {
        let mut settings = GenerationSettings::new();
        settings
            .with_interface(InterfaceStyle::Grouped)
            .with_derive("Eq")
            .with_runtime_crate("crate::runtime");

        assert_eq!(settings.interface(), InterfaceStyle::Grouped);
        assert_eq!(settings.extra_derives(), ["Eq".to_string()]);
        assert_eq!(settings.runtime_crate(), "crate::runtime");
    }

    #[test]
    fn should_reject_invalid_runtime_crate() -> Result<(), GeneratorError> {
        let document = OpenApiDocument::from_json(
            r#"{"openapi": "3.1.0", "info": {"title": "Demo", "version": "1"}}"#,
        )?;
        let mut settings = GenerationSettings::new();
        settings.with_runtime_crate("not a path");

        let result = Generator::new(&settings).generate_tokens(&document);

        assert!(matches!(result, Err(GeneratorError::InvalidIdentifier { .. })));
        Ok(())
    }

    #[test]
    fn should_generate_empty_document() -> Result<(), GeneratorError> {
        let document = OpenApiDocument::from_json(
            r#"{"openapi": "3.1.0", "info": {"title": "Demo", "version": "1.2.0"},
                "servers": [{"url": "https://api.example.com"}]}"#,
        )?;

        let code = Generator::new(&GenerationSettings::default()).generate_text(&document)?;

        assert!(code.starts_with("// This code was automatically generated by sdkforge-gen from Demo 1.2.0."));
        assert!(code.contains("pub const API_VERSION: &str = \"1.2.0\";"));
        assert!(code.contains("pub const DEFAULT_SERVER_URL: &str = \"https://api.example.com\";"));
        assert!(code.contains("use sdkforge_core::{"));
        Ok(())
    }
}
