//! Token generation for models and operations.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use crate::GenerationSettings;
use crate::errors::GeneratorError;
use crate::types::TypeResolver;

mod model;
pub use self::model::ModelGenerator;

mod operation;
pub use self::operation::OperationGenerator;

/// Shared state of one generation run.
#[derive(Debug)]
pub struct Context<'a> {
    resolver: TypeResolver<'a>,
    settings: &'a GenerationSettings,
    runtime: TokenStream,
    extra_derives: Vec<TokenStream>,
}

impl<'a> Context<'a> {
    /// Prepares the runtime path and derives from the settings.
    ///
    /// # Errors
    ///
    /// Fails when the runtime crate or a derive is not a Rust path.
    pub fn new(
        resolver: TypeResolver<'a>,
        settings: &'a GenerationSettings,
    ) -> Result<Self, GeneratorError> {
        let runtime = parse_path(settings.runtime_crate())?;
        let extra_derives = settings
            .extra_derives()
            .iter()
            .map(|derive| parse_path(derive))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            resolver,
            settings,
            runtime,
            extra_derives,
        })
    }

    /// The schema resolver.
    pub fn resolver(&self) -> TypeResolver<'a> {
        self.resolver
    }

    /// The generation settings.
    pub fn settings(&self) -> &'a GenerationSettings {
        self.settings
    }

    /// Path of the runtime crate in generated code.
    pub fn runtime(&self) -> &TokenStream {
        &self.runtime
    }

    /// User supplied derives, as tokens.
    pub fn extra_derives(&self) -> TokenStream {
        let derives = &self.extra_derives;
        quote! { #(, #derives)* }
    }

    /// The runtime path as written in serde attributes.
    pub fn runtime_str(&self) -> &str {
        self.settings.runtime_crate()
    }
}

fn parse_path(path: &str) -> Result<TokenStream, GeneratorError> {
    syn::parse_str::<syn::Path>(path)
        .map(|path| path.to_token_stream())
        .map_err(|_| GeneratorError::InvalidIdentifier {
            name: path.to_string(),
        })
}

/// `#[doc = ...]` attributes, one per line.
pub fn doc_attrs<'s>(docs: impl IntoIterator<Item = &'s str>) -> TokenStream {
    let lines = docs
        .into_iter()
        .flat_map(|doc| {
            let lines = doc.lines().collect::<Vec<_>>();
            if lines.is_empty() { vec![""] } else { lines }
        })
        .map(|line| match line.trim_end() {
            "" => String::new(),
            line => format!(" {line}"),
        });
    quote! { #(#[doc = #lines])* }
}
