//! Schema to Rust type resolution.

use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};
use tracing::warn;

use crate::document::{AdditionalProperties, OpenApiDocument, ReferenceOr, Schema};
use crate::errors::GeneratorError;
use crate::naming;

/// A Rust type used by generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RustType {
    /// `String`
    String,
    /// `bool`
    Bool,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// `serde_json::Value`, for schemas without a closer Rust type.
    Json,
    /// The runtime `FilePart`, for `format: binary` form fields.
    File,
    /// `Vec<T>`
    Vec(Box<RustType>),
    /// `HashMap<String, T>`
    Map(Box<RustType>),
    /// `Box<T>`, breaks recursive models.
    Boxed(Box<RustType>),
    /// A generated model.
    Named(String),
}

impl RustType {
    /// Whether the type is `String`.
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    /// Whether the type is a runtime file part.
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File)
    }

    /// Whether the type is `Copy`.
    pub fn is_copy(&self) -> bool {
        matches!(self, Self::Bool | Self::I32 | Self::I64 | Self::F32 | Self::F64)
    }

    /// Whether the type is a list.
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Vec(_))
    }

    /// Whether the type names `model` outside of an indirection.
    pub fn contains_directly(&self, model: &str) -> bool {
        match self {
            Self::Named(name) => name == model,
            _ => false,
        }
    }
}

impl ToTokens for RustType {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let ty = match self {
            Self::String => quote! { String },
            Self::Bool => quote! { bool },
            Self::I32 => quote! { i32 },
            Self::I64 => quote! { i64 },
            Self::F32 => quote! { f32 },
            Self::F64 => quote! { f64 },
            Self::Json => quote! { serde_json::Value },
            Self::File => quote! { FilePart },
            Self::Vec(item) => quote! { Vec<#item> },
            Self::Map(value) => quote! { std::collections::HashMap<String, #value> },
            Self::Boxed(inner) => quote! { Box<#inner> },
            Self::Named(name) => {
                let ident = format_ident!("{}", name);
                quote! { #ident }
            }
        };
        tokens.extend(ty);
    }
}

/// Resolves schemas against the document components.
#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'a> {
    document: &'a OpenApiDocument,
}

impl<'a> TypeResolver<'a> {
    /// Creates a resolver for the document.
    pub fn new(document: &'a OpenApiDocument) -> Self {
        Self { document }
    }

    /// The underlying document.
    pub fn document(&self) -> &'a OpenApiDocument {
        self.document
    }

    /// Resolves a schema to a Rust type, ignoring nullability.
    ///
    /// References become [`RustType::Named`]; inline objects without a
    /// dedicated model fall back to [`RustType::Json`].
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::UnresolvedReference`] for unknown references.
    pub fn resolve(&self, schema: &ReferenceOr<Schema>) -> Result<RustType, GeneratorError> {
        match schema {
            ReferenceOr::Reference { reference } => {
                let (name, _) = self.document.resolve_schema(reference)?;
                Ok(RustType::Named(naming::type_name(name)))
            }
            ReferenceOr::Item(schema) => self.resolve_inline(schema),
        }
    }

    fn resolve_inline(&self, schema: &Schema) -> Result<RustType, GeneratorError> {
        if let [single] = schema.all_of.as_slice() {
            return self.resolve(single);
        }
        let members = schema.non_null_members();
        if !members.is_empty() {
            return match members.as_slice() {
                [single] => self.resolve(single),
                _ => {
                    warn!("union schemas are generated as serde_json::Value");
                    Ok(RustType::Json)
                }
            };
        }

        let ty = match (schema.primary_type(), schema.format.as_deref()) {
            (Some("string"), _) => RustType::String,
            (Some("boolean"), _) => RustType::Bool,
            (Some("integer"), Some("int32")) => RustType::I32,
            (Some("integer"), _) => RustType::I64,
            (Some("number"), Some("float")) => RustType::F32,
            (Some("number"), _) => RustType::F64,
            (Some("array"), _) => {
                let item = match &schema.items {
                    Some(items) => self.resolve(items)?,
                    None => RustType::Json,
                };
                RustType::Vec(Box::new(item))
            }
            (Some("object") | None, _) if schema.properties.is_empty() => {
                match &schema.additional_properties {
                    Some(AdditionalProperties::Schema(value)) => {
                        RustType::Map(Box::new(self.resolve(value)?))
                    }
                    _ => RustType::Json,
                }
            }
            (Some(other), _) if other != "object" => {
                warn!(schema_type = other, "unsupported schema type");
                RustType::Json
            }
            _ => RustType::Json,
        };
        Ok(ty)
    }

    /// Resolves a form field, mapping `format: binary` strings to file parts.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::UnresolvedReference`] for unknown references.
    pub fn resolve_form_field(
        &self,
        schema: &ReferenceOr<Schema>,
    ) -> Result<RustType, GeneratorError> {
        let inline = self.document.schema(schema)?;
        if inline.primary_type() == Some("string") && inline.format.as_deref() == Some("binary") {
            return Ok(RustType::File);
        }
        self.resolve(schema)
    }

    /// Whether the schema, or the schema it references, admits `null`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::UnresolvedReference`] for unknown references.
    pub fn is_nullable(&self, schema: &ReferenceOr<Schema>) -> Result<bool, GeneratorError> {
        Ok(self.document.schema(schema)?.is_nullable())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn document() -> OpenApiDocument {
        OpenApiDocument::from_json(
            r##"{
                "openapi": "3.0.3",
                "info": {"title": "Demo", "version": "1"},
                "components": {"schemas": {
                    "Ordering": {"type": "string", "enum": ["ascending", "descending"]},
                    "AppOut": {"type": "object", "properties": {"id": {"type": "string"}}, "nullable": true}
                }}
            }"##,
        )
        .expect("valid document")
    }

    fn schema(json: &str) -> ReferenceOr<Schema> {
        serde_json::from_str(json).expect("valid schema")
    }

    #[rstest]
    #[case::string(r#"{"type": "string", "format": "date-time"}"#, quote! { String })]
    #[case::int32(r#"{"type": "integer", "format": "int32"}"#, quote! { i32 })]
    #[case::int64(r#"{"type": "integer"}"#, quote! { i64 })]
    #[case::double(r#"{"type": "number"}"#, quote! { f64 })]
    #[case::nullable_list(r#"{"type": ["array", "null"], "items": {"type": "string"}}"#, quote! { Vec<String> })]
    #[case::reference(r##"{"$ref": "#/components/schemas/Ordering"}"##, quote! { Ordering })]
    #[case::map(r#"{"type": "object", "additionalProperties": {"type": "boolean"}}"#, quote! { std::collections::HashMap<String, bool> })]
    #[case::free_form(r#"{"type": "object"}"#, quote! { serde_json::Value })]
    #[case::nullable_ref(r##"{"anyOf": [{"$ref": "#/components/schemas/AppOut"}, {"type": "null"}]}"##, quote! { AppOut })]
    #[case::single_all_of(r##"{"allOf": [{"$ref": "#/components/schemas/AppOut"}]}"##, quote! { AppOut })]
    fn should_resolve_schema(#[case] json: &str, #[case] expected: TokenStream) {
        let document = document();
        let resolver = TypeResolver::new(&document);

        let ty = resolver.resolve(&schema(json)).expect("resolved");

        assert_eq!(ty.to_token_stream().to_string(), expected.to_string());
    }

    #[test]
    fn should_resolve_binary_form_field_as_file() {
        let document = document();
        let resolver = TypeResolver::new(&document);

        let ty = resolver
            .resolve_form_field(&schema(r#"{"type": "string", "format": "binary"}"#))
            .expect("resolved");

        assert!(ty.is_file());
    }

    #[test]
    fn should_follow_reference_for_nullability() {
        let document = document();
        let resolver = TypeResolver::new(&document);

        let nullable = resolver
            .is_nullable(&schema(r##"{"$ref": "#/components/schemas/AppOut"}"##))
            .expect("resolved");

        assert!(nullable);
    }
}
