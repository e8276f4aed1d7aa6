//! Model generation: structs for object schemas, enums for string
//! enumerations, aliases for everything else.

use std::collections::HashSet;

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use tracing::{debug, warn};

use super::{Context, doc_attrs};
use crate::document::{ReferenceOr, Schema};
use crate::errors::GeneratorError;
use crate::naming;
use crate::types::RustType;

/// How a property is carried by its struct field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    /// `T`
    Required,
    /// `Option<T>`, key always present.
    RequiredNullable,
    /// `Option<T>`, key omitted when `None`.
    Optional,
    /// `Nullable<T>`
    OptionalNullable,
}

impl FieldKind {
    fn new(required: bool, nullable: bool) -> Self {
        match (required, nullable) {
            (true, false) => Self::Required,
            (true, true) => Self::RequiredNullable,
            (false, false) => Self::Optional,
            (false, true) => Self::OptionalNullable,
        }
    }
}

#[derive(Debug)]
struct Field {
    wire_name: String,
    ident: Ident,
    ty: RustType,
    kind: FieldKind,
    description: Option<String>,
}

impl Field {
    fn field_type(&self) -> TokenStream {
        let ty = &self.ty;
        match self.kind {
            FieldKind::Required => quote! { #ty },
            FieldKind::RequiredNullable | FieldKind::Optional => quote! { Option<#ty> },
            FieldKind::OptionalNullable => quote! { Nullable<#ty> },
        }
    }
}

/// Emits the model declarations of a document.
#[derive(Debug)]
pub struct ModelGenerator<'c, 'a> {
    ctx: &'c Context<'a>,
    names: HashSet<String>,
    items: Vec<TokenStream>,
}

impl<'c, 'a> ModelGenerator<'c, 'a> {
    /// Creates an empty generator.
    pub fn new(ctx: &'c Context<'a>) -> Self {
        Self {
            ctx,
            names: HashSet::new(),
            items: Vec::new(),
        }
    }

    /// Emits every component schema.
    ///
    /// # Errors
    ///
    /// Fails on unresolved references and invalid identifiers.
    pub fn generate(mut self) -> Result<TokenStream, GeneratorError> {
        let document = self.ctx.resolver().document();
        for (name, schema) in &document.components.schemas {
            let type_name = naming::type_name(name);
            match schema {
                ReferenceOr::Reference { .. } => {
                    let target = self.ctx.resolver().resolve(schema)?;
                    self.alias(&type_name, None, &target)?;
                }
                ReferenceOr::Item(schema) => self.model(&type_name, schema)?,
            }
        }
        debug!(count = self.items.len(), "models generated");
        let items = self.items;
        Ok(quote! { #(#items)* })
    }

    fn claim(&mut self, name: &str) -> bool {
        let fresh = self.names.insert(name.to_string());
        if !fresh {
            warn!(name, "duplicate model name, keeping the first declaration");
        }
        fresh
    }

    fn model(&mut self, name: &str, schema: &Schema) -> Result<(), GeneratorError> {
        if let Some(values) = schema.string_enum() {
            return self.string_enum(name, schema.description.as_deref(), &values);
        }
        if schema.is_object() || schema.all_of.len() > 1 {
            return self.object(name, schema);
        }
        let target = self.ctx.resolver().resolve(&ReferenceOr::Item(schema.clone()))?;
        self.alias(name, schema.description.as_deref(), &target)
    }

    fn alias(
        &mut self,
        name: &str,
        description: Option<&str>,
        target: &RustType,
    ) -> Result<(), GeneratorError> {
        if !self.claim(name) {
            return Ok(());
        }
        let ident = naming::ident(name)?;
        let docs = doc_attrs(description);
        let item = quote! {
            #docs
            pub type #ident = #target;
        };
        self.items.push(item);
        Ok(())
    }

    fn string_enum(
        &mut self,
        name: &str,
        description: Option<&str>,
        values: &[&str],
    ) -> Result<(), GeneratorError> {
        if !self.claim(name) {
            return Ok(());
        }
        let ident = naming::ident(name)?;
        let docs = doc_attrs(description);
        let extra_derives = self.ctx.extra_derives();
        let mut taken = HashSet::new();
        let variants = values
            .iter()
            .map(|value| {
                let variant = naming::claim_unique(naming::variant_name(value), &mut taken);
                let variant = naming::ident(&variant)?;
                Ok(quote! {
                    #[serde(rename = #value)]
                    #variant
                })
            })
            .collect::<Result<Vec<_>, GeneratorError>>()?;

        let item = quote! {
            #docs
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize #extra_derives)]
            pub enum #ident {
                #(#variants,)*
            }
        };
        self.items.push(item);
        Ok(())
    }

    /// Properties of the schema and of its `allOf` members, with the merged
    /// required list.
    fn properties<'s>(
        &self,
        schema: &'s Schema,
    ) -> Result<(Vec<(&'s String, &'s ReferenceOr<Schema>)>, HashSet<&'s str>), GeneratorError>
    where
        'a: 's,
    {
        let document = self.ctx.resolver().document();
        let mut properties = Vec::new();
        let mut required = HashSet::new();
        for member in &schema.all_of {
            let member = document.schema(member)?;
            let (nested, nested_required) = self.properties(member)?;
            properties.extend(nested);
            required.extend(nested_required);
        }
        properties.extend(&schema.properties);
        required.extend(schema.required.iter().map(String::as_str));
        Ok((properties, required))
    }

    fn object(&mut self, name: &str, schema: &Schema) -> Result<(), GeneratorError> {
        if !self.claim(name) {
            return Ok(());
        }
        let (properties, required) = self.properties(schema)?;

        let mut taken = HashSet::new();
        let mut fields = Vec::with_capacity(properties.len());
        for (wire_name, property) in properties {
            let ty = self.property_type(name, wire_name, property)?;
            let ty = if ty.contains_directly(name) {
                RustType::Boxed(Box::new(ty))
            } else {
                ty
            };
            let nullable = self.ctx.resolver().is_nullable(property)?;
            let description = self
                .ctx
                .resolver()
                .document()
                .schema(property)?
                .description
                .clone();
            fields.push(Field {
                wire_name: wire_name.clone(),
                ident: naming::ident(&naming::claim_unique(
                    naming::field_name(wire_name),
                    &mut taken,
                ))?,
                ty,
                kind: FieldKind::new(required.contains(wire_name.as_str()), nullable),
                description,
            });
        }

        let ident = naming::ident(name)?;
        let docs = doc_attrs(schema.description.as_deref());
        let extra_derives = self.ctx.extra_derives();
        let declarations = fields
            .iter()
            .map(|field| self.field_declaration(field))
            .collect::<Vec<_>>();
        let constructor = constructor(&fields);
        let accessors = fields.iter().map(accessors);

        let item = quote! {
            #docs
            #[derive(Debug, Clone, PartialEq, Serialize, Deserialize #extra_derives)]
            #[serde(deny_unknown_fields)]
            pub struct #ident {
                #(#declarations)*
            }

            impl #ident {
                #constructor

                #(#accessors)*
            }
        };
        self.items.push(item);
        Ok(())
    }

    /// Inline objects and enumerations become dedicated models named after
    /// the parent and the property.
    fn property_type(
        &mut self,
        parent: &str,
        wire_name: &str,
        property: &ReferenceOr<Schema>,
    ) -> Result<RustType, GeneratorError> {
        let Some(inline) = property.as_item() else {
            return self.ctx.resolver().resolve(property);
        };
        let nested_name = format!("{parent}{}", naming::type_name(wire_name));
        if inline.is_object() || inline.string_enum().is_some() {
            self.model(&nested_name, inline)?;
            return Ok(RustType::Named(nested_name));
        }
        if let Some(items) = inline.items.as_deref().and_then(ReferenceOr::as_item)
            && (items.is_object() || items.string_enum().is_some())
        {
            let item_name = format!("{nested_name}Item");
            self.model(&item_name, items)?;
            return Ok(RustType::Vec(Box::new(RustType::Named(item_name))));
        }
        self.ctx.resolver().resolve(property)
    }

    fn field_declaration(&self, field: &Field) -> TokenStream {
        let ident = &field.ident;
        let ty = field.field_type();
        let docs = doc_attrs(field.description.as_deref());
        let rename = (naming::unraw(ident) != field.wire_name).then(|| {
            let wire_name = &field.wire_name;
            quote! { #[serde(rename = #wire_name)] }
        });
        let serde = match field.kind {
            FieldKind::Required => quote! {},
            FieldKind::RequiredNullable => {
                let with = format!("{}::nullable::required", self.ctx.runtime_str());
                quote! { #[serde(with = #with)] }
            }
            FieldKind::Optional => {
                quote! { #[serde(default, skip_serializing_if = "Option::is_none")] }
            }
            FieldKind::OptionalNullable => {
                quote! { #[serde(default, skip_serializing_if = "Nullable::is_unset")] }
            }
        };
        quote! {
            #docs
            #rename
            #serde
            pub #ident: #ty,
        }
    }
}

/// `new` takes the required fields, optional ones start unset.
fn constructor(fields: &[Field]) -> TokenStream {
    let params = fields
        .iter()
        .filter(|field| matches!(field.kind, FieldKind::Required | FieldKind::RequiredNullable))
        .map(|field| {
            let ident = &field.ident;
            let ty = field.field_type();
            quote! { #ident: #ty }
        });
    let inits = fields.iter().map(|field| {
        let ident = &field.ident;
        match field.kind {
            FieldKind::Required | FieldKind::RequiredNullable => quote! { #ident },
            FieldKind::Optional => quote! { #ident: None },
            FieldKind::OptionalNullable => quote! { #ident: Nullable::Unset },
        }
    });
    quote! {
        /// Creates the model from its required fields.
        #[allow(clippy::too_many_arguments)]
        pub fn new(#(#params),*) -> Self {
            Self {
                #(#inits,)*
            }
        }
    }
}

fn accessors(field: &Field) -> TokenStream {
    let ident = &field.ident;
    let name = naming::unraw(ident);
    let ty = &field.ty;
    let with = format_ident!("with_{}", name);
    match field.kind {
        FieldKind::Required | FieldKind::RequiredNullable => quote! {},
        FieldKind::Optional => quote! {
            /// Sets the field, builder style.
            #[must_use]
            pub fn #with(mut self, value: #ty) -> Self {
                self.#ident = Some(value);
                self
            }
        },
        FieldKind::OptionalNullable => {
            let has = format_ident!("has_{}", name);
            let set = format_ident!("set_{}", name);
            let set_null = format_ident!("set_{}_null", name);
            let unset = format_ident!("unset_{}", name);
            let or_default = has_default(ty).then(|| {
                let or_default = format_ident!("{}_or_default", name);
                quote! {
                    /// The value, or the zero value when unset or null.
                    pub fn #or_default(&self) -> #ty {
                        self.#ident.value_or_default()
                    }
                }
            });
            quote! {
                /// Whether the field was assigned, possibly to `null`.
                pub fn #has(&self) -> bool {
                    self.#ident.is_set()
                }

                #or_default

                /// Assigns a value.
                pub fn #set(&mut self, value: #ty) {
                    self.#ident.set(value);
                }

                /// Assigns an explicit `null`.
                pub fn #set_null(&mut self) {
                    self.#ident.set_null();
                }

                /// Leaves the field out of the payload.
                pub fn #unset(&mut self) {
                    self.#ident.unset();
                }

                /// Assigns a value, builder style.
                #[must_use]
                pub fn #with(mut self, value: #ty) -> Self {
                    self.#ident.set(value);
                    self
                }
            }
        }
    }
}

/// Models may lack `Default`.
fn has_default(ty: &RustType) -> bool {
    !matches!(ty, RustType::Named(_) | RustType::Boxed(_) | RustType::File)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GenerationSettings;
    use crate::document::OpenApiDocument;
    use crate::types::TypeResolver;

    fn generate(json: &str) -> String {
        let document = OpenApiDocument::from_json(json).expect("valid document");
        let settings = GenerationSettings::default();
        let ctx = Context::new(TypeResolver::new(&document), &settings).expect("valid settings");
        let tokens = ModelGenerator::new(&ctx).generate().expect("models");
        let file = syn::parse2::<syn::File>(tokens).expect("valid tokens");
        prettyplease::unparse(&file)
    }

    /// Drops the layout choices of `prettyplease`: whitespace and the
    /// trailing commas it adds when wrapping.
    fn squash(code: &str) -> String {
        code.chars()
            .filter(|ch| !ch.is_whitespace())
            .collect::<String>()
            .replace(",)", ")")
            .replace(",}", "}")
    }

    const LIST_RESPONSE: &str = r##"{
        "openapi": "3.1.0",
        "info": {"title": "Demo", "version": "1"},
        "components": {"schemas": {
            "ListResponse_MessageAttemptEndpointOut_": {
                "type": "object",
                "required": ["data", "done", "iterator"],
                "properties": {
                    "data": {"type": "array", "items": {"$ref": "#/components/schemas/MessageAttemptEndpointOut"}},
                    "done": {"type": "boolean"},
                    "iterator": {"type": "string", "nullable": true},
                    "prevIterator": {"type": "string", "nullable": true}
                }
            },
            "MessageAttemptEndpointOut": {
                "type": "object",
                "required": ["id"],
                "properties": {
                    "id": {"type": "string", "description": "The attempt id."},
                    "responseStatusCode": {"type": "integer", "format": "int32"},
                    "type": {"type": "string", "enum": ["scheduled", "manual"]}
                }
            },
            "Ordering": {"type": "string", "enum": ["ascending", "descending"]},
            "Cursor": {"type": "string"}
        }}
    }"##;

    #[test]
    fn should_generate_list_response_fields() {
        let code = generate(LIST_RESPONSE);

        assert!(code.contains("pub struct ListResponseMessageAttemptEndpointOut {"));
        assert!(code.contains("#[serde(deny_unknown_fields)]"));
        assert!(code.contains("pub data: Vec<MessageAttemptEndpointOut>,"));
        assert!(code.contains("pub done: bool,"));
        assert!(code.contains("#[serde(with = \"sdkforge_core::nullable::required\")]"));
        assert!(code.contains("pub iterator: Option<String>,"));
        assert!(code.contains("#[serde(rename = \"prevIterator\")]"));
        assert!(code.contains("pub prev_iterator: Nullable<String>,"));
    }

    #[test]
    fn should_generate_nullable_accessors() {
        let code = generate(LIST_RESPONSE);

        assert!(code.contains("pub fn has_prev_iterator(&self) -> bool"));
        assert!(code.contains("pub fn prev_iterator_or_default(&self) -> String"));
        assert!(code.contains("pub fn set_prev_iterator(&mut self, value: String)"));
        assert!(code.contains("pub fn set_prev_iterator_null(&mut self)"));
        assert!(code.contains("pub fn unset_prev_iterator(&mut self)"));
        assert!(squash(&code).contains(&squash(
            "pub fn new(data: Vec<MessageAttemptEndpointOut>, done: bool, iterator: Option<String>) -> Self"
        )));
    }

    #[test]
    fn should_generate_optional_field_builder() {
        let code = generate(LIST_RESPONSE);

        assert!(code.contains("pub response_status_code: Option<i32>,"));
        assert!(code.contains("pub fn with_response_status_code(mut self, value: i32) -> Self"));
        assert!(code.contains("pub r#type: Option<MessageAttemptEndpointOutType>,"));
        assert!(code.contains("pub enum MessageAttemptEndpointOutType {"));
    }

    #[test]
    fn should_generate_string_enum_and_alias() {
        let code = generate(LIST_RESPONSE);

        assert!(code.contains("pub enum Ordering {"));
        assert!(code.contains("#[serde(rename = \"ascending\")]\n    Ascending,"));
        assert!(code.contains("pub type Cursor = String;"));
        assert!(code.contains("/// The attempt id."));
    }

    #[test]
    fn should_box_recursive_fields_and_merge_all_of() {
        let code = generate(
            r##"{
                "openapi": "3.0.3",
                "info": {"title": "Demo", "version": "1"},
                "components": {"schemas": {
                    "Base": {"type": "object", "required": ["id"], "properties": {"id": {"type": "string"}}},
                    "Node": {
                        "allOf": [
                            {"$ref": "#/components/schemas/Base"},
                            {"type": "object", "properties": {"parent": {"$ref": "#/components/schemas/Node"}}}
                        ]
                    }
                }}
            }"##,
        );

        assert!(code.contains("pub struct Node {"));
        assert!(code.contains("pub parent: Option<Box<Node>>,"));
        assert!(code.contains("pub fn new(id: String) -> Self"));
    }

    #[test]
    fn should_suffix_colliding_field_and_variant_names() {
        let code = generate(
            r##"{
                "openapi": "3.1.0",
                "info": {"title": "Demo", "version": "1"},
                "components": {"schemas": {
                    "App": {
                        "type": "object",
                        "required": ["appId", "app_id"],
                        "properties": {
                            "appId": {"type": "string"},
                            "app_id": {"type": "integer"}
                        }
                    },
                    "Level": {"type": "string", "enum": ["not-found", "not_found"]}
                }}
            }"##,
        );

        assert!(code.contains("#[serde(rename = \"appId\")]\n    pub app_id: String,"));
        assert!(code.contains("#[serde(rename = \"app_id\")]\n    pub app_id_2: i64,"));
        assert!(squash(&code).contains(&squash("pub fn new(app_id: String, app_id_2: i64) -> Self")));
        assert!(code.contains("#[serde(rename = \"not_found\")]\n    NotFound2,"));
    }
}
