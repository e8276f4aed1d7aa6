//! Operation generation: one async function per API operation.
//!
//! Each function assembles an `ApiCall` from its parameters, declares the
//! authentication schemes in document order and resolves the response
//! through a per-operation `ResponseTable`.
//!
//! Tagged operations are also reachable through a facade per tag,
//! `client.application().list(...)`, where the optional parameters of the
//! positional style move to an `{Operation}Options` struct.

use std::collections::HashSet;

use indexmap::IndexMap;
use proc_macro2::{Ident, Literal, TokenStream};
use quote::{format_ident, quote};
use tracing::{debug, warn};

use super::{Context, doc_attrs};
use crate::InterfaceStyle;
use crate::document::{
    ApiKeyIn, HttpMethod, Operation, Parameter, ParameterLocation, PathItem, SecurityScheme,
    json_schema,
};
use crate::errors::GeneratorError;
use crate::naming;
use crate::types::RustType;

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
const MULTIPART: &str = "multipart/form-data";
const TEXT_PLAIN: &str = "text/plain";

/// Names used by the generated function bodies next to the parameters.
const RESERVED_ARGS: &[&str] = &["client", "body", "options"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Carrier {
    Path,
    Query,
    Header,
    Form,
    FormFile,
}

#[derive(Debug)]
struct OpParam {
    wire_name: String,
    ident: Ident,
    carrier: Carrier,
    ty: RustType,
    required: bool,
    nullable: bool,
    description: Option<String>,
}

impl OpParam {
    /// `ParamSpec` expression.
    fn spec(&self) -> TokenStream {
        let name = &self.wire_name;
        let base = match self.carrier {
            Carrier::Path => quote! { ParamSpec::path(#name) },
            Carrier::Query => quote! { ParamSpec::query(#name) },
            Carrier::Header => quote! { ParamSpec::header(#name) },
            Carrier::Form => quote! { ParamSpec::form(#name) },
            Carrier::FormFile => quote! { ParamSpec::form_file(#name) },
        };
        let required =
            (self.required && self.carrier != Carrier::Path).then(|| quote! { .required() });
        let nullable = self.nullable.then(|| quote! { .nullable() });
        let array = self.ty.is_array().then(|| quote! { .array() });
        quote! { #base #required #nullable #array }
    }

    /// Argument type; positional strings are borrowed.
    fn arg_type(&self, borrowed: bool) -> TokenStream {
        let ty = &self.ty;
        let inner = if borrowed && ty.is_string() {
            quote! { &str }
        } else {
            quote! { #ty }
        };
        if ty.is_file() {
            return if self.required {
                inner
            } else {
                quote! { Option<#inner> }
            };
        }
        match (self.required, self.nullable) {
            (true, false) => inner,
            (true, true) | (false, false) => quote! { Option<#inner> },
            (false, true) => quote! { Nullable<#inner> },
        }
    }

    /// Positional argument read from an `{Operation}Options` value.
    fn from_options(&self) -> TokenStream {
        let ident = &self.ident;
        match (self.ty.is_string(), self.nullable) {
            (true, false) => quote! { options.#ident.as_deref() },
            (true, true) => quote! { options.#ident.as_ref().map(String::as_str) },
            (false, _) => quote! { options.#ident },
        }
    }

    /// `ParamArg` expression reading the argument through `access`.
    fn arg(&self, access: &TokenStream, borrowed: bool) -> TokenStream {
        if self.ty.is_file() {
            return if self.required {
                quote! { ParamArg::from(#access) }
            } else {
                quote! { #access.map_or(ParamArg::Absent, ParamArg::from) }
            };
        }
        let borrowed = borrowed && self.ty.is_string();
        match (self.required, self.nullable, borrowed) {
            (true, false, true) => quote! { ParamArg::value(#access)? },
            (true, false, false) => quote! { ParamArg::value(&#access)? },
            (true, true, true) => quote! { ParamArg::nullable(#access)? },
            (true, true, false) => quote! { ParamArg::nullable(#access.as_ref())? },
            (false, false, true) => quote! { ParamArg::optional(#access)? },
            (false, false, false) => quote! { ParamArg::optional(#access.as_ref())? },
            (false, true, _) => quote! { ParamArg::from_nullable(&#access)? },
        }
    }
}

#[derive(Debug)]
enum Body {
    Json { ty: RustType, required: bool },
    Text { required: bool },
}

#[derive(Debug)]
struct ResponseEntry {
    key: TokenStream,
    variant: Ident,
    success: bool,
    ty: Option<RustType>,
}

/// Response side of an operation: success and error types and table entries.
#[derive(Debug)]
struct Responses {
    success_type: TokenStream,
    error_type: TokenStream,
    enums: TokenStream,
    table: TokenStream,
}

/// Operations sharing a tag.
#[derive(Debug)]
struct Facade {
    tag: String,
    method_names: HashSet<String>,
    methods: Vec<TokenStream>,
}

/// What a facade method forwards to.
struct Forward<'s> {
    fn_ident: &'s Ident,
    fn_name: &'s str,
    type_prefix: &'s str,
    params: &'s [OpParam],
    body: Option<&'s Body>,
    grouped: bool,
    output: TokenStream,
    docs: &'s TokenStream,
    deprecated: bool,
}

/// Emits the operation functions of a document.
#[derive(Debug)]
pub struct OperationGenerator<'c, 'a> {
    ctx: &'c Context<'a>,
    names: HashSet<String>,
    items: Vec<TokenStream>,
    facades: IndexMap<String, Facade>,
}

impl<'c, 'a> OperationGenerator<'c, 'a> {
    /// Creates an empty generator.
    pub fn new(ctx: &'c Context<'a>) -> Self {
        Self {
            ctx,
            names: HashSet::new(),
            items: Vec::new(),
            facades: IndexMap::new(),
        }
    }

    /// Emits every operation of the document, in path order, then the tag
    /// facades.
    ///
    /// # Errors
    ///
    /// Fails on unresolved references and invalid identifiers.
    pub fn generate(mut self) -> Result<TokenStream, GeneratorError> {
        let document = self.ctx.resolver().document();
        for (path, item) in &document.paths {
            for (method, operation) in item.operations() {
                self.operation(path, item, method, operation)?;
            }
        }
        debug!(
            count = self.items.len(),
            facades = self.facades.len(),
            "operations generated"
        );
        let facades = self.facades()?;
        let items = self.items;
        Ok(quote! {
            #(#items)*
            #facades
        })
    }

    fn operation(
        &mut self,
        path: &str,
        item: &PathItem,
        method: HttpMethod,
        operation: &Operation,
    ) -> Result<(), GeneratorError> {
        let raw_name = operation
            .operation_id
            .clone()
            .unwrap_or_else(|| format!("{} {path}", method.as_str()));
        let fn_name = naming::field_name(&raw_name);
        if !self.names.insert(fn_name.clone()) {
            warn!(operation = %raw_name, "duplicate operation name, skipped");
            return Ok(());
        }
        let fn_ident = naming::ident(&fn_name)?;
        let type_prefix = naming::type_name(&raw_name);

        let mut params = self.parameters(item, operation)?;
        let body = self.body(operation, &mut params)?;
        disambiguate(&mut params)?;
        let responses = self.responses(&type_prefix, operation)?;
        let auth = self.auth(operation);

        let grouped = self.ctx.settings().interface() == InterfaceStyle::Grouped
            && (!params.is_empty() || body.is_some());
        let params_ident = format_ident!("{}Params", type_prefix);

        let (signature_args, params_struct) = if grouped {
            let fields = params.iter().map(|param| {
                let ident = &param.ident;
                let ty = param.arg_type(false);
                let docs = doc_attrs(param.description.as_deref());
                quote! {
                    #docs
                    pub #ident: #ty,
                }
            });
            let body_field = body.as_ref().map(|body| {
                let ty = body_type(body, false);
                quote! {
                    /// Request body.
                    pub body: #ty,
                }
            });
            let doc = format!(" Parameters of [`{fn_name}`].");
            let params_struct = quote! {
                #[doc = #doc]
                #[derive(Debug, Clone)]
                pub struct #params_ident {
                    #(#fields)*
                    #body_field
                }
            };
            (quote! { params: #params_ident }, params_struct)
        } else {
            let args = params.iter().map(|param| {
                let ident = &param.ident;
                let ty = param.arg_type(true);
                quote! { #ident: #ty }
            });
            let body_arg = body.as_ref().map(|body| {
                let ty = body_type(body, true);
                quote! { body: #ty }
            });
            (quote! { #(#args,)* #body_arg }, quote! {})
        };

        let param_calls = params.iter().map(|param| {
            let ident = &param.ident;
            let access = if grouped {
                quote! { params.#ident }
            } else {
                quote! { #ident }
            };
            let spec = param.spec();
            let arg = param.arg(&access, !grouped);
            quote! { .param(#spec, #arg)? }
        });
        let body_access = if grouped {
            quote! { params.body }
        } else {
            quote! { body }
        };
        let attach_body = body
            .as_ref()
            .map(|body| attach_body(body, &body_access, grouped));

        let start = match method {
            HttpMethod::Get => quote! { client.get(#path) },
            HttpMethod::Put => quote! { client.put(#path) },
            HttpMethod::Post => quote! { client.post(#path) },
            HttpMethod::Delete => quote! { client.delete(#path) },
            HttpMethod::Patch => quote! { client.patch(#path) },
            HttpMethod::Head | HttpMethod::Options => {
                let constant = format_ident!("{}", method.constant());
                quote! { client.call(Method::#constant, #path) }
            }
        };

        let Responses {
            success_type,
            error_type,
            enums,
            table,
        } = responses;

        let summary = operation.summary.as_deref();
        let description = operation.description.as_deref();
        let route = format!("`{method} {path}`");
        let mut docs = summary.into_iter().chain(description).collect::<Vec<_>>();
        if !docs.is_empty() {
            docs.push("");
        }
        docs.push(route.as_str());
        let docs = doc_attrs(docs);
        let deprecated = operation.deprecated.then(|| quote! { #[deprecated] });

        let output = quote! { Result<TypedResponse<#success_type, #error_type>, ApiClientError> };
        let item = quote! {
            #params_struct

            #enums

            #docs
            #deprecated
            pub async fn #fn_ident<E: HttpExecutor>(
                client: &ApiClient<E>,
                #signature_args
            ) -> #output {
                let call = #start
                    #(#param_calls)*
                    #(#auth)*;
                #attach_body
                let responses = ResponseTable::new()
                    #table;
                client.execute(call, &responses).await
            }
        };
        debug!(operation = %raw_name, %method, path, "operation generated");
        self.items.push(item);

        if let Some(tag) = operation.tags.first() {
            let forward = Forward {
                fn_ident: &fn_ident,
                fn_name: &fn_name,
                type_prefix: &type_prefix,
                params: &params,
                body: body.as_ref(),
                grouped,
                output,
                docs: &docs,
                deprecated: operation.deprecated,
            };
            self.facade_method(tag, &forward)?;
        }
        Ok(())
    }

    /// Adds the facade method of an operation under its first tag.
    ///
    /// The method is the function name without the `{tag}_` prefix.
    fn facade_method(&mut self, tag: &str, forward: &Forward<'_>) -> Result<(), GeneratorError> {
        let facade = self
            .facades
            .entry(naming::type_name(tag))
            .or_insert_with(|| Facade {
                tag: tag.to_string(),
                method_names: HashSet::from(["new".to_string()]),
                methods: Vec::new(),
            });
        let prefix = format!("{}_", naming::field_name(tag));
        let name = forward
            .fn_name
            .strip_prefix(&prefix)
            .filter(|rest| !rest.is_empty())
            .unwrap_or(forward.fn_name);
        let name = naming::claim_unique(name.to_string(), &mut facade.method_names);
        let method = naming::ident(&name)?;

        let fn_ident = forward.fn_ident;
        let docs = forward.docs;
        let output = &forward.output;
        let deprecated = forward
            .deprecated
            .then(|| quote! { #[deprecated] #[allow(deprecated)] });

        if forward.grouped {
            let params_ident = format_ident!("{}Params", forward.type_prefix);
            facade.methods.push(quote! {
                #docs
                #deprecated
                pub async fn #method(&self, params: #params_ident) -> #output {
                    #fn_ident(self.client, params).await
                }
            });
            return Ok(());
        }

        let optional = forward
            .params
            .iter()
            .filter(|param| !param.required)
            .collect::<Vec<_>>();
        let mut signature = forward
            .params
            .iter()
            .filter(|param| param.required)
            .map(|param| {
                let ident = &param.ident;
                let ty = param.arg_type(true);
                quote! { #ident: #ty }
            })
            .collect::<Vec<_>>();
        let mut args = forward
            .params
            .iter()
            .map(|param| {
                if param.required {
                    let ident = &param.ident;
                    quote! { #ident }
                } else {
                    param.from_options()
                }
            })
            .collect::<Vec<_>>();
        if let Some(body) = forward.body {
            let ty = body_type(body, true);
            signature.push(quote! { body: #ty });
            args.push(quote! { body });
        }

        let mut unpack = quote! {};
        if !optional.is_empty() {
            let options_ident = format_ident!("{}Options", forward.type_prefix);
            signature.push(quote! { options: Option<#options_ident> });
            unpack = quote! { let options = options.unwrap_or_default(); };

            let fields = optional.iter().map(|param| {
                let ident = &param.ident;
                let ty = param.arg_type(false);
                let docs = doc_attrs(param.description.as_deref());
                quote! {
                    #docs
                    pub #ident: #ty,
                }
            });
            let doc = format!(" Optional parameters of [`{}`].", forward.fn_name);
            self.items.push(quote! {
                #[doc = #doc]
                #[derive(Debug, Clone, Default)]
                pub struct #options_ident {
                    #(#fields)*
                }
            });
        }

        facade.methods.push(quote! {
            #docs
            #deprecated
            pub async fn #method(&self, #(#signature),*) -> #output {
                #unpack
                #fn_ident(self.client, #(#args),*).await
            }
        });
        Ok(())
    }

    /// One struct per tag, and the `Resources` accessors on `ApiClient`.
    fn facades(&self) -> Result<TokenStream, GeneratorError> {
        if self.facades.is_empty() {
            return Ok(quote! {});
        }
        let document = self.ctx.resolver().document();
        let mut accessor_names = HashSet::new();
        let mut structs = Vec::with_capacity(self.facades.len());
        let mut declarations = Vec::with_capacity(self.facades.len());
        let mut accessors = Vec::with_capacity(self.facades.len());
        for (type_name, facade) in &self.facades {
            let ident = naming::ident(&format!("{type_name}Api"))?;
            let accessor = naming::claim_unique(naming::field_name(&facade.tag), &mut accessor_names);
            let accessor = naming::ident(&accessor)?;
            let summary = format!("Operations tagged `{}`.", facade.tag);
            let description = document
                .tags
                .iter()
                .find(|tag| tag.name == facade.tag)
                .and_then(|tag| tag.description.as_deref());
            let docs = doc_attrs([summary.as_str()].into_iter().chain(description));
            let methods = &facade.methods;
            structs.push(quote! {
                #docs
                #[derive(Debug)]
                pub struct #ident<'a, E> {
                    client: &'a ApiClient<E>,
                }

                impl<'a, E: HttpExecutor> #ident<'a, E> {
                    /// Wraps a client.
                    pub fn new(client: &'a ApiClient<E>) -> Self {
                        Self { client }
                    }

                    #(#methods)*
                }
            });
            let accessor_doc = format!(" {summary}");
            declarations.push(quote! {
                #[doc = #accessor_doc]
                fn #accessor(&self) -> #ident<'_, E>;
            });
            accessors.push(quote! {
                fn #accessor(&self) -> #ident<'_, E> {
                    #ident::new(self)
                }
            });
        }
        Ok(quote! {
            #(#structs)*

            /// Facades grouping the operations by tag.
            pub trait Resources<E> {
                #(#declarations)*
            }

            impl<E: HttpExecutor> Resources<E> for ApiClient<E> {
                #(#accessors)*
            }
        })
    }

    /// Path-level parameters, overridden by operation-level ones.
    fn parameters(
        &self,
        item: &PathItem,
        operation: &Operation,
    ) -> Result<Vec<OpParam>, GeneratorError> {
        let document = self.ctx.resolver().document();
        let mut merged: Vec<&Parameter> = Vec::new();
        for parameter in item.parameters.iter().chain(&operation.parameters) {
            let parameter = document.parameter(parameter)?;
            merged.retain(|known| {
                known.name != parameter.name || known.location != parameter.location
            });
            merged.push(parameter);
        }

        let mut params = Vec::with_capacity(merged.len());
        for parameter in merged {
            let carrier = match parameter.location {
                ParameterLocation::Path => Carrier::Path,
                ParameterLocation::Query => Carrier::Query,
                ParameterLocation::Header => Carrier::Header,
                ParameterLocation::Cookie => {
                    warn!(name = %parameter.name, "cookie parameters are not supported, skipped");
                    continue;
                }
            };
            let (ty, nullable) = match &parameter.schema {
                Some(schema) => (
                    self.ctx.resolver().resolve(schema)?,
                    self.ctx.resolver().is_nullable(schema)?,
                ),
                None => (RustType::String, false),
            };
            params.push(OpParam {
                wire_name: parameter.name.clone(),
                ident: naming::ident(&naming::field_name(&parameter.name))?,
                carrier,
                ty,
                required: parameter.required || carrier == Carrier::Path,
                nullable,
                description: parameter.description.clone(),
            });
        }
        Ok(params)
    }

    /// The body argument; form bodies are spread into form parameters.
    fn body(
        &self,
        operation: &Operation,
        params: &mut Vec<OpParam>,
    ) -> Result<Option<Body>, GeneratorError> {
        let Some(body) = &operation.request_body else {
            return Ok(None);
        };
        let resolver = self.ctx.resolver();
        let body = resolver.document().request_body(body)?;

        if let Some(schema) = json_schema(&body.content) {
            let ty = resolver.resolve(schema)?;
            return Ok(Some(Body::Json {
                ty,
                required: body.required,
            }));
        }

        let form = body
            .content
            .iter()
            .find(|(media_type, _)| {
                media_type.starts_with(FORM_URLENCODED) || media_type.starts_with(MULTIPART)
            });
        if let Some((_, media)) = form {
            let Some(schema) = &media.schema else {
                return Ok(None);
            };
            let schema = resolver.document().schema(schema)?;
            for (name, property) in &schema.properties {
                let ty = resolver.resolve_form_field(property)?;
                let carrier = if ty.is_file() {
                    Carrier::FormFile
                } else {
                    Carrier::Form
                };
                params.push(OpParam {
                    wire_name: name.clone(),
                    ident: naming::ident(&naming::field_name(name))?,
                    carrier,
                    nullable: !ty.is_file() && resolver.is_nullable(property)?,
                    ty,
                    required: body.required && schema.required.contains(name),
                    description: resolver.document().schema(property)?.description.clone(),
                });
            }
            return Ok(None);
        }

        if body.content.keys().any(|media_type| media_type.starts_with(TEXT_PLAIN)) {
            return Ok(Some(Body::Text {
                required: body.required,
            }));
        }

        warn!(
            operation = ?operation.operation_id,
            media_types = ?body.content.keys().collect::<Vec<_>>(),
            "unsupported request body, skipped"
        );
        Ok(None)
    }

    fn responses(
        &self,
        type_prefix: &str,
        operation: &Operation,
    ) -> Result<Responses, GeneratorError> {
        let resolver = self.ctx.resolver();
        let mut entries = Vec::new();
        for (raw_key, response) in &operation.responses {
            let Some((key, variant, success)) = status_key(raw_key) else {
                warn!(key = %raw_key, "invalid response key, skipped");
                continue;
            };
            let response = resolver.document().response(response)?;
            let ty = json_schema(&response.content)
                .map(|schema| resolver.resolve(schema))
                .transpose()?;
            entries.push(ResponseEntry {
                key,
                variant,
                success,
                ty,
            });
        }

        let (success_type, success_enum, success_table) =
            response_side(&format!("{type_prefix}Success"), &entries, true)?;
        let (error_type, error_enum, error_table) =
            response_side(&format!("{type_prefix}Error"), &entries, false)?;
        let no_content = entries
            .iter()
            .filter(|entry| entry.success && entry.ty.is_none())
            .map(|entry| {
                let key = &entry.key;
                quote! { .no_content(#key) }
            });

        Ok(Responses {
            success_type,
            error_type,
            enums: quote! { #success_enum #error_enum },
            table: quote! { #success_table #(#no_content)* #error_table },
        })
    }

    /// `with_auth` calls, in declaration order.
    fn auth(&self, operation: &Operation) -> Vec<TokenStream> {
        let document = self.ctx.resolver().document();
        let requirements = operation.security.as_ref().unwrap_or(&document.security);
        requirements
            .iter()
            .flat_map(|requirement| requirement.keys())
            .filter_map(|name| {
                let Some(scheme) = document.components.security_schemes.get(name) else {
                    warn!(%name, "unknown security scheme, skipped");
                    return None;
                };
                let scheme = match scheme {
                    SecurityScheme::ApiKey {
                        name,
                        location: ApiKeyIn::Header,
                    } => quote! { AuthScheme::api_key_header(#name) },
                    SecurityScheme::ApiKey {
                        name,
                        location: ApiKeyIn::Query,
                    } => quote! { AuthScheme::api_key_query(#name) },
                    SecurityScheme::ApiKey {
                        location: ApiKeyIn::Cookie,
                        ..
                    } => {
                        warn!(%name, "cookie API keys are not supported, skipped");
                        return None;
                    }
                    SecurityScheme::Http { scheme } if scheme.eq_ignore_ascii_case("basic") => {
                        quote! { AuthScheme::Basic }
                    }
                    SecurityScheme::Http { scheme } if scheme.eq_ignore_ascii_case("bearer") => {
                        quote! { AuthScheme::Bearer }
                    }
                    SecurityScheme::Http { scheme } => {
                        warn!(%name, %scheme, "unsupported HTTP authentication scheme, skipped");
                        return None;
                    }
                    SecurityScheme::OAuth2 { .. } | SecurityScheme::OpenIdConnect { .. } => {
                        quote! { AuthScheme::OAuth2 }
                    }
                };
                Some(quote! { .with_auth(#scheme) })
            })
            .collect()
    }
}

/// Renames parameters that collide with each other or with [`RESERVED_ARGS`].
fn disambiguate(params: &mut [OpParam]) -> Result<(), GeneratorError> {
    let mut taken = RESERVED_ARGS
        .iter()
        .map(ToString::to_string)
        .collect::<HashSet<_>>();
    for param in params {
        let name = naming::claim_unique(naming::unraw(&param.ident), &mut taken);
        param.ident = naming::ident(&name)?;
    }
    Ok(())
}

/// `200` → `StatusKey::Code(200)`, `4XX` → `StatusKey::Class(4)`,
/// `default` → `StatusKey::Default`; with the enum variant name and whether
/// the key is a success (2xx and 3xx).
fn status_key(raw: &str) -> Option<(TokenStream, Ident, bool)> {
    if raw.eq_ignore_ascii_case("default") {
        return Some((quote! { StatusKey::Default }, format_ident!("Default"), false));
    }
    let bytes = raw.as_bytes();
    if let [class @ b'1'..=b'5', x1, x2] = bytes
        && x1.eq_ignore_ascii_case(&b'x')
        && x2.eq_ignore_ascii_case(&b'x')
    {
        let class = class - b'0';
        let literal = Literal::u8_unsuffixed(class);
        return Some((
            quote! { StatusKey::Class(#literal) },
            format_ident!("Status{}xx", class),
            matches!(class, 2 | 3),
        ));
    }
    let code = raw.parse::<u16>().ok().filter(|code| (100..600).contains(code))?;
    let literal = Literal::u16_unsuffixed(code);
    Some((
        quote! { StatusKey::Code(#literal) },
        format_ident!("Status{}", code),
        (200..400).contains(&code),
    ))
}

/// Type, optional enum and table entries for the success or error side.
///
/// A single payload type is used as is; several distinct ones get an
/// untagged enum with one variant per status key.
fn response_side(
    enum_name: &str,
    entries: &[ResponseEntry],
    success: bool,
) -> Result<(TokenStream, TokenStream, TokenStream), GeneratorError> {
    let typed = entries
        .iter()
        .filter(|entry| entry.success == success)
        .filter_map(|entry| entry.ty.as_ref().map(|ty| (entry, ty)))
        .collect::<Vec<_>>();
    let mut distinct = Vec::<&RustType>::new();
    for (_, ty) in &typed {
        if !distinct.contains(ty) {
            distinct.push(*ty);
        }
    }
    let (declare, declare_with) = if success {
        (quote! { success }, quote! { success_with })
    } else {
        (quote! { error }, quote! { error_with })
    };

    match distinct.as_slice() {
        [] => {
            let fallback = if success {
                quote! { () }
            } else {
                quote! { serde_json::Value }
            };
            Ok((fallback, quote! {}, quote! {}))
        }
        [single] => {
            let entries = typed.iter().map(|(entry, _)| {
                let key = &entry.key;
                quote! { .#declare(#key) }
            });
            Ok((quote! { #single }, quote! {}, quote! { #(#entries)* }))
        }
        _ => {
            let ident = naming::ident(enum_name)?;
            let variants = typed.iter().map(|(entry, ty)| {
                let variant = &entry.variant;
                quote! { #variant(#ty) }
            });
            let table = typed.iter().map(|(entry, _)| {
                let key = &entry.key;
                let variant = &entry.variant;
                quote! { .#declare_with(#key, #ident::#variant) }
            });
            let doc = format!(" Payloads of `{enum_name}` responses, one variant per status.");
            let declaration = quote! {
                #[doc = #doc]
                #[derive(Debug, Clone, PartialEq, Serialize)]
                #[serde(untagged)]
                pub enum #ident {
                    #(#variants,)*
                }
            };
            Ok((quote! { #ident }, declaration, quote! { #(#table)* }))
        }
    }
}

fn body_type(body: &Body, borrowed: bool) -> TokenStream {
    let inner = match (body, borrowed) {
        (Body::Json { ty, .. }, true) => quote! { &#ty },
        (Body::Json { ty, .. }, false) => quote! { #ty },
        (Body::Text { .. }, true) => quote! { &str },
        (Body::Text { .. }, false) => quote! { String },
    };
    let required = match body {
        Body::Json { required, .. } | Body::Text { required } => *required,
    };
    if required {
        inner
    } else {
        quote! { Option<#inner> }
    }
}

fn attach_body(body: &Body, access: &TokenStream, grouped: bool) -> TokenStream {
    let reference = grouped.then(|| quote! { & });
    match body {
        Body::Json { required: true, .. } => quote! {
            let call = call.json(#reference #access)?;
        },
        Body::Json { required: false, .. } => quote! {
            let call = match #reference #access {
                Some(body) => call.json(body)?,
                None => call,
            };
        },
        Body::Text { required: true } => quote! {
            let call = call.text(#reference #access);
        },
        Body::Text { required: false } => quote! {
            let call = match #reference #access {
                Some(body) => call.text(body),
                None => call,
            };
        },
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::code("200", "StatusKey :: Code (200)", "Status200", true)]
    #[case::class("4XX", "StatusKey :: Class (4)", "Status4xx", false)]
    #[case::success_class("2xx", "StatusKey :: Class (2)", "Status2xx", true)]
    #[case::not_modified("304", "StatusKey :: Code (304)", "Status304", true)]
    #[case::default("default", "StatusKey :: Default", "Default", false)]
    fn should_parse_status_keys(
        #[case] raw: &str,
        #[case] key: &str,
        #[case] variant: &str,
        #[case] success: bool,
    ) {
        let (tokens, ident, is_success) = status_key(raw).expect("valid key");

        assert_eq!(tokens.to_string(), key);
        assert_eq!(ident.to_string(), variant);
        assert_eq!(is_success, success);
    }

    #[test]
    fn should_reject_invalid_status_key() {
        assert!(status_key("6XX").is_none());
        assert!(status_key("ok").is_none());
    }
}
