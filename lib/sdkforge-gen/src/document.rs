//! The subset of an OpenAPI 3.0 / 3.1 document the generator reads.
//!
//! Unknown keys are ignored, so full documents load as long as the parts
//! below are well formed.

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::errors::GeneratorError;

const SCHEMA_PREFIX: &str = "#/components/schemas/";
const PARAMETER_PREFIX: &str = "#/components/parameters/";
const REQUEST_BODY_PREFIX: &str = "#/components/requestBodies/";
const RESPONSE_PREFIX: &str = "#/components/responses/";

/// Security requirement: scheme name to scopes.
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// Root of an OpenAPI document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenApiDocument {
    /// The OpenAPI version, `3.0.x` or `3.1.x`.
    pub openapi: String,
    /// API metadata.
    pub info: Info,
    /// Server URLs.
    #[serde(default)]
    pub servers: Vec<Server>,
    /// Operations grouped by path template.
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
    /// Reusable components.
    #[serde(default)]
    pub components: Components,
    /// Document-wide security requirements.
    #[serde(default)]
    pub security: Vec<SecurityRequirement>,
    /// Tag declarations.
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// A tag declaration; operations refer to it by name.
#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    /// The tag name.
    pub name: String,
    /// What the tagged operations are about.
    #[serde(default)]
    pub description: Option<String>,
}

/// API metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct Info {
    /// API title.
    pub title: String,
    /// API version.
    pub version: String,
    /// API description.
    #[serde(default)]
    pub description: Option<String>,
}

/// A server entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    /// The server URL.
    pub url: String,
    /// A description of the server.
    #[serde(default)]
    pub description: Option<String>,
}

/// Either a `$ref` or an inline item.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ReferenceOr<T> {
    /// A JSON reference.
    Reference {
        /// The `$ref` target.
        #[serde(rename = "$ref")]
        reference: String,
    },
    /// An inline item.
    Item(T),
}

impl<T> ReferenceOr<T> {
    /// The reference target, if any.
    pub fn reference(&self) -> Option<&str> {
        match self {
            Self::Reference { reference } => Some(reference),
            Self::Item(_) => None,
        }
    }

    /// The inline item, if any.
    pub fn as_item(&self) -> Option<&T> {
        match self {
            Self::Reference { .. } => None,
            Self::Item(item) => Some(item),
        }
    }
}

/// HTTP methods carrying operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `PUT`
    Put,
    /// `POST`
    Post,
    /// `DELETE`
    Delete,
    /// `PATCH`
    Patch,
    /// `HEAD`
    Head,
    /// `OPTIONS`
    Options,
}

impl HttpMethod {
    /// The lowercase method name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Put => "put",
            Self::Post => "post",
            Self::Delete => "delete",
            Self::Patch => "patch",
            Self::Head => "head",
            Self::Options => "options",
        }
    }

    /// The `http::Method` constant name.
    pub fn constant(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.constant())
    }
}

/// Operations of one path template.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathItem {
    /// Parameters shared by every operation of the path.
    #[serde(default)]
    pub parameters: Vec<ReferenceOr<Parameter>>,
    #[serde(default)]
    get: Option<Operation>,
    #[serde(default)]
    put: Option<Operation>,
    #[serde(default)]
    post: Option<Operation>,
    #[serde(default)]
    delete: Option<Operation>,
    #[serde(default)]
    patch: Option<Operation>,
    #[serde(default)]
    head: Option<Operation>,
    #[serde(default)]
    options: Option<Operation>,
}

impl PathItem {
    /// Declared operations, in method order.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> {
        [
            (HttpMethod::Get, &self.get),
            (HttpMethod::Put, &self.put),
            (HttpMethod::Post, &self.post),
            (HttpMethod::Delete, &self.delete),
            (HttpMethod::Patch, &self.patch),
            (HttpMethod::Head, &self.head),
            (HttpMethod::Options, &self.options),
        ]
        .into_iter()
        .filter_map(|(method, operation)| operation.as_ref().map(|op| (method, op)))
    }
}

/// An API operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Unique operation identifier.
    #[serde(default)]
    pub operation_id: Option<String>,
    /// Short summary.
    #[serde(default)]
    pub summary: Option<String>,
    /// Long description.
    #[serde(default)]
    pub description: Option<String>,
    /// Operation parameters.
    #[serde(default)]
    pub parameters: Vec<ReferenceOr<Parameter>>,
    /// Request body.
    #[serde(default)]
    pub request_body: Option<ReferenceOr<RequestBody>>,
    /// Responses keyed by status code, status class or `default`.
    #[serde(default)]
    pub responses: IndexMap<String, ReferenceOr<Response>>,
    /// Operation security; `None` inherits the document security.
    #[serde(default)]
    pub security: Option<Vec<SecurityRequirement>>,
    /// Deprecation flag.
    #[serde(default)]
    pub deprecated: bool,
    /// Tags grouping the operation into resources.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Parameter location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// Path template placeholder.
    Path,
    /// Query string.
    Query,
    /// Request header.
    Header,
    /// Cookie.
    Cookie,
}

/// An operation parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
    /// Wire name.
    pub name: String,
    /// Location.
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    /// Required flag; path parameters are always required.
    #[serde(default)]
    pub required: bool,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Value schema.
    #[serde(default)]
    pub schema: Option<ReferenceOr<Schema>>,
}

/// Request body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestBody {
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Required flag.
    #[serde(default)]
    pub required: bool,
    /// Payload schemas by media type.
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

/// Response description.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Payload schemas by media type.
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

/// Payload of one media type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaType {
    /// Payload schema.
    #[serde(default)]
    pub schema: Option<ReferenceOr<Schema>>,
}

/// Finds the JSON payload schema of a content map.
pub fn json_schema(content: &IndexMap<String, MediaType>) -> Option<&ReferenceOr<Schema>> {
    content
        .iter()
        .find(|(media_type, _)| is_json_media_type(media_type))
        .and_then(|(_, media)| media.schema.as_ref())
}

fn is_json_media_type(media_type: &str) -> bool {
    let essence = media_type.split(';').next().unwrap_or_default().trim();
    essence == "application/json" || essence.ends_with("+json")
}

/// Reusable components.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    /// Named schemas.
    #[serde(default)]
    pub schemas: IndexMap<String, ReferenceOr<Schema>>,
    /// Named parameters.
    #[serde(default)]
    pub parameters: IndexMap<String, Parameter>,
    /// Named request bodies.
    #[serde(default)]
    pub request_bodies: IndexMap<String, RequestBody>,
    /// Named responses.
    #[serde(default)]
    pub responses: IndexMap<String, Response>,
    /// Named security schemes.
    #[serde(default)]
    pub security_schemes: IndexMap<String, SecurityScheme>,
}

/// A security scheme.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum SecurityScheme {
    /// API key in a header, query parameter or cookie.
    #[serde(rename = "apiKey")]
    ApiKey {
        /// Header or query parameter name.
        name: String,
        /// Where the key goes.
        #[serde(rename = "in")]
        location: ApiKeyIn,
    },
    /// HTTP authentication (`basic`, `bearer`).
    #[serde(rename = "http")]
    Http {
        /// The HTTP scheme name.
        scheme: String,
    },
    /// OAuth 2 flows.
    #[serde(rename = "oauth2")]
    OAuth2 {
        /// Flow definitions, unused by the generator.
        #[serde(default)]
        flows: serde_json::Value,
    },
    /// OpenID Connect discovery.
    #[serde(rename = "openIdConnect")]
    OpenIdConnect {
        /// Discovery URL.
        #[serde(rename = "openIdConnectUrl", default)]
        url: Option<String>,
    },
}

/// API key location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyIn {
    /// Request header.
    Header,
    /// Query string.
    Query,
    /// Cookie.
    Cookie,
}

/// `type` keyword: a single name (3.0) or a list of names (3.1).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    /// A single type name.
    Single(String),
    /// Several type names, typically `[T, "null"]`.
    Multiple(Vec<String>),
}

impl SchemaType {
    /// The first non-`null` type name.
    pub fn primary(&self) -> Option<&str> {
        match self {
            Self::Single(name) => Some(name.as_str()).filter(|name| *name != "null"),
            Self::Multiple(names) => names.iter().map(String::as_str).find(|name| *name != "null"),
        }
    }

    /// Whether `null` is one of the type names.
    pub fn includes_null(&self) -> bool {
        match self {
            Self::Single(name) => name == "null",
            Self::Multiple(names) => names.iter().any(|name| name == "null"),
        }
    }
}

/// `additionalProperties` keyword.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    /// `true` or `false`.
    Allowed(bool),
    /// The value schema.
    Schema(Box<ReferenceOr<Schema>>),
}

/// A JSON schema.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// The `type` keyword.
    #[serde(rename = "type", default)]
    pub schema_type: Option<SchemaType>,
    /// The `format` keyword.
    #[serde(default)]
    pub format: Option<String>,
    /// The OpenAPI 3.0 `nullable` keyword.
    #[serde(default)]
    pub nullable: bool,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Required property names.
    #[serde(default)]
    pub required: Vec<String>,
    /// Object properties, in declaration order.
    #[serde(default)]
    pub properties: IndexMap<String, ReferenceOr<Schema>>,
    /// Array items.
    #[serde(default)]
    pub items: Option<Box<ReferenceOr<Schema>>>,
    /// Map values.
    #[serde(default)]
    pub additional_properties: Option<AdditionalProperties>,
    /// Allowed values.
    #[serde(rename = "enum", default)]
    pub enum_values: Option<Vec<serde_json::Value>>,
    /// Composition by intersection.
    #[serde(default)]
    pub all_of: Vec<ReferenceOr<Schema>>,
    /// Composition by exclusive union.
    #[serde(default)]
    pub one_of: Vec<ReferenceOr<Schema>>,
    /// Composition by union.
    #[serde(default)]
    pub any_of: Vec<ReferenceOr<Schema>>,
    /// Deprecation flag.
    #[serde(default)]
    pub deprecated: bool,
}

impl Schema {
    /// The first non-`null` type name.
    pub fn primary_type(&self) -> Option<&str> {
        self.schema_type.as_ref().and_then(SchemaType::primary)
    }

    /// Whether the schema admits `null`.
    ///
    /// Covers the 3.0 `nullable` keyword, the 3.1 `[T, "null"]` type list and
    /// `anyOf` / `oneOf` unions with a `null` member.
    pub fn is_nullable(&self) -> bool {
        self.nullable
            || self
                .schema_type
                .as_ref()
                .is_some_and(SchemaType::includes_null)
            || self
                .any_of
                .iter()
                .chain(&self.one_of)
                .any(|member| member.as_item().is_some_and(Schema::is_null))
    }

    /// Whether the schema only admits `null`.
    pub fn is_null(&self) -> bool {
        self.schema_type
            .as_ref()
            .is_some_and(|schema_type| schema_type.includes_null() && schema_type.primary().is_none())
    }

    /// Whether the schema describes an object with properties.
    pub fn is_object(&self) -> bool {
        !self.properties.is_empty() && matches!(self.primary_type(), Some("object") | None)
    }

    /// String values of a string enumeration.
    pub fn string_enum(&self) -> Option<Vec<&str>> {
        if !matches!(self.primary_type(), Some("string") | None) {
            return None;
        }
        let values = self.enum_values.as_ref()?;
        values
            .iter()
            .filter(|value| !value.is_null())
            .map(serde_json::Value::as_str)
            .collect()
    }

    /// Union members other than `null`.
    pub fn non_null_members(&self) -> Vec<&ReferenceOr<Schema>> {
        self.any_of
            .iter()
            .chain(&self.one_of)
            .filter(|member| !member.as_item().is_some_and(Schema::is_null))
            .collect()
    }
}

impl OpenApiDocument {
    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Parse`] with the failing JSON path.
    pub fn from_json(text: &str) -> Result<Self, GeneratorError> {
        let deserializer = &mut serde_json::Deserializer::from_str(text);
        serde_path_to_error::deserialize(deserializer).map_err(|err| GeneratorError::Parse {
            message: format!("{} at '{}'", err.inner(), err.path()),
        })
    }

    /// Parses a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Parse`] when the YAML is invalid.
    pub fn from_yaml(text: &str) -> Result<Self, GeneratorError> {
        serde_saphyr::from_str(text).map_err(|err| GeneratorError::Parse {
            message: err.to_string(),
        })
    }

    /// Loads a document, as YAML for `.yaml` / `.yml` files and as JSON otherwise.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, GeneratorError> {
        let text = std::fs::read_to_string(path).map_err(|error| GeneratorError::Io {
            path: path.display().to_string(),
            error,
        })?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| matches!(ext, "yaml" | "yml"));
        debug!(path = %path.display(), is_yaml, "loading OpenAPI document");
        if is_yaml {
            Self::from_yaml(&text)
        } else {
            Self::from_json(&text)
        }
    }

    /// Resolves a `#/components/schemas/...` reference to its name and schema.
    ///
    /// Chained references are followed.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::UnresolvedReference`] for unknown targets.
    pub fn resolve_schema<'a>(
        &'a self,
        reference: &'a str,
    ) -> Result<(&'a str, &'a Schema), GeneratorError> {
        let mut current = reference;
        // bounded to catch reference cycles
        for _ in 0..=self.components.schemas.len() {
            let (name, target) = lookup(current, SCHEMA_PREFIX, &self.components.schemas)?;
            match target {
                ReferenceOr::Item(schema) => return Ok((name, schema)),
                ReferenceOr::Reference { reference } => current = reference,
            }
        }
        Err(unresolved(reference))
    }

    /// Returns the inline schema, or the target of a reference.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::UnresolvedReference`] for unknown targets.
    pub fn schema<'a>(&'a self, schema: &'a ReferenceOr<Schema>) -> Result<&'a Schema, GeneratorError> {
        match schema {
            ReferenceOr::Item(schema) => Ok(schema),
            ReferenceOr::Reference { reference } => Ok(self.resolve_schema(reference)?.1),
        }
    }

    /// Returns the inline parameter, or the target of a reference.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::UnresolvedReference`] for unknown targets.
    pub fn parameter<'a>(
        &'a self,
        parameter: &'a ReferenceOr<Parameter>,
    ) -> Result<&'a Parameter, GeneratorError> {
        match parameter {
            ReferenceOr::Item(parameter) => Ok(parameter),
            ReferenceOr::Reference { reference } => {
                lookup(reference, PARAMETER_PREFIX, &self.components.parameters).map(|(_, it)| it)
            }
        }
    }

    /// Returns the inline request body, or the target of a reference.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::UnresolvedReference`] for unknown targets.
    pub fn request_body<'a>(
        &'a self,
        body: &'a ReferenceOr<RequestBody>,
    ) -> Result<&'a RequestBody, GeneratorError> {
        match body {
            ReferenceOr::Item(body) => Ok(body),
            ReferenceOr::Reference { reference } => {
                lookup(reference, REQUEST_BODY_PREFIX, &self.components.request_bodies)
                    .map(|(_, it)| it)
            }
        }
    }

    /// Returns the inline response, or the target of a reference.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::UnresolvedReference`] for unknown targets.
    pub fn response<'a>(
        &'a self,
        response: &'a ReferenceOr<Response>,
    ) -> Result<&'a Response, GeneratorError> {
        match response {
            ReferenceOr::Item(response) => Ok(response),
            ReferenceOr::Reference { reference } => {
                lookup(reference, RESPONSE_PREFIX, &self.components.responses).map(|(_, it)| it)
            }
        }
    }
}

fn lookup<'a, T>(
    reference: &str,
    prefix: &str,
    items: &'a IndexMap<String, T>,
) -> Result<(&'a str, &'a T), GeneratorError> {
    reference
        .strip_prefix(prefix)
        .and_then(|name| items.get_key_value(name))
        .map(|(name, item)| (name.as_str(), item))
        .ok_or_else(|| unresolved(reference))
}

fn unresolved(reference: &str) -> GeneratorError {
    GeneratorError::UnresolvedReference {
        reference: reference.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r##"{
        "openapi": "3.1.0",
        "info": {"title": "Demo", "version": "1.0.0"},
        "tags": [{"name": "Application", "description": "Consumer applications."}],
        "paths": {
            "/api/v1/app/{app_id}": {
                "parameters": [{"$ref": "#/components/parameters/AppId"}],
                "get": {"operationId": "v1.application.get", "tags": ["Application"], "responses": {}},
                "delete": {"operationId": "v1.application.delete", "responses": {}}
            }
        },
        "components": {
            "parameters": {
                "AppId": {"name": "app_id", "in": "path", "required": true, "schema": {"type": "string"}}
            },
            "schemas": {
                "AppOut": {
                    "type": "object",
                    "required": ["id"],
                    "properties": {
                        "id": {"type": "string"},
                        "uid": {"type": ["string", "null"]}
                    }
                },
                "AppAlias": {"$ref": "#/components/schemas/AppOut"}
            },
            "securitySchemes": {
                "HTTPBearer": {"type": "http", "scheme": "bearer"},
                "ApiKey": {"type": "apiKey", "name": "X-Api-Key", "in": "header"}
            }
        }
    }"##;

    #[test]
    fn should_parse_json_document() -> Result<(), GeneratorError> {
        let document = OpenApiDocument::from_json(DOCUMENT)?;

        let item = &document.paths["/api/v1/app/{app_id}"];
        let methods = item
            .operations()
            .map(|(method, op)| (method, op.operation_id.clone()))
            .collect::<Vec<_>>();
        assert_eq!(
            methods,
            vec![
                (HttpMethod::Get, Some("v1.application.get".to_string())),
                (HttpMethod::Delete, Some("v1.application.delete".to_string())),
            ]
        );
        let param = document.parameter(&item.parameters[0])?;
        assert_eq!(param.location, ParameterLocation::Path);
        assert!(matches!(
            document.components.security_schemes["HTTPBearer"],
            SecurityScheme::Http { ref scheme } if scheme == "bearer"
        ));
        Ok(())
    }

    #[test]
    fn should_parse_tags() -> Result<(), GeneratorError> {
        let document = OpenApiDocument::from_json(DOCUMENT)?;

        let item = &document.paths["/api/v1/app/{app_id}"];
        let tags = item
            .operations()
            .map(|(_, op)| op.tags.clone())
            .collect::<Vec<_>>();
        assert_eq!(tags, vec![vec!["Application".to_string()], vec![]]);
        assert_eq!(document.tags[0].name, "Application");
        assert_eq!(document.tags[0].description.as_deref(), Some("Consumer applications."));
        Ok(())
    }

    #[test]
    fn should_follow_chained_references() -> Result<(), GeneratorError> {
        let document = OpenApiDocument::from_json(DOCUMENT)?;

        let (name, schema) = document.resolve_schema("#/components/schemas/AppAlias")?;

        assert_eq!(name, "AppOut");
        assert_eq!(schema.required, vec!["id".to_string()]);
        assert!(schema.properties["uid"].as_item().is_some_and(Schema::is_nullable));
        Ok(())
    }

    #[test]
    fn should_report_unknown_reference() -> Result<(), GeneratorError> {
        let document = OpenApiDocument::from_json(DOCUMENT)?;

        let result = document.resolve_schema("#/components/schemas/Missing");

        assert!(matches!(
            result,
            Err(GeneratorError::UnresolvedReference { reference })
                if reference == "#/components/schemas/Missing"
        ));
        Ok(())
    }

    #[test]
    fn should_report_parse_error_path() {
        let result = OpenApiDocument::from_json(r#"{"openapi": "3.0.3", "info": {"title": 1}}"#);

        let Err(GeneratorError::Parse { message }) = result else {
            panic!("expected a parse error");
        };
        assert!(message.contains("info.title"), "{message}");
    }

    #[test]
    fn should_parse_yaml_document() -> Result<(), GeneratorError> {
        let yaml = "
openapi: 3.0.3
info:
  title: Demo
  version: 1.0.0
paths:
  /health:
    get:
      operationId: health
      security: []
      responses:
        '204':
          description: healthy
";
        let document = OpenApiDocument::from_yaml(yaml)?;

        let operation = document.paths["/health"]
            .operations()
            .map(|(_, op)| op)
            .next()
            .expect("one operation");
        assert_eq!(operation.security, Some(vec![]));
        assert!(operation.responses.contains_key("204"));
        Ok(())
    }

    #[test]
    fn should_detect_nullable_schemas() -> Result<(), GeneratorError> {
        let schema: Schema = serde_json::from_str(
            r##"{"anyOf": [{"$ref": "#/components/schemas/AppOut"}, {"type": "null"}]}"##,
        )
        .map_err(|err| GeneratorError::Parse {
            message: err.to_string(),
        })?;

        assert!(schema.is_nullable());
        assert_eq!(schema.non_null_members().len(), 1);
        Ok(())
    }

    #[test]
    fn should_find_json_media_type() {
        let mut content = IndexMap::new();
        content.insert("text/plain".to_string(), MediaType::default());
        content.insert(
            "application/problem+json; charset=utf-8".to_string(),
            MediaType {
                schema: Some(ReferenceOr::Item(Schema::default())),
            },
        );

        assert!(json_schema(&content).is_some());
    }
}
