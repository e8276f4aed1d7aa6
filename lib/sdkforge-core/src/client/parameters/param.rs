use std::borrow::Cow;
use std::fmt;

use bytes::Bytes;
use serde::Serialize;

use crate::Nullable;
use crate::client::error::ApiClientError;

/// Where a parameter travels on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Carrier {
    /// A `{name}` placeholder of the path template.
    Path,
    /// A `name=value` pair of the query string.
    Query,
    /// A request header.
    Header,
    /// A text field of a form body.
    Form,
    /// A file part of a multipart form body.
    FormFile,
}

/// Static description of an operation parameter.
///
/// Generated operations declare one `ParamSpec` per parameter:
///
/// ```rust
/// use sdkforge_core::ParamSpec;
///
/// let tag = ParamSpec::query("tag").required().nullable().array();
/// assert!(tag.is_required());
/// assert!(tag.is_nullable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    name: Cow<'static, str>,
    carrier: Carrier,
    required: bool,
    nullable: bool,
    array: bool,
}

impl ParamSpec {
    /// Creates an optional, non-nullable, scalar parameter.
    pub fn new(name: impl Into<Cow<'static, str>>, carrier: Carrier) -> Self {
        Self {
            name: name.into(),
            carrier,
            required: false,
            nullable: false,
            array: false,
        }
    }

    /// Path parameters are always required.
    pub fn path(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, Carrier::Path).required()
    }

    /// Creates a query parameter.
    pub fn query(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, Carrier::Query)
    }

    /// Creates a header parameter.
    pub fn header(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, Carrier::Header)
    }

    /// Creates a text form field.
    pub fn form(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, Carrier::Form)
    }

    /// Creates a file form field.
    pub fn form_file(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, Carrier::FormFile)
    }

    /// Marks the parameter as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Allows an explicit `null`.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Declares an array parameter.
    #[must_use]
    pub fn array(mut self) -> Self {
        self.array = true;
        self
    }

    /// The wire name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the parameter travels.
    pub fn carrier(&self) -> Carrier {
        self.carrier
    }

    /// `true` if the parameter must be provided.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// `true` if the parameter accepts an explicit `null`.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// `true` for array parameters.
    pub fn is_array(&self) -> bool {
        self.array
    }

    /// Applies the assembly policy to an argument.
    ///
    /// Returns `Ok(None)` when nothing must be emitted on the wire.
    ///
    /// | arg      | required, non-nullable | required, nullable | optional |
    /// |----------|------------------------|--------------------|----------|
    /// | `Absent` | `MissingParameter`     | `MissingParameter` | omitted  |
    /// | `Null`   | `NullParameter`        | `""`               | omitted  |
    /// | value    | stringified            | stringified        | stringified |
    ///
    /// # Errors
    ///
    /// Returns an error when the policy rejects the argument or when the
    /// value has no string form (objects, nested arrays).
    pub fn resolve(&self, arg: ParamArg) -> Result<Option<ResolvedArg>, ApiClientError> {
        match arg {
            ParamArg::Absent if self.required => Err(ApiClientError::MissingParameter {
                name: self.name.to_string(),
            }),
            ParamArg::Absent => Ok(None),
            ParamArg::Null if !self.required => Ok(None),
            ParamArg::Null if self.nullable => Ok(Some(ResolvedArg::Text(String::new()))),
            ParamArg::Null => Err(ApiClientError::NullParameter {
                name: self.name.to_string(),
            }),
            ParamArg::File(file) if self.carrier == Carrier::FormFile => {
                Ok(Some(ResolvedArg::File(file)))
            }
            ParamArg::File(file) => Err(ApiClientError::UnsupportedParameterValue {
                message: format!("parameter '{}' does not accept a file", self.name),
                value: serde_json::Value::String(file.file_name),
            }),
            ParamArg::Value(value) if self.carrier == Carrier::FormFile => {
                Err(ApiClientError::UnsupportedParameterValue {
                    message: format!("parameter '{}' expects a file", self.name),
                    value,
                })
            }
            ParamArg::Value(value) => self.stringify(&value).map(|text| Some(ResolvedArg::Text(text))),
        }
    }

    fn stringify(&self, value: &serde_json::Value) -> Result<String, ApiClientError> {
        match value {
            serde_json::Value::Array(items) if self.array => {
                let values = items
                    .iter()
                    .map(json_value_to_string)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(values.join(","))
            }
            serde_json::Value::Array(_) => Err(ApiClientError::UnsupportedParameterValue {
                message: format!("parameter '{}' is not an array", self.name),
                value: value.clone(),
            }),
            serde_json::Value::Object(_) => Err(ApiClientError::UnsupportedParameterValue {
                message: "object values not supported in parameters".to_string(),
                value: value.clone(),
            }),
            _ => json_value_to_string(value),
        }
    }
}

fn json_value_to_string(value: &serde_json::Value) -> Result<String, ApiClientError> {
    match value {
        serde_json::Value::String(text) => Ok(text.clone()),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        serde_json::Value::Bool(flag) => Ok(flag.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            Err(ApiClientError::UnsupportedParameterValue {
                message: "nested complex values not supported in parameters".to_string(),
                value: value.clone(),
            })
        }
    }
}

/// File content sent as a multipart part.
#[derive(Clone, PartialEq, Eq)]
pub struct FilePart {
    /// File name announced in the `Content-Disposition`.
    pub file_name: String,
    /// Content type of the part.
    pub content_type: mime::Mime,
    /// Raw content.
    pub data: Bytes,
}

impl FilePart {
    /// Creates an `application/octet-stream` part.
    pub fn new(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: mime::APPLICATION_OCTET_STREAM,
            data: data.into(),
        }
    }

    /// Overrides the content type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: mime::Mime) -> Self {
        self.content_type = content_type;
        self
    }
}

impl fmt::Debug for FilePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilePart")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type.essence_str())
            .field("len", &self.data.len())
            .finish()
    }
}

/// Argument supplied by the caller for one parameter.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ParamArg {
    /// The caller did not provide the parameter.
    #[default]
    Absent,
    /// The caller explicitly provided `null`.
    Null,
    /// A serialized value.
    Value(serde_json::Value),
    /// A file for a multipart part.
    File(FilePart),
}

impl ParamArg {
    /// Wraps a provided value.
    ///
    /// # Errors
    ///
    /// Fails if the value cannot be serialized to JSON.
    pub fn value<T>(value: &T) -> Result<Self, ApiClientError>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(value)?;
        Ok(Self::Value(value))
    }

    /// `None` means the parameter was not provided.
    ///
    /// # Errors
    ///
    /// Fails if the value cannot be serialized to JSON.
    pub fn optional<T>(value: Option<&T>) -> Result<Self, ApiClientError>
    where
        T: Serialize + ?Sized,
    {
        value.map_or(Ok(Self::Absent), Self::value)
    }

    /// `None` means an explicit `null`.
    ///
    /// # Errors
    ///
    /// Fails if the value cannot be serialized to JSON.
    pub fn nullable<T>(value: Option<&T>) -> Result<Self, ApiClientError>
    where
        T: Serialize + ?Sized,
    {
        value.map_or(Ok(Self::Null), Self::value)
    }

    /// Maps the three [`Nullable`] states to `Absent`, `Null` and `Value`.
    ///
    /// # Errors
    ///
    /// Fails if the value cannot be serialized to JSON.
    pub fn from_nullable<T>(value: &Nullable<T>) -> Result<Self, ApiClientError>
    where
        T: Serialize,
    {
        match value {
            Nullable::Unset => Ok(Self::Absent),
            Nullable::Null => Ok(Self::Null),
            Nullable::Value(value) => Self::value(value),
        }
    }
}

impl From<FilePart> for ParamArg {
    fn from(value: FilePart) -> Self {
        Self::File(value)
    }
}

/// Wire-ready argument.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedArg {
    /// Text emitted under the wire name.
    Text(String),
    /// A multipart file part.
    File(FilePart),
}
