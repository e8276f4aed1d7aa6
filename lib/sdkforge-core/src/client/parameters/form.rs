use headers::ContentType;

use super::body::CallBody;
use super::param::FilePart;
use crate::client::error::ApiClientError;

/// Form fields of an API call.
///
/// Encoded as `application/x-www-form-urlencoded`, or as
/// `multipart/form-data` as soon as a file part is present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallForm {
    fields: Vec<(String, String)>,
    files: Vec<(String, FilePart)>,
}

impl CallForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a text field.
    pub fn add_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Appends a file part.
    pub fn add_file(&mut self, name: impl Into<String>, file: FilePart) {
        self.files.push((name.into(), file));
    }

    /// `true` without any field or file.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.files.is_empty()
    }

    /// Encodes the form, `None` when it is empty.
    ///
    /// # Errors
    ///
    /// Fails if the fields cannot be url-encoded, or if a multipart field
    /// or file name holds a line break.
    pub fn to_body(&self) -> Result<Option<CallBody>, ApiClientError> {
        if self.is_empty() {
            return Ok(None);
        }
        if self.files.is_empty() {
            let data = serde_urlencoded::to_string(&self.fields)?.into_bytes();
            return Ok(Some(CallBody::raw(data, ContentType::form_url_encoded())));
        }

        let boundary = format!("----formdata-sdkforge-{}", uuid::Uuid::new_v4().simple());
        self.to_multipart(&boundary).map(Some)
    }

    fn to_multipart(&self, boundary: &str) -> Result<CallBody, ApiClientError> {
        let mut body_data = Vec::new();

        for (name, value) in &self.fields {
            let name = disposition_value(name)?;
            body_data.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
            body_data.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
            );
            body_data.extend_from_slice(value.as_bytes());
            body_data.extend_from_slice(b"\r\n");
        }

        for (name, file) in &self.files {
            let name = disposition_value(name)?;
            let file_name = disposition_value(&file.file_name)?;
            body_data.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
            body_data.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n"
                )
                .as_bytes(),
            );
            body_data
                .extend_from_slice(format!("Content-Type: {}\r\n\r\n", file.content_type).as_bytes());
            body_data.extend_from_slice(&file.data);
            body_data.extend_from_slice(b"\r\n");
        }

        body_data.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

        let content_type = format!("multipart/form-data; boundary={boundary}")
            .parse::<mime::Mime>()
            .map_err(|err| ApiClientError::MultipartError {
                message: format!("invalid boundary: {err}"),
            })?;

        Ok(CallBody::raw(body_data, ContentType::from(content_type)))
    }
}

/// Quoted `Content-Disposition` parameter: `"` becomes `%22` as browsers
/// send it, line breaks are rejected.
fn disposition_value(value: &str) -> Result<String, ApiClientError> {
    if value.contains(['\r', '\n']) {
        return Err(ApiClientError::MultipartError {
            message: format!("line break in multipart name {value:?}"),
        });
    }
    Ok(value.replace('"', "%22"))
}
