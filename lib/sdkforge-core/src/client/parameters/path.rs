use std::sync::LazyLock;

use indexmap::{IndexMap, IndexSet};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use tracing::warn;

use crate::client::error::ApiClientError;

/// Regular expression for matching path parameters in the format `{param_name}`.
#[allow(clippy::expect_used)]
static RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(?<name>[^{}/]+)\}").expect("a valid regex"));

/// Unreserved characters (RFC 3986) stay as-is in a path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn replace_path_param(path: &str, param_name: &str, value: &str) -> String {
    let pattern = ["{", param_name, "}"].concat();
    path.replace(&pattern, value)
}

fn encode_path_param_value(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// A path template with its substituted arguments.
///
/// ```rust
/// use sdkforge_core::CallPath;
///
/// let mut path = CallPath::from("/api/v1/app/{app_id}/msg/{msg_id}");
/// path.add_arg("app_id", "app_1");
/// path.add_arg("msg_id", "hello world");
///
/// assert_eq!(path.resolve()?, "/api/v1/app/app_1/msg/hello%20world");
/// # Ok::<(), sdkforge_core::ApiClientError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_more::Display)]
#[display("{path}")]
pub struct CallPath {
    path: String,
    args: IndexMap<String, String>,
}

impl CallPath {
    /// Records the already stringified value of a placeholder.
    ///
    /// Adding the same name twice keeps the last value.
    pub fn add_arg(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.args.insert(name.into(), value.into());
    }

    /// The path template.
    pub fn template(&self) -> &str {
        &self.path
    }

    /// Substitutes every placeholder with its percent-encoded value.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::PathUnresolved`] listing the placeholders
    /// without argument.
    pub fn resolve(&self) -> Result<String, ApiClientError> {
        let mut names: IndexSet<&str> = RE
            .captures_iter(&self.path)
            .filter_map(|caps| caps.name("name"))
            .map(|found| found.as_str())
            .collect();

        let mut path = self.path.clone();
        for (name, value) in &self.args {
            if !names.shift_remove(name.as_str()) {
                warn!(?name, path = %self.path, "argument name not found");
                continue;
            }
            path = replace_path_param(&path, name, &encode_path_param_value(value));
        }

        if names.is_empty() {
            Ok(path)
        } else {
            Err(ApiClientError::PathUnresolved {
                path: self.path.clone(),
                missings: names.into_iter().map(str::to_string).collect(),
            })
        }
    }
}

impl From<&str> for CallPath {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<String> for CallPath {
    fn from(path: String) -> Self {
        Self {
            path,
            args: IndexMap::new(),
        }
    }
}
