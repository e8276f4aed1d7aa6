//! Three-state nullable fields for generated models.
//!
//! JSON distinguishes a missing key from a key holding `null`. [`Nullable`]
//! keeps both apart from a present value:
//!
//! | wire                 | `Nullable`        | `is_set()` | `get()`   |
//! |----------------------|-------------------|------------|-----------|
//! | key absent           | `Unset`           | `false`    | `None`    |
//! | `"key": null`        | `Null`            | `true`     | `None`    |
//! | `"key": "value"`     | `Value("value")`  | `true`     | `Some(_)` |
//!
//! Generated fields carry the attributes that make serde honour the absent
//! state:
//!
//! ```rust
//! use sdkforge_core::Nullable;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! #[serde(deny_unknown_fields)]
//! struct Page {
//!     #[serde(
//!         rename = "prevIterator",
//!         default,
//!         skip_serializing_if = "Nullable::is_unset"
//!     )]
//!     prev_iterator: Nullable<String>,
//! }
//!
//! # fn main() -> Result<(), serde_json::Error> {
//! let page: Page = serde_json::from_str("{}")?;
//! assert!(page.prev_iterator.is_unset());
//!
//! let page: Page = serde_json::from_str(r#"{"prevIterator": null}"#)?;
//! assert!(page.prev_iterator.is_null());
//! assert_eq!(serde_json::to_string(&page)?, r#"{"prevIterator":null}"#);
//! # Ok(())
//! # }
//! ```
//!
//! `#[serde(default)]` only runs when the key is missing from the decoded
//! object, so a present key always goes through [`Nullable`]'s `Deserialize`
//! and ends up `Null` or `Value`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value that may be unset, explicitly null, or present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
    /// The field was never assigned: the key is omitted on the wire.
    Unset,
    /// The field was explicitly set to `null`.
    Null,
    /// The field holds a value.
    Value(T),
}

impl<T> Nullable<T> {
    /// Sets a value and marks the field as set.
    pub fn set(&mut self, value: T) {
        *self = Self::Value(value);
    }

    /// Sets an explicit `null` and marks the field as set.
    pub fn set_null(&mut self) {
        *self = Self::Null;
    }

    /// Clears both the value and the set marker.
    pub fn unset(&mut self) {
        *self = Self::Unset;
    }

    /// Returns the value if present.
    ///
    /// Both `Unset` and `Null` return `None`; use [`Self::is_set`] to tell them apart.
    pub fn get(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Unset | Self::Null => None,
        }
    }

    /// Returns a mutable reference to the value if present.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Unset | Self::Null => None,
        }
    }

    /// `true` once the field was assigned, either with a value or with `null`.
    pub fn is_set(&self) -> bool {
        !self.is_unset()
    }

    /// `true` if the field was never assigned.
    ///
    /// Used by generated models as `skip_serializing_if` predicate.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// `true` if the field holds an explicit `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// `true` if the field holds a value.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Converts from `&Nullable<T>` to `Nullable<&T>`.
    pub fn as_ref(&self) -> Nullable<&T> {
        match self {
            Self::Unset => Nullable::Unset,
            Self::Null => Nullable::Null,
            Self::Value(value) => Nullable::Value(value),
        }
    }

    /// Maps the contained value, keeping the `Unset` and `Null` states.
    pub fn map<U, F>(self, f: F) -> Nullable<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Unset => Nullable::Unset,
            Self::Null => Nullable::Null,
            Self::Value(value) => Nullable::Value(f(value)),
        }
    }

    /// Drops the set marker and returns the value, if any.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Unset | Self::Null => None,
        }
    }

    /// Takes the content out, leaving `Unset` in its place.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Wraps an assigned option: `None` becomes an explicit `Null`.
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}

/// `Unset`, whatever `T` is.
impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T: Clone + Default> Nullable<T> {
    /// Returns the value, or the type's zero value for `Unset` and `Null`.
    pub fn value_or_default(&self) -> T {
        self.get().cloned().unwrap_or_default()
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Value(value) => serializer.serialize_some(value),
            // Unset keys are skipped by the field attribute
            Self::Unset | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from_option)
    }
}

/// Serde helper for required fields whose value may be `null`.
///
/// Such fields are `Option<T>` in generated models. A plain `Option<T>` field
/// silently accepts a missing key; going through `#[serde(with = ...)]` turns
/// a missing key into serde's `missing field` error instead.
///
/// ```rust
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Serialize, Deserialize)]
/// struct Page {
///     #[serde(with = "sdkforge_core::nullable::required")]
///     iterator: Option<String>,
/// }
///
/// let err = serde_json::from_str::<Page>("{}").unwrap_err();
/// assert!(err.to_string().contains("missing field `iterator`"));
///
/// let page: Page = serde_json::from_str(r#"{"iterator": null}"#).unwrap();
/// assert_eq!(page.iterator, None);
/// ```
pub mod required {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serializes `None` as `null`.
    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        value.serialize(serializer)
    }

    /// Deserializes a present key, accepting `null`.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer)
    }
}
