//! Parameters of an API call.
//!
//! A [`ParamSpec`] describes a parameter, a [`ParamArg`] is what the caller
//! supplied. [`ParamSpec::resolve`] applies the assembly policy and the
//! result lands in the carrier it belongs to:
//!
//! - [`CallPath`]: `{name}` segments of the path template
//! - [`CallQuery`]: query pairs, in declaration order
//! - [`CallHeaders`]: header values
//! - [`CallForm`]: form fields and file parts
//! - [`CallBody`]: the encoded body

mod param;
pub use self::param::{Carrier, FilePart, ParamArg, ParamSpec, ResolvedArg};

mod path;
pub use self::path::CallPath;

mod query;
pub use self::query::CallQuery;

mod headers;
pub use self::headers::CallHeaders;

mod form;
pub use self::form::CallForm;

mod body;
pub use self::body::CallBody;
