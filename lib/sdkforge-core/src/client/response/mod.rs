//! Response mapping.
//!
//! - [`RawResponse`] - Status, content type and payload as received
//! - [`ResponseTable`] - Per-operation `status -> decoder` table
//! - [`TypedResponse`] - Typed envelope with an unknown-value fallback

mod raw;
pub use self::raw::RawResponse;

mod table;
pub use self::table::{ResponseTable, StatusKey};

mod typed;
pub use self::typed::TypedResponse;
