//! Single-pass cursor over the query parameters of a URL.
//!
//! [`ParamCursor`] walks the parameters of the original URL in order and
//! records removals and insertions relative to the current parameter
//! without touching the source string. The edited URL is assembled once,
//! on [`ParamCursor::render`].
//!
//! Only `?`, `#`, `=` and the parameter separator are interpreted; keys and
//! values are never decoded or encoded.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod delimiters;
mod edit;
mod error;
mod helpers;
mod render;
mod span;

mod cursor;
mod params;

// Public API
pub use cursor::ParamCursor;
pub use error::{CursorError, ErrorKind};
pub use params::{Param, Params, params};

pub type Result<T> = core::result::Result<T, CursorError>;
