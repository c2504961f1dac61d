//! Route patterns with typed placeholders, path matching and reverse routing.

#![forbid(unsafe_code)]

mod error;
mod router;

pub mod pattern;

#[cfg(feature = "http-method")]
mod http_method;

pub use crate::error::RouterError;
pub use crate::pattern::{compile, Captures, Pattern, Placeholder, Segment, UriArgs, ValueType};
pub use crate::router::{BoxHandler, CompiledRoute, Handler, Method, Router};
