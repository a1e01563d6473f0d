//! Host-facing error types.
//!
//! Everything that happens *inside* [`crate::eval`] is reported through a
//! [`crate::Flow`] code, not a `Result` — see the module docs on
//! [`crate::eval`] for why. The types here only cover the handful of
//! operations that sit outside that pipeline entirely, such as asking a
//! [`crate::Value`] for its contents as `&str`.

use thiserror::Error;

/// Errors produced by [`crate::Value`] accessors that are not part of the
/// flow-code pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The value's bytes are not valid UTF-8.
    #[error("value is not valid UTF-8")]
    NotUtf8(#[from] std::str::Utf8Error),
}
