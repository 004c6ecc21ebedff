//! Error types for NaturaKit
//!
//! The console core surfaces exactly one error: a path string that does
//! not name a node in the virtual tree. It is never fatal; command
//! handlers map it to the canned DOS-style message and the session
//! continues.

use thiserror::Error;

/// Result type alias using NaturaKit's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// NaturaKit error types.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Resolution failed at some step, or the resolved node is not a
    /// directory where one was required.
    #[error("the system cannot find the path specified")]
    PathNotFound,
}
