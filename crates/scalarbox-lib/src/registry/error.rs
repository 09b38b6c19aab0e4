//! Errors raised by the registry protocol.
//!
//! Every variant except `Config` is a contract violation by the producer; the
//! checker run should be aborted, not recovered.

use scalarbox_core::ScalarKind;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A boxed instance was set twice.
    #[error("{0} instance is already set")]
    AlreadySet(ScalarKind),

    /// A setter received no instance type.
    #[error("{0} instance must not be absent")]
    AbsentInstance(ScalarKind),

    /// Freezing (or querying) before the instance was set.
    #[error("{0} instance was never set")]
    Unset(ScalarKind),

    /// Malformed configuration document.
    #[error("invalid registry configuration: {0}")]
    Config(#[from] serde_json::Error),
}
