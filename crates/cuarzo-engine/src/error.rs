use thiserror::Error;

/// Errors surfaced synchronously by engine operations.
///
/// Everything else the engine can run into (clearing before `init`, firing
/// the ready signal with no listener, stale frame callbacks) is a silent
/// no-op rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A caller-supplied value does not have the required capability or shape.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl EngineError {
    #[inline]
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
