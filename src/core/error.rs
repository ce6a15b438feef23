// ============================================================================
// spark-hydrate - Errors
// ============================================================================

use thiserror::Error;

/// Misuse of a reactive container.
///
/// The panicking accessors (`List::at`, `List::remove_at`) use this as their
/// panic message. `List::try_remove_at` returns it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Failure turning a finished render into its transport form.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to serialize binding manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid render options: {0}")]
    Options(serde_json::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;
