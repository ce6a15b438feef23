// ============================================================================
// spark-hydrate - Core Module
// Container identity, edit types, constants and errors
// ============================================================================

pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use constants::*;
pub use error::{ContainerError, RenderError, RenderResult};
pub use types::{Container, ContainerId, Edit, EditOp, TextSource};
