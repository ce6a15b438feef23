// ============================================================================
// spark-hydrate - Primitives Module
// Stores, the component contract and typed props
// ============================================================================

pub mod component;
pub mod props;
pub mod store;

// Re-export for convenience
pub use component::{Component, Fields};
pub use props::{ListProp, Prop, PropWiring, Props, WiredProp};
pub use store::{store, Store, Subscriber};
