// ============================================================================
// spark-hydrate - Server-Side Rendering with Hydration Markers
// ============================================================================
//
// Reactive containers (`Store`, `List`, `Map`), a minimal-edit list diff, and
// a single-pass SSR renderer. The renderer turns a component tree into HTML
// plus a binding manifest that tells a client-side hydration layer where
// every dynamic point lives.
// ============================================================================

pub mod collections;
pub mod core;
pub mod diff;
pub mod primitives;
pub mod render;

mod macros;

// Re-export core items at crate root for ergonomic access
pub use core::constants;
pub use core::error::{ContainerError, RenderError, RenderResult};
pub use core::types::{Container, ContainerId, Edit, EditOp, TextSource};

// Containers
pub use collections::{list, ChangeSubscriber, EditSubscriber, List, Map, MapSubscriber};
pub use primitives::store::{store, Store, Subscriber};

// Diffing
pub use diff::{apply_edits, diff};

// Components
pub use primitives::component::{Component, Fields};
pub use primitives::props::{ListProp, Prop, PropWiring, Props, WiredProp};

// Rendering
pub use render::bindings::{
    AttrBinding, AttrCondBinding, CollectedBindings, ComponentBinding, EachBlockBinding,
    EventBinding, IfBlock, IfBranch, InputBinding, InputKind, PropBinding, TextBinding,
};
pub use render::inject::{inject_attrs, inject_textarea_content};
pub use render::node::{
    bind, component, component_of, each, el, fragment, input_checked, input_value, slot, text,
    textarea, when, Guard, Node,
};
pub use render::{RenderOptions, RenderOutput, Renderer};

/// Render `root` with default options.
pub fn render<C: Component>(root: &C) -> RenderOutput {
    Renderer::new().render(root)
}

// =============================================================================
// TESTS
// =============================================================================
