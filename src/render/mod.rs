// ============================================================================
// spark-hydrate - Render Module
// Node model, SSR renderer, binding manifest and markup helpers
// ============================================================================

pub mod bindings;
pub mod context;
pub mod inject;
pub mod node;
pub mod options;
pub mod output;
pub mod renderer;

pub use bindings::{
    AttrBinding, AttrCondBinding, CollectedBindings, ComponentBinding, EachBlockBinding,
    EventBinding, IfBlock, IfBranch, InputBinding, InputKind, PropBinding, TextBinding,
};
pub use context::{BuildContext, MarkerKind, NameMap};
pub use inject::{escape, inject_attrs, inject_textarea_content, opening_tag_end};
pub use node::{
    bind, component, component_of, each, el, fragment, input_checked, input_value, slot, text,
    textarea, when, Conditional, Each, Element, Guard, Input, InputTarget, Nested, Node,
};
pub use options::RenderOptions;
pub use output::RenderOutput;
pub use renderer::Renderer;
