// ============================================================================
// spark-hydrate - Component
// The render contract and the named-container table
// ============================================================================

use crate::core::types::{Container, ContainerId};
use crate::render::node::Node;

// =============================================================================
// COMPONENT
// =============================================================================

/// A renderable component.
///
/// `render` returns the node tree. `fields` names the component's reactive
/// containers, which is how the manifest refers to them. `style` returns an
/// opaque style block, collected once per component type.
///
/// # Example
///
/// ```
/// use spark_hydrate::{bind, el, fields, Component, Fields, Node, Store};
///
/// #[derive(Default)]
/// struct Greeting {
///     name: Store<String>,
/// }
///
/// impl Component for Greeting {
///     fn fields(&self) -> Fields {
///         fields!(self => name)
///     }
///
///     fn render(&self) -> Node {
///         el("p").text("Hello, ").child(bind(&self.name)).into()
///     }
/// }
///
/// let page = Greeting::default();
/// page.name.set("Ada".to_string());
/// let out = spark_hydrate::render(&page);
/// assert_eq!(out.html, r#"<p>Hello, <span id="t0">Ada</span></p>"#);
/// assert_eq!(out.bindings.text[0].container, "name");
/// ```
pub trait Component: 'static {
    fn render(&self) -> Node;

    fn style(&self) -> Option<String> {
        None
    }

    fn fields(&self) -> Fields {
        Fields::new()
    }

    /// Type identity used for style dedupe and the manifest.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

// =============================================================================
// FIELDS
// =============================================================================

/// Ordered `name → container` table of a component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    entries: Vec<(String, ContainerId)>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named container.
    pub fn field(mut self, name: &str, container: &impl Container) -> Self {
        self.entries.push((name.to_string(), container.container_id()));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ContainerId)> + '_ {
        self.entries.iter().map(|(name, id)| (name.as_str(), *id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The name registered for `id`, if any.
    pub fn name_of(&self, id: ContainerId) -> Option<&str> {
        self.iter().find(|(_, i)| *i == id).map(|(name, _)| name)
    }
}
