// ============================================================================
// spark-hydrate - Typed Props
// Injecting values and shared containers into a nested component
// ============================================================================
//
// A prop either hands the child the parent's own container (shared: writes
// on either side are visible to both) or copies a plain value into the
// child's container. Each component type gets a typed props struct and a
// setter, so a prop aimed at the wrong field type does not compile.
// ============================================================================

use crate::collections::List;
use crate::core::types::ContainerId;
use crate::primitives::component::Component;
use crate::primitives::store::Store;

// =============================================================================
// PROPS TRAIT
// =============================================================================

/// The typed props of one component type.
///
/// # Example
///
/// ```
/// use spark_hydrate::{bind, el, fields, Component, Fields, Node, Prop, PropWiring, Props, Store};
///
/// #[derive(Default)]
/// struct Badge {
///     count: Store<i32>,
///     label: Store<String>,
/// }
///
/// impl Component for Badge {
///     fn fields(&self) -> Fields {
///         fields!(self => count, label)
///     }
///     fn render(&self) -> Node {
///         el("span").child(bind(&self.label)).child(bind(&self.count)).into()
///     }
/// }
///
/// #[derive(Clone)]
/// struct BadgeProps {
///     count: Prop<i32>,
///     label: Prop<String>,
/// }
///
/// impl Props for BadgeProps {
///     type Target = Badge;
///     fn inject(self, target: &mut Badge, wiring: &mut PropWiring) {
///         self.count.inject("count", &mut target.count, wiring);
///         self.label.inject("label", &mut target.label, wiring);
///     }
/// }
///
/// let total = Store::new(3);
/// let mut badge = Badge::default();
/// let mut wiring = PropWiring::new();
/// BadgeProps { count: Prop::from(&total), label: Prop::value("items".to_string()) }
///     .inject(&mut badge, &mut wiring);
///
/// assert!(badge.count.same(&total));
/// assert_eq!(badge.label.get(), "items");
/// assert_eq!(wiring.shared_count(), 1);
/// ```
pub trait Props: Clone + 'static {
    type Target: Component + Default;

    /// Move every prop into `target`, recording each in `wiring`.
    fn inject(self, target: &mut Self::Target, wiring: &mut PropWiring);
}

// =============================================================================
// PROP VALUES
// =============================================================================

/// A store prop: the parent's container or a plain value.
pub enum Prop<T> {
    /// Share the parent's store.
    Shared(Store<T>),
    /// Copy a value into the child's own store.
    Value(T),
}

impl<T: Clone + 'static> Prop<T> {
    pub fn value(value: T) -> Self {
        Prop::Value(value)
    }

    pub fn shared(store: &Store<T>) -> Self {
        Prop::Shared(store.clone())
    }

    pub fn is_shared(&self) -> bool {
        matches!(self, Prop::Shared(_))
    }

    /// Wire this prop into the child's `target` store.
    pub fn inject(self, name: &str, target: &mut Store<T>, wiring: &mut PropWiring) {
        match self {
            Prop::Shared(store) => {
                *target = store;
                wiring.record(name, target.id(), true);
            }
            Prop::Value(value) => {
                target.set(value);
                wiring.record(name, target.id(), false);
            }
        }
    }
}

impl<T> Clone for Prop<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        match self {
            Prop::Shared(store) => Prop::Shared(store.clone()),
            Prop::Value(value) => Prop::Value(value.clone()),
        }
    }
}

impl<T> From<Store<T>> for Prop<T> {
    fn from(store: Store<T>) -> Self {
        Prop::Shared(store)
    }
}

impl<T> From<&Store<T>> for Prop<T> {
    fn from(store: &Store<T>) -> Self {
        Prop::Shared(store.clone())
    }
}

/// A list prop: the parent's list or a copy of some items.
pub enum ListProp<T> {
    Shared(List<T>),
    Items(Vec<T>),
}

impl<T: PartialEq + Clone + 'static> ListProp<T> {
    pub fn inject(self, name: &str, target: &mut List<T>, wiring: &mut PropWiring) {
        match self {
            ListProp::Shared(list) => {
                *target = list;
                wiring.record(name, target.id(), true);
            }
            ListProp::Items(items) => {
                target.set(items);
                wiring.record(name, target.id(), false);
            }
        }
    }
}

impl<T: Clone> Clone for ListProp<T> {
    fn clone(&self) -> Self {
        match self {
            ListProp::Shared(list) => ListProp::Shared(list.clone()),
            ListProp::Items(items) => ListProp::Items(items.clone()),
        }
    }
}

impl<T> From<&List<T>> for ListProp<T> {
    fn from(list: &List<T>) -> Self {
        ListProp::Shared(list.clone())
    }
}

// =============================================================================
// PROP WIRING
// =============================================================================

/// One injected prop, as seen after injection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WiredProp {
    pub name: String,
    pub container: ContainerId,
    pub shared: bool,
}

/// Record of how a component's props were injected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropWiring {
    props: Vec<WiredProp>,
}

impl PropWiring {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: &str, container: ContainerId, shared: bool) {
        self.props.push(WiredProp {
            name: name.to_string(),
            container,
            shared,
        });
    }

    pub fn props(&self) -> &[WiredProp] {
        &self.props
    }

    pub fn shared_count(&self) -> usize {
        self.props.iter().filter(|p| p.shared).count()
    }
}

// =============================================================================
// TESTS
// =============================================================================
