// ============================================================================
// spark-hydrate - Build Context
// Per-scope render state: marker counters, namespace and container names
// ============================================================================

use std::collections::BTreeMap;

use crate::core::constants::{
    COMPONENT_MARKER, EACH_MARKER, ELEMENT_MARKER, IF_MARKER, PREFIX_SEPARATOR, TEXT_MARKER,
};
use crate::core::types::ContainerId;
use crate::primitives::component::Fields;
use crate::render::bindings::CollectedBindings;

/// Container identity → binding name.
pub type NameMap = BTreeMap<ContainerId, String>;

// =============================================================================
// MARKERS
// =============================================================================

/// The kinds of marker a render allocates, each with its own counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    Text,
    If,
    Each,
    Component,
    Element,
}

impl MarkerKind {
    pub fn letter(self) -> char {
        match self {
            MarkerKind::Text => TEXT_MARKER,
            MarkerKind::If => IF_MARKER,
            MarkerKind::Each => EACH_MARKER,
            MarkerKind::Component => COMPONENT_MARKER,
            MarkerKind::Element => ELEMENT_MARKER,
        }
    }
}

/// Per-kind monotonically increasing counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    text: u32,
    if_block: u32,
    each: u32,
    component: u32,
    element: u32,
}

impl Counters {
    /// Return the current value for `kind` and advance it.
    pub fn bump(&mut self, kind: MarkerKind) -> u32 {
        let slot = match kind {
            MarkerKind::Text => &mut self.text,
            MarkerKind::If => &mut self.if_block,
            MarkerKind::Each => &mut self.each,
            MarkerKind::Component => &mut self.component,
            MarkerKind::Element => &mut self.element,
        };
        let n = *slot;
        *slot += 1;
        n
    }
}

// =============================================================================
// BUILD CONTEXT
// =============================================================================

/// Mutable state of one render scope.
///
/// Three ways to derive a new context:
/// - [`scope`](Self::scope) for conditional branches and list items. Same
///   namespace, counters copied forward, fresh binding collector. Close it
///   with [`close_scope`](Self::close_scope) to carry the counters back.
/// - [`nested`](Self::nested) for a nested component. New namespace
///   `<marker>_`, counters from zero, the parent's names as the
///   shared-name resolver.
/// - [`root`](Self::root) for the top of a render.
#[derive(Debug, Clone)]
pub struct BuildContext {
    counters: Counters,
    prefix: String,
    instance: String,
    bindings: CollectedBindings,
    names: NameMap,
    parent_names: Option<NameMap>,
    pending_item_id: Option<String>,
}

impl BuildContext {
    /// Context for the root component, marker namespace `prefix`.
    pub fn root(prefix: &str) -> Self {
        Self {
            counters: Counters::default(),
            prefix: prefix.to_string(),
            instance: String::new(),
            bindings: CollectedBindings::new(),
            names: NameMap::new(),
            parent_names: None,
            pending_item_id: None,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Component instance id owning this scope (`""` at the root).
    pub fn instance(&self) -> &str {
        &self.instance
    }

    /// Snapshot of the per-kind counters.
    pub fn counters(&self) -> Counters {
        self.counters
    }

    /// Allocate the next marker of `kind` in this namespace.
    pub fn next_marker(&mut self, kind: MarkerKind) -> String {
        let n = self.counters.bump(kind);
        format!("{}{}{}", self.prefix, kind.letter(), n)
    }

    pub fn bindings_mut(&mut self) -> &mut CollectedBindings {
        &mut self.bindings
    }

    pub fn bindings(&self) -> &CollectedBindings {
        &self.bindings
    }

    // =========================================================================
    // CONTAINER NAMES
    // =========================================================================

    /// Register the component's named containers, namespaced by prefix.
    pub fn declare(&mut self, fields: &Fields) {
        for (name, id) in fields.iter() {
            self.names
                .entry(id)
                .or_insert_with(|| format!("{}{}", self.prefix, name));
        }
    }

    /// The binding name of a container.
    ///
    /// A name the parent uses wins over this component's own name, which
    /// is how a shared prop ends up with one name on both sides of the
    /// component boundary. Unnamed containers get `<prefix>#<id>`, which is
    /// remembered for later lookups.
    pub fn name_of(&mut self, id: ContainerId) -> String {
        if let Some(name) = self.parent_names.as_ref().and_then(|p| p.get(&id)) {
            return name.clone();
        }
        let prefix = &self.prefix;
        self.names
            .entry(id)
            .or_insert_with(|| format!("{prefix}{id}"))
            .clone()
    }

    /// Every name this scope can resolve, parent names taking precedence.
    fn visible_names(&self) -> NameMap {
        let mut all = self.names.clone();
        if let Some(parent) = &self.parent_names {
            for (id, name) in parent {
                all.insert(*id, name.clone());
            }
        }
        all
    }

    /// Fold a finished child component's names into this scope, keeping
    /// this scope's name for any identity it already knows.
    pub fn reconcile(&mut self, child_names: NameMap) {
        for (id, name) in child_names {
            let known = self.parent_names.as_ref().is_some_and(|p| p.contains_key(&id));
            if !known {
                self.names.entry(id).or_insert(name);
            }
        }
    }

    // =========================================================================
    // LIST ITEMS
    // =========================================================================

    /// Element id the next root element of a list item must carry.
    pub fn set_pending_item_id(&mut self, id: String) {
        self.pending_item_id = Some(id);
    }

    pub fn take_pending_item_id(&mut self) -> Option<String> {
        self.pending_item_id.take()
    }

    // =========================================================================
    // CHILD CONTEXTS
    // =========================================================================

    /// Isolated scope in the same namespace.
    pub fn scope(&self) -> BuildContext {
        BuildContext {
            counters: self.counters,
            prefix: self.prefix.clone(),
            instance: self.instance.clone(),
            bindings: CollectedBindings::new(),
            names: self.names.clone(),
            parent_names: self.parent_names.clone(),
            pending_item_id: None,
        }
    }

    /// Finish a scope created by [`scope`](Self::scope): advance this
    /// context's counters past everything the scope allocated, adopt names
    /// it minted, and hand back its bindings.
    pub fn close_scope(&mut self, scope: BuildContext) -> CollectedBindings {
        self.counters = scope.counters;
        for (id, name) in scope.names {
            self.names.entry(id).or_insert(name);
        }
        scope.bindings
    }

    /// Context for a nested component whose marker is `marker`.
    pub fn nested(&self, marker: &str) -> BuildContext {
        BuildContext {
            counters: Counters::default(),
            prefix: format!("{marker}{PREFIX_SEPARATOR}"),
            instance: marker.to_string(),
            bindings: CollectedBindings::new(),
            names: NameMap::new(),
            parent_names: Some(self.visible_names()),
            pending_item_id: None,
        }
    }

    /// Split into the collected bindings and this scope's own names.
    pub fn into_parts(self) -> (CollectedBindings, NameMap) {
        (self.bindings, self.names)
    }
}

// =============================================================================
// TESTS
// =============================================================================
