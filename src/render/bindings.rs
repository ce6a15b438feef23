// ============================================================================
// spark-hydrate - Binding Manifest
// The structured record of every dynamic point in a render
// ============================================================================
//
// The manifest travels next to the HTML. The hydration layer finds DOM nodes
// purely by the markers recorded here, so every marker the renderer writes
// into markup has an entry in exactly one of these collections.
//
// Nesting is never expressed in the manifest's shape: nested components are
// flattened into their parent's collections and told apart by their marker
// prefix. The two exceptions are conditional branches and list items, which
// keep their own bindings because only the hydration layer knows which
// branch or item is live.
// ============================================================================

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// `{markerId, container}` for one text interpolation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBinding {
    pub marker_id: String,
    pub container: String,
}

/// `{elementId, event, handler}` for one event listener.
///
/// `component` is the instance id owning the handler (`""` at the root).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventBinding {
    pub element_id: String,
    pub event: String,
    pub handler: String,
    pub component: String,
}

/// One branch of a conditional block, rendered in isolation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IfBranch {
    /// Names of the containers the guard reads.
    pub deps: Vec<String>,
    pub html: String,
    pub bindings: CollectedBindings,
}

/// A whole if/else-if/else construct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IfBlock {
    pub marker_id: String,
    pub branches: Vec<IfBranch>,
    pub else_branch: Option<IfBranch>,
    /// Index of the branch emitted into the document. `None` means the else
    /// branch (or nothing) was emitted.
    pub active: Option<usize>,
}

/// A list block and the bindings of each rendered item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EachBlockBinding {
    pub marker_id: String,
    pub list_ref: String,
    pub item_var: String,
    pub index_var: String,
    pub items: Vec<CollectedBindings>,
    /// Bindings of the else template, when the list was empty and one was given.
    pub else_bindings: Option<CollectedBindings>,
}

impl EachBlockBinding {
    /// Element id of the item at `index` (`<marker>_<index>`).
    pub fn item_id(&self, index: usize) -> String {
        item_element_id(&self.marker_id, index)
    }
}

pub(crate) fn item_element_id(marker: &str, index: usize) -> String {
    format!("{marker}{}{index}", crate::core::constants::PREFIX_SEPARATOR)
}

/// Which DOM property a two-way binding drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Value,
    Checked,
}

/// `{elementId, container}` for one two-way input binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputBinding {
    pub element_id: String,
    pub container: String,
    pub kind: InputKind,
}

/// How one prop reached a nested component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropBinding {
    pub name: String,
    pub container: String,
    /// True when the child holds the parent's container, false when the
    /// value was copied into the child's own container.
    pub shared: bool,
}

/// One nested component instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentBinding {
    pub id: String,
    pub component: String,
    pub props: Vec<PropBinding>,
}

/// An attribute whose value is a container's current text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttrBinding {
    pub element_id: String,
    pub attr: String,
    pub container: String,
}

/// An attribute value present only while a boolean container is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttrCondBinding {
    pub element_id: String,
    pub attr: String,
    pub value: String,
    pub container: String,
}

// =============================================================================
// COLLECTED BINDINGS
// =============================================================================

/// The binding manifest of one render (or one isolated scope of it).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectedBindings {
    pub text: Vec<TextBinding>,
    pub events: Vec<EventBinding>,
    pub if_blocks: Vec<IfBlock>,
    pub each_blocks: Vec<EachBlockBinding>,
    pub inputs: Vec<InputBinding>,
    pub components: Vec<ComponentBinding>,
    pub attrs: Vec<AttrBinding>,
    pub attr_conds: Vec<AttrCondBinding>,
}

impl CollectedBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flat concatenation, category by category.
    pub fn merge(&mut self, other: CollectedBindings) {
        self.text.extend(other.text);
        self.events.extend(other.events);
        self.if_blocks.extend(other.if_blocks);
        self.each_blocks.extend(other.each_blocks);
        self.inputs.extend(other.inputs);
        self.components.extend(other.components);
        self.attrs.extend(other.attrs);
        self.attr_conds.extend(other.attr_conds);
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
            && self.events.is_empty()
            && self.if_blocks.is_empty()
            && self.each_blocks.is_empty()
            && self.inputs.is_empty()
            && self.components.is_empty()
            && self.attrs.is_empty()
            && self.attr_conds.is_empty()
    }

    /// Every marker and element id this manifest owns, including item ids
    /// and everything inside conditional branches and list items.
    pub fn markers(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        self.collect_markers(&mut out);
        out
    }

    fn collect_markers(&self, out: &mut BTreeSet<String>) {
        out.extend(self.text.iter().map(|b| b.marker_id.clone()));
        out.extend(self.events.iter().map(|b| b.element_id.clone()));
        out.extend(self.inputs.iter().map(|b| b.element_id.clone()));
        out.extend(self.components.iter().map(|b| b.id.clone()));
        out.extend(self.attrs.iter().map(|b| b.element_id.clone()));
        out.extend(self.attr_conds.iter().map(|b| b.element_id.clone()));

        for block in &self.if_blocks {
            out.insert(block.marker_id.clone());
            for branch in block.branches.iter().chain(block.else_branch.iter()) {
                branch.bindings.collect_markers(out);
            }
        }

        for block in &self.each_blocks {
            out.insert(block.marker_id.clone());
            out.extend((0..block.items.len()).map(|i| block.item_id(i)));
            for item in block.items.iter().chain(block.else_bindings.iter()) {
                item.collect_markers(out);
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn text(marker: &str) -> TextBinding {
        TextBinding {
            marker_id: marker.to_string(),
            container: "count".to_string(),
        }
    }

    #[test]
    fn merge_concatenates_per_category() {
        let mut a = CollectedBindings::new();
        a.text.push(text("t0"));

        let mut b = CollectedBindings::new();
        b.text.push(text("c0_t0"));
        b.components.push(ComponentBinding {
            id: "c0".to_string(),
            component: "Child".to_string(),
            props: Vec::new(),
        });

        a.merge(b);
        assert_eq!(a.text.len(), 2);
        assert_eq!(a.text[1].marker_id, "c0_t0");
        assert_eq!(a.components.len(), 1);
    }

    #[test]
    fn markers_recurse_into_branches_and_items() {
        let mut inner = CollectedBindings::new();
        inner.text.push(text("t1"));

        let mut item = CollectedBindings::new();
        item.text.push(text("t2"));

        let mut root = CollectedBindings::new();
        root.text.push(text("t0"));
        root.if_blocks.push(IfBlock {
            marker_id: "i0".to_string(),
            branches: vec![IfBranch {
                deps: vec!["flag".to_string()],
                html: String::new(),
                bindings: inner,
            }],
            else_branch: None,
            active: Some(0),
        });
        root.each_blocks.push(EachBlockBinding {
            marker_id: "e0".to_string(),
            list_ref: "items".to_string(),
            item_var: "item".to_string(),
            index_var: "i".to_string(),
            items: vec![item],
            else_bindings: None,
        });

        let markers: Vec<String> = root.markers().into_iter().collect();
        assert_eq!(markers, vec!["e0", "e0_0", "i0", "t0", "t1", "t2"]);
    }

    #[test]
    fn empty_manifest() {
        assert!(CollectedBindings::new().is_empty());
        let mut b = CollectedBindings::new();
        b.text.push(text("t0"));
        assert!(!b.is_empty());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let mut b = CollectedBindings::new();
        b.text.push(text("t0"));
        b.inputs.push(InputBinding {
            element_id: "a0".to_string(),
            container: "name".to_string(),
            kind: InputKind::Value,
        });

        let json = serde_json::to_value(&b).unwrap();
        assert_eq!(json["text"][0]["markerId"], "t0");
        assert_eq!(json["inputs"][0]["elementId"], "a0");
        assert_eq!(json["inputs"][0]["kind"], "value");
        assert!(json["ifBlocks"].as_array().unwrap().is_empty());
        assert!(json["attrConds"].as_array().unwrap().is_empty());
    }

    #[test]
    fn item_ids_are_index_addressed() {
        let block = EachBlockBinding {
            marker_id: "c0_e1".to_string(),
            list_ref: "todos".to_string(),
            item_var: "todo".to_string(),
            index_var: "i".to_string(),
            items: Vec::new(),
            else_bindings: None,
        };
        assert_eq!(block.item_id(3), "c0_e1_3");
    }
}
