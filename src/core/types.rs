// ============================================================================
// spark-hydrate - Type Definitions
// Container identity, type-erased container traits and list edits
// ============================================================================

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

// =============================================================================
// CONTAINER IDENTITY
// =============================================================================

static NEXT_CONTAINER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity handle of a reactive container.
///
/// Allocated once when a container is constructed. Cloning a container
/// handle shares the id, so two handles are "the same container" exactly
/// when their ids are equal. The renderer relies on this to detect shared
/// props across component boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerId(u64);

impl ContainerId {
    /// Allocate a fresh, never-before-seen id.
    pub fn next() -> Self {
        Self(NEXT_CONTAINER_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// TYPE-ERASED TRAITS
// =============================================================================
//
// The renderer never needs to know a container's value type. It needs the
// identity (for names and shared-prop detection) and, for text and attribute
// bindings, the current value as text. These traits let the node tree hold
// `Rc<dyn TextSource>` for stores of any displayable type.
// =============================================================================

/// Anything with a container identity.
pub trait Container {
    fn container_id(&self) -> ContainerId;
}

/// A container whose current value can be rendered as text.
pub trait TextSource: Container {
    /// Current value, unescaped.
    fn current_text(&self) -> String;
}

// =============================================================================
// LIST EDITS
// =============================================================================

/// Kind of a structural list change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditOp {
    Insert,
    Remove,
}

/// One structural change to a list.
///
/// For `Insert`, `index` is the position in the final sequence and `value`
/// is the inserted element. For `Remove`, `index` is the position at
/// removal time and `value` is the element that was removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit<T> {
    pub op: EditOp,
    pub index: usize,
    pub value: T,
}

impl<T> Edit<T> {
    pub fn insert(index: usize, value: T) -> Self {
        Self {
            op: EditOp::Insert,
            index,
            value,
        }
    }

    pub fn remove(index: usize, value: T) -> Self {
        Self {
            op: EditOp::Remove,
            index,
            value,
        }
    }

    pub fn is_insert(&self) -> bool {
        self.op == EditOp::Insert
    }

    pub fn is_remove(&self) -> bool {
        self.op == EditOp::Remove
    }
}

// =============================================================================
// TESTS
// =============================================================================
