// ============================================================================
// spark-hydrate - List
// An ordered reactive sequence with edit-script notification
// ============================================================================

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::core::error::ContainerError;
use crate::core::types::{Container, ContainerId, Edit};
use crate::diff::diff;

/// Callback receiving one structural edit.
pub type EditSubscriber<T> = Rc<dyn Fn(&Edit<T>)>;

/// Callback receiving the full sequence after a mutation.
pub type ChangeSubscriber<T> = Rc<dyn Fn(&[T])>;

struct ListInner<T> {
    id: ContainerId,
    items: RefCell<Vec<T>>,
    edit_subscribers: RefCell<Vec<EditSubscriber<T>>>,
    change_subscribers: RefCell<Vec<ChangeSubscriber<T>>>,
}

// =============================================================================
// LIST
// =============================================================================

/// A reactive ordered sequence.
///
/// Two subscription styles:
/// 1. Edit subscribers (`on_edit`): called once per structural change with an
///    [`Edit`]. Edits arrive in an order that can be applied directly to a
///    mirrored sequence (see [`apply_edits`](crate::apply_edits)).
/// 2. Change subscribers (`on_change`): called once per mutation with the
///    full resulting sequence.
///
/// Reads return copies. Clones share items, subscribers and identity.
///
/// # Example
///
/// ```
/// use spark_hydrate::{list, Edit};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let todos = list(vec!["a", "b", "c"]);
/// let edits = Rc::new(RefCell::new(Vec::new()));
/// let edits_clone = edits.clone();
/// todos.on_edit(move |e| edits_clone.borrow_mut().push(e.clone()));
///
/// todos.set(vec!["a", "b", "c", "d"]);
/// assert_eq!(*edits.borrow(), vec![Edit::insert(3, "d")]);
/// ```
pub struct List<T> {
    inner: Rc<ListInner<T>>,
}

impl<T: PartialEq + Clone + 'static> List<T> {
    /// Create a list holding `items`, with a fresh identity.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            inner: Rc::new(ListInner {
                id: ContainerId::next(),
                items: RefCell::new(items),
                edit_subscribers: RefCell::new(Vec::new()),
                change_subscribers: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn id(&self) -> ContainerId {
        self.inner.id
    }

    // =========================================================================
    // READS
    // =========================================================================

    /// A copy of the current items.
    pub fn get(&self) -> Vec<T> {
        self.inner.items.borrow().clone()
    }

    /// A copy of the item at `index`.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn at(&self, index: usize) -> T {
        let items = self.inner.items.borrow();
        match items.get(index) {
            Some(item) => item.clone(),
            None => panic!(
                "{}",
                ContainerError::IndexOutOfRange {
                    index,
                    len: items.len()
                }
            ),
        }
    }

    /// Access the items with a closure (avoids copying).
    pub fn with<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.inner.items.borrow())
    }

    pub fn len(&self) -> usize {
        self.inner.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // =========================================================================
    // MUTATORS
    // =========================================================================

    /// Append one item. Emits a single insert at the old length.
    pub fn append(&self, value: T) {
        let index = {
            let mut items = self.inner.items.borrow_mut();
            items.push(value.clone());
            items.len() - 1
        };
        self.emit(vec![Edit::insert(index, value)]);
    }

    /// Remove and return the item at `index`. Emits a single remove.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn remove_at(&self, index: usize) -> T {
        match self.try_remove_at(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Remove and return the item at `index`, or report the bad index.
    pub fn try_remove_at(&self, index: usize) -> Result<T, ContainerError> {
        let value = {
            let mut items = self.inner.items.borrow_mut();
            if index >= items.len() {
                return Err(ContainerError::IndexOutOfRange {
                    index,
                    len: items.len(),
                });
            }
            items.remove(index)
        };
        self.emit(vec![Edit::remove(index, value.clone())]);
        Ok(value)
    }

    /// Remove every item. Emits one remove per item, last index first.
    pub fn clear(&self) {
        let old = std::mem::take(&mut *self.inner.items.borrow_mut());
        let edits = old
            .into_iter()
            .enumerate()
            .rev()
            .map(|(i, value)| Edit::remove(i, value))
            .collect();
        self.emit(edits);
    }

    /// Replace the whole sequence. Emits the minimal edit script from the
    /// old items to `items`.
    pub fn set(&self, items: Vec<T>) {
        let edits = {
            let mut current = self.inner.items.borrow_mut();
            let edits = diff(current.as_slice(), items.as_slice());
            *current = items;
            edits
        };
        self.emit(edits);
    }

    // =========================================================================
    // SUBSCRIPTIONS
    // =========================================================================

    /// Register an edit subscriber.
    pub fn on_edit(&self, f: impl Fn(&Edit<T>) + 'static) {
        self.inner.edit_subscribers.borrow_mut().push(Rc::new(f));
    }

    /// Register a full-sequence change subscriber.
    pub fn on_change(&self, f: impl Fn(&[T]) + 'static) {
        self.inner.change_subscribers.borrow_mut().push(Rc::new(f));
    }

    fn emit(&self, edits: Vec<Edit<T>>) {
        let edit_subscribers: Vec<EditSubscriber<T>> =
            self.inner.edit_subscribers.borrow().clone();
        let change_subscribers: Vec<ChangeSubscriber<T>> =
            self.inner.change_subscribers.borrow().clone();

        trace!(
            container = %self.id(),
            edits = edits.len(),
            edit_subscribers = edit_subscribers.len(),
            change_subscribers = change_subscribers.len(),
            "list notify"
        );

        for edit in &edits {
            for subscriber in &edit_subscribers {
                subscriber(edit);
            }
        }

        if !change_subscribers.is_empty() {
            let snapshot = self.get();
            for subscriber in &change_subscribers {
                subscriber(&snapshot);
            }
        }
    }
}

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: PartialEq + Clone + 'static> Default for List<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: PartialEq + Clone + 'static> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("id", &self.inner.id)
            .field("items", &self.inner.items.borrow())
            .finish()
    }
}

impl<T> Container for List<T> {
    fn container_id(&self) -> ContainerId {
        self.inner.id
    }
}

/// Create a new list.
pub fn list<T: PartialEq + Clone + 'static>(items: Vec<T>) -> List<T> {
    List::new(items)
}

// =============================================================================
// TESTS
// =============================================================================
