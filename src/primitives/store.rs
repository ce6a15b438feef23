// ============================================================================
// spark-hydrate - Store Primitive
// The scalar reactive container
// ============================================================================

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::core::types::{Container, ContainerId, TextSource};

/// Change callback registered on a [`Store`].
pub type Subscriber<T> = Rc<dyn Fn(&T)>;

struct StoreInner<T> {
    id: ContainerId,
    value: RefCell<T>,
    subscribers: RefCell<Vec<Subscriber<T>>>,
}

// =============================================================================
// STORE<T> - The public store handle
// =============================================================================

/// A reactive container holding one value of type T.
///
/// Every `set` notifies every subscriber synchronously, in subscription
/// order, before returning. There is no equality check: setting the same
/// value twice notifies twice.
///
/// Cloning a `Store` shares the value, the subscribers and the
/// [`ContainerId`]. This is how a parent hands a container to a child
/// component so that writes on either side are visible to both.
///
/// # Example
///
/// ```
/// use spark_hydrate::store;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let count = store(0);
/// let seen = Rc::new(Cell::new(0));
/// let seen_clone = seen.clone();
/// count.subscribe(move |v| seen_clone.set(*v));
///
/// count.set(5);
/// assert_eq!(count.get(), 5);
/// assert_eq!(seen.get(), 5);
/// ```
pub struct Store<T> {
    inner: Rc<StoreInner<T>>,
}

impl<T: 'static> Store<T> {
    /// Create a new store with the given initial value and a fresh identity.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                id: ContainerId::next(),
                value: RefCell::new(value),
                subscribers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// The identity of this store (shared by all clones).
    pub fn id(&self) -> ContainerId {
        self.inner.id
    }

    /// Get the current value (cloning).
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner.value.borrow().clone()
    }

    /// Access the current value with a closure (avoids cloning).
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    /// Replace the value and notify every subscriber.
    pub fn set(&self, value: T)
    where
        T: Clone,
    {
        *self.inner.value.borrow_mut() = value;
        self.notify();
    }

    /// Modify the value in place, then notify like `set`.
    ///
    /// ```
    /// use spark_hydrate::store;
    ///
    /// let items = store(vec![1, 2]);
    /// items.update(|v| v.push(3));
    /// assert_eq!(items.get(), vec![1, 2, 3]);
    /// ```
    pub fn update(&self, f: impl FnOnce(&mut T))
    where
        T: Clone,
    {
        f(&mut self.inner.value.borrow_mut());
        self.notify();
    }

    /// Register a change callback. It receives the new value on every `set`.
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) {
        self.inner.subscribers.borrow_mut().push(Rc::new(f));
    }

    /// Number of registered callbacks.
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    /// Whether two handles refer to the same container.
    pub fn same(&self, other: &Store<T>) -> bool {
        self.id() == other.id()
    }

    fn notify(&self)
    where
        T: Clone,
    {
        // Collect first so a callback may subscribe to or write this store
        let subscribers: Vec<Subscriber<T>> = self.inner.subscribers.borrow().clone();
        if subscribers.is_empty() {
            return;
        }
        let value = self.inner.value.borrow().clone();
        trace!(container = %self.id(), subscribers = subscribers.len(), "store notify");
        for subscriber in &subscribers {
            subscriber(&value);
        }
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Default + 'static> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("id", &self.inner.id)
            .field("value", &self.inner.value.borrow())
            .finish()
    }
}

impl<T> Container for Store<T> {
    fn container_id(&self) -> ContainerId {
        self.inner.id
    }
}

impl<T: fmt::Display> TextSource for Store<T> {
    fn current_text(&self) -> String {
        self.inner.value.borrow().to_string()
    }
}

// =============================================================================
// STORE CREATION FUNCTION
// =============================================================================

/// Create a new store.
///
/// ```
/// use spark_hydrate::store;
///
/// let name = store(String::from("hello"));
/// name.set("world".to_string());
/// assert_eq!(name.get(), "world");
/// ```
pub fn store<T: 'static>(value: T) -> Store<T> {
    Store::new(value)
}

// =============================================================================
// TESTS
// =============================================================================
