// ============================================================================
// spark-hydrate - Map
// An associative reactive container with whole-map notification
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use tracing::trace;

use crate::core::types::{Container, ContainerId};

/// Callback receiving the whole map after a mutation.
pub type MapSubscriber<K, V> = Rc<dyn Fn(&HashMap<K, V>)>;

struct MapInner<K, V> {
    id: ContainerId,
    data: RefCell<HashMap<K, V>>,
    subscribers: RefCell<Vec<MapSubscriber<K, V>>>,
}

// =============================================================================
// MAP
// =============================================================================

/// A reactive map.
///
/// Unlike [`List`](crate::List) there is no per-entry edit stream: every
/// mutation hands each subscriber the whole resulting map.
///
/// # Example
///
/// ```
/// use spark_hydrate::collections::Map;
///
/// let scores: Map<String, i32> = Map::new();
/// scores.set("alice".to_string(), 25);
/// assert_eq!(scores.get("alice"), Some(25));
/// assert_eq!(scores.len(), 1);
/// ```
pub struct Map<K, V> {
    inner: Rc<MapInner<K, V>>,
}

impl<K, V> Map<K, V>
where
    K: Eq + Hash + Clone + 'static,
    V: Clone + 'static,
{
    /// Create an empty map with a fresh identity.
    pub fn new() -> Self {
        Self::from_map(HashMap::new())
    }

    fn from_map(data: HashMap<K, V>) -> Self {
        Self {
            inner: Rc::new(MapInner {
                id: ContainerId::next(),
                data: RefCell::new(data),
                subscribers: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn id(&self) -> ContainerId {
        self.inner.id
    }

    // =========================================================================
    // READS
    // =========================================================================

    /// A copy of the value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.data.borrow().get(key).cloned()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.data.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.data.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A copy of the whole map.
    pub fn snapshot(&self) -> HashMap<K, V> {
        self.inner.data.borrow().clone()
    }

    // =========================================================================
    // MUTATORS
    // =========================================================================

    /// Insert or replace the value for `key`. Returns the previous value.
    pub fn set(&self, key: K, value: V) -> Option<V> {
        let old = self.inner.data.borrow_mut().insert(key, value);
        self.notify();
        old
    }

    /// Remove `key`. Notifies only if the key was present.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let old = self.inner.data.borrow_mut().remove(key);
        if old.is_some() {
            self.notify();
        }
        old
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.inner.data.borrow_mut().clear();
        self.notify();
    }

    // =========================================================================
    // SUBSCRIPTIONS
    // =========================================================================

    pub fn subscribe(&self, f: impl Fn(&HashMap<K, V>) + 'static) {
        self.inner.subscribers.borrow_mut().push(Rc::new(f));
    }

    fn notify(&self) {
        let subscribers: Vec<MapSubscriber<K, V>> = self.inner.subscribers.borrow().clone();
        if subscribers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        trace!(container = %self.id(), subscribers = subscribers.len(), "map notify");
        for subscriber in &subscribers {
            subscriber(&snapshot);
        }
    }
}

impl<K, V> Clone for Map<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V> Default for Map<K, V>
where
    K: Eq + Hash + Clone + 'static,
    V: Clone + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Collect entries into a map with a fresh identity.
impl<K, V> FromIterator<(K, V)> for Map<K, V>
where
    K: Eq + Hash + Clone + 'static,
    V: Clone + 'static,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_map(iter.into_iter().collect())
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Map<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("id", &self.inner.id)
            .field("data", &self.inner.data.borrow())
            .finish()
    }
}

impl<K, V> Container for Map<K, V> {
    fn container_id(&self) -> ContainerId {
        self.inner.id
    }
}

// =============================================================================
// TESTS
// =============================================================================
