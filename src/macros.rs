// ============================================================================
// spark-hydrate - Ergonomic Macros
// ============================================================================

/// Helper macro to clone variables into a move closure.
///
/// Stores and lists are cheap handles, so event-style callbacks usually
/// capture clones of them.
///
/// # Usage
///
/// ```rust
/// use spark_hydrate::{cloned, store};
///
/// let count = store(1);
/// let doubled = store(2);
///
/// count.subscribe(cloned!(doubled => move |n: &i32| doubled.set(n * 2)));
/// count.set(5);
/// assert_eq!(doubled.get(), 10);
/// ```
#[macro_export]
macro_rules! cloned {
    ($($n:ident),+ => $e:expr) => {
        {
            $( let $n = $n.clone(); )+
            $e
        }
    };
}

/// Build a component's [`Fields`](crate::Fields) table from its field names.
///
/// `fields!(self => count, items)` names each container after the field
/// that holds it.
///
/// # Usage
///
/// ```rust
/// use spark_hydrate::{fields, list, store, List, Store};
///
/// struct Todo {
///     title: Store<String>,
///     tags: List<String>,
/// }
///
/// let todo = Todo { title: store(String::new()), tags: list(Vec::new()) };
/// let table = fields!(todo => title, tags);
/// assert_eq!(table.name_of(todo.tags.id()), Some("tags"));
/// ```
#[macro_export]
macro_rules! fields {
    ($target:expr => $($field:ident),* $(,)?) => {
        $crate::Fields::new()$(.field(stringify!($field), &$target.$field))*
    };
}
