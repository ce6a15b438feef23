// ============================================================================
// spark-hydrate - Node Model
// The closed set of render-tree variants and their constructors
// ============================================================================

use std::fmt;
use std::rc::Rc;

use crate::collections::List;
use crate::core::types::{Container, ContainerId, TextSource};
use crate::primitives::component::Component;
use crate::primitives::props::{PropWiring, Props};
use crate::primitives::store::Store;

// =============================================================================
// NODE
// =============================================================================

/// One node of a render tree.
///
/// The renderer matches on this enum exhaustively. A new node kind is a new
/// variant plus a new match arm; there is no open extension point.
pub enum Node {
    /// Static text, escaped on output.
    Text(String),
    /// Text driven by a container.
    Bind(Rc<dyn TextSource>),
    Element(Element),
    Fragment(Vec<Node>),
    /// Two-way bound form control.
    Input(Input),
    If(Conditional),
    Each(Each),
    Component(Nested),
    /// Placeholder for the content the parent passed to this component.
    Slot,
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Node::Bind(src) => f.debug_tuple("Bind").field(&src.container_id()).finish(),
            Node::Element(e) => f
                .debug_struct("Element")
                .field("tag", &e.tag)
                .field("children", &e.children)
                .finish(),
            Node::Fragment(children) => f.debug_tuple("Fragment").field(children).finish(),
            Node::Input(i) => f.debug_struct("Input").field("markup", &i.markup).finish(),
            Node::If(c) => f
                .debug_struct("If")
                .field("branches", &c.branches.len())
                .field("otherwise", &c.otherwise.is_some())
                .finish(),
            Node::Each(e) => f
                .debug_struct("Each")
                .field("list", &e.list)
                .field("item_var", &e.item_var)
                .finish(),
            Node::Component(_) => f.write_str("Component"),
            Node::Slot => f.write_str("Slot"),
        }
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(s)
    }
}

impl From<Vec<Node>> for Node {
    fn from(children: Vec<Node>) -> Self {
        Node::Fragment(children)
    }
}

// =============================================================================
// ELEMENT
// =============================================================================

/// An attribute value present only while a flag is true.
pub struct Toggle {
    pub(crate) attr: String,
    pub(crate) value: String,
    pub(crate) flag: Store<bool>,
}

/// An element with static attributes, dynamic attributes, events and children.
pub struct Element {
    pub(crate) tag: String,
    pub(crate) attrs: Vec<(String, String)>,
    pub(crate) bound_attrs: Vec<(String, Rc<dyn TextSource>)>,
    pub(crate) toggles: Vec<Toggle>,
    pub(crate) events: Vec<(String, String)>,
    pub(crate) children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            bound_attrs: Vec::new(),
            toggles: Vec::new(),
            events: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Static attribute.
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    pub fn class(self, value: &str) -> Self {
        self.attr("class", value)
    }

    /// Attribute whose value is the store's current text.
    pub fn bind_attr<T: fmt::Display + 'static>(mut self, name: &str, source: &Store<T>) -> Self {
        self.bound_attrs
            .push((name.to_string(), Rc::new(source.clone())));
        self
    }

    /// Add `value` to attribute `name` while `flag` is true. For `class`
    /// the value joins any static classes.
    pub fn toggle(mut self, name: &str, value: &str, flag: &Store<bool>) -> Self {
        self.toggles.push(Toggle {
            attr: name.to_string(),
            value: value.to_string(),
            flag: flag.clone(),
        });
        self
    }

    /// Listen for `event`, calling the component method named `handler`.
    pub fn on(mut self, event: &str, handler: &str) -> Self {
        self.events.push((event.to_string(), handler.to_string()));
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Static text child.
    pub fn text(self, s: &str) -> Self {
        self.child(Node::Text(s.to_string()))
    }

    /// Whether rendering needs an element marker.
    pub(crate) fn is_dynamic(&self) -> bool {
        !self.events.is_empty() || !self.bound_attrs.is_empty() || !self.toggles.is_empty()
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

// =============================================================================
// INPUT
// =============================================================================

/// What a two-way binding drives.
pub enum InputTarget {
    /// `value` attribute (or textarea content).
    Value(Rc<dyn TextSource>),
    /// `checked` attribute.
    Checked(Store<bool>),
}

impl InputTarget {
    pub fn container_id(&self) -> ContainerId {
        match self {
            InputTarget::Value(src) => src.container_id(),
            InputTarget::Checked(flag) => flag.id(),
        }
    }
}

/// A form control rendered from caller-supplied opening markup.
pub struct Input {
    pub(crate) markup: String,
    pub(crate) target: InputTarget,
}

impl Input {
    pub(crate) fn is_textarea(&self) -> bool {
        self.markup
            .trim_start()
            .get(..9)
            .is_some_and(|head| head.eq_ignore_ascii_case("<textarea"))
    }
}

impl From<Input> for Node {
    fn from(i: Input) -> Self {
        Node::Input(i)
    }
}

// =============================================================================
// CONDITIONAL
// =============================================================================

/// A branch condition plus the containers it reads.
#[derive(Clone)]
pub struct Guard {
    pub(crate) deps: Vec<ContainerId>,
    pub(crate) test: Rc<dyn Fn() -> bool>,
}

impl Guard {
    /// Arbitrary condition over `deps`.
    pub fn new(deps: &[&dyn Container], test: impl Fn() -> bool + 'static) -> Self {
        Self {
            deps: deps.iter().map(|c| c.container_id()).collect(),
            test: Rc::new(test),
        }
    }

    /// True while `flag` is false.
    pub fn not(flag: &Store<bool>) -> Self {
        let flag_clone = flag.clone();
        Self {
            deps: vec![flag.id()],
            test: Rc::new(move || !flag_clone.get()),
        }
    }

    pub fn eval(&self) -> bool {
        (self.test)()
    }
}

impl From<&Store<bool>> for Guard {
    fn from(flag: &Store<bool>) -> Self {
        let flag_clone = flag.clone();
        Self {
            deps: vec![flag.id()],
            test: Rc::new(move || flag_clone.get()),
        }
    }
}

pub(crate) struct Branch {
    pub(crate) guard: Guard,
    pub(crate) body: Node,
}

/// Ordered guarded branches plus an optional else.
pub struct Conditional {
    pub(crate) branches: Vec<Branch>,
    pub(crate) otherwise: Option<Box<Node>>,
}

impl Conditional {
    pub fn else_if(mut self, guard: impl Into<Guard>, body: impl Into<Node>) -> Self {
        self.branches.push(Branch {
            guard: guard.into(),
            body: body.into(),
        });
        self
    }

    pub fn otherwise(mut self, body: impl Into<Node>) -> Self {
        self.otherwise = Some(Box::new(body.into()));
        self
    }

    /// Index of the first branch whose guard holds right now.
    pub fn active_branch(&self) -> Option<usize> {
        self.branches.iter().position(|b| b.guard.eval())
    }
}

impl From<Conditional> for Node {
    fn from(c: Conditional) -> Self {
        Node::If(c)
    }
}

// =============================================================================
// EACH
// =============================================================================

/// A block repeated for every item of a [`List`].
pub struct Each {
    pub(crate) list: ContainerId,
    pub(crate) item_var: String,
    pub(crate) index_var: String,
    pub(crate) items: Box<dyn Fn() -> Vec<Node>>,
    pub(crate) otherwise: Option<Box<Node>>,
}

impl Each {
    /// Rendered instead of the items when the list is empty.
    pub fn otherwise(mut self, body: impl Into<Node>) -> Self {
        self.otherwise = Some(Box::new(body.into()));
        self
    }
}

impl From<Each> for Node {
    fn from(e: Each) -> Self {
        Node::Each(e)
    }
}

// =============================================================================
// NESTED COMPONENT
// =============================================================================

type Mount = Box<dyn Fn(&mut PropWiring) -> Box<dyn Component>>;

/// A child component instance, created and wired at render time.
pub struct Nested {
    pub(crate) mount: Mount,
    pub(crate) slot: Option<Rc<Node>>,
}

impl Nested {
    /// Content rendered in the parent's scope and placed at the child's
    /// [`Node::Slot`]. Each `Slot` the child emits renders it afresh with
    /// new markers; a child that never emits one leaves no trace of it.
    pub fn slot(mut self, content: impl Into<Node>) -> Self {
        self.slot = Some(Rc::new(content.into()));
        self
    }

    pub(crate) fn instantiate(&self, wiring: &mut PropWiring) -> Box<dyn Component> {
        (self.mount)(wiring)
    }
}

impl From<Nested> for Node {
    fn from(n: Nested) -> Self {
        Node::Component(n)
    }
}

// =============================================================================
// CONSTRUCTORS
// =============================================================================

/// Static text.
pub fn text(s: &str) -> Node {
    Node::Text(s.to_string())
}

/// Text bound to a store.
pub fn bind<T: fmt::Display + 'static>(source: &Store<T>) -> Node {
    Node::Bind(Rc::new(source.clone()))
}

/// Element builder.
pub fn el(tag: &str) -> Element {
    Element::new(tag)
}

pub fn fragment(children: Vec<Node>) -> Node {
    Node::Fragment(children)
}

/// Two-way `value` binding on the control described by `markup`
/// (e.g. `<input type="text">` or `<select></select>`).
pub fn input_value<T: fmt::Display + 'static>(markup: &str, source: &Store<T>) -> Input {
    Input {
        markup: markup.to_string(),
        target: InputTarget::Value(Rc::new(source.clone())),
    }
}

/// Two-way `checked` binding (e.g. `<input type="checkbox">`).
pub fn input_checked(markup: &str, flag: &Store<bool>) -> Input {
    Input {
        markup: markup.to_string(),
        target: InputTarget::Checked(flag.clone()),
    }
}

/// `<textarea>` whose content is bound to `source`.
pub fn textarea<T: fmt::Display + 'static>(source: &Store<T>) -> Input {
    input_value("<textarea></textarea>", source)
}

/// Start a conditional with its first branch.
pub fn when(guard: impl Into<Guard>, body: impl Into<Node>) -> Conditional {
    Conditional {
        branches: Vec::new(),
        otherwise: None,
    }
    .else_if(guard, body)
}

/// Repeat `template` for every item of `list`.
///
/// `item_var` and `index_var` name the loop variables for the hydration
/// layer. The root element of each item receives the id `<marker>_<index>`.
pub fn each<T, F, N>(list: &List<T>, item_var: &str, index_var: &str, template: F) -> Each
where
    T: PartialEq + Clone + 'static,
    F: Fn(&T, usize) -> N + 'static,
    N: Into<Node>,
{
    let source = list.clone();
    Each {
        list: list.id(),
        item_var: item_var.to_string(),
        index_var: index_var.to_string(),
        items: Box::new(move || {
            source.with(|items| {
                items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| template(item, i).into())
                    .collect()
            })
        }),
        otherwise: None,
    }
}

/// Nest a component, built from its typed props.
pub fn component<P: Props>(props: P) -> Nested {
    Nested {
        mount: Box::new(move |wiring: &mut PropWiring| -> Box<dyn Component> {
            let mut child = P::Target::default();
            props.clone().inject(&mut child, wiring);
            Box::new(child)
        }),
        slot: None,
    }
}

/// Nest a component that takes no props.
pub fn component_of<C: Component + Default>() -> Nested {
    Nested {
        mount: Box::new(|_: &mut PropWiring| -> Box<dyn Component> { Box::new(C::default()) }),
        slot: None,
    }
}

/// Slot placeholder.
pub fn slot() -> Node {
    Node::Slot
}

// =============================================================================
// TESTS
// =============================================================================
