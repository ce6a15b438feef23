// ============================================================================
// spark-hydrate - SSR Renderer
// Single pass over the node tree producing HTML and the binding manifest
// ============================================================================
//
// Every dynamic point gets a marker as it is written. The marker goes into
// the markup (an element id or an anchor comment) and the same string goes
// into the manifest, so the two always agree.
//
// A render is owned by one `RenderSession`. The session holds what spans the
// whole render (options, the style set). Everything scoped to a component or
// branch lives in a `BuildContext`.
// ============================================================================

use std::collections::HashSet;
use std::rc::Rc;

use tracing::{debug, instrument};

use crate::core::constants::is_void_element;
use crate::primitives::component::Component;
use crate::primitives::props::PropWiring;
use crate::render::bindings::{
    AttrBinding, AttrCondBinding, CollectedBindings, ComponentBinding, EachBlockBinding,
    EventBinding, IfBlock, IfBranch, InputBinding, InputKind, PropBinding, TextBinding,
    item_element_id,
};
use crate::render::context::{BuildContext, MarkerKind};
use crate::render::inject::{escape, inject_attrs, inject_textarea_content};
use crate::render::node::{Conditional, Each, Element, Input, InputTarget, Nested, Node};
use crate::render::options::RenderOptions;
use crate::render::output::RenderOutput;

// =============================================================================
// RENDERER
// =============================================================================

/// Entry point for server-side rendering.
///
/// A `Renderer` holds only configuration and can render any number of
/// components; each call runs in a fresh session.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render a root component.
    #[instrument(skip_all, fields(component = root.type_name()))]
    pub fn render<C: Component>(&self, root: &C) -> RenderOutput {
        debug!(
            component = root.type_name(),
            prefix = %self.options.root_prefix,
            "rendering root component"
        );
        RenderSession::new(self.options.clone()).render_root(root)
    }

    /// Render a bare node tree with no owning component.
    pub fn render_node(&self, node: &Node) -> RenderOutput {
        let mut session = RenderSession::new(self.options.clone());
        let mut ctx = BuildContext::root(&self.options.root_prefix);
        let mut html = String::new();
        session.node(node, &mut ctx, &mut html);
        session.finish(html, ctx)
    }
}

// =============================================================================
// RENDER SESSION
// =============================================================================

/// Slot content passed to a component, rendered lazily in the parent's
/// namespace.
struct SlotFrame {
    content: Rc<Node>,
    /// Parent scope the content renders into. Its counters advance with
    /// every emission.
    scope: BuildContext,
}

/// State spanning one whole render.
struct RenderSession {
    options: RenderOptions,
    style_keys: HashSet<&'static str>,
    styles: Vec<String>,
    /// One entry per component being rendered, innermost last.
    slots: Vec<Option<SlotFrame>>,
}

impl RenderSession {
    fn new(options: RenderOptions) -> Self {
        Self {
            options,
            style_keys: HashSet::new(),
            styles: Vec::new(),
            slots: Vec::new(),
        }
    }

    fn render_root(mut self, root: &dyn Component) -> RenderOutput {
        let mut ctx = BuildContext::root(&self.options.root_prefix);
        ctx.declare(&root.fields());
        self.collect_style(root);

        let tree = root.render();
        let mut html = String::new();
        self.node(&tree, &mut ctx, &mut html);
        self.finish(html, ctx)
    }

    fn finish(self, html: String, ctx: BuildContext) -> RenderOutput {
        let (bindings, names) = ctx.into_parts();
        RenderOutput::new(
            html,
            bindings,
            self.styles,
            names,
            self.options.manifest_script_id,
        )
    }

    /// Record a component type's style once per render.
    fn collect_style(&mut self, component: &dyn Component) {
        if !self.options.collect_styles {
            return;
        }
        if let Some(style) = component.style() {
            if self.style_keys.insert(component.type_name()) {
                self.styles.push(style);
            }
        }
    }

    fn node(&mut self, node: &Node, ctx: &mut BuildContext, out: &mut String) {
        match node {
            Node::Text(s) => out.push_str(&escape(s)),
            Node::Bind(source) => {
                let marker = ctx.next_marker(MarkerKind::Text);
                let container = ctx.name_of(source.container_id());
                out.push_str(&format!(
                    "<span id=\"{marker}\">{}</span>",
                    escape(&source.current_text())
                ));
                ctx.bindings_mut().text.push(TextBinding {
                    marker_id: marker,
                    container,
                });
            }
            Node::Element(element) => self.element(element, ctx, out),
            Node::Fragment(children) => {
                for child in children {
                    self.node(child, ctx, out);
                }
            }
            Node::Input(input) => self.input(input, ctx, out),
            Node::If(cond) => self.conditional(cond, ctx, out),
            Node::Each(each) => self.each(each, ctx, out),
            Node::Component(nested) => self.component(nested, ctx, out),
            Node::Slot => self.slot(out),
        }
    }

    /// Render `node` in an isolated scope of `ctx`.
    fn scoped(&mut self, node: &Node, ctx: &mut BuildContext) -> (String, CollectedBindings) {
        let mut scope = ctx.scope();
        let mut html = String::new();
        self.node(node, &mut scope, &mut html);
        (html, ctx.close_scope(scope))
    }

    // =========================================================================
    // ELEMENTS
    // =========================================================================

    fn element(&mut self, element: &Element, ctx: &mut BuildContext, out: &mut String) {
        let id = match ctx.take_pending_item_id() {
            Some(id) => Some(id),
            None if element.is_dynamic() => Some(ctx.next_marker(MarkerKind::Element)),
            None => None,
        };

        let mut attrs = element.attrs.clone();
        if let Some(id) = &id {
            set_attr(&mut attrs, "id", id.clone());

            for (name, source) in &element.bound_attrs {
                set_attr(&mut attrs, name, source.current_text());
                let container = ctx.name_of(source.container_id());
                ctx.bindings_mut().attrs.push(AttrBinding {
                    element_id: id.clone(),
                    attr: name.clone(),
                    container,
                });
            }

            for toggle in &element.toggles {
                if toggle.flag.get() {
                    join_attr(&mut attrs, &toggle.attr, &toggle.value);
                }
                let container = ctx.name_of(toggle.flag.id());
                ctx.bindings_mut().attr_conds.push(AttrCondBinding {
                    element_id: id.clone(),
                    attr: toggle.attr.clone(),
                    value: toggle.value.clone(),
                    container,
                });
            }

            for (event, handler) in &element.events {
                let component = ctx.instance().to_string();
                ctx.bindings_mut().events.push(EventBinding {
                    element_id: id.clone(),
                    event: event.clone(),
                    handler: handler.clone(),
                    component,
                });
            }
        }

        out.push('<');
        out.push_str(&element.tag);
        for (name, value) in &attrs {
            out.push_str(&format!(" {name}=\"{}\"", escape(value)));
        }
        out.push('>');

        if is_void_element(&element.tag) {
            return;
        }
        for child in &element.children {
            self.node(child, ctx, out);
        }
        out.push_str(&format!("</{}>", element.tag));
    }

    fn input(&mut self, input: &Input, ctx: &mut BuildContext, out: &mut String) {
        let id = ctx
            .take_pending_item_id()
            .unwrap_or_else(|| ctx.next_marker(MarkerKind::Element));
        let container = ctx.name_of(input.target.container_id());
        let id_attr = format!("id=\"{id}\"");

        let (html, kind) = match &input.target {
            InputTarget::Value(source) if input.is_textarea() => (
                inject_textarea_content(
                    &inject_attrs(&input.markup, &id_attr),
                    &source.current_text(),
                ),
                InputKind::Value,
            ),
            InputTarget::Value(source) => (
                inject_attrs(
                    &input.markup,
                    &format!("{id_attr} value=\"{}\"", escape(&source.current_text())),
                ),
                InputKind::Value,
            ),
            InputTarget::Checked(flag) => {
                let attrs = if flag.get() {
                    format!("{id_attr} checked")
                } else {
                    id_attr
                };
                (inject_attrs(&input.markup, &attrs), InputKind::Checked)
            }
        };

        out.push_str(&html);
        ctx.bindings_mut().inputs.push(InputBinding {
            element_id: id,
            container,
            kind,
        });
    }

    // =========================================================================
    // BLOCKS
    // =========================================================================

    fn conditional(&mut self, cond: &Conditional, ctx: &mut BuildContext, out: &mut String) {
        let marker = ctx.next_marker(MarkerKind::If);
        let active = cond.active_branch();
        let mut emitted = String::new();

        let mut branches = Vec::with_capacity(cond.branches.len());
        for (i, branch) in cond.branches.iter().enumerate() {
            let deps = branch
                .guard
                .deps
                .iter()
                .map(|id| ctx.name_of(*id))
                .collect();
            let (html, bindings) = self.scoped(&branch.body, ctx);
            if active == Some(i) {
                emitted.clone_from(&html);
            }
            branches.push(IfBranch {
                deps,
                html,
                bindings,
            });
        }

        let else_branch = cond.otherwise.as_deref().map(|body| {
            let (html, bindings) = self.scoped(body, ctx);
            if active.is_none() {
                emitted.clone_from(&html);
            }
            IfBranch {
                deps: Vec::new(),
                html,
                bindings,
            }
        });

        out.push_str(&emitted);
        out.push_str(&format!("<!--{marker}-->"));
        ctx.bindings_mut().if_blocks.push(IfBlock {
            marker_id: marker,
            branches,
            else_branch,
            active,
        });
    }

    fn each(&mut self, each: &Each, ctx: &mut BuildContext, out: &mut String) {
        let marker = ctx.next_marker(MarkerKind::Each);
        let list_ref = ctx.name_of(each.list);
        let nodes = (each.items)();

        let mut items = Vec::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            let item_id = item_element_id(&marker, i);
            let mut scope = ctx.scope();
            match node {
                Node::Element(_) | Node::Input(_) => {
                    scope.set_pending_item_id(item_id);
                    self.node(node, &mut scope, out);
                }
                _ => {
                    out.push_str(&format!("<span id=\"{item_id}\">"));
                    self.node(node, &mut scope, out);
                    out.push_str("</span>");
                }
            }
            items.push(ctx.close_scope(scope));
        }

        let else_bindings = match each.otherwise.as_deref() {
            Some(body) if nodes.is_empty() => {
                let (html, bindings) = self.scoped(body, ctx);
                out.push_str(&html);
                Some(bindings)
            }
            _ => None,
        };

        out.push_str(&format!("<!--{marker}-->"));
        ctx.bindings_mut().each_blocks.push(EachBlockBinding {
            marker_id: marker,
            list_ref,
            item_var: each.item_var.clone(),
            index_var: each.index_var.clone(),
            items,
            else_bindings,
        });
    }

    // =========================================================================
    // NESTED COMPONENTS
    // =========================================================================

    fn component(&mut self, nested: &Nested, ctx: &mut BuildContext, out: &mut String) {
        let marker = ctx.next_marker(MarkerKind::Component);

        let mut wiring = PropWiring::new();
        let child = nested.instantiate(&mut wiring);
        self.collect_style(child.as_ref());
        debug!(
            component = child.type_name(),
            marker = %marker,
            shared_props = wiring.shared_count(),
            "rendering nested component"
        );

        self.slots.push(nested.slot.clone().map(|content| SlotFrame {
            content,
            scope: ctx.scope(),
        }));

        let mut child_ctx = ctx.nested(&marker);
        child_ctx.declare(&child.fields());

        let tree = child.render();
        let mut html = String::new();
        self.node(&tree, &mut child_ctx, &mut html);

        // Only slot emissions that actually happened reach the manifest
        if let Some(frame) = self.slots.pop().flatten() {
            let slot_bindings = ctx.close_scope(frame.scope);
            ctx.bindings_mut().merge(slot_bindings);
        }

        let (child_bindings, child_names) = child_ctx.into_parts();
        ctx.reconcile(child_names);
        ctx.bindings_mut().merge(child_bindings);

        let props = wiring
            .props()
            .iter()
            .map(|p| PropBinding {
                name: p.name.clone(),
                container: ctx.name_of(p.container),
                shared: p.shared,
            })
            .collect();
        ctx.bindings_mut().components.push(ComponentBinding {
            id: marker.clone(),
            component: child.type_name().to_string(),
            props,
        });

        if self.options.component_anchors {
            out.push_str(&format!("<!--{marker}-->{html}<!--/{marker}-->"));
        } else {
            out.push_str(&html);
        }
    }

    /// Emit the enclosing component's slot content.
    ///
    /// The frame is off the stack while its content renders, so a `Slot`
    /// inside that content resolves to the next component out.
    fn slot(&mut self, out: &mut String) {
        match self.slots.pop() {
            Some(Some(mut frame)) => {
                self.node(&frame.content, &mut frame.scope, out);
                self.slots.push(Some(frame));
            }
            Some(None) => self.slots.push(None),
            None => {}
        }
    }
}

/// Set `name` to `value`, replacing an existing entry in place.
fn set_attr(attrs: &mut Vec<(String, String)>, name: &str, value: String) {
    match attrs.iter_mut().find(|(n, _)| n == name) {
        Some((_, v)) => *v = value,
        None => attrs.push((name.to_string(), value)),
    }
}

/// Add `value` to `name`, space-separated from any existing value.
fn join_attr(attrs: &mut Vec<(String, String)>, name: &str, value: &str) {
    match attrs.iter_mut().find(|(n, _)| n == name) {
        Some((_, v)) if v.is_empty() => *v = value.to_string(),
        Some((_, v)) => {
            v.push(' ');
            v.push_str(value);
        }
        None => attrs.push((name.to_string(), value.to_string())),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::{List, list};
    use crate::primitives::component::Fields;
    use crate::primitives::props::{Prop, Props};
    use crate::primitives::store::{Store, store};
    use crate::render::node::{
        bind, component, component_of, each, el, fragment, input_checked, input_value, slot,
        text, textarea, when,
    };

    #[derive(Default)]
    struct Counter {
        count: Store<i32>,
    }

    impl Component for Counter {
        fn fields(&self) -> Fields {
            Fields::new().field("count", &self.count)
        }

        fn style(&self) -> Option<String> {
            Some(".counter { display: flex }".to_string())
        }

        fn render(&self) -> Node {
            el("button")
                .class("counter")
                .on("click", "increment")
                .child(bind(&self.count))
                .into()
        }
    }

    #[derive(Clone)]
    struct CounterProps {
        count: Prop<i32>,
    }

    impl Props for CounterProps {
        type Target = Counter;

        fn inject(self, target: &mut Counter, wiring: &mut PropWiring) {
            self.count.inject("count", &mut target.count, wiring);
        }
    }

    fn render(node: Node) -> RenderOutput {
        Renderer::new().render_node(&node)
    }

    #[test]
    fn static_text_is_escaped() {
        let out = render(el("p").text("a < b & c").into());
        assert_eq!(out.html, "<p>a &lt; b &amp; c</p>");
        assert!(out.bindings.is_empty());
    }

    #[test]
    fn bound_text_gets_a_span_marker() {
        let n = store(4);
        let out = render(el("p").child(bind(&n)).child(bind(&n)).into());
        assert_eq!(
            out.html,
            r#"<p><span id="t0">4</span><span id="t1">4</span></p>"#
        );
        assert_eq!(out.bindings.text.len(), 2);
        assert_eq!(out.bindings.text[1].marker_id, "t1");
    }

    #[test]
    fn void_elements_have_no_children_or_close_tag() {
        let out = render(el("img").attr("src", "a.png").text("ignored").into());
        assert_eq!(out.html, r#"<img src="a.png">"#);
    }

    #[test]
    fn dynamic_element_records_events_and_attrs() {
        let title = store("hello".to_string());
        let on = store(true);
        let off = store(false);
        let out = render(
            el("div")
                .class("card")
                .bind_attr("title", &title)
                .toggle("class", "active", &on)
                .toggle("class", "hidden", &off)
                .on("click", "select")
                .into(),
        );

        assert_eq!(
            out.html,
            r#"<div class="card active" id="a0" title="hello"></div>"#
        );
        assert_eq!(out.bindings.events[0].element_id, "a0");
        assert_eq!(out.bindings.events[0].handler, "select");
        assert_eq!(out.bindings.events[0].component, "");
        assert_eq!(out.bindings.attrs[0].attr, "title");
        assert_eq!(out.bindings.attr_conds.len(), 2);
        assert_eq!(out.bindings.attr_conds[1].value, "hidden");
    }

    #[test]
    fn bound_attr_replaces_static_value() {
        let href = store("b".to_string());
        let out = render(el("a").attr("href", "a").bind_attr("href", &href).into());
        assert_eq!(out.html, r#"<a href="b" id="a0"></a>"#);
    }

    #[test]
    fn inputs_inject_id_and_value() {
        let name = store("Ada".to_string());
        let agreed = store(true);
        let notes = store("x < y".to_string());
        let out = render(fragment(vec![
            input_value(r#"<input type="text">"#, &name).into(),
            input_checked(r#"<input type="checkbox"/>"#, &agreed).into(),
            textarea(&notes).into(),
        ]));

        assert_eq!(
            out.html,
            concat!(
                r#"<input type="text" id="a0" value="Ada">"#,
                r#"<input type="checkbox" id="a1" checked />"#,
                r#"<textarea id="a2">x &lt; y</textarea>"#,
            )
        );
        let kinds: Vec<InputKind> = out.bindings.inputs.iter().map(|i| i.kind).collect();
        assert_eq!(kinds, vec![InputKind::Value, InputKind::Checked, InputKind::Value]);
    }

    #[test]
    fn conditional_emits_active_branch_and_anchor() {
        let a = store(false);
        let b = store(true);
        let out = render(
            when(&a, text("A"))
                .else_if(&b, text("B"))
                .otherwise(text("C"))
                .into(),
        );

        assert_eq!(out.html, "B<!--i0-->");
        let block = &out.bindings.if_blocks[0];
        assert_eq!(block.active, Some(1));
        assert_eq!(block.branches[0].html, "A");
        assert_eq!(block.else_branch.as_ref().unwrap().html, "C");
    }

    #[test]
    fn branch_markers_do_not_collide() {
        let flag = store(true);
        let n = store(1);
        let out = render(fragment(vec![
            when(&flag, bind(&n)).otherwise(bind(&n)).into(),
            bind(&n),
        ]));

        let block = &out.bindings.if_blocks[0];
        assert_eq!(block.branches[0].bindings.text[0].marker_id, "t0");
        assert_eq!(
            block.else_branch.as_ref().unwrap().bindings.text[0].marker_id,
            "t1"
        );
        assert_eq!(out.bindings.text[0].marker_id, "t2");
    }

    #[test]
    fn each_items_get_index_ids() {
        let todos: List<&str> = list(vec!["a", "b"]);
        let out = render(each(&todos, "todo", "i", |t, _| el("li").text(t)).into());
        assert_eq!(
            out.html,
            r#"<li id="e0_0">a</li><li id="e0_1">b</li><!--e0-->"#
        );
        let block = &out.bindings.each_blocks[0];
        assert_eq!(block.items.len(), 2);
        assert_eq!(block.item_var, "todo");
    }

    #[test]
    fn non_element_items_are_wrapped() {
        let nums = list(vec![1, 2]);
        let out = render(each(&nums, "n", "i", |n, _| text(&n.to_string())).into());
        assert_eq!(
            out.html,
            r#"<span id="e0_0">1</span><span id="e0_1">2</span><!--e0-->"#
        );
    }

    #[test]
    fn dynamic_item_root_uses_item_id() {
        let rows = list(vec!["x"]);
        let out = render(
            each(&rows, "row", "i", |r, _| el("li").on("click", "pick").text(r)).into(),
        );
        assert_eq!(out.html, r#"<li id="e0_0">x</li><!--e0-->"#);
        assert_eq!(out.bindings.each_blocks[0].items[0].events[0].element_id, "e0_0");
    }

    #[test]
    fn empty_list_renders_else() {
        let empty: List<i32> = list(Vec::new());
        let out = render(
            each(&empty, "n", "i", |n, _| text(&n.to_string()))
                .otherwise(el("p").text("none"))
                .into(),
        );
        assert_eq!(out.html, "<p>none</p><!--e0-->");
        assert!(out.bindings.each_blocks[0].else_bindings.is_some());
    }

    #[test]
    fn nested_component_is_namespaced_and_anchored() {
        let total = store(7);
        let out = render(component(CounterProps { count: Prop::from(&total) }).into());

        assert_eq!(
            out.html,
            concat!(
                "<!--c0-->",
                r#"<button class="counter" id="c0_a0"><span id="c0_t0">7</span></button>"#,
                "<!--/c0-->"
            )
        );
        assert_eq!(out.bindings.components[0].id, "c0");
        assert!(out.bindings.components[0].props[0].shared);
        assert_eq!(out.bindings.events[0].component, "c0");
        assert_eq!(out.styles, vec![".counter { display: flex }".to_string()]);
    }

    #[test]
    fn styles_are_deduped_by_type() {
        let out = render(fragment(vec![
            component_of::<Counter>().into(),
            component_of::<Counter>().into(),
        ]));
        assert_eq!(out.styles.len(), 1);
        assert_eq!(out.bindings.components.len(), 2);
        assert_eq!(out.bindings.components[1].id, "c1");
    }

    #[test]
    fn options_disable_anchors_and_styles() {
        let renderer = Renderer::with_options(
            RenderOptions::new()
                .with_component_anchors(false)
                .with_collect_styles(false)
                .with_root_prefix("app_"),
        );
        let out = renderer.render_node(&component_of::<Counter>().into());
        assert!(out.html.starts_with(r#"<button class="counter" id="app_c0_a0">"#));
        assert!(out.styles.is_empty());
    }

    #[derive(Default)]
    struct Frame;

    impl Component for Frame {
        fn render(&self) -> Node {
            el("section").child(slot()).into()
        }
    }

    #[test]
    fn slot_content_renders_in_parent_namespace() {
        let n = store(1);
        let out = render(component_of::<Frame>().slot(bind(&n)).into());
        assert_eq!(
            out.html,
            r#"<!--c0--><section><span id="t0">1</span></section><!--/c0-->"#
        );
        assert_eq!(out.bindings.text[0].marker_id, "t0");
    }

    #[derive(Default)]
    struct Twice;

    impl Component for Twice {
        fn render(&self) -> Node {
            el("div").child(slot()).child(slot()).into()
        }
    }

    #[derive(Default)]
    struct Ignores;

    impl Component for Ignores {
        fn render(&self) -> Node {
            text("x")
        }
    }

    struct Repeat {
        rows: List<u8>,
    }

    impl Default for Repeat {
        fn default() -> Self {
            Self {
                rows: list(vec![1, 2]),
            }
        }
    }

    impl Component for Repeat {
        fn fields(&self) -> Fields {
            Fields::new().field("rows", &self.rows)
        }

        fn render(&self) -> Node {
            each(&self.rows, "row", "i", |_, _| slot()).into()
        }
    }

    #[test]
    fn repeated_slot_gets_fresh_markers() {
        let n = store(1);
        let out = render(component_of::<Twice>().slot(bind(&n)).into());
        assert_eq!(
            out.html,
            r#"<!--c0--><div><span id="t0">1</span><span id="t1">1</span></div><!--/c0-->"#
        );
        let markers: Vec<&str> = out.bindings.text.iter().map(|t| t.marker_id.as_str()).collect();
        assert_eq!(markers, vec!["t0", "t1"]);
    }

    #[test]
    fn slot_counters_carry_back_to_parent() {
        let n = store(1);
        let out = render(fragment(vec![
            component_of::<Twice>().slot(bind(&n)).into(),
            bind(&n),
        ]));
        assert_eq!(out.bindings.text[2].marker_id, "t2");
        assert!(out.html.ends_with(r#"<span id="t2">1</span>"#));
    }

    #[test]
    fn unused_slot_leaves_no_bindings() {
        let n = store(1);
        let out = render(component_of::<Ignores>().slot(bind(&n)).into());
        assert_eq!(out.html, "<!--c0-->x<!--/c0-->");
        let markers: Vec<String> = out.bindings.markers().into_iter().collect();
        assert_eq!(markers, vec!["c0"]);
    }

    #[test]
    fn slot_inside_each_renders_per_item() {
        let n = store(7);
        let out = render(component_of::<Repeat>().slot(bind(&n)).into());
        assert_eq!(
            out.html,
            concat!(
                "<!--c0-->",
                r#"<span id="c0_e0_0"><span id="t0">7</span></span>"#,
                r#"<span id="c0_e0_1"><span id="t1">7</span></span>"#,
                "<!--c0_e0--><!--/c0-->"
            )
        );
        assert_eq!(out.bindings.text.len(), 2);
    }

    #[derive(Default)]
    struct Forward;

    impl Component for Forward {
        fn render(&self) -> Node {
            component_of::<Twice>().slot(slot()).into()
        }
    }

    #[test]
    fn forwarded_slot_reaches_the_outer_content() {
        let n = store(3);
        let out = render(component_of::<Forward>().slot(bind(&n)).into());
        assert_eq!(
            out.html,
            concat!(
                "<!--c0--><!--c0_c0-->",
                r#"<div><span id="t0">3</span><span id="t1">3</span></div>"#,
                "<!--/c0_c0--><!--/c0-->"
            )
        );
        let markers: Vec<&str> = out.bindings.text.iter().map(|t| t.marker_id.as_str()).collect();
        assert_eq!(markers, vec!["t0", "t1"]);
    }

    #[test]
    fn slot_outside_any_component_renders_nothing() {
        let out = render(el("p").child(slot()).into());
        assert_eq!(out.html, "<p></p>");
    }

    #[test]
    fn root_component_declares_its_fields() {
        let counter = Counter::default();
        counter.count.set(2);
        let out = Renderer::new().render(&counter);
        assert_eq!(out.bindings.text[0].container, "count");
        assert_eq!(out.name_of(counter.count.id()), Some("count"));
    }
}
