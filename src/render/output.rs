// ============================================================================
// spark-hydrate - Render Output
// The immutable result of one render and its transport forms
// ============================================================================

use crate::core::error::RenderResult;
use crate::core::types::ContainerId;
use crate::render::bindings::CollectedBindings;
use crate::render::context::NameMap;
use crate::render::inject::escape;

/// HTML, manifest, styles and names produced by one render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    pub html: String,
    pub bindings: CollectedBindings,
    /// Deduplicated component styles, first-seen order.
    pub styles: Vec<String>,
    /// Resolved container names.
    pub names: NameMap,
    script_id: String,
}

impl RenderOutput {
    pub(crate) fn new(
        html: String,
        bindings: CollectedBindings,
        styles: Vec<String>,
        names: NameMap,
        script_id: String,
    ) -> Self {
        Self {
            html,
            bindings,
            styles,
            names,
            script_id,
        }
    }

    /// Name the manifest uses for `id`, if the render resolved one.
    pub fn name_of(&self, id: ContainerId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// The binding manifest as JSON.
    pub fn manifest_json(&self) -> RenderResult<String> {
        Ok(serde_json::to_string(&self.bindings)?)
    }

    /// All collected styles in one `<style>` element, or `None`.
    pub fn style_block(&self) -> Option<String> {
        if self.styles.is_empty() {
            return None;
        }
        Some(format!("<style>{}</style>", self.styles.join("\n")))
    }

    /// A complete HTML document: styles in the head, the rendered markup in
    /// the body, and the manifest in a JSON script tag after it.
    pub fn into_page(self, title: &str) -> RenderResult<String> {
        let manifest = self.manifest_json()?.replace("</", "<\\/");
        let style = self.style_block().unwrap_or_default();

        Ok(format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <title>{title}</title>\n\
             {style}\n\
             </head>\n\
             <body>\n\
             {html}\n\
             <script type=\"application/json\" id=\"{id}\">{manifest}</script>\n\
             </body>\n\
             </html>\n",
            title = escape(title),
            html = self.html,
            id = self.script_id,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::bindings::TextBinding;

    fn output() -> RenderOutput {
        let mut bindings = CollectedBindings::new();
        bindings.text.push(TextBinding {
            marker_id: "t0".to_string(),
            container: "note".to_string(),
        });
        RenderOutput::new(
            r#"<p><span id="t0">hi</span></p>"#.to_string(),
            bindings,
            vec!["p { color: red }".to_string(), ".x { margin: 0 }".to_string()],
            NameMap::new(),
            "__bindings".to_string(),
        )
    }

    #[test]
    fn manifest_json_uses_camel_case() {
        let json = output().manifest_json().unwrap();
        assert!(json.contains(r#""markerId":"t0""#));
        assert!(json.contains(r#""container":"note""#));
    }

    #[test]
    fn style_block_joins_styles() {
        assert_eq!(
            output().style_block().unwrap(),
            "<style>p { color: red }\n.x { margin: 0 }</style>"
        );

        let mut empty = output();
        empty.styles.clear();
        assert!(empty.style_block().is_none());
    }

    #[test]
    fn page_embeds_markup_styles_and_manifest() {
        let page = output().into_page("Demo").unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Demo</title>"));
        assert!(page.contains("<style>p { color: red }"));
        assert!(page.contains(r#"<p><span id="t0">hi</span></p>"#));
        assert!(page.contains(r#"<script type="application/json" id="__bindings">{"text":"#));
    }

    #[test]
    fn manifest_cannot_close_its_script_tag() {
        let mut out = output();
        out.bindings.text[0].container = "</script>".to_string();
        let page = out.into_page("x").unwrap();
        assert_eq!(page.matches("</script>").count(), 1);
        assert!(page.contains(r#"<\/script>"#));
    }
}
