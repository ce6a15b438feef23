// ============================================================================
// spark-hydrate - Render Options
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::core::constants::DEFAULT_MANIFEST_SCRIPT_ID;
use crate::core::error::{RenderError, RenderResult};

/// Renderer configuration.
///
/// Missing fields take their defaults when deserializing, so a partial
/// document like `{"rootPrefix": "app_"}` is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Marker namespace of the root component, used verbatim.
    pub root_prefix: String,
    /// Collect and dedupe component styles.
    pub collect_styles: bool,
    /// Wrap nested component output in `<!--cN-->…<!--/cN-->`.
    pub component_anchors: bool,
    /// Element id of the manifest script tag written by `into_page`.
    pub manifest_script_id: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            root_prefix: String::new(),
            collect_styles: true,
            component_anchors: true,
            manifest_script_id: DEFAULT_MANIFEST_SCRIPT_ID.to_string(),
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> RenderResult<Self> {
        serde_json::from_str(json).map_err(RenderError::Options)
    }

    pub fn with_root_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.root_prefix = prefix.into();
        self
    }

    pub fn with_collect_styles(mut self, collect: bool) -> Self {
        self.collect_styles = collect;
        self
    }

    pub fn with_component_anchors(mut self, anchors: bool) -> Self {
        self.component_anchors = anchors;
        self
    }

    pub fn with_manifest_script_id(mut self, id: impl Into<String>) -> Self {
        self.manifest_script_id = id.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = RenderOptions::default();
        assert_eq!(o.root_prefix, "");
        assert!(o.collect_styles);
        assert!(o.component_anchors);
        assert_eq!(o.manifest_script_id, "__bindings");
    }

    #[test]
    fn partial_json_fills_defaults() {
        let o = RenderOptions::from_json(r#"{"rootPrefix":"app_","componentAnchors":false}"#)
            .unwrap();
        assert_eq!(o.root_prefix, "app_");
        assert!(!o.component_anchors);
        assert!(o.collect_styles);
    }

    #[test]
    fn invalid_json_is_an_options_error() {
        let err = RenderOptions::from_json(r#"{"collectStyles":"yes"}"#).unwrap_err();
        assert!(matches!(err, RenderError::Options(_)));
    }

    #[test]
    fn builders_chain() {
        let o = RenderOptions::new()
            .with_root_prefix("x_")
            .with_collect_styles(false)
            .with_manifest_script_id("m");
        assert_eq!(o.root_prefix, "x_");
        assert!(!o.collect_styles);
        assert_eq!(o.manifest_script_id, "m");
    }
}
