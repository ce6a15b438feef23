// ============================================================================
// spark-hydrate - Constants
// Marker kind letters, anchor formats and the HTML void-element list
// ============================================================================

// =============================================================================
// MARKER KIND LETTERS
// =============================================================================
//
// A marker is `<prefix><kind-letter><counter>`. Each kind has its own
// counter, so the letter keeps equal counters of different kinds apart.
// =============================================================================

/// Text interpolation (`<span id="t0">`)
pub const TEXT_MARKER: char = 't';

/// Conditional block anchor (`<!--i0-->`)
pub const IF_MARKER: char = 'i';

/// List block anchor (`<!--e0-->`)
pub const EACH_MARKER: char = 'e';

/// Nested component namespace (`<!--c0-->`, children prefixed `c0_`)
pub const COMPONENT_MARKER: char = 'c';

/// Element carrying events, dynamic attributes or an input binding
pub const ELEMENT_MARKER: char = 'a';

/// Separator between a namespace and the markers or indices inside it.
pub const PREFIX_SEPARATOR: char = '_';

// =============================================================================
// RENDER DEFAULTS
// =============================================================================

/// Default id of the `<script type="application/json">` tag holding the manifest.
pub const DEFAULT_MANIFEST_SCRIPT_ID: &str = "__bindings";

// =============================================================================
// VOID ELEMENTS
// =============================================================================

/// Standard HTML void elements: no children, no closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Whether `tag` is an HTML void element (case-insensitive).
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}
