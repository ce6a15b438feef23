// ============================================================================
// spark-hydrate - Markup Injection
// Adding attributes and textarea content to caller-supplied markup
// ============================================================================

use tracing::warn;

/// HTML-escape text for element content or a double-quoted attribute.
///
/// Besides `< > & "` this also escapes `'` as `&#x27;` and `/` as `&#x2f;`,
/// so `href="/x"` renders as `href="&#x2f;x"`. Browsers decode both back to
/// the original characters, and `el.getAttribute` sees the unescaped value.
pub fn escape(s: &str) -> String {
    v_htmlescape::escape(s).to_string()
}

/// Byte index of the `>` that closes the first tag in `markup`, skipping
/// any `>` inside quoted attribute values.
pub fn opening_tag_end(markup: &str) -> Option<usize> {
    let start = markup.find('<')?;
    let mut quote: Option<u8> = None;

    for (i, b) in markup.bytes().enumerate().skip(start + 1) {
        match (quote, b) {
            (Some(q), _) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(b),
            (None, b'>') => return Some(i),
            (None, _) => {}
        }
    }
    None
}

/// Insert `attrs` into the opening tag of `markup`.
///
/// ```
/// use spark_hydrate::inject_attrs;
///
/// assert_eq!(inject_attrs(r#"<input type="text">"#, r#"id="x""#), r#"<input type="text" id="x">"#);
/// assert_eq!(inject_attrs("<br/>", r#"id="x""#), r#"<br id="x" />"#);
/// ```
pub fn inject_attrs(markup: &str, attrs: &str) -> String {
    let Some(end) = opening_tag_end(markup) else {
        warn!(markup, "opening tag has no closing `>`, appending attributes");
        return format!("{markup} {attrs}");
    };

    let head = &markup[..end];
    let rest = &markup[end + 1..];
    match head.strip_suffix('/') {
        Some(head) => format!("{} {attrs} />{rest}", head.trim_end()),
        None => format!("{} {attrs}>{rest}", head.trim_end()),
    }
}

/// Replace the content of a `<textarea>` with the escaped `content`.
///
/// Everything between the opening tag and the first `</textarea` (any case)
/// is dropped.
pub fn inject_textarea_content(markup: &str, content: &str) -> String {
    let escaped = escape(content);
    let Some(end) = opening_tag_end(markup) else {
        warn!(markup, "textarea tag has no closing `>`, appending content");
        return format!("{markup}{escaped}");
    };

    let open = &markup[..=end];
    let body = &markup[end + 1..];
    match body.to_ascii_lowercase().find("</textarea") {
        Some(close) => format!("{open}{escaped}{}", &body[close..]),
        None => {
            warn!(markup, "textarea has no closing tag, appending content");
            format!("{open}{escaped}{body}")
        }
    }
}
