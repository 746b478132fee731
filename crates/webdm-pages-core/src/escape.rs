//! HTML escaping for interpolated values.
//!
//! Every data-sourced string a template interpolates (description text,
//! screenshot URLs, framework names) passes through [`html`] before it is
//! inserted into markup, so a value can never inject elements or break out
//! of an attribute.

/// Escape the five HTML-significant characters: `&`, `<`, `>`, `"`, `'`.
///
/// Single pass; everything else (including multi-byte characters) is copied
/// through unchanged. Already-escaped input is escaped again (`&lt;` becomes
/// `&amp;lt;`); the renderer always works from raw values.
pub fn html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_special_chars() {
        assert_eq!(html("&<>\"'"), "&amp;&lt;&gt;&quot;&#39;");
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(html("A plain description, no markup."), "A plain description, no markup.");
    }

    #[test]
    fn test_escape_empty() {
        assert_eq!(html(""), "");
    }

    #[test]
    fn test_escape_markup_injection() {
        assert_eq!(
            html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_does_not_trust_entities() {
        // A raw "&lt;" in the data is data, not an entity.
        assert_eq!(html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_escape_preserves_multibyte() {
        assert_eq!(html("café ☕ <hot>"), "café ☕ &lt;hot&gt;");
    }
}
