// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Escaping text for embedding in rich-text markup.

use std::borrow::Cow;

/// Replace `&`, `<`, `>` and `"` with their HTML entity references.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub fn to_html_escaped(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_untouched() {
        let text = "Track 01 - It's a test";
        assert!(matches!(to_html_escaped(text), Cow::Borrowed(_)));
        assert_eq!(to_html_escaped(text), text);
        assert_eq!(to_html_escaped(""), "");
    }

    #[test]
    fn special_characters_escaped() {
        assert_eq!(
            to_html_escaped(r#"<b>"Tom & Jerry"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn existing_entities_are_escaped_again() {
        assert_eq!(to_html_escaped("&amp;"), "&amp;amp;");
    }

    #[test]
    fn non_ascii_survives() {
        assert_eq!(to_html_escaped("Grüße <3 ♫"), "Grüße &lt;3 ♫");
    }
}
