//! HTML helper functions

/// Escape text for use inside HTML element content or a quoted attribute
///
/// # Examples
/// ```ignore
/// escape_html("<b>\"A&B\"</b>") // -> &lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;
/// ```
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>\"A&B\"</b>"),
            "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;"
        );
        assert_eq!(escape_html("it's"), "it&#39;s");
    }

    #[test]
    fn test_escape_leaves_plain_text() {
        assert_eq!(escape_html("안녕하세요 world"), "안녕하세요 world");
    }
}
