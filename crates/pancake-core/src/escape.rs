// File: crates/pancake-core/src/escape.rs
// Summary: HTML escaping for text content and attribute names/values.

use std::borrow::Cow;
use std::fmt;

#[inline]
fn entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#x27;"),
        _ => None,
    }
}

/// Escape `&`, `<`, `>`, `"` and `'`. Borrows when nothing needs escaping.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(|c: char| entity(c).is_some()) else {
        return Cow::Borrowed(text);
    };

    let mut escaped = String::with_capacity(text.len() + 16);
    escaped.push_str(&text[..first]);
    for c in text[first..].chars() {
        match entity(c) {
            Some(e) => escaped.push_str(e),
            None => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Stream `text` into `out`, escaped, without an intermediate allocation.
pub fn write_escaped<W: fmt::Write + ?Sized>(out: &mut W, text: &str) -> fmt::Result {
    let mut rest = text;
    while let Some(pos) = rest.find(|c: char| entity(c).is_some()) {
        out.write_str(&rest[..pos])?;
        let c = rest[pos..].chars().next().unwrap_or_default();
        out.write_str(entity(c).unwrap_or_default())?;
        rest = &rest[pos + c.len_utf8()..];
    }
    out.write_str(rest)
}

#[cfg(test)]
mod tests {
    use super::{escape_html, write_escaped};
    use std::borrow::Cow;

    #[test]
    fn escape_special_chars() {
        assert_eq!(escape_html(r#"<b>&"'"#), "&lt;b&gt;&amp;&quot;&#x27;");
    }

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(escape_html("2015 ppm"), Cow::Borrowed("2015 ppm")));
    }

    #[test]
    fn streaming_matches_owned() {
        let s = "CO₂ <em>\"rising\"</em> & 'fast'";
        let mut out = String::new();
        write_escaped(&mut out, s).unwrap();
        assert_eq!(out, escape_html(s));
    }
}
