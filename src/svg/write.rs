//! Serializes the scene graph to SVG markup.
//!
//! Attribute values and text are escaped here, so a country name or location
//! id carrying markup characters cannot break out of its attribute.

use std::borrow::Cow;
use std::fmt::Write;

use super::element::Element;

/// Escapes the five XML special characters.
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

/// Writes `el` and its subtree to `out`. Elements with neither text nor
/// children are written self-closing.
pub fn write_element(out: &mut String, el: &Element) {
    out.push('<');
    out.push_str(el.name());
    for (name, value) in el.attributes() {
        // Writing to a String cannot fail.
        let _ = write!(out, " {}=\"{}\"", name, escape(value));
    }
    if el.is_empty() {
        out.push_str("/>");
        return;
    }
    out.push('>');
    if let Some(text) = el.text() {
        out.push_str(&escape(text));
    }
    for child in el.children() {
        write_element(out, child);
    }
    let _ = write!(out, "</{}>", el.name());
}

/// Serializes `el` to a string.
pub fn to_svg_string(el: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, el);
    out
}
