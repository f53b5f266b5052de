//! SVG scene graph, primitive emitter, and serializer.

pub mod element;
pub mod emit;
pub mod write;

pub use element::Element;
pub use emit::{emit, emit_text, Primitive, PrimitiveKind};
pub use write::{escape, to_svg_string, write_element};

/// SVG namespace for a standalone document root.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// XLink namespace, needed by `xlink:href` on `<use>`.
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// A map root element standing in for the background map's `<svg>` tag.
pub fn map_root(id: &str) -> Element {
    Element::new("svg")
        .with_attr("id", id)
        .with_attr("xmlns", SVG_NS)
        .with_attr("xmlns:xlink", XLINK_NS)
}
