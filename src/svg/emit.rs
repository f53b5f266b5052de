//! Typed graphical primitives and the emitter that appends them.

use super::element::Element;

/// The primitive kinds the renderers produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// A reference to a symbol defined by the background map.
    Use,
    /// A line or curve.
    Path,
    /// A text label.
    Text,
}

impl PrimitiveKind {
    pub const fn tag(self) -> &'static str {
        match self {
            PrimitiveKind::Use => "use",
            PrimitiveKind::Path => "path",
            PrimitiveKind::Text => "text",
        }
    }
}

/// A primitive value: its kind, attributes in caller order, and for text
/// primitives the label content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Primitive {
    pub kind: PrimitiveKind,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
}

impl Primitive {
    pub fn new<I, K, V>(kind: PrimitiveKind, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            kind,
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            text: None,
        }
    }
}

impl From<Primitive> for Element {
    fn from(primitive: Primitive) -> Self {
        let mut el = Element::new(primitive.kind.tag());
        for (name, value) in primitive.attributes {
            el.set_attr(name, value);
        }
        if let Some(text) = primitive.text {
            el.set_text(text);
        }
        el
    }
}

/// Appends one self-closing primitive to `container`.
///
/// Existing children are left in place. Values are stored raw; escaping is
/// the serializer's job.
pub fn emit<I, K, V>(container: &mut Element, kind: PrimitiveKind, attributes: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    container.append(Primitive::new(kind, attributes).into());
}

/// Appends a text primitive carrying `content`.
pub fn emit_text<I, K, V>(container: &mut Element, attributes: I, content: &str)
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut primitive = Primitive::new(PrimitiveKind::Text, attributes);
    primitive.text = Some(content.to_string());
    container.append(primitive.into());
}
