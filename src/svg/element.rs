//! A minimal SVG scene graph.
//!
//! Elements own their children; a render call receives `&mut Element` for the
//! node it may write into. Text content and child elements are kept apart
//! since no generated node mixes them.

/// An SVG element with ordered attributes, optional text and child elements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder form of [`Element::set_attr`].
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder form of [`Element::set_text`].
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Sets an attribute. An existing attribute keeps its position.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.text.is_none()
    }

    /// Appends a child after all existing ones.
    pub fn append(&mut self, child: Element) {
        self.children.push(child);
    }

    /// The direct child with the given id.
    pub fn child_by_id(&self, id: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.id() == Some(id))
    }

    /// The direct child with the given id, created by `make` and appended if
    /// there is none.
    pub fn child_by_id_or_insert_with<F>(&mut self, id: &str, make: F) -> &mut Element
    where
        F: FnOnce() -> Element,
    {
        let pos = match self.children.iter().position(|c| c.id() == Some(id)) {
            Some(pos) => pos,
            None => {
                self.children.push(make());
                self.children.len() - 1
            }
        };
        &mut self.children[pos]
    }

    /// Removes every direct child with the given id, returning how many were
    /// removed.
    pub fn remove_children_by_id(&mut self, id: &str) -> usize {
        let before = self.children.len();
        self.children.retain(|c| c.id() != Some(id));
        before - self.children.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_attr_keeps_position() {
        let mut el = Element::new("path").with_attr("class", "a").with_attr("d", "M0,0");
        el.set_attr("class", "b");
        assert_eq!(
            el.attributes(),
            &[("class".to_string(), "b".to_string()), ("d".to_string(), "M0,0".to_string())]
        );
    }

    #[test]
    fn child_by_id_or_insert_with_is_idempotent() {
        let mut root = Element::new("svg");
        root.child_by_id_or_insert_with("g1", || Element::new("g").with_attr("id", "g1"))
            .append(Element::new("use"));
        root.child_by_id_or_insert_with("g1", || Element::new("g").with_attr("id", "g1"));
        assert_eq!(root.children().len(), 1);
        assert_eq!(root.children()[0].children().len(), 1);
    }

    #[test]
    fn remove_children_by_id() {
        let mut root = Element::new("svg");
        root.append(Element::new("g").with_attr("id", "keep"));
        root.append(Element::new("g").with_attr("id", "drop"));
        assert_eq!(root.remove_children_by_id("drop"), 1);
        assert_eq!(root.remove_children_by_id("drop"), 0);
        assert!(root.child_by_id("keep").is_some());
    }
}
