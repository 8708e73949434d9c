//! Owned element tree.

/// A child node of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An XML element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of an attribute, or `None` when it is not present.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Value of an attribute, or `""` when it is not present.
    ///
    /// Most rules treat an absent attribute and an empty one the same way.
    pub fn attr_or_empty(&self, key: &str) -> &str {
        self.attr(key).unwrap_or("")
    }

    /// Trimmed attribute value, `None` when absent or blank.
    pub fn non_blank_attr(&self, key: &str) -> Option<&str> {
        self.attr(key).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Set an attribute, replacing an existing value in place.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements in document order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// First child element with the given name.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.elements().find(|e| e.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.children.iter_mut().find_map(|node| match node {
            Node::Element(element) if element.name() == name => Some(element),
            _ => None,
        })
    }

    /// Concatenated trimmed text content of this element.
    pub fn text(&self) -> String {
        let mut value = String::new();
        for node in &self.children {
            if let Node::Text(text) = node {
                value.push_str(text.trim());
            }
        }
        value.trim().to_string()
    }

    pub fn push_element(&mut self, element: Element) {
        self.children.push(Node::Element(element));
    }

    /// Insert an element before every existing child.
    pub fn prepend_element(&mut self, element: Element) {
        self.children.insert(0, Node::Element(element));
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    pub fn with_child(mut self, element: Element) -> Self {
        self.push_element(element);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.push_text(text);
        self
    }
}
