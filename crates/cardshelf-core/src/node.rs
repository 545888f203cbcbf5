#![forbid(unsafe_code)]

//! Minimal element tree produced by the card and lightbox builders.
//!
//! Hosts turn a tree into real DOM nodes; tests inspect it directly.

/// A single element with attributes, optional text and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
    pub tag: &'static str,
    pub class: Option<String>,
    /// Attributes in insertion order, `class` excluded.
    pub attrs: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<ElementNode>,
}

impl ElementNode {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            class: None,
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set an attribute, replacing an existing value of the same name.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn child(mut self, child: ElementNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class
            .as_deref()
            .is_some_and(|c| c.split_whitespace().any(|c| c == class))
    }

    /// Depth-first search for the first descendant (or self) with `class`.
    pub fn find_by_class(&self, class: &str) -> Option<&ElementNode> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_class(class))
    }

    /// Depth-first search for the first descendant (or self) with `tag`.
    pub fn find_by_tag(&self, tag: &str) -> Option<&ElementNode> {
        if self.tag == tag {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_tag(tag))
    }

    /// All descendants (and self) with `tag`, in document order.
    pub fn collect_by_tag<'a>(&'a self, tag: &str, out: &mut Vec<&'a ElementNode>) {
        if self.tag == tag {
            out.push(self);
        }
        for child in &self.children {
            child.collect_by_tag(tag, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_replaces_existing_value() {
        let node = ElementNode::new("a").attr("href", "x").attr("href", "y");
        assert_eq!(node.attrs.len(), 1);
        assert_eq!(node.get_attr("href"), Some("y"));
    }

    #[test]
    fn class_lookup_splits_on_whitespace() {
        let tree = ElementNode::new("article")
            .class("card image-card")
            .child(ElementNode::new("h3").class("title"));
        assert!(tree.has_class("image-card"));
        assert!(!tree.has_class("image"));
        assert_eq!(tree.find_by_class("title").map(|n| n.tag), Some("h3"));
    }

    #[test]
    fn collects_in_document_order() {
        let tree = ElementNode::new("div")
            .child(ElementNode::new("a").text("1"))
            .child(ElementNode::new("div").child(ElementNode::new("a").text("2")));
        let mut links = Vec::new();
        tree.collect_by_tag("a", &mut links);
        let texts: Vec<_> = links.iter().filter_map(|n| n.text.as_deref()).collect();
        assert_eq!(texts, vec!["1", "2"]);
    }
}
