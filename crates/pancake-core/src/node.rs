// File: crates/pancake-core/src/node.rs
// Summary: Markup node tree (elements, escaped text, raw text) and its serialization.
// Notes:
// - Serialization is `Display`; `Node::render` is a `to_string` shorthand.
// - Attribute names and values are always escaped. Only text children can opt
//   out of escaping, and only through the explicit `raw` constructors.

use std::fmt;

use indexmap::IndexMap;

use crate::escape::write_escaped;
use crate::tags::Tag;
use crate::ticks::Tick;

/// Attribute key that serializes as `class`.
pub const CLASS_NAME: &str = "className";

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(Text),
}

impl Node {
    /// Text that is escaped on output.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(Text::new(content))
    }

    /// Pre-sanitized markup written out verbatim. The caller vouches for it.
    pub fn raw(content: impl Into<String>) -> Self {
        Node::Text(Text::raw(content))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(el) => fmt::Display::fmt(el, f),
            Node::Text(t) => fmt::Display::fmt(t, f),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self { Node::Element(el) }
}

impl From<Text> for Node {
    fn from(t: Text) -> Self { Node::Text(t) }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self { Node::text(s) }
}

impl From<String> for Node {
    fn from(s: String) -> Self { Node::text(s) }
}

impl From<Tick> for Node {
    fn from(t: Tick) -> Self { Node::text(t.to_string()) }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Text {
    content: String,
    raw: bool,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into(), raw: false }
    }

    pub fn raw(content: impl Into<String>) -> Self {
        Self { content: content.into(), raw: true }
    }

    pub fn content(&self) -> &str { &self.content }
    pub fn is_raw(&self) -> bool { self.raw }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.raw {
            f.write_str(&self.content)
        } else {
            write_escaped(f, &self.content)
        }
    }
}

/// An element with insertion-ordered attributes and owned children.
///
/// Builder methods take and return `self`, so attributes and children can
/// be supplied in any order.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    tag: Tag,
    attrs: IndexMap<String, String>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self { tag, attrs: IndexMap::new(), children: Vec::new() }
    }

    pub fn tag(&self) -> Tag { self.tag }
    pub fn attributes(&self) -> &IndexMap<String, String> { &self.attrs }
    pub fn children_nodes(&self) -> &[Node] { &self.children }

    pub fn attr_value(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Set an attribute. Setting an existing key keeps its original position.
    pub fn attr(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.attrs.insert(key.into(), value.to_string());
        self
    }

    pub fn attrs<I, K, V>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: fmt::Display,
    {
        for (k, v) in attrs {
            self.attrs.insert(k.into(), v.to_string());
        }
        self
    }

    pub fn class_name(self, value: impl fmt::Display) -> Self {
        self.attr(CLASS_NAME, value)
    }

    pub fn style(self, value: impl fmt::Display) -> Self {
        self.attr("style", value)
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append escaped text built from any displayable value.
    pub fn text(self, value: impl fmt::Display) -> Self {
        self.child(Node::text(value.to_string()))
    }

    /// Append pre-sanitized markup verbatim.
    pub fn raw_child(self, markup: impl Into<String>) -> Self {
        self.child(Node::raw(markup))
    }

    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.tag.as_str();
        write!(f, "<{tag}")?;
        for (key, value) in &self.attrs {
            let key = if key == CLASS_NAME { "class" } else { key.as_str() };
            f.write_str(" ")?;
            write_escaped(f, key)?;
            f.write_str("=\"")?;
            write_escaped(f, value)?;
            f.write_str("\"")?;
        }
        f.write_str(">")?;
        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{tag}>")
    }
}

/// Hyperscript-style constructor: tag, attributes, children.
pub fn h<A, K, V, C, N>(tag: Tag, attrs: A, children: C) -> Element
where
    A: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: fmt::Display,
    C: IntoIterator<Item = N>,
    N: Into<Node>,
{
    Element::new(tag).attrs(attrs).children(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{div, p, span};

    #[test]
    fn element_without_attributes() {
        assert_eq!(p().text("hi").render(), "<p>hi</p>");
    }

    #[test]
    fn class_name_renders_as_class() {
        let el = span().class_name("label x").text(20);
        assert_eq!(el.render(), r#"<span class="label x">20</span>"#);
    }

    #[test]
    fn attributes_keep_insertion_order_and_are_escaped() {
        let el = div().attr("style", "a\"b").attr("data-k", "<1>").attr("style", "c");
        assert_eq!(el.render(), r#"<div style="c" data-k="&lt;1&gt;"></div>"#);
    }

    #[test]
    fn attributes_and_children_in_either_order() {
        let a = div().child("x").class_name("c");
        let b = div().class_name("c").child("x");
        assert_eq!(a, b);
    }

    #[test]
    fn hyperscript_matches_builder() {
        let built = h(Tag::Span, [("style", "color: red")], ["•"]);
        assert_eq!(built, span().style("color: red").child("•"));
    }
}
