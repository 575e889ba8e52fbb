//! In-memory SVG element tree.
//!
//! The renderer appends elements to a [`Canvas`] and the hover overlay adds
//! and removes its own. Nothing is written out until [`Canvas::to_svg`].

use std::fmt::Write as _;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// An SVG element with ordered attributes, optional text and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// Creates an empty element.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Sets an attribute, replacing any earlier value.
    #[must_use]
    pub fn attr(mut self, name: &str, value: impl ToString) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Sets the text content.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Appends a child.
    #[must_use]
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Sets an attribute in place, replacing any earlier value.
    pub fn set_attr(&mut self, name: &str, value: impl ToString) {
        let value = value.to_string();
        if let Some(slot) = self.attrs.iter_mut().find(|(k, _)| k == name) {
            slot.1 = value;
        } else {
            self.attrs.push((name.to_string(), value));
        }
    }

    /// Appends a child in place.
    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attribute value, if set.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// The `id` attribute, if set.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    /// Whether the space-separated `class` attribute contains `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|c| c.split_whitespace().any(|c| c == class))
    }

    /// Text content, if set.
    #[must_use]
    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Direct children.
    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// This element and all of its descendants, depth first.
    #[must_use]
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.descendants());
        }
        out
    }

    /// First element in this subtree with the given id.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_id(id))
    }

    /// Removes every descendant with the given id and returns how many were
    /// removed.
    pub fn remove_by_id(&mut self, id: &str) -> usize {
        let before = self.children.len();
        self.children.retain(|c| c.id() != Some(id));
        let mut removed = before - self.children.len();
        for child in &mut self.children {
            removed += child.remove_by_id(id);
        }
        removed
    }

    fn write_xml(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{}<{}", indent, self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, r#" {}="{}""#, name, escape(value));
        }

        match (&self.text, self.children.is_empty()) {
            (None, true) => out.push_str("/>\n"),
            (Some(text), true) => {
                let _ = writeln!(out, ">{}</{}>", escape(text), self.tag);
            }
            (text, false) => {
                out.push('>');
                if let Some(text) = text {
                    out.push_str(&escape(text));
                }
                out.push('\n');
                for child in &self.children {
                    child.write_xml(out, depth + 1);
                }
                let _ = writeln!(out, "{}</{}>", indent, self.tag);
            }
        }
    }
}

/// A fixed-size SVG drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    root: Element,
}

impl Canvas {
    /// Creates an empty canvas.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let root = Element::new("svg")
            .attr("xmlns", SVG_NS)
            .attr("width", width)
            .attr("height", height)
            .attr("viewBox", format!("0 0 {} {}", width, height));
        Self {
            width,
            height,
            root,
        }
    }

    /// Canvas width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The root `<svg>` element.
    #[must_use]
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Appends a top-level element.
    pub fn append(&mut self, element: Element) {
        self.root.push(element);
    }

    /// First element with the given id.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.root.find_by_id(id)
    }

    /// Removes every element with the given id and returns how many were
    /// removed.
    pub fn remove_by_id(&mut self, id: &str) -> usize {
        self.root.remove_by_id(id)
    }

    /// All elements carrying `class`.
    #[must_use]
    pub fn select_class(&self, class: &str) -> Vec<&Element> {
        self.root
            .descendants()
            .into_iter()
            .filter(|e| e.has_class(class))
            .collect()
    }

    /// Number of elements with the given id.
    #[must_use]
    pub fn count_id(&self, id: &str) -> usize {
        self.root
            .descendants()
            .into_iter()
            .filter(|e| e.id() == Some(id))
            .count()
    }

    /// Serializes the canvas as a standalone SVG document.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut svg = String::with_capacity(8192);
        self.root.write_xml(&mut svg, 0);
        svg
    }
}

/// Escapes text for use in XML content and attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_replaces() {
        let el = Element::new("rect").attr("x", 1).attr("x", 2);
        assert_eq!(el.get_attr("x"), Some("2"));
    }

    #[test]
    fn test_find_and_remove_nested() {
        let mut canvas = Canvas::new(100, 100);
        canvas.append(
            Element::new("g")
                .attr("id", "outer")
                .child(Element::new("rect").attr("id", "inner")),
        );
        canvas.append(Element::new("rect").attr("id", "inner"));

        assert_eq!(canvas.count_id("inner"), 2);
        assert!(canvas.find_by_id("outer").is_some());
        assert_eq!(canvas.remove_by_id("inner"), 2);
        assert_eq!(canvas.count_id("inner"), 0);
        assert_eq!(canvas.remove_by_id("missing"), 0);
    }

    #[test]
    fn test_select_class() {
        let mut canvas = Canvas::new(10, 10);
        canvas.append(Element::new("rect").attr("class", "cell hot"));
        canvas.append(Element::new("rect").attr("class", "cellar"));
        assert_eq!(canvas.select_class("cell").len(), 1);
    }

    #[test]
    fn test_to_svg() {
        let mut canvas = Canvas::new(200, 100);
        canvas.append(Element::new("text").attr("id", "title").text("A & B"));
        let svg = canvas.to_svg();

        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.contains(r#"width="200" height="100""#));
        assert!(svg.contains("<text id=\"title\">A &amp; B</text>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<"a">"#), "&lt;&quot;a&quot;&gt;");
    }
}
