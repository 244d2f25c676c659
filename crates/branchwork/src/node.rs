//! Output node tree.
//!
//! [`Node`] is the host-agnostic result of a dispatch. Hosts walk it (or its
//! JSON form) to build their own elements; `Display` renders HTML-like markup,
//! which is what the tests and snapshots compare against.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A rendered node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// Renders nothing.
    #[default]
    Empty,
    /// Plain text.
    Text(String),
    /// A named element with an optional class.
    Element {
        tag: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        class: Option<String>,
        #[serde(default)]
        children: Vec<Node>,
    },
    /// Children grouped without an element of their own.
    Fragment(Vec<Node>),
    /// One iteration item, tagged with a key that is unique among its siblings.
    Keyed { key: String, children: Vec<Node> },
}

impl Node {
    /// Creates a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Creates an empty element.
    pub fn element(tag: impl Into<String>) -> Self {
        Node::Element {
            tag: tag.into(),
            class: None,
            children: Vec::new(),
        }
    }

    /// Creates a fragment.
    pub fn fragment(children: impl IntoIterator<Item = Node>) -> Self {
        Node::Fragment(children.into_iter().collect())
    }

    /// Creates a keyed item.
    pub fn keyed(key: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Keyed {
            key: key.into(),
            children,
        }
    }

    /// Sets the class of an element. Other nodes are returned unchanged.
    pub fn with_class(mut self, value: impl Into<String>) -> Self {
        if let Node::Element { class, .. } = &mut self {
            *class = Some(value.into());
        }
        self
    }

    /// Appends a child to an element or fragment. Other nodes are returned unchanged.
    pub fn with_child(mut self, child: Node) -> Self {
        match &mut self {
            Node::Element { children, .. }
            | Node::Fragment(children)
            | Node::Keyed { children, .. } => children.push(child),
            Node::Empty | Node::Text(_) => {}
        }
        self
    }

    /// Returns `true` for [`Node::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }

    /// Direct children of this node.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. }
            | Node::Fragment(children)
            | Node::Keyed { children, .. } => children,
            Node::Empty | Node::Text(_) => &[],
        }
    }

    /// Keys of the direct keyed children, in order.
    pub fn keys(&self) -> Vec<&str> {
        self.children()
            .iter()
            .filter_map(|child| match child {
                Node::Keyed { key, .. } => Some(key.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Concatenated text of this subtree, without markup.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            other => {
                for child in other.children() {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::text(text)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Empty => Ok(()),
            Node::Text(text) => write_escaped(f, text),
            Node::Element {
                tag,
                class,
                children,
            } => {
                write!(f, "<{}", tag)?;
                if let Some(class) = class {
                    f.write_str(" class=\"")?;
                    write_escaped(f, class)?;
                    f.write_str("\"")?;
                }
                f.write_str(">")?;
                for child in children {
                    write!(f, "{}", child)?;
                }
                write!(f, "</{}>", tag)
            }
            Node::Fragment(children) | Node::Keyed { children, .. } => {
                for child in children {
                    write!(f, "{}", child)?;
                }
                Ok(())
            }
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for c in text.chars() {
        match c {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' => f.write_str("&quot;")?,
            other => write!(f, "{}", other)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_markup() {
        let node = Node::element("ul").with_class("list").with_child(
            Node::element("li").with_child(Node::text("a & b")),
        );
        assert_eq!(
            node.to_string(),
            "<ul class=\"list\"><li>a &amp; b</li></ul>"
        );
    }

    #[test]
    fn fragments_and_keyed_render_children_only() {
        let node = Node::fragment(vec![
            Node::keyed("0", vec![Node::text("x")]),
            Node::keyed("1", vec![Node::text("y")]),
        ]);
        assert_eq!(node.to_string(), "xy");
        assert_eq!(node.keys(), vec!["0", "1"]);
        assert_eq!(Node::Empty.to_string(), "");
    }

    #[test]
    fn text_content_skips_markup() {
        let node = Node::element("div")
            .with_child(Node::text("Error: "))
            .with_child(Node::element("b").with_child(Node::text("<boom>")));
        assert_eq!(node.text_content(), "Error: <boom>");
    }

    #[test]
    fn with_class_ignores_non_elements() {
        assert_eq!(Node::text("t").with_class("c"), Node::text("t"));
    }

    #[test]
    fn json_shape() {
        let node = Node::element("div")
            .with_class("conditional-loading")
            .with_child(Node::text("Loading..."));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "element": {
                    "tag": "div",
                    "class": "conditional-loading",
                    "children": [{"text": "Loading..."}]
                }
            })
        );
        assert_eq!(serde_json::to_value(Node::Empty).unwrap(), "empty");

        let back: Node = serde_json::from_value(json).unwrap();
        assert_eq!(back, node);
    }
}
