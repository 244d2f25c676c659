//! Presentation options.
//!
//! How a dispatcher's output is wrapped, whether iteration output carries the
//! animation marker, and whether pipeline diagnostics are logged. These are
//! plain data so hosts can keep defaults in JSON or YAML next to the rest of
//! their configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::node::Node;

/// CSS class applied to animated iteration output.
pub const ANIMATED_CLASS: &str = "conditional-animated";

/// What the emitted children are wrapped in.
///
/// Serialized as `"fragment"` or `{ "element": "<tag>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wrapper {
    /// No element of its own.
    #[default]
    Fragment,
    /// An element with the given tag.
    Element(String),
}

impl Wrapper {
    /// Creates an element wrapper.
    pub fn element(tag: impl Into<String>) -> Self {
        Wrapper::Element(tag.into())
    }

    /// Wraps `children`.
    ///
    /// A fragment that needs a class is promoted to a `div`, since a fragment
    /// has nowhere to carry it.
    pub fn wrap(&self, children: Vec<Node>, class: Option<&str>) -> Node {
        match (self, class) {
            (Wrapper::Fragment, None) => Node::Fragment(children),
            (Wrapper::Fragment, Some(class)) => Node::Element {
                tag: "div".to_string(),
                class: Some(class.to_string()),
                children,
            },
            (Wrapper::Element(tag), class) => Node::Element {
                tag: tag.clone(),
                class: class.map(str::to_string),
                children,
            },
        }
    }
}

impl From<&str> for Wrapper {
    fn from(tag: &str) -> Self {
        Wrapper::element(tag)
    }
}

/// Presentation options of a dispatcher.
///
/// # Example
///
/// ```rust
/// use branchwork::{Presentation, Wrapper};
///
/// let presentation = Presentation::from_yaml("wrapper:\n  element: ul\nanimate: true\n").unwrap();
/// assert_eq!(presentation.wrapper, Wrapper::element("ul"));
/// assert!(presentation.animate);
/// assert!(!presentation.debug);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Presentation {
    /// Wrapper for emitted children.
    pub wrapper: Wrapper,
    /// Mark iteration output with [`ANIMATED_CLASS`].
    pub animate: bool,
    /// Log pipeline diagnostics at DEBUG.
    pub debug: bool,
}

impl Presentation {
    /// Creates default presentation options.
    pub fn new() -> Self {
        Presentation::default()
    }

    /// Parses presentation options from JSON. Missing keys take their defaults.
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parses presentation options from YAML. Missing keys take their defaults.
    pub fn from_yaml(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Serializes to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
