//! Child entries: plain nodes and the if-chain and switch markers.
//!
//! Markers are identity wrappers. Rendered on their own they emit their
//! children unchanged; a [`Conditional`](crate::Conditional) recognises them
//! by variant and decides which one is emitted.

use std::collections::HashSet;
use std::fmt;

use branchwork_predicate::Value;

use crate::error::{ConditionalError, Result};
use crate::node::Node;
use crate::pipeline::Pipeline;
use crate::presentation::Wrapper;

/// Per-item render function: item, index in the processed sequence, and the
/// whole processed sequence.
pub type RenderFn<T> = Box<dyn Fn(&T, usize, &[&T]) -> Node>;

/// Per-item key function. The default key is the item's index.
pub type KeyFn<T> = Box<dyn Fn(&T, usize) -> String>;

/// The content of a dispatcher or branch.
pub enum Children<T> {
    /// A static list of entries.
    Static(Vec<Child<T>>),
    /// A function called once per iteration item.
    PerItem(RenderFn<T>),
}

impl<T> Default for Children<T> {
    fn default() -> Self {
        Children::Static(Vec::new())
    }
}

impl<T: fmt::Debug> fmt::Debug for Children<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Children::Static(children) => f.debug_tuple("Static").field(children).finish(),
            Children::PerItem(_) => f.write_str("PerItem(<render fn>)"),
        }
    }
}

impl<T> Children<T> {
    /// Appends a static entry. A per-item function is replaced.
    pub(crate) fn push(&mut self, child: Child<T>) {
        match self {
            Children::Static(children) => children.push(child),
            Children::PerItem(_) => *self = Children::Static(vec![child]),
        }
    }

    /// Static entries, or an empty slice for a per-item function.
    pub fn entries(&self) -> &[Child<T>] {
        match self {
            Children::Static(children) => children,
            Children::PerItem(_) => &[],
        }
    }

    /// Static entries rendered as-is. A per-item function renders nothing
    /// outside of iteration.
    pub fn to_nodes(&self) -> Vec<Node> {
        self.entries().iter().map(Child::to_node).collect()
    }

    /// Returns `true` if any direct entry is an if-chain marker.
    pub fn has_if_chain(&self) -> bool {
        self.entries().iter().any(Child::is_if_chain)
    }
}

/// One entry in a child list.
#[derive(Debug)]
pub enum Child<T> {
    /// A plain node.
    Node(Node),
    /// Selected when `when` is true and no earlier entry was selected.
    ///
    /// Only this flag is consulted; an entry carries no comparison directives.
    If { when: bool, branch: Branch<T> },
    /// Same as [`Child::If`], kept distinct to mirror the declaration.
    ElseIf { when: bool, branch: Branch<T> },
    /// Selected when reached.
    Else(Branch<T>),
    /// A switch case.
    Case(Case),
}

impl<T> Child<T> {
    /// Creates an `If` marker.
    ///
    /// ```rust
    /// use branchwork::{Child, Node};
    ///
    /// let child: Child<()> = Child::if_(true, Node::text("shown"));
    /// assert_eq!(child.to_node().to_string(), "shown");
    /// ```
    pub fn if_(when: bool, branch: impl Into<Branch<T>>) -> Self {
        Child::If {
            when,
            branch: branch.into(),
        }
    }

    /// Creates an `ElseIf` marker.
    pub fn else_if(when: bool, branch: impl Into<Branch<T>>) -> Self {
        Child::ElseIf {
            when,
            branch: branch.into(),
        }
    }

    /// Creates an `Else` marker.
    pub fn else_(branch: impl Into<Branch<T>>) -> Self {
        Child::Else(branch.into())
    }

    /// Creates a case matching `value`.
    pub fn case(
        value: impl Into<Value<'static>>,
        children: impl IntoIterator<Item = Node>,
    ) -> Self {
        Child::Case(Case::when(value).children(children))
    }

    /// Creates a default case.
    pub fn default_case(children: impl IntoIterator<Item = Node>) -> Self {
        Child::Case(Case::otherwise().children(children))
    }

    /// The branch selected by this entry in an if-chain, if it is selected
    /// once reached.
    pub fn selected_branch(&self) -> Option<&Branch<T>> {
        match self {
            Child::If { when, branch } | Child::ElseIf { when, branch } => {
                when.then_some(branch)
            }
            Child::Else(branch) => Some(branch),
            Child::Node(_) | Child::Case(_) => None,
        }
    }

    /// Returns `true` for `If`, `ElseIf` and `Else`.
    pub fn is_if_chain(&self) -> bool {
        matches!(self, Child::If { .. } | Child::ElseIf { .. } | Child::Else(_))
    }

    /// The case, if this entry is one.
    pub fn as_case(&self) -> Option<&Case> {
        match self {
            Child::Case(case) => Some(case),
            _ => None,
        }
    }

    /// Renders the entry on its own: nodes as-is, markers as their children.
    pub fn to_node(&self) -> Node {
        match self {
            Child::Node(node) => node.clone(),
            Child::If { branch, .. } | Child::ElseIf { branch, .. } | Child::Else(branch) => {
                Node::Fragment(branch.children.to_nodes())
            }
            Child::Case(case) => Node::Fragment(case.children.clone()),
        }
    }
}

impl<T> From<Node> for Child<T> {
    fn from(node: Node) -> Self {
        Child::Node(node)
    }
}

impl<T> From<&str> for Child<T> {
    fn from(text: &str) -> Self {
        Child::Node(Node::text(text))
    }
}

impl<T> From<Case> for Child<T> {
    fn from(case: Case) -> Self {
        Child::Case(case)
    }
}

// ============================================================================
// Branch
// ============================================================================

/// Content of an if-chain entry.
///
/// A branch holds either plain children or, when given a source collection,
/// its own iteration with its own transforms.
///
/// # Example
///
/// ```rust
/// use branchwork::{Branch, Node};
///
/// let branch = Branch::new()
///     .each(vec![3, 1, 2])
///     .sort(|a: &i32, b: &i32| a.cmp(b))
///     .render(|n, _, _| Node::text(n.to_string()))
///     .wrapper("ol");
/// assert_eq!(branch.render_node(false).unwrap().to_string(), "<ol>123</ol>");
/// ```
pub struct Branch<T> {
    children: Children<T>,
    each: Option<Vec<T>>,
    pipeline: Pipeline<T>,
    empty: Option<Node>,
    fallback: Option<Node>,
    wrapper: Wrapper,
    key: Option<KeyFn<T>>,
}

impl<T> Default for Branch<T> {
    fn default() -> Self {
        Branch {
            children: Children::default(),
            each: None,
            pipeline: Pipeline::default(),
            empty: None,
            fallback: None,
            wrapper: Wrapper::default(),
            key: None,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Branch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Branch")
            .field("children", &self.children)
            .field("each", &self.each)
            .field("pipeline", &self.pipeline)
            .field("empty", &self.empty)
            .field("fallback", &self.fallback)
            .field("wrapper", &self.wrapper)
            .field("key", &self.key.is_some())
            .finish()
    }
}

impl<T> Branch<T> {
    /// Creates an empty branch.
    pub fn new() -> Self {
        Branch::default()
    }

    /// Appends a child entry. A render function set earlier is replaced.
    pub fn child(mut self, child: impl Into<Child<T>>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends several child entries.
    pub fn children<C: Into<Child<T>>>(mut self, children: impl IntoIterator<Item = C>) -> Self {
        for child in children {
            self.children.push(child.into());
        }
        self
    }

    /// Renders each item with `render`, replacing any children set so far.
    pub fn render(mut self, render: impl Fn(&T, usize, &[&T]) -> Node + 'static) -> Self {
        self.children = Children::PerItem(Box::new(render));
        self
    }

    /// Iterates over `items`.
    pub fn each(mut self, items: impl Into<Vec<T>>) -> Self {
        self.each = Some(items.into());
        self
    }

    /// Filters items.
    pub fn filter(mut self, filter: impl Fn(&T) -> bool + 'static) -> Self {
        self.pipeline = self.pipeline.filter(filter);
        self
    }

    /// Sorts items.
    pub fn sort(mut self, sort: impl Fn(&T, &T) -> std::cmp::Ordering + 'static) -> Self {
        self.pipeline = self.pipeline.sort(sort);
        self
    }

    /// Reverses items after sorting.
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.pipeline = self.pipeline.reverse(reverse);
        self
    }

    /// Keeps at most `limit` items. Zero means no limit.
    pub fn limit(mut self, limit: usize) -> Self {
        self.pipeline = self.pipeline.limit(limit);
        self
    }

    /// Node emitted when iteration yields nothing.
    pub fn empty(mut self, node: impl Into<Node>) -> Self {
        self.empty = Some(node.into());
        self
    }

    /// Node emitted when iteration yields nothing and no empty node is set.
    pub fn fallback(mut self, node: impl Into<Node>) -> Self {
        self.fallback = Some(node.into());
        self
    }

    /// Wraps the emitted children.
    pub fn wrapper(mut self, wrapper: impl Into<Wrapper>) -> Self {
        self.wrapper = wrapper.into();
        self
    }

    /// Keys iteration items with `key`.
    pub fn key(mut self, key: impl Fn(&T, usize) -> String + 'static) -> Self {
        self.key = Some(Box::new(key));
        self
    }

    /// Returns `true` if the branch iterates over its own collection.
    pub fn has_iteration(&self) -> bool {
        self.each.is_some()
    }

    /// Renders the branch as the selected entry of an if-chain.
    pub fn render_node(&self, debug: bool) -> Result<Node> {
        let Some(each) = &self.each else {
            return Ok(self.wrapper.wrap(self.children.to_nodes(), None));
        };

        let items = self.pipeline.apply(Some(each), debug);
        if items.is_empty() {
            return Ok(self
                .empty
                .as_ref()
                .or(self.fallback.as_ref())
                .cloned()
                .unwrap_or_default());
        }

        let nodes = emit_items(&items, &self.children, self.key.as_ref())?;
        Ok(self.wrapper.wrap(nodes, None))
    }
}

impl<T> From<Node> for Branch<T> {
    fn from(node: Node) -> Self {
        Branch::new().child(node)
    }
}

impl<T> From<&str> for Branch<T> {
    fn from(text: &str) -> Self {
        Branch::new().child(Node::text(text))
    }
}

impl<T> From<Vec<Node>> for Branch<T> {
    fn from(nodes: Vec<Node>) -> Self {
        Branch::new().children(nodes)
    }
}

// ============================================================================
// Case
// ============================================================================

/// A switch case: a discriminant, a default tag, or both.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    when: Option<Value<'static>>,
    is_default: bool,
    children: Vec<Node>,
}

impl Case {
    /// A case selected when the switch value equals `value`.
    pub fn when(value: impl Into<Value<'static>>) -> Self {
        Case {
            when: Some(value.into()),
            is_default: false,
            children: Vec::new(),
        }
    }

    /// A default case.
    pub fn otherwise() -> Self {
        Case {
            when: None,
            is_default: true,
            children: Vec::new(),
        }
    }

    /// Also marks this case as the default.
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Appends a child node.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Appends child nodes.
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// The discriminant, if any.
    pub fn value(&self) -> Option<&Value<'static>> {
        self.when.as_ref()
    }

    /// Returns `true` if this case is a default.
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    /// Returns `true` if the discriminant equals `value`.
    pub fn matches(&self, value: &Value<'_>) -> bool {
        self.when.as_ref().is_some_and(|when| when == value)
    }

    /// The case's child nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.children
    }
}

// ============================================================================
// Item emission
// ============================================================================

/// Renders processed items as keyed nodes.
///
/// A per-item function is called once per item; static children are repeated
/// per item. Keys must be unique within one emission.
pub(crate) fn emit_items<T>(
    items: &[&T],
    children: &Children<T>,
    key: Option<&KeyFn<T>>,
) -> Result<Vec<Node>> {
    let mut seen = HashSet::with_capacity(items.len());
    let mut nodes = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let item: &T = item;
        let key = match key {
            Some(key) => key(item, index),
            None => index.to_string(),
        };
        if !seen.insert(key.clone()) {
            return Err(ConditionalError::DuplicateKey { key, index });
        }

        let content = match children {
            Children::PerItem(render) => vec![render(item, index, items)],
            Children::Static(_) => children.to_nodes(),
        };
        nodes.push(Node::keyed(key, content));
    }

    Ok(nodes)
}
