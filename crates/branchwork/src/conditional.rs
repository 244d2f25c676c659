//! The conditional dispatcher.
//!
//! A [`Conditional`] looks at its configuration and direct children, picks
//! exactly one rendering mode, and produces a [`Node`]. Modes are tested in
//! a fixed order:
//!
//! | Mode | Selected when |
//! |------|---------------|
//! | [`Mode::Loading`] | `loading(true)` |
//! | [`Mode::Error`] | an error payload is set |
//! | [`Mode::Switch`] | a switch value is set |
//! | [`Mode::IfChain`] | a direct child is `If`, `ElseIf` or `Else` |
//! | [`Mode::ConditionAndIteration`] | a condition and a source collection |
//! | [`Mode::ConditionOnly`] | a condition |
//! | [`Mode::IterationOnly`] | a source collection |
//! | [`Mode::PassThrough`] | otherwise |
//!
//! The predicate and the collection pipeline are recomputed on every call to
//! [`Conditional::render`]; nothing is cached between calls.

use std::cmp::Ordering;
use std::fmt;

use branchwork_predicate::{Comparison, Condition, Value};
use serde::Serialize;

use crate::children::{emit_items, Branch, Child, Children, KeyFn};
use crate::error::{ConditionalError, Result};
use crate::node::Node;
use crate::pipeline::Pipeline;
use crate::presentation::{Presentation, Wrapper, ANIMATED_CLASS};

/// CSS class of the default loading placeholder.
pub const LOADING_CLASS: &str = "conditional-loading";

/// CSS class of the error placeholder.
pub const ERROR_CLASS: &str = "conditional-error";

/// Observer called after each successful dispatch.
pub type RenderObserver = Box<dyn Fn(&RenderReport)>;

/// The rendering mode chosen for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Loading,
    Error,
    Switch,
    IfChain,
    ConditionAndIteration,
    ConditionOnly,
    IterationOnly,
    PassThrough,
}

impl Mode {
    /// Returns the mode's name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Loading => "loading",
            Mode::Error => "error",
            Mode::Switch => "switch",
            Mode::IfChain => "if-chain",
            Mode::ConditionAndIteration => "condition+iteration",
            Mode::ConditionOnly => "condition",
            Mode::IterationOnly => "iteration",
            Mode::PassThrough => "pass-through",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the render observer is told about a dispatch.
///
/// `condition` and `item_count` describe the top-level predicate and pipeline,
/// whichever mode was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderReport {
    pub condition: bool,
    pub item_count: usize,
    pub has_condition: bool,
    pub has_iteration: bool,
}

/// The default loading placeholder.
pub fn loading_placeholder() -> Node {
    Node::element("div")
        .with_class(LOADING_CLASS)
        .with_child(Node::text("Loading..."))
}

/// The error placeholder for `payload`.
pub fn error_placeholder(payload: &str) -> Node {
    Node::element("div")
        .with_class(ERROR_CLASS)
        .with_child(Node::text(format!("Error: {}", payload)))
}

/// A declarative conditional and iteration dispatcher.
///
/// # Example
///
/// ```rust
/// use branchwork::{Conditional, Node};
///
/// let list = Conditional::new()
///     .each(vec![3, 1, 2])
///     .sort(|a: &i32, b: &i32| a.cmp(b))
///     .limit(2)
///     .render_item(|n, _, _| Node::element("li").with_child(Node::text(n.to_string())))
///     .wrapper("ul");
///
/// assert_eq!(list.render().unwrap().to_string(), "<ul><li>1</li><li>2</li></ul>");
///
/// let gate = Conditional::<()>::new().when(false).child("hidden").fallback("shown");
/// assert_eq!(gate.render().unwrap().to_string(), "shown");
/// ```
pub struct Conditional<T = ()> {
    condition: Condition,
    each: Option<Vec<T>>,
    pipeline: Pipeline<T>,
    switch: Option<Value<'static>>,
    loading: bool,
    error: Option<String>,
    fallback: Option<Node>,
    empty: Option<Node>,
    children: Children<T>,
    presentation: Presentation,
    key: Option<KeyFn<T>>,
    on_render: Option<RenderObserver>,
}

impl<T> Default for Conditional<T> {
    fn default() -> Self {
        Conditional {
            condition: Condition::default(),
            each: None,
            pipeline: Pipeline::default(),
            switch: None,
            loading: false,
            error: None,
            fallback: None,
            empty: None,
            children: Children::default(),
            presentation: Presentation::default(),
            key: None,
            on_render: None,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Conditional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conditional")
            .field("condition", &self.condition)
            .field("each", &self.each)
            .field("pipeline", &self.pipeline)
            .field("switch", &self.switch)
            .field("loading", &self.loading)
            .field("error", &self.error)
            .field("fallback", &self.fallback)
            .field("empty", &self.empty)
            .field("children", &self.children)
            .field("presentation", &self.presentation)
            .field("key", &self.key.is_some())
            .field("on_render", &self.on_render.is_some())
            .finish()
    }
}

impl<T> Conditional<T> {
    /// Creates a dispatcher that passes its children through.
    pub fn new() -> Self {
        Conditional::default()
    }

    // ========================================================================
    // Condition
    // ========================================================================

    /// Sets the primary condition. It overrides every directive.
    pub fn when(mut self, when: bool) -> Self {
        self.condition = std::mem::take(&mut self.condition).when(when);
        self
    }

    /// Replaces the whole condition.
    pub fn condition(mut self, condition: impl Into<Condition>) -> Self {
        self.condition = condition.into();
        self
    }

    /// Adds a comparison directive.
    pub fn directive(mut self, comparison: Comparison) -> Self {
        self.condition = std::mem::take(&mut self.condition).with(comparison);
        self
    }

    /// Adds a greater-than directive.
    pub fn gt(self, value: impl Into<Value<'static>>, target: impl Into<Value<'static>>) -> Self {
        self.directive(Comparison::gt(value, target))
    }

    /// Adds a less-than directive.
    pub fn lt(self, value: impl Into<Value<'static>>, target: impl Into<Value<'static>>) -> Self {
        self.directive(Comparison::lt(value, target))
    }

    /// Adds an equality directive.
    pub fn eq(self, value: impl Into<Value<'static>>, target: impl Into<Value<'static>>) -> Self {
        self.directive(Comparison::eq(value, target))
    }

    /// Adds a not-equal directive.
    pub fn ne(self, value: impl Into<Value<'static>>, target: impl Into<Value<'static>>) -> Self {
        self.directive(Comparison::ne(value, target))
    }

    /// Adds a substring directive.
    pub fn contains(
        self,
        value: impl Into<Value<'static>>,
        target: impl Into<Value<'static>>,
    ) -> Self {
        self.directive(Comparison::contains(value, target))
    }

    /// Adds a prefix directive.
    pub fn starts_with(
        self,
        value: impl Into<Value<'static>>,
        target: impl Into<Value<'static>>,
    ) -> Self {
        self.directive(Comparison::starts_with(value, target))
    }

    /// Adds a suffix directive.
    pub fn ends_with(
        self,
        value: impl Into<Value<'static>>,
        target: impl Into<Value<'static>>,
    ) -> Self {
        self.directive(Comparison::ends_with(value, target))
    }

    /// Adds a regex directive. Malformed patterns are rejected here, not at
    /// render time.
    pub fn matches(self, value: impl Into<Value<'static>>, pattern: &str) -> Result<Self> {
        Ok(self.directive(Comparison::matches(value, pattern)?))
    }

    // ========================================================================
    // Iteration
    // ========================================================================

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

    /// Stable-sorts items.
    pub fn sort(mut self, sort: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
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

    /// Keys items with `key` instead of their index.
    pub fn key(mut self, key: impl Fn(&T, usize) -> String + 'static) -> Self {
        self.key = Some(Box::new(key));
        self
    }

    // ========================================================================
    // Switch and display states
    // ========================================================================

    /// Dispatches on `value` against the `Case` children.
    pub fn switch(mut self, value: impl Into<Value<'static>>) -> Self {
        self.switch = Some(value.into());
        self
    }

    /// Shows the loading state.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Shows the error state with `payload`.
    pub fn error(mut self, payload: impl Into<String>) -> Self {
        self.error = Some(payload.into());
        self
    }

    /// Node emitted when the condition fails, or as the loading placeholder.
    pub fn fallback(mut self, node: impl Into<Node>) -> Self {
        self.fallback = Some(node.into());
        self
    }

    /// Node emitted when iteration yields nothing.
    pub fn empty(mut self, node: impl Into<Node>) -> Self {
        self.empty = Some(node.into());
        self
    }

    // ========================================================================
    // Children
    // ========================================================================

    /// Appends a child entry.
    ///
    /// Children and [`render_item`](Self::render_item) are exclusive: the
    /// last call wins, so a child appended after a render function replaces it.
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

    /// Appends an `If` marker selected when `when` is true.
    ///
    /// The dispatcher's own directives are not consulted for entries.
    pub fn if_(self, when: bool, branch: impl Into<Branch<T>>) -> Self {
        self.child(Child::if_(when, branch))
    }

    /// Appends an `ElseIf` marker selected when `when` is true.
    pub fn else_if(self, when: bool, branch: impl Into<Branch<T>>) -> Self {
        self.child(Child::else_if(when, branch))
    }

    /// Appends an `Else` marker.
    pub fn else_(self, branch: impl Into<Branch<T>>) -> Self {
        self.child(Child::else_(branch))
    }

    /// Renders each item with `render`, replacing any children set so far.
    pub fn render_item(mut self, render: impl Fn(&T, usize, &[&T]) -> Node + 'static) -> Self {
        self.children = Children::PerItem(Box::new(render));
        self
    }

    // ========================================================================
    // Presentation
    // ========================================================================

    /// Wraps emitted children.
    pub fn wrapper(mut self, wrapper: impl Into<Wrapper>) -> Self {
        self.presentation.wrapper = wrapper.into();
        self
    }

    /// Marks iteration output with the animation class.
    pub fn animate(mut self, animate: bool) -> Self {
        self.presentation.animate = animate;
        self
    }

    /// Logs dispatch and pipeline diagnostics at DEBUG.
    pub fn debug(mut self, debug: bool) -> Self {
        self.presentation.debug = debug;
        self
    }

    /// Replaces all presentation options.
    pub fn presentation(mut self, presentation: Presentation) -> Self {
        self.presentation = presentation;
        self
    }

    /// Calls `observer` after every successful dispatch.
    pub fn on_render(mut self, observer: impl Fn(&RenderReport) + 'static) -> Self {
        self.on_render = Some(Box::new(observer));
        self
    }

    /// Finalizes the dispatcher.
    ///
    /// This is a no-op that returns self, provided for fluent API clarity.
    pub fn build(self) -> Self {
        self
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Returns `true` if a primary condition or any directive is set.
    pub fn has_condition(&self) -> bool {
        !self.condition.is_empty()
    }

    /// Returns `true` if a source collection is set.
    pub fn has_iteration(&self) -> bool {
        self.each.is_some()
    }

    /// The mode [`render`](Self::render) will use.
    pub fn mode(&self) -> Mode {
        if self.loading {
            Mode::Loading
        } else if self.error.is_some() {
            Mode::Error
        } else if self.switch.is_some() {
            Mode::Switch
        } else if self.children.has_if_chain() {
            Mode::IfChain
        } else if self.has_condition() && self.has_iteration() {
            Mode::ConditionAndIteration
        } else if self.has_condition() {
            Mode::ConditionOnly
        } else if self.has_iteration() {
            Mode::IterationOnly
        } else {
            Mode::PassThrough
        }
    }

    /// Renders the dispatcher.
    pub fn render(&self) -> Result<Node> {
        let mode = self.mode();
        let debug = self.presentation.debug;
        if debug {
            tracing::debug!(mode = %mode, "conditional dispatch");
        } else {
            tracing::trace!(mode = %mode, "conditional dispatch");
        }

        let condition = self.condition.evaluate();
        let items = self.pipeline.apply(self.each.as_deref(), debug);

        let node = match mode {
            Mode::Loading => self.fallback.clone().unwrap_or_else(loading_placeholder),
            Mode::Error => error_placeholder(self.error.as_deref().unwrap_or_default()),
            Mode::Switch => self.render_switch(),
            Mode::IfChain => self.render_if_chain(debug)?,
            Mode::ConditionAndIteration => {
                if matches!(self.children, Children::Static(_)) {
                    return Err(ConditionalError::RenderFnRequired);
                }
                if !condition {
                    self.fallback_node()
                } else if items.is_empty() {
                    self.empty_node()
                } else {
                    let nodes = emit_items(&items, &self.children, self.key.as_ref())?;
                    self.presentation.wrapper.wrap(nodes, None)
                }
            }
            Mode::ConditionOnly => {
                if condition {
                    self.wrapped_children()
                } else {
                    self.fallback_node()
                }
            }
            Mode::IterationOnly => {
                if items.is_empty() {
                    self.empty_node()
                } else {
                    let nodes = emit_items(&items, &self.children, self.key.as_ref())?;
                    let class = self.presentation.animate.then_some(ANIMATED_CLASS);
                    self.presentation.wrapper.wrap(nodes, class)
                }
            }
            Mode::PassThrough => self.wrapped_children(),
        };

        if let Some(observer) = &self.on_render {
            observer(&RenderReport {
                condition,
                item_count: items.len(),
                has_condition: self.has_condition(),
                has_iteration: self.has_iteration(),
            });
        }

        Ok(node)
    }

    fn render_switch(&self) -> Node {
        let Some(value) = &self.switch else {
            return self.fallback_node();
        };

        let cases = || self.children.entries().iter().filter_map(Child::as_case);
        let selected = cases()
            .find(|case| case.matches(value))
            .or_else(|| cases().find(|case| case.is_default()));

        match selected {
            Some(case) => self.presentation.wrapper.wrap(case.nodes().to_vec(), None),
            None => self.fallback_node(),
        }
    }

    fn render_if_chain(&self, debug: bool) -> Result<Node> {
        match self
            .children
            .entries()
            .iter()
            .find_map(Child::selected_branch)
        {
            Some(branch) => branch.render_node(debug),
            None => Ok(Node::Empty),
        }
    }

    fn wrapped_children(&self) -> Node {
        self.presentation.wrapper.wrap(self.children.to_nodes(), None)
    }

    fn fallback_node(&self) -> Node {
        self.fallback.clone().unwrap_or_default()
    }

    fn empty_node(&self) -> Node {
        self.empty
            .as_ref()
            .or(self.fallback.as_ref())
            .cloned()
            .unwrap_or_default()
    }
}
