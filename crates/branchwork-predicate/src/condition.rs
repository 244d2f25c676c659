//! Condition builder and evaluator.
//!
//! A [`Condition`] is the predicate half of a conditional configuration: an
//! optional primary boolean plus at most one directive per operator.

use std::collections::BTreeMap;

use crate::comparison::Comparison;
use crate::error::Result;
use crate::op::Op;
use crate::value::Value;

/// A predicate built from a primary condition and comparison directives.
///
/// Evaluation rules:
///
/// ```text
/// when set             => when
/// else first directive => directive result   (priority: gt, lt, eq, ne,
///                                              contains, startswith,
///                                              endswith, regex)
/// else                 => true
/// ```
///
/// # Example
///
/// ```
/// use branchwork_predicate::Condition;
///
/// let cond = Condition::new().gt(5, 3).eq("a", "b").build();
/// // gt outranks eq
/// assert!(cond.evaluate());
///
/// // The primary condition ignores every directive
/// let cond = Condition::new().when(false).gt(5, 3).build();
/// assert!(!cond.evaluate());
///
/// assert!(Condition::new().evaluate());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Condition {
    when: Option<bool>,
    directives: BTreeMap<Op, Comparison>,
}

impl Condition {
    /// Creates an empty condition, which evaluates to `true`.
    pub fn new() -> Self {
        Condition::default()
    }

    /// Sets the primary condition.
    pub fn when(mut self, when: bool) -> Self {
        self.when = Some(when);
        self
    }

    /// Adds a directive, replacing any previous directive with the same operator.
    pub fn with(mut self, comparison: Comparison) -> Self {
        self.directives.insert(comparison.op(), comparison);
        self
    }

    // ========================================================================
    // Directive shorthand methods
    // ========================================================================

    /// Adds a greater-than directive.
    pub fn gt(self, value: impl Into<Value<'static>>, target: impl Into<Value<'static>>) -> Self {
        self.with(Comparison::gt(value, target))
    }

    /// Adds a less-than directive.
    pub fn lt(self, value: impl Into<Value<'static>>, target: impl Into<Value<'static>>) -> Self {
        self.with(Comparison::lt(value, target))
    }

    /// Adds an equality directive.
    pub fn eq(self, value: impl Into<Value<'static>>, target: impl Into<Value<'static>>) -> Self {
        self.with(Comparison::eq(value, target))
    }

    /// Adds a not-equal directive.
    pub fn ne(self, value: impl Into<Value<'static>>, target: impl Into<Value<'static>>) -> Self {
        self.with(Comparison::ne(value, target))
    }

    /// Adds a substring directive.
    pub fn contains(
        self,
        value: impl Into<Value<'static>>,
        target: impl Into<Value<'static>>,
    ) -> Self {
        self.with(Comparison::contains(value, target))
    }

    /// Adds a prefix directive.
    pub fn starts_with(
        self,
        value: impl Into<Value<'static>>,
        target: impl Into<Value<'static>>,
    ) -> Self {
        self.with(Comparison::starts_with(value, target))
    }

    /// Adds a suffix directive.
    pub fn ends_with(
        self,
        value: impl Into<Value<'static>>,
        target: impl Into<Value<'static>>,
    ) -> Self {
        self.with(Comparison::ends_with(value, target))
    }

    /// Adds a regex directive. Fails on malformed patterns.
    pub fn matches(self, value: impl Into<Value<'static>>, pattern: &str) -> Result<Self> {
        Ok(self.with(Comparison::matches(value, pattern)?))
    }

    /// Finalizes the condition.
    ///
    /// This is a no-op that returns self, provided for fluent API clarity.
    pub fn build(self) -> Self {
        self
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// The primary condition, if set.
    pub fn primary(&self) -> Option<bool> {
        self.when
    }

    /// Directives in priority order.
    pub fn directives(&self) -> impl Iterator<Item = &Comparison> {
        self.directives.values()
    }

    /// The directive that decides the result when no primary condition is set.
    pub fn deciding_directive(&self) -> Option<&Comparison> {
        self.directives.values().next()
    }

    /// Returns `true` if neither a primary condition nor a directive is set.
    pub fn is_empty(&self) -> bool {
        self.when.is_none() && self.directives.is_empty()
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Evaluates the condition.
    pub fn evaluate(&self) -> bool {
        if let Some(when) = self.when {
            return when;
        }

        match self.deciding_directive() {
            Some(directive) => directive.evaluate(),
            None => true,
        }
    }
}

impl From<bool> for Condition {
    fn from(when: bool) -> Self {
        Condition::new().when(when)
    }
}

impl From<Comparison> for Condition {
    fn from(comparison: Comparison) -> Self {
        Condition::new().with(comparison)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_condition_is_true() {
        let cond = Condition::new();
        assert!(cond.is_empty());
        assert!(cond.evaluate());
    }

    #[test]
    fn primary_condition_wins() {
        assert!(Condition::new().when(true).lt(5, 3).evaluate());
        assert!(!Condition::new().when(false).gt(5, 3).evaluate());
    }

    #[test]
    fn directive_priority() {
        // lt (false) outranks eq (true)
        let cond = Condition::new().eq(1, 1).lt(5, 3).build();
        assert_eq!(cond.deciding_directive().map(Comparison::op), Some(Op::Lt));
        assert!(!cond.evaluate());

        // contains (true) outranks regex (false)
        let cond = Condition::new()
            .matches("abc", "^z")
            .unwrap()
            .contains("abc", "b")
            .build();
        assert!(cond.evaluate());
    }

    #[test]
    fn same_operator_replaces() {
        let cond = Condition::new().gt(1, 2).gt(3, 2).build();
        assert_eq!(cond.directives().count(), 1);
        assert!(cond.evaluate());
    }

    #[test]
    fn directives_iterate_in_priority_order() {
        let cond = Condition::new()
            .ends_with("a", "a")
            .ne(1, 2)
            .gt(2, 1)
            .build();
        let ops: Vec<Op> = cond.directives().map(Comparison::op).collect();
        assert_eq!(ops, vec![Op::Gt, Op::Ne, Op::EndsWith]);
    }

    #[test]
    fn conversions() {
        assert!(!Condition::from(false).evaluate());
        assert_eq!(Condition::from(true).primary(), Some(true));
        assert!(Condition::from(Comparison::eq("x", "x")).evaluate());
    }
}
