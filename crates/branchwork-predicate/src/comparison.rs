//! Comparison directives.
//!
//! A [`Comparison`] pairs a `value` with a `target` (or a compiled `pattern`
//! for [`Op::Regex`]) and evaluates to a single boolean.

use regex::Regex;

use crate::error::Result;
use crate::op::Op;
use crate::value::Value;

/// A single comparison directive.
///
/// # Example
///
/// ```
/// use branchwork_predicate::Comparison;
///
/// assert!(Comparison::gt(10, 3).evaluate());
/// assert!(Comparison::starts_with("hello world", "hello").evaluate());
/// assert!(Comparison::matches("order-42", r"^order-\d+$").unwrap().evaluate());
/// ```
#[derive(Debug, Clone)]
pub struct Comparison {
    op: Op,
    value: Value<'static>,
    target: Target,
}

/// Right-hand side of a comparison.
#[derive(Debug, Clone)]
pub enum Target {
    /// Plain value for ordering, equality and substring operators.
    Value(Value<'static>),
    /// Compiled pattern for [`Op::Regex`].
    Pattern(Regex),
}

impl Comparison {
    /// Creates a comparison for any operator.
    ///
    /// For [`Op::Regex`] the string form of `target` is compiled as the
    /// pattern, which fails on malformed patterns.
    pub fn new(
        op: Op,
        value: impl Into<Value<'static>>,
        target: impl Into<Value<'static>>,
    ) -> Result<Self> {
        let target = target.into();
        let target = match op {
            Op::Regex => Target::Pattern(Regex::new(&target.to_text())?),
            _ => Target::Value(target),
        };
        Ok(Comparison {
            op,
            value: value.into(),
            target,
        })
    }

    fn plain(op: Op, value: impl Into<Value<'static>>, target: impl Into<Value<'static>>) -> Self {
        Comparison {
            op,
            value: value.into(),
            target: Target::Value(target.into()),
        }
    }

    /// `value > target`.
    pub fn gt(value: impl Into<Value<'static>>, target: impl Into<Value<'static>>) -> Self {
        Self::plain(Op::Gt, value, target)
    }

    /// `value < target`.
    pub fn lt(value: impl Into<Value<'static>>, target: impl Into<Value<'static>>) -> Self {
        Self::plain(Op::Lt, value, target)
    }

    /// `value == target` (strict).
    pub fn eq(value: impl Into<Value<'static>>, target: impl Into<Value<'static>>) -> Self {
        Self::plain(Op::Eq, value, target)
    }

    /// `value != target` (strict).
    pub fn ne(value: impl Into<Value<'static>>, target: impl Into<Value<'static>>) -> Self {
        Self::plain(Op::Ne, value, target)
    }

    /// String form of `value` contains `target`.
    pub fn contains(value: impl Into<Value<'static>>, target: impl Into<Value<'static>>) -> Self {
        Self::plain(Op::Contains, value, target)
    }

    /// String form of `value` starts with `target`.
    pub fn starts_with(
        value: impl Into<Value<'static>>,
        target: impl Into<Value<'static>>,
    ) -> Self {
        Self::plain(Op::StartsWith, value, target)
    }

    /// String form of `value` ends with `target`.
    pub fn ends_with(value: impl Into<Value<'static>>, target: impl Into<Value<'static>>) -> Self {
        Self::plain(Op::EndsWith, value, target)
    }

    /// String form of `value` matches `pattern`.
    pub fn matches(value: impl Into<Value<'static>>, pattern: &str) -> Result<Self> {
        Ok(Comparison {
            op: Op::Regex,
            value: value.into(),
            target: Target::Pattern(Regex::new(pattern)?),
        })
    }

    /// Creates a regex comparison from an already compiled pattern.
    pub fn matches_regex(value: impl Into<Value<'static>>, pattern: Regex) -> Self {
        Comparison {
            op: Op::Regex,
            value: value.into(),
            target: Target::Pattern(pattern),
        }
    }

    /// The operator of this directive.
    pub fn op(&self) -> Op {
        self.op
    }

    /// The left-hand value.
    pub fn value(&self) -> &Value<'static> {
        &self.value
    }

    /// The right-hand target.
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Evaluates the directive.
    ///
    /// Ordering operators return `false` when the operands cannot be compared
    /// (mismatched types, nulls, NaN). Equality is strict: values of different
    /// types are never equal.
    pub fn evaluate(&self) -> bool {
        match (&self.target, self.op) {
            (Target::Pattern(regex), _) => regex.is_match(&self.value.to_text()),
            (Target::Value(target), Op::Eq) => self.value == *target,
            (Target::Value(target), Op::Ne) => self.value != *target,
            (Target::Value(target), Op::Gt | Op::Lt) => match self.value.compare(target) {
                Some(ordering) => self.op.eval_ordering(ordering),
                None => false,
            },
            (Target::Value(target), op) => self.match_text(op, &target.to_text()),
        }
    }

    fn match_text(&self, op: Op, target: &str) -> bool {
        let text = self.value.to_text();
        match op {
            Op::Contains => text.contains(target),
            Op::StartsWith => text.starts_with(target),
            Op::EndsWith => text.ends_with(target),
            // Regex without a compiled pattern cannot be built
            _ => false,
        }
    }
}
