//! Comparison operators for directives.
//!
//! The [`Op`] enum lists the supported directives in priority order: when a
//! [`Condition`](crate::Condition) carries several directives, the one whose
//! operator sorts first decides the result.

use std::cmp::Ordering;

/// Comparison operator for a directive.
///
/// Declaration order is evaluation priority, so `Op` derives `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Op {
    /// Greater than.
    Gt,
    /// Less than.
    Lt,
    /// Equal (strict: same type and value).
    Eq,
    /// Not equal.
    Ne,
    /// String form of the value contains the target.
    Contains,
    /// String form of the value starts with the target.
    StartsWith,
    /// String form of the value ends with the target.
    EndsWith,
    /// String form of the value matches a regular expression.
    Regex,
}

impl Op {
    /// All operators, highest priority first.
    pub const PRIORITY: [Op; 8] = [
        Op::Gt,
        Op::Lt,
        Op::Eq,
        Op::Ne,
        Op::Contains,
        Op::StartsWith,
        Op::EndsWith,
        Op::Regex,
    ];

    /// Returns `true` if this operator works on the string form of values.
    pub fn is_string_op(self) -> bool {
        matches!(
            self,
            Op::Contains | Op::StartsWith | Op::EndsWith | Op::Regex
        )
    }

    /// Returns `true` if this operator compares values by ordering.
    pub fn is_ordering_op(self) -> bool {
        matches!(self, Op::Gt | Op::Lt | Op::Eq | Op::Ne)
    }

    /// Evaluates a comparison given an ordering result.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Op::Eq => ordering == Ordering::Equal,
            Op::Ne => ordering != Ordering::Equal,
            Op::Gt => ordering == Ordering::Greater,
            Op::Lt => ordering == Ordering::Less,
            _ => false, // Not an ordering-based operator
        }
    }

    /// Returns the display name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Gt => "gt",
            Op::Lt => "lt",
            Op::Eq => "eq",
            Op::Ne => "ne",
            Op::Contains => "contains",
            Op::StartsWith => "startswith",
            Op::EndsWith => "endswith",
            Op::Regex => "regex",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
