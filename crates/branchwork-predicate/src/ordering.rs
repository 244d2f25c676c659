//! Ordering types for field-based sorting.
//!
//! Provides [`Dir`] for sort direction and [`OrderBy`] for field-based ordering
//! of [`Fielded`] items.

use std::cmp::Ordering;

use crate::traits::Fielded;
use crate::value::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Applies this direction to an ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single ordering clause specifying a field and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    /// The field to sort by.
    pub field: String,
    /// The sort direction.
    pub dir: Dir,
}

impl OrderBy {
    /// Creates a new ascending ordering for the given field.
    pub fn asc(field: impl Into<String>) -> Self {
        OrderBy::new(field, Dir::Asc)
    }

    /// Creates a new descending ordering for the given field.
    pub fn desc(field: impl Into<String>) -> Self {
        OrderBy::new(field, Dir::Desc)
    }

    /// Creates a new ordering with the given direction.
    pub fn new(field: impl Into<String>, dir: Dir) -> Self {
        OrderBy {
            field: field.into(),
            dir,
        }
    }

    /// Compares two values according to this ordering.
    ///
    /// Nulls sort last in either direction. Returns `None` if the values
    /// cannot be compared (type mismatch or NaN).
    pub fn compare(&self, a: &Value<'_>, b: &Value<'_>) -> Option<Ordering> {
        match nulls_last(a, b) {
            Some(ordering) => Some(ordering),
            None => a.compare(b).map(|ordering| self.dir.apply(ordering)),
        }
    }

    /// Compares two items by this ordering's field.
    ///
    /// This is a total order, safe to hand to any sort: nulls come last in
    /// either direction, and other values follow [`Value::total_cmp`].
    pub fn compare_items<T: Fielded>(&self, a: &T, b: &T) -> Ordering {
        let a = a.field_value(&self.field);
        let b = b.field_value(&self.field);
        nulls_last(&a, &b).unwrap_or_else(|| self.dir.apply(a.total_cmp(&b)))
    }
}

/// Orders nulls after everything else. `None` when neither side is null.
fn nulls_last(a: &Value<'_>, b: &Value<'_>) -> Option<Ordering> {
    match (a.is_null(), b.is_null()) {
        (true, true) => Some(Ordering::Equal),
        (true, false) => Some(Ordering::Greater),
        (false, true) => Some(Ordering::Less),
        (false, false) => None,
    }
}

/// Compares two values for sorting.
///
/// Nulls sort last regardless of type. Returns `None` if the types don't
/// match or comparison is not possible (NaN).
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Option<Ordering> {
    match nulls_last(a, b) {
        Some(ordering) => Some(ordering),
        None => a.compare(b),
    }
}

/// Compares two items using a list of ordering clauses.
///
/// Uses the first clause as the primary sort key, the second to break ties, etc.
/// If all clauses compare equal, returns `Equal`.
pub fn compare_by_orderings<T: Fielded>(a: &T, b: &T, orderings: &[OrderBy]) -> Ordering {
    for order_by in orderings {
        let ordering = order_by.compare_items(a, b);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}
