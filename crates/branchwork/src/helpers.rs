//! Option helpers.
//!
//! Small pure functions for building conditions, comparators, filters and
//! de-duplicated collections to feed into a [`Conditional`](crate::Conditional).
//!
//! ```rust
//! use branchwork::helpers::{is_not_empty, sort_by};
//! use branchwork::{Conditional, Dir, Fielded, Node};
//!
//! #[derive(Fielded)]
//! struct Task {
//!     #[field(String)]
//!     name: String,
//!     #[field(Number)]
//!     priority: u8,
//! }
//!
//! let tasks = vec![
//!     Task { name: "write".into(), priority: 1 },
//!     Task { name: "ship".into(), priority: 3 },
//! ];
//!
//! let list = Conditional::new()
//!     .condition(is_not_empty(&tasks))
//!     .each(tasks)
//!     .sort(sort_by::<Task>(Task::PRIORITY, Dir::Desc))
//!     .render_item(|task, _, _| Node::text(task.name.clone()))
//!     .wrapper("ul");
//!
//! assert_eq!(list.render().unwrap().to_string(), "<ul>shipwrite</ul>");
//! ```

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;

use branchwork_predicate::{compare_by_orderings, Condition, Dir, Fielded, OrderBy, Value};

/// Condition that holds when `items` is empty.
pub fn is_empty<T>(items: &[T]) -> Condition {
    Condition::from(items.is_empty())
}

/// Condition that holds when `items` is not empty.
pub fn is_not_empty<T>(items: &[T]) -> Condition {
    Condition::from(!items.is_empty())
}

/// Condition that holds when `items` has exactly `len` elements.
pub fn has_length<T>(items: &[T], len: usize) -> Condition {
    Condition::from(items.len() == len)
}

/// Condition that holds when `n` is even.
pub fn is_even(n: i64) -> Condition {
    Condition::from(n % 2 == 0)
}

/// Condition that holds when `n` is odd.
pub fn is_odd(n: i64) -> Condition {
    Condition::from(n % 2 != 0)
}

/// Comparator on one named field.
///
/// The order is total: values of different types sort by type (numbers,
/// then strings, then booleans) and NaN sorts after every other number.
/// Nulls sort last in either direction.
pub fn sort_by<T: Fielded + 'static>(
    field: &str,
    dir: Dir,
) -> impl Fn(&T, &T) -> Ordering + 'static {
    let order = OrderBy::new(field, dir);
    move |a, b| order.compare_items(a, b)
}

/// Comparator on several fields, the first taking precedence.
pub fn sort_by_fields<T: Fielded + 'static>(
    orderings: Vec<OrderBy>,
) -> impl Fn(&T, &T) -> Ordering + 'static {
    move |a, b| compare_by_orderings(a, b, &orderings)
}

/// Filter keeping items whose `field` strictly equals `value`.
pub fn filter_by<T: Fielded + 'static>(
    field: &str,
    value: impl Into<Value<'static>>,
) -> impl Fn(&T) -> bool + 'static {
    let field = field.to_string();
    let value = value.into();
    move |item| item.field_value(&field) == value
}

/// Keeps the first item per value of `field`, preserving order.
///
/// Values are compared with strict equality, so `1` and `"1"` are distinct
/// keys.
pub fn unique_by_field<'a, T: Fielded>(items: &'a [T], field: &str) -> Vec<&'a T> {
    let mut seen: Vec<Value<'a>> = Vec::new();
    let mut out = Vec::new();
    for item in items {
        let value = item.field_value(field);
        if !seen.contains(&value) {
            seen.push(value);
            out.push(item);
        }
    }
    out
}

/// Keeps the first item per key, preserving order.
pub fn unique_by<T, K, F>(items: &[T], key: F) -> Vec<&T>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items.iter().filter(|item| seen.insert(key(*item))).collect()
}
