//! Field access trait for derive macro support.
//!
//! [`Fielded`] lets field-based helpers (comparators, filters, de-duplication)
//! read named fields from items without knowing their concrete type.

use crate::value::Value;

/// Trait for types whose fields can be read by name.
///
/// This trait is typically derived using `#[derive(Fielded)]` from the
/// `branchwork-macros` crate, but can also be implemented manually.
///
/// # Derive Usage
///
/// ```ignore
/// use branchwork_macros::Fielded;
///
/// #[derive(Fielded)]
/// struct Task {
///     #[field(String)]
///     name: String,
///     #[field(Number)]
///     priority: u8,
///     #[field(Bool)]
///     done: bool,
/// }
///
/// assert_eq!(Task::PRIORITY, "priority");
/// ```
///
/// # Manual Implementation
///
/// ```
/// use branchwork_predicate::{Fielded, Value, Number};
///
/// struct Task {
///     name: String,
///     priority: u8,
/// }
///
/// impl Fielded for Task {
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::from(self.name.as_str()),
///             "priority" => Value::Number(Number::U64(self.priority as u64)),
///             _ => Value::Null,
///         }
///     }
/// }
/// ```
pub trait Fielded {
    /// Returns the value of a field, or [`Value::Null`] if the field doesn't
    /// exist or is not exposed.
    fn field_value(&self, field: &str) -> Value<'_>;

    /// Function-pointer form of [`Fielded::field_value`].
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.field_value(field)
    }
}

impl<T: Fielded + ?Sized> Fielded for &T {
    fn field_value(&self, field: &str) -> Value<'_> {
        (**self).field_value(field)
    }
}
