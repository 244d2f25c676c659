//! Branchwork predicates - typed conditions and comparison directives.
//!
//! This crate holds the value-level half of Branchwork: it decides *whether*
//! something renders and *in what order* items appear, but never builds
//! output. It provides:
//!
//! - [`Value`] and [`Number`]: the runtime values compared by directives
//! - [`Op`] and [`Comparison`]: gt, lt, eq, ne, contains, starts-with,
//!   ends-with and regex directives
//! - [`Condition`]: a primary boolean plus directives, evaluated with fixed
//!   priority
//! - [`Fielded`], [`OrderBy`] and [`Dir`]: named field access and ordering for
//!   field-based comparators and filters
//!
//! # Quick Start
//!
//! ```rust
//! use branchwork_predicate::{Condition, Dir, Fielded, OrderBy, Value};
//!
//! let cond = Condition::new()
//!     .gt(7, 5)
//!     .contains("release-notes", "draft")
//!     .build();
//! // gt outranks contains
//! assert!(cond.evaluate());
//!
//! struct Task {
//!     name: String,
//! }
//!
//! impl Fielded for Task {
//!     fn field_value(&self, field: &str) -> Value<'_> {
//!         match field {
//!             "name" => Value::from(self.name.as_str()),
//!             _ => Value::Null,
//!         }
//!     }
//! }
//!
//! let mut tasks = vec![Task { name: "b".into() }, Task { name: "a".into() }];
//! let order = OrderBy::new("name", Dir::Asc);
//! tasks.sort_by(|a, b| order.compare_items(a, b));
//! assert_eq!(tasks[0].name, "a");
//! ```
//!
//! # Directive Semantics
//!
//! | Directive | Result |
//! |-----------|--------|
//! | `gt`, `lt` | numeric or lexicographic ordering; `false` if incomparable |
//! | `eq`, `ne` | strict equality (type and value) |
//! | `contains`, `starts_with`, `ends_with` | substring test on the string form of `value` |
//! | `matches` | regex test on the string form of `value` |

mod comparison;
mod condition;
mod error;
mod op;
mod ordering;
mod traits;
mod value;

// Re-export public API
pub use comparison::{Comparison, Target};
pub use condition::Condition;
pub use error::{PredicateError, Result};
pub use op::Op;
pub use ordering::{compare_by_orderings, compare_values, Dir, OrderBy};
pub use traits::Fielded;
pub use value::{Number, Value};
