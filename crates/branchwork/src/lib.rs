//! Branchwork - declarative conditional, switch and iteration rendering.
//!
//! A single [`Conditional`] dispatcher covers the branching a templating layer
//! usually spreads across several constructs:
//!
//! - plain conditions, from a primary boolean or comparison directives
//! - iteration over a collection, with filter, sort, reverse and limit
//! - condition and iteration together
//! - switch/case dispatch on a value
//! - if / else-if / else chains
//! - loading, error and empty states
//!
//! Output is a small [`Node`] tree. Hosts turn it into their own elements, or
//! use its `Display` markup or JSON form directly.
//!
//! # Quick Start
//!
//! ```rust
//! use branchwork::{Child, Conditional, Node};
//!
//! // if / else-if / else
//! let greeting = Conditional::<()>::new()
//!     .if_(false, "Good morning")
//!     .else_if(true, "Good afternoon")
//!     .else_("Good evening");
//! assert_eq!(greeting.render().unwrap().to_string(), "Good afternoon");
//!
//! // switch
//! let status = Conditional::<()>::new()
//!     .switch("done")
//!     .child(Child::case("open", vec![Node::text("Open")]))
//!     .child(Child::case("done", vec![Node::text("Done")]))
//!     .child(Child::default_case(vec![Node::text("Unknown")]));
//! assert_eq!(status.render().unwrap().to_string(), "Done");
//!
//! // iteration
//! let list = Conditional::new()
//!     .each(vec!["b", "a", "c"])
//!     .sort(|a: &&str, b: &&str| a.cmp(b))
//!     .reverse(true)
//!     .render_item(|s, _, _| Node::element("li").with_child(Node::text(*s)))
//!     .wrapper("ul");
//! assert_eq!(
//!     list.render().unwrap().to_string(),
//!     "<ul><li>c</li><li>b</li><li>a</li></ul>"
//! );
//! ```
//!
//! # Mode Precedence
//!
//! ```text
//! loading > error > switch > if-chain > condition+iteration
//!         > condition > iteration > pass-through
//! ```
//!
//! # Crates
//!
//! - `branchwork-predicate`: values, comparison directives and field access,
//!   re-exported here
//! - `branchwork-macros`: `#[derive(Fielded)]`, re-exported here

mod children;
mod conditional;
mod error;
pub mod helpers;
mod node;
mod pipeline;
mod presentation;

pub use children::{Branch, Case, Child, Children, KeyFn, RenderFn};
pub use conditional::{
    error_placeholder, loading_placeholder, Conditional, Mode, RenderObserver, RenderReport,
    ERROR_CLASS, LOADING_CLASS,
};
pub use error::{ConditionalError, Result};
pub use node::Node;
pub use pipeline::{FilterFn, Pipeline, SortFn};
pub use presentation::{Presentation, Wrapper, ANIMATED_CLASS};

pub use branchwork_predicate::{
    compare_values, Comparison, Condition, Dir, Fielded, Number, Op, OrderBy, PredicateError,
    Target, Value,
};

pub use branchwork_macros::Fielded;
