//! Proc macros for Branchwork.
//!
//! # Available Macros
//!
//! - [`Fielded`] - Generate named field access for field-based comparators,
//!   filters and de-duplication helpers

mod fielded;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Fielded` trait for structs.
///
/// This macro generates an implementation of the `Fielded` trait from
/// `branchwork-predicate`, enabling field-based sorting and filtering.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `String` | String-like field (anything `AsRef<str>`) |
/// | `Number` | Numeric field (any primitive convertible to `Number`) |
/// | `Bool` | Boolean field |
/// | `skip` | Exclude this field |
/// | `rename = "..."` | Use a custom lookup name |
///
/// Fields without a `#[field(...)]` attribute are not exposed.
///
/// # Generated Code
///
/// 1. Field name constants (e.g., `Task::NAME`, `Task::PRIORITY`)
/// 2. Implementation of `Fielded::field_value()`
///
/// # Example
///
/// ```ignore
/// use branchwork::helpers::sort_by;
/// use branchwork::{Dir, Fielded};
///
/// #[derive(Fielded)]
/// struct Task {
///     #[field(String)]
///     name: String,
///
///     #[field(Number)]
///     priority: u8,
///
///     #[field(skip)]
///     internal_id: u64,
/// }
///
/// let by_priority = sort_by::<Task>(Task::PRIORITY, Dir::Desc);
/// ```
#[proc_macro_derive(Fielded, attributes(field))]
pub fn fielded_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    fielded::fielded_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
