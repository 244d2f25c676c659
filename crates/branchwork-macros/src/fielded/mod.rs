//! Implementation of the `#[derive(Fielded)]` macro.
//!
//! Generates named field access and field name constants from struct
//! annotations.

mod attrs;
mod derive;

pub use derive::fielded_derive_impl;
