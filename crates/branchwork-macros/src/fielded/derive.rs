//! Implementation of the `#[derive(Fielded)]` macro.
//!
//! This macro generates an implementation of the `Fielded` trait and field
//! name constants for typo-free comparator and filter construction.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::{parse_field_attrs, FieldType};

/// Main implementation of the Fielded derive macro.
pub fn fielded_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Fielded can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Fielded can only be derived for structs",
            ))
        }
    };

    let mut field_matches: Vec<TokenStream> = Vec::new();
    let mut field_constants: Vec<TokenStream> = Vec::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let attrs = parse_field_attrs(&field.attrs)?;

        if attrs.skip {
            continue;
        }

        // Fields without a declared type are not exposed
        let field_type = match attrs.field_type {
            Some(t) => t,
            None => continue,
        };

        let lookup_name = attrs.rename.unwrap_or_else(|| field_name.to_string());
        let const_name = format_ident!("{}", to_screaming_snake_case(&lookup_name));

        field_constants.push(quote! {
            /// Field name constant for comparators and filters.
            pub const #const_name: &'static str = #lookup_name;
        });

        let value_expr = match field_type {
            FieldType::String => quote! {
                ::branchwork_predicate::Value::from(
                    ::std::convert::AsRef::<str>::as_ref(&self.#field_name)
                )
            },
            FieldType::Number => quote! {
                ::branchwork_predicate::Value::Number(
                    ::branchwork_predicate::Number::from(self.#field_name)
                )
            },
            FieldType::Bool => quote! {
                ::branchwork_predicate::Value::Bool(self.#field_name)
            },
        };

        field_matches.push(quote! {
            #lookup_name => #value_expr,
        });
    }

    let expanded = quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            #(#field_constants)*
        }

        impl #impl_generics ::branchwork_predicate::Fielded for #struct_name #ty_generics #where_clause {
            fn field_value(&self, field: &str) -> ::branchwork_predicate::Value<'_> {
                match field {
                    #(#field_matches)*
                    _ => ::branchwork_predicate::Value::Null,
                }
            }
        }
    };

    Ok(expanded)
}

/// Convert a string to SCREAMING_SNAKE_CASE.
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c == '_' || c == '-' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = true;
        }
    }

    result
}
