//! Attribute parsing for the Fielded derive macro.
//!
//! This module provides parsers for the `#[field(...)]` attributes used by
//! the `Fielded` derive macro.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Ident, Lit, Meta, Result, Token,
};

/// The value type of an exposed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// String field: `#[field(String)]`
    String,
    /// Number field: `#[field(Number)]`
    Number,
    /// Boolean field: `#[field(Bool)]`
    Bool,
}

impl FieldType {
    /// Parse a field type from an identifier.
    pub fn from_ident(ident: &Ident) -> Result<Self> {
        Self::from_name(&ident.to_string(), ident.span())
    }

    /// Parse a field type from a name, reporting errors at `span`.
    pub fn from_name(name: &str, span: Span) -> Result<Self> {
        match name {
            "String" | "string" | "str" => Ok(FieldType::String),
            "Number" | "number" => Ok(FieldType::Number),
            "Bool" | "boolean" | "bool" => Ok(FieldType::Bool),
            other => Err(Error::new(
                span,
                format!(
                    "unknown field type: '{}'. Expected one of: String, Number, Bool",
                    other
                ),
            )),
        }
    }
}

/// Field-level attributes from `#[field(...)]`.
#[derive(Debug, Clone, Default)]
pub struct FieldAttr {
    /// The type of this field.
    pub field_type: Option<FieldType>,
    /// Skip this field.
    pub skip: bool,
    /// Custom name for lookups (default: field name).
    pub rename: Option<String>,
}

impl Parse for FieldAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = FieldAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                // Type identifier: field(String), field(Number), or skip
                Meta::Path(p) => {
                    if p.is_ident("skip") {
                        attr.skip = true;
                    } else if let Some(ident) = p.get_ident() {
                        attr.field_type = Some(FieldType::from_ident(ident)?);
                    } else {
                        return Err(Error::new(
                            p.span(),
                            "expected field type: String, Number, Bool, or skip",
                        ));
                    }
                }

                // rename = "custom_name"
                Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                    if let syn::Expr::Lit(syn::ExprLit {
                        lit: Lit::Str(s), ..
                    }) = &nv.value
                    {
                        attr.rename = Some(s.value());
                    } else {
                        return Err(Error::new(
                            nv.value.span(),
                            "rename must be a string literal",
                        ));
                    }
                }

                Meta::NameValue(nv) => {
                    return Err(Error::new(
                        nv.path.span(),
                        "unknown attribute. Expected: rename",
                    ));
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown field attribute. Expected: String, Number, Bool, skip, or rename = \"...\"",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Extract `#[field(...)]` attributes from a struct field's attributes.
pub fn parse_field_attrs(attrs: &[Attribute]) -> Result<FieldAttr> {
    for attr in attrs {
        if attr.path().is_ident("field") {
            return attr.parse_args::<FieldAttr>();
        }
    }
    Ok(FieldAttr::default())
}
