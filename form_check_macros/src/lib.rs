extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Data, DeriveInput, Expr, Fields, Lit, Meta, parse_macro_input, punctuated::Punctuated, token,
};

/// Implements `easy_form_check::FormModel` for a struct with named fields.
///
/// Every field becomes one input named after the field. Supported keys in
/// `#[field(...)]`: `rules`, `label`, `name`, `id`, `kind` (an input type such
/// as `"password"`) and the bare flag `skip`.
#[proc_macro_derive(FormFields, attributes(field))]
pub fn form_fields_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

#[derive(Default)]
struct FieldAttrs {
    rules: Option<String>,
    label: Option<String>,
    name: Option<String>,
    id: Option<String>,
    kind: Option<String>,
    skip: bool,
}

fn expand(input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "Only structs with named fields are supported",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Only structs are supported",
            ));
        }
    };

    let mut inputs = Vec::new();
    for f in fields {
        let attrs = parse_field_attrs(f)?;
        if attrs.skip {
            continue;
        }
        let ident = f
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(f, "Expected a named field"))?;
        let input_name = attrs.name.unwrap_or_else(|| ident.to_string());

        let optional = |value: Option<String>| {
            value
                .map(|v| quote! { Some(#v.to_string()) })
                .unwrap_or(quote! { None })
        };
        let rules = optional(attrs.rules);
        let label = optional(attrs.label);
        let id = optional(attrs.id);
        let kind = attrs
            .kind
            .map(|k| quote! { ::easy_form_check::InputType::parse(#k) })
            .unwrap_or(quote! { ::easy_form_check::InputType::Text });

        inputs.push(quote! {
            ::easy_form_check::Input {
                name: Some(#input_name.to_string()),
                id: #id,
                input_type: #kind,
                value: ::easy_form_check::FieldValue::to_field_value(&self.#ident),
                label: #label,
                rules: #rules,
            }
        });
    }

    Ok(quote! {
        impl #impl_generics ::easy_form_check::FormModel for #name #ty_generics #where_clause {
            fn inputs(&self) -> Vec<::easy_form_check::Input> {
                vec![#(#inputs),*]
            }
        }
    })
}

// --- Helper Functions for Attribute Parsing ---

fn parse_field_attrs(field: &syn::Field) -> syn::Result<FieldAttrs> {
    let mut attrs = FieldAttrs::default();
    for attr in &field.attrs {
        if !attr.path().is_ident("field") {
            continue;
        }
        let parsed = attr.parse_args_with(Punctuated::<Meta, token::Comma>::parse_terminated)?;
        for meta in parsed {
            match meta {
                Meta::Path(path) if path.is_ident("skip") => attrs.skip = true,
                Meta::NameValue(nv) => {
                    let key = nv
                        .path
                        .get_ident()
                        .map(ToString::to_string)
                        .unwrap_or_default();
                    let value = get_string_lit_from_expr(&nv.value)?;
                    match key.as_str() {
                        "rules" => attrs.rules = Some(value),
                        "label" => attrs.label = Some(value),
                        "name" => attrs.name = Some(value),
                        "id" => attrs.id = Some(value),
                        "kind" => attrs.kind = Some(value),
                        _ => {
                            return Err(syn::Error::new_spanned(
                                &nv.path,
                                format!("Unknown attribute: {}", key),
                            ));
                        }
                    }
                }
                other => {
                    return Err(syn::Error::new_spanned(other, "Unsupported field attribute"));
                }
            }
        }
    }
    Ok(attrs)
}

/// Extracts a `String` from a string literal expression (e.g., `"hello"`).
/// Returns a `syn::Error` if the expression is not a string literal.
fn get_string_lit_from_expr(expr: &Expr) -> syn::Result<String> {
    if let Expr::Lit(expr_lit) = expr
        && let Lit::Str(lit_str) = &expr_lit.lit
    {
        return Ok(lit_str.value());
    }
    Err(syn::Error::new_spanned(expr, "Expected a string literal"))
}
