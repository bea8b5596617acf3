//! Derive macro for `fieldwalk` class descriptors.
//!
//! `#[derive(Reflect)]` implements `fieldwalk::Class` for a struct, emitting a `'static`
//! descriptor with the struct's declared field names and a link to its superclass.
//!
//! # Container Attributes
//!
//! - `#[reflect(extends = Parent)]` - Superclass without an embedded field
//! - `#[reflect(name = "...")]` - Reported class name override
//!
//! # Field Attributes
//!
//! - `#[reflect(base)]` - The field embeds the superclass; its type becomes the parent and the
//!   field itself is not reported

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Fields, GenericParam, LitStr, Type};

/// Generates the `fieldwalk::Class` implementation for a struct.
///
/// # Example
/// ```ignore
/// #[derive(Reflect)]
/// struct Animal {
///     name: String,
/// }
///
/// #[derive(Reflect)]
/// struct Dog {
///     #[reflect(base)]
///     animal: Animal,
///     breed: String,
/// }
///
/// // Generates:
/// impl ::fieldwalk::Class for Dog {
///     const DESCRIPTOR: &'static ::fieldwalk::ClassDescriptor =
///         &::fieldwalk::ClassDescriptor::new(
///             "Dog",
///             &["breed"],
///             Some(<Animal as ::fieldwalk::Class>::DESCRIPTOR),
///         )
///         .with_type::<Self>();
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand_reflect(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Parsed `#[reflect(...)]` container options.
#[derive(Default)]
struct ContainerAttrs {
    extends: Option<Type>,
    name: Option<LitStr>,
}

fn parse_container_attrs(input: &DeriveInput) -> syn::Result<ContainerAttrs> {
    let mut out = ContainerAttrs::default();
    for attr in &input.attrs {
        if !attr.path().is_ident("reflect") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("extends") {
                if out.extends.is_some() {
                    return Err(meta.error("duplicate `extends`"));
                }
                out.extends = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("name") {
                if out.name.is_some() {
                    return Err(meta.error("duplicate `name`"));
                }
                out.name = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("unknown reflect attribute; expected `extends` or `name`"))
            }
        })?;
    }
    Ok(out)
}

/// Returns true when the field carries `#[reflect(base)]`.
fn is_base_field(field: &syn::Field) -> syn::Result<bool> {
    let mut base = false;
    for attr in &field.attrs {
        if !attr.path().is_ident("reflect") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("base") {
                base = true;
                Ok(())
            } else {
                Err(meta.error("unknown reflect field attribute; expected `base`"))
            }
        })?;
    }
    Ok(base)
}

fn expand_reflect(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let attrs = parse_container_attrs(input)?;

    let data = match &input.data {
        Data::Struct(data) => data,
        Data::Enum(data) => {
            return Err(syn::Error::new_spanned(
                data.enum_token,
                "Reflect can only be derived for structs",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "Reflect can only be derived for structs",
            ));
        }
    };

    if let Some(lifetime) = input.generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "Reflect cannot be derived for types with lifetime parameters",
        ));
    }

    // Collect declared field names, pulling out the embedded superclass if there is one.
    let mut field_names: Vec<String> = Vec::new();
    let mut base: Option<&syn::Field> = None;
    let fields: Vec<(usize, &syn::Field)> = match &data.fields {
        // Named fields (e.g. `struct User { name: String, age: i64 }`)
        Fields::Named(fields) => fields.named.iter().enumerate().collect(),
        // Unnamed fields (e.g. `struct User(String, i64)`)
        Fields::Unnamed(fields) => fields.unnamed.iter().enumerate().collect(),
        // Unit struct (e.g. `struct Marker;`)
        Fields::Unit => Vec::new(),
    };
    for (index, field) in fields {
        if is_base_field(field)? {
            if base.is_some() {
                return Err(syn::Error::new_spanned(
                    field,
                    "only one field can be marked #[reflect(base)]",
                ));
            }
            base = Some(field);
            continue;
        }
        let field_name = match &field.ident {
            // `r#type` is reported as `type`
            Some(ident) => ident.unraw().to_string(),
            None => index.to_string(),
        };
        field_names.push(field_name);
    }

    let parent: Option<Type> = match (attrs.extends, base) {
        (Some(_), Some(field)) => {
            return Err(syn::Error::new_spanned(
                field,
                "#[reflect(base)] cannot be combined with #[reflect(extends = ...)]",
            ));
        }
        (Some(extends), None) => Some(extends),
        (None, Some(field)) => Some(field.ty.clone()),
        (None, None) => None,
    };

    let class_name = attrs
        .name
        .unwrap_or_else(|| LitStr::new(&name.unraw().to_string(), name.span()));

    let mut generics = input.generics.clone();
    let type_params: Vec<_> = generics
        .params
        .iter()
        .filter_map(|param| match param {
            GenericParam::Type(ty) => Some(ty.ident.clone()),
            _ => None,
        })
        .collect();
    {
        let where_clause = generics.make_where_clause();
        for ident in &type_params {
            where_clause.predicates.push(parse_quote!(#ident: 'static));
        }
        if let Some(parent) = &parent {
            where_clause.predicates.push(parse_quote!(#parent: ::fieldwalk::Class));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let parent_tokens = match &parent {
        Some(parent) => quote! {
            ::core::option::Option::Some(<#parent as ::fieldwalk::Class>::DESCRIPTOR)
        },
        None => quote! { ::core::option::Option::None },
    };

    let expanded = quote! {
        impl #impl_generics ::fieldwalk::Class for #name #ty_generics #where_clause {
            const DESCRIPTOR: &'static ::fieldwalk::ClassDescriptor =
                &::fieldwalk::ClassDescriptor::new(
                    #class_name,
                    &[#(#field_names),*],
                    #parent_tokens,
                )
                .with_type::<Self>();
        }
    };

    Ok(expanded)
}
