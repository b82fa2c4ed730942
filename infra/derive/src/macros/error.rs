use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Fields, Ident, Type, Variant};

struct VariantMeta<'a> {
    ident: &'a Ident,
    source: Option<(&'a Ident, &'a Type)>,
    has_context: bool,
    cfg_attrs: Vec<Attribute>,
}

pub fn expand_derive(input: DeriveInput) -> TokenStream {
    let name = &input.ident;
    let ext_trait = format_ident!("{}Ext", name);

    let Data::Enum(data) = &input.data else {
        return quote! { compile_error!("geoq_error can only be applied to enums"); };
    };

    let variants = match data.variants.iter().map(inspect_variant).collect::<Result<Vec<_>, _>>()
    {
        Ok(v) => v,
        Err(err) => return err,
    };
    if let Some(err) = missing_context_error(&variants) {
        return err;
    }

    let derives = missing_derives(&input);
    let context_trait = context_trait(name, &ext_trait, &variants);
    let source_impls = variants.iter().filter_map(|v| source_impl(name, &ext_trait, v));
    let internal_impls = internal_impls(name, &variants);
    let kind_impl = kind_impl(name, &variants);

    quote! {
        #[allow(non_shorthand_field_patterns)]
        #derives
        #input

        #context_trait
        #(#source_impls)*
        #internal_impls
        #kind_impl

        #[allow(dead_code)]
        fn format_context(context: &Option<std::borrow::Cow<'static, str>>) -> std::borrow::Cow<'static, str> {
            context.as_ref().map_or(std::borrow::Cow::Borrowed(""), |c| std::borrow::Cow::Owned(format!(" ({c})")))
        }
    }
}

fn inspect_variant(v: &Variant) -> Result<VariantMeta<'_>, TokenStream> {
    let Fields::Named(fields) = &v.fields else {
        return Err(syn::Error::new_spanned(
            v,
            "geoq_error requires named fields (use `{ .., context: Option<Cow<'static, str>> }`)",
        )
        .to_compile_error());
    };

    let mut has_context = false;
    for field in &fields.named {
        if field.ident.as_ref().is_some_and(|ident| ident == "context") {
            if !is_context_type(&field.ty) {
                return Err(syn::Error::new_spanned(
                    &field.ty,
                    "context field must be Option<Cow<'static, str>>",
                )
                .to_compile_error());
            }
            has_context = true;
        }
    }

    let source = fields
        .named
        .iter()
        .find(|field| {
            field.ident.as_ref().is_some_and(|ident| ident == "source")
                || has_attr(&field.attrs, "source")
                || has_attr(&field.attrs, "from")
        })
        .and_then(|field| field.ident.as_ref().map(|ident| (ident, &field.ty)));

    Ok(VariantMeta {
        ident: &v.ident,
        source,
        has_context,
        cfg_attrs: v.attrs.iter().filter(|attr| attr.path().is_ident("cfg")).cloned().collect(),
    })
}

fn missing_derives(input: &DeriveInput) -> TokenStream {
    let present = derived_traits(input);
    let mut tokens = Vec::new();
    if !present.contains("Debug") {
        tokens.push(quote! { Debug });
    }
    if !present.contains("Error") {
        tokens.push(quote! { ::thiserror::Error });
    }
    if tokens.is_empty() {
        quote! {}
    } else {
        quote! { #[derive(#(#tokens),*)] }
    }
}

fn context_trait(name: &Ident, ext_trait: &Ident, variants: &[VariantMeta<'_>]) -> TokenStream {
    let arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let cfg_attrs = &v.cfg_attrs;
        let ident = v.ident;
        quote! { #(#cfg_attrs)* #name::#ident { context: c, .. } => *c = Some(context.into()), }
    });

    quote! {
        pub trait #ext_trait<T> {
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext_trait<T> for Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut e| {
                    match &mut e {
                        #( #arms )*
                        _ => {}
                    }
                    e
                })
            }
        }
    }
}

fn source_impl(name: &Ident, ext_trait: &Ident, v: &VariantMeta<'_>) -> Option<TokenStream> {
    if v.ident == "Internal" {
        return None;
    }
    let (field, ty) = v.source?;
    let ident = v.ident;
    let cfg_attrs = &v.cfg_attrs;

    Some(quote! {
        #(#cfg_attrs)*
        #[automatically_derived]
        impl From<#ty> for #name {
            #[inline]
            fn from(#field: #ty) -> Self { Self::#ident { #field, context: None } }
        }

        #(#cfg_attrs)*
        impl<T> #ext_trait<T> for std::result::Result<T, #ty> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> std::result::Result<T, #name> {
                self.map_err(|#field| #name::#ident { #field, context: Some(context.into()) })
            }
        }
    })
}

fn internal_impls(name: &Ident, variants: &[VariantMeta<'_>]) -> TokenStream {
    let Some(internal) = variants.iter().find(|v| v.ident == "Internal") else {
        return quote!();
    };
    let cfg_attrs = &internal.cfg_attrs;

    quote! {
        #(#cfg_attrs)*
        impl From<&'static str> for #name {
            #[inline]
            fn from(s: &'static str) -> Self { Self::Internal { message: std::borrow::Cow::Borrowed(s), context: None } }
        }
        #(#cfg_attrs)*
        impl From<String> for #name {
            #[inline]
            fn from(s: String) -> Self { Self::Internal { message: std::borrow::Cow::Owned(s), context: None } }
        }
    }
}

fn kind_impl(name: &Ident, variants: &[VariantMeta<'_>]) -> TokenStream {
    let arms = variants.iter().map(|v| {
        let cfg_attrs = &v.cfg_attrs;
        let ident = v.ident;
        let label = ident.to_string();
        quote! { #(#cfg_attrs)* Self::#ident { .. } => #label, }
    });

    quote! {
        #[automatically_derived]
        impl #name {
            /// Name of the variant, stable across message wording changes.
            #[must_use]
            pub const fn kind(&self) -> &'static str {
                match self {
                    #( #arms )*
                }
            }
        }
    }
}

fn has_attr(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}

fn derived_traits(input: &DeriveInput) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();

    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(segment) = meta.path.segments.last() {
                traits.insert(segment.ident.to_string());
            }
            Ok(())
        });
    }

    traits
}

fn missing_context_error(variants: &[VariantMeta<'_>]) -> Option<TokenStream> {
    variants.iter().find(|v| v.source.is_some() && !v.has_context).map(|v| {
        syn::Error::new_spanned(
            v.ident,
            "geoq_error requires `context: Option<Cow<'static, str>>` for variants with a source",
        )
        .to_compile_error()
    })
}

fn is_context_type(ty: &Type) -> bool {
    let Some(option) = last_segment(ty) else {
        return false;
    };
    if option.ident != "Option" {
        return false;
    }
    let Some(syn::GenericArgument::Type(cow_ty)) = first_generic(option) else {
        return false;
    };
    let Some(cow) = last_segment(cow_ty) else {
        return false;
    };
    if cow.ident != "Cow" {
        return false;
    }
    let syn::PathArguments::AngleBracketed(args) = &cow.arguments else {
        return false;
    };
    let mut args = args.args.iter();
    let Some(syn::GenericArgument::Lifetime(lt)) = args.next() else {
        return false;
    };
    let Some(syn::GenericArgument::Type(str_ty)) = args.next() else {
        return false;
    };
    lt.ident == "static" && last_segment(str_ty).is_some_and(|seg| seg.ident == "str")
}

fn last_segment(ty: &Type) -> Option<&syn::PathSegment> {
    let Type::Path(path) = ty else {
        return None;
    };
    path.path.segments.last()
}

fn first_generic(segment: &syn::PathSegment) -> Option<&syn::GenericArgument> {
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    args.args.first()
}
