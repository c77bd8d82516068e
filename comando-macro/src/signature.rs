use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    Attribute, Error, Expr, ExprLit, FnArg, GenericArgument, Lit, Meta, PatType, PathArguments,
    ReturnType, Signature, Type,
};

// Only plain synchronous fns can be stored as an action.
pub fn check_plain_fn(sig: &Signature) -> syn::Result<()> {
    if let Some(asyncness) = &sig.asyncness {
        return Err(Error::new_spanned(asyncness, "async actions are not supported"));
    }

    if let Some(unsafety) = &sig.unsafety {
        return Err(Error::new_spanned(unsafety, "unsafe actions are not supported"));
    }

    if let Some(abi) = &sig.abi {
        return Err(Error::new_spanned(abi, "actions must use the Rust ABI"));
    }

    if !sig.generics.params.is_empty() || sig.generics.where_clause.is_some() {
        return Err(Error::new_spanned(&sig.generics, "actions cannot be generic"));
    }

    if let Some(variadic) = &sig.variadic {
        return Err(Error::new_spanned(variadic, "variadic fns are not supported"));
    }

    Ok(())
}

pub fn typed_arg(arg: &FnArg) -> syn::Result<&Type> {
    match arg {
        FnArg::Typed(PatType { ty, .. }) => Ok(ty.as_ref()),
        FnArg::Receiver(receiver) => Err(Error::new_spanned(receiver, "actions cannot take `self`")),
    }
}

// `Vec<A>` -> `A`
pub fn vec_item(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };

    let segment = type_path.path.segments.last()?;

    if segment.ident != "Vec" {
        return None;
    }

    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };

    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

pub fn is_string(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident == "String" && segment.arguments.is_none())
            .unwrap_or(false),
        _ => false,
    }
}

pub fn return_type(output: &ReturnType) -> TokenStream {
    match output {
        ReturnType::Default => quote! { () },
        ReturnType::Type(_, ty) => quote! { #ty },
    }
}

/// Doc comment lines joined by a single space.
pub fn doc_description(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(meta) => match &meta.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(lit), ..
                }) => Some(lit.value().trim().to_owned()),
                _ => None,
            },
            _ => None,
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
