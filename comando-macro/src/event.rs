use convert_case::{Case, Casing};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{ext::IdentExt, meta::ParseNestedMeta, Error, ItemFn, LitStr, Visibility};

use crate::signature::{check_plain_fn, doc_description, return_type, typed_arg, vec_item};

#[derive(Default)]
pub struct EventArgs {
    name: Option<LitStr>,
    event: Option<LitStr>,
    description: Option<LitStr>,
}

impl EventArgs {
    pub fn parse(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("name") {
            self.name = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("event") {
            self.event = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("description") {
            self.description = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error(
                "unsupported event property, expected `name`, `event` or `description`",
            ))
        }
    }
}

pub fn event_impl(args: EventArgs, input: &ItemFn) -> syn::Result<TokenStream> {
    let sig = &input.sig;
    check_plain_fn(sig)?;

    let event = args.event.map(|event| event.value()).ok_or_else(|| {
        Error::new(
            Span::call_site(),
            "missing `event` property, e.g. #[event(event = \"ready\")]",
        )
    })?;

    let fn_name = &sig.ident;
    let vis = &input.vis;
    let output = return_type(&sig.output);

    let mut params = sig.inputs.iter();

    // `fn ready()` ignores whatever it is called with.
    let (arg_type, action_expr) = match params.next() {
        Some(arg) => {
            let ty = typed_arg(arg)?;
            let item = vec_item(ty).ok_or_else(|| Error::new_spanned(ty, "expected `Vec<A>`"))?;

            (quote! { #item }, quote! { #fn_name })
        }
        None => (
            quote! { ::comando::Value },
            quote! { |_: ::std::vec::Vec<::comando::Value>| #fn_name() },
        ),
    };

    if let Some(extra) = params.next() {
        return Err(Error::new_spanned(
            extra,
            "events take a single `Vec<A>` parameter holding every argument",
        ));
    }

    let name = args
        .name
        .map(|name| name.value())
        .unwrap_or_else(|| fn_name.unraw().to_string().to_case(Case::Title));

    let description = args
        .description
        .map(|description| description.value())
        .unwrap_or_else(|| doc_description(&input.attrs));

    let docs = input.attrs.iter().filter(|attr| attr.path().is_ident("doc"));

    let mut action = input.clone();
    action.vis = Visibility::Inherited;
    action.attrs.retain(|attr| !attr.path().is_ident("doc"));

    Ok(quote! {
        #(#docs)*
        #vis fn #fn_name() -> ::comando::EventDescriptor<#arg_type, #output> {
            #action

            ::comando::EventDescriptor::new(::comando::EventConfig {
                name: #name.to_owned(),
                event: #event.to_owned(),
                description: #description.to_owned(),
                action: #action_expr,
            })
        }
    })
}
