use convert_case::{Case, Casing};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{ext::IdentExt, meta::ParseNestedMeta, Error, ItemFn, LitStr, Visibility};

use crate::signature::{
    check_plain_fn, doc_description, is_string, return_type, typed_arg, vec_item,
};

#[derive(Default)]
pub struct CommandArgs {
    name: Option<LitStr>,
    description: Option<LitStr>,
}

impl CommandArgs {
    pub fn parse(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("name") {
            self.name = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("description") {
            self.description = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported command property, expected `name` or `description`"))
        }
    }
}

pub fn command_impl(args: CommandArgs, input: &ItemFn) -> syn::Result<TokenStream> {
    let sig = &input.sig;
    check_plain_fn(sig)?;

    let mut params = sig.inputs.iter();

    // First param: message: M
    let message_arg = params
        .next()
        .ok_or_else(|| Error::new_spanned(sig, "expected first parameter: message: M"))?;
    let message_type = typed_arg(message_arg)?;

    // Second param: args: Vec<String>
    let args_arg = params
        .next()
        .ok_or_else(|| Error::new_spanned(sig, "expected second parameter: args: Vec<String>"))?;
    let args_type = typed_arg(args_arg)?;

    if !vec_item(args_type).map(is_string).unwrap_or(false) {
        return Err(Error::new_spanned(args_type, "expected `Vec<String>`"));
    }

    if let Some(extra) = params.next() {
        return Err(Error::new_spanned(
            extra,
            "commands take exactly two parameters: message and args",
        ));
    }

    let fn_name = &sig.ident;
    let vis = &input.vis;
    let output = return_type(&sig.output);

    let name = args
        .name
        .map(|name| name.value())
        .unwrap_or_else(|| fn_name.unraw().to_string().to_case(Case::Kebab));

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
        #vis fn #fn_name() -> ::comando::CommandDescriptor<#message_type, #output> {
            #action

            ::comando::CommandDescriptor::new(::comando::CommandConfig {
                name: #name.to_owned(),
                description: #description.to_owned(),
                action: #fn_name,
            })
        }
    })
}

#[cfg(test)]
mod tests {
    use proc_macro2::TokenStream;
    use quote::quote;
    use syn::{parse::Parser, parse_quote, ItemFn, ReturnType};

    use super::*;

    fn return_of(output: TokenStream) -> ReturnType {
        syn::parse2::<ItemFn>(output).unwrap().sig.output
    }

    fn expand(attr: TokenStream, input: ItemFn) -> syn::Result<TokenStream> {
        let mut args = CommandArgs::default();
        syn::meta::parser(|meta| args.parse(meta)).parse2(attr)?;

        command_impl(args, &input)
    }

    fn error(attr: TokenStream, input: ItemFn) -> String {
        expand(attr, input).unwrap_err().to_string()
    }

    #[test]
    fn expands_with_defaults() {
        let output = expand(
            quote! {},
            parse_quote! {
                /// Says hello
                pub fn say_hello(message: u64, args: Vec<String>) -> String {
                    format!("{message} {args:?}")
                }
            },
        )
        .unwrap();

        let expected: ReturnType = parse_quote! { -> ::comando::CommandDescriptor<u64, String> };

        assert_eq!(return_of(output.clone()), expected);
        assert!(output.to_string().contains("\"say-hello\""));
        assert!(output.to_string().contains("\"Says hello\""));
    }

    #[test]
    fn expands_with_properties() {
        let output = expand(
            quote! { name = "ping", description = "Checks the bot is alive" },
            parse_quote! { fn ping(message: u64, args: Vec<String>) {} },
        )
        .unwrap();

        let expected: ReturnType = parse_quote! { -> ::comando::CommandDescriptor<u64, ()> };

        assert_eq!(return_of(output.clone()), expected);
        assert!(output.to_string().contains("\"ping\""));
        assert!(output.to_string().contains("\"Checks the bot is alive\""));
    }

    #[test]
    fn unknown_property() {
        assert_eq!(
            error(
                quote! { event = "ready" },
                parse_quote! { fn greet(message: u64, args: Vec<String>) {} },
            ),
            "unsupported command property, expected `name` or `description`"
        );
    }

    #[test]
    fn wrong_parameter_count() {
        assert_eq!(
            error(quote! {}, parse_quote! { fn greet() {} }),
            "expected first parameter: message: M"
        );
        assert_eq!(
            error(quote! {}, parse_quote! { fn greet(message: u64) {} }),
            "expected second parameter: args: Vec<String>"
        );
        assert_eq!(
            error(
                quote! {},
                parse_quote! { fn greet(message: u64, args: Vec<String>, extra: u8) {} },
            ),
            "commands take exactly two parameters: message and args"
        );
    }

    #[test]
    fn args_must_be_vec_of_string() {
        assert_eq!(
            error(quote! {}, parse_quote! { fn greet(message: u64, args: String) {} }),
            "expected `Vec<String>`"
        );
        assert_eq!(
            error(quote! {}, parse_quote! { fn greet(message: u64, args: Vec<u8>) {} }),
            "expected `Vec<String>`"
        );
    }

    #[test]
    fn self_receiver() {
        assert_eq!(
            error(quote! {}, parse_quote! { fn greet(&self, args: Vec<String>) {} }),
            "actions cannot take `self`"
        );
    }

    #[test]
    fn async_and_generic_fns() {
        assert_eq!(
            error(
                quote! {},
                parse_quote! { async fn greet(message: u64, args: Vec<String>) {} },
            ),
            "async actions are not supported"
        );
        assert_eq!(
            error(
                quote! {},
                parse_quote! { fn greet<M>(message: M, args: Vec<String>) {} },
            ),
            "actions cannot be generic"
        );
    }

    #[test]
    fn unsafe_and_extern_fns() {
        assert_eq!(
            error(
                quote! {},
                parse_quote! { unsafe fn greet(message: u64, args: Vec<String>) {} },
            ),
            "unsafe actions are not supported"
        );
        assert_eq!(
            error(
                quote! {},
                parse_quote! { extern "C" fn greet(message: u64, args: Vec<String>) {} },
            ),
            "actions must use the Rust ABI"
        );
    }
}
