#![forbid(unsafe_code)]

extern crate proc_macro;

mod command;
mod event;
mod signature;

use proc_macro::TokenStream;
use syn::{parse_macro_input, ItemFn};

/// Turns `fn name(message: M, args: Vec<String>) -> R` into
/// `fn name() -> comando::CommandDescriptor<M, R>`.
///
/// `name` defaults to the function name in kebab-case and `description` to
/// its doc comment.
#[proc_macro_attribute]
pub fn command(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut args = command::CommandArgs::default();
    let parser = syn::meta::parser(|meta| args.parse(meta));
    parse_macro_input!(attr with parser);

    let input = parse_macro_input!(item as ItemFn);

    command::command_impl(args, &input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Turns `fn name(args: Vec<A>) -> R` (or `fn name() -> R`) into
/// `fn name() -> comando::EventDescriptor<A, R>`.
///
/// `event` is required. `name` defaults to the function name in Title Case and
/// `description` to its doc comment.
#[proc_macro_attribute]
pub fn event(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut args = event::EventArgs::default();
    let parser = syn::meta::parser(|meta| args.parse(meta));
    parse_macro_input!(attr with parser);

    let input = parse_macro_input!(item as ItemFn);

    event::event_impl(args, &input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
