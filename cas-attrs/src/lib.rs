mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the `cas_error::ErrorKind` trait for the given struct.
///
/// The information of the error is given with the `error` attribute:
///
/// ```ignore
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = "unclosed parenthesis",
///     labels = ["this parenthesis is not closed"],
///     help = "add a closing parenthesis `)` somewhere after this",
/// )]
/// pub struct UnclosedParenthesis;
/// ```
///
/// | Tag       | Description                                                           |
/// | --------- | --------------------------------------------------------------------- |
/// | `message` | The one-line summary of the error.                                    |
/// | `labels`  | An array with one label per span the error points at.                 |
/// | `help`    | Optional text describing what the user can do to fix the error.       |
///
/// Each tag accepts any expression whose value implements [`std::fmt::Display`]. For structs with
/// named fields, the expression is evaluated with references to the fields in scope. Tuple structs
/// are not supported.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl cas_error::ErrorKind for #name {
            #target
        }
    }.into()
}
