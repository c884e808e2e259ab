//! Derivators: ADT description → [`DerivedCodeSpec`].
//!
//! Each derivator is a pure function of one `AlgebraicDataType` and its
//! `DeriveContext`. The helpers here give all of them the same view of the
//! ADT: which type variables a variant keeps, what the ADT type looks like
//! once a restriction is substituted, and how the dispatch method is shaped.

pub mod lazy;
pub mod names;
pub mod strict;
pub mod structural;

use indexmap::IndexMap;
use proc_macro2::{Group, TokenStream, TokenTree};
use quote::{quote, ToTokens};

use crate::model::{
    AlgebraicDataType, DataConstructor, DeriveContext, Dispatch, SourceVisibility, TypeVariable,
    Visibility,
};
use crate::spec::DerivedCodeSpec;

/// Variant declarations and factories, then the lazy variant.
pub fn derive_all(adt: &AlgebraicDataType, context: &DeriveContext) -> DerivedCodeSpec {
    strict::derive(adt, context).append(lazy::derive(adt, context))
}

/// Restricted type variable → refinement, in declaration order.
pub(crate) type Substitution = IndexMap<syn::Ident, syn::Type>;

pub(crate) struct Derivation<'a> {
    pub adt: &'a AlgebraicDataType,
    pub context: &'a DeriveContext,
}

impl<'a> Derivation<'a> {
    pub fn new(adt: &'a AlgebraicDataType, context: &'a DeriveContext) -> Self {
        Derivation { adt, context }
    }

    pub fn runtime(&self) -> &syn::Path { &self.context.runtime }

    pub fn substitution(&self, constructor: &DataConstructor) -> Substitution {
        constructor
            .type_restrictions
            .iter()
            .map(|r| (r.type_variable.0.clone(), r.refinement.0.clone()))
            .collect()
    }

    /// Type variables of the enclosing type not fixed by `substitution`.
    pub fn kept_variables(&self, substitution: &Substitution) -> Vec<&'a TypeVariable> {
        self.adt
            .type_constructor
            .type_variables
            .iter()
            .filter(|v| !substitution.contains_key(&*v.name))
            .collect()
    }

    /// `<T: Bounds, U>`
    pub fn generics(&self, variables: &[&TypeVariable]) -> TokenStream {
        if variables.is_empty() {
            return TokenStream::new();
        }
        let params = variables.iter().map(|v| {
            let name = &v.name;
            match &v.bounds {
                Some(bounds) if !bounds.0.0.is_empty() => quote!(#name: #bounds),
                _ => quote!(#name),
            }
        });
        quote!(<#(#params),*>)
    }

    /// `<T, U>`
    pub fn parameters(&self, variables: &[&TypeVariable]) -> TokenStream {
        if variables.is_empty() {
            return TokenStream::new();
        }
        let names = variables.iter().map(|v| &v.name);
        quote!(<#(#names),*>)
    }

    pub fn substitute(&self, ty: &syn::Type, substitution: &Substitution) -> syn::Type {
        if substitution.is_empty() {
            return ty.clone();
        }
        syn::Type::Verbatim(substitute_tokens(ty.to_token_stream(), substitution))
    }

    /// `Maybe<T>`, or `Expr<i32>` under a restriction.
    pub fn adt_trait(&self, substitution: &Substitution) -> TokenStream {
        let name = self.adt.name();
        let arguments = self.type_arguments(substitution);
        if arguments.is_empty() {
            quote!(#name)
        } else {
            quote!(#name<#(#arguments),*>)
        }
    }

    /// `::std::sync::Arc<dyn Maybe<T>>`, the type factories return.
    pub fn handle(&self, substitution: &Substitution) -> TokenStream {
        let adt_trait = self.adt_trait(substitution);
        quote!(::std::sync::Arc<dyn #adt_trait>)
    }

    fn type_arguments(&self, substitution: &Substitution) -> Vec<TokenStream> {
        self.adt
            .type_constructor
            .type_variables
            .iter()
            .map(|v| match substitution.get(&*v.name) {
                Some(refinement) => refinement.to_token_stream(),
                None => v.name.to_token_stream(),
            })
            .collect()
    }

    /// Factories live one module below the source declaration, so a private
    /// source still needs `pub(super)` to reach its own module.
    pub fn factory_visibility(&self) -> TokenStream {
        match (self.context.visibility, self.adt.type_constructor.visibility) {
            (Visibility::Smart, SourceVisibility::Crate) => quote!(pub(crate)),
            (Visibility::Smart, SourceVisibility::Private) => quote!(pub(super)),
            _ => quote!(pub),
        }
    }

    /// Visibility of the generated module itself, as seen from its parent.
    pub fn module_visibility(&self) -> TokenStream {
        match (self.context.visibility, self.adt.type_constructor.visibility) {
            (Visibility::Smart, SourceVisibility::Crate) => quote!(pub(crate)),
            (Visibility::Smart, SourceVisibility::Private) => TokenStream::new(),
            _ => quote!(pub),
        }
    }

    // ————————————————————————————————————————————————————————————————————————
    // DISPATCH
    // ————————————————————————————————————————————————————————————————————————

    /// Signature of the dispatch method as the ADT trait declares it.
    pub fn dispatch_signature(&self, substitution: &Substitution) -> TokenStream {
        let name = &self.adt.match_method.name;
        match &self.adt.match_method.dispatch {
            Dispatch::Visitor { cases, param, .. } => {
                let arguments = self.type_arguments(substitution);
                if arguments.is_empty() {
                    quote!(fn #name(&self, #param: &mut dyn #cases))
                } else {
                    quote!(fn #name(&self, #param: &mut dyn #cases<#(#arguments),*>))
                }
            }
            Dispatch::Functions => {
                let params = self.adt.data_construction.constructors().iter().map(|c| {
                    let handler = c.handler();
                    let types = c.arguments.iter().map(|a| self.substitute(&a.ty, substitution));
                    quote!(#handler: &mut dyn FnMut(#(&#types),*))
                });
                quote!(fn #name(&self, #(#params),*))
            }
        }
    }

    /// Body of a variant's dispatch method: hand its fields to its handler.
    pub fn invoke_handler(&self, constructor: &DataConstructor) -> TokenStream {
        let handler = constructor.handler();
        let fields = constructor.arguments.iter().map(|a| &a.name);
        match &self.adt.match_method.dispatch {
            Dispatch::Visitor { param, .. } => quote!(#param.#handler(#(&self.#fields),*)),
            Dispatch::Functions => quote!(#handler(#(&self.#fields),*)),
        }
    }

    /// Re-dispatch on `receiver` with the caller's own handlers.
    pub fn forward_dispatch(&self, receiver: TokenStream) -> TokenStream {
        let name = &self.adt.match_method.name;
        match &self.adt.match_method.dispatch {
            Dispatch::Visitor { param, .. } => quote!(#receiver.#name(#param)),
            Dispatch::Functions => {
                let handlers = self.adt.data_construction.constructors().iter().map(|c| c.handler());
                quote!(#receiver.#name(#(#handlers),*))
            }
        }
    }

    /// Dispatch `receiver` over closures, one per constructor in order.
    pub fn dispatch_with(&self, receiver: TokenStream, closures: Vec<TokenStream>) -> TokenStream {
        let name = &self.adt.match_method.name;
        match &self.adt.match_method.dispatch {
            Dispatch::Visitor { factory, .. } => quote!(#receiver.#name(&mut #factory(#(#closures),*))),
            Dispatch::Functions => quote!(#receiver.#name(#(&mut #closures),*)),
        }
    }
}

/// Replaces every identifier bound in `substitution`, descending into groups.
pub(crate) fn substitute_tokens(tokens: TokenStream, substitution: &Substitution) -> TokenStream {
    tokens
        .into_iter()
        .flat_map(|tree| -> TokenStream {
            match tree {
                TokenTree::Ident(ident) => match substitution.get(&ident) {
                    Some(refinement) => refinement.to_token_stream(),
                    None => TokenTree::Ident(ident).into(),
                },
                TokenTree::Group(group) => {
                    let mut replaced =
                        Group::new(group.delimiter(), substitute_tokens(group.stream(), substitution));
                    replaced.set_span(group.span());
                    TokenTree::Group(replaced).into()
                }
                other => other.into(),
            }
        })
        .collect()
}

/// Whether `ident` occurs anywhere in `tokens`.
pub(crate) fn mentions(tokens: TokenStream, ident: &syn::Ident) -> bool {
    tokens.into_iter().any(|tree| match tree {
        TokenTree::Ident(candidate) => candidate == *ident,
        TokenTree::Group(group) => mentions(group.stream(), ident),
        _ => false,
    })
}
