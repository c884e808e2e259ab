//! The lazy variant: defers a computation producing the ADT, memoizes it once,
//! and forwards every operation to the memoized value.

use quote::quote;
use syn::parse_quote;
use tracing::debug;

use super::{names, Derivation, Substitution};
use crate::model::{AlgebraicDataType, DeriveContext, Flavour};
use crate::spec::{Declaration, DerivedCodeSpec, Factory};

pub fn derive(adt: &AlgebraicDataType, context: &DeriveContext) -> DerivedCodeSpec {
    if adt.type_constructor.is_enum() {
        return DerivedCodeSpec::none();
    }
    debug!(adt = %adt.name(), "deriving lazy constructor");

    let names = names::allocate(adt);
    let derivation = Derivation::new(adt, context);
    let rt = derivation.runtime();
    let unrestricted = Substitution::new();
    let variables: Vec<_> = adt.type_constructor.type_variables.iter().collect();
    let generics = derivation.generics(&variables);
    let params = derivation.parameters(&variables);
    let adt_trait = derivation.adt_trait(&unrestricted);
    let handle = derivation.handle(&unrestricted);

    let ty = &names.lazy;
    let argument = &names.lazy_argument;
    let (expression, memo) = match &context.flavour {
        Flavour::Std => (
            quote!(impl Fn() -> #handle + Send + Sync + 'static),
            quote!(#rt::Memo::new(#argument)),
        ),
        Flavour::Thunk { path, method } => (
            quote!(impl #path<#handle> + Send + Sync + 'static),
            quote!(#rt::Memo::new(move || #argument.#method())),
        ),
    };

    let dispatch = derivation.dispatch_signature(&unrestricted);
    let forward = derivation.forward_dispatch(quote!(self.eval()));
    let ops = &adt.structural;
    let equals = ops.equals.as_ref().map(|equals| {
        quote! {
            fn #equals(&self, other: &dyn #adt_trait) -> bool {
                self.eval().#equals(other)
            }
        }
    });
    let hash = ops.hash.as_ref().map(|hash| {
        quote! {
            fn #hash(&self) -> u64 {
                self.eval().#hash()
            }
        }
    });
    let render = ops.render.as_ref().map(|render| {
        quote! {
            fn #render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                self.eval().#render(f)
            }
        }
    });

    let items: Vec<syn::Item> = vec![
        parse_quote! {
            struct #ty #generics {
                memo: #rt::Memo<#handle>,
            }
        },
        parse_quote! {
            impl #generics #ty #params {
                fn new(#argument: #expression) -> Self {
                    Self { memo: #memo }
                }

                fn eval(&self) -> &#handle {
                    self.memo.force()
                }
            }
        },
        parse_quote! {
            impl #generics #adt_trait for #ty #params {
                #dispatch {
                    #forward
                }
                #equals
                #hash
                #render
            }
        },
    ];

    // public regardless of the visibility policy
    let factory_name = &names.lazy_factory;
    let factory: syn::ItemFn = parse_quote! {
        pub fn #factory_name #generics(#argument: #expression) -> #handle {
            ::std::sync::Arc::new(#ty::new(#argument))
        }
    };

    DerivedCodeSpec::code_spec(Declaration { name: ty.clone(), items }, Factory(factory))
}
