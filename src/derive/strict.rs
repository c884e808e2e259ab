//! One private variant struct per data constructor, plus its factory.

use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::parse_quote;
use tracing::{debug, trace};

use super::names::{self, VariantNames};
use super::{mentions, structural, Derivation};
use crate::category::is_nullable;
use crate::model::{AlgebraicDataType, DataConstructor, DeriveContext};
use crate::spec::{Declaration, DerivedCodeSpec, Factory};

pub fn derive(adt: &AlgebraicDataType, context: &DeriveContext) -> DerivedCodeSpec {
    // enum values are already fixed singletons
    if adt.type_constructor.is_enum() {
        debug!(adt = %adt.name(), "enum declaration, no constructors derived");
        return DerivedCodeSpec::none();
    }

    let names = names::allocate(adt);
    let derivation = Derivation::new(adt, context);
    let constructors = adt.data_construction.constructors();
    debug!(adt = %adt.name(), constructors = constructors.len(), "deriving strict constructors");

    constructors
        .iter()
        .zip(&names.variants)
        .enumerate()
        .map(|(index, (constructor, variant))| {
            constructor_spec(&derivation, index, constructor, variant, &names.equal)
        })
        .collect()
}

fn constructor_spec(
    derivation: &Derivation<'_>,
    index: usize,
    constructor: &DataConstructor,
    variant: &VariantNames,
    equal: &syn::Ident,
) -> DerivedCodeSpec {
    trace!(constructor = %constructor.name, variant = %variant.ty, "deriving variant");

    let rt = derivation.runtime();
    let substitution = derivation.substitution(constructor);
    let kept = derivation.kept_variables(&substitution);

    // the struct only carries the variables its fields use; the trait impl
    // and the factory carry every variable left unrestricted
    let carried: Vec<_> = kept
        .iter()
        .copied()
        .filter(|v| constructor.arguments.iter().any(|a| mentions(a.ty.to_token_stream(), &v.name)))
        .collect();
    let struct_generics = derivation.generics(&carried);
    let struct_params = derivation.parameters(&carried);
    let impl_generics = derivation.generics(&kept);

    let ty = &variant.ty;
    let fields: Vec<_> = constructor.arguments.iter().map(|a| &a.name).collect();
    let field_types: Vec<_> =
        constructor.arguments.iter().map(|a| derivation.substitute(&a.ty, &substitution)).collect();

    let adt_trait = derivation.adt_trait(&substitution);
    let handle = derivation.handle(&substitution);
    let dispatch = derivation.dispatch_signature(&substitution);
    let invoke = derivation.invoke_handler(constructor);
    let structural = structural::derive_methods(derivation, index, constructor, &substitution, equal);

    let mut items: Vec<syn::Item> = vec![
        parse_quote! {
            struct #ty #struct_generics {
                #(#fields: #field_types),*
            }
        },
        parse_quote! {
            impl #struct_generics #ty #struct_params {
                fn new(#(#fields: #field_types),*) -> Self {
                    Self { #(#fields),* }
                }
            }
        },
        parse_quote! {
            impl #impl_generics #adt_trait for #ty #struct_params {
                #dispatch {
                    #invoke
                }
                #(#structural)*
            }
        },
    ];

    let visibility = derivation.factory_visibility();
    let factory_name = &variant.factory;
    let factory: syn::ItemFn = if constructor.arguments.is_empty() {
        let slot = &variant.singleton;
        items.insert(0, parse_quote! {
            static #slot: #rt::Singleton<#ty> = #rt::Singleton::new();
        });
        parse_quote! {
            #visibility fn #factory_name #impl_generics() -> #handle {
                #slot.get_or_init(#ty::new)
            }
        }
    } else {
        let null_checks = null_checks(derivation, constructor);
        parse_quote! {
            #visibility fn #factory_name #impl_generics(#(#fields: #field_types),*) -> #handle {
                #(#null_checks)*
                ::std::sync::Arc::new(#ty::new(#(#fields),*))
            }
        }
    };

    DerivedCodeSpec::code_spec(Declaration { name: ty.clone(), items }, Factory(factory))
}

fn null_checks(derivation: &Derivation<'_>, constructor: &DataConstructor) -> Vec<TokenStream> {
    if !derivation.adt.checked_not_null {
        return Vec::new();
    }
    let rt = derivation.runtime();
    constructor
        .arguments
        .iter()
        .filter(|a| is_nullable(&a.ty))
        .map(|a| {
            let field = &a.name;
            let label = field.to_string();
            quote! {
                if #field.is_none() {
                    #rt::null_argument(#label);
                }
            }
        })
        .collect()
}
