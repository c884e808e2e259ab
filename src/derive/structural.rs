//! Structural equality, hash and rendering for one variant.
//!
//! Only the operations the ADT trait declares are derived. The per-field rule
//! comes from the field's [`Category`].

use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::Ident;

use super::{Derivation, Substitution};
use crate::category::{is_nullable, Category};
use crate::model::{DataArgument, DataConstruction, DataConstructor};

/// Seed and multiplier per constructor position.
pub const PRIMES: &[u64] = &[
    23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97, 101, 103, 107, 109, 113,
    127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193, 197, 199, 211, 223,
    227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293, 307, 311, 313, 317,
    331, 337, 347, 349, 353, 359, 367, 373, 379, 383, 389, 397, 401, 409, 419, 421, 431, 433,
    439, 443, 449, 457, 461, 463, 467, 479, 487, 491, 499, 503, 509, 521, 523, 541, 547, 557,
    563, 569, 571, 577, 587, 593, 599, 601, 607, 613, 617, 619, 631, 641, 643, 647, 653, 659,
    661, 673, 677, 683, 691, 701, 709, 719, 727, 733, 739, 743, 751, 757, 761, 769, 773, 787,
    797, 809, 811, 821, 823, 827, 829, 839, 853, 857, 859, 863, 877, 881, 883, 887, 907, 911,
    919, 929, 937, 941, 947, 953, 967, 971, 977, 983, 991, 997,
];

/// Wraps around past the end of the table; distinctness is then lost, equality is not.
pub fn prime_for(index: usize) -> u64 { PRIMES[index % PRIMES.len()] }

/// Methods to splice into the variant's ADT trait impl.
pub(crate) fn derive_methods(
    derivation: &Derivation<'_>,
    index: usize,
    constructor: &DataConstructor,
    substitution: &Substitution,
    equal: &Ident,
) -> Vec<TokenStream> {
    let ops = &derivation.adt.structural;
    let mut methods = Vec::new();
    if let Some(equals) = &ops.equals {
        methods.push(derive_equals(derivation, equals, constructor, substitution, equal));
    }
    if let Some(hash) = &ops.hash {
        methods.push(derive_hash(derivation, hash, index, constructor));
    }
    if let Some(render) = &ops.render {
        methods.push(derive_render(derivation, render, constructor));
    }
    methods
}

// ————————————————————————————————————————————————————————————————————————————
// EQUALITY
// ————————————————————————————————————————————————————————————————————————————

pub(crate) fn derive_equals(
    derivation: &Derivation<'_>,
    method: &Ident,
    constructor: &DataConstructor,
    substitution: &Substitution,
    equal: &Ident,
) -> TokenStream {
    let constructors = match &derivation.adt.data_construction {
        DataConstruction::NoConstructor => panic!(
            "equality derivation scheduled for `{}`, which has no constructor",
            derivation.adt.name()
        ),
        construction => construction.constructors(),
    };
    let rt = derivation.runtime();

    let closures = constructors
        .iter()
        .map(|candidate| {
            let same = candidate.name == constructor.name;
            let params = candidate.arguments.iter().map(|a| {
                let ty = derivation.substitute(&a.ty, substitution);
                if same {
                    let name = &a.name;
                    quote!(#name: &#ty)
                } else {
                    quote!(_: &#ty)
                }
            });
            let verdict = if same {
                constructor
                    .arguments
                    .iter()
                    .map(|a| equality_test(rt, a))
                    .reduce(|a, b| quote!(#a && #b))
                    .unwrap_or_else(|| quote!(true))
            } else {
                quote!(false)
            };
            quote!(|#(#params),*| #equal.set(#verdict))
        })
        .collect();

    let adt_trait = derivation.adt_trait(substitution);
    let dispatch = derivation.dispatch_with(quote!(other), closures);
    quote! {
        fn #method(&self, other: &dyn #adt_trait) -> bool {
            let #equal = ::std::cell::Cell::new(false);
            #dispatch;
            #equal.get()
        }
    }
}

/// `self.<field>` against the other value's `<field>`, which arrives as a reference.
fn equality_test(rt: &syn::Path, argument: &DataArgument) -> TokenStream {
    let field = &argument.name;
    match argument.category() {
        Category::Array(element) => match *element {
            Category::Float => quote!(#rt::eq::floats(&self.#field[..], &#field[..])),
            Category::Double => quote!(#rt::eq::doubles(&self.#field[..], &#field[..])),
            Category::Array(_) => {
                let inner = element_equality(rt, &element);
                quote!(#rt::eq::arrays(&self.#field[..], &#field[..], |a, b| #inner))
            }
            _ => quote!(#rt::eq::array(&self.#field[..], &#field[..])),
        },
        Category::Float => quote!(#rt::eq::float(self.#field, *#field)),
        Category::Double => quote!(#rt::eq::double(self.#field, *#field)),
        Category::EnumRef | Category::ObjectRef => quote!(#rt::eq::value(&self.#field, #field)),
        Category::Boolean
        | Category::Byte
        | Category::Short
        | Category::Char
        | Category::Int
        | Category::Long => quote!((self.#field == *#field)),
    }
}

/// Compares the elements `a` and `b` of a nested array, both references.
fn element_equality(rt: &syn::Path, category: &Category) -> TokenStream {
    match category {
        Category::Array(element) => match **element {
            Category::Float => quote!(#rt::eq::floats(&a[..], &b[..])),
            Category::Double => quote!(#rt::eq::doubles(&a[..], &b[..])),
            Category::Array(_) => {
                let inner = element_equality(rt, element);
                quote!(#rt::eq::arrays(&a[..], &b[..], |a, b| #inner))
            }
            _ => quote!(#rt::eq::array(&a[..], &b[..])),
        },
        Category::Float => quote!(#rt::eq::float(*a, *b)),
        Category::Double => quote!(#rt::eq::double(*a, *b)),
        Category::EnumRef | Category::ObjectRef => quote!(#rt::eq::value(a, b)),
        _ => quote!((*a == *b)),
    }
}

// ————————————————————————————————————————————————————————————————————————————
// HASH
// ————————————————————————————————————————————————————————————————————————————

pub(crate) fn derive_hash(
    derivation: &Derivation<'_>,
    method: &Ident,
    index: usize,
    constructor: &DataConstructor,
) -> TokenStream {
    let rt = derivation.runtime();
    let prime = prime_for(index);
    let seed = Literal::u64_suffixed(prime);
    let multiplier = Literal::u64_unsuffixed(prime);
    let hash = constructor.arguments.iter().fold(quote!(#seed), |acc, argument| {
        let field_hash = field_hash(rt, argument);
        quote!(#acc.wrapping_add(#field_hash).wrapping_mul(#multiplier))
    });
    quote! {
        fn #method(&self) -> u64 {
            #hash
        }
    }
}

fn field_hash(rt: &syn::Path, argument: &DataArgument) -> TokenStream {
    let field = &argument.name;
    match argument.category() {
        Category::Array(element) => array_hash(rt, &element, quote!(self.#field)),
        Category::Boolean => quote!(#rt::hash::boolean(self.#field)),
        Category::Byte | Category::Short | Category::Int => quote!(#rt::hash::int(self.#field as i64)),
        Category::Char => quote!(#rt::hash::char(self.#field)),
        Category::Long => quote!(#rt::hash::long(self.#field as i64)),
        Category::Float => quote!(#rt::hash::float(self.#field)),
        Category::Double => quote!(#rt::hash::double(self.#field)),
        Category::EnumRef | Category::ObjectRef => quote!(#rt::hash::value(&self.#field)),
    }
}

/// Hash of the array `values`, whose elements are `element`.
fn array_hash(rt: &syn::Path, element: &Category, values: TokenStream) -> TokenStream {
    match element {
        Category::Float => quote!(#rt::hash::floats(&#values[..])),
        Category::Double => quote!(#rt::hash::doubles(&#values[..])),
        Category::Array(inner) => {
            let inner = array_hash(rt, inner, quote!(e));
            quote!(#rt::hash::arrays(&#values[..], |e| #inner))
        }
        _ => quote!(#rt::hash::array(&#values[..])),
    }
}

// ————————————————————————————————————————————————————————————————————————————
// RENDER
// ————————————————————————————————————————————————————————————————————————————

pub(crate) fn derive_render(
    derivation: &Derivation<'_>,
    method: &Ident,
    constructor: &DataConstructor,
) -> TokenStream {
    let rt = derivation.runtime();
    let name = constructor.name.to_string();
    let body = if constructor.arguments.is_empty() {
        let text = format!("{name}()");
        quote!(f.write_str(#text))
    } else {
        let template = format!("{name}({})", vec!["{}"; constructor.arguments.len()].join(", "));
        let fields = constructor.arguments.iter().map(|a| {
            let field = &a.name;
            match a.category() {
                Category::Array(element) => array_render(rt, &element, quote!(self.#field)),
                _ if is_nullable(&a.ty) => quote!(#rt::render::nullable(&self.#field)),
                _ => quote!(self.#field),
            }
        });
        quote!(::std::write!(f, #template, #(#fields),*))
    };
    quote! {
        fn #method(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
            #body
        }
    }
}

/// A `Display` value listing the array `values`, whose elements are `element`.
fn array_render(rt: &syn::Path, element: &Category, values: TokenStream) -> TokenStream {
    match element {
        Category::Array(inner) => {
            let inner = array_render(rt, inner, quote!(e));
            quote!(#rt::render::arrays(&#values[..], |f, e| ::std::fmt::Display::fmt(&#inner, f)))
        }
        _ => quote!(#rt::render::array(&#values[..])),
    }
}
