//! Renders a [`DerivedCodeSpec`] into one Rust module.
//!
//! The module glob-imports its parent, which is where the ADT trait, its
//! cases contract and every field type are expected to be in scope.

use std::fmt::Write as _;

use quote::ToTokens;
use syn::parse_quote;

use crate::derive::Derivation;
use crate::model::{AlgebraicDataType, DeriveContext};
use crate::spec::DerivedCodeSpec;

pub struct Codegen {
    out: String,
}

impl Codegen {
    pub fn new() -> Self { Self { out: String::new() } }

    pub fn emit(&mut self, spec: &DerivedCodeSpec, adt: &AlgebraicDataType, context: &DeriveContext) {
        let _ = writeln!(self.out, "// @generated by adt-derive from `{}`. Do not edit.", adt.name());
        if let Some(package) = &context.target_package {
            let _ = writeln!(self.out, "// target: {}", package.to_token_stream());
        }

        let visibility = Derivation::new(adt, context).module_visibility();
        let target = &context.target_name;
        let items = spec.clone().into_items();
        let module: syn::Item = parse_quote! {
            #[allow(non_camel_case_types, non_upper_case_globals, dead_code, unused_variables)]
            #visibility mod #target {
                use super::*;
                #(#items)*
            }
        };
        let file = syn::File { shebang: None, attrs: Vec::new(), items: vec![module] };
        self.out.push_str(&prettyplease::unparse(&file));
    }

    pub fn into_string(self) -> String { self.out }
}

impl Default for Codegen {
    fn default() -> Self { Self::new() }
}
