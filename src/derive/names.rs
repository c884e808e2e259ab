//! Collision-free names for generated items.

use std::collections::HashSet;

use heck::{ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use quote::format_ident;
use syn::Ident;

use crate::model::{AlgebraicDataType, Dispatch};

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
    "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
    "true", "try", "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
    "final", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield",
];

// a variant struct named after one of these would shadow the prelude for the
// whole generated module
const PRELUDE: &[&str] = &[
    "Option", "Some", "None", "Result", "Ok", "Err", "Box", "Vec", "String", "ToString",
    "ToOwned", "Clone", "Copy", "Send", "Sync", "Sized", "Unpin", "Drop", "Fn", "FnMut",
    "FnOnce", "Default", "Eq", "PartialEq", "Ord", "PartialOrd", "Iterator", "IntoIterator",
    "Extend", "From", "Into", "AsRef", "AsMut", "Debug",
];

/// Hands out names, suffixing `_` until a name is free.
#[derive(Debug, Clone)]
pub struct NameAllocator {
    taken: HashSet<String>,
}

impl NameAllocator {
    pub fn new() -> Self {
        NameAllocator { taken: KEYWORDS.iter().map(|k| k.to_string()).collect() }
    }

    pub fn for_types() -> Self {
        let mut names = Self::new();
        names.taken.extend(PRELUDE.iter().map(|p| p.to_string()));
        names
    }

    pub fn reserve(&mut self, name: impl Into<String>) { self.taken.insert(name.into()); }

    pub fn new_name(&mut self, suggestion: &str) -> Ident {
        let mut name = suggestion.to_owned();
        while !self.taken.insert(name.clone()) {
            name.push('_');
        }
        format_ident!("{}", name)
    }
}

impl Default for NameAllocator {
    fn default() -> Self { Self::new() }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantNames {
    pub ty: Ident,
    pub factory: Ident,
    /// Backing static; only emitted for zero-argument constructors.
    pub singleton: Ident,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Names {
    pub variants: Vec<VariantNames>,
    pub lazy: Ident,
    pub lazy_factory: Ident,
    pub lazy_argument: Ident,
    /// Local holding the verdict inside derived `equals` bodies.
    pub equal: Ident,
}

/// Deterministic, so every derivator of one ADT agrees on the names.
pub fn allocate(adt: &AlgebraicDataType) -> Names {
    let constructors = adt.data_construction.constructors();

    let mut types = NameAllocator::for_types();
    types.reserve(adt.name().to_string());
    for variable in &adt.type_constructor.type_variables {
        types.reserve(variable.name.to_string());
    }
    let mut values = NameAllocator::new();
    if let Dispatch::Visitor { cases, factory, .. } = &adt.match_method.dispatch {
        if let Some(last) = cases.segments.last() {
            types.reserve(last.ident.to_string());
        }
        if let Some(last) = factory.segments.last() {
            values.reserve(last.ident.to_string());
        }
    }
    let mut locals = NameAllocator::new();
    for argument in constructors.iter().flat_map(|c| &c.arguments) {
        if let syn::Type::Path(path) = &*argument.ty {
            if let Some(last) = path.path.segments.last() {
                types.reserve(last.ident.to_string());
            }
        }
        locals.reserve(argument.name.to_string());
    }

    let variants = constructors
        .iter()
        .map(|constructor| {
            let name = constructor.name.to_string();
            VariantNames {
                ty: types.new_name(&name.to_upper_camel_case()),
                factory: values.new_name(&name.to_snake_case()),
                singleton: values.new_name(&name.to_shouty_snake_case()),
            }
        })
        .collect();

    Names {
        variants,
        lazy: types.new_name("Lazy"),
        lazy_factory: values.new_name("lazy"),
        lazy_argument: NameAllocator::new().new_name(&adt.name().to_string().to_snake_case()),
        equal: locals.new_name("equal"),
    }
}
