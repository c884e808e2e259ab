//! Validated ADT descriptions, as handed over by the front end.
//!
//! Rust fragments (identifiers, types, bounds, paths) are parsed with `syn`
//! while deserializing, so everything downstream works on syntax trees and a
//! malformed fragment surfaces as a load error with its JSON path.

use std::fmt;
use std::ops::Deref;

use heck::ToSnakeCase;
use proc_macro2::TokenStream;
use quote::{format_ident, ToTokens};
use serde::{Deserialize, Deserializer};
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;

use crate::category::Category;

// ————————————————————————————————————————————————————————————————————————————
// SYNTAX FRAGMENTS
// ————————————————————————————————————————————————————————————————————————————

/// A Rust fragment parsed from a JSON string.
#[derive(Clone, PartialEq, Eq)]
pub struct Syntax<T>(pub T);

impl<T> Deref for Syntax<T> {
    type Target = T;
    fn deref(&self) -> &T { &self.0 }
}

impl<T: fmt::Debug> fmt::Debug for Syntax<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

impl<T: fmt::Display> fmt::Display for Syntax<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

impl<T: ToTokens> ToTokens for Syntax<T> {
    fn to_tokens(&self, tokens: &mut TokenStream) { self.0.to_tokens(tokens) }
}

impl<'de, T: Parse> Deserialize<'de> for Syntax<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        syn::parse_str::<T>(&source).map(Syntax).map_err(|error| {
            serde::de::Error::custom(format!("invalid Rust fragment `{source}`: {error}"))
        })
    }
}

/// `PartialEq + Hash + Send + Sync + 'static`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bounds(pub Punctuated<syn::TypeParamBound, syn::Token![+]>);

impl Parse for Bounds {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        Ok(Bounds(Punctuated::parse_terminated(input)?))
    }
}

impl ToTokens for Bounds {
    fn to_tokens(&self, tokens: &mut TokenStream) { self.0.to_tokens(tokens) }
}

fn ident(name: &str) -> Syntax<syn::Ident> { Syntax(format_ident!("{}", name)) }

// ————————————————————————————————————————————————————————————————————————————
// TYPE CONSTRUCTOR
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, Deserialize)]
pub struct TypeConstructor {
    pub name: Syntax<syn::Ident>,
    #[serde(default)]
    pub type_variables: Vec<TypeVariable>,
    #[serde(default)]
    pub kind: DeclarationKind,
    /// Visibility of the source declaration, consulted by the `smart` policy.
    #[serde(default)]
    pub visibility: SourceVisibility,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeVariable {
    pub name: Syntax<syn::Ident>,
    pub bounds: Option<Syntax<Bounds>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    /// Variants implement the ADT trait.
    #[default]
    Trait,
    /// Values are fixed singletons already; nothing is derived.
    Enum,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceVisibility {
    #[default]
    Public,
    Crate,
    Private,
}

impl TypeConstructor {
    pub fn is_enum(&self) -> bool { self.kind == DeclarationKind::Enum }
}

// ————————————————————————————————————————————————————————————————————————————
// DATA CONSTRUCTORS
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, Deserialize)]
pub struct DataArgument {
    pub name: Syntax<syn::Ident>,
    #[serde(rename = "type")]
    pub ty: Syntax<syn::Type>,
    /// Marks an enum reference; a unit enum and a struct look alike in syntax.
    #[serde(default, rename = "enum")]
    pub is_enum: bool,
}

impl DataArgument {
    pub fn category(&self) -> Category { Category::of(&self.ty, self.is_enum) }
}

/// Fixes one type variable of the enclosing type for a single constructor.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeRestriction {
    pub type_variable: Syntax<syn::Ident>,
    pub refinement: Syntax<syn::Type>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConstructor {
    pub name: Syntax<syn::Ident>,
    #[serde(default)]
    pub arguments: Vec<DataArgument>,
    #[serde(default)]
    pub type_restrictions: Vec<TypeRestriction>,
    /// Dispatch slot this constructor fills; snake-case name when absent.
    pub handler: Option<Syntax<syn::Ident>>,
}

impl DataConstructor {
    pub fn handler(&self) -> syn::Ident {
        match &self.handler {
            Some(handler) => handler.0.clone(),
            None => format_ident!("{}", self.name.to_string().to_snake_case()),
        }
    }

    pub fn restriction(&self, variable: &syn::Ident) -> Option<&syn::Type> {
        self.type_restrictions
            .iter()
            .find(|r| *r.type_variable == *variable)
            .map(|r| &r.refinement.0)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum DataConstruction {
    NoConstructor,
    OneConstructor { constructor: DataConstructor },
    MultipleConstructors { constructors: Vec<DataConstructor> },
}

impl DataConstruction {
    pub fn constructors(&self) -> &[DataConstructor] {
        match self {
            DataConstruction::NoConstructor => &[],
            DataConstruction::OneConstructor { constructor } => std::slice::from_ref(constructor),
            DataConstruction::MultipleConstructors { constructors } => constructors,
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// ABSTRACT OPERATIONS
// ————————————————————————————————————————————————————————————————————————————

/// The dispatch operation every variant overrides. Its contract (the cases
/// trait and the closure-based cases factory) is generated elsewhere.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchMethod {
    #[serde(default = "default_match_name")]
    pub name: Syntax<syn::Ident>,
    pub dispatch: Dispatch,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum Dispatch {
    /// `fn dispatch(&self, cases: &mut dyn MaybeCases<T>)`
    Visitor {
        cases: Syntax<syn::Path>,
        /// Builds a cases value from one closure per constructor.
        factory: Syntax<syn::Path>,
        #[serde(default = "default_cases_param")]
        param: Syntax<syn::Ident>,
    },
    /// `fn dispatch(&self, none: &mut dyn FnMut(), some: &mut dyn FnMut(&T))`
    Functions,
}

fn default_match_name() -> Syntax<syn::Ident> { ident("dispatch") }
fn default_cases_param() -> Syntax<syn::Ident> { ident("cases") }

/// Structural operations the ADT trait declares abstractly. Only the declared
/// ones are derived.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StructuralOps {
    /// `fn equals(&self, other: &dyn Maybe<T>) -> bool`
    pub equals: Option<Syntax<syn::Ident>>,
    /// `fn hash_code(&self) -> u64`
    pub hash: Option<Syntax<syn::Ident>>,
    /// `fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result`
    pub render: Option<Syntax<syn::Ident>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlgebraicDataType {
    pub type_constructor: TypeConstructor,
    pub data_construction: DataConstruction,
    pub match_method: MatchMethod,
    #[serde(default)]
    pub structural: StructuralOps,
    /// Factories reject `None` for `Option`-typed arguments.
    #[serde(default)]
    pub checked_not_null: bool,
}

impl AlgebraicDataType {
    pub fn name(&self) -> &syn::Ident { &self.type_constructor.name }
}

// ————————————————————————————————————————————————————————————————————————————
// DERIVE CONTEXT
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, Deserialize)]
pub struct DeriveContext {
    /// Module path the generated module is meant to live under.
    pub target_package: Option<Syntax<syn::Path>>,
    /// Name of the generated module holding variants and factories.
    pub target_name: Syntax<syn::Ident>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub flavour: Flavour,
    /// Where the generated code finds `Memo`, `Singleton` and the field helpers.
    #[serde(default = "default_runtime")]
    pub runtime: Syntax<syn::Path>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    /// Factories are only as visible as the source declaration.
    Smart,
}

/// The deferred-computation abstraction the lazy factory accepts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Flavour {
    /// `impl Fn() -> Arc<dyn Maybe<T>> + Send + Sync + 'static`
    #[default]
    Std,
    /// `impl Thunk<Arc<dyn Maybe<T>>>`, forced through `method`.
    Thunk {
        path: Syntax<syn::Path>,
        method: Syntax<syn::Ident>,
    },
}

fn default_runtime() -> Syntax<syn::Path> { Syntax(syn::parse_quote!(::adt_derive::rt)) }

impl DeriveContext {
    pub fn new(target_name: &str) -> Self {
        DeriveContext {
            target_package: None,
            target_name: ident(target_name),
            visibility: Visibility::default(),
            flavour: Flavour::default(),
            runtime: default_runtime(),
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// DESCRIPTION FILES
// ————————————————————————————————————————————————————————————————————————————

/// One description file: `{ "context": …, "adt": … }`.
#[derive(Debug, Clone, Deserialize)]
pub struct Description {
    pub context: DeriveContext,
    pub adt: AlgebraicDataType,
}

impl Description {
    pub fn load(path: &std::path::Path) -> Result<Self, crate::error::DescriptionError> {
        let source = std::fs::read_to_string(path).map_err(|source| {
            crate::error::DescriptionError::Read { path: path.to_path_buf(), source }
        })?;
        crate::path_de::from_str_with_path(&source)
    }
}
