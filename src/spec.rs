//! `DerivedCodeSpec`: the only currency between derivators and whoever
//! assembles their output.

use std::iter::Sum;

use syn::{FnArg, Ident, Item, ItemFn, PatType, ReturnType};

/// A generated type together with the items that belong to it (its impls and,
/// for singletons, the backing static).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: Ident,
    pub items: Vec<Item>,
}

/// A generated free function returning the ADT type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factory(pub ItemFn);

impl Factory {
    pub fn name(&self) -> &Ident { &self.0.sig.ident }

    pub fn parameters(&self) -> impl Iterator<Item = &PatType> {
        self.0.sig.inputs.iter().filter_map(|arg| match arg {
            FnArg::Typed(typed) => Some(typed),
            FnArg::Receiver(_) => None,
        })
    }

    pub fn return_type(&self) -> &ReturnType { &self.0.sig.output }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedCodeSpec {
    pub declarations: Vec<Declaration>,
    pub factories: Vec<Factory>,
}

impl DerivedCodeSpec {
    pub fn none() -> Self { Self::default() }

    pub fn code_spec(declaration: Declaration, factory: Factory) -> Self {
        DerivedCodeSpec { declarations: vec![declaration], factories: vec![factory] }
    }

    /// Order-preserving; `none()` is the identity on both sides.
    pub fn append(mut self, other: Self) -> Self {
        self.declarations.extend(other.declarations);
        self.factories.extend(other.factories);
        self
    }

    pub fn is_empty(&self) -> bool { self.declarations.is_empty() && self.factories.is_empty() }

    pub fn declaration(&self, name: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.name == name)
    }

    pub fn factory(&self, name: &str) -> Option<&Factory> {
        self.factories.iter().find(|f| *f.name() == name)
    }

    /// Declarations first, then factories.
    pub fn into_items(self) -> Vec<Item> {
        let declarations = self.declarations.into_iter().flat_map(|d| d.items);
        let factories = self.factories.into_iter().map(|f| Item::Fn(f.0));
        declarations.chain(factories).collect()
    }
}

impl FromIterator<DerivedCodeSpec> for DerivedCodeSpec {
    fn from_iter<I: IntoIterator<Item = DerivedCodeSpec>>(iter: I) -> Self {
        iter.into_iter().fold(DerivedCodeSpec::none(), DerivedCodeSpec::append)
    }
}

impl Sum for DerivedCodeSpec {
    fn sum<I: Iterator<Item = DerivedCodeSpec>>(iter: I) -> Self { iter.collect() }
}
