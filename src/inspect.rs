//! A JSON-friendly view of what derivation will produce for one ADT.

use indexmap::IndexMap;
use quote::ToTokens;
use serde::Serialize;

use crate::category::Category;
use crate::derive::names;
use crate::derive::structural::prime_for;
use crate::model::{AlgebraicDataType, DeriveContext};

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub adt: String,
    pub target: String,
    /// Enum declarations get nothing derived.
    pub skipped: bool,
    pub variants: Vec<VariantReport>,
    pub lazy: Option<LazyReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VariantReport {
    pub constructor: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub factory: String,
    pub prime: u64,
    pub singleton: bool,
    pub restrictions: IndexMap<String, String>,
    pub fields: Vec<FieldReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldReport {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub category: Category,
}

#[derive(Debug, Clone, Serialize)]
pub struct LazyReport {
    #[serde(rename = "type")]
    pub ty: String,
    pub factory: String,
    pub argument: String,
}

pub fn inspect(adt: &AlgebraicDataType, context: &DeriveContext) -> Report {
    let skipped = adt.type_constructor.is_enum();
    let names = names::allocate(adt);
    let variants = if skipped {
        Vec::new()
    } else {
        adt.data_construction
            .constructors()
            .iter()
            .zip(&names.variants)
            .enumerate()
            .map(|(index, (constructor, variant))| VariantReport {
                constructor: constructor.name.to_string(),
                ty: variant.ty.to_string(),
                factory: variant.factory.to_string(),
                prime: prime_for(index),
                singleton: constructor.arguments.is_empty(),
                restrictions: constructor
                    .type_restrictions
                    .iter()
                    .map(|r| (r.type_variable.to_string(), r.refinement.to_token_stream().to_string()))
                    .collect(),
                fields: constructor
                    .arguments
                    .iter()
                    .map(|a| FieldReport {
                        name: a.name.to_string(),
                        ty: a.ty.to_token_stream().to_string(),
                        category: a.category(),
                    })
                    .collect(),
            })
            .collect()
    };
    let lazy = (!skipped).then(|| LazyReport {
        ty: names.lazy.to_string(),
        factory: names.lazy_factory.to_string(),
        argument: names.lazy_argument.to_string(),
    });
    Report {
        adt: adt.name().to_string(),
        target: context.target_name.to_string(),
        skipped,
        variants,
        lazy,
    }
}
