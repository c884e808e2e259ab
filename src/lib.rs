//! Derives the concrete side of an algebraic data type: one variant struct per
//! data constructor, structural equality/hash/rendering, and a memoizing lazy
//! variant. Generated code links against [`rt`].

pub mod category;
pub mod cli;
pub mod codegen;
pub mod derive;
pub mod error;
pub mod inspect;
pub mod model;
pub mod rt;
pub mod spec;

mod path_de;

pub use derive::derive_all;
pub use error::DescriptionError;
pub use model::{AlgebraicDataType, DeriveContext, Description};
pub use spec::{Declaration, DerivedCodeSpec, Factory};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=adt_derive=debug` or
/// `RUST_LOG=adt_derive=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
