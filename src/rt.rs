//! Runtime support for generated code.
//!
//! Everything a derived module calls lives here: the memo cell behind lazy
//! variants, the singleton slot behind zero-argument variants, the
//! per-category field helpers, and the null-argument failure.

pub mod eq;
pub mod hash;
pub mod render;

mod memo;
mod singleton;

pub use memo::Memo;
pub use singleton::Singleton;

/// A checked factory was handed `None` for a required argument.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} must not be null")]
pub struct NullArgument {
    pub field: &'static str,
}

#[track_caller]
pub fn null_argument(field: &'static str) -> ! {
    panic!("{}", NullArgument { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "value must not be null")]
    fn null_argument_names_the_field() {
        null_argument("value");
    }
}
