//! Field equality by category.
//!
//! Floating point compares by bit pattern with every NaN collapsed to one, so
//! `NaN == NaN` and `0.0 != -0.0`. That keeps equality reflexive and in step
//! with [`super::hash`].

pub fn float(a: f32, b: f32) -> bool { float_bits(a) == float_bits(b) }

pub fn double(a: f64, b: f64) -> bool { double_bits(a) == double_bits(b) }

pub fn floats(a: &[f32], b: &[f32]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(a, b)| float(*a, *b))
}

pub fn doubles(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(a, b)| double(*a, *b))
}

pub fn array<T: PartialEq>(a: &[T], b: &[T]) -> bool { a == b }

/// Arrays whose elements need their own rule, such as nested float arrays.
pub fn arrays<T>(a: &[T], b: &[T], mut element: impl FnMut(&T, &T) -> bool) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(a, b)| element(a, b))
}

pub fn value<T: PartialEq + ?Sized>(a: &T, b: &T) -> bool { a == b }

pub(crate) fn float_bits(value: f32) -> u32 {
    if value.is_nan() { f32::NAN.to_bits() } else { value.to_bits() }
}

pub(crate) fn double_bits(value: f64) -> u64 {
    if value.is_nan() { f64::NAN.to_bits() } else { value.to_bits() }
}
