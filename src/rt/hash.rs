//! Field hashes by category, all `u64` with wrapping arithmetic.

use std::hash::{DefaultHasher, Hash, Hasher};

use super::eq::{double_bits, float_bits};

pub fn boolean(value: bool) -> u64 { if value { 1231 } else { 1237 } }

/// Byte, short and int fields, widened by the caller.
pub fn int(value: i64) -> u64 { value as u64 }

pub fn char(value: char) -> u64 { value as u64 }

/// High and low words folded together.
pub fn long(value: i64) -> u64 {
    let bits = value as u64;
    bits ^ (bits >> 32)
}

pub fn float(value: f32) -> u64 { float_bits(value) as u64 }

pub fn double(value: f64) -> u64 {
    let bits = double_bits(value);
    bits ^ (bits >> 32)
}

/// Any `Hash` value. `DefaultHasher::new` is unkeyed, so this is stable within a build.
pub fn value<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

pub fn array<T: Hash>(values: &[T]) -> u64 { fold(values.iter().map(value)) }

pub fn floats(values: &[f32]) -> u64 { fold(values.iter().copied().map(float)) }

pub fn doubles(values: &[f64]) -> u64 { fold(values.iter().copied().map(double)) }

/// Arrays whose elements hash by their own rule.
pub fn arrays<T>(values: &[T], element: impl FnMut(&T) -> u64) -> u64 { fold(values.iter().map(element)) }

fn fold(hashes: impl Iterator<Item = u64>) -> u64 {
    hashes.fold(1, |acc, h| acc.wrapping_mul(31).wrapping_add(h))
}
