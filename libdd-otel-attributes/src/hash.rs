// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Fingerprints of attribute collections.
//!
//! Every key and value is hashed with 64-bit FNV-1a and folded into a running seed with
//! [`mix`]. The fold is order sensitive: feeding the same pairs in a different order gives a
//! different fingerprint. Only maps that iterate in a fixed order (such as
//! [`crate::OrderedAttributeMap`]) produce a fingerprint that identifies the *set* of attributes.
//!
//! Numbers and booleans are hashed through their `Display` text. For doubles this means
//! `0.0` and `-0.0` hash differently while every NaN hashes the same.

use crate::convert::to_owned_value;
use crate::iterable::KeyValueIterable;
use crate::owned::OwnedAttributeValue;
use std::fmt::{self, Display, Write};
use std::hash::{BuildHasherDefault, Hasher};
use std::ops::ControlFlow;
use tracing::trace;

pub const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
pub const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;
/// 2^64 divided by the golden ratio.
pub const GOLDEN_RATIO: u64 = 0x9e37_79b9_7f4a_7c15;

/// The map type fingerprinted by [`hash_default_attribute_map`], chosen at compile time with
/// the `ordered-attributes` and `generic-attributes` features.
#[cfg(feature = "ordered-attributes")]
pub type DefaultAttributeMap = crate::map::OrderedAttributeMap;
#[cfg(all(feature = "generic-attributes", not(feature = "ordered-attributes")))]
pub type DefaultAttributeMap = crate::map::AttributeMap;
#[cfg(not(any(feature = "ordered-attributes", feature = "generic-attributes")))]
pub type DefaultAttributeMap = crate::map::StringAttributeMap;

/// Streaming 64-bit FNV-1a.
///
/// Feeding bytes in several calls gives the same result as a single call over their
/// concatenation.
#[derive(Copy, Clone, Debug)]
pub struct Fnv1aHasher(u64);

pub type BuildFnv1aHasher = BuildHasherDefault<Fnv1aHasher>;

impl Default for Fnv1aHasher {
    fn default() -> Self {
        Self(FNV_OFFSET_BASIS)
    }
}

impl Hasher for Fnv1aHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.0 ^= u64::from(*byte);
            self.0 = self.0.wrapping_mul(FNV_PRIME);
        }
    }
}

impl Write for Fnv1aHasher {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Hasher::write(self, s.as_bytes());
        Ok(())
    }
}

/// FNV-1a over `bytes`.
#[inline]
pub fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hasher = Fnv1aHasher::default();
    hasher.write(bytes);
    hasher.finish()
}

fn fnv1a_display(value: impl Display) -> u64 {
    let mut hasher = Fnv1aHasher::default();
    // Fnv1aHasher never fails to write and std's Display impls don't either.
    let _ = write!(hasher, "{value}");
    hasher.finish()
}

/// Hash of a single value, before it is folded into a seed.
pub trait ValueHash {
    fn value_hash(&self) -> u64;
}

impl ValueHash for str {
    fn value_hash(&self) -> u64 {
        fnv1a(self.as_bytes())
    }
}

impl ValueHash for String {
    fn value_hash(&self) -> u64 {
        fnv1a(self.as_bytes())
    }
}

impl ValueHash for [u8] {
    fn value_hash(&self) -> u64 {
        fnv1a(self)
    }
}

impl ValueHash for u8 {
    /// A single byte is hashed as a one byte span, not as its decimal text.
    fn value_hash(&self) -> u64 {
        fnv1a(&[*self])
    }
}

impl<T: ValueHash + ?Sized> ValueHash for &T {
    fn value_hash(&self) -> u64 {
        (**self).value_hash()
    }
}

macro_rules! impl_value_hash_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ValueHash for $ty {
                fn value_hash(&self) -> u64 {
                    fnv1a_display(self)
                }
            }
        )*
    };
}

impl_value_hash_display!(bool, i32, u32, i64, u64, f64);

/// Folds `value` into `seed`.
///
/// This is not commutative: `mix(a)` then `mix(b)` generally differs from `mix(b)` then
/// `mix(a)`.
#[inline]
pub fn mix<T: ValueHash + ?Sized>(seed: &mut u64, value: &T) {
    *seed ^= value
        .value_hash()
        .wrapping_add(GOLDEN_RATIO)
        .wrapping_add(*seed << 6)
        .wrapping_add(*seed >> 2);
}

/// A value that knows how to fold itself into a seed.
///
/// Scalars are mixed once. Sequences mix every element in order and add nothing for the
/// sequence itself, so `[1, 2]` folds exactly like `1` followed by `2`.
pub trait HashCombine {
    fn combine_into(&self, seed: &mut u64);
}

macro_rules! impl_hash_combine_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl HashCombine for $ty {
                #[inline]
                fn combine_into(&self, seed: &mut u64) {
                    mix(seed, self);
                }
            }
        )*
    };
}

impl_hash_combine_scalar!(str, String, bool, u8, i32, u32, i64, u64, f64);

impl<T: HashCombine> HashCombine for [T] {
    fn combine_into(&self, seed: &mut u64) {
        for element in self {
            element.combine_into(seed);
        }
    }
}

impl<T: HashCombine> HashCombine for Vec<T> {
    fn combine_into(&self, seed: &mut u64) {
        self.as_slice().combine_into(seed)
    }
}

impl<T: HashCombine + ?Sized> HashCombine for &T {
    fn combine_into(&self, seed: &mut u64) {
        (**self).combine_into(seed)
    }
}

impl HashCombine for OwnedAttributeValue {
    fn combine_into(&self, seed: &mut u64) {
        match self {
            OwnedAttributeValue::Bool(v) => v.combine_into(seed),
            OwnedAttributeValue::Int32(v) => v.combine_into(seed),
            OwnedAttributeValue::UInt32(v) => v.combine_into(seed),
            OwnedAttributeValue::Int64(v) => v.combine_into(seed),
            OwnedAttributeValue::Double(v) => v.combine_into(seed),
            OwnedAttributeValue::String(v) => v.combine_into(seed),
            OwnedAttributeValue::BoolArray(v) => v.combine_into(seed),
            OwnedAttributeValue::Int32Array(v) => v.combine_into(seed),
            OwnedAttributeValue::UInt32Array(v) => v.combine_into(seed),
            OwnedAttributeValue::Int64Array(v) => v.combine_into(seed),
            OwnedAttributeValue::DoubleArray(v) => v.combine_into(seed),
            OwnedAttributeValue::StringArray(v) => v.combine_into(seed),
            OwnedAttributeValue::UInt64(v) => v.combine_into(seed),
            OwnedAttributeValue::UInt64Array(v) => v.combine_into(seed),
            OwnedAttributeValue::ByteArray(v) => v.combine_into(seed),
        }
    }
}

/// Fingerprint of every key and value of `attributes`, in iteration order.
///
/// Accepts any of the attribute maps by reference:
///
/// ```
/// use libdd_otel_attributes::{hash_attributes, OrderedAttributeMap};
///
/// let a = OrderedAttributeMap::from([("b", 1i64), ("a", 2)]);
/// let b = OrderedAttributeMap::from([("a", 2i64), ("b", 1)]);
/// assert_eq!(hash_attributes(&a), hash_attributes(&b));
/// ```
pub fn hash_attributes<I, K, V>(attributes: I) -> u64
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: HashCombine,
{
    attributes
        .into_iter()
        .fold(0, |mut seed, (key, value)| {
            mix(&mut seed, key.as_ref());
            value.combine_into(&mut seed);
            seed
        })
}

/// Fingerprint of the pairs of `attributes` whose key passes `is_key_present`.
///
/// The source is traversed directly, without building a map first. Excluded pairs
/// contribute nothing, so the result equals [`hash_attributes`] over a map holding only the
/// included pairs, provided that map iterates in the same order as the source.
pub fn hash_attributes_filtered<I, F>(attributes: &I, mut is_key_present: F) -> u64
where
    I: KeyValueIterable + ?Sized,
    F: FnMut(&str) -> bool,
{
    let mut seed = 0;
    attributes.for_each_key_value(&mut |key, value| {
        if !is_key_present(key) {
            trace!(key, "Attribute excluded from fingerprint");
            return ControlFlow::Continue(());
        }
        mix(&mut seed, key);
        to_owned_value(value).combine_into(&mut seed);
        ControlFlow::Continue(())
    });
    seed
}

/// [`hash_attributes`] over the map type selected by the crate features.
pub fn hash_default_attribute_map(attributes: &DefaultAttributeMap) -> u64 {
    hash_attributes(attributes)
}
