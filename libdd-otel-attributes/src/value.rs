// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! The non-owning attribute value handed out by instrumentation call sites.

/// A borrowed attribute value.
///
/// This is what instrumentation produces at a call site: scalars are held by value and
/// strings and sequences borrow from the caller. It is cheap to copy and must be converted
/// (see [`crate::convert`]) before it can outlive the call that produced it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AttributeValue<'a> {
    Bool(bool),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Double(f64),
    Str(&'a str),
    ByteArray(&'a [u8]),
    BoolArray(&'a [bool]),
    Int32Array(&'a [i32]),
    UInt32Array(&'a [u32]),
    Int64Array(&'a [i64]),
    UInt64Array(&'a [u64]),
    DoubleArray(&'a [f64]),
    StrArray(&'a [&'a str]),
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for AttributeValue<'_> {
                #[inline]
                fn from(value: $ty) -> Self {
                    AttributeValue::$variant(value)
                }
            }
        )*
    };
}

macro_rules! impl_from_slice {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a [$ty]> for AttributeValue<'a> {
                #[inline]
                fn from(value: &'a [$ty]) -> Self {
                    AttributeValue::$variant(value)
                }
            }

            impl<'a, const N: usize> From<&'a [$ty; N]> for AttributeValue<'a> {
                #[inline]
                fn from(value: &'a [$ty; N]) -> Self {
                    AttributeValue::$variant(value.as_slice())
                }
            }

            impl<'a> From<&'a Vec<$ty>> for AttributeValue<'a> {
                #[inline]
                fn from(value: &'a Vec<$ty>) -> Self {
                    AttributeValue::$variant(value.as_slice())
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => Bool,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
    f64 => Double,
}

impl_from_slice! {
    u8 => ByteArray,
    bool => BoolArray,
    i32 => Int32Array,
    u32 => UInt32Array,
    i64 => Int64Array,
    u64 => UInt64Array,
    f64 => DoubleArray,
}

impl<'a> From<&'a [&'a str]> for AttributeValue<'a> {
    #[inline]
    fn from(value: &'a [&'a str]) -> Self {
        AttributeValue::StrArray(value)
    }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for AttributeValue<'a> {
    #[inline]
    fn from(value: &'a [&'a str; N]) -> Self {
        AttributeValue::StrArray(value.as_slice())
    }
}

impl<'a> From<&'a str> for AttributeValue<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        AttributeValue::Str(value)
    }
}

impl<'a> From<&'a String> for AttributeValue<'a> {
    #[inline]
    fn from(value: &'a String) -> Self {
        AttributeValue::Str(value.as_str())
    }
}
