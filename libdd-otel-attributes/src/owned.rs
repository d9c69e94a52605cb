// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! The owned counterpart of [`crate::AttributeValue`].
//!
//! Every borrowed string or slice is replaced with an owned copy so the value is independent
//! of the call site that produced it. The following variants are not currently produced by
//! the OpenTelemetry specification but are reserved for future use and must round-trip:
//!  - `UInt64`
//!  - `UInt64Array`
//!  - `ByteArray`

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum OwnedAttributeValue {
    Bool(bool),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    Double(f64),
    String(String),
    BoolArray(Vec<bool>),
    Int32Array(Vec<i32>),
    UInt32Array(Vec<u32>),
    Int64Array(Vec<i64>),
    DoubleArray(Vec<f64>),
    StringArray(Vec<String>),
    UInt64(u64),
    UInt64Array(Vec<u64>),
    ByteArray(Vec<u8>),
}

/// Discriminant of [`OwnedAttributeValue`].
///
/// The numeric values are stable and follow the declaration order of the owned value, with
/// the reserved types last.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum OwnedAttributeType {
    Bool = 0,
    Int32 = 1,
    UInt32 = 2,
    Int64 = 3,
    Double = 4,
    String = 5,
    BoolArray = 6,
    Int32Array = 7,
    UInt32Array = 8,
    Int64Array = 9,
    DoubleArray = 10,
    StringArray = 11,
    UInt64 = 12,
    UInt64Array = 13,
    ByteArray = 14,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttributeError {
    #[error("attribute has type {found:?}, expected {expected:?}")]
    TypeMismatch {
        expected: OwnedAttributeType,
        found: OwnedAttributeType,
    },
    #[error("unknown attribute type index: `{0}`")]
    UnknownType(u8),
}

impl TryFrom<u8> for OwnedAttributeType {
    type Error = AttributeError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        use OwnedAttributeType::*;
        Ok(match index {
            0 => Bool,
            1 => Int32,
            2 => UInt32,
            3 => Int64,
            4 => Double,
            5 => String,
            6 => BoolArray,
            7 => Int32Array,
            8 => UInt32Array,
            9 => Int64Array,
            10 => DoubleArray,
            11 => StringArray,
            12 => UInt64,
            13 => UInt64Array,
            14 => ByteArray,
            _ => return Err(AttributeError::UnknownType(index)),
        })
    }
}

impl From<OwnedAttributeType> for u8 {
    fn from(ty: OwnedAttributeType) -> Self {
        ty as u8
    }
}

impl OwnedAttributeValue {
    pub fn attribute_type(&self) -> OwnedAttributeType {
        match self {
            OwnedAttributeValue::Bool(_) => OwnedAttributeType::Bool,
            OwnedAttributeValue::Int32(_) => OwnedAttributeType::Int32,
            OwnedAttributeValue::UInt32(_) => OwnedAttributeType::UInt32,
            OwnedAttributeValue::Int64(_) => OwnedAttributeType::Int64,
            OwnedAttributeValue::Double(_) => OwnedAttributeType::Double,
            OwnedAttributeValue::String(_) => OwnedAttributeType::String,
            OwnedAttributeValue::BoolArray(_) => OwnedAttributeType::BoolArray,
            OwnedAttributeValue::Int32Array(_) => OwnedAttributeType::Int32Array,
            OwnedAttributeValue::UInt32Array(_) => OwnedAttributeType::UInt32Array,
            OwnedAttributeValue::Int64Array(_) => OwnedAttributeType::Int64Array,
            OwnedAttributeValue::DoubleArray(_) => OwnedAttributeType::DoubleArray,
            OwnedAttributeValue::StringArray(_) => OwnedAttributeType::StringArray,
            OwnedAttributeValue::UInt64(_) => OwnedAttributeType::UInt64,
            OwnedAttributeValue::UInt64Array(_) => OwnedAttributeType::UInt64Array,
            OwnedAttributeValue::ByteArray(_) => OwnedAttributeType::ByteArray,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OwnedAttributeValue::String(s) => Some(s),
            _ => None,
        }
    }

    fn mismatch(&self, expected: OwnedAttributeType) -> AttributeError {
        AttributeError::TypeMismatch {
            expected,
            found: self.attribute_type(),
        }
    }
}

macro_rules! impl_owned_payload {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for OwnedAttributeValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    OwnedAttributeValue::$variant(value)
                }
            }
        )*
    };
}

macro_rules! impl_try_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl TryFrom<&OwnedAttributeValue> for $ty {
                type Error = AttributeError;

                fn try_from(value: &OwnedAttributeValue) -> Result<Self, Self::Error> {
                    match value {
                        OwnedAttributeValue::$variant(v) => Ok(*v),
                        other => Err(other.mismatch(OwnedAttributeType::$variant)),
                    }
                }
            }
        )*
    };
}

impl_owned_payload! {
    bool => Bool,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
    f64 => Double,
    String => String,
    Vec<bool> => BoolArray,
    Vec<i32> => Int32Array,
    Vec<u32> => UInt32Array,
    Vec<i64> => Int64Array,
    Vec<u64> => UInt64Array,
    Vec<f64> => DoubleArray,
    Vec<String> => StringArray,
    Vec<u8> => ByteArray,
}

impl_try_from_scalar! {
    bool => Bool,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
    f64 => Double,
}

impl From<&str> for OwnedAttributeValue {
    fn from(value: &str) -> Self {
        OwnedAttributeValue::String(value.to_owned())
    }
}

impl<'a> TryFrom<&'a OwnedAttributeValue> for &'a str {
    type Error = AttributeError;

    fn try_from(value: &'a OwnedAttributeValue) -> Result<Self, Self::Error> {
        value
            .as_str()
            .ok_or_else(|| value.mismatch(OwnedAttributeType::String))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_index_round_trip() {
        for index in 0..15u8 {
            let ty = OwnedAttributeType::try_from(index).unwrap();
            assert_eq!(u8::from(ty), index);
        }
        assert_eq!(
            OwnedAttributeType::try_from(15),
            Err(AttributeError::UnknownType(15))
        );
    }

    #[test]
    fn test_payload_keeps_its_width() {
        assert_eq!(
            OwnedAttributeValue::from(7i32).attribute_type(),
            OwnedAttributeType::Int32
        );
        assert_eq!(
            OwnedAttributeValue::from(7u32).attribute_type(),
            OwnedAttributeType::UInt32
        );
        assert_eq!(
            OwnedAttributeValue::from(7i64).attribute_type(),
            OwnedAttributeType::Int64
        );
        assert_eq!(
            OwnedAttributeValue::from(7u64).attribute_type(),
            OwnedAttributeType::UInt64
        );
    }

    #[test]
    fn test_reserved_variants_round_trip() {
        let cases = [
            OwnedAttributeValue::UInt64(u64::MAX),
            OwnedAttributeValue::UInt64Array(vec![0, u64::MAX]),
            OwnedAttributeValue::ByteArray(vec![0xde, 0xad, 0xbe, 0xef]),
        ];
        for value in cases {
            assert_eq!(value.clone(), value);
        }
        assert_eq!(
            u64::try_from(&OwnedAttributeValue::UInt64(u64::MAX)),
            Ok(u64::MAX)
        );
    }

    #[test]
    fn test_typed_access() {
        let value = OwnedAttributeValue::from("db.system");
        assert_eq!(<&str>::try_from(&value), Ok("db.system"));
        assert_eq!(
            i64::try_from(&value),
            Err(AttributeError::TypeMismatch {
                expected: OwnedAttributeType::Int64,
                found: OwnedAttributeType::String,
            })
        );
        // no implicit widening
        assert!(i64::try_from(&OwnedAttributeValue::Int32(1)).is_err());
    }

    #[test]
    fn test_error_message() {
        let err = bool::try_from(&OwnedAttributeValue::Double(1.0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "attribute has type Double, expected Bool"
        );
    }

    #[cfg(feature = "serialization")]
    #[test]
    fn test_serde_round_trip() {
        let value = OwnedAttributeValue::StringArray(vec!["a".into(), "b".into()]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"StringArray":["a","b"]}"#);
        let back: OwnedAttributeValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
