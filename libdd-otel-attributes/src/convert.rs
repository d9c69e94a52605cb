// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Conversions out of the borrowed [`AttributeValue`].

use crate::owned::OwnedAttributeValue;
use crate::value::AttributeValue;
use std::fmt::{Display, Write};

/// Creates an owned copy of a borrowed attribute value.
///
/// Scalars keep their exact type, strings and slices are copied element by element into the
/// matching owned variant.
pub fn to_owned_value(value: AttributeValue<'_>) -> OwnedAttributeValue {
    match value {
        AttributeValue::Bool(v) => OwnedAttributeValue::Bool(v),
        AttributeValue::Int32(v) => OwnedAttributeValue::Int32(v),
        AttributeValue::UInt32(v) => OwnedAttributeValue::UInt32(v),
        AttributeValue::Int64(v) => OwnedAttributeValue::Int64(v),
        AttributeValue::UInt64(v) => OwnedAttributeValue::UInt64(v),
        AttributeValue::Double(v) => OwnedAttributeValue::Double(v),
        AttributeValue::Str(v) => OwnedAttributeValue::String(v.to_owned()),
        AttributeValue::ByteArray(v) => OwnedAttributeValue::ByteArray(v.to_vec()),
        AttributeValue::BoolArray(v) => OwnedAttributeValue::BoolArray(v.to_vec()),
        AttributeValue::Int32Array(v) => OwnedAttributeValue::Int32Array(v.to_vec()),
        AttributeValue::UInt32Array(v) => OwnedAttributeValue::UInt32Array(v.to_vec()),
        AttributeValue::Int64Array(v) => OwnedAttributeValue::Int64Array(v.to_vec()),
        AttributeValue::UInt64Array(v) => OwnedAttributeValue::UInt64Array(v.to_vec()),
        AttributeValue::DoubleArray(v) => OwnedAttributeValue::DoubleArray(v.to_vec()),
        AttributeValue::StrArray(v) => {
            OwnedAttributeValue::StringArray(v.iter().map(|s| (*s).to_owned()).collect())
        }
    }
}

/// Renders a borrowed attribute value as text.
///
/// Booleans render as `true`/`false`, numbers use their `Display` form and strings pass
/// through. Sequences render every element followed by a single space, so `[1, 2, 3]`
/// becomes `"1 2 3 "`. The trailing space is part of the format: string-coerced maps are
/// hashed as text and changing it would change every fingerprint.
pub fn to_canonical_string(value: AttributeValue<'_>) -> String {
    match value {
        AttributeValue::Bool(v) => bool_str(v).to_owned(),
        AttributeValue::Int32(v) => v.to_string(),
        AttributeValue::UInt32(v) => v.to_string(),
        AttributeValue::Int64(v) => v.to_string(),
        AttributeValue::UInt64(v) => v.to_string(),
        AttributeValue::Double(v) => v.to_string(),
        AttributeValue::Str(v) => v.to_owned(),
        AttributeValue::ByteArray(v) => join_with_trailing_space(v),
        AttributeValue::BoolArray(v) => join_with_trailing_space(v.iter().map(|b| bool_str(*b))),
        AttributeValue::Int32Array(v) => join_with_trailing_space(v),
        AttributeValue::UInt32Array(v) => join_with_trailing_space(v),
        AttributeValue::Int64Array(v) => join_with_trailing_space(v),
        AttributeValue::UInt64Array(v) => join_with_trailing_space(v),
        AttributeValue::DoubleArray(v) => join_with_trailing_space(v),
        AttributeValue::StrArray(v) => join_with_trailing_space(v),
    }
}

#[inline]
fn bool_str(v: bool) -> &'static str {
    if v {
        "true"
    } else {
        "false"
    }
}

fn join_with_trailing_space<I>(elements: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    for element in elements {
        // Writing into a String cannot fail.
        let _ = write!(out, "{element} ");
    }
    out
}
