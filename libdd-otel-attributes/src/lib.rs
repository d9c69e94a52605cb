// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0
#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

//! Owned OpenTelemetry attributes and attribute-set fingerprints.
//!
//! Instrumentation hands attributes out as borrowed [`AttributeValue`]s through a
//! [`KeyValueIterable`]. This crate copies them into one of three owned maps and computes a
//! 64-bit fingerprint over them, which aggregation layers use to group identical attribute
//! sets without comparing them field by field.
//!
//! ```
//! use libdd_otel_attributes::{
//!     hash_attributes, hash_attributes_filtered, AttributeValue, OrderedAttributeMap,
//! };
//!
//! let source = [
//!     ("http.route", AttributeValue::Str("/users/:id")),
//!     ("user.id", AttributeValue::Str("8734")),
//! ];
//! let map = OrderedAttributeMap::from_iterable(&source);
//! assert_eq!(map.len(), 2);
//!
//! // Drop the high cardinality key without building a map first.
//! let route_only = hash_attributes_filtered(&source, |key| key != "user.id");
//! let expected = hash_attributes(&OrderedAttributeMap::from([("http.route", "/users/:id")]));
//! assert_eq!(route_only, expected);
//! ```

pub mod convert;
pub mod hash;
pub mod iterable;
pub mod map;
pub mod owned;
pub mod value;

pub use convert::{to_canonical_string, to_owned_value};
pub use hash::{
    fnv1a, hash_attributes, hash_attributes_filtered, hash_default_attribute_map, mix,
    BuildFnv1aHasher, DefaultAttributeMap, Fnv1aHasher, HashCombine, ValueHash,
};
pub use iterable::KeyValueIterable;
pub use map::{AttributeMap, OrderedAttributeMap, StringAttributeMap};
pub use owned::{AttributeError, OwnedAttributeType, OwnedAttributeValue};
pub use value::AttributeValue;
