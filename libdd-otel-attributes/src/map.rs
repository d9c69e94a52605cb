// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Owned attribute containers.
//!
//! All three containers are built the same way: every pair of the source is converted and
//! inserted in source order, so a key that appears twice keeps the value seen last. They
//! differ in what they store and in the order they iterate:
//!  - [`AttributeMap`] stores [`OwnedAttributeValue`]s, iteration order depends on the
//!    insertion history.
//!  - [`OrderedAttributeMap`] stores [`OwnedAttributeValue`]s, iterating in ascending key
//!    order regardless of insertion order.
//!  - [`StringAttributeMap`] stores the canonical text of every value, see
//!    [`to_canonical_string`].

use crate::convert::{to_canonical_string, to_owned_value};
use crate::hash::BuildFnv1aHasher;
use crate::iterable::KeyValueIterable;
use crate::owned::OwnedAttributeValue;
use crate::value::AttributeValue;
use hashbrown::HashMap;
#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};
use std::collections::{btree_map, BTreeMap};
use std::ops::ControlFlow;
use tracing::trace;

macro_rules! attribute_map {
    (
        $(#[$meta:meta])*
        $name:ident,
        map: $map:ty,
        value: $value:ty,
        iter: [$($iter:tt)+],
        convert: $convert:path $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        #[cfg_attr(feature = "serialization", derive(Serialize, Deserialize), serde(transparent))]
        pub struct $name {
            attributes: $map,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            /// Builds the map by visiting every pair of `attributes`.
            pub fn from_iterable<I>(attributes: &I) -> Self
            where
                I: KeyValueIterable + ?Sized,
            {
                let mut map = Self::new();
                attributes.for_each_key_value(&mut |key, value| {
                    map.set_attribute(key, value);
                    ControlFlow::Continue(())
                });
                map
            }

            /// Same as [`Self::from_iterable`], a missing source gives an empty map.
            pub fn from_optional(attributes: Option<&dyn KeyValueIterable>) -> Self {
                attributes.map(Self::from_iterable).unwrap_or_default()
            }

            /// Converts `value` and stores it under `key`, replacing any previous value.
            pub fn set_attribute(&mut self, key: &str, value: AttributeValue<'_>) {
                if self.attributes.insert(key.to_owned(), $convert(value)).is_some() {
                    trace!(key, "Replaced existing attribute value");
                }
            }

            pub fn attributes(&self) -> &$map {
                &self.attributes
            }

            pub fn get(&self, key: &str) -> Option<&$value> {
                self.attributes.get(key)
            }

            pub fn len(&self) -> usize {
                self.attributes.len()
            }

            pub fn is_empty(&self) -> bool {
                self.attributes.is_empty()
            }

            pub fn iter(&self) -> $($iter)+<'_, String, $value> {
                self.attributes.iter()
            }
        }

        impl<I: KeyValueIterable + ?Sized> From<&I> for $name {
            fn from(attributes: &I) -> Self {
                Self::from_iterable(attributes)
            }
        }

        impl<'a, K, V> Extend<(K, V)> for $name
        where
            K: AsRef<str>,
            V: Into<AttributeValue<'a>>,
        {
            fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
                for (key, value) in iter {
                    self.set_attribute(key.as_ref(), value.into());
                }
            }
        }

        impl<'a, K, V> FromIterator<(K, V)> for $name
        where
            K: AsRef<str>,
            V: Into<AttributeValue<'a>>,
        {
            fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
                let mut map = Self::new();
                map.extend(iter);
                map
            }
        }

        impl<'a, K, V, const N: usize> From<[(K, V); N]> for $name
        where
            K: AsRef<str>,
            V: Into<AttributeValue<'a>>,
        {
            fn from(attributes: [(K, V); N]) -> Self {
                attributes.into_iter().collect()
            }
        }

        impl<'m> IntoIterator for &'m $name {
            type Item = (&'m String, &'m $value);
            type IntoIter = $($iter)+<'m, String, $value>;

            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }
    };
}

attribute_map! {
    /// Owned attributes without any iteration order guarantee.
    ///
    /// The table is keyed with FNV-1a, so maps built from the same pairs in the same order
    /// iterate identically. Maps holding the same pairs inserted in a different order may
    /// iterate differently. Use [`OrderedAttributeMap`] when the fingerprint identifies a set
    /// of attributes.
    AttributeMap,
    map: HashMap<String, OwnedAttributeValue, BuildFnv1aHasher>,
    value: OwnedAttributeValue,
    iter: [hashbrown::hash_map::Iter],
    convert: to_owned_value,
}

attribute_map! {
    /// Owned attributes iterated in ascending key order.
    OrderedAttributeMap,
    map: BTreeMap<String, OwnedAttributeValue>,
    value: OwnedAttributeValue,
    iter: [btree_map::Iter],
    convert: to_owned_value,
}

attribute_map! {
    /// Attributes whose values have all been coerced to their canonical text.
    ///
    /// Keyed with FNV-1a like [`AttributeMap`].
    StringAttributeMap,
    map: HashMap<String, String, BuildFnv1aHasher>,
    value: String,
    iter: [hashbrown::hash_map::Iter],
    convert: to_canonical_string,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<(&'static str, AttributeValue<'static>)> {
        vec![
            ("http.method", AttributeValue::Str("GET")),
            ("http.status_code", AttributeValue::Int64(200)),
            ("retry", AttributeValue::Bool(false)),
            ("buckets", AttributeValue::Int32Array(&[1, 2, 3])),
        ]
    }

    #[test]
    fn test_empty() {
        assert!(AttributeMap::new().is_empty());
        assert!(OrderedAttributeMap::default().is_empty());
        assert!(StringAttributeMap::new().attributes().is_empty());

        let pairs: Vec<(&str, AttributeValue)> = vec![];
        assert!(AttributeMap::from_iterable(&pairs).is_empty());
        assert!(OrderedAttributeMap::from_iterable(&pairs).is_empty());
        assert!(StringAttributeMap::from_iterable(&pairs).is_empty());
    }

    #[test]
    fn test_from_optional() {
        assert!(AttributeMap::from_optional(None).is_empty());
        assert!(OrderedAttributeMap::from_optional(None).is_empty());
        assert!(StringAttributeMap::from_optional(None).is_empty());

        let pairs = sample();
        let map = AttributeMap::from_optional(Some(&pairs as &dyn KeyValueIterable));
        assert_eq!(map.len(), 4);
        assert_eq!(map.get("http.status_code"), Some(&OwnedAttributeValue::Int64(200)));
    }

    #[test]
    fn test_from_iterable() {
        let pairs = sample();

        let map = AttributeMap::from(&pairs);
        assert_eq!(map.len(), 4);
        assert_eq!(
            map.get("http.method"),
            Some(&OwnedAttributeValue::String("GET".into()))
        );
        assert_eq!(
            map.get("buckets"),
            Some(&OwnedAttributeValue::Int32Array(vec![1, 2, 3]))
        );

        let strings = StringAttributeMap::from(&pairs);
        assert_eq!(strings.get("http.method").map(String::as_str), Some("GET"));
        assert_eq!(strings.get("http.status_code").map(String::as_str), Some("200"));
        assert_eq!(strings.get("retry").map(String::as_str), Some("false"));
        assert_eq!(strings.get("buckets").map(String::as_str), Some("1 2 3 "));
    }

    #[test]
    fn test_ordered_iterates_sorted() {
        let map = OrderedAttributeMap::from([("b", 1i32), ("a", 2)]);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (&"a".to_owned(), &OwnedAttributeValue::Int32(2)),
                (&"b".to_owned(), &OwnedAttributeValue::Int32(1)),
            ]
        );
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let pairs = [("k", AttributeValue::Int32(1)), ("k", AttributeValue::Int32(2))];

        let map = AttributeMap::from_iterable(&pairs);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("k"), Some(&OwnedAttributeValue::Int32(2)));

        let map = OrderedAttributeMap::from_iterable(&pairs);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("k"), Some(&OwnedAttributeValue::Int32(2)));

        let map = StringAttributeMap::from_iterable(&pairs);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("k").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_duplicate_keys_follow_source_order() {
        // "z" sorts after "a", but the winner is decided by the order of the source.
        let map = OrderedAttributeMap::from([
            ("z", AttributeValue::Str("first")),
            ("a", AttributeValue::Str("other")),
            ("z", AttributeValue::Str("second")),
        ]);
        assert_eq!(
            map.get("z"),
            Some(&OwnedAttributeValue::String("second".into()))
        );
        assert_eq!(map.iter().next().map(|(k, _)| k.as_str()), Some("a"));
    }

    #[test]
    fn test_set_attribute_overwrites() {
        let mut map = StringAttributeMap::new();
        map.set_attribute("peer.service", AttributeValue::Str("db"));
        map.set_attribute("peer.service", AttributeValue::Double(0.5));
        assert_eq!(map.get("peer.service").map(String::as_str), Some("0.5"));

        let mut map = AttributeMap::new();
        map.extend([("a", 1u64), ("b", 2u64)]);
        map.set_attribute("a", AttributeValue::Bool(true));
        assert_eq!(map.get("a"), Some(&OwnedAttributeValue::Bool(true)));
        assert_eq!(map.get("b"), Some(&OwnedAttributeValue::UInt64(2)));
    }

    #[test]
    fn test_identical_construction_iterates_identically() {
        let source: Vec<(String, AttributeValue)> = (0..16)
            .map(|i| (format!("attr.{i}"), AttributeValue::Int64(i)))
            .collect();

        let keys = |map: &AttributeMap| map.iter().map(|(k, _)| k.clone()).collect::<Vec<_>>();
        assert_eq!(
            keys(&AttributeMap::from_iterable(&source)),
            keys(&AttributeMap::from_iterable(&source))
        );

        let first = StringAttributeMap::from_iterable(&source);
        let second = StringAttributeMap::from_iterable(&source);
        assert!(first.iter().eq(second.iter()));
    }

    #[test]
    fn test_map_does_not_borrow_source() {
        let map = {
            let key = String::from("service");
            let value = String::from("web");
            let pairs = vec![(key.as_str(), AttributeValue::from(&value))];
            OrderedAttributeMap::from_iterable(&pairs)
        };
        assert_eq!(
            map.get("service"),
            Some(&OwnedAttributeValue::String("web".into()))
        );
    }

    #[cfg(feature = "serialization")]
    #[test]
    fn test_serialize_ordered_map() {
        let map = OrderedAttributeMap::from([("b", 1i64), ("a", 2)]);
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"a":{"Int64":2},"b":{"Int64":1}}"#
        );
    }
}
