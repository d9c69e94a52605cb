// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::value::AttributeValue;
use std::collections::{BTreeMap, HashMap};
use std::ops::ControlFlow;

/// A source of borrowed key/value attributes.
///
/// The visitor is called synchronously once per pair. Returning [`ControlFlow::Break`] from
/// the visitor stops the traversal, in which case `for_each_key_value` returns `false`.
/// Nothing in this crate ever stops a traversal early, but sources must honor it.
pub trait KeyValueIterable {
    fn for_each_key_value(
        &self,
        visitor: &mut dyn FnMut(&str, AttributeValue<'_>) -> ControlFlow<()>,
    ) -> bool;

    /// Number of pairs the traversal will visit.
    fn size(&self) -> usize;
}

fn visit_pairs<'p, 'v: 'p, K, I>(
    pairs: I,
    visitor: &mut dyn FnMut(&str, AttributeValue<'_>) -> ControlFlow<()>,
) -> bool
where
    K: AsRef<str> + 'p,
    I: IntoIterator<Item = (&'p K, &'p AttributeValue<'v>)>,
{
    pairs
        .into_iter()
        .try_for_each(|(key, value)| visitor(key.as_ref(), *value))
        .is_continue()
}

impl<K: AsRef<str>> KeyValueIterable for [(K, AttributeValue<'_>)] {
    fn for_each_key_value(
        &self,
        visitor: &mut dyn FnMut(&str, AttributeValue<'_>) -> ControlFlow<()>,
    ) -> bool {
        visit_pairs(self.iter().map(|(k, v)| (k, v)), visitor)
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<K: AsRef<str>, const N: usize> KeyValueIterable for [(K, AttributeValue<'_>); N] {
    fn for_each_key_value(
        &self,
        visitor: &mut dyn FnMut(&str, AttributeValue<'_>) -> ControlFlow<()>,
    ) -> bool {
        self.as_slice().for_each_key_value(visitor)
    }

    fn size(&self) -> usize {
        N
    }
}

impl<K: AsRef<str>> KeyValueIterable for Vec<(K, AttributeValue<'_>)> {
    fn for_each_key_value(
        &self,
        visitor: &mut dyn FnMut(&str, AttributeValue<'_>) -> ControlFlow<()>,
    ) -> bool {
        self.as_slice().for_each_key_value(visitor)
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<K: AsRef<str>> KeyValueIterable for BTreeMap<K, AttributeValue<'_>> {
    fn for_each_key_value(
        &self,
        visitor: &mut dyn FnMut(&str, AttributeValue<'_>) -> ControlFlow<()>,
    ) -> bool {
        visit_pairs(self.iter(), visitor)
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<K: AsRef<str>, S> KeyValueIterable for HashMap<K, AttributeValue<'_>, S> {
    fn for_each_key_value(
        &self,
        visitor: &mut dyn FnMut(&str, AttributeValue<'_>) -> ControlFlow<()>,
    ) -> bool {
        visit_pairs(self.iter(), visitor)
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<K: AsRef<str>, S> KeyValueIterable for hashbrown::HashMap<K, AttributeValue<'_>, S> {
    fn for_each_key_value(
        &self,
        visitor: &mut dyn FnMut(&str, AttributeValue<'_>) -> ControlFlow<()>,
    ) -> bool {
        visit_pairs(self.iter(), visitor)
    }

    fn size(&self) -> usize {
        self.len()
    }
}
