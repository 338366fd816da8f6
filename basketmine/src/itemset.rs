// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Itemset and transaction types shared by the miner and the rule generator.
//!
//! # Overview
//! An [`Itemset`] is an unordered group of distinct items held in canonical
//! sorted form, so the same members produce the same value regardless of
//! insertion order. A [`Transaction`] is the set of items observed together
//! in one record. [`FrequentItemsets`] maps each mined itemset to its
//! support count, ordered by the canonical itemset order.
//!
//! # Examples
//!
//! ```
//! # use basketmine::itemset::Itemset;
//! let a = Itemset::new(["b", "a", "b"]);
//! let b = Itemset::new(["a", "b"]);
//! assert_eq!(a, b);
//! assert_eq!(a.items(), ["a", "b"]);
//! ```

use std::collections::BTreeMap;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::slice;

/// Frequent itemset table mapping each itemset to its support count.
///
/// Backed by an ordered map so that iterating the table, and everything
/// derived from it, is deterministic for a given input.
pub type FrequentItemsets<T> = BTreeMap<Itemset<T>, u64>;

/// An unordered group of distinct items in canonical sorted form.
///
/// Construction sorts the items and collapses duplicates, so itemsets with
/// the same members compare equal and hash identically no matter how they
/// were assembled. The canonical form also makes itemsets usable as ordered
/// map keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Itemset<T> {
    items: Vec<T>,
}

impl<T: Ord> Itemset<T> {
    /// Creates an itemset from any collection of items.
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        let mut items: Vec<T> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self { items }
    }

    /// Wraps items that are already sorted and distinct.
    pub(crate) fn from_sorted(items: Vec<T>) -> Self {
        debug_assert!(
            items.windows(2).all(|pair| pair[0] < pair[1]),
            "items must be sorted and distinct"
        );
        Self { items }
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the itemset has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the items in canonical order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the items in canonical order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns true if `item` is a member.
    pub fn contains(&self, item: &T) -> bool {
        self.items.binary_search(item).is_ok()
    }

    /// Returns the items of `self` that are not members of `other`.
    pub fn difference(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let items = self
            .items
            .iter()
            .filter(|item| !other.contains(item))
            .cloned()
            .collect();
        // removing items from a sorted distinct sequence keeps it one
        Self { items }
    }

    /// Returns true if every item is contained in `transaction`.
    pub fn is_subset_of(&self, transaction: &Transaction<T>) -> bool
    where
        T: Hash,
    {
        self.items.iter().all(|item| transaction.contains(item))
    }
}

impl<T: Ord> FromIterator<T> for Itemset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T: fmt::Display> fmt::Display for Itemset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "}}")
    }
}

/// An unordered set of distinct items observed together in one record.
///
/// Duplicate items collapse silently during construction; a transaction is
/// a set, and repeating an item in the input carries no extra weight.
#[derive(Debug, Clone)]
pub struct Transaction<T> {
    items: HashSet<T>,
}

impl<T: Eq + Hash> Transaction<T> {
    /// Creates a transaction from any collection of items.
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Returns the number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the transaction has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if `item` is part of this transaction.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Returns an iterator over the items in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Eq + Hash> PartialEq for Transaction<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq + Hash> Eq for Transaction<T> {}

impl<T: Eq + Hash> FromIterator<T> for Transaction<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}
