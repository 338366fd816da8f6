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

//! Candidate itemset enumeration.

use crate::itemset::Itemset;

/// Returns the sorted, distinct items appearing across `pool`.
pub(super) fn flat_item_pool<T: Clone + Ord>(pool: &[Itemset<T>]) -> Vec<T> {
    let mut items: Vec<T> = pool
        .iter()
        .flat_map(|itemset| itemset.iter().cloned())
        .collect();
    items.sort_unstable();
    items.dedup();
    items
}

/// Returns every size-`k` combination of `items`, in lexicographic order.
///
/// `items` must be sorted and distinct; each combination is then already in
/// canonical itemset order.
pub(crate) fn combinations_of_size<T: Clone + Ord>(items: &[T], k: usize) -> Vec<Itemset<T>> {
    if k == 0 || k > items.len() {
        return Vec::new();
    }
    let mut combinations = Vec::new();
    let mut current = Vec::with_capacity(k);
    extend_combinations(items, k, 0, &mut current, &mut combinations);
    combinations
}

fn extend_combinations<T: Clone + Ord>(
    items: &[T],
    k: usize,
    start: usize,
    current: &mut Vec<T>,
    combinations: &mut Vec<Itemset<T>>,
) {
    if current.len() == k {
        combinations.push(Itemset::from_sorted(current.clone()));
        return;
    }
    for i in start..items.len() {
        current.push(items[i].clone());
        extend_combinations(items, k, i + 1, current, combinations);
        current.pop();
    }
}
