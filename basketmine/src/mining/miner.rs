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

//! Level-wise frequent itemset miner.

use std::hash::Hash;

use rayon::prelude::*;

use crate::error::Error;
use crate::itemset::FrequentItemsets;
use crate::itemset::Itemset;
use crate::itemset::Transaction;
use crate::mining::candidates::combinations_of_size;
use crate::mining::candidates::flat_item_pool;

/// Counts the transactions of which `itemset` is a subset.
///
/// This is an exact count over the full transaction list. The empty itemset
/// is a subset of every transaction, so its support equals the number of
/// transactions.
pub fn support_count<T>(itemset: &Itemset<T>, transactions: &[Transaction<T>]) -> u64
where
    T: Ord + Hash,
{
    transactions
        .iter()
        .filter(|transaction| itemset.is_subset_of(transaction))
        .count() as u64
}

/// Level-wise miner for frequent itemsets.
///
/// The miner walks itemset sizes bottom-up. At each level it enumerates
/// candidate itemsets over the items still in play, counts each candidate's
/// support with an exact scan of the transactions, and keeps the candidates
/// that meet the configured threshold. Candidates that occur in no
/// transaction at all are dropped from consideration permanently, which is
/// what eventually terminates the walk.
///
/// # Examples
///
/// ```
/// # use basketmine::itemset::Itemset;
/// # use basketmine::itemset::Transaction;
/// # use basketmine::mining::ItemsetMiner;
/// let transactions = vec![
///     Transaction::new([1, 2]),
///     Transaction::new([1, 2, 3]),
///     Transaction::new([2, 3]),
/// ];
/// let frequent = ItemsetMiner::new(2).mine(&transactions);
/// assert_eq!(frequent.len(), 5);
/// assert_eq!(frequent.get(&Itemset::new([1, 2])), Some(&2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemsetMiner {
    min_support_count: u64,
}

impl ItemsetMiner {
    /// Creates a miner with an absolute support-count threshold.
    ///
    /// A threshold of zero is valid: every itemset that occurs in at least
    /// one transaction is then reported.
    pub fn new(min_support_count: u64) -> Self {
        Self { min_support_count }
    }

    /// Creates a miner from a support percentage of the transaction count.
    ///
    /// The absolute threshold is `floor(percent / 100 * num_transactions)`.
    /// Percentages above 100 are accepted and simply produce a threshold no
    /// transaction set of that size can meet.
    ///
    /// # Errors
    ///
    /// Returns an `ErrorKind::InvalidThreshold` error if `percent` is NaN,
    /// infinite, or negative.
    pub fn with_min_support_percent(percent: f64, num_transactions: usize) -> Result<Self, Error> {
        if !percent.is_finite() || percent < 0.0 {
            return Err(Error::invalid_threshold(format!(
                "support percentage must be finite and non-negative, got {percent}"
            )));
        }
        let min_support_count = (percent / 100.0 * num_transactions as f64).floor() as u64;
        Ok(Self::new(min_support_count))
    }

    /// Returns the configured minimum support count.
    pub fn min_support_count(&self) -> u64 {
        self.min_support_count
    }

    /// Mines all frequent itemsets from `transactions`.
    ///
    /// The result maps each itemset whose support meets the threshold to its
    /// exact support count, in canonical itemset order. Mining is
    /// deterministic: the same transactions and threshold always produce the
    /// same table. An empty transaction list yields an empty table.
    ///
    /// Candidate counts within a level are computed in parallel; the result
    /// is identical to a sequential scan.
    pub fn mine<T>(&self, transactions: &[Transaction<T>]) -> FrequentItemsets<T>
    where
        T: Clone + Ord + Hash + Sync,
    {
        let mut frequent = FrequentItemsets::new();

        let mut items: Vec<T> = transactions
            .iter()
            .flat_map(|transaction| transaction.iter().cloned())
            .collect();
        items.sort_unstable();
        items.dedup();

        let max_level = items.len();
        let mut pool: Vec<Itemset<T>> = items
            .into_iter()
            .map(|item| Itemset::from_sorted(vec![item]))
            .collect();

        for level in 1..=max_level {
            let flat = flat_item_pool(&pool);
            let candidates = combinations_of_size(&flat, level);
            let counts: Vec<u64> = candidates
                .par_iter()
                .map(|candidate| support_count(candidate, transactions))
                .collect();

            let mut survivors = Vec::with_capacity(candidates.len());
            for (candidate, count) in candidates.into_iter().zip(counts) {
                if count == 0 {
                    continue;
                }
                if count >= self.min_support_count {
                    frequent.insert(candidate.clone(), count);
                }
                // candidates seen at least once seed the next level even
                // when they fall short of the threshold
                survivors.push(candidate);
            }

            pool = survivors;
            if pool.is_empty() {
                break;
            }
        }

        frequent
    }
}
