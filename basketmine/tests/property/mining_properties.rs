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

//! Property-based checks of the mining and rule invariants over small
//! random transaction sets.

use std::collections::BTreeSet;

use basketmine::itemset::Itemset;
use basketmine::itemset::Transaction;
use basketmine::mining::ItemsetMiner;
use basketmine::mining::support_count;
use basketmine::rules::RuleGenerator;
use proptest::collection::vec;
use proptest::prelude::*;

/// Up to ten transactions drawn from a six-item universe, small enough
/// that exhaustive recounting stays cheap.
fn arb_transactions() -> impl Strategy<Value = Vec<Transaction<u8>>> {
    vec(vec(0u8..6, 0..5), 0..10)
        .prop_map(|raw| raw.into_iter().map(Transaction::new).collect())
}

proptest! {
    #[test]
    fn reported_counts_are_exact_and_meet_the_threshold(
        transactions in arb_transactions(),
        min_support in 0u64..4,
    ) {
        let frequent = ItemsetMiner::new(min_support).mine(&transactions);
        for (itemset, &count) in &frequent {
            prop_assert!(count > 0);
            prop_assert!(count >= min_support);
            prop_assert_eq!(support_count(itemset, &transactions), count);
        }
    }

    #[test]
    fn support_is_anti_monotone_over_the_table(transactions in arb_transactions()) {
        let frequent = ItemsetMiner::new(1).mine(&transactions);
        for (itemset, &count) in &frequent {
            for excluded in itemset.iter() {
                let subset: Itemset<u8> = itemset
                    .iter()
                    .filter(|item| *item != excluded)
                    .copied()
                    .collect();
                if subset.is_empty() {
                    continue;
                }
                prop_assert!(support_count(&subset, &transactions) >= count);
            }
        }
    }

    #[test]
    fn raising_the_threshold_shrinks_the_table(
        transactions in arb_transactions(),
        min_support in 0u64..4,
    ) {
        let lower = ItemsetMiner::new(min_support).mine(&transactions);
        let higher = ItemsetMiner::new(min_support + 1).mine(&transactions);
        prop_assert!(higher.len() <= lower.len());
        for (itemset, count) in &higher {
            prop_assert_eq!(lower.get(itemset), Some(count));
        }
    }

    #[test]
    fn zero_threshold_table_is_exactly_the_nonzero_support_itemsets(
        transactions in arb_transactions(),
    ) {
        let frequent = ItemsetMiner::new(0).mine(&transactions);

        let items: BTreeSet<u8> = transactions
            .iter()
            .flat_map(|transaction| transaction.iter().copied())
            .collect();
        let items: Vec<u8> = items.into_iter().collect();

        for mask in 1usize..(1 << items.len()) {
            let itemset: Itemset<u8> = items
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, item)| *item)
                .collect();
            let support = support_count(&itemset, &transactions);
            if support > 0 {
                prop_assert_eq!(frequent.get(&itemset), Some(&support));
            } else {
                prop_assert!(!frequent.contains_key(&itemset));
            }
        }
        prop_assert_eq!(
            frequent.len(),
            (1usize..(1 << items.len()))
                .filter(|mask| {
                    let itemset: Itemset<u8> = items
                        .iter()
                        .enumerate()
                        .filter(|(i, _)| mask & (1 << i) != 0)
                        .map(|(_, item)| *item)
                        .collect();
                    support_count(&itemset, &transactions) > 0
                })
                .count()
        );
    }

    #[test]
    fn rules_are_disjoint_confident_and_backed_by_the_table(
        transactions in arb_transactions(),
        threshold in 0.0f64..1.0,
    ) {
        let frequent = ItemsetMiner::new(1).mine(&transactions);
        let rules = RuleGenerator::new(threshold).generate(&frequent);

        for rule in &rules {
            prop_assert!(!rule.antecedent().is_empty());
            prop_assert!(!rule.consequent().is_empty());
            prop_assert!(
                rule.antecedent()
                    .iter()
                    .all(|item| !rule.consequent().contains(item))
            );
            prop_assert!(rule.confidence() >= threshold);
            prop_assert!(rule.confidence() <= 1.0);

            let union: Itemset<u8> = rule
                .antecedent()
                .iter()
                .chain(rule.consequent().iter())
                .copied()
                .collect();
            prop_assert!(frequent.contains_key(&union));
            let expected = frequent[&union] as f64 / frequent[rule.antecedent()] as f64;
            prop_assert!((rule.confidence() - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn raising_the_confidence_threshold_never_adds_rules(
        transactions in arb_transactions(),
    ) {
        let frequent = ItemsetMiner::new(1).mine(&transactions);
        let low = RuleGenerator::new(0.3).generate(&frequent);
        let high = RuleGenerator::new(0.7).generate(&frequent);
        prop_assert!(high.len() <= low.len());
    }
}
