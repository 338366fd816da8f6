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

//! Association rule derivation.

use std::fmt;

use crate::itemset::FrequentItemsets;
use crate::itemset::Itemset;
use crate::mining::combinations_of_size;

/// An association rule of the form `antecedent => consequent`.
///
/// The antecedent and consequent are disjoint, non-empty itemsets whose
/// union is the frequent itemset the rule was derived from. Confidence is
/// the support of the union divided by the support of the antecedent.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule<T> {
    antecedent: Itemset<T>,
    consequent: Itemset<T>,
    confidence: f64,
}

impl<T> Rule<T> {
    /// Returns the "if" side of the rule.
    pub fn antecedent(&self) -> &Itemset<T> {
        &self.antecedent
    }

    /// Returns the "then" side of the rule.
    pub fn consequent(&self) -> &Itemset<T> {
        &self.consequent
    }

    /// Returns the rule confidence, a value in `[0, 1]`.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

impl<T: fmt::Display> fmt::Display for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} => {} (confidence: {:.2})",
            self.antecedent, self.consequent, self.confidence
        )
    }
}

/// Derives association rules from a frequent itemset table.
///
/// # Examples
///
/// ```
/// # use basketmine::itemset::Transaction;
/// # use basketmine::mining::ItemsetMiner;
/// # use basketmine::rules::RuleGenerator;
/// let transactions = vec![
///     Transaction::new(["coffee", "sugar"]),
///     Transaction::new(["coffee", "sugar", "cream"]),
///     Transaction::new(["coffee"]),
/// ];
/// let frequent = ItemsetMiner::new(2).mine(&transactions);
/// let rules = RuleGenerator::new(0.6).generate(&frequent);
///
/// assert!(rules.iter().any(|rule| {
///     rule.to_string() == "{sugar} => {coffee} (confidence: 1.00)"
/// }));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RuleGenerator {
    min_confidence: f64,
}

impl RuleGenerator {
    /// Creates a generator with the given confidence threshold.
    ///
    /// The meaningful range is `[0, 1]`, but any value is accepted: a
    /// threshold above one (or NaN) yields no rules, and a negative
    /// threshold keeps every candidate split.
    pub fn new(min_confidence: f64) -> Self {
        Self { min_confidence }
    }

    /// Returns the configured minimum confidence.
    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }

    /// Derives every rule meeting the confidence threshold.
    ///
    /// Each frequent itemset of size two or more is split into every proper
    /// non-empty antecedent with the remaining items as consequent. Rules
    /// appear grouped by source itemset in table order; within one itemset,
    /// antecedents come in ascending size and lexicographic order. The same
    /// table and threshold always produce the same sequence.
    ///
    /// A split is skipped when the table has no usable support for its
    /// antecedent, which can only happen for tables assembled by hand; the
    /// miner records every subset of each frequent itemset it reports.
    pub fn generate<T: Clone + Ord>(&self, frequent: &FrequentItemsets<T>) -> Vec<Rule<T>> {
        let mut rules = Vec::new();
        for (itemset, &support) in frequent {
            if itemset.len() < 2 {
                continue;
            }
            for antecedent_size in 1..itemset.len() {
                for antecedent in combinations_of_size(itemset.items(), antecedent_size) {
                    let consequent = itemset.difference(&antecedent);
                    if consequent.is_empty() {
                        continue;
                    }
                    let antecedent_support = match frequent.get(&antecedent) {
                        Some(&count) if count > 0 => count,
                        _ => continue,
                    };
                    let confidence = support as f64 / antecedent_support as f64;
                    if confidence >= self.min_confidence {
                        rules.push(Rule {
                            antecedent,
                            consequent,
                            confidence,
                        });
                    }
                }
            }
        }
        rules
    }
}
