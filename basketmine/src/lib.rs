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

//! Frequent itemset mining and association rule generation for
//! market-basket analysis.
//!
//! # Overview
//! The crate has two cooperating components. [`ItemsetMiner`] scans a list
//! of transactions and reports every itemset whose support count, the
//! number of transactions containing all of its items, meets a minimum
//! threshold. [`RuleGenerator`] then splits those frequent itemsets into
//! rules of the form `antecedent => consequent` and keeps the splits whose
//! confidence meets a second threshold. Items are any `Ord + Hash` type;
//! the [`dataset`] module parses comma-delimited text into transactions
//! over `String` items for callers starting from raw records.
//!
//! Both stages are deterministic. The frequent table is ordered by the
//! canonical itemset order and rules are emitted in a fixed, documented
//! order, so results are reproducible run to run.
//!
//! # Examples
//!
//! ```
//! use basketmine::Transaction;
//! use basketmine::mining::ItemsetMiner;
//! use basketmine::rules::RuleGenerator;
//!
//! let transactions = vec![
//!     Transaction::new(["milk", "bread"]),
//!     Transaction::new(["milk", "bread", "butter"]),
//!     Transaction::new(["milk"]),
//!     Transaction::new(["bread", "butter"]),
//! ];
//!
//! let miner = ItemsetMiner::new(2);
//! let frequent = miner.mine(&transactions);
//! assert_eq!(frequent.len(), 5);
//!
//! let rules = RuleGenerator::new(0.5).generate(&frequent);
//! assert!(rules.iter().any(|rule| {
//!     rule.antecedent().items() == ["milk"] && rule.consequent().items() == ["bread"]
//! }));
//! ```
//!
//! Starting from a text dataset instead:
//!
//! ```
//! use std::io::Cursor;
//!
//! use basketmine::dataset::read_transactions;
//! use basketmine::mining::ItemsetMiner;
//!
//! let records = "milk,bread\nmilk,bread,butter\nmilk\nbread,butter";
//! let transactions = read_transactions(Cursor::new(records))?;
//! let miner = ItemsetMiner::with_min_support_percent(50.0, transactions.len())?;
//! let frequent = miner.mine(&transactions);
//! assert_eq!(frequent.len(), 5);
//! # Ok::<(), basketmine::error::Error>(())
//! ```

pub mod dataset;
pub mod error;
pub mod itemset;
pub mod mining;
pub mod rules;

pub use self::itemset::FrequentItemsets;
pub use self::itemset::Itemset;
pub use self::itemset::Transaction;
pub use self::mining::ItemsetMiner;
pub use self::mining::support_count;
pub use self::rules::Rule;
pub use self::rules::RuleGenerator;
