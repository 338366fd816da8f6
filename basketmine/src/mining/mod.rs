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

//! Level-wise mining of frequent itemsets from transaction data.
//!
//! # Overview
//! [`ItemsetMiner`] finds every itemset whose support count, the number of
//! transactions containing all of its items, meets a configured minimum.
//! Mining proceeds level by level: size-1 itemsets first, then size-2, and
//! so on until no candidate occurs in any transaction.
//!
//! Candidates at each level are enumerated as plain item combinations over
//! the items surviving the previous level, rather than by joining frequent
//! itemsets pairwise. This counts some candidates a pairwise join would
//! skip, but the frequent table it produces is the same: an itemset with an
//! infrequent subset can never meet the threshold itself, so the extra
//! candidates are only ever counted and then discarded. Candidates with a
//! support count of zero leave the pool permanently; itemsets that occur at
//! least once keep seeding deeper levels even when they fall short of the
//! threshold.
//!
//! Support counting is exact. Every candidate is checked against every
//! transaction, which keeps results deterministic and makes the miner
//! suitable for the moderate dataset sizes of market-basket analysis.
//!
//! # Examples
//!
//! ```
//! # use basketmine::itemset::Itemset;
//! # use basketmine::itemset::Transaction;
//! # use basketmine::mining::ItemsetMiner;
//! let transactions = vec![
//!     Transaction::new(["milk", "bread"]),
//!     Transaction::new(["milk", "bread", "butter"]),
//!     Transaction::new(["bread", "butter"]),
//! ];
//!
//! let miner = ItemsetMiner::new(2);
//! let frequent = miner.mine(&transactions);
//!
//! assert_eq!(frequent.get(&Itemset::new(["bread", "milk"])), Some(&2));
//! assert!(!frequent.contains_key(&Itemset::new(["butter", "milk"])));
//! ```

mod candidates;
mod miner;

pub(crate) use self::candidates::combinations_of_size;
pub use self::miner::ItemsetMiner;
pub use self::miner::support_count;
