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

//! Association rules derived from frequent itemsets.
//!
//! # Overview
//! [`RuleGenerator`] turns a frequent itemset table into rules of the form
//! `antecedent => consequent`, splitting each itemset of size two or more
//! into every proper non-empty antecedent and keeping the splits whose
//! confidence meets a configured minimum. Confidence is the fraction of
//! transactions containing the antecedent that also contain the consequent,
//! computed from the support counts already in the table. No transaction
//! data is consulted.
//!
//! Rule output order is deterministic: rules are grouped by source itemset
//! in table order, and within one itemset the antecedents are enumerated in
//! ascending size, lexicographically within each size.

mod generator;

pub use self::generator::Rule;
pub use self::generator::RuleGenerator;
