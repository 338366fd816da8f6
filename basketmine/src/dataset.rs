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

//! Parsing of comma-delimited transaction records.
//!
//! The mining core consumes [`Transaction`] values and never sees raw
//! text. This module is the parsing collaborator that turns records, one
//! comma-delimited item list per line, into transactions.

use std::io::BufRead;

use crate::error::Error;
use crate::itemset::Transaction;

/// Parses one comma-delimited record into a transaction.
///
/// Surrounding whitespace is trimmed from each item, empty fragments are
/// dropped, and duplicate items collapse silently. A record with no usable
/// items yields an empty transaction.
///
/// # Examples
///
/// ```
/// # use basketmine::dataset::parse_transaction;
/// let transaction = parse_transaction(" milk , bread, milk ");
/// assert_eq!(transaction.len(), 2);
/// assert!(transaction.contains(&"milk".to_string()));
/// ```
pub fn parse_transaction(record: &str) -> Transaction<String> {
    record
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Reads transactions from `reader`, one comma-delimited record per line.
///
/// Blank lines are skipped.
///
/// # Errors
///
/// Read failures map to `ErrorKind::Io`; lines that are not valid UTF-8
/// map to `ErrorKind::InvalidData`.
pub fn read_transactions<R: BufRead>(reader: R) -> Result<Vec<Transaction<String>>, Error> {
    let mut transactions = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        transactions.push(parse_transaction(&line));
    }
    Ok(transactions)
}
