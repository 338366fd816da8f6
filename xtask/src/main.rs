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

//! Development tasks for the basketmine workspace.
//!
//! Run as `cargo run -p xtask -- <command>`.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;

use clap::Parser;
use clap::Subcommand;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(about = "Development tasks for the basketmine workspace")]
struct Cli {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate a synthetic comma-delimited transaction file.
    GenData {
        /// Number of transactions to generate.
        #[arg(long, default_value_t = 1000)]
        transactions: usize,
        /// Number of distinct items in the catalog.
        #[arg(long, default_value_t = 50)]
        items: u32,
        /// Average number of items per transaction.
        #[arg(long, default_value_t = 4)]
        avg_size: usize,
        /// Seed for the random generator, so generated files reproduce.
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Output path.
        #[arg(long)]
        out: PathBuf,
    },
    /// Run the formatting and lint checks CI runs.
    Check,
}

fn main() -> Result<(), Box<dyn Error>> {
    match Cli::parse().task {
        Task::GenData {
            transactions,
            items,
            avg_size,
            seed,
            out,
        } => gen_data(transactions, items, avg_size, seed, &out),
        Task::Check => check(),
    }
}

fn gen_data(
    transactions: usize,
    items: u32,
    avg_size: usize,
    seed: u64,
    out: &Path,
) -> Result<(), Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut writer = BufWriter::new(File::create(out)?);
    for _ in 0..transactions {
        let size = rng.random_range(1..=avg_size.max(1) * 2);
        let record: Vec<String> = (0..size)
            .map(|_| format!("item{:03}", rng.random_range(0..items)))
            .collect();
        writeln!(writer, "{}", record.join(","))?;
    }
    writer.flush()?;
    println!("wrote {transactions} transactions to {}", out.display());
    Ok(())
}

fn check() -> Result<(), Box<dyn Error>> {
    let cargo = which::which("cargo")?;
    run(Command::new(&cargo).args(["fmt", "--all", "--check"]))?;
    run(Command::new(&cargo).args(["clippy", "--all-targets", "--", "-D", "warnings"]))?;
    Ok(())
}

fn run(command: &mut Command) -> Result<(), Box<dyn Error>> {
    let status = command.status()?;
    if !status.success() {
        return Err(format!("command failed with {status}").into());
    }
    Ok(())
}
