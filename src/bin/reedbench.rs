// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! ReedSet benchmark driver.
//!
//! Reads three integer files (insert, search, delete), builds a fresh
//! tree per round on the selected backend, times the three phases with a
//! monotonic clock and reports one CSV row per round.
//!
//! Exit codes: 0 on success, 1 on argument or I/O error (diagnostic on
//! stderr).

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;

use reedset::{dataset, Key, KeySet, Order, StoreBackend};

#[derive(Parser)]
#[command(name = "reedbench")]
#[command(author = "Vivian Voss <ask@vvoss.dev>")]
#[command(version = "0.1.0")]
#[command(about = "ReedSet benchmark driver - times B+-Tree phases per node-store backend", long_about = None)]
struct Cli {
    /// Tree order M (values below 3 are clamped up)
    #[arg(long)]
    m: u16,

    /// Node-store backend
    #[arg(long = "impl", value_enum, default_value_t = StoreBackend::Array)]
    backend: StoreBackend,

    /// File of keys to insert (whitespace-separated, # comments)
    #[arg(long)]
    insert: PathBuf,

    /// File of keys to search
    #[arg(long)]
    search: PathBuf,

    /// File of keys to delete
    #[arg(long)]
    delete: PathBuf,

    /// Rounds to run; each round builds a fresh tree
    #[arg(long, default_value_t = 3)]
    rounds: u32,

    /// Write CSV to this file instead of stdout
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Free-form tag copied into every CSV row
    #[arg(long, default_value = "")]
    tag: String,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version arrive here too; only real argument
            // errors map to exit code 1.
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    if let Err(err) = run(cli) {
        eprintln!("reedbench: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let inserts = dataset::load_keys(&cli.insert)?;
    let searches = dataset::load_keys(&cli.search)?;
    let deletes = dataset::load_keys(&cli.delete)?;

    let mut out: Box<dyn Write> = match &cli.csv {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("create '{}'", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    writeln!(
        out,
        "tag,impl,m,n_insert,n_search,n_delete,round,\
         insert_ns,search_ns,delete_ns,found_count,height_after_insert"
    )?;
    for round in 1..=cli.rounds {
        let row = run_round(&cli, round, &inserts, &searches, &deletes);
        writeln!(out, "{}", row)?;
    }
    out.flush()?;
    Ok(())
}

/// Build one tree, time the three phases, render the CSV row.
fn run_round(
    cli: &Cli,
    round: u32,
    inserts: &[Key],
    searches: &[Key],
    deletes: &[Key],
) -> String {
    let mut set = KeySet::new(Order::new(cli.m), cli.backend);

    let started = Instant::now();
    for &key in inserts {
        set.insert(key);
    }
    let insert_ns = started.elapsed().as_nanos();
    let height_after_insert = set.height();

    let started = Instant::now();
    let mut found_count = 0u64;
    for &key in searches {
        if set.search(key) {
            found_count += 1;
        }
    }
    let search_ns = started.elapsed().as_nanos();

    let started = Instant::now();
    for &key in deletes {
        set.delete(key);
    }
    let delete_ns = started.elapsed().as_nanos();

    format!(
        "{},{},{},{},{},{},{},{},{},{},{},{}",
        cli.tag,
        cli.backend,
        cli.m,
        inserts.len(),
        searches.len(),
        deletes.len(),
        round,
        insert_ns,
        search_ns,
        delete_ns,
        found_count,
        height_after_insert
    )
}
