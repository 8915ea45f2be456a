// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! End-to-end tests for the reedbench driver binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn reedbench() -> Command {
    Command::cargo_bin("reedbench").unwrap()
}

#[test]
fn test_reports_one_csv_row_per_round() {
    let dir = TempDir::new().unwrap();
    let insert = write_file(dir.path(), "insert.txt", "1 2 3 4\n5 6 7 8 # tail comment\n");
    let search = write_file(dir.path(), "search.txt", "1 2 3 99\n");
    let delete = write_file(dir.path(), "delete.txt", "1 2\n");

    reedbench()
        .args(["--m", "4", "--impl", "array", "--rounds", "2"])
        .arg("--insert")
        .arg(&insert)
        .arg("--search")
        .arg(&search)
        .arg("--delete")
        .arg(&delete)
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with(
                "tag,impl,m,n_insert,n_search,n_delete,round,\
                 insert_ns,search_ns,delete_ns,found_count,height_after_insert\n",
            )
            .and(
                // 3 of the 4 searched keys are present; ns fields vary.
                predicate::str::is_match(r"(?m)^,array,4,8,4,2,1,\d+,\d+,\d+,3,\d+$").unwrap(),
            )
            .and(predicate::str::is_match(r"(?m)^,array,4,8,4,2,2,\d+,\d+,\d+,3,\d+$").unwrap()),
        );
}

#[test]
fn test_tag_and_csv_file_output() {
    let dir = TempDir::new().unwrap();
    let insert = write_file(dir.path(), "insert.txt", "10 20 30\n");
    let search = write_file(dir.path(), "search.txt", "10 40\n");
    let delete = write_file(dir.path(), "delete.txt", "\n");
    let csv = dir.path().join("out.csv");

    reedbench()
        .args(["--m", "8", "--impl", "linked", "--tag", "smoke", "--rounds", "1"])
        .arg("--insert")
        .arg(&insert)
        .arg("--search")
        .arg(&search)
        .arg("--delete")
        .arg(&delete)
        .arg("--csv")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&csv).unwrap();
    assert!(written.starts_with("tag,impl,m,"));
    assert!(written.contains("smoke,linked,8,3,2,0,1,"));
}

#[test]
fn test_all_backends_accepted() {
    let dir = TempDir::new().unwrap();
    let insert = write_file(dir.path(), "insert.txt", "3 1 2\n");
    let search = write_file(dir.path(), "search.txt", "1 2 3\n");
    let delete = write_file(dir.path(), "delete.txt", "1 2 3\n");

    for backend in ["array", "linked", "skiplist"] {
        reedbench()
            .args(["--m", "3", "--impl", backend, "--rounds", "1"])
            .arg("--insert")
            .arg(&insert)
            .arg("--search")
            .arg(&search)
            .arg("--delete")
            .arg(&delete)
            .assert()
            .success()
            .stdout(predicate::str::is_match(format!(r"(?m)^,{},3,3,3,3,1,\d+,\d+,\d+,3,\d+$", backend)).unwrap());
    }
}

#[test]
fn test_out_of_range_value_exits_one() {
    let dir = TempDir::new().unwrap();
    let insert = write_file(dir.path(), "insert.txt", "1 99999999999\n");
    let search = write_file(dir.path(), "search.txt", "1\n");
    let delete = write_file(dir.path(), "delete.txt", "1\n");

    reedbench()
        .args(["--m", "4"])
        .arg("--insert")
        .arg(&insert)
        .arg("--search")
        .arg(&search)
        .arg("--delete")
        .arg(&delete)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("signed 32-bit"));
}

#[test]
fn test_missing_input_file_exits_one() {
    let dir = TempDir::new().unwrap();
    let search = write_file(dir.path(), "search.txt", "1\n");
    let delete = write_file(dir.path(), "delete.txt", "1\n");

    reedbench()
        .args(["--m", "4"])
        .arg("--insert")
        .arg(dir.path().join("nope.txt"))
        .arg("--search")
        .arg(&search)
        .arg("--delete")
        .arg(&delete)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_bad_arguments_exit_one() {
    reedbench().arg("--bogus").assert().code(1);

    // Required flags missing entirely.
    reedbench().assert().code(1);
}

#[test]
fn test_help_exits_zero() {
    reedbench()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--impl"));
}
