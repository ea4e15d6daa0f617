#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, TimeZone, Utc};
use sessiondraft::store::{DraftStore, ManualClock, MemoryStorage, StoreOptions};
use std::env;
use std::fs;
use std::path::PathBuf;

pub type TestStore = DraftStore<MemoryStorage, ManualClock>;

pub fn sd() -> Command {
    cargo_bin_cmd!("sessiondraft")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_sessiondraft.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_sessiondraft_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a file of exactly `size` bytes and return its path
pub fn temp_file_with_size(name: &str, size: usize) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(name);
    fs::write(&path, vec![b'x'; size]).expect("write temp file");
    path.to_string_lossy().to_string()
}

/// Initialize a test database through the CLI
pub fn init_db(db_path: &str) {
    sd().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap()
}

/// Hydrated in-memory store plus handles on its storage and clock
pub fn memory_store() -> (TestStore, MemoryStorage, ManualClock) {
    let storage = MemoryStorage::new();
    let clock = ManualClock::new(t0());
    let (store, _) = DraftStore::open(storage.clone(), clock.clone(), StoreOptions::default());
    (store, storage, clock)
}
