#![allow(dead_code)]

use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use chrono::NaiveDate;
use finance_core::{
    config::DataPaths,
    core::{Clock, FixedClock, WorkingContextManager},
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a unique, empty base directory that outlives the test.
pub fn base_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().join("data");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// A clock pinned to 2024-06-20.
pub fn june_clock() -> Box<dyn Clock> {
    Box::new(FixedClock(
        NaiveDate::from_ymd_opt(2024, 6, 20).expect("valid date"),
    ))
}

/// Opens a manager over `base` as a fresh process would.
pub fn open(base: &Path) -> WorkingContextManager {
    WorkingContextManager::init(DataPaths::new(base), june_clock()).expect("init working context")
}
