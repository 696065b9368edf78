#![doc(test(attr(deny(warnings))))]

//! Finance Core keeps a directory of accounts, per-account monthly expense
//! partitions, and a durable working context that survives restarts.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

pub use crate::core::{Clock, SystemClock, WorkingContext, WorkingContextManager};
pub use crate::errors::{FinanceError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing once per process.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Finance Core tracing initialized.");
    });
}
