// Shared setup for the integration test crates.
#![allow(dead_code, unused_imports)]

pub mod fixtures;

pub use ntag5_bridge::test_support as helpers;

/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
