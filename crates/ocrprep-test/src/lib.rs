//! ocrprep-test - Regression test framework for ocrprep
//!
//! Provides [`RegParams`], which accumulates comparison failures over a
//! whole test function, and deterministic synthetic inputs so tests never
//! need image files.
//!
//! # Usage
//!
//! ```ignore
//! use ocrprep_test::{RegParams, generators};
//!
//! let src = generators::random_image(64, 48, 7);
//! let mut rp = RegParams::new("meanfilter");
//! rp.compare_samples(&expected, &actual);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display". Display mode
//!   also writes raw `.gray` dumps under `tests/regout`.

mod error;
pub mod generators;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // ocrprep-test is at crates/ocrprep-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
