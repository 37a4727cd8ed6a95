//! Test utilities for analysis tests.

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockBehavior, MockDriver, MockResponse, analysis_json};
