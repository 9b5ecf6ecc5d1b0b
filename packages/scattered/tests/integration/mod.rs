//! Integration test suite.
//!
//! 1. Concrete usage scenario
//! 2. Interop with standard sequence algorithms
//! 3. Property tests over random inputs

pub mod algorithm_tests;
pub mod helpers;
pub mod property_tests;
pub mod scenario_tests;
