//! Unit tests for the validation module.
//!
//! Tests are organised by component: the result accumulator, the built-in
//! validator, and the executor.

mod default_validator_tests;
mod result_tests;
