//! Unit tests for roastgen modules
//!
//! These tests run in-process without spawning the binary.

mod test_config;
mod test_run;
