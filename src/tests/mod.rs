//! Test modules for the Niihau Trie crate.
//!
//! This module contains the crate-internal test suites:
//! - Behavioral and property-based tests for the trie
//! - Configuration loading and validation tests
//! - Error conversion and display tests
//! - Shared strategies and fixtures

pub mod error_tests;
