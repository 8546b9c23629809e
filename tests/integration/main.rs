//! Integration tests for the library desk public API

mod common;
mod menu_tests;
mod scenario_tests;
