//! Integration tests for the LedgerLogic transfer front end.

pub mod mocks;

pub mod bridge_tests;
pub mod view_tests;
