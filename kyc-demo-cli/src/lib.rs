//! KYC Demo CLI library
//!
//! Command implementations and terminal helpers shared by the `kyc-demo`
//! binary and its integration tests.

pub mod commands;
pub mod ui;
