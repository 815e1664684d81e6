// ABOUTME: Library root for launchpad - exposes the orchestration engine for embedding and tests.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod deploy;
pub mod error;
pub mod output;
pub mod platform;
pub mod types;
