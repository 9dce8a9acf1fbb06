//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `run`: execute a booking script against a fresh manager
//! - `quote`: compute the price of a stay without booking it
//! - `demo`: walk through the built-in sample scenario

pub mod demo;
pub mod quote;
pub mod run;

pub use demo::DemoCommand;
pub use quote::QuoteCommand;
pub use run::RunCommand;
