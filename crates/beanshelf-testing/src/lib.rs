//! Testing infrastructure for beanshelf tests.
//!
//! This crate provides:
//! - `StubTransport`: scripted HTTP responses with a call log
//! - `fixtures`: raw payload builders and a ready-made fetcher
//! - `assertions`: checks over bean collections and CLI JSON output
//! - `TestWorld`: isolated data directory for running the CLI binary

pub mod assertions;
pub mod fixtures;
pub mod transport;
pub mod world;

pub use transport::{StubResponse, StubTransport};
pub use world::TestWorld;
