//! Fixture layer for the cartflow end-to-end scenarios.
//!
//! Scenarios live under `tests/`; this crate provides the [`Session`] setup
//! that launches a browser and optionally pre-authenticates a persona.

pub mod fixtures;

pub use fixtures::{init_tracing, Session};
