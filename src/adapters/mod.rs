//! Adapters - Implementations of the engine's ports.
//!
//! The production row sources live outside this crate; what ships here
//! are the in-memory adapters backing the integration tests and usable
//! as fixtures.

pub mod memory;
