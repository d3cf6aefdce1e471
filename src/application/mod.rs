//! Application layer: query handlers orchestrating port fetches.

pub mod handlers;
