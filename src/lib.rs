//! Itinero Engine - Itinerary Aggregation & Currency Normalization
//!
//! This crate turns flat, loosely-typed trip data (persisted itinerary item
//! rows, a JSON `inputs` blob, destination-history payloads) into the single
//! day-grouped, cost-normalized view model consumed by every itinerary
//! rendering surface, and performs point-in-time currency conversion over an
//! immutable FX snapshot.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
