//! Ports - Interfaces for external collaborators.
//!
//! The engine owns no network protocol, file format, or CLI surface; it is
//! a library boundary. These ports define the contracts for the three
//! upstream collaborators it consumes:
//!
//! - `ItineraryReader` - trip row, pre-sorted item rows, place rows, and
//!   the day-route side table
//! - `DestinationReader` - the optional destination-history payload blob
//! - `FxSnapshotProvider` - a point-in-time exchange-rate snapshot
//!
//! Adapters implement these ports; the in-memory ones live in
//! `crate::adapters::memory`.

mod destination_reader;
mod fx_provider;
mod itinerary_reader;

pub use destination_reader::{DestinationReader, HistoryRecord};
pub use fx_provider::FxSnapshotProvider;
pub use itinerary_reader::ItineraryReader;
