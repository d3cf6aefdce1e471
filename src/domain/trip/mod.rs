//! Trip rows and the loosely-typed `inputs` boundary.

mod inputs;
mod record;
mod summary;

pub use inputs::{DestinationRef, Lodging, TripInputs};
pub use record::TripRecord;
pub use summary::TripSummary;
