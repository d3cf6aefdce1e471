//! Itinerary item rows, day grouping, and cost aggregation.

mod costs;
mod day;
mod grouper;
mod item;
mod place;

pub use costs::{CostAggregator, TripTotals};
pub use day::{Block, Day};
pub use grouper::{DayGroup, DayGrouper};
pub use item::{ItineraryItem, TimeOfDay};
pub use place::Place;
