//! Domain layer containing the pure aggregation logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, currency codes, JSON guards, errors)
//! - `trip` - Trip rows, the loosely-typed `inputs` blob boundary, trip summary
//! - `itinerary` - Itinerary item rows, day grouping, cost aggregation
//! - `destination` - Destination-history payload coercion and meta merging
//! - `fx` - FX snapshots and point-in-time currency conversion
//! - `preview` - The assembled view model handed to rendering surfaces
//!
//! Everything in this layer is synchronous and side-effect-free: malformed
//! upstream data degrades to documented defaults instead of errors, and the
//! derived structures are rebuilt from scratch on every pass rather than
//! mutated in place.

pub mod destination;
pub mod foundation;
pub mod fx;
pub mod itinerary;
pub mod preview;
pub mod trip;
