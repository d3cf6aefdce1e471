//! Destination metadata: history payload coercion and merging.
//!
//! A destination's practical info arrives from two places: the
//! destination-history table (a narrative blob with a nested `kbyg` object)
//! and trip-level `inputs.destination_meta` overrides. This module coerces
//! the raw payload, merges the two sources with override precedence, and
//! projects the merged bag for its two consumer contracts (full fact-card
//! bag vs. lightweight preview meta).

mod kbyg;
mod merger;
mod meta;
mod payload;

pub use kbyg::Kbyg;
pub use merger::MetaMerger;
pub use meta::{DestinationMeta, PreviewMeta};
pub use payload::HistoryPayload;
