//! FX snapshots and point-in-time currency conversion.

mod convert;
mod snapshot;

pub use convert::convert_using_snapshot;
pub use snapshot::FxSnapshot;
