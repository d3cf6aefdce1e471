//! Query handlers.
//!
//! Each handler fetches what it needs through the ports and delegates the
//! data shaping to the pure domain layer. Handlers hold `Arc<dyn Port>`
//! and are cheap to clone around.

mod assemble_preview;
mod destination_meta;
mod fx_session;

pub use assemble_preview::{AssemblePreviewHandler, AssemblePreviewQuery};
pub use destination_meta::{DestinationMetaHandler, DestinationMetaQuery};
pub use fx_session::FxSession;
