//! The assembled view model handed to rendering surfaces.

mod assembler;
mod route;

pub use assembler::{PreviewAssembler, PreviewLike};
pub use route::DayRoute;
