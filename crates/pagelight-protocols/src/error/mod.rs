//! Error types for the Pagelight protocol layer.

mod handler;
mod host;
mod relay;
mod storage;

pub use handler::*;
pub use host::*;
pub use relay::*;
pub use storage::*;
