//! # Pagelight Core
//!
//! The message relay connecting the popup, document and background
//! contexts, and the typed view over persisted state.
//!
//! - [`Dispatcher`] - action-keyed handler registry for one context
//! - [`ContextRouter`] - cross-context delivery with explicit
//!   delivery-failure reporting
//! - [`StoredState`] - click counter and install bookkeeping over the
//!   key-value store

mod dispatch;
mod router;
mod state;

pub use dispatch::Dispatcher;
pub use router::ContextRouter;
pub use state::StoredState;
