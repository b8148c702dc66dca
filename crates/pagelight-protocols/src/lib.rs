//! # Pagelight Protocols
//!
//! Protocol definitions shared by the Pagelight contexts (document,
//! background, popup) and the host services they run against. Contains
//! interface definitions and wire types - no implementations beyond the
//! standard clock and scheduler.
//!
//! ## Core Traits
//!
//! - [`Handler`] - Trait for action handlers behind the relay
//! - [`KeyValueStore`] - Persisted key-value storage
//! - [`TabQuery`] - Active-tab lookup
//! - [`NotificationSurface`] - Fire-and-forget notifications
//! - [`MenuHost`] - Context-menu registration
//! - [`Clock`] / [`Scheduler`] - Injected time sources

pub mod error;
pub mod handler;
pub mod host;
pub mod message;
pub mod time;

// Re-export core traits and types
pub use error::{HandlerError, HostError, RelayError, StorageError};
pub use handler::Handler;
pub use host::{KeyValueStore, MenuContext, MenuHost, MenuItem, NotificationSurface, TabQuery};
pub use message::{Action, Request, Response, Sender, TabId, TabInfo};
pub use time::{Clock, Scheduler, SystemClock, TokioScheduler};
