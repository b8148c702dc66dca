//! # Pagelight In-Memory Host
//!
//! In-memory implementations of the host service protocols. The demo
//! binary runs the three contexts on top of these, and tests use them to
//! observe side effects (stored values, shown notifications, registered
//! menu items) without a browser host.

mod menus;
mod notify;
mod store;
mod tabs;
mod time;

pub use menus::MemoryMenus;
pub use notify::RecordingNotifications;
pub use store::MemoryStore;
pub use tabs::StaticTabs;
pub use time::{ManualClock, NoDelayScheduler};
