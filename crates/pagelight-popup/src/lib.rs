//! # Pagelight Popup
//!
//! The popup context: a controller that drives the document context
//! through the relay and renders into a plain view model.

mod controller;
mod view;

pub use controller::PopupController;
pub use view::{PopupView, ResultCard};
