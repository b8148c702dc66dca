//! Handler trait definition.

use async_trait::async_trait;

use crate::error::HandlerError;
use crate::message::{Request, Response, Sender};

/// Core trait for action handlers.
///
/// A handler answers exactly one action name and produces exactly one
/// response per request, either synchronously or after awaiting a host
/// query. Handler errors are folded into an in-band error response by the
/// dispatcher; they never crash the relay.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Action name this handler answers.
    fn action(&self) -> &str;

    /// Handle one request from `sender`.
    async fn handle(&self, request: Request, sender: Sender) -> Result<Response, HandlerError>;
}
