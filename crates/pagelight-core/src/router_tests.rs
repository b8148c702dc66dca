use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use pagelight_protocols::error::{HandlerError, RelayError};
use pagelight_protocols::handler::Handler;
use pagelight_protocols::message::{Action, Request, Response, Sender};

use super::*;

struct SenderUrlHandler;

#[async_trait]
impl Handler for SenderUrlHandler {
    fn action(&self) -> &str {
        "logActivity"
    }

    async fn handle(&self, _request: Request, sender: Sender) -> Result<Response, HandlerError> {
        Ok(Response::success(json!({"from": sender.source_url()})))
    }
}

struct StatusHandler(&'static str);

#[async_trait]
impl Handler for StatusHandler {
    fn action(&self) -> &str {
        self.0
    }

    async fn handle(&self, _request: Request, _sender: Sender) -> Result<Response, HandlerError> {
        Ok(Response::success(json!({"status": "success"})))
    }
}

fn tab_dispatcher() -> Arc<Dispatcher> {
    let dispatcher = Dispatcher::new();
    dispatcher.register(Arc::new(StatusHandler("highlight"))).unwrap();
    Arc::new(dispatcher)
}

#[tokio::test]
async fn send_to_tab_without_listener_is_delivery_failure() {
    let router = ContextRouter::new();

    let result = router.send_to_tab(3, Request::new(Action::Highlight)).await;
    assert!(matches!(result, Err(RelayError::NoListener(3))));
}

#[tokio::test]
async fn send_to_tab_reaches_attached_dispatcher() {
    let router = ContextRouter::new();
    router.attach_tab(3, tab_dispatcher());

    let response = router
        .send_to_tab(3, Request::new(Action::Highlight))
        .await
        .unwrap();
    assert_eq!(response.get("status"), Some(&json!("success")));
}

#[tokio::test]
async fn detach_restores_delivery_failure() {
    let router = ContextRouter::new();
    router.attach_tab(3, tab_dispatcher());
    assert!(router.has_tab(3));

    router.detach_tab(3);
    assert!(!router.has_tab(3));

    let result = router.send_to_tab(3, Request::new(Action::Highlight)).await;
    assert!(matches!(result, Err(RelayError::NoListener(3))));
}

#[tokio::test]
async fn send_to_background_without_dispatcher_fails() {
    let router = ContextRouter::new();
    let result = router
        .send_to_background(Request::new(Action::GetTabInfo), Sender::background())
        .await;
    assert!(matches!(result, Err(RelayError::NoBackground)));
}

#[tokio::test]
async fn background_handler_sees_sender_identity() {
    let router = ContextRouter::new();
    let dispatcher = Dispatcher::new();
    dispatcher.register(Arc::new(SenderUrlHandler)).unwrap();
    router.install_background(Arc::new(dispatcher));

    let from_background = router
        .send_to_background(Request::new(Action::LogActivity), Sender::background())
        .await
        .unwrap();
    assert_eq!(from_background.get("from"), Some(&json!("background")));

    let tab = pagelight_protocols::message::TabInfo::new(1, "https://example.com/", "Example");
    let from_tab = router
        .send_to_background(Request::new(Action::LogActivity), Sender::from_tab(tab))
        .await
        .unwrap();
    assert_eq!(from_tab.get("from"), Some(&json!("https://example.com/")));
}

#[tokio::test]
async fn unknown_action_passes_through_as_in_band_error() {
    let router = ContextRouter::new();
    router.attach_tab(1, tab_dispatcher());

    let response = router.send_to_tab(1, Request::named("foo")).await.unwrap();
    assert_eq!(response, Response::unknown_action());
}
