use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::json;

use pagelight_protocols::error::{HandlerError, RelayError};
use pagelight_protocols::handler::Handler;
use pagelight_protocols::message::{Action, Request, Response, Sender};

use super::*;

struct EchoHandler {
    action: &'static str,
    calls: AtomicUsize,
}

impl EchoHandler {
    fn new(action: &'static str) -> Self {
        Self {
            action,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Handler for EchoHandler {
    fn action(&self) -> &str {
        self.action
    }

    async fn handle(&self, request: Request, _sender: Sender) -> Result<Response, HandlerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Response::success(json!({"echo": request.action})))
    }
}

struct FailingHandler;

#[async_trait]
impl Handler for FailingHandler {
    fn action(&self) -> &str {
        "explode"
    }

    async fn handle(&self, _request: Request, _sender: Sender) -> Result<Response, HandlerError> {
        Err(HandlerError::BadPayload("missing field".to_string()))
    }
}

#[test]
fn register_rejects_duplicate_action() {
    let dispatcher = Dispatcher::new();
    dispatcher
        .register(Arc::new(EchoHandler::new("highlight")))
        .unwrap();

    let result = dispatcher.register(Arc::new(EchoHandler::new("highlight")));
    assert!(matches!(result, Err(RelayError::AlreadyRegistered(a)) if a == "highlight"));
}

#[test]
fn unregister_unknown_action_errors() {
    let dispatcher = Dispatcher::new();
    let result = dispatcher.unregister("highlight");
    assert!(matches!(result, Err(RelayError::NotRegistered(a)) if a == "highlight"));
}

#[tokio::test]
async fn dispatch_routes_to_registered_handler() {
    let dispatcher = Dispatcher::new();
    let handler = Arc::new(EchoHandler::new("countWords"));
    dispatcher.register(handler.clone()).unwrap();

    let response = dispatcher
        .dispatch(Request::new(Action::CountWords), Sender::background())
        .await;

    assert_eq!(response.get("echo"), Some(&json!("countWords")));
    assert_eq!(handler.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn dispatch_unknown_action_yields_error_marker_and_no_handler_call() {
    let dispatcher = Dispatcher::new();
    let handler = Arc::new(EchoHandler::new("highlight"));
    dispatcher.register(handler.clone()).unwrap();

    let response = dispatcher
        .dispatch(Request::named("foo"), Sender::background())
        .await;

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"error": "Unknown action"})
    );
    assert_eq!(handler.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unregistered_action_behaves_like_unknown() {
    let dispatcher = Dispatcher::new();
    dispatcher
        .register(Arc::new(EchoHandler::new("clear")))
        .unwrap();
    dispatcher.unregister("clear").unwrap();
    assert!(!dispatcher.contains("clear"));

    let response = dispatcher
        .dispatch(Request::new(Action::Clear), Sender::background())
        .await;
    assert_eq!(response, Response::unknown_action());
}

#[tokio::test]
async fn handler_error_degrades_to_error_response() {
    let dispatcher = Dispatcher::new();
    dispatcher.register(Arc::new(FailingHandler)).unwrap();

    let response = dispatcher
        .dispatch(Request::named("explode"), Sender::background())
        .await;

    assert!(response.is_error());
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"error": "invalid payload: missing field"})
    );
}

#[test]
fn actions_lists_registered_names() {
    let dispatcher = Dispatcher::new();
    dispatcher
        .register(Arc::new(EchoHandler::new("highlight")))
        .unwrap();
    dispatcher
        .register(Arc::new(EchoHandler::new("clear")))
        .unwrap();

    let mut actions = dispatcher.actions();
    actions.sort();
    assert_eq!(actions, vec!["clear", "highlight"]);
}
