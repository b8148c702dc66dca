use serde_json::json;

use pagelight_host_memory::NoDelayScheduler;

use super::*;
use crate::annotator::{HIGHLIGHT_CLASS, HIGHLIGHT_STYLE_ID};
use crate::dom::{Element, Tag};

fn page() -> Arc<PageDocument> {
    Arc::new(PageDocument::with_elements(vec![
        Element::new(Tag::H1, "Welcome"),
        Element::new(Tag::P, "Hello, world! This page has words."),
        Element::new(Tag::Div, "not counted as a highlight target"),
    ]))
}

fn install(document: Arc<PageDocument>) -> Arc<Dispatcher> {
    ContentScript::install(document, Arc::new(NoDelayScheduler::new())).unwrap()
}

#[tokio::test]
async fn install_registers_the_page_actions() {
    let dispatcher = install(page());
    for action in [Action::Highlight, Action::CountWords, Action::Clear] {
        assert!(dispatcher.contains(action.as_str()));
    }
    assert!(!dispatcher.contains(Action::GetTabInfo.as_str()));
}

#[tokio::test]
async fn install_injects_the_base_stylesheet() {
    let document = page();
    install(document.clone());
    assert!(document.has_stylesheet(BASE_STYLE_ID));
}

#[tokio::test]
async fn highlight_marks_the_page_and_reports_success() {
    let document = page();
    let dispatcher = install(document.clone());

    let response = dispatcher
        .dispatch(Request::new(Action::Highlight), Sender::background())
        .await;

    assert_eq!(response.get("status"), Some(&json!("success")));
    assert_eq!(document.indices_with_class(HIGHLIGHT_CLASS), vec![0, 1]);
    assert!(document.has_stylesheet(HIGHLIGHT_STYLE_ID));
}

#[tokio::test]
async fn count_words_reports_the_visible_word_count() {
    let document = page();
    let dispatcher = install(document.clone());

    let response = dispatcher
        .dispatch(Request::new(Action::CountWords), Sender::background())
        .await;

    // "Welcome" + 6 + 6 words across the three elements.
    assert_eq!(response.get("wordCount"), Some(&json!(13)));
}

#[tokio::test]
async fn count_words_is_deterministic() {
    let dispatcher = install(page());

    let first = dispatcher
        .dispatch(Request::new(Action::CountWords), Sender::background())
        .await;
    let second = dispatcher
        .dispatch(Request::new(Action::CountWords), Sender::background())
        .await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn clear_after_highlight_restores_the_page() {
    let document = page();
    let dispatcher = install(document.clone());

    dispatcher
        .dispatch(Request::new(Action::Highlight), Sender::background())
        .await;
    let response = dispatcher
        .dispatch(Request::new(Action::Clear), Sender::background())
        .await;

    assert_eq!(response.get("status"), Some(&json!("success")));
    assert!(document.indices_with_class(HIGHLIGHT_CLASS).is_empty());
    assert!(!document.has_stylesheet(HIGHLIGHT_STYLE_ID));
}

#[tokio::test]
async fn unknown_action_yields_the_error_marker() {
    let dispatcher = install(page());
    let response = dispatcher
        .dispatch(Request::named("foo"), Sender::background())
        .await;
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"error": "Unknown action"})
    );
}
