use serde_json::json;

use super::*;

#[test]
fn action_wire_names_round_trip() {
    for action in Action::ALL {
        assert_eq!(Action::parse(action.as_str()), Some(action));
    }
    assert_eq!(Action::parse("foo"), None);
    assert_eq!(Action::parse("COUNTWORDS"), None);
}

#[test]
fn action_serde_uses_camel_case() {
    let value = serde_json::to_value(Action::CountWords).unwrap();
    assert_eq!(value, json!("countWords"));
    let back: Action = serde_json::from_value(json!("getTabInfo")).unwrap();
    assert_eq!(back, Action::GetTabInfo);
}

#[test]
fn request_carries_action_and_payload() {
    let request = Request::new(Action::LogActivity).with_data(json!({"action": "highlight"}));
    assert_eq!(request.action, "logActivity");
    assert_eq!(request.action(), Some(Action::LogActivity));
    assert_eq!(request.data, Some(json!({"action": "highlight"})));
    assert!(!request.id.is_empty());
}

#[test]
fn unrecognized_request_has_no_action() {
    let request = Request::named("foo");
    assert_eq!(request.action(), None);
}

#[test]
fn request_ids_are_unique() {
    let a = Request::new(Action::Highlight);
    let b = Request::new(Action::Highlight);
    assert_ne!(a.id, b.id);
}

#[test]
fn unknown_action_response_serializes_to_error_marker() {
    let response = Response::unknown_action();
    assert!(response.is_error());
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"error": "Unknown action"})
    );
}

#[test]
fn success_response_exposes_payload_fields() {
    let response = Response::success(json!({"wordCount": 42}));
    assert!(!response.is_error());
    assert_eq!(response.get("wordCount"), Some(&json!(42)));
    assert_eq!(response.get("missing"), None);
}

#[test]
fn error_response_hides_payload_fields() {
    let response = Response::error("boom");
    assert_eq!(response.get("wordCount"), None);
}

#[test]
fn response_deserializes_error_marker_as_failure() {
    let response: Response = serde_json::from_value(json!({"error": "nope"})).unwrap();
    assert_eq!(response, Response::error("nope"));
}

#[test]
fn sender_source_url_falls_back_to_background() {
    assert_eq!(Sender::background().source_url(), "background");

    let sender = Sender::from_tab(TabInfo::new(7, "https://example.com/", "Example"));
    assert_eq!(sender.source_url(), "https://example.com/");
}
