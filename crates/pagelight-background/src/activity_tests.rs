use chrono::{TimeZone, Utc};

use pagelight_host_memory::{ManualClock, MemoryStore};

use super::*;

fn log_with_clock() -> (ActivityLog, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::at(
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
    ));
    let log = ActivityLog::new(Arc::new(MemoryStore::new()), clock.clone());
    (log, clock)
}

#[tokio::test]
async fn unseeded_log_reads_empty() {
    let (log, _clock) = log_with_clock();
    assert!(log.recent().await.unwrap().is_empty());
}

#[tokio::test]
async fn append_records_action_timestamp_and_source() {
    let (log, _clock) = log_with_clock();

    log.append("highlight", "https://example.com/").await.unwrap();
    log.append("clear", "background").await.unwrap();

    let entries = log.recent().await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].action, "highlight");
    assert_eq!(entries[0].timestamp, "2024-03-01T09:30:00.000Z");
    assert_eq!(entries[0].url, "https://example.com/");
    assert_eq!(entries[1].action, "clear");
    assert_eq!(entries[1].url, "background");
}

#[tokio::test]
async fn cap_evicts_oldest_first() {
    let (log, clock) = log_with_clock();

    for n in 1..=60 {
        log.append(&format!("action-{n}"), "background").await.unwrap();
        clock.advance(chrono::Duration::seconds(1));
    }

    let entries = log.recent().await.unwrap();
    assert_eq!(entries.len(), MAX_ENTRIES);
    // The 11th through 60th appends survive, in original order.
    assert_eq!(entries[0].action, "action-11");
    assert_eq!(entries[49].action, "action-60");
}

#[tokio::test]
async fn entries_serialize_with_camel_case_fields() {
    let entry = ActivityEntry {
        action: "highlight".to_string(),
        timestamp: "2024-03-01T09:30:00.000Z".to_string(),
        url: "background".to_string(),
    };
    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "action": "highlight",
            "timestamp": "2024-03-01T09:30:00.000Z",
            "url": "background",
        })
    );
}

#[tokio::test]
async fn undecodable_stored_value_reads_as_empty() {
    let store = Arc::new(MemoryStore::new());
    store
        .set(HashMap::from([(
            keys::ACTIVITIES.to_string(),
            serde_json::json!("scrambled"),
        )]))
        .await
        .unwrap();

    let clock = Arc::new(ManualClock::at(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()));
    let log = ActivityLog::new(store, clock);
    assert!(log.recent().await.unwrap().is_empty());
}
