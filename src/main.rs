//! Pagelight - page annotation toolkit.
//!
//! Demo entry point: wires the popup, document and background contexts
//! over the in-memory host, walks the install lifecycle, and drives the
//! highlight / count-words / clear flow against a sample page.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use serde_json::json;
use tracing::{info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use pagelight_background::{ActivityLog, BackgroundContext, InstallReason, Lifecycle, MenuRouter};
use pagelight_background::{MENU_COUNT_WORDS, MENU_HIGHLIGHT};
use pagelight_content::dom::{Element, PageDocument, Tag};
use pagelight_content::handlers::ContentScript;
use pagelight_core::{ContextRouter, StoredState};
use pagelight_host_memory::{MemoryMenus, MemoryStore, RecordingNotifications, StaticTabs};
use pagelight_popup::PopupController;
use pagelight_protocols::message::{Action, Request, Sender, TabInfo};
use pagelight_protocols::time::{SystemClock, TokioScheduler};

/// Pagelight demo CLI.
#[derive(Parser)]
#[command(name = "pagelight")]
#[command(about = "Page annotation toolkit with a cross-context message relay")]
#[command(version)]
struct Cli {
    /// Per-element highlight stagger in milliseconds
    #[arg(long, default_value_t = 50)]
    stagger_ms: u64,

    /// Directory for rolling log files (stderr only when unset)
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn init_tracing(log_dir: Option<&PathBuf>) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_dir {
        Some(dir) => {
            let appender = RollingFileAppender::new(Rotation::DAILY, dir, "pagelight.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
            None
        }
    }
}

fn sample_page() -> Vec<Element> {
    vec![
        Element::new(Tag::H1, "Pagelight Demo Page"),
        Element::new(Tag::P, "This sample page stands in for a real document."),
        Element::new(Tag::P, "Each paragraph, heading, list item and table cell gets a mark."),
        Element::new(Tag::Li, "first list item"),
        Element::new(Tag::Li, "second list item"),
        Element::new(Tag::Td, "a table cell"),
        Element::new(Tag::Div, "layout chrome the annotator skips"),
    ]
}

const DEMO_TAB: u32 = 1;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_dir.as_ref());

    // Host services.
    let store = Arc::new(MemoryStore::new());
    let clock = Arc::new(SystemClock);
    let tab = TabInfo::new(DEMO_TAB, "https://example.com/demo", "Pagelight Demo Page");
    let tabs = Arc::new(StaticTabs::with_active(tab.clone()));
    let notifications = Arc::new(RecordingNotifications::new());
    let menu_host = Arc::new(MemoryMenus::new());
    let router = Arc::new(ContextRouter::new());

    // Background context.
    router.install_background(BackgroundContext::install(
        store.clone(),
        clock.clone(),
        tabs.clone(),
    )?);
    let menus = Arc::new(MenuRouter::new(
        menu_host,
        router.clone(),
        notifications.clone(),
    ));
    let lifecycle = Lifecycle::new(
        StoredState::new(store.clone()),
        menus.clone(),
        notifications.clone(),
        clock.clone(),
    );
    lifecycle.on_installed(InstallReason::Install).await?;
    lifecycle.on_startup().await;

    // A page loads and its content script attaches.
    let document = Arc::new(PageDocument::with_elements(sample_page()));
    router.attach_tab(
        DEMO_TAB,
        ContentScript::install_with_stagger(
            document.clone(),
            Arc::new(TokioScheduler),
            Duration::from_millis(cli.stagger_ms),
        )?,
    );

    // Popup session: open, then press the three buttons.
    let popup = PopupController::new(router.clone(), store.clone(), tabs.clone());
    let view = popup.open().await;
    info!(url = %view.current_url, clicks = view.click_count, "popup opened");

    let view = popup.highlight().await;
    report("highlight", &view);
    info!(marked = document.indices_with_class("pagelight-highlight").len(), "page state");

    let view = popup.count_words().await;
    report("count words", &view);

    let view = popup.clear().await;
    report("clear", &view);

    // Context-menu path: count words from the page's right-click menu.
    menus.handle_click(MENU_COUNT_WORDS, &tab).await?;
    menus.handle_click(MENU_HIGHLIGHT, &tab).await?;

    // Record the demo run in the activity log, then show what an
    // unrecognized action looks like.
    let logged = router
        .send_to_background(
            Request::new(Action::LogActivity).with_data(json!({"action": "demo-complete"})),
            Sender::from_tab(tab),
        )
        .await?;
    info!(?logged, "activity recorded");

    let rejected = router
        .send_to_background(Request::named("foo"), Sender::background())
        .await?;
    warn!(response = %serde_json::to_string(&rejected)?, "unrecognized action rejected");

    // Final state.
    let activity = ActivityLog::new(store.clone(), clock);
    for entry in activity.recent().await? {
        info!(action = %entry.action, at = %entry.timestamp, from = %entry.url, "activity");
    }
    let clicks = StoredState::new(store).click_count().await?;
    for (title, message) in notifications.shown() {
        info!(title, message, "notification shown");
    }
    info!(clicks, "demo complete");

    Ok(())
}

fn report(button: &str, view: &pagelight_popup::PopupView) {
    match &view.result {
        Some(card) => info!(
            button,
            clicks = view.click_count,
            result = %format!("{}: {}", card.title, card.message),
            "popup press"
        ),
        None => info!(button, clicks = view.click_count, "popup press"),
    }
}
