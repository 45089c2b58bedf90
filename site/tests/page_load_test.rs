//! Page load sequencing and chrome behavior through the Store.

#![allow(clippy::unwrap_used)]

use stagepass_runtime::{Debouncer, Store};
use stagepass_site::app::{SiteAction, SiteEnvironment, SiteReducer, SiteState};
use stagepass_site::bootstrap::{BootstrapAction, LoaderPhase, RecordingAssetCache};
use stagepass_site::chrome::{ChromeAction, RecordingViewport, ViewportCommand};
use stagepass_site::config::SiteConfig;
use stagepass_site::purchase::RecordingOrderProcessor;
use stagepass_testing::test_clock;
use std::sync::Arc;
use std::time::Duration;

struct Harness {
    store: Store<SiteState, SiteAction, SiteEnvironment, SiteReducer>,
    assets: RecordingAssetCache,
    viewport: RecordingViewport,
}

fn harness(viewport: RecordingViewport) -> Harness {
    let mut config = SiteConfig::default();
    config.loader.dwell_ms = 10;
    config.loader.fade_ms = 5;
    config.preload_images = vec![
        "https://cdn.example/hero.jpeg".to_string(),
        "https://cdn.example/lineup.jpeg".to_string(),
        "https://cdn.example/tickets.jpeg".to_string(),
    ];

    let assets = RecordingAssetCache::new();
    let env = SiteEnvironment::new(
        &config,
        Arc::new(test_clock()),
        Arc::new(RecordingOrderProcessor::new()),
        Arc::new(viewport.clone()),
        Arc::new(assets.clone()),
    );

    Harness {
        store: Store::new(SiteState::default(), SiteReducer::new(), env),
        assets,
        viewport,
    }
}

#[tokio::test]
async fn page_load_hides_the_loader_and_prefetches_images() {
    let h = harness(RecordingViewport::new());

    h.store
        .send(SiteAction::Bootstrap(BootstrapAction::PageLoaded))
        .await
        .unwrap();

    // The loader holds while the dwell timer runs
    let phase = h.store.state(|s| s.bootstrap.loader).await;
    assert_eq!(phase, LoaderPhase::Covering);

    h.store.settled(Duration::from_secs(5)).await.unwrap();

    let phase = h.store.state(|s| s.bootstrap.loader).await;
    assert_eq!(phase, LoaderPhase::Hidden);

    let mut requested = h.assets.requested();
    requested.sort();
    assert_eq!(requested.len(), 3);
    assert!(requested[0].contains("hero"));
}

#[tokio::test]
async fn debounced_scroll_burst_lands_on_the_trailing_position() {
    let h = harness(RecordingViewport::new());
    let debouncer = Debouncer::new(Duration::from_millis(15));

    for y in [30, 90, 250, 520] {
        debouncer.send(&h.store, SiteAction::Chrome(ChromeAction::ScrollChanged { y }));
    }

    tokio::time::sleep(Duration::from_millis(60)).await;

    let chrome = h.store.state(|s| s.chrome.clone()).await;
    assert_eq!(chrome.scroll_y, 520);
    assert!(chrome.header_condensed);
    assert!(chrome.back_to_top_visible);
    assert_eq!(chrome.hero_parallax, 260);
}

#[tokio::test]
async fn anchor_navigation_scrolls_below_the_fixed_header() {
    let h = harness(
        RecordingViewport::new()
            .with_header_height(80)
            .with_anchor("tickets", 2000),
    );

    h.store
        .send(SiteAction::Chrome(ChromeAction::ToggleMenu))
        .await
        .unwrap();
    h.store
        .send(SiteAction::Chrome(ChromeAction::AnchorClicked {
            anchor: "tickets".to_string(),
        }))
        .await
        .unwrap();
    h.store.settled(Duration::from_secs(5)).await.unwrap();

    // Menu closed and the page scrolled to the offset minus the header
    assert!(!h.store.state(|s| s.chrome.menu_open).await);
    assert_eq!(h.viewport.commands(), vec![ViewportCommand::ScrollTo(1920)]);
}

#[tokio::test]
async fn back_to_top_scrolls_home_and_reveals_fire_once() {
    let h = harness(RecordingViewport::new());

    h.store
        .send(SiteAction::Chrome(ChromeAction::BackToTop))
        .await
        .unwrap();
    h.store
        .send(SiteAction::Chrome(ChromeAction::ElementSeen {
            element: "lineup".to_string(),
        }))
        .await
        .unwrap();
    h.store
        .send(SiteAction::Chrome(ChromeAction::ElementSeen {
            element: "lineup".to_string(),
        }))
        .await
        .unwrap();
    h.store.settled(Duration::from_secs(5)).await.unwrap();

    assert_eq!(
        h.viewport.commands(),
        vec![
            ViewportCommand::ScrollTo(0),
            ViewportCommand::Reveal("lineup".to_string()),
        ]
    );
}
