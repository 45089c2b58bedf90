//! End-to-end purchase flow through the Store.
//!
//! Drives the site store the way the browser shell would and observes both
//! state and collaborator calls.

#![allow(clippy::unwrap_used)]

use stagepass_runtime::Store;
use stagepass_site::app::{SiteAction, SiteEnvironment, SiteReducer, SiteState};
use stagepass_site::bootstrap::RecordingAssetCache;
use stagepass_site::catalog::{Price, TicketType};
use stagepass_site::chrome::{RecordingViewport, ViewportCommand};
use stagepass_site::config::SiteConfig;
use stagepass_site::notifications::Severity;
use stagepass_site::purchase::{ContactDetails, PurchaseAction, RecordingOrderProcessor};
use stagepass_testing::test_clock;
use std::sync::Arc;
use std::time::Duration;

struct Harness {
    store: Store<SiteState, SiteAction, SiteEnvironment, SiteReducer>,
    processor: RecordingOrderProcessor,
    viewport: RecordingViewport,
}

fn harness() -> Harness {
    // Short timings keep the notification cascade from dominating the test
    let mut config = SiteConfig::default();
    config.notifications.enter_ms = 5;
    config.notifications.hold_ms = 20;
    config.notifications.exit_ms = 5;

    let processor = RecordingOrderProcessor::new();
    let viewport = RecordingViewport::new();

    let env = SiteEnvironment::new(
        &config,
        Arc::new(test_clock()),
        Arc::new(processor.clone()),
        Arc::new(viewport.clone()),
        Arc::new(RecordingAssetCache::new()),
    );

    Harness {
        store: Store::new(SiteState::default(), SiteReducer::new(), env),
        processor,
        viewport,
    }
}

fn details(name: &str, email: &str, phone: &str) -> ContactDetails {
    ContactDetails {
        full_name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
    }
}

#[tokio::test]
async fn opening_festival_derives_the_unit_total() {
    let h = harness();

    h.store
        .send(SiteAction::Purchase(PurchaseAction::OpenFor {
            ticket_type: TicketType::Festival,
        }))
        .await
        .unwrap();

    let selection = h.store.state(|s| s.purchase.selection().cloned()).await.unwrap();
    assert_eq!(selection.total(), Price::from_units(199));

    h.store
        .send(SiteAction::Purchase(PurchaseAction::SetQuantity { requested: 3 }))
        .await
        .unwrap();

    let selection = h.store.state(|s| s.purchase.selection().cloned()).await.unwrap();
    assert_eq!(selection.total(), Price::from_units(597));
}

#[tokio::test]
async fn successful_purchase_notifies_closes_and_hands_off() {
    let h = harness();

    h.store
        .send(SiteAction::Purchase(PurchaseAction::OpenFor {
            ticket_type: TicketType::Vip,
        }))
        .await
        .unwrap();
    h.store
        .send(SiteAction::Purchase(PurchaseAction::SetQuantity { requested: 2 }))
        .await
        .unwrap();
    h.store
        .send(SiteAction::Purchase(PurchaseAction::Submit {
            details: details("A B", "a@b.com", "123"),
        }))
        .await
        .unwrap();

    // Success is shown synchronously and the session is gone
    let (open, severities) = h
        .store
        .state(|s| {
            (
                s.purchase.is_open(),
                s.notifications
                    .active()
                    .iter()
                    .map(|n| n.severity)
                    .collect::<Vec<_>>(),
            )
        })
        .await;
    assert!(!open);
    assert_eq!(severities, vec![Severity::Success]);

    h.store.settled(Duration::from_secs(5)).await.unwrap();

    // The hand-off carried the derived total
    let submitted = h.processor.submitted();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].ticket_type, TicketType::Vip);
    assert_eq!(submitted[0].quantity, 2);
    assert_eq!(submitted[0].total, Price::from_units(798));

    // Background scroll was locked for the session and released after it
    let locks: Vec<_> = h
        .viewport
        .commands()
        .into_iter()
        .filter(|c| matches!(c, ViewportCommand::ScrollLock(_)))
        .collect();
    assert_eq!(
        locks,
        vec![ViewportCommand::ScrollLock(true), ViewportCommand::ScrollLock(false)]
    );
}

#[tokio::test]
async fn rejected_submission_keeps_the_session_for_retry() {
    let h = harness();

    h.store
        .send(SiteAction::Purchase(PurchaseAction::OpenFor {
            ticket_type: TicketType::Single,
        }))
        .await
        .unwrap();
    h.store
        .send(SiteAction::Purchase(PurchaseAction::SetQuantity { requested: 2 }))
        .await
        .unwrap();

    // Empty name AND bad email: the missing-field check wins
    h.store
        .send(SiteAction::Purchase(PurchaseAction::Submit {
            details: details("", "x@y", "1"),
        }))
        .await
        .unwrap();

    let (open, quantity, messages) = h
        .store
        .state(|s| {
            (
                s.purchase.is_open(),
                s.purchase.selection().map(|sel| sel.quantity().get()),
                s.notifications
                    .active()
                    .iter()
                    .map(|n| n.message.clone())
                    .collect::<Vec<_>>(),
            )
        })
        .await;
    assert!(open);
    assert_eq!(quantity, Some(2));
    assert_eq!(messages, vec!["Please fill in all required fields".to_string()]);

    h.store.settled(Duration::from_secs(5)).await.unwrap();
    assert!(h.processor.submitted().is_empty());
}

#[tokio::test]
async fn cancel_then_reopen_starts_from_scratch() {
    let h = harness();

    h.store
        .send(SiteAction::Purchase(PurchaseAction::OpenFor {
            ticket_type: TicketType::Festival,
        }))
        .await
        .unwrap();
    h.store
        .send(SiteAction::Purchase(PurchaseAction::SetQuantity { requested: 4 }))
        .await
        .unwrap();
    h.store
        .send(SiteAction::Purchase(PurchaseAction::Cancel))
        .await
        .unwrap();

    assert!(!h.store.state(|s| s.purchase.is_open()).await);

    // Cancelling again is a quiet no-op
    h.store
        .send(SiteAction::Purchase(PurchaseAction::Cancel))
        .await
        .unwrap();
    assert!(!h.store.state(|s| s.purchase.is_open()).await);

    h.store
        .send(SiteAction::Purchase(PurchaseAction::OpenFor {
            ticket_type: TicketType::Single,
        }))
        .await
        .unwrap();

    let selection = h.store.state(|s| s.purchase.selection().cloned()).await.unwrap();
    assert_eq!(selection.ticket_type(), TicketType::Single);
    assert_eq!(selection.quantity().get(), 1);
    assert_eq!(selection.total(), Price::from_units(89));

    h.store.settled(Duration::from_secs(5)).await.unwrap();
}
