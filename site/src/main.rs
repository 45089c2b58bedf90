//! Headless demo of the site interactivity core.
//!
//! Walks the page through its main flows — load, scroll, ticket purchase,
//! form submissions — and prints the state the shell would render. Timings
//! are shortened so the walkthrough finishes quickly.

use stagepass_runtime::{Debouncer, Store};
use stagepass_site::app::{SiteAction, SiteEnvironment, SiteReducer, SiteState};
use stagepass_site::bootstrap::BootstrapAction;
use stagepass_site::catalog::TicketType;
use stagepass_site::chrome::ChromeAction;
use stagepass_site::config::SiteConfig;
use stagepass_site::forms::FormsAction;
use stagepass_site::purchase::{ContactDetails, PurchaseAction};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stagepass_site=info,stagepass_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Stagepass Site Demo ===\n");

    // Shorten the shipped timings so the demo doesn't idle
    let mut config = SiteConfig::from_env();
    config.loader.dwell_ms = 200;
    config.loader.fade_ms = 100;
    config.notifications.enter_ms = 20;
    config.notifications.hold_ms = 400;
    config.notifications.exit_ms = 50;

    let env = SiteEnvironment::production(&config);
    let store = Store::new(SiteState::default(), SiteReducer::new(), env);

    // Page load: loader sequencing + image prefetch
    println!(">>> Page loaded");
    store.send(SiteAction::Bootstrap(BootstrapAction::PageLoaded)).await?;
    store.settled(Duration::from_secs(5)).await?;
    let loader = store.state(|s| s.bootstrap.loader).await;
    println!("Loader phase: {loader:?}");

    // A burst of scroll events, debounced to the trailing position
    println!("\n>>> Scrolling to 640");
    let debouncer = Debouncer::new(config.scroll.debounce());
    for y in [40, 180, 420, 640] {
        debouncer.send(&store, SiteAction::Chrome(ChromeAction::ScrollChanged { y }));
    }
    tokio::time::sleep(Duration::from_millis(100)).await;
    let chrome = store.state(|s| s.chrome.clone()).await;
    println!(
        "Header condensed: {}, back-to-top visible: {}",
        chrome.header_condensed, chrome.back_to_top_visible
    );

    // The purchase flow
    println!("\n>>> Opening purchase modal for the festival pass");
    store
        .send(SiteAction::Purchase(PurchaseAction::OpenFor {
            ticket_type: TicketType::Festival,
        }))
        .await?;
    print_selection(&store).await;

    println!("\n>>> Setting quantity to 3");
    store
        .send(SiteAction::Purchase(PurchaseAction::SetQuantity { requested: 3 }))
        .await?;
    print_selection(&store).await;

    println!("\n>>> Submitting without a name");
    store
        .send(SiteAction::Purchase(PurchaseAction::Submit {
            details: ContactDetails {
                full_name: String::new(),
                email: "fan@festival.example".to_string(),
                phone: "555 0101".to_string(),
            },
        }))
        .await?;
    print_notifications(&store).await;

    println!("\n>>> Submitting with complete details");
    store
        .send(SiteAction::Purchase(PurchaseAction::Submit {
            details: ContactDetails {
                full_name: "Alex Fan".to_string(),
                email: "fan@festival.example".to_string(),
                phone: "555 0101".to_string(),
            },
        }))
        .await?;
    let open = store.state(|s| s.purchase.is_open()).await;
    println!("Modal open after purchase: {open}");
    print_notifications(&store).await;

    // Forms
    println!("\n>>> Subscribing to the newsletter");
    store
        .send(SiteAction::Forms(FormsAction::SubmitNewsletter {
            email: "fan@festival.example".to_string(),
        }))
        .await?;
    print_notifications(&store).await;

    // Let the notification timers run out
    store.settled(Duration::from_secs(10)).await?;
    let remaining = store.state(|s| s.notifications.len()).await;
    println!("\nNotifications after auto-dismissal: {remaining}");

    store.shutdown(Duration::from_secs(5)).await?;
    println!("\n=== Demo Complete ===");
    Ok(())
}

async fn print_selection(
    store: &Store<SiteState, SiteAction, SiteEnvironment, SiteReducer>,
) {
    let selection = store.state(|s| s.purchase.selection().cloned()).await;
    match selection {
        Some(selection) => println!(
            "Selection: {} x{} = {}",
            selection.display_name(),
            selection.quantity(),
            selection.total()
        ),
        None => println!("Selection: none (modal closed)"),
    }
}

async fn print_notifications(
    store: &Store<SiteState, SiteAction, SiteEnvironment, SiteReducer>,
) {
    let notifications = store
        .state(|s| {
            s.notifications
                .active()
                .iter()
                .map(|n| format!("[{}] {}", n.severity, n.message))
                .collect::<Vec<_>>()
        })
        .await;
    for line in notifications {
        println!("  {line}");
    }
}
