//! # Stagepass Site
//!
//! Interactivity core for a promotional event website, expressed as explicit
//! state machines over the Stagepass reducer architecture.
//!
//! The browser shell this crate targets is thin: it forwards DOM events as
//! actions and binds state fields back to markup. Everything with behavior
//! lives here, testable without a UI:
//!
//! - **`purchase`** — the ticket purchase flow: modal session, ticket
//!   type/quantity selection, derived total, validated submission, and the
//!   fire-and-forget hand-off to the order processor. This is the core of the
//!   crate.
//! - **`notifications`** — transient, auto-dismissing user messages driven by
//!   timer effects.
//! - **`chrome`** — navigation menu toggle, scroll-position treatments,
//!   smooth scrolling, reveal-on-first-sight animations.
//! - **`forms`** — contact and newsletter submissions with local validation.
//! - **`bootstrap`** — page-load loader sequencing and image prefetching.
//! - **`catalog`** — the static ticket pricing table.
//! - **`app`** — site-level composition of the features above into one store.
//!
//! ## Example
//!
//! ```ignore
//! use stagepass_runtime::Store;
//! use stagepass_site::app::{SiteAction, SiteEnvironment, SiteReducer, SiteState};
//! use stagepass_site::purchase::PurchaseAction;
//! use stagepass_site::catalog::TicketType;
//!
//! let env = SiteEnvironment::production(SiteConfig::default());
//! let store = Store::new(SiteState::default(), SiteReducer::new(), env);
//!
//! store.send(SiteAction::Purchase(PurchaseAction::OpenFor {
//!     ticket_type: TicketType::Festival,
//! })).await?;
//! ```

pub mod app;
pub mod bootstrap;
pub mod catalog;
pub mod chrome;
pub mod config;
pub mod forms;
pub mod notifications;
pub mod purchase;
pub mod validation;

pub use app::{SiteAction, SiteEnvironment, SiteReducer, SiteState};
pub use config::SiteConfig;
