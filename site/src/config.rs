//! Configuration for the site interactivity layer.
//!
//! Defaults reproduce the site's shipped behavior; deployments override
//! individual values through environment variables. The ticket catalog lives
//! here so that price and naming changes stay configuration edits.

use crate::catalog::{CatalogEntry, TicketCatalog};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Ticket pricing table entries
    pub catalog: Vec<CatalogEntry>,
    /// Notification presentation timing
    pub notifications: NotificationTiming,
    /// Page loader sequencing
    pub loader: LoaderTiming,
    /// Scroll treatment thresholds and rate limiting
    pub scroll: ScrollConfig,
    /// Images to prefetch at page load
    pub preload_images: Vec<String>,
}

/// Timing for the notification enter/hold/exit sequence
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NotificationTiming {
    /// Delay before the slide-in transition settles
    pub enter_ms: u64,
    /// How long a notification stays fully visible
    pub hold_ms: u64,
    /// Duration of the slide-out transition
    pub exit_ms: u64,
}

impl NotificationTiming {
    /// Entrance delay as a `Duration`
    #[must_use]
    pub const fn enter(&self) -> Duration {
        Duration::from_millis(self.enter_ms)
    }

    /// Hold window as a `Duration`
    #[must_use]
    pub const fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }

    /// Exit transition as a `Duration`
    #[must_use]
    pub const fn exit(&self) -> Duration {
        Duration::from_millis(self.exit_ms)
    }
}

impl Default for NotificationTiming {
    fn default() -> Self {
        Self {
            enter_ms: 100,
            hold_ms: 5000,
            exit_ms: 300,
        }
    }
}

/// Timing for the page loader overlay
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LoaderTiming {
    /// How long the loader stays fully opaque after load
    pub dwell_ms: u64,
    /// Duration of the fade-out before the loader is removed
    pub fade_ms: u64,
}

impl LoaderTiming {
    /// Dwell window as a `Duration`
    #[must_use]
    pub const fn dwell(&self) -> Duration {
        Duration::from_millis(self.dwell_ms)
    }

    /// Fade-out as a `Duration`
    #[must_use]
    pub const fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }
}

impl Default for LoaderTiming {
    fn default() -> Self {
        Self {
            dwell_ms: 1000,
            fade_ms: 500,
        }
    }
}

/// Scroll-position thresholds and event rate limiting
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Scroll depth past which the header gets its condensed treatment
    pub header_threshold: u64,
    /// Scroll depth past which the back-to-top control is shown
    pub back_to_top_threshold: u64,
    /// Quiet period for the trailing-edge scroll debounce
    pub debounce_ms: u64,
}

impl ScrollConfig {
    /// Debounce quiet period as a `Duration`
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_threshold: 100,
            back_to_top_threshold: 500,
            debounce_ms: 16,
        }
    }
}

impl SiteConfig {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset
    ///
    /// Recognized variables: `STAGEPASS_NOTIFICATION_HOLD_MS`,
    /// `STAGEPASS_LOADER_DWELL_MS`, `STAGEPASS_SCROLL_DEBOUNCE_MS`.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(hold_ms) = parse_env("STAGEPASS_NOTIFICATION_HOLD_MS") {
            config.notifications.hold_ms = hold_ms;
        }
        if let Some(dwell_ms) = parse_env("STAGEPASS_LOADER_DWELL_MS") {
            config.loader.dwell_ms = dwell_ms;
        }
        if let Some(debounce_ms) = parse_env("STAGEPASS_SCROLL_DEBOUNCE_MS") {
            config.scroll.debounce_ms = debounce_ms;
        }

        config
    }

    /// Builds the immutable pricing table from the configured entries
    #[must_use]
    pub fn ticket_catalog(&self) -> TicketCatalog {
        TicketCatalog::new(self.catalog.clone())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            catalog: TicketCatalog::default().iter().cloned().collect(),
            notifications: NotificationTiming::default(),
            loader: LoaderTiming::default(),
            scroll: ScrollConfig::default(),
            preload_images: vec![
                "https://images.pexels.com/photos/1540406/pexels-photo-1540406.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
                "https://images.pexels.com/photos/1105666/pexels-photo-1105666.jpeg?auto=compress&cs=tinysrgb&w=400".to_string(),
                "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=400".to_string(),
                "https://images.pexels.com/photos/1708936/pexels-photo-1708936.jpeg?auto=compress&cs=tinysrgb&w=400".to_string(),
                "https://images.pexels.com/photos/1181490/pexels-photo-1181490.jpeg?auto=compress&cs=tinysrgb&w=400".to_string(),
                "https://images.pexels.com/photos/378570/pexels-photo-378570.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            ],
        }
    }
}

fn parse_env(name: &str) -> Option<u64> {
    env::var(name).ok().and_then(|value| value.parse().ok())
}
