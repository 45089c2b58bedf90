//! Viewport collaborator boundary.
//!
//! The markup/styling collaborator exposes the few operations the core needs:
//! programmatic scrolling, background scroll locking while the modal is open,
//! revealing elements, and layout queries for anchor positions. The core
//! assumes each named hook exists exactly once in the page.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Abstraction over the page the core drives
pub trait Viewport: Send + Sync {
    /// Scroll the page to a vertical position
    fn scroll_to(&self, y: u64);

    /// Lock or unlock background scrolling (used while the modal is open)
    fn set_scroll_lock(&self, locked: bool);

    /// Run the reveal transition for a named element
    fn reveal(&self, element: &str);

    /// Top offset of a named in-page anchor, if it exists
    fn offset_of(&self, anchor: &str) -> Option<u64>;

    /// Height of the fixed header, subtracted from anchor scroll targets
    fn header_height(&self) -> u64;
}

/// Viewport that does nothing
///
/// Stands in wherever no real page is attached (headless runs, the demo
/// binary). Layout queries report an empty page.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopViewport;

impl Viewport for NoopViewport {
    fn scroll_to(&self, _y: u64) {}

    fn set_scroll_lock(&self, _locked: bool) {}

    fn reveal(&self, _element: &str) {}

    fn offset_of(&self, _anchor: &str) -> Option<u64> {
        None
    }

    fn header_height(&self) -> u64 {
        0
    }
}

/// A command the core issued to the viewport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewportCommand {
    /// `scroll_to(y)`
    ScrollTo(u64),
    /// `set_scroll_lock(locked)`
    ScrollLock(bool),
    /// `reveal(element)`
    Reveal(String),
}

/// Viewport test double with a fixed layout and a command log
///
/// Configure anchors and header height up front, then assert on the recorded
/// commands.
#[derive(Debug, Clone, Default)]
pub struct RecordingViewport {
    header_height: u64,
    anchors: HashMap<String, u64>,
    commands: Arc<Mutex<Vec<ViewportCommand>>>,
}

impl RecordingViewport {
    /// Creates a recording viewport with an empty layout
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fixed header height
    #[must_use]
    pub const fn with_header_height(mut self, height: u64) -> Self {
        self.header_height = height;
        self
    }

    /// Adds a named anchor at the given top offset
    #[must_use]
    pub fn with_anchor(mut self, anchor: impl Into<String>, offset: u64) -> Self {
        self.anchors.insert(anchor.into(), offset);
        self
    }

    /// Commands issued so far, in order
    #[must_use]
    pub fn commands(&self) -> Vec<ViewportCommand> {
        self.commands
            .lock()
            .map(|commands| commands.clone())
            .unwrap_or_default()
    }

    fn record(&self, command: ViewportCommand) {
        if let Ok(mut commands) = self.commands.lock() {
            commands.push(command);
        }
    }
}

impl Viewport for RecordingViewport {
    fn scroll_to(&self, y: u64) {
        self.record(ViewportCommand::ScrollTo(y));
    }

    fn set_scroll_lock(&self, locked: bool) {
        self.record(ViewportCommand::ScrollLock(locked));
    }

    fn reveal(&self, element: &str) {
        self.record(ViewportCommand::Reveal(element.to_string()));
    }

    fn offset_of(&self, anchor: &str) -> Option<u64> {
        self.anchors.get(anchor).copied()
    }

    fn header_height(&self) -> u64 {
        self.header_height
    }
}
