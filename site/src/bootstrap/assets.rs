//! Asset cache collaborator boundary.
//!
//! Prefetching warms the browser cache for images the page will need soon.
//! The operation is fire-and-forget; a failed prefetch costs nothing but the
//! warm cache.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

/// Abstraction over the shell's asset cache
pub trait AssetCache: Send + Sync {
    /// Request that an asset be fetched into cache
    fn prefetch(&self, url: &str) -> Pin<Box<dyn Future<Output = ()> + Send>>;
}

/// Asset cache that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAssetCache;

impl AssetCache for NoopAssetCache {
    fn prefetch(&self, _url: &str) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        Box::pin(async {})
    }
}

/// Asset cache test double that records requested URLs
#[derive(Debug, Clone, Default)]
pub struct RecordingAssetCache {
    requested: Arc<Mutex<Vec<String>>>,
}

impl RecordingAssetCache {
    /// Creates a new recording asset cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs requested so far, in request order
    #[must_use]
    pub fn requested(&self) -> Vec<String> {
        self.requested
            .lock()
            .map(|urls| urls.clone())
            .unwrap_or_default()
    }
}

impl AssetCache for RecordingAssetCache {
    fn prefetch(&self, url: &str) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        let requested = Arc::clone(&self.requested);
        let url = url.to_string();
        Box::pin(async move {
            if let Ok(mut urls) = requested.lock() {
                urls.push(url);
            }
        })
    }
}
