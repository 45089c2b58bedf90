//! Page-load bootstrap: loader overlay sequencing and image prefetching.

mod assets;
mod reducer;
mod types;

pub use assets::{AssetCache, NoopAssetCache, RecordingAssetCache};
pub use reducer::{BootstrapEnvironment, BootstrapReducer};
pub use types::{BootstrapAction, BootstrapState, LoaderPhase};
