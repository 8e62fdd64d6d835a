//! Asset loading for stampcard.
//!
//! This module reads the persisted asset layout: one card template and
//! one position file per (year, month) period, plus a single shared
//! sprite. All of it is read-only from the pipeline's perspective.

mod positions;
mod scanner;
mod store;

pub use positions::PositionDirectory;
pub use scanner::{scan_assets, ScanResult};
pub use store::{AssetStore, SPRITE_FILENAME};
