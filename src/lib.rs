//! stampcard - monthly stamp-card rendering
//!
//! A library for composing a shared sprite onto per-month card templates
//! at day-specific pixel offsets, plus the CLI and HTTP boundary around
//! the pipeline.

pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod serve;
pub mod types;
pub mod validation;

pub use assets::{scan_assets, AssetStore, PositionDirectory, ScanResult, SPRITE_FILENAME};
pub use config::{Config, CONFIG_FILENAME};
pub use error::{Result, StampError};
pub use pipeline::{handle, render_stamp_card};
pub use render::{composite, encode_png, write_png, EncodedImage, PNG_MIME};
pub use serve::{build_router, AppState, StampServer};
pub use types::{
    parse_days, AlphaMask, Offset, Period, PositionMap, Raster, Sprite, StampRequest, CHANNELS,
};
pub use validation::{validate_assets, Diagnostic, Severity, ValidationResult};
