//! Core domain types for stampcard.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Raster` - per-pixel channel intensity grids (card templates)
//! - `Sprite` / `AlphaMask` - the shared overlay graphic and its blend weights
//! - `PositionMap` / `Offset` - day to pixel-offset tables
//! - `StampRequest` / `Period` - validated request parameters

mod mask;
mod position;
mod raster;
mod request;
mod sprite;

pub use mask::AlphaMask;
pub use position::{Offset, PositionMap};
pub use raster::{Raster, CHANNELS};
pub use request::{parse_days, Period, StampRequest};
pub use sprite::Sprite;
