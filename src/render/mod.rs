//! Rendering module for stampcard.
//!
//! This module holds the compositing core (alpha-blending the sprite
//! into a card template) and PNG serialization of the result.

mod composite;
mod png;

pub use composite::composite;
pub use png::{encode_png, write_png, EncodedImage, PNG_MIME};
