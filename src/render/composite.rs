//! Sprite compositing onto card templates.
//!
//! The blend is a standard alpha-over: for each pixel of the destination
//! window, `dest = dest * (1 - mask) + sprite * mask`, per channel. A mask
//! weight of 1 replaces the destination pixel with the sprite pixel, 0
//! leaves it untouched, and intermediate weights blend linearly. Applying
//! the operator twice at the same location is not idempotent unless the
//! mask is exactly 0 or 1 everywhere; repeated days in a request really do
//! blend repeatedly.

use crate::error::{Result, StampError};
use crate::types::{Offset, Raster, Sprite, CHANNELS};

/// Blend the sprite into the card at each offset, in sequence.
///
/// Every destination window is validated against the card's extent before
/// the first write: a window that falls outside the card (negative offset,
/// or extending past an edge) fails with `OutOfBounds` and leaves the card
/// untouched. There is no silent clipping. The sprite and mask are never
/// mutated.
pub fn composite(card: &mut Raster, sprite: &Sprite, offsets: &[Offset]) -> Result<()> {
    let (w, h) = sprite.size();

    for offset in offsets {
        if !card.contains_window(offset.dx, offset.dy, w, h) {
            return Err(StampError::OutOfBounds {
                dx: offset.dx,
                dy: offset.dy,
                card_width: card.width(),
                card_height: card.height(),
            });
        }
    }

    for offset in offsets {
        blend_window(card, sprite, offset.dx as u32, offset.dy as u32);
    }

    Ok(())
}

/// Blend one sprite-sized window in place. Bounds already checked.
fn blend_window(card: &mut Raster, sprite: &Sprite, dx: u32, dy: u32) {
    let (w, h) = sprite.size();

    for y in 0..h {
        let src = sprite.pixels().row(y);
        let weights = sprite.mask().row(y);
        let dest = card.row_mut(dy + y);

        for x in 0..w as usize {
            let m = weights[x];
            let pixel = &mut dest[(dx as usize + x) * CHANNELS..][..CHANNELS];
            for c in 0..CHANNELS {
                pixel[c] = pixel[c] * (1.0 - m) + src[x * CHANNELS + c] * m;
            }
        }
    }
}
