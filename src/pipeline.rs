//! The request pipeline: validate, load, composite, encode.
//!
//! One request is one synchronous pass with no internal suspension points
//! and no retries; any failure aborts immediately with no partial output.
//! Both the CLI and the HTTP handler run through this module.

use std::collections::HashMap;

use tracing::debug;

use crate::assets::{AssetStore, PositionDirectory};
use crate::error::Result;
use crate::render::{composite, encode_png, EncodedImage};
use crate::types::{Raster, StampRequest};

/// Compose the stamp card for an already validated request.
///
/// Loads the period's template and position map, resolves every requested
/// day to an offset (failing before any blending if one is missing), and
/// blends the shared sprite at each offset in request order.
pub fn render_stamp_card(
    assets: &AssetStore,
    positions: &PositionDirectory,
    request: &StampRequest,
) -> Result<Raster> {
    let period = request.period();

    let mut card = assets.load_card(period)?;
    let sprite = assets.sprite()?;
    let map = positions.load(period)?;
    let offsets = map.resolve(&request.days)?;

    debug!(period = %period, days = request.days.len(), "compositing stamp card");
    composite(&mut card, &sprite, &offsets)?;

    Ok(card)
}

/// Full pipeline from raw request parameters to encoded PNG bytes.
///
/// Parameters are validated before any asset I/O is attempted.
pub fn handle(
    assets: &AssetStore,
    positions: &PositionDirectory,
    params: Option<&HashMap<String, String>>,
) -> Result<EncodedImage> {
    let request = StampRequest::from_params(params)?;
    let card = render_stamp_card(assets, positions, &request)?;
    encode_png(&card)
}
