//! Asset store - card templates and the shared sprite.
//!
//! Card templates are loaded fresh per request and owned by that request.
//! The sprite is immutable after load and may be shared across requests
//! through `sprite()`, which caches the first successful load for the
//! lifetime of the store (initialize-once, read-many).

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use crate::error::{Result, StampError};
use crate::types::{Period, Raster, Sprite};

/// Filename of the shared sprite, independent of year/month.
pub const SPRITE_FILENAME: &str = "sprite.png";

/// Loads card templates and the sprite from an asset directory.
#[derive(Debug)]
pub struct AssetStore {
    root: PathBuf,
    sprite: OnceLock<Arc<Sprite>>,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            sprite: OnceLock::new(),
        }
    }

    /// The asset directory this store reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a period's card template.
    pub fn card_path(&self, period: Period) -> PathBuf {
        self.root.join(period.card_filename())
    }

    /// Path of the shared sprite.
    pub fn sprite_path(&self) -> PathBuf {
        self.root.join(SPRITE_FILENAME)
    }

    /// Load the card template for a period.
    ///
    /// A period with no stored template, or a template that cannot be
    /// decoded, fails with `AssetNotFound`.
    pub fn load_card(&self, period: Period) -> Result<Raster> {
        let path = self.card_path(period);
        let img = image::open(&path).map_err(|e| StampError::AssetNotFound {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Ok(Raster::from_rgb8(&img.to_rgb8()))
    }

    /// Load the shared sprite and its alpha mask.
    ///
    /// Fails with `AssetNotFound` when the file is absent and
    /// `AssetCorrupt` when it decodes without an alpha channel.
    pub fn load_sprite(&self) -> Result<Sprite> {
        let path = self.sprite_path();
        let img = image::open(&path).map_err(|e| match e {
            image::ImageError::IoError(io) => StampError::AssetNotFound {
                path: path.clone(),
                message: io.to_string(),
            },
            other => StampError::AssetCorrupt {
                path: path.clone(),
                message: other.to_string(),
            },
        })?;

        if !img.color().has_alpha() {
            return Err(StampError::AssetCorrupt {
                path,
                message: "sprite has no alpha channel".to_string(),
            });
        }

        Ok(Sprite::from_rgba8(&img.to_rgba8()))
    }

    /// Shared sprite accessor with initialize-once semantics.
    ///
    /// The first successful load is cached for the store's lifetime and
    /// never mutated afterwards. Concurrent first calls may each load, but
    /// all observe the same winning value. A failed load caches nothing,
    /// so the next call retries.
    pub fn sprite(&self) -> Result<Arc<Sprite>> {
        if let Some(sprite) = self.sprite.get() {
            return Ok(Arc::clone(sprite));
        }
        let loaded = Arc::new(self.load_sprite()?);
        Ok(Arc::clone(self.sprite.get_or_init(|| loaded)))
    }
}
