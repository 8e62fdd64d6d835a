//! Render command implementation.
//!
//! Composes one stamp card from the local asset directory and writes it
//! to a PNG file, going through the same strict validation and pipeline
//! as the service path.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::assets::{AssetStore, PositionDirectory};
use crate::config::Config;
use crate::error::{Result, StampError};
use crate::output::{display_path, plural, Printer};
use crate::pipeline::render_stamp_card;
use crate::render::write_png;
use crate::types::{parse_days, StampRequest};

/// Render a stamp card to a PNG file
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Year of the card template
    pub year: i32,

    /// Month of the card template
    pub month: i32,

    /// Days to stamp (comma-separated, e.g. 1,2,15)
    pub days: String,

    /// Asset directory (overrides stampcard.yaml)
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Output file (default: <output>/stampcard_<year>-<month>.png)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: RenderArgs) -> Result<()> {
    let printer = Printer::new();
    let config = Config::load_or_default(Path::new("."))?;

    let request = StampRequest::new(args.year, args.month, parse_days(&args.days)?);
    let root = args.assets.unwrap_or(config.assets);

    let store = AssetStore::new(&root);
    let positions = PositionDirectory::new(&root);

    printer.status(
        "Rendering",
        &format!(
            "{} ({})",
            request.period(),
            plural(request.days.len(), "day", "days")
        ),
    );
    let card = render_stamp_card(&store, &positions, &request)?;

    let out_path = args
        .output
        .unwrap_or_else(|| config.output.join(format!("stampcard_{}.png", request.period())));

    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| StampError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {e}"),
            })?;
        }
    }

    write_png(&card, &out_path)?;
    printer.status("Created", &display_path(&out_path));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::SPRITE_FILENAME;
    use crate::types::Period;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn test_render_writes_png() {
        let dir = tempdir().unwrap();
        let period = Period::new(2024, 3);

        RgbImage::from_pixel(100, 100, Rgb([0, 0, 0]))
            .save(dir.path().join(period.card_filename()))
            .unwrap();
        RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 255]))
            .save(dir.path().join(SPRITE_FILENAME))
            .unwrap();
        fs::write(
            dir.path().join(period.position_filename()),
            r#"{"1": {"dx": 20, "dy": 20}}"#,
        )
        .unwrap();

        let out = dir.path().join("out/card.png");
        let args = RenderArgs {
            year: 2024,
            month: 3,
            days: "1".to_string(),
            assets: Some(dir.path().to_path_buf()),
            output: Some(out.clone()),
        };

        run(args).unwrap();

        let img = image::open(&out).unwrap().to_rgb8();
        assert_eq!(img.get_pixel(20, 20).0, [255, 255, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
    }

    #[test]
    fn test_render_bad_days_fails_without_touching_assets() {
        let args = RenderArgs {
            year: 2024,
            month: 3,
            days: "1,x".to_string(),
            assets: Some(PathBuf::from("/nonexistent")),
            output: None,
        };

        let err = run(args).unwrap_err();
        assert!(matches!(err, StampError::InvalidParameter { .. }));
    }
}
