//! Asset directory scanner.
//!
//! Walks an asset root and groups what it finds by period: card templates
//! (`card_{year}_{month}.png`), position files (`position_{year}_{month}.json`)
//! and the shared sprite. Used by `stampcard validate` to cross-check the
//! directory before deploying it.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::types::Period;

use super::store::SPRITE_FILENAME;

/// Result of scanning an asset directory.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Card templates keyed by period.
    pub cards: BTreeMap<Period, PathBuf>,
    /// Position files keyed by period.
    pub positions: BTreeMap<Period, PathBuf>,
    /// The shared sprite, if present.
    pub sprite: Option<PathBuf>,
}

impl ScanResult {
    /// Get the total number of discovered files.
    pub fn total(&self) -> usize {
        self.cards.len() + self.positions.len() + usize::from(self.sprite.is_some())
    }

    /// Check if no files were discovered.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// All periods that have a card, a position file, or both.
    pub fn periods(&self) -> BTreeSet<Period> {
        self.cards
            .keys()
            .chain(self.positions.keys())
            .copied()
            .collect()
    }
}

/// Scan an asset directory for cards, position files and the sprite.
///
/// Only the top level is scanned; the asset layout is flat. Files that
/// match neither naming scheme are ignored.
pub fn scan_assets(root: &Path) -> ScanResult {
    let mut result = ScanResult::default();

    for entry in WalkDir::new(root)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();

        if name == SPRITE_FILENAME {
            result.sprite = Some(entry.into_path());
        } else if let Some(period) = parse_period(&name, "card_", ".png") {
            result.cards.insert(period, entry.into_path());
        } else if let Some(period) = parse_period(&name, "position_", ".json") {
            result.positions.insert(period, entry.into_path());
        }
    }

    result
}

/// Extract a period from a `<prefix>{year}_{month}<suffix>` filename.
fn parse_period(name: &str, prefix: &str, suffix: &str) -> Option<Period> {
    let rest = name.strip_prefix(prefix)?.strip_suffix(suffix)?;
    let (year, month) = rest.split_once('_')?;
    Some(Period::new(year.parse().ok()?, month.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempdir().unwrap();
        let result = scan_assets(dir.path());
        assert!(result.is_empty());
    }

    #[test]
    fn test_scan_groups_by_period() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("card_2024_03.png"), b"").unwrap();
        fs::write(dir.path().join("position_2024_03.json"), b"{}").unwrap();
        fs::write(dir.path().join("card_2024_04.png"), b"").unwrap();
        fs::write(dir.path().join("sprite.png"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();

        let result = scan_assets(dir.path());

        assert_eq!(result.total(), 4);
        assert!(result.sprite.is_some());
        assert_eq!(result.cards.len(), 2);
        assert_eq!(result.positions.len(), 1);

        let periods: Vec<Period> = result.periods().into_iter().collect();
        assert_eq!(periods, vec![Period::new(2024, 3), Period::new(2024, 4)]);
    }

    #[test]
    fn test_scan_ignores_subdirectories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/card_2024_03.png"), b"").unwrap();

        let result = scan_assets(dir.path());
        assert!(result.is_empty());
    }

    #[test]
    fn test_parse_period() {
        assert_eq!(
            parse_period("card_2024_03.png", "card_", ".png"),
            Some(Period::new(2024, 3))
        );
        assert_eq!(
            parse_period("position_2023_12.json", "position_", ".json"),
            Some(Period::new(2023, 12))
        );
        assert_eq!(parse_period("card_2024.png", "card_", ".png"), None);
        assert_eq!(parse_period("card_abc_03.png", "card_", ".png"), None);
        assert_eq!(parse_period("sprite.png", "card_", ".png"), None);
    }
}
