//! Position directory - per-period day to offset files.
//!
//! One JSON file per period maps day-number strings to `{dx, dy}` pixel
//! offsets, e.g. `{"1": {"dx": 10, "dy": 10}, "2": {"dx": 100, "dy": 200}}`.
//! The map is loaded fresh for each request.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StampError};
use crate::types::{Offset, Period, PositionMap};

/// Loads per-period position maps from an asset directory.
#[derive(Debug)]
pub struct PositionDirectory {
    root: PathBuf,
}

impl PositionDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The asset directory this directory reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a period's position file.
    pub fn path_for(&self, period: Period) -> PathBuf {
        self.root.join(period.position_filename())
    }

    /// Load the position map for a period.
    ///
    /// A period with no stored position file fails with `AssetNotFound`;
    /// a file that does not parse into the expected day/offset shape fails
    /// with `AssetCorrupt`.
    pub fn load(&self, period: Period) -> Result<PositionMap> {
        let path = self.path_for(period);
        let content = fs::read_to_string(&path).map_err(|e| StampError::AssetNotFound {
            path: path.clone(),
            message: e.to_string(),
        })?;

        parse_position_map(&content, period, &path)
    }
}

/// Parse position-file JSON into a `PositionMap`.
pub fn parse_position_map(content: &str, period: Period, path: &Path) -> Result<PositionMap> {
    let raw: HashMap<String, Offset> =
        serde_json::from_str(content).map_err(|e| StampError::AssetCorrupt {
            path: path.to_path_buf(),
            message: format!("invalid position file: {e}"),
        })?;

    let mut offsets = BTreeMap::new();
    for (key, offset) in raw {
        let day = key.parse::<i32>().map_err(|_| StampError::AssetCorrupt {
            path: path.to_path_buf(),
            message: format!("day key is not an integer: {key:?}"),
        })?;
        offsets.insert(day, offset);
    }

    Ok(PositionMap::new(period, offsets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"{
        "1": {"dx": 10, "dy": 10},
        "2": {"dx": 100, "dy": 200},
        "15": {"dx": 700, "dy": 500}
    }"#;

    #[test]
    fn test_load_position_map() {
        let dir = tempdir().unwrap();
        let period = Period::new(2024, 3);
        fs::write(dir.path().join(period.position_filename()), SAMPLE).unwrap();

        let positions = PositionDirectory::new(dir.path());
        let map = positions.load(period).unwrap();

        assert_eq!(map.len(), 3);
        assert_eq!(map.lookup(15).unwrap(), Offset::new(700, 500));
    }

    #[test]
    fn test_load_missing_period() {
        let dir = tempdir().unwrap();
        let positions = PositionDirectory::new(dir.path());

        let err = positions.load(Period::new(1999, 1)).unwrap_err();
        assert!(matches!(err, StampError::AssetNotFound { .. }));
    }

    #[test]
    fn test_load_unparseable_file_is_corrupt() {
        let dir = tempdir().unwrap();
        let period = Period::new(2024, 3);
        fs::write(dir.path().join(period.position_filename()), "not json").unwrap();

        let positions = PositionDirectory::new(dir.path());
        let err = positions.load(period).unwrap_err();
        assert!(matches!(err, StampError::AssetCorrupt { .. }));
    }

    #[test]
    fn test_non_integer_day_key_is_corrupt() {
        let content = r#"{"monday": {"dx": 1, "dy": 2}}"#;
        let err =
            parse_position_map(content, Period::new(2024, 3), Path::new("p.json")).unwrap_err();
        assert!(matches!(err, StampError::AssetCorrupt { .. }));
    }

    #[test]
    fn test_malformed_offset_is_corrupt() {
        let content = r#"{"1": {"dx": 1}}"#;
        let err =
            parse_position_map(content, Period::new(2024, 3), Path::new("p.json")).unwrap_err();
        assert!(matches!(err, StampError::AssetCorrupt { .. }));
    }

    #[test]
    fn test_negative_offsets_parse() {
        let content = r#"{"1": {"dx": -5, "dy": 3}}"#;
        let map = parse_position_map(content, Period::new(2024, 3), Path::new("p.json")).unwrap();
        assert_eq!(map.lookup(1).unwrap(), Offset::new(-5, 3));
    }
}
