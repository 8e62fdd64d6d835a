//! Validation checks for an asset directory.
//!
//! Each check takes the scan result (and the asset root where it needs to
//! load file contents) and returns a `ValidationResult`.

use std::path::Path;

use crate::assets::{AssetStore, PositionDirectory, ScanResult, SPRITE_FILENAME};

use super::warning::{Diagnostic, ValidationResult};

/// Check that the shared sprite exists and carries an alpha channel.
pub fn check_sprite(root: &Path, scan: &ScanResult) -> ValidationResult {
    let mut result = ValidationResult::new();

    if scan.sprite.is_none() {
        result.push(
            Diagnostic::error(
                "stampcard::validate::sprite",
                format!("{SPRITE_FILENAME} not found"),
            )
            .with_help(format!("Place {SPRITE_FILENAME} in the asset directory")),
        );
        return result;
    }

    if let Err(e) = AssetStore::new(root).load_sprite() {
        result.push(Diagnostic::error(
            "stampcard::validate::sprite",
            e.to_string(),
        ));
    }

    result
}

/// Check for periods that have a card without positions, or positions
/// without a card. Either half alone can never serve a request.
pub fn check_pairs(scan: &ScanResult) -> ValidationResult {
    let mut result = ValidationResult::new();

    for period in scan.periods() {
        match (scan.cards.get(&period), scan.positions.get(&period)) {
            (Some(_), None) => result.push(
                Diagnostic::warning(
                    "stampcard::validate::unpaired",
                    format!("{period} has a card template but no position file"),
                )
                .with_help(format!("Add {}", period.position_filename())),
            ),
            (None, Some(_)) => result.push(
                Diagnostic::warning(
                    "stampcard::validate::unpaired",
                    format!("{period} has a position file but no card template"),
                )
                .with_help(format!("Add {}", period.card_filename())),
            ),
            _ => {}
        }
    }

    result
}

/// Check that every card template decodes.
pub fn check_templates(root: &Path, scan: &ScanResult) -> ValidationResult {
    let mut result = ValidationResult::new();
    let store = AssetStore::new(root);

    for &period in scan.cards.keys() {
        if let Err(e) = store.load_card(period) {
            result.push(Diagnostic::error(
                "stampcard::validate::template",
                e.to_string(),
            ));
        }
    }

    result
}

/// Check that every position file parses, with plausible day keys.
pub fn check_positions(root: &Path, scan: &ScanResult) -> ValidationResult {
    let mut result = ValidationResult::new();
    let positions = PositionDirectory::new(root);

    for &period in scan.positions.keys() {
        let map = match positions.load(period) {
            Ok(map) => map,
            Err(e) => {
                result.push(Diagnostic::error(
                    "stampcard::validate::positions",
                    e.to_string(),
                ));
                continue;
            }
        };

        if map.is_empty() {
            result.push(Diagnostic::warning(
                "stampcard::validate::positions",
                format!("{period} position file has no entries"),
            ));
        }

        for (day, _) in map.iter() {
            if !(1..=31).contains(&day) {
                result.push(Diagnostic::warning(
                    "stampcard::validate::day-range",
                    format!("{period} maps day {day}, outside 1..=31"),
                ));
            }
        }
    }

    result
}

/// Check that every offset's sprite window fits its card template.
///
/// Only runs for periods where both halves load and a sprite is
/// available; the per-file checks already cover the rest.
pub fn check_offsets(root: &Path, scan: &ScanResult) -> ValidationResult {
    let mut result = ValidationResult::new();

    let store = AssetStore::new(root);
    let Ok(sprite) = store.load_sprite() else {
        return result;
    };
    let positions = PositionDirectory::new(root);

    for &period in scan.positions.keys() {
        if !scan.cards.contains_key(&period) {
            continue;
        }
        let (Ok(card), Ok(map)) = (store.load_card(period), positions.load(period)) else {
            continue;
        };

        for (day, offset) in map.iter() {
            if !card.contains_window(offset.dx, offset.dy, sprite.width(), sprite.height()) {
                result.push(Diagnostic::error(
                    "stampcard::validate::bounds",
                    format!(
                        "{period} day {day}: stamp at ({}, {}) does not fit the {}x{} card",
                        offset.dx,
                        offset.dy,
                        card.width(),
                        card.height()
                    ),
                ));
            }
        }
    }

    result
}
