//! Validation system for stampcard asset directories.
//!
//! Runs a suite of checks against an asset root and reports errors and
//! warnings. Used by `stampcard validate` before an asset directory is
//! deployed next to the service.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use std::path::Path;

use crate::assets::scan_assets;

/// Run all validation checks against an asset directory.
pub fn validate_assets(root: &Path) -> ValidationResult {
    let scan = scan_assets(root);
    let mut result = ValidationResult::new();

    result.merge(checks::check_sprite(root, &scan));
    result.merge(checks::check_pairs(&scan));
    result.merge(checks::check_templates(root, &scan));
    result.merge(checks::check_positions(root, &scan));
    result.merge(checks::check_offsets(root, &scan));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult) {
    for d in result.iter() {
        eprintln!("  {}[{}]: {}", d.severity, d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("    help: {}", help);
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        eprintln!("Validation failed: {} error(s), {} warning(s)", errors, warnings);
    } else if warnings > 0 {
        eprintln!("Validation passed ({} warning(s))", warnings);
    } else {
        eprintln!("Validation passed.");
    }
}
