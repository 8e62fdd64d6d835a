//! Validate command implementation.
//!
//! Checks an asset directory for the problems that would otherwise only
//! surface as failed requests: missing or alpha-less sprite, unpaired
//! card/position files, unparseable files, offsets that do not fit.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Config;
use crate::error::{Result, StampError};
use crate::output::{display_path, Printer};
use crate::validation::{print_diagnostics, validate_assets};

/// Validate an asset directory without rendering
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Asset directory to check (overrides stampcard.yaml)
    #[arg(long)]
    pub assets: Option<PathBuf>,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let printer = Printer::new();
    let config = Config::load_or_default(Path::new("."))?;
    let root = args.assets.unwrap_or(config.assets);

    printer.status("Checking", &display_path(&root));
    let result = validate_assets(&root);
    print_diagnostics(&result);

    if result.has_errors() {
        return Err(StampError::Validation {
            message: format!("{} error(s) in {}", result.error_count(), display_path(&root)),
            help: Some("Fix the errors above and re-run".to_string()),
        });
    }

    Ok(())
}
