//! Request parsing and validation.
//!
//! `StampRequest` is the typed form of the untrusted external parameters.
//! Parsing is strict: missing container, missing fields, or non-integer
//! tokens all fail with `InvalidParameter` before any asset I/O happens.
//! There is no defaulting of absent fields.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Result, StampError};

/// One (year, month) pair. Owns the deterministic asset filenames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    pub year: i32,
    pub month: i32,
}

impl Period {
    pub fn new(year: i32, month: i32) -> Self {
        Self { year, month }
    }

    /// Filename of this period's card template.
    pub fn card_filename(&self) -> String {
        format!("card_{}_{:02}.png", self.year, self.month)
    }

    /// Filename of this period's position file.
    pub fn position_filename(&self) -> String {
        format!("position_{}_{:02}.json", self.year, self.month)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// A validated stamp-card request.
///
/// `days` keeps the request order, duplicates included: each occurrence
/// blends the sprite again at the same location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampRequest {
    pub year: i32,
    pub month: i32,
    pub days: Vec<i32>,
}

impl StampRequest {
    pub fn new(year: i32, month: i32, days: Vec<i32>) -> Self {
        Self { year, month, days }
    }

    /// Parse a request from raw query parameters.
    ///
    /// Expects `year` and `month` as integers and `days` as a comma-separated
    /// list of integers, e.g. `year=2024&month=3&days=1,2,15`.
    pub fn from_params(params: Option<&HashMap<String, String>>) -> Result<Self> {
        let params = params.ok_or_else(|| StampError::InvalidParameter {
            message: "query parameters are missing".to_string(),
            help: Some("expected year, month and days".to_string()),
        })?;

        let year = int_param(params, "year")?;
        let month = int_param(params, "month")?;

        let days_raw = params
            .get("days")
            .ok_or_else(|| StampError::InvalidParameter {
                message: "days is required".to_string(),
                help: Some("pass days as a comma-separated list, e.g. days=1,2,15".to_string()),
            })?;

        Ok(Self {
            year,
            month,
            days: parse_days(days_raw)?,
        })
    }

    /// The period this request targets.
    pub fn period(&self) -> Period {
        Period::new(self.year, self.month)
    }
}

/// Parse a comma-separated day list, e.g. `"1,2,15"`.
///
/// The list must be non-empty and every token must be an integer. Used by
/// both the query-parameter path and the CLI.
pub fn parse_days(raw: &str) -> Result<Vec<i32>> {
    if raw.trim().is_empty() {
        return Err(StampError::InvalidParameter {
            message: "days must not be empty".to_string(),
            help: Some("pass at least one day number".to_string()),
        });
    }

    raw.split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<i32>()
                .map_err(|_| StampError::InvalidParameter {
                    message: format!("days contains a non-integer value: {token:?}"),
                    help: None,
                })
        })
        .collect()
}

fn int_param(params: &HashMap<String, String>, key: &str) -> Result<i32> {
    let raw = params.get(key).ok_or_else(|| StampError::InvalidParameter {
        message: format!("{key} is required"),
        help: None,
    })?;

    raw.trim()
        .parse::<i32>()
        .map_err(|_| StampError::InvalidParameter {
            message: format!("{key} is not an integer: {raw:?}"),
            help: None,
        })
}
