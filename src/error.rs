use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for stampcard operations.
///
/// Every failure is fatal to the request that produced it; nothing is
/// retried. The HTTP boundary flattens all variants into one generic
/// client-error response, so the variant only matters for logs and CLI
/// diagnostics.
#[derive(Error, Diagnostic, Debug)]
pub enum StampError {
    #[error("Invalid parameter: {message}")]
    #[diagnostic(code(stampcard::params))]
    InvalidParameter {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Asset not found: {path}: {message}")]
    #[diagnostic(code(stampcard::assets::missing))]
    AssetNotFound { path: PathBuf, message: String },

    #[error("Corrupt asset: {path}: {message}")]
    #[diagnostic(code(stampcard::assets::corrupt))]
    AssetCorrupt { path: PathBuf, message: String },

    #[error("No position for day {day} in {period}")]
    #[diagnostic(code(stampcard::positions))]
    MissingPosition { day: i32, period: String },

    #[error("Stamp at ({dx}, {dy}) does not fit a {card_width}x{card_height} card")]
    #[diagnostic(code(stampcard::bounds))]
    OutOfBounds {
        dx: i64,
        dy: i64,
        card_width: u32,
        card_height: u32,
    },

    #[error("Encoding failed: {message}")]
    #[diagnostic(code(stampcard::encode))]
    EncodingFailure { message: String },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(stampcard::io))]
    Io { path: PathBuf, message: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(stampcard::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(stampcard::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Internal error: {0}")]
    #[diagnostic(code(stampcard::internal))]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, StampError>;
