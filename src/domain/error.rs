//! Error types for YapPad.
//!
//! This module defines the centralized error type [`YapError`] and a type alias
//! [`Result`] used throughout the crate. Steady-state failures (a preview that
//! cannot be read, a rename that collides) are logged and absorbed by the
//! component that hit them; only startup failures travel all the way out of
//! `main`.

use thiserror::Error;

/// The main error type for YapPad operations.
///
/// # Examples
///
/// ```
/// use yappad::YapError;
///
/// fn resolve_mode(raw: &str) -> Result<(), YapError> {
///     Err(YapError::InvalidMode(raw.to_string()))
/// }
///
/// assert!(resolve_mode("hourly").is_err());
/// ```
#[derive(Debug, Error)]
pub enum YapError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, including the
    /// terminal device. Automatically converts from `std::io::Error`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is malformed or holds an invalid value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing failed.
    ///
    /// Occurs when a custom theme file cannot be read or parsed, or when a
    /// highlighting theme is missing from the bundled set.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A vault operation was refused.
    ///
    /// Raised for rename collisions, empty targets and similar rule
    /// violations that leave the filesystem untouched.
    #[error("Vault error: {0}")]
    Vault(String),

    /// A journal mode string did not name a known mode.
    #[error("unknown mode: {0} (use all, daily, weekly, monthly, yearly)")]
    InvalidMode(String),

    /// The user's home directory could not be determined.
    #[error("could not resolve the home directory")]
    HomeDir,

    /// The external editor could not be launched or exited unsuccessfully.
    #[error("Editor error: {0}")]
    Editor(String),

    /// Syntax highlighting failed for a preview.
    #[error("Highlight error: {0}")]
    Highlight(String),
}

/// A specialized `Result` type for YapPad operations.
pub type Result<T> = std::result::Result<T, YapError>;
