//! Infrastructure layer for filesystem locations and terminal output.
//!
//! - [`paths`]: vault, config and data directory resolution
//! - [`output`]: lock-guarded terminal stream shared by the redraw loop and
//!   graphics writers

pub mod output;
pub mod paths;

pub use output::SharedOutput;
pub use paths::{config_file, default_vault_dir, expand_tilde, get_data_dir};
