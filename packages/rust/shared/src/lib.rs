//! Shared types, error model, and configuration for rubrix.
//!
//! This crate is the foundation depended on by all other rubrix crates.
//! It provides:
//! - [`RubrixError`] — the unified error type
//! - Domain types ([`AwesomeList`], [`Rubric`], [`Entry`])
//! - Configuration ([`AppConfig`], [`ExtractConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, ExtractConfig, config_dir, config_file_path, init_config,
    load_config, load_config_from,
};
pub use error::{Result, RubrixError};
pub use types::{AwesomeList, CONTENTS_HEADING, DEFAULT_SUB_LIST_SPACING, Entry, Rubric};
