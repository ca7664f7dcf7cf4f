//! Configuration for the mushaf content browser.
//!
//! Provides TOML-based configuration with:
//! - Config file layering (user config dir + project-local `mushaf.toml`)
//! - Environment overrides for credentials and endpoints (`QURAN_*`)
//!
//! Missing credentials are not a configuration error here; they surface from
//! the token manager on first use.

pub mod discovery;
pub mod error;
pub mod types;

pub use discovery::{
    ConfigSource, LoadedConfig, load_config, load_config_file, load_config_with_options,
    xdg_config_dir, xdg_config_path,
};
pub use error::{ConfigError, Result};
pub use types::*;
