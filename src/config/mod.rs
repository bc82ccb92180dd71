//! Configuration module for Revship
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (REVSHIP_*)
//! 3. Explicit `--config` file, or project config (`revship.toml`)
//! 4. User config (~/.config/revship/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    parse_with_warnings, user_config_path, with_env_overrides, ConfigWarning, PROJECT_CONFIG_FILE,
};
pub use types::{ColorMode, Config, DeployConfig, OutputConfig, RemoteConfig, Verbosity};
