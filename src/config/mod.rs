//! Configuration module for cpy-deploy
//!
//! Configuration hierarchy, highest priority first:
//! 1. CLI flags (`--libdir`, `--device`, `--no-fallback`)
//! 2. Environment variables (`CPY_DEPLOY_*`)
//! 3. Per-script descriptor (`code.py` -> `code.yaml`)
//! 4. Global descriptor (`cpy_deploy.yaml`)
//! 5. Built-in defaults

mod loader;
mod types;

pub use loader::{
    env_layer, env_layer_from, load, load_descriptor, locate_global_descriptor,
    parse_descriptor, script_descriptor_path, CliOverrides, ConfigWarning, LoadRequest,
    LoadedConfig, CONFIG_PATH_VAR, GLOBAL_DESCRIPTOR_NAME,
};
pub use types::{
    default_fallback_path, Config, Descriptor, FallbackConfig, FallbackLayer, DEFAULT_DEVICE,
    DEFAULT_DRIVE_LETTER,
};
