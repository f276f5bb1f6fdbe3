//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    is_plain_name, ExcludePatterns, Platform, PlatformKind, DEFAULT_EXCLUDES,
    DEFAULT_PACKED_EXTENSION,
};
use crate::error::{DeployError, DeployResult};

/// Device name CircuitPython boards mount under.
pub const DEFAULT_DEVICE: &str = "CIRCUITPY";

/// Drive letter assumed on drive-letter platforms.
pub const DEFAULT_DRIVE_LETTER: char = 'E';

/// Fallback section of a descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackLayer {
    #[serde(default)]
    pub enabled: Option<bool>,

    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl FallbackLayer {
    fn merge(self, higher: FallbackLayer) -> FallbackLayer {
        FallbackLayer {
            enabled: higher.enabled.or(self.enabled),
            path: higher.path.or(self.path),
        }
    }
}

/// One configuration layer: a descriptor file, the environment, or CLI flags.
///
/// Every key is optional; unset keys fall through to lower layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    /// File name of the script on the device
    #[serde(default)]
    pub deploy_as: Option<String>,

    /// Libraries to copy, in order
    #[serde(default)]
    pub libraries: Option<Vec<String>>,

    /// Library bundle root (contains `lib/`)
    #[serde(default)]
    pub libdir: Option<PathBuf>,

    /// Device identifier
    #[serde(default, alias = "cpydrive", alias = "boardname")]
    pub device: Option<String>,

    /// Extension of single-file libraries
    #[serde(default)]
    pub packed_ext: Option<String>,

    #[serde(default)]
    pub platform: Option<PlatformKind>,

    #[serde(default)]
    pub drive_letter: Option<char>,

    #[serde(default)]
    pub media_root: Option<PathBuf>,

    #[serde(default)]
    pub fallback: Option<FallbackLayer>,

    /// Gitignore-style patterns left out of library directory copies
    #[serde(default)]
    pub exclude: Option<Vec<String>>,
}

impl Descriptor {
    /// Overlay `higher` on top of `self`. Set keys in `higher` win.
    pub fn merge(self, higher: Descriptor) -> Descriptor {
        let fallback = match (self.fallback, higher.fallback) {
            (Some(low), Some(high)) => Some(low.merge(high)),
            (low, high) => high.or(low),
        };

        Descriptor {
            deploy_as: higher.deploy_as.or(self.deploy_as),
            libraries: higher.libraries.or(self.libraries),
            libdir: higher.libdir.or(self.libdir),
            device: higher.device.or(self.device),
            packed_ext: higher.packed_ext.or(self.packed_ext),
            platform: higher.platform.or(self.platform),
            drive_letter: higher.drive_letter.or(self.drive_letter),
            media_root: higher.media_root.or(self.media_root),
            fallback,
            exclude: higher.exclude.or(self.exclude),
        }
    }
}

/// Fallback directory settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackConfig {
    pub enabled: bool,
    pub path: PathBuf,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_fallback_path(),
        }
    }
}

/// `<system temp dir>/CIRCUITPY`
pub fn default_fallback_path() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_DEVICE)
}

/// Fully merged configuration for one deployment run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub deploy_as: Option<String>,
    pub libraries: Vec<String>,
    pub libdir: PathBuf,
    pub device: String,
    pub packed_ext: String,
    pub platform: PlatformKind,
    pub drive_letter: char,
    pub media_root: PathBuf,
    pub fallback: FallbackConfig,
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_descriptor(Descriptor::default())
    }
}

impl Config {
    /// Fill every unset key with its built-in default.
    pub fn from_descriptor(layer: Descriptor) -> Self {
        let fallback_layer = layer.fallback.unwrap_or_default();

        Self {
            deploy_as: layer.deploy_as,
            libraries: layer.libraries.unwrap_or_default(),
            libdir: layer.libdir.unwrap_or_else(|| PathBuf::from(".")),
            device: layer.device.unwrap_or_else(|| DEFAULT_DEVICE.to_string()),
            packed_ext: layer
                .packed_ext
                .unwrap_or_else(|| DEFAULT_PACKED_EXTENSION.to_string()),
            platform: layer.platform.unwrap_or_default(),
            drive_letter: layer.drive_letter.unwrap_or(DEFAULT_DRIVE_LETTER),
            media_root: layer.media_root.unwrap_or_else(|| PathBuf::from("/media")),
            fallback: FallbackConfig {
                enabled: fallback_layer.enabled.unwrap_or(true),
                path: fallback_layer.path.unwrap_or_else(default_fallback_path),
            },
            exclude: layer
                .exclude
                .unwrap_or_else(|| DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect()),
        }
    }

    /// Mount strategy selected by `platform`, `drive_letter` and `media_root`.
    pub fn mount_strategy(&self) -> Platform {
        Platform::from_kind(self.platform, self.drive_letter, self.media_root.clone())
    }

    /// Fallback directory if enabled.
    pub fn fallback_path(&self) -> Option<PathBuf> {
        self.fallback.enabled.then(|| self.fallback.path.clone())
    }

    pub fn exclude_patterns(&self) -> DeployResult<ExcludePatterns> {
        ExcludePatterns::from_patterns(&self.exclude).map_err(|e| DeployError::InvalidConfig {
            key: "exclude".to_string(),
            message: e.to_string(),
        })
    }

    /// File name for the script on the device, defaulting to the script's own name.
    pub fn deploy_name(&self, script: &Path) -> DeployResult<String> {
        let name = match &self.deploy_as {
            Some(name) => name.clone(),
            None => script
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| DeployError::InvalidConfig {
                    key: "deploy_as".to_string(),
                    message: format!("cannot derive a file name from {}", script.display()),
                })?,
        };

        if !is_plain_name(&name) {
            return Err(DeployError::InvalidConfig {
                key: "deploy_as".to_string(),
                message: format!("'{}' must be a plain file name", name),
            });
        }
        Ok(name)
    }
}
