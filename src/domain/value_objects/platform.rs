//! Platform value object
//!
//! The three ways a removable volume can show up on a host, each usable as a
//! [`MountStrategy`].

use std::path::{PathBuf, MAIN_SEPARATOR_STR};

use serde::{Deserialize, Serialize};

use crate::domain::ports::MountStrategy;

/// Platform selection as written in descriptors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PlatformKind {
    /// Pick from the host OS at runtime
    #[default]
    Auto,
    /// Removable volumes appear as a drive letter
    DriveLetter,
    /// Removable volumes mount under a media root, e.g. `/media/<name>`
    Media,
    /// Removable volumes appear as `/<name>`
    Root,
}

impl PlatformKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformKind::Auto => "auto",
            PlatformKind::DriveLetter => "drive-letter",
            PlatformKind::Media => "media",
            PlatformKind::Root => "root",
        }
    }

    /// Parse a user-supplied name (env vars, CLI). Unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(PlatformKind::Auto),
            "drive-letter" | "drive_letter" | "windows" => Some(PlatformKind::DriveLetter),
            "media" | "linux" => Some(PlatformKind::Media),
            "root" => Some(PlatformKind::Root),
            _ => None,
        }
    }
}

/// Concrete mount strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    /// Always `<letter>:\`. Drives are not enumerated; the letter is assumed.
    DriveLetter { letter: char },
    /// `<root>/<device>`
    Media { root: PathBuf },
    /// `/<device>`
    Root,
}

impl Platform {
    /// Build a platform from a descriptor selection. `Auto` follows the host.
    pub fn from_kind(kind: PlatformKind, drive_letter: char, media_root: PathBuf) -> Self {
        match kind {
            PlatformKind::Auto => Self::detect(drive_letter, media_root),
            PlatformKind::DriveLetter => Platform::DriveLetter {
                letter: drive_letter,
            },
            PlatformKind::Media => Platform::Media { root: media_root },
            PlatformKind::Root => Platform::Root,
        }
    }

    /// Host platform strategy.
    pub fn detect(drive_letter: char, media_root: PathBuf) -> Self {
        if cfg!(windows) {
            Platform::DriveLetter {
                letter: drive_letter,
            }
        } else if cfg!(target_os = "linux") {
            Platform::Media { root: media_root }
        } else {
            Platform::Root
        }
    }
}

impl MountStrategy for Platform {
    fn locate(&self, device: &str) -> PathBuf {
        match self {
            Platform::DriveLetter { letter } => {
                PathBuf::from(format!("{}:\\", letter.to_ascii_uppercase()))
            }
            Platform::Media { root } => root.join(device),
            Platform::Root => PathBuf::from(MAIN_SEPARATOR_STR).join(device),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Platform::DriveLetter { .. } => "drive-letter",
            Platform::Media { .. } => "media",
            Platform::Root => "root",
        }
    }
}
