//! Configuration loading and layering

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DeployError, DeployResult};

use super::types::{Config, Descriptor};
use crate::domain::value_objects::PlatformKind;

/// Global descriptor file name.
pub const GLOBAL_DESCRIPTOR_NAME: &str = "cpy_deploy.yaml";

/// Environment variable naming the global descriptor.
pub const CONFIG_PATH_VAR: &str = "CPY_DEPLOY_CONFIG";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Overrides collected from the command line (highest priority).
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub libdir: Option<PathBuf>,
    pub device: Option<String>,
    pub no_fallback: bool,
}

impl CliOverrides {
    fn into_layer(self) -> Descriptor {
        let mut layer = Descriptor {
            libdir: self.libdir,
            device: self.device,
            ..Descriptor::default()
        };
        if self.no_fallback {
            layer.fallback = Some(super::FallbackLayer {
                enabled: Some(false),
                path: None,
            });
        }
        layer
    }
}

/// What to load for one deployment run.
#[derive(Debug, Clone)]
pub struct LoadRequest {
    pub script: PathBuf,
    /// Explicit global descriptor (`--config`). Must exist when given.
    pub global_config: Option<PathBuf>,
    pub overrides: CliOverrides,
}

/// Merged configuration plus where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// Descriptor files read, lowest priority first
    pub sources: Vec<PathBuf>,
}

/// Load and merge: defaults < global < per-script < environment < CLI.
pub fn load(request: LoadRequest) -> DeployResult<LoadedConfig> {
    let mut merged = Descriptor::default();
    let mut warnings = Vec::new();
    let mut sources = Vec::new();

    if let Some(global) = locate_global_descriptor(request.global_config.as_deref())? {
        let (layer, file_warnings) = load_descriptor(&global)?;
        tracing::debug!(path = %global.display(), "loaded global descriptor");
        merged = merged.merge(layer);
        warnings.extend(file_warnings);
        sources.push(global);
    }

    let script_descriptor = script_descriptor_path(&request.script);
    let (layer, file_warnings) = load_descriptor(&script_descriptor)?;
    tracing::debug!(path = %script_descriptor.display(), "loaded script descriptor");
    merged = merged.merge(layer);
    warnings.extend(file_warnings);
    sources.push(script_descriptor);

    merged = merged.merge(env_layer());
    merged = merged.merge(request.overrides.into_layer());

    Ok(LoadedConfig {
        config: Config::from_descriptor(merged),
        warnings,
        sources,
    })
}

/// `code.py` -> `code.yaml`
pub fn script_descriptor_path(script: &Path) -> PathBuf {
    script.with_extension("yaml")
}

/// Find the global descriptor.
///
/// An explicit path (flag or `CPY_DEPLOY_CONFIG`) must exist. Otherwise the
/// user config dir and the executable's directory are tried, and a missing
/// file just means no global layer.
pub fn locate_global_descriptor(explicit: Option<&Path>) -> DeployResult<Option<PathBuf>> {
    let explicit = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_PATH_VAR).map(PathBuf::from));

    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(DeployError::DescriptorNotFound { path });
        }
        return Ok(Some(path));
    }

    let candidates = [
        dirs::config_dir().map(|d| d.join("cpy-deploy").join(GLOBAL_DESCRIPTOR_NAME)),
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|p| p.join(GLOBAL_DESCRIPTOR_NAME))),
    ];

    Ok(candidates.into_iter().flatten().find(|p| p.is_file()))
}

/// Read one descriptor file.
///
/// A missing file is `DescriptorNotFound`; malformed YAML is
/// `InvalidDescriptor`. An empty file is an empty layer.
pub fn load_descriptor(path: &Path) -> DeployResult<(Descriptor, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DeployError::DescriptorNotFound {
            path: path.to_path_buf(),
        },
        _ => DeployError::Io(e),
    })?;

    parse_descriptor(&content, path)
}

/// Parse descriptor text. `path` is only used for messages.
pub fn parse_descriptor(content: &str, path: &Path) -> DeployResult<(Descriptor, Vec<ConfigWarning>)> {
    let invalid = |message: String| DeployError::InvalidDescriptor {
        file: path.to_path_buf(),
        message,
    };

    let value: serde_yaml_ng::Value =
        serde_yaml_ng::from_str(content).map_err(|e| invalid(e.to_string()))?;
    if value.is_null() {
        return Ok((Descriptor::default(), Vec::new()));
    }

    let mut unknown_paths: Vec<String> = Vec::new();
    let descriptor: Descriptor = serde_ignored::deserialize(value, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| invalid(e.to_string()))?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((descriptor, warnings))
}

/// Environment overrides (`CPY_DEPLOY_*` prefix).
pub fn env_layer() -> Descriptor {
    env_layer_from(|key| std::env::var(key).ok())
}

/// Environment overrides read through `lookup`.
pub fn env_layer_from(lookup: impl Fn(&str) -> Option<String>) -> Descriptor {
    let mut layer = Descriptor {
        libdir: lookup("CPY_DEPLOY_LIBDIR")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from),
        device: lookup("CPY_DEPLOY_DEVICE").filter(|v| !v.is_empty()),
        ..Descriptor::default()
    };

    if let Some(platform) = lookup("CPY_DEPLOY_PLATFORM") {
        match PlatformKind::parse(&platform) {
            Some(kind) => layer.platform = Some(kind),
            None => tracing::warn!(value = %platform, "ignoring unknown CPY_DEPLOY_PLATFORM"),
        }
    }

    if let Some(val) = lookup("CPY_DEPLOY_NO_FALLBACK") {
        let disabled = val.to_lowercase() != "false" && val != "0" && !val.is_empty();
        if disabled {
            layer.fallback = Some(super::FallbackLayer {
                enabled: Some(false),
                path: None,
            });
        }
    }

    layer
}

/// First line declaring `key` as a mapping key, at any indentation.
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.trim_start()
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with(':'))
        })
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "deploy_as",
        "libraries",
        "libdir",
        "device",
        "packed_ext",
        "platform",
        "drive_letter",
        "media_root",
        "fallback",
        "enabled",
        "path",
        "exclude",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
