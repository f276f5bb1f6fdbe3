//! CLI Argument Parsing
//!
//! `cpy-deploy [OPTIONS] <SCRIPT> [LIBDIR] [DEVICE]`
//!
//! `LIBDIR` and `DEVICE` may also be given as `--libdir` / `--device`;
//! the flag wins when both are present.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{CliOverrides, LoadRequest};

/// Deploy a CircuitPython script and its libraries to a board
#[derive(Parser, Debug)]
#[command(name = "cpy-deploy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Script to deploy
    pub script: PathBuf,

    /// Library bundle root (contains lib/)
    #[arg(value_name = "LIBDIR")]
    pub libdir_arg: Option<PathBuf>,

    /// Device identifier (volume label, e.g. CIRCUITPY)
    #[arg(value_name = "DEVICE")]
    pub device_arg: Option<String>,

    /// Library bundle root, overrides the positional LIBDIR
    #[arg(short, long)]
    pub libdir: Option<PathBuf>,

    /// Device identifier, overrides the positional DEVICE
    #[arg(short, long)]
    pub device: Option<String>,

    /// Global descriptor file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Deploy only to the located device path, never to the fallback directory
    #[arg(long)]
    pub no_fallback: bool,

    /// Resolve and report without copying
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Emit NDJSON events instead of text
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            libdir: self.libdir.clone().or_else(|| self.libdir_arg.clone()),
            device: self.device.clone().or_else(|| self.device_arg.clone()),
            no_fallback: self.no_fallback,
        }
    }

    pub fn load_request(&self) -> LoadRequest {
        LoadRequest {
            script: self.script.clone(),
            global_config: self.config.clone(),
            overrides: self.overrides(),
        }
    }

    /// Default `tracing` filter for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "cpy_deploy=warn",
            1 => "cpy_deploy=info",
            2 => "cpy_deploy=debug",
            _ => "cpy_deploy=trace",
        }
    }
}
