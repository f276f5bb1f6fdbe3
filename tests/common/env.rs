//! Test environment builder for isolated cpy-deploy runs.
//!
//! Layout inside one temp dir:
//!
//! ```text
//! home/                    HOME and XDG_CONFIG_HOME
//! bundle/lib/...           library root
//! project/<script>         script + per-script descriptor
//! media/<device>/          mounted board (only when `with_device_mounted`)
//! fallback/                scratch directory used when the board is absent
//! cpy_deploy.yaml          global descriptor pointing at media/ and fallback/
//! ```

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::DEFAULT_SCRIPT;

/// Result of running the cpy-deploy binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    pub root: TempDir,
    pub script: PathBuf,
    pub device: String,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn bundle_dir(&self) -> PathBuf {
        self.path("bundle")
    }

    pub fn media_root(&self) -> PathBuf {
        self.path("media")
    }

    /// Mount point the board would have
    pub fn device_dir(&self) -> PathBuf {
        self.media_root().join(&self.device)
    }

    pub fn fallback_dir(&self) -> PathBuf {
        self.path("fallback")
    }

    pub fn global_descriptor(&self) -> PathBuf {
        self.path("cpy_deploy.yaml")
    }

    /// Directory the deploy is expected to land in
    pub fn target_dir(&self) -> PathBuf {
        if self.device_dir().is_dir() {
            self.device_dir()
        } else {
            self.fallback_dir()
        }
    }

    /// Run `cpy-deploy <script> <args...>`
    pub fn deploy(&self, args: &[&str]) -> TestResult {
        let script = self.script.display().to_string();
        let mut full = vec![script.as_str()];
        full.extend_from_slice(args);
        self.run(&full)
    }

    /// Run the binary with raw arguments
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let home = self.path("home");
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env("HOME", &home)
            .env("USERPROFILE", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("CPY_DEPLOY_CONFIG", self.global_descriptor())
            .env_remove("CPY_DEPLOY_LIBDIR")
            .env_remove("CPY_DEPLOY_DEVICE")
            .env_remove("CPY_DEPLOY_NO_FALLBACK")
            .env_remove("CPY_DEPLOY_PLATFORM")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute cpy-deploy");
        output_to_result(output)
    }

    /// Mount the board by creating its directory
    pub fn mount_device(&self) {
        std::fs::create_dir_all(self.device_dir()).expect("Failed to create device dir");
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        write_file(&self.path(relative), content);
    }

    /// Overwrite the per-script descriptor
    pub fn write_descriptor(&self, content: &str) {
        write_file(&self.script.with_extension("yaml"), content);
    }

    pub fn read_target(&self, relative: &str) -> String {
        let full = self.target_dir().join(relative);
        std::fs::read_to_string(&full)
            .unwrap_or_else(|e| panic!("Failed to read deployed file {}: {}", full.display(), e))
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    script_name: String,
    script_content: String,
    descriptor: Option<String>,
    global_extra: String,
    library_dirs: Vec<(String, Vec<(String, String)>)>,
    packed_files: Vec<(String, String)>,
    device: String,
    mounted: bool,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            script_name: "code.py".to_string(),
            script_content: DEFAULT_SCRIPT.to_string(),
            descriptor: None,
            global_extra: String::new(),
            library_dirs: Vec::new(),
            packed_files: Vec::new(),
            device: "CIRCUITPY".to_string(),
            mounted: false,
        }
    }

    pub fn with_script(mut self, name: &str, content: &str) -> Self {
        self.script_name = name.to_string();
        self.script_content = content.to_string();
        self
    }

    /// Per-script descriptor. `{bundle}` is replaced with the bundle path.
    pub fn with_descriptor(mut self, content: &str) -> Self {
        self.descriptor = Some(content.to_string());
        self
    }

    /// Extra YAML appended to the global descriptor
    pub fn with_global(mut self, content: &str) -> Self {
        self.global_extra = content.to_string();
        self
    }

    /// Library directory `bundle/lib/<name>/` with `(relative path, content)` files
    pub fn with_library_dir(mut self, name: &str, files: &[(&str, &str)]) -> Self {
        self.library_dirs.push((
            name.to_string(),
            files
                .iter()
                .map(|(p, c)| (p.to_string(), c.to_string()))
                .collect(),
        ));
        self
    }

    /// Packed library `bundle/lib/<name>.mpy`
    pub fn with_packed_library(mut self, name: &str, content: &str) -> Self {
        self.packed_files.push((name.to_string(), content.to_string()));
        self
    }

    pub fn with_device_name(mut self, device: &str) -> Self {
        self.device = device.to_string();
        self
    }

    pub fn with_device_mounted(mut self) -> Self {
        self.mounted = true;
        self
    }

    pub fn build(self) -> TestEnv {
        let root = TempDir::new().expect("Failed to create temp dir");
        let base = root.path();
        let bundle = base.join("bundle");

        std::fs::create_dir_all(base.join("home/.config")).expect("Failed to create home");
        std::fs::create_dir_all(bundle.join("lib")).expect("Failed to create bundle");

        for (name, files) in &self.library_dirs {
            for (relative, content) in files {
                write_file(&bundle.join("lib").join(name).join(relative), content);
            }
        }
        for (name, content) in &self.packed_files {
            write_file(&bundle.join("lib").join(format!("{}.mpy", name)), content);
        }

        let global = format!(
            "platform: media\nmedia_root: {}\nfallback:\n  path: {}\n{}",
            yaml_path(&base.join("media")),
            yaml_path(&base.join("fallback")),
            self.global_extra
        );
        write_file(&base.join("cpy_deploy.yaml"), &global);

        let script = base.join("project").join(&self.script_name);
        write_file(&script, &self.script_content);
        if let Some(descriptor) = &self.descriptor {
            let descriptor = descriptor.replace("{bundle}", &yaml_path(&bundle));
            write_file(&script.with_extension("yaml"), &descriptor);
        }

        if self.mounted {
            std::fs::create_dir_all(base.join("media").join(&self.device))
                .expect("Failed to create device dir");
        }

        TestEnv {
            root,
            script,
            device: self.device,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_cpy-deploy")),
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Quote a path for YAML (single quotes, so backslashes survive)
pub fn yaml_path(path: &Path) -> String {
    format!("'{}'", path.display().to_string().replace('\'', "''"))
}
