//! Startup banner

pub fn render_banner(version: &str) -> String {
    format!(
        "cpy-deploy v{}\nDeploy CircuitPython scripts and libraries to a board\n",
        version
    )
}
