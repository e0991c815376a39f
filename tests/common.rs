use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::Path;

/// `algoviz` with its config directory pointed at `config_dir` and no animation
pub fn algoviz(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("algoviz");
    cmd.env("ALGOVIZ_CONFIG_DIR", config_dir)
        .env_remove("ALGOVIZ_LOG")
        .env_remove("ALGOVIZ_LOG_LEVEL")
        .env_remove("RUST_LOG")
        .arg("--no-animate");
    cmd
}

#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}
