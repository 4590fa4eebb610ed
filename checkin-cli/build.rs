//! Embeds a build identifier for `checkin --version`.

use std::path::PathBuf;
use std::process::Command;

const BUILD_ID_VAR: &str = "CHECKIN_BUILD_SHA";

/// Run git in the crate directory; `None` unless it succeeds with output.
fn git(args: &[&str]) -> Option<String> {
    let dir = std::env::var_os("CARGO_MANIFEST_DIR").map(PathBuf::from)?;
    let out = Command::new("git").args(args).current_dir(dir).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let text = String::from_utf8(out.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn main() {
    println!("cargo:rerun-if-env-changed={BUILD_ID_VAR}");

    // Source tarballs have no .git; packagers pin the id through the env.
    let id = std::env::var(BUILD_ID_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| git(&["describe", "--always", "--dirty", "--abbrev=8"]))
        .unwrap_or_else(|| "unknown".to_string());

    if let Some(head) = git(&["rev-parse", "--git-path", "HEAD"]) {
        println!("cargo:rerun-if-changed={head}");
    }

    println!("cargo:rustc-env={BUILD_ID_VAR}={id}");
}
