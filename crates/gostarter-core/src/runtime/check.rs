//! Go toolchain detection

use crate::templates::version::{self, GO_DIRECTIVE};
use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Whether the installed toolchain can build generated projects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolchainStatus {
    /// Installed and at least [`GO_DIRECTIVE`]
    Ready(RuntimeInfo),
    /// Installed but older than the generated go.mod expects
    Outdated { info: RuntimeInfo, warning: String },
    /// `go` is not on PATH
    Missing,
}

/// Check if Go is available
pub fn check_go() -> RuntimeInfo {
    let output = Command::new("go").arg("version").output();

    match output {
        Ok(out) if out.status.success() => {
            let stdout = String::from_utf8_lossy(&out.stdout);
            RuntimeInfo {
                name: "Go",
                version: parse_go_version_output(&stdout),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name: "Go",
            version: None,
            available: false,
        },
    }
}

/// Extract `go1.22.1` from `go version go1.22.1 linux/amd64`
pub fn parse_go_version_output(output: &str) -> Option<String> {
    output
        .split_whitespace()
        .find(|word| word.starts_with("go") && word[2..].starts_with(|c: char| c.is_ascii_digit()))
        .map(str::to_string)
}

/// Check the installed toolchain against the generated go.mod directive
pub fn check_toolchain() -> ToolchainStatus {
    classify(check_go())
}

fn classify(info: RuntimeInfo) -> ToolchainStatus {
    if !info.available {
        return ToolchainStatus::Missing;
    }

    let warning = info
        .version
        .as_deref()
        .and_then(|installed| version::check_compatibility(installed, GO_DIRECTIVE));

    match warning {
        Some(warning) => ToolchainStatus::Outdated { info, warning },
        None => ToolchainStatus::Ready(info),
    }
}
