//! Go toolchain version comparison against the generated `go.mod`

use anyhow::Result;
use semver::Version;

/// Version in the `go` directive of every generated go.mod
pub const GO_DIRECTIVE: &str = "1.21";

/// Compare an installed Go version against the version a project declares.
/// Returns a warning message if the toolchain is older than the project expects
pub fn check_compatibility(installed: &str, required: &str) -> Option<String> {
    let installed_ver = match parse_go_version(installed) {
        Ok(v) => v,
        Err(_) => return None, // Can't compare, skip warning
    };

    let required_ver = match parse_go_version(required) {
        Ok(v) => v,
        Err(_) => return None,
    };

    if installed_ver < required_ver {
        Some(format!(
            "Warning: generated projects declare go {} but go {} is installed.\n\
             Update your toolchain: https://go.dev/dl/",
            required, installed_ver
        ))
    } else {
        None
    }
}

/// Parse a Go version string (`go1.22.1`, `1.21`, `go1.21rc2`) as semver.
///
/// Missing minor/patch components are zero-filled and pre-release suffixes
/// are dropped.
pub fn parse_go_version(version_str: &str) -> Result<Version> {
    let cleaned = version_str.trim();
    let cleaned = cleaned.strip_prefix("go").unwrap_or(cleaned);

    let mut parts = [0u64; 3];
    for (i, part) in cleaned.splitn(3, '.').enumerate() {
        let digits: String = part.chars().take_while(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            anyhow::bail!("Invalid Go version '{}'", version_str);
        }
        parts[i] = digits
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid Go version '{}': {}", version_str, e))?;
    }

    Ok(Version::new(parts[0], parts[1], parts[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toolchain_older_than_directive() {
        let warning = check_compatibility("go1.20.14", GO_DIRECTIVE);
        assert!(warning.is_some());
        assert!(warning.unwrap().contains("go 1.21"));
    }

    #[test]
    fn test_warning_includes_update_link() {
        let warning = check_compatibility("go1.19", GO_DIRECTIVE).unwrap();
        let lines: Vec<&str> = warning.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "Update your toolchain: https://go.dev/dl/");
    }

    #[test]
    fn test_toolchain_same_as_directive() {
        assert!(check_compatibility("go1.21", GO_DIRECTIVE).is_none());
        assert!(check_compatibility("go1.21.0", GO_DIRECTIVE).is_none());
    }

    #[test]
    fn test_toolchain_newer_than_directive() {
        assert!(check_compatibility("go1.22.1", GO_DIRECTIVE).is_none());
    }

    #[test]
    fn test_invalid_versions() {
        // Should return None (no warning) for invalid versions
        assert!(check_compatibility("devel", GO_DIRECTIVE).is_none());
        assert!(check_compatibility("go1.20", "latest").is_none());
    }

    #[test]
    fn test_parse_go_version_forms() {
        assert_eq!(parse_go_version("go1.22.1").unwrap(), Version::new(1, 22, 1));
        assert_eq!(parse_go_version("1.21").unwrap(), Version::new(1, 21, 0));
        assert_eq!(parse_go_version("go1.23rc2").unwrap(), Version::new(1, 23, 0));
        assert!(parse_go_version("").is_err());
    }
}
