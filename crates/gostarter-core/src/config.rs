//! Environment-driven defaults for the CLI

use std::path::PathBuf;

/// Environment variable overriding the default project type
pub const TYPE_ENV: &str = "GOSTARTER_TYPE";

/// Environment variable overriding the directory projects are created in
pub const DIR_ENV: &str = "GOSTARTER_DIR";

/// Type identifier used when neither a flag nor the environment sets one.
/// Not a supported identifier itself; it resolves to the default type.
pub const DEFAULT_TYPE: &str = "default";

/// Defaults read from the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub project_type: Option<String>,
    pub base_dir: Option<PathBuf>,
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());
        Self {
            project_type: non_empty(TYPE_ENV),
            base_dir: non_empty(DIR_ENV).map(PathBuf::from),
        }
    }

    /// The type identifier to request: explicit flag, then environment, then default
    pub fn project_type(&self, flag: Option<&str>) -> String {
        flag.map(str::to_string)
            .or_else(|| self.project_type.clone())
            .unwrap_or_else(|| DEFAULT_TYPE.to_string())
    }

    /// The base directory: explicit flag, then environment, then the working directory
    pub fn base_dir(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.base_dir.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let settings = Settings::from_lookup(lookup(&[]));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.project_type(None), "default");
        assert_eq!(settings.base_dir(None), PathBuf::new());
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let settings = Settings::from_lookup(lookup(&[(TYPE_ENV, "api"), (DIR_ENV, "/tmp/projects")]));
        assert_eq!(settings.project_type(None), "api");
        assert_eq!(settings.base_dir(None), PathBuf::from("/tmp/projects"));
    }

    #[test]
    fn test_flags_override_environment() {
        let settings = Settings::from_lookup(lookup(&[(TYPE_ENV, "api"), (DIR_ENV, "/tmp/projects")]));
        assert_eq!(settings.project_type(Some("web")), "web");
        assert_eq!(settings.base_dir(Some(PathBuf::from("out"))), PathBuf::from("out"));
    }

    #[test]
    fn test_empty_values_are_unset() {
        let settings = Settings::from_lookup(lookup(&[(TYPE_ENV, ""), (DIR_ENV, "")]));
        assert_eq!(settings, Settings::default());
    }
}
