use crate::domain::TrackedFile;
use crate::error::{Result, SemverError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names looked up in the working directory, in order
pub const CONFIG_CANDIDATES: &[&str] = &[".semver.yaml", ".semver.yml", ".semver.toml", ".semver"];

/// Name used by `--init` when no path is given
pub const DEFAULT_CONFIG_FILE: &str = ".semver.yaml";

/// Version written into a freshly initialized config
pub const INITIAL_VERSION: &str = "0.0.0";

/// The project's version and the files that carry it.
///
/// `files` maps a path (relative to the config file) to the locator pattern
/// that finds the version reference inside that file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    pub version: String,

    #[serde(default)]
    pub files: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version: INITIAL_VERSION.to_string(),
            files: BTreeMap::new(),
        }
    }
}

/// On-disk format of a config document, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// `.toml` files are TOML, everything else is YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }

    /// Locator that finds the top-level version field of a config document
    pub fn version_locator(&self) -> &'static str {
        match self {
            ConfigFormat::Yaml => r"(?m)^version:\s*.*",
            ConfigFormat::Toml => r"(?m)^version\s*=\s*.*",
        }
    }

    fn parse(&self, text: &str) -> std::result::Result<Config, String> {
        match self {
            ConfigFormat::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::from_str(text).map_err(|e| e.to_string()),
        }
    }

    fn render(&self, config: &Config) -> std::result::Result<String, String> {
        match self {
            ConfigFormat::Yaml => serde_yaml::to_string(config).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::to_string(config).map_err(|e| e.to_string()),
        }
    }
}

impl Config {
    /// Tracked files with paths resolved against the config's directory.
    ///
    /// The config document itself is appended last with a locator for its
    /// own version field; an explicit entry for the same path is replaced.
    pub fn tracked_files(&self, config_path: &Path) -> Result<Vec<TrackedFile>> {
        let base = config_path.parent().unwrap_or_else(|| Path::new(""));

        let mut tracked = Vec::with_capacity(self.files.len() + 1);
        for (path, pattern) in &self.files {
            let resolved = base.join(path);
            if is_same_path(&resolved, config_path) {
                continue;
            }
            tracked.push(TrackedFile::new(resolved, pattern)?);
        }

        let format = ConfigFormat::from_path(config_path);
        tracked.push(TrackedFile::new(config_path, format.version_locator())?);
        Ok(tracked)
    }
}

fn is_same_path(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a.components().eq(b.components()),
    }
}

/// Finds the config document to use.
///
/// Uses the explicit path when given; otherwise the first of
/// [CONFIG_CANDIDATES] present in the current directory.
///
/// # Returns
/// * `Ok(PathBuf)` - Path of the config document
/// * `Err(ConfigRead)` - If an explicit path is missing or no candidate exists
pub fn locate_config(config_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = config_path {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(SemverError::config_read(path, "file not found"));
    }

    CONFIG_CANDIDATES
        .iter()
        .map(|name| PathBuf::from(*name))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| {
            SemverError::config_read(
                DEFAULT_CONFIG_FILE,
                format!(
                    "no config found (looked for {}); run with --init to create one",
                    CONFIG_CANDIDATES.join(", ")
                ),
            )
        })
}

/// Loads a config document.
///
/// # Returns
/// * `Ok(Config)` - Parsed configuration
/// * `Err(ConfigRead)` - If the file cannot be read or parsed
pub fn load_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path).map_err(|e| SemverError::config_read(path, e))?;
    ConfigFormat::from_path(path)
        .parse(&text)
        .map_err(|e| SemverError::config_read(path, e))
}

/// Writes a config document in the format implied by its extension.
///
/// # Returns
/// * `Ok(())` - Success
/// * `Err(ConfigWrite)` - If the config cannot be serialized or written
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    let text = ConfigFormat::from_path(path)
        .render(config)
        .map_err(|e| SemverError::config_write(path, e))?;
    fs::write(path, text).map_err(|e| SemverError::config_write(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new(".semver.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("x/VERSION.TOML")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new(".semver.yaml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new(".semver")), ConfigFormat::Yaml);
    }

    #[test]
    fn test_tracked_files_appends_config_last() {
        let mut config = Config::default();
        config
            .files
            .insert("Chart.yaml".to_string(), r"version:\s*.*".to_string());

        let tracked = config
            .tracked_files(Path::new("project/.semver.yaml"))
            .unwrap();

        assert_eq!(tracked.len(), 2);
        assert_eq!(tracked[0].path(), Path::new("project/Chart.yaml"));
        assert_eq!(tracked[1].path(), Path::new("project/.semver.yaml"));
        assert_eq!(tracked[1].pattern(), ConfigFormat::Yaml.version_locator());
    }

    #[test]
    fn test_tracked_files_replaces_explicit_self_entry() {
        let mut config = Config::default();
        config
            .files
            .insert(".semver.toml".to_string(), "anything".to_string());

        let tracked = config.tracked_files(Path::new("repo/.semver.toml")).unwrap();

        assert_eq!(tracked.len(), 1);
        assert_eq!(tracked[0].pattern(), ConfigFormat::Toml.version_locator());
    }

    #[test]
    fn test_tracked_files_invalid_pattern() {
        let mut config = Config::default();
        config.files.insert("a.txt".to_string(), "(".to_string());

        assert!(matches!(
            config.tracked_files(Path::new(".semver.yaml")),
            Err(SemverError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_yaml_locator_ignores_nested_keys() {
        let text = "files:\n  Chart.yaml: 'version: .*'\nversion: 1.2.3\n";
        let locator = regex::Regex::new(ConfigFormat::Yaml.version_locator()).unwrap();
        assert_eq!(locator.find(text).unwrap().as_str(), "version: 1.2.3");
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.version = "1.2.3".to_string();
        config
            .files
            .insert("Cargo.toml".to_string(), r#"version = ".*""#.to_string());

        let text = ConfigFormat::Toml.render(&config).unwrap();
        assert_eq!(ConfigFormat::Toml.parse(&text).unwrap(), config);
    }
}
