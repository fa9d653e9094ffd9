use anyhow::Context;
use directories::ProjectDirs;
use knuffel::Decode;
use log::LevelFilter;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.kdl";

#[derive(Decode, Debug, Clone, PartialEq)]
pub struct UpvotesConfig {
    #[knuffel(child)]
    pub general: Option<GeneralConfig>,
    #[knuffel(child)]
    pub output: Option<OutputConfig>,
}

#[derive(Decode, Debug, Clone, PartialEq)]
pub struct GeneralConfig {
    #[knuffel(property)]
    pub verify: Option<bool>,
    #[knuffel(property)]
    pub log: Option<bool>,
}

#[derive(Decode, Debug, Clone, PartialEq)]
pub struct OutputConfig {
    #[knuffel(property)]
    pub path: Option<String>,
}

impl UpvotesConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = knuffel::parse(CONFIG_FILE, &content)?;
        Ok(config)
    }

    /// Default location: `<config dir>/config.kdl`.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "upvotes", "upvotes")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Loads `explicit` if given, else the default location if it exists,
    /// else the built-in defaults.
    pub fn locate(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => {
                log::debug!("Using config {}", path.display());
                Self::load(path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn verify(&self) -> bool {
        self.general.as_ref().and_then(|g| g.verify).unwrap_or(false)
    }

    pub fn log_enabled(&self) -> bool {
        self.general.as_ref().and_then(|g| g.log).unwrap_or(true)
    }

    /// Caps `current` at `Warn` when logging is turned off.
    pub fn max_log_level(&self, current: LevelFilter) -> LevelFilter {
        if self.log_enabled() {
            current
        } else {
            current.min(LevelFilter::Warn)
        }
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }
}

impl Default for UpvotesConfig {
    fn default() -> Self {
        Self {
            general: Some(GeneralConfig {
                verify: Some(false),
                log: Some(true),
            }),
            output: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = UpvotesConfig::default();
        assert!(!config.verify());
        assert!(config.log_enabled());
        assert_eq!(config.output_path(), None);
    }

    #[test]
    fn test_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "general verify=true log=false").unwrap();
        writeln!(file, "output path=\"scores.txt\"").unwrap();

        let config = UpvotesConfig::load(file.path()).unwrap();
        assert!(config.verify());
        assert!(!config.log_enabled());
        assert_eq!(config.output_path(), Some("scores.txt"));
    }

    #[test]
    fn test_load_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "general verify=true").unwrap();

        let config = UpvotesConfig::load(file.path()).unwrap();
        assert!(config.verify());
        assert!(config.log_enabled());
        assert_eq!(config.output_path(), None);
    }

    #[test]
    fn test_max_log_level() {
        let quiet = UpvotesConfig {
            general: Some(GeneralConfig {
                verify: None,
                log: Some(false),
            }),
            output: None,
        };
        assert_eq!(quiet.max_log_level(LevelFilter::Trace), LevelFilter::Warn);
        assert_eq!(quiet.max_log_level(LevelFilter::Error), LevelFilter::Error);

        let default = UpvotesConfig::default();
        assert_eq!(default.max_log_level(LevelFilter::Debug), LevelFilter::Debug);
    }

    #[test]
    fn test_explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(UpvotesConfig::locate(Some(dir.path().join("nope.kdl").as_path())).is_err());
    }
}
