use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// hoist.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HoistConfig {
    #[serde(default)]
    pub archive: ArchiveConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// Scratch directory the archive is written into (defaults to
    /// tmp/fastboot-deploy). Cleared by staging before every build attempt.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Archive file name prefix, prepended to the revision key
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Glob patterns excluded from the archive. Accepts a single pattern
    /// string or a list of patterns.
    #[serde(default)]
    pub ignore: IgnorePatterns,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            prefix: default_prefix(),
            ignore: IgnorePatterns::default(),
        }
    }
}

/// Ordered glob patterns matched against `/`-separated paths relative to
/// the archive root. A path is excluded when any pattern matches.
///
/// Deserializes from either a single string or a list of strings; a lone
/// string is equivalent to a one-element list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawIgnorePatterns")]
pub struct IgnorePatterns(Vec<String>);

impl IgnorePatterns {
    pub fn none() -> Self {
        Self(Vec::new())
    }

    pub fn patterns(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for IgnorePatterns {
    fn from(patterns: Vec<String>) -> Self {
        Self(patterns)
    }
}

impl From<&str> for IgnorePatterns {
    fn from(pattern: &str) -> Self {
        Self(vec![pattern.to_owned()])
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIgnorePatterns {
    One(String),
    Many(Vec<String>),
}

impl From<RawIgnorePatterns> for IgnorePatterns {
    fn from(raw: RawIgnorePatterns) -> Self {
        match raw {
            RawIgnorePatterns::One(pattern) => Self(vec![pattern]),
            RawIgnorePatterns::Many(patterns) => Self(patterns),
        }
    }
}

impl HoistConfig {
    /// Load from hoist.toml at the given path, or return defaults if not found.
    pub fn load(project_dir: &std::path::Path) -> crate::Result<Self> {
        let config_path = project_dir.join("hoist.toml");
        let config: Self = if config_path.exists() {
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path,
                source: e,
            })?
        } else {
            tracing::debug!(dir = %project_dir.display(), "no hoist.toml found, using defaults");
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject configuration values that can only be a caller bug.
    fn validate(&self) -> crate::Result<()> {
        if self.archive.prefix.is_empty() {
            return Err(crate::Error::EmptyArchivePrefix);
        }
        Ok(())
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("tmp/fastboot-deploy")
}

fn default_prefix() -> String {
    "dist-".to_owned()
}
