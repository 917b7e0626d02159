use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("`archive.prefix` must not be empty; remove it to use the default")]
    EmptyArchivePrefix,

    #[error("failed to encode downloader manifest")]
    ManifestEncode { source: serde_json::Error },
}
