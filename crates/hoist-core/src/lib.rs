//! Core types and configuration for hoist.
//!
//! This crate defines the `hoist.toml` schema ([`HoistConfig`]), the
//! downloader manifest wire type ([`DownloaderManifest`]) with its
//! renderer, and shared error types.

pub mod config;
pub mod error;
pub mod manifest;

pub use config::{ArchiveConfig, HoistConfig, IgnorePatterns};
pub use error::{Error, Result};
pub use manifest::{DownloaderManifest, ManifestRenderer};
