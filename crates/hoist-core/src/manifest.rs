use serde::{Deserialize, Serialize};

/// Manifest consumed by the runtime downloader to locate a deployed
/// archive in storage.
///
/// The field names are a wire contract: the downloader parses exactly
/// `{"bucket": ..., "key": ...}` and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloaderManifest {
    pub bucket: String,
    pub key: String,
}

/// Renders [`DownloaderManifest`] JSON for a concrete bucket/revision pair.
///
/// Stateless. Built during deploy preparation and invoked later, at
/// manifest-upload time, once the storage bucket for the attempt is known.
/// Safe to call repeatedly or concurrently with different arguments.
///
/// # Examples
///
/// ```
/// use hoist_core::ManifestRenderer;
///
/// let renderer = ManifestRenderer::new();
/// let json = renderer.render("my-bucket", "rev-1234").unwrap();
/// assert_eq!(json, r#"{"bucket":"my-bucket","key":"rev-1234"}"#);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestRenderer;

impl ManifestRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Encode the manifest for `bucket` and the revision `key`.
    pub fn render(&self, bucket: &str, key: &str) -> crate::Result<String> {
        let manifest = DownloaderManifest {
            bucket: bucket.to_owned(),
            key: key.to_owned(),
        };
        serde_json::to_string(&manifest).map_err(|e| crate::Error::ManifestEncode { source: e })
    }
}
