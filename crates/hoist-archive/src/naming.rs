/// Derive the archive file name for one deploy attempt.
///
/// Both arguments are caller-supplied: the configured prefix default is
/// applied upstream when the config is loaded, never here.
///
/// # Examples
///
/// ```
/// use hoist_archive::naming::archive_file_name;
///
/// let name = archive_file_name("dist-", "1234").unwrap();
/// assert_eq!(name, "dist-1234.zip");
/// ```
pub fn archive_file_name(prefix: &str, revision_key: &str) -> Result<String, NameError> {
    if prefix.is_empty() {
        return Err(NameError::EmptyPrefix);
    }
    if revision_key.is_empty() {
        return Err(NameError::EmptyRevisionKey);
    }
    Ok(format!("{prefix}{revision_key}.zip"))
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("archive prefix must not be empty")]
    EmptyPrefix,
    #[error("revision key must not be empty")]
    EmptyRevisionKey,
}
