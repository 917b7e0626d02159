use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use hoist_core::IgnorePatterns;

/// Compiled ignore rules for one archiving call.
///
/// Matching is evaluated against `/`-separated paths relative to the
/// archive root, regardless of host path conventions. Compilation is a
/// pure function of the pattern list: the same patterns always produce a
/// matcher with the same behavior.
#[derive(Debug, Clone)]
pub struct IgnoreMatcher {
    set: GlobSet,
}

impl IgnoreMatcher {
    /// Compile the configured patterns. An empty set excludes nothing.
    pub fn compile(patterns: &IgnorePatterns) -> Result<Self, MatcherError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns.patterns() {
            // `*` stays within one path component; crossing directories
            // takes an explicit `**`
            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|e| MatcherError::InvalidPattern {
                    pattern: pattern.clone(),
                    source: e,
                })?;
            builder.add(glob);
        }
        let set = builder.build().map_err(|e| {
            let pattern = e.glob().unwrap_or("").to_owned();
            MatcherError::InvalidPattern { pattern, source: e }
        })?;
        Ok(Self { set })
    }

    /// A path is excluded when any configured pattern matches it.
    pub fn is_excluded(&self, relative_path: &str) -> bool {
        self.set.is_match(relative_path)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error("invalid ignore pattern {pattern:?}")]
    InvalidPattern {
        pattern: String,
        source: globset::Error,
    },
}
