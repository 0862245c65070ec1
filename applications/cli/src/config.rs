/// CLI configuration
use crate::error::{CliError, Result};
use kara_pattern::{presets, PatternCache, PatternSet};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "kara.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CliConfig {
    /// Format specifications, tried in order
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,

    /// Compiled-pattern cache size (0 = unbounded)
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,

    /// Log filter used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; the default `kara.toml` is optional.
    /// Variables prefixed `KARA_` override file values, with
    /// `KARA_FORMATS` split on `;`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                settings = settings.add_source(config::File::from(default_path).required(false));
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("KARA")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(";")
                .with_list_parse_key("formats"),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.formats.is_empty() {
            return Err(CliError::Config(
                "At least one format specification is required (set KARA_FORMATS)".to_string(),
            ));
        }

        self.pattern_set(&PatternCache::new(self.cache_capacity))
            .map(|_| ())
    }

    /// Compile the configured formats through `cache`
    pub fn pattern_set(&self, cache: &PatternCache) -> Result<PatternSet> {
        let mut set = PatternSet::new();
        for spec in &self.formats {
            let pattern = cache
                .get_or_compile(spec)
                .map_err(|source| CliError::Pattern {
                    spec: spec.clone(),
                    source,
                })?;
            set.push(pattern);
        }
        Ok(set)
    }
}

// Default values
fn default_formats() -> Vec<String> {
    vec![
        presets::IDENTIFIER_ARTIST_TITLE.to_string(),
        presets::ARTIST_TITLE.to_string(),
    ]
}

fn default_cache_capacity() -> usize {
    kara_pattern::cache::DEFAULT_CACHE_CAPACITY
}

fn default_log_level() -> String {
    "kara_cli=info,kara_pattern=warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            formats: default_formats(),
            cache_capacity: default_cache_capacity(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("kara.toml");
        fs::write(
            &path,
            r#"
formats = ["{creator}/**/{identifier} - {artist} - {title}", "{title}"]
cache_capacity = 8
"#,
        )
        .unwrap();

        let config = CliConfig::load(Some(&path)).unwrap();

        assert_eq!(config.formats.len(), 2);
        assert_eq!(config.cache_capacity, 8);
        assert_eq!(config.log_level, default_log_level());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing.toml");

        assert!(matches!(
            CliConfig::load(Some(&path)),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_validate_reports_offending_spec() {
        let config = CliConfig {
            formats: vec!["{title}".to_string(), "a/***/{title}".to_string()],
            ..Default::default()
        };

        match config.validate() {
            Err(CliError::Pattern { spec, .. }) => assert_eq!(spec, "a/***/{title}"),
            other => panic!("expected pattern error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_requires_formats() {
        let config = CliConfig {
            formats: vec![],
            ..Default::default()
        };

        assert!(matches!(config.validate(), Err(CliError::Config(_))));
    }

    #[test]
    fn test_default_formats_compile() {
        assert!(CliConfig::default().validate().is_ok());
    }
}
