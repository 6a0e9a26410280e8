//! Configuration options for recipe recommendation.
//!
//! [`RecommendOptions`] controls global behavior such as the minimum match
//! percentage a recipe needs to be recommended and whether diacritics are
//! folded before ingredient matching.

use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::ConfigError;

/// Default minimum match percentage for [`Recommender::recommend`](crate::Recommender::recommend).
pub const DEFAULT_MIN_MATCH_PERCENTAGE: u8 = 30;

/// Prefix for environment variable overrides, e.g. `RECIPEMATCH_MIN_MATCH_PERCENTAGE`.
pub const ENV_PREFIX: &str = "RECIPEMATCH";

/// Global options that control recommendation behavior.
///
/// # Defaults
///
/// - `min_match_percentage`: `30`
/// - `fold_diacritics`: `false` (names are only trimmed and lowercased)
///
/// # Examples
///
/// ```
/// use recipematch::RecommendOptions;
///
/// let opts = RecommendOptions::default();
/// assert_eq!(opts.min_match_percentage, 30);
/// assert!(!opts.fold_diacritics);
///
/// let opts = RecommendOptions { min_match_percentage: 50, ..Default::default() };
/// assert_eq!(opts.min_match_percentage, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RecommendOptions {
    /// Recipes scoring below this percentage are left out of recommendations.
    /// Must lie in `0..=100`.
    pub min_match_percentage: u8,

    /// When `true`, ingredient and inventory names are NFD-decomposed and
    /// stripped of combining marks before matching, so "jalapeno" matches
    /// "jalape\u{00f1}o".
    pub fold_diacritics: bool,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            min_match_percentage: DEFAULT_MIN_MATCH_PERCENTAGE,
            fold_diacritics: false,
        }
    }
}

impl RecommendOptions {
    /// Load options from defaults, an optional TOML file, then environment.
    ///
    /// Later sources override earlier ones. Environment variables use the
    /// [`ENV_PREFIX`] prefix, e.g. `RECIPEMATCH_MIN_MATCH_PERCENTAGE=50`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] if the file is missing or unreadable, or a
    /// value has the wrong type, and [`ConfigError::MinMatchOutOfRange`] if
    /// the resulting percentage exceeds 100.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let options: Self = settings.try_deserialize()?;
        options.validate()?;

        tracing::debug!(
            min_match_percentage = options.min_match_percentage,
            fold_diacritics = options.fold_diacritics,
            "loaded recommendation options"
        );

        Ok(options)
    }

    /// Check that the options are within their documented ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MinMatchOutOfRange`] when
    /// `min_match_percentage > 100`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_match_percentage > 100 {
            return Err(ConfigError::MinMatchOutOfRange(self.min_match_percentage));
        }
        Ok(())
    }
}
