//! Optional TOML settings file.
//!
//! ```toml
//! lang = "zh"
//! exercise = "meditation"
//! reps = 5
//!
//! [animation]
//! damping_ratio = 0.25
//!
//! [animation.breath]
//! hold_secs = 5.0
//! ```
//!
//! Every field is optional; missing ones keep their defaults and command
//! line flags win over the file. Unknown keys are rejected so typos surface.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tgym_core::{AnimationConfig, ConfigError};

use crate::error::{GymError, Result};
use crate::exercise::ExerciseKind;

/// Contents of a settings file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GymConfig {
    pub lang: Option<String>,
    pub exercise: Option<ExerciseKind>,
    pub reps: Option<u32>,
    pub animation: AnimationConfig,
}

impl GymConfig {
    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Self::parse(text, Path::new("<inline>"))
    }

    /// Load and validate a settings file.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| GymError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Settings from `path`, or the defaults when no file was given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let config = Self::from_toml_file(path)?;
                tracing::info!(path = %path.display(), "loaded settings");
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    fn parse(text: &str, path: &Path) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|source| GymError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.animation.validate()?;
        if config.reps == Some(0) {
            return Err(ConfigError::Validation(vec!["reps must be positive".to_string()]).into());
        }
        Ok(config)
    }
}
