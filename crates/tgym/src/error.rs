use std::path::PathBuf;

use tgym_core::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GymError>;

#[derive(Debug, Error)]
pub enum GymError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("no exercise selected: input closed")]
    NoSelection,
}

impl GymError {
    /// Process exit status for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::ConfigRead { .. } | Self::ConfigParse { .. } => 2,
            Self::Io(_) | Self::NoSelection => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GymError;
    use tgym_core::ConfigError;

    #[test]
    fn config_errors_exit_with_usage_code() {
        let error = GymError::from(ConfigError::Validation(vec!["fps must be positive".into()]));
        assert_eq!(error.exit_code(), 2);
        assert_eq!(
            error.to_string(),
            "invalid animation config: fps must be positive"
        );
    }

    #[test]
    fn io_error_maps_to_generic_failure() {
        let error = GymError::from(std::io::Error::other("boom"));
        assert_eq!(error.exit_code(), 1);
        assert!(error.to_string().contains("boom"));
    }

    #[test]
    fn closed_input_is_failure() {
        assert_eq!(GymError::NoSelection.exit_code(), 1);
    }
}
