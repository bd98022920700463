use super::config::ConfigError;
use crate::core::composition::InvalidCompositionError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EngineError {
    #[error("Invalid search configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Candidate evaluation failed: {source}")]
    Evaluation {
        #[from]
        source: InvalidCompositionError,
    },
}
