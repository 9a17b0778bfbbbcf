use anyhow::Error as anyHowError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Clipboard {method_name:?} `{description:?}`: {error:?}")]
    Clipboard {
        method_name: String,
        description: String,
        error: anyHowError,
    },
    #[error("Config `{description}`: {error}")]
    Config {
        description: String,
        error: anyHowError,
    },
    #[error("Metrics {method_name:?}: {error:?}")]
    Metrics {
        method_name: String,
        error: anyHowError,
    },
}
