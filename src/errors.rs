use thiserror::Error;

/// Error type for chain construction failures.
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("cannot build a chain from an empty record collection")]
    EmptyInput,
}
