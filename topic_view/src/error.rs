use std::fmt::{Display, Formatter};

/// Failure of a table fetch that is absorbed into an empty envelope.
#[derive(Debug)]
pub enum FetchError {
    Transport(anyhow::Error),
    Parse(anyhow::Error),
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Transport(e) => write!(f, "transport failure: {e:#}"),
            FetchError::Parse(e) => write!(f, "parse failure: {e:#}"),
        }
    }
}

impl std::error::Error for FetchError {}
