use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected status {status} from {url}")]
    Http {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not resolve '{path}' against {base}: {source}")]
    Url {
        base: String,
        path: String,
        #[source]
        source: url::ParseError,
    },

    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl HarvestError {
    /// True for the failure kinds produced by the fetch layer itself, as
    /// opposed to local configuration or output problems.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            HarvestError::Transport { .. } | HarvestError::Http { .. } | HarvestError::Decode { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, HarvestError>;
