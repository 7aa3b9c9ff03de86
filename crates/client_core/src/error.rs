use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("invalid recommender url '{url}': {source}")]
    InvalidServerUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("failed to reach recommender: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("recommender responded with status {status}")]
    Status { status: u16 },
    #[error("failed to decode recommender response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RecommendError {
    pub fn is_transport(&self) -> bool {
        matches!(self, RecommendError::Transport(_))
    }
}

impl From<reqwest::Error> for RecommendError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => RecommendError::Status {
                status: status.as_u16(),
            },
            None => RecommendError::Transport(err),
        }
    }
}
