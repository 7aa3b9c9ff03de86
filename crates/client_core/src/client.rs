use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{PreferenceRequest, RecommendationResponse};
use tracing::{debug, info, warn};
use url::Url;

use crate::{config::ClientSettings, error::RecommendError};

/// The external rule engine that turns preferences into dishes.
#[async_trait]
pub trait RecommenderApi: Send + Sync {
    async fn recommend(
        &self,
        request: &PreferenceRequest,
    ) -> Result<RecommendationResponse, RecommendError>;
}

pub struct HttpRecommender {
    http: Client,
    endpoint: Url,
}

impl HttpRecommender {
    pub fn new(server_url: &str) -> Result<Self, RecommendError> {
        Self::with_client(Client::new(), server_url)
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self, RecommendError> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(RecommendError::Transport)?;
        Self::with_client(http, &settings.server_url)
    }

    pub fn with_client(http: Client, server_url: &str) -> Result<Self, RecommendError> {
        let endpoint = recommend_endpoint(server_url)?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// `{server_url}/recommend`, keeping any path prefix of the base url.
pub fn recommend_endpoint(server_url: &str) -> Result<Url, RecommendError> {
    let invalid = |source| RecommendError::InvalidServerUrl {
        url: server_url.to_string(),
        source,
    };
    let mut base = Url::parse(server_url.trim()).map_err(invalid)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join("recommend").map_err(invalid)
}

#[async_trait]
impl RecommenderApi for HttpRecommender {
    async fn recommend(
        &self,
        request: &PreferenceRequest,
    ) -> Result<RecommendationResponse, RecommendError> {
        debug!(endpoint = %self.endpoint, "posting preferences");
        let res = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?
            .error_for_status()?;
        let body = res.bytes().await?;
        let response: RecommendationResponse = serde_json::from_slice(&body)?;

        if response.count_mismatch() {
            warn!(
                count = response.count,
                received = response.recommendations.len(),
                "recommender count disagrees with item list"
            );
        }
        info!(
            success = response.success,
            received = response.recommendations.len(),
            "recommendations received"
        );
        Ok(response)
    }
}
