//! HTTP implementation of the quality service

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use tracing::debug;

use wqi_core::{
    AnalysisReport, AnalyzeRequest, Error, HealthStatus, Improvement, ImproveRequest,
    QualityService, Result,
};

use crate::config::ClientConfig;
use crate::wire::ImproveResponseWire;

/// `QualityService` over HTTP, speaking JSON both ways.
pub struct HttpQualityService {
    config: ClientConfig,
    client: Client,
}

impl HttpQualityService {
    /// Create a new client from configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Create a new client from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Attach the API key header when one is configured. The health endpoint
    /// is unauthenticated and skips this.
    fn authenticated(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.header("x-api-key", key),
            None => request,
        }
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let url = self.endpoint(path);
        debug!(%url, "sending request");

        let request = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .json(body);

        let response = self
            .authenticated(request)
            .send()
            .await
            .map_err(map_transport_error)?;

        check_status(response).await
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                Error::Schema(e.to_string())
            } else {
                Error::Network(e.to_string())
            }
        })
    }
}

fn map_transport_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Timeout("The service did not answer in time.".to_string())
    } else {
        Error::Network(err.to_string())
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status == StatusCode::FORBIDDEN {
        return Err(Error::Authentication(
            "The service rejected the API key.".to_string(),
        ));
    }
    if !status.is_success() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(Error::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response)
}

#[async_trait]
impl QualityService for HttpQualityService {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisReport> {
        let response = self.post_json("/analyze", request).await?;
        Self::decode(response).await
    }

    async fn improve(&self, request: &ImproveRequest) -> Result<Improvement> {
        let response = self.post_json("/improve", request).await?;
        let wire: ImproveResponseWire = Self::decode(response).await?;
        wire.into_improvement()
    }

    async fn health(&self) -> Result<HealthStatus> {
        let url = self.endpoint("/health");
        debug!(%url, "sending request");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let response = check_status(response).await?;
        Self::decode(response).await
    }
}
