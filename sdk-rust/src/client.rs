use crate::{
    api::Document, client_utils, opentelemetry::trace_request, query, ApiKey, ArtworkApi,
    ArtworkQuery, Relay, SaamClientOptions, SaamError, SaamResult, DEFAULT_BASE_URL,
};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, ACCEPT},
    Client,
};
use std::collections::HashMap;

const PROVIDER: &str = "saam";
const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";
const API_KEY_HEADER: &str = "x-api-key";

/// HTTP client for the SAAM JSON:API endpoint.
pub struct SaamClient {
    api_key: ApiKey,
    base_url: String,
    relay: Relay,
    client: Client,
    headers: HashMap<String, String>,
}

impl SaamClient {
    #[must_use]
    pub fn new(options: SaamClientOptions) -> Self {
        let SaamClientOptions {
            api_key,
            base_url,
            relay,
            headers,
            client,
        } = options;

        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let client = client.unwrap_or_else(Client::new);
        let headers = headers.unwrap_or_default();

        Self {
            api_key,
            base_url,
            relay,
            client,
            headers,
        }
    }

    /// The full URL for `path`, relay included.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        self.relay.wrap(&format!("{}/{path}", self.base_url))
    }

    /// Build the request headers. The API key is resolved here so a key
    /// rotated in the environment is picked up by the next request.
    fn request_headers(&self) -> SaamResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        for (key, value) in &self.headers {
            let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|error| {
                SaamError::InvalidInput(format!("Invalid SAAM header name '{key}': {error}"))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|error| {
                SaamError::InvalidInput(format!(
                    "Invalid SAAM header value for '{key}': {error}"
                ))
            })?;
            headers.insert(header_name, header_value);
        }

        headers.insert(ACCEPT, HeaderValue::from_static(JSON_API_MEDIA_TYPE));

        let api_key = self.api_key.resolve()?;
        let api_key = HeaderValue::from_str(&api_key).map_err(|error| {
            SaamError::InvalidInput(format!("Invalid SAAM API key: {error}"))
        })?;
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);

        Ok(headers)
    }
}

#[async_trait::async_trait]
impl ArtworkApi for SaamClient {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    async fn search_artworks(&self, query: &ArtworkQuery) -> SaamResult<Document> {
        let url = self.endpoint("artworks");
        let url = url.as_str();
        trace_request("search_artworks", url, || async move {
            let headers = self.request_headers()?;
            client_utils::get_json(&self.client, url, &query.to_params(), headers).await
        })
        .await
    }

    async fn get_audio(&self, audio_id: &str) -> SaamResult<Document> {
        if audio_id.is_empty() {
            return Err(SaamError::InvalidInput(
                "audio id must not be empty".to_string(),
            ));
        }

        let url = self.endpoint(&format!("audio/{audio_id}"));
        let url = url.as_str();
        trace_request("get_audio", url, || async move {
            let headers = self.request_headers()?;
            client_utils::get_json(&self.client, url, &query::audio_params(), headers).await
        })
        .await
    }
}
