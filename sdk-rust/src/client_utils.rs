use crate::SaamError;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// A parsed response body with the status it arrived with.
pub struct JsonResponse<R> {
    pub status: StatusCode,
    pub body: R,
}

/// Issue a GET request, parse the JSON response.
/// Throws error on non OK status code.
pub async fn get_json<R: DeserializeOwned>(
    client: &Client,
    url: &str,
    query: &[(String, String)],
    headers: reqwest::header::HeaderMap,
) -> Result<JsonResponse<R>, SaamError> {
    let response = client.get(url).headers(headers).query(query).send().await?;
    let status = response.status();
    tracing::debug!(%url, status = status.as_u16(), "SAAM response received");

    if status.is_success() {
        let body = response.json::<R>().await?;
        Ok(JsonResponse { status, body })
    } else {
        Err(SaamError::StatusCode(
            status,
            response.text().await.unwrap_or_default(),
        ))
    }
}
