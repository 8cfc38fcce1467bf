use crate::utils::error::{EtlError, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// 取得供應商的 inventory 並解碼成 `T`
///
/// Only `200 OK` is accepted; any other status is reported with its status
/// text. The body is read to the end before decoding so transport failures
/// and malformed JSON surface as different errors.
pub async fn fetch_inventory<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T> {
    tracing::debug!("Making API request to: {}", url);
    let response = client.get(url).send().await?;

    let status = response.status();
    tracing::debug!("API response status: {}", status);

    if status != StatusCode::OK {
        return Err(EtlError::HttpStatusError {
            status: status.to_string(),
        });
    }

    let body = response.bytes().await?;
    tracing::debug!("Received {} bytes", body.len());

    serde_json::from_slice(&body).map_err(|source| EtlError::DecodeError { source })
}
