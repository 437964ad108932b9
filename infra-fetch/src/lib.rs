use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use pixfit_domain::{DomainError, FetchedImage, ImageFetchPort};

pub struct FetchAdapterConfig {
    pub request_timeout: Duration,
    pub max_input_bytes: usize,
}

/// Outbound HTTP adapter for source image retrieval. One shared client,
/// request timeout and input-size cap applied to every fetch.
pub struct HttpImageFetchAdapter {
    client: Client,
    max_input_bytes: usize,
}

impl HttpImageFetchAdapter {
    pub fn new(config: FetchAdapterConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| {
                DomainError::internal_error(format!("failed to build HTTP client: {err}"))
            })?;
        Ok(Self {
            client,
            max_input_bytes: config.max_input_bytes,
        })
    }
}

#[async_trait]
impl ImageFetchPort for HttpImageFetchAdapter {
    async fn fetch(&self, url: &str) -> Result<FetchedImage, DomainError> {
        let response = self.client.get(url).send().await.map_err(|err| {
            tracing::debug!(url, error = %err, "source request failed");
            DomainError::fetch_failed(err.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url, status = status.as_u16(), "source returned non-success");
            return Err(DomainError::upstream_status(status.as_u16()));
        }

        let raw_content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_string();
        let media_type = parse_image_media_type(&raw_content_type)
            .ok_or_else(|| DomainError::upstream_not_image(raw_content_type.clone()))?;

        if let Some(length) = response.content_length() {
            if length as usize > self.max_input_bytes {
                return Err(DomainError::payload_too_large(self.max_input_bytes));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|err| DomainError::fetch_failed(err.to_string()))?;
            if bytes.len() + chunk.len() > self.max_input_bytes {
                return Err(DomainError::payload_too_large(self.max_input_bytes));
            }
            bytes.extend_from_slice(&chunk);
        }

        tracing::debug!(
            url,
            media_type = %media_type,
            byte_count = bytes.len(),
            "source image fetched"
        );

        Ok(FetchedImage { bytes, media_type })
    }
}

/// Parse a `Content-Type` header value into a normalized `image/<subtype>`
/// string. Parameters after `;` are dropped; anything that is not an image
/// type yields `None`.
pub fn parse_image_media_type(raw: &str) -> Option<String> {
    let essence = raw.split(';').next().unwrap_or("").trim();
    let (kind, subtype) = essence.split_once('/')?;
    if !kind.eq_ignore_ascii_case("image") {
        return None;
    }
    let subtype = subtype.trim();
    if subtype.is_empty() {
        return None;
    }
    Some(format!("image/{}", subtype.to_ascii_lowercase()))
}
