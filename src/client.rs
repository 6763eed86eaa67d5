//! Client for the prediction service.
//!
//! One multipart `POST {base_url}/predict/upload` with the image under the
//! `file` form field returns the full [`SpeciesProfile`], predictions
//! included. There is no retry and no caching; a failure is reported once
//! and the caller decides what to show.

use thiserror::Error;

use crate::constants::{BASE_URL_ENV, DEFAULT_BASE_URL};
use crate::types::SpeciesProfile;

/// Result type alias for prediction service calls.
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Errors surfaced by the prediction client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (DNS, connection, transport).
    #[error("request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success HTTP status.
    #[error("prediction service returned HTTP {0}")]
    Status(u16),

    /// The response body could not be decoded as a species profile.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Handle on the prediction service endpoint.
#[derive(Debug, Clone)]
pub struct PredictClient {
    base_url: String,
}

impl PredictClient {
    /// Creates a client for the given base URL. A trailing slash is trimmed
    /// so URL joining stays predictable.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Creates a client from the `FIELDLENS_BASE_URL` environment variable,
    /// falling back to the default local service address.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the upload endpoint.
    pub fn upload_url(&self) -> String {
        format!("{}/predict/upload", self.base_url)
    }

    /// Uploads the image and returns the decoded profile.
    ///
    /// The service answers a single upload with both the primary catalog
    /// entry and the ranked predictions, so one call is all it takes.
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn classify(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<SpeciesProfile> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_owned())
            .mime_str("application/octet-stream")
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = reqwest::Client::new()
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        response
            .json::<SpeciesProfile>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Uploads the image through the browser's `fetch`, mirroring the native
    /// path: one multipart POST, decoded into a profile.
    #[cfg(target_arch = "wasm32")]
    pub async fn classify(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<SpeciesProfile> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;

        let js_err = |context: &str| {
            move |e: wasm_bindgen::JsValue| ClientError::Transport(format!("{context}: {e:?}"))
        };

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());
        let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)
            .map_err(js_err("blob construction"))?;

        let form = web_sys::FormData::new().map_err(js_err("form construction"))?;
        form.append_with_blob_and_filename("file", &blob, file_name)
            .map_err(js_err("form append"))?;

        let mut opts = web_sys::RequestInit::new();
        opts.method("POST");
        opts.body(Some(form.as_ref()));

        let request = web_sys::Request::new_with_str_and_init(&self.upload_url(), &opts)
            .map_err(js_err("request construction"))?;
        let window = web_sys::window()
            .ok_or_else(|| ClientError::Transport("no window available".to_string()))?;

        let response_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_err("fetch"))?;
        let response: web_sys::Response = response_value
            .dyn_into()
            .map_err(js_err("response cast"))?;

        if !response.ok() {
            return Err(ClientError::Status(response.status()));
        }

        let text_promise = response.text().map_err(js_err("response body"))?;
        let text_value = JsFuture::from(text_promise)
            .await
            .map_err(js_err("response body"))?;
        let text = text_value
            .as_string()
            .ok_or_else(|| ClientError::Decode("response body is not text".to_string()))?;

        serde_json::from_str(&text).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let client = PredictClient::new("http://service.local/");
        assert_eq!(client.base_url(), "http://service.local");
        assert_eq!(
            client.upload_url(),
            "http://service.local/predict/upload"
        );

        let client = PredictClient::new("http://service.local//");
        assert_eq!(client.upload_url(), "http://service.local/predict/upload");
    }

    #[test]
    fn upload_url_joins_without_double_slash() {
        let client = PredictClient::new("http://127.0.0.1:5000");
        assert_eq!(
            client.upload_url(),
            "http://127.0.0.1:5000/predict/upload"
        );
    }

    #[test]
    fn error_messages_name_the_failure() {
        assert_eq!(
            ClientError::Status(502).to_string(),
            "prediction service returned HTTP 502"
        );
        assert!(ClientError::Transport("refused".into())
            .to_string()
            .contains("refused"));
    }
}
