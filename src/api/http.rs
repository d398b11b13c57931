use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::models::{Destination, DestinationDraft};

use super::{Ack, ApiError, ApiResult, DestinationApi};

/// Reqwest-backed client. The base URL lives behind a lock so a settings
/// change re-points requests without rebuilding the client.
pub struct HttpDestinationApi {
    client: Client,
    base_url: RwLock<String>,
}

impl HttpDestinationApi {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: RwLock::new(normalize(base_url)),
        })
    }

    pub fn base_url(&self) -> String {
        self.base_url.read().unwrap().clone()
    }

    pub fn set_base_url(&self, base_url: &str) {
        *self.base_url.write().unwrap() = normalize(base_url);
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let response = check_status(response).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|err| ApiError::InvalidResponse(err.to_string()))
    }
}

async fn check_status(response: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

fn normalize(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

#[async_trait]
impl DestinationApi for HttpDestinationApi {
    async fn fetch_destinations(&self) -> ApiResult<Vec<Destination>> {
        let response = self
            .client
            .get(self.url("/api/obtenerDatos"))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn insert_destination(&self, draft: &DestinationDraft) -> ApiResult<Ack> {
        let response = self
            .client
            .post(self.url("/api/insertarDatos"))
            .json(draft)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete_destination(&self, id: i64) -> ApiResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/eliminarDato/{id}")))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    async fn create_table(&self) -> ApiResult<Ack> {
        let response = self
            .client
            .post(self.url("/api/crearNuevaTabla"))
            .send()
            .await?;
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_drops_trailing_slash() {
        let api = HttpDestinationApi::new("http://localhost:3000/").unwrap();
        assert_eq!(api.base_url(), "http://localhost:3000");
        assert_eq!(api.url("/api/obtenerDatos"), "http://localhost:3000/api/obtenerDatos");
    }

    #[test]
    fn base_url_can_be_repointed() {
        let api = HttpDestinationApi::new("http://localhost:3000").unwrap();
        api.set_base_url("https://example.test/backend/");
        assert_eq!(api.url("/api/eliminarDato/7"), "https://example.test/backend/api/eliminarDato/7");
    }
}
