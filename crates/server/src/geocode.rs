//! Forward-geocoding against a Nominatim-compatible service.

use shared_types::{AppError, NominatimPlace};

use crate::config::BackendConfig;
use crate::error_convert::ReqwestErrorExt;

/// Nominatim's usage policy requires an identifying User-Agent.
const GEOCODER_USER_AGENT: &str = concat!("bantay-outbreak/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct GeocoderClient {
    http: reqwest::Client,
    base_url: String,
}

impl GeocoderClient {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.geocoder_base_url.clone(),
        }
    }

    /// Run a free-text search and return the top result, if any.
    /// English place names are requested so acceptance checks and labels
    /// stay consistent across deployments.
    #[tracing::instrument(skip(self))]
    pub async fn search_first(&self, query: &str) -> Result<Option<NominatimPlace>, AppError> {
        let response = self
            .http
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("q", query),
                ("format", "json"),
                ("addressdetails", "1"),
                ("limit", "1"),
            ])
            .header("Accept-Language", "en")
            .header("User-Agent", GEOCODER_USER_AGENT)
            .send()
            .await
            .map_err(|e| e.into_app_error())?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!(status = %status, "geocoder request rejected");
            return Err(AppError::upstream(format!("Geocoder error: {}", status)));
        }

        let mut places: Vec<NominatimPlace> =
            response.json().await.map_err(|e| e.into_app_error())?;
        Ok(if places.is_empty() {
            None
        } else {
            Some(places.remove(0))
        })
    }
}
