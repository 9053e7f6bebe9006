use async_trait::async_trait;
use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
};
use tracing::{debug, error};

use shared_config::AppConfig;
use shared_models::error::PREFERENCE_FAILED;
use shared_models::{ApiErrorBody, BookingError, BookingPayload, Doctor, PreferenceResponse};

use crate::{BookingBackend, DOCTORS_PATH, PREFERENCE_PATH};

pub struct MediturnosClient {
    client: Client,
    base_url: String,
}

impl MediturnosClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url.clone(),
        }
    }

    fn get_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn transport(err: reqwest::Error) -> BookingError {
    BookingError::Transport(err.to_string())
}

#[async_trait]
impl BookingBackend for MediturnosClient {
    async fn list_doctors(&self) -> Result<Vec<Doctor>, BookingError> {
        let url = self.url(DOCTORS_PATH);
        debug!("Fetching doctors from {}", url);

        let response = self.client.get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let body = response.text().await.map_err(transport)?;

        if !status.is_success() {
            error!("Doctor listing failed ({}): {}", status, body);
            return Err(BookingError::Http {
                status: status.as_u16(),
                message: body,
            });
        }

        let doctors: Vec<Doctor> = serde_json::from_str(&body)?;
        debug!("Fetched {} doctors", doctors.len());
        Ok(doctors)
    }

    async fn create_preference(
        &self,
        payload: &BookingPayload,
    ) -> Result<PreferenceResponse, BookingError> {
        let url = self.url(PREFERENCE_PATH);
        debug!("Creating payment preference for doctor {} at {}", payload.doctor_id, url);

        let response = self.client.post(&url)
            .headers(self.get_headers())
            .json(payload)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        // An unreadable body is treated like an empty one.
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            error!("Preference creation failed ({}): {}", status, body);
            return Err(BookingError::Http {
                status: status.as_u16(),
                message: ApiErrorBody::from_body(&body).message_or(PREFERENCE_FAILED),
            });
        }

        Ok(PreferenceResponse::from_body(&body))
    }
}
