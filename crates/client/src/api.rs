//! HTTP client for the `/api/employees` resource.

use std::time::Duration;

use reqwest::{Client, Response};
use roster_core::employee::{Employee, EmployeePayload};
use roster_core::envelope::Envelope;
use roster_core::types::EmployeeId;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Roster API client.
///
/// Every call decodes the response envelope; failures come back as
/// [`ClientError::Api`] carrying the server's message and field errors.
#[derive(Clone)]
pub struct EmployeeApi {
    client: Client,
    base_url: String,
}

impl EmployeeApi {
    /// Create a client for an API mounted at `base_url`
    /// (e.g. `http://localhost:3000/api`).
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{base}/employees", base = self.base_url)
    }

    fn record_url(&self, id: EmployeeId) -> String {
        format!("{base}/employees/{id}", base = self.base_url)
    }

    /// All records, newest first.
    pub async fn list(&self) -> Result<Vec<Employee>> {
        let response = self.client.get(self.collection_url()).send().await?;
        require_data(decode(response).await?)
    }

    pub async fn get(&self, id: EmployeeId) -> Result<Employee> {
        let response = self.client.get(self.record_url(id)).send().await?;
        require_data(decode(response).await?)
    }

    pub async fn create(&self, payload: &EmployeePayload) -> Result<Employee> {
        tracing::debug!(email = ?payload.email, "Creating employee");
        let response = self
            .client
            .post(self.collection_url())
            .json(payload)
            .send()
            .await?;
        require_data(decode(response).await?)
    }

    pub async fn update(&self, id: EmployeeId, payload: &EmployeePayload) -> Result<Employee> {
        tracing::debug!(%id, "Updating employee");
        let response = self
            .client
            .put(self.record_url(id))
            .json(payload)
            .send()
            .await?;
        require_data(decode(response).await?)
    }

    /// Returns the server's confirmation message.
    pub async fn delete(&self, id: EmployeeId) -> Result<Option<String>> {
        tracing::debug!(%id, "Deleting employee");
        let response = self.client.delete(self.record_url(id)).send().await?;
        let envelope: Envelope<serde_json::Value> = decode(response).await?;
        Ok(envelope.message)
    }
}

/// Read a response into its envelope, turning failure statuses and
/// `success: false` bodies into [`ClientError::Api`].
async fn decode<T: DeserializeOwned>(response: Response) -> Result<Envelope<T>> {
    let status = response.status();
    let bytes = response.bytes().await?;
    let parsed = serde_json::from_slice::<Envelope<T>>(&bytes);

    match parsed {
        Ok(envelope) if status.is_success() && envelope.success => Ok(envelope),
        Ok(envelope) => {
            tracing::warn!(status = status.as_u16(), message = ?envelope.message, "API request failed");
            Err(ClientError::Api {
                status: status.as_u16(),
                message: envelope.message,
                errors: envelope.errors.into(),
            })
        }
        Err(e) if status.is_success() => Err(ClientError::Decode(e.to_string())),
        Err(_) => {
            tracing::warn!(status = status.as_u16(), "API request failed without an envelope");
            Err(ClientError::Api {
                status: status.as_u16(),
                message: None,
                errors: Default::default(),
            })
        }
    }
}

fn require_data<T>(envelope: Envelope<T>) -> Result<T> {
    envelope
        .data
        .ok_or_else(|| ClientError::Decode("response envelope has no data".into()))
}
