//! src/webhook/client.rs
use crate::domain::Signup;
use reqwest::Client;
use uuid::Uuid;

/// The request never reached the webhook, or the connection broke before a
/// response arrived. HTTP error statuses are *not* transport errors.
#[derive(thiserror::Error, Debug)]
#[error("Failed to deliver the sign-up to the webhook")]
pub struct TransportError(#[from] reqwest::Error);

#[derive(Debug, Clone)]
pub struct WebhookClient {
    http_client: Client,
    url: String,
}

impl WebhookClient {
    pub fn new(url: String) -> Self {
        Self {
            http_client: Client::new(),
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fire-and-forget POST of the sign-up.
    ///
    /// The response is treated as opaque: any status counts as delivered and
    /// the body is never read.
    #[tracing::instrument(
        name = "Posting sign-up to webhook",
        skip(self, signup),
        fields(
            request_id = %Uuid::new_v4(),
            email = %signup.email,
        )
    )]
    pub async fn send(&self, signup: &Signup) -> Result<(), TransportError> {
        let response = self
            .http_client
            .post(&self.url)
            .header("content-type", "application/json")
            .json(signup)
            .send()
            .await?;

        tracing::debug!(status = %response.status(), "Webhook responded");

        Ok(())
    }
}
