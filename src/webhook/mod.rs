//! src/webhook/mod.rs
mod client;
pub use client::{TransportError, WebhookClient};

/// n8n automation endpoint receiving new sign-ups.
pub const DEFAULT_WEBHOOK_URL: &str =
    "https://rantwilson.app.n8n.cloud/webhook-test/8846998e-65c6-408d-a873-f4199ffc04b2";
