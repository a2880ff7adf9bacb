//! Delivery of RFQ submissions to the server endpoint

use crate::rfq::{RfqResponse, RfqSubmission};
use crate::{CoreError, CoreResult};
use async_trait::async_trait;
use reqwest::multipart::Form;
use tracing::debug;

/// Sends one submission and returns the server's answer.
///
/// Futures are not required to be `Send` so browser fetch can implement it.
#[async_trait(?Send)]
pub trait RfqTransport {
    async fn send(&self, submission: &RfqSubmission) -> CoreResult<RfqResponse>;
}

/// Multipart POST to the RFQ endpoint
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// `endpoint` must be an absolute URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Multipart body with the five fields the endpoint expects
pub fn submission_form(submission: &RfqSubmission) -> Form {
    Form::new()
        .text("name", submission.name.clone())
        .text("email", submission.email.clone())
        .text("country", submission.country.clone().unwrap_or_default())
        .text("message", submission.message.clone().unwrap_or_default())
        .text("source", submission.source.clone())
}

#[async_trait(?Send)]
impl RfqTransport for HttpTransport {
    async fn send(&self, submission: &RfqSubmission) -> CoreResult<RfqResponse> {
        debug!(endpoint = %self.endpoint, source = %submission.source, "posting rfq");

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(submission_form(submission))
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        match serde_json::from_slice::<RfqResponse>(&bytes) {
            Ok(body) => Ok(body),
            Err(_) if !status.is_success() => Err(CoreError::Status(status.as_u16())),
            Err(e) => Err(CoreError::Decode(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_keeps_endpoint() {
        let transport = HttpTransport::new("https://fastfunrc.com/api/rfq");
        assert_eq!(transport.endpoint(), "https://fastfunrc.com/api/rfq");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_http_error() {
        let transport = HttpTransport::new("http://127.0.0.1:9/api/rfq");
        let submission = RfqSubmission {
            name: "Jane".to_string(),
            email: "test@example.com".to_string(),
            country: None,
            message: None,
            source: "hero_quote".to_string(),
        };
        assert!(matches!(transport.send(&submission).await, Err(CoreError::Http(_))));
    }
}
