//! RFQ submission model and flow
//!
//! A submission starts as a raw [`RfqForm`], is validated into an
//! [`RfqSubmission`] and ends as a [`SubmissionResult`] that the host page
//! turns into a single follow-up action.

mod flow;
mod throttle;
mod wizard;

pub use flow::{Dispatch, FlowState, RfqFlow, SubmitRejection};
pub use throttle::SubmitThrottle;
pub use wizard::{RfqWizard, WizardError, WizardStep};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Minimum time between two accepted submissions
pub const RESUBMIT_WINDOW_MS: u64 = 8_000;

pub const SUCCESS_MESSAGE: &str = "Thanks! Check your inbox";
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again or contact us on WhatsApp.";

/// Raw modal input, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RfqForm {
    pub name: String,
    pub email: String,
    pub country: String,
    pub message: String,
}

/// A validated request for quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RfqSubmission {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Attribution tag of the element that opened the form
    pub source: String,
}

impl RfqSubmission {
    /// Email subject line
    pub fn subject(&self) -> String {
        format!("RFQ from {}", self.name)
    }

    /// Plain-text body listing every field
    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nCountry: {}\nMessage: {}\nSource: {}",
            self.name,
            self.email,
            self.country.as_deref().unwrap_or("-"),
            self.message.as_deref().unwrap_or("-"),
            self.source,
        )
    }

    /// Short greeting used to prefill a WhatsApp chat
    pub fn chat_text(&self) -> String {
        match &self.message {
            Some(message) => format!("Hi, I'm {} ({}). {}", self.name, self.email, message),
            None => format!("Hi, I'm {} ({}). I'd like a quote.", self.name, self.email),
        }
    }
}

/// How an accepted submission leaves the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    Mailto,
    WhatsApp,
    Api,
}

/// Outcome of a submission, consumed by the host page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SubmissionResult {
    Success,
    Error {
        message: String,
    },
    WhatsApp {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<RfqSubmission>,
    },
    Mailto {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<RfqSubmission>,
    },
}

impl SubmissionResult {
    pub fn error(message: impl Into<String>) -> Self {
        SubmissionResult::Error {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SubmissionResult::Error { .. })
    }

    /// Short label for logs
    pub fn status(&self) -> &'static str {
        match self {
            SubmissionResult::Success => "success",
            SubmissionResult::Error { .. } => "error",
            SubmissionResult::WhatsApp { .. } => "whatsapp",
            SubmissionResult::Mailto { .. } => "mailto",
        }
    }
}

/// JSON body returned by the RFQ endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RfqResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RfqResponse {
    pub fn success() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    /// Ask the client to deliver by mailto instead
    pub fn fallback() -> Self {
        Self {
            success: false,
            fallback: Some(true),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            fallback: None,
            error: Some(message.into()),
        }
    }

    /// Map the server's answer onto the client outcome.
    ///
    /// Server error text is logged, never shown; the visitor sees the
    /// generic banner.
    pub fn into_result(self, submission: Option<RfqSubmission>) -> SubmissionResult {
        if self.success {
            SubmissionResult::Success
        } else if self.fallback.unwrap_or(false) {
            SubmissionResult::Mailto { data: submission }
        } else {
            if let Some(error) = &self.error {
                warn!(error = %error, "rfq rejected by server");
            }
            SubmissionResult::error(GENERIC_ERROR)
        }
    }
}
