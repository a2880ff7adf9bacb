//! FastFun RC Lead Capture Core
//!
//! This crate holds everything behind the site's request-for-quote funnel:
//! field validation, the RFQ submission flow, contact-channel routing,
//! mailto and WhatsApp link building, the active-section scroll tracker
//! and the product catalog filter. It is shared by the marketing site and
//! the RFQ endpoint server.

pub mod catalog;
pub mod channel;
pub mod clock;
pub mod prefs;
pub mod rfq;
pub mod sections;
pub mod transport;
pub mod validation;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use catalog::{filter_options, filter_products, FilterKey, Product, ProductFilter, DEMO_PRODUCTS};
pub use channel::{mailto_url, resolve, whatsapp_url, ContactAction};
pub use clock::{Clock, ManualClock, SystemClock};
pub use prefs::{MemoryPreferences, PreferencesStore};
pub use rfq::{
    DeliveryMode, Dispatch, FlowState, RfqFlow, RfqForm, RfqResponse, RfqSubmission,
    RfqWizard, SubmissionResult, SubmitRejection,
};
pub use sections::{compute_active_section, ActiveSectionTracker, SectionRect};
pub use transport::{HttpTransport, RfqTransport};
pub use validation::{validate_email, validate_form, validate_required, FieldErrors, RfqField};

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned status {0}")]
    Status(u16),

    #[error("Decode error: {0}")]
    Decode(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Site-wide contact and flow configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Recipient of mailto RFQs
    pub rfq_email: String,
    /// WhatsApp number in E.164 form, with or without the leading `+`
    pub whatsapp_number: String,
    /// Server RFQ endpoint, absolute or site-relative
    pub rfq_endpoint: String,
    /// Default channel for the "Send Request" action
    pub delivery: DeliveryMode,
    /// Minimum time between two accepted submissions
    pub resubmit_window_ms: u64,
    /// Delay before the modal closes after a successful send
    pub success_close_delay_ms: u64,
    /// Distance below the viewport top used to mark the active section
    pub section_offset: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            rfq_email: "eric@fastfunrc.com".to_string(),
            whatsapp_number: "8613800138000".to_string(),
            rfq_endpoint: "/api/rfq".to_string(),
            delivery: DeliveryMode::Api,
            resubmit_window_ms: rfq::RESUBMIT_WINDOW_MS,
            success_close_delay_ms: 1500,
            section_offset: sections::DEFAULT_OFFSET,
        }
    }
}
