//! Contact-channel resolution and outbound link building

use crate::rfq::{SubmissionResult, SUCCESS_MESSAGE};
use crate::SiteConfig;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::info;

/// Characters escaped by `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// The single follow-up a host page performs for a submission result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactAction {
    /// Navigate the current tab, used for `mailto:`
    Redirect(String),
    /// Open in a new tab, used for WhatsApp
    OpenTab(String),
    ShowSuccess(String),
    ShowError(String),
}

/// Build `mailto:<address>?subject=..&body=..`
pub fn mailto_url(address: &str, subject: &str, body: &str) -> String {
    format!("mailto:{}?subject={}&body={}", address, encode(subject), encode(body))
}

/// Build a `wa.me` deep link; everything but digits is dropped from the number
pub fn whatsapp_url(number: &str, text: Option<&str>) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    match text {
        Some(text) if !text.is_empty() => format!("https://wa.me/{}?text={}", digits, encode(text)),
        _ => format!("https://wa.me/{}", digits),
    }
}

/// Map a submission result onto exactly one contact action
pub fn resolve(result: &SubmissionResult, config: &SiteConfig) -> ContactAction {
    let action = match result {
        SubmissionResult::Success => ContactAction::ShowSuccess(SUCCESS_MESSAGE.to_string()),
        SubmissionResult::Error { message } => ContactAction::ShowError(message.clone()),
        SubmissionResult::Mailto { data } => {
            let url = match data {
                Some(submission) => mailto_url(&config.rfq_email, &submission.subject(), &submission.body()),
                None => format!("mailto:{}", config.rfq_email),
            };
            ContactAction::Redirect(url)
        }
        SubmissionResult::WhatsApp { data } => {
            let text = data.as_ref().map(|s| s.chat_text());
            ContactAction::OpenTab(whatsapp_url(&config.whatsapp_number, text.as_deref()))
        }
    };
    info!(status = result.status(), "contact channel resolved");
    action
}
