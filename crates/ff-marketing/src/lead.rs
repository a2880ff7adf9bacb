//! Shared lead-capture state
//!
//! One RFQ flow backs every entry point on the site so the resubmission
//! window and prefill apply no matter which button opened the form.

use crate::browser::{self, BrowserStorage};
use ff_core::{
    resolve, ContactAction, Dispatch, FieldErrors, HttpTransport, RfqFlow, RfqTransport, SiteConfig,
    SubmissionResult, SubmitRejection, SystemClock,
};
use leptos::*;
use std::sync::Arc;
use std::time::Duration;

/// What an RFQ form shows below its inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Editing,
    Sending,
    Done(String),
    Failed(String),
    /// Throttled; milliseconds until the next attempt is allowed
    Wait(u64),
}

impl SubmitStatus {
    /// Status for an action the page renders itself
    pub fn from_action(action: ContactAction) -> Self {
        match action {
            ContactAction::ShowSuccess(message) => SubmitStatus::Done(message),
            ContactAction::ShowError(message) => SubmitStatus::Failed(message),
            ContactAction::Redirect(_) | ContactAction::OpenTab(_) => SubmitStatus::Editing,
        }
    }

    /// Status for a rejected attempt; field errors render next to inputs
    pub fn from_rejection(rejection: &SubmitRejection) -> Self {
        match rejection {
            SubmitRejection::Invalid(_) => SubmitStatus::Editing,
            SubmitRejection::Throttled { retry_after_ms } => SubmitStatus::Wait(*retry_after_ms),
            SubmitRejection::Busy => SubmitStatus::Sending,
        }
    }

    pub fn message(&self) -> Option<String> {
        match self {
            SubmitStatus::Editing => None,
            SubmitStatus::Sending => Some("Sending...".to_string()),
            SubmitStatus::Done(message) | SubmitStatus::Failed(message) => Some(message.clone()),
            SubmitStatus::Wait(ms) => Some(format!(
                "Request already sent. Please wait {}s before sending again.",
                ms.div_ceil(1000)
            )),
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, SubmitStatus::Sending)
    }
}

#[derive(Clone, Copy)]
pub struct LeadCapture {
    pub flow: StoredValue<RfqFlow>,
    config: StoredValue<SiteConfig>,
    /// Source tag of the open modal, `None` when closed
    modal_source: RwSignal<Option<String>>,
}

impl LeadCapture {
    pub fn new() -> Self {
        let config = site_config();
        let flow = RfqFlow::new(
            Arc::new(SystemClock),
            Arc::new(BrowserStorage),
            config.resubmit_window_ms,
        );
        Self {
            flow: store_value(flow),
            config: store_value(config),
            modal_source: create_rw_signal(None),
        }
    }

    pub fn config(&self) -> SiteConfig {
        self.config.get_value()
    }

    pub fn open_modal(&self, source: &str) {
        self.modal_source.set(Some(source.to_string()));
    }

    pub fn close_modal(&self) {
        self.modal_source.set(None);
    }

    pub fn modal_source(&self) -> Option<String> {
        self.modal_source.get()
    }

    /// Untracked check, safe outside reactive scopes
    pub fn is_modal_open(&self) -> bool {
        self.modal_source.with_untracked(Option::is_some)
    }

    /// Drive a planned dispatch to its result.
    ///
    /// Navigation actions run here; success and error are handed to `on_done`
    /// for the caller to render.
    pub fn deliver(&self, dispatch: Dispatch, on_done: impl Fn(ContactAction) + 'static) {
        let this = *self;
        match dispatch {
            Dispatch::Immediate(result) => this.follow(result, on_done),
            Dispatch::Post(submission) => {
                let endpoint = browser::endpoint_url(&this.config.with_value(|c| c.rfq_endpoint.clone()));
                spawn_local(async move {
                    let response = HttpTransport::new(endpoint).send(&submission).await;
                    if let Some(result) = this.flow.try_update_value(|flow| flow.complete(response)) {
                        this.follow(result, on_done);
                    }
                });
            }
        }
    }

    /// Route a planned attempt into form state.
    ///
    /// `planned` is `None` only when the flow has been disposed.
    pub fn settle(
        &self,
        planned: Option<Result<Dispatch, SubmitRejection>>,
        errors: RwSignal<FieldErrors>,
        status: RwSignal<SubmitStatus>,
        close_on_success: bool,
    ) {
        let Some(planned) = planned else {
            return;
        };
        let this = *self;
        let delay_ms = self.config.with_value(|c| c.success_close_delay_ms);
        match Settlement::from_planned(planned) {
            Settlement::Deliver { dispatch, sending } => {
                if sending {
                    status.set(SubmitStatus::Sending);
                }
                self.deliver(dispatch, move |action| {
                    let next = SubmitStatus::from_action(action);
                    if let Some(delay) = close_delay(&next, close_on_success, delay_ms) {
                        set_timeout(move || this.close_modal(), delay);
                    }
                    status.set(next);
                });
            }
            Settlement::Invalid(found) => {
                errors.set(found);
                status.set(SubmitStatus::Editing);
            }
            Settlement::Status(next) => status.set(next),
        }
    }

    fn follow(&self, result: SubmissionResult, on_done: impl Fn(ContactAction)) {
        let action = self.config.with_value(|config| resolve(&result, config));
        if !browser::perform(&action) {
            on_done(action);
        } else {
            self.close_modal();
        }
    }
}

/// What a form does with a planned attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// Hand the dispatch to [`LeadCapture::deliver`]; `sending` while a POST is out
    Deliver { dispatch: Dispatch, sending: bool },
    /// Show these errors next to their inputs
    Invalid(FieldErrors),
    Status(SubmitStatus),
}

impl Settlement {
    pub fn from_planned(planned: Result<Dispatch, SubmitRejection>) -> Self {
        match planned {
            Ok(dispatch) => {
                let sending = matches!(dispatch, Dispatch::Post(_));
                Settlement::Deliver { dispatch, sending }
            }
            Err(SubmitRejection::Invalid(found)) => Settlement::Invalid(found),
            Err(rejection) => Settlement::Status(SubmitStatus::from_rejection(&rejection)),
        }
    }
}

/// Delay before the modal closes itself, only after a shown success
pub fn close_delay(status: &SubmitStatus, close_on_success: bool, delay_ms: u64) -> Option<Duration> {
    match status {
        SubmitStatus::Done(_) if close_on_success => Some(Duration::from_millis(delay_ms)),
        _ => None,
    }
}

impl Default for LeadCapture {
    fn default() -> Self {
        Self::new()
    }
}

/// Site configuration; the endpoint can be pinned at build time
pub fn site_config() -> SiteConfig {
    SiteConfig {
        rfq_endpoint: option_env!("FF_RFQ_ENDPOINT").unwrap_or("/api/rfq").to_string(),
        ..SiteConfig::default()
    }
}

pub fn provide_lead_capture() -> LeadCapture {
    let lead = LeadCapture::new();
    provide_context(lead);
    lead
}

pub fn use_lead_capture() -> LeadCapture {
    expect_context::<LeadCapture>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ff_core::{RfqField, RfqSubmission};

    fn jane() -> RfqSubmission {
        RfqSubmission {
            name: "Jane".to_string(),
            email: "test@example.com".to_string(),
            country: None,
            message: None,
            source: "hero_quote".to_string(),
        }
    }

    #[test]
    fn test_post_settles_as_sending() {
        let settled = Settlement::from_planned(Ok(Dispatch::Post(jane())));
        assert_eq!(settled, Settlement::Deliver { dispatch: Dispatch::Post(jane()), sending: true });

        let immediate = Dispatch::Immediate(SubmissionResult::Mailto { data: Some(jane()) });
        match Settlement::from_planned(Ok(immediate)) {
            Settlement::Deliver { sending, .. } => assert!(!sending),
            other => panic!("expected delivery, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_settles_as_field_errors() {
        let mut found = FieldErrors::new();
        found.insert(RfqField::Name, "Please enter your name");

        let settled = Settlement::from_planned(Err(SubmitRejection::Invalid(found.clone())));
        assert_eq!(settled, Settlement::Invalid(found));

        let settled = Settlement::from_planned(Err(SubmitRejection::Throttled { retry_after_ms: 4_000 }));
        assert_eq!(settled, Settlement::Status(SubmitStatus::Wait(4_000)));
    }

    #[test]
    fn test_success_closes_modal_after_delay() {
        let config = SiteConfig::default();
        let done = SubmitStatus::from_action(resolve(&SubmissionResult::Success, &config));

        let delay = close_delay(&done, true, config.success_close_delay_ms);
        assert_eq!(delay, Some(Duration::from_millis(1_500)));
        assert!(delay.is_some_and(|d| d < Duration::from_secs(2)));

        // The wizard page stays open, and failures never auto-close
        assert_eq!(close_delay(&done, false, config.success_close_delay_ms), None);
        let failed = SubmitStatus::Failed("Something went wrong".into());
        assert_eq!(close_delay(&failed, true, config.success_close_delay_ms), None);
    }

    #[test]
    fn test_status_from_action() {
        assert_eq!(
            SubmitStatus::from_action(ContactAction::ShowSuccess("Thanks!".into())),
            SubmitStatus::Done("Thanks!".into())
        );
        assert_eq!(
            SubmitStatus::from_action(ContactAction::ShowError("oops".into())),
            SubmitStatus::Failed("oops".into())
        );
        assert_eq!(
            SubmitStatus::from_action(ContactAction::Redirect("mailto:a@b.co".into())),
            SubmitStatus::Editing
        );
    }

    #[test]
    fn test_status_from_rejection() {
        let throttled = SubmitRejection::Throttled { retry_after_ms: 2_500 };
        let status = SubmitStatus::from_rejection(&throttled);
        assert_eq!(status, SubmitStatus::Wait(2_500));
        assert_eq!(
            status.message().as_deref(),
            Some("Request already sent. Please wait 3s before sending again.")
        );

        let invalid = SubmitRejection::Invalid(FieldErrors::new());
        assert_eq!(SubmitStatus::from_rejection(&invalid).message(), None);
        assert!(SubmitStatus::from_rejection(&SubmitRejection::Busy).is_sending());
    }
}
