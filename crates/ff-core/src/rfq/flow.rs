//! RFQ modal state machine
//!
//! `Idle → Validating → (Idle with field errors) → Submitting → (Success | Error)`
//!
//! The flow is split into a synchronous [`RfqFlow::begin_submit`] that
//! validates, throttles and plans the outbound action, and
//! [`RfqFlow::complete`] that records the server's answer. UIs that cannot
//! hold the flow across an await point drive the two halves themselves;
//! everything else calls [`RfqFlow::submit`].

use super::{DeliveryMode, RfqForm, RfqResponse, RfqSubmission, SubmissionResult, SubmitThrottle};
use crate::clock::Clock;
use crate::prefs::{PreferencesStore, RFQ_EMAIL_KEY, RFQ_NAME_KEY};
use crate::transport::RfqTransport;
use crate::validation::{validate_form, FieldErrors, RfqField};
use crate::CoreResult;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Validating,
    Submitting,
    Success,
    Error,
}

/// Why a submit attempt produced no outbound action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejection {
    Invalid(FieldErrors),
    Throttled { retry_after_ms: u64 },
    /// A POST is already in flight
    Busy,
}

/// Outbound action planned by an accepted attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Delivered locally; nothing left to await
    Immediate(SubmissionResult),
    /// POST this submission, then call [`RfqFlow::complete`]
    Post(RfqSubmission),
}

pub struct RfqFlow {
    clock: Arc<dyn Clock>,
    prefs: Arc<dyn PreferencesStore>,
    throttle: SubmitThrottle,
    source: String,
    form: RfqForm,
    errors: FieldErrors,
    state: FlowState,
    outcome: Option<SubmissionResult>,
    pending: Option<RfqSubmission>,
}

impl RfqFlow {
    pub fn new(clock: Arc<dyn Clock>, prefs: Arc<dyn PreferencesStore>, resubmit_window_ms: u64) -> Self {
        Self {
            clock,
            prefs,
            throttle: SubmitThrottle::new(resubmit_window_ms),
            source: String::new(),
            form: RfqForm::default(),
            errors: FieldErrors::new(),
            state: FlowState::Idle,
            outcome: None,
            pending: None,
        }
    }

    /// Reset the form for a new opening, prefilled from stored preferences.
    ///
    /// The throttle survives reopening so closing and reopening the modal
    /// does not bypass the resubmission window. Reopening while a POST is
    /// in flight keeps that attempt and its form, so [`RfqFlow::complete`]
    /// still resolves against the sent submission.
    pub fn open(&mut self, source: &str) {
        if self.state == FlowState::Submitting {
            debug!(source = %self.source, reopened_from = %source, "rfq form reopened during submission");
            return;
        }
        self.source = source.to_string();
        self.form = self.prefill();
        self.errors = FieldErrors::new();
        self.state = FlowState::Idle;
        self.outcome = None;
        self.pending = None;
        info!(source = %self.source, "rfq form opened");
    }

    /// Name and email remembered from the last accepted submission
    pub fn prefill(&self) -> RfqForm {
        RfqForm {
            name: self.prefs.get(RFQ_NAME_KEY).unwrap_or_default(),
            email: self.prefs.get(RFQ_EMAIL_KEY).unwrap_or_default(),
            ..RfqForm::default()
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn form(&self) -> &RfqForm {
        &self.form
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn outcome(&self) -> Option<&SubmissionResult> {
        self.outcome.as_ref()
    }

    /// Update one input; editing a field clears its error
    pub fn set_field(&mut self, field: RfqField, value: impl Into<String>) {
        let value = value.into();
        match field {
            RfqField::Name => self.form.name = value,
            RfqField::Email => self.form.email = value,
            RfqField::Country => self.form.country = value,
            RfqField::Message => self.form.message = value,
        }
        self.errors.remove(field);
    }

    /// Validate, throttle and plan the outbound action
    pub fn begin_submit(&mut self, mode: DeliveryMode) -> Result<Dispatch, SubmitRejection> {
        if self.state == FlowState::Submitting {
            return Err(SubmitRejection::Busy);
        }

        self.state = FlowState::Validating;
        let submission = match validate_form(&self.form, &self.source) {
            Ok(submission) => submission,
            Err(errors) => {
                debug!(source = %self.source, fields = errors.len(), "rfq validation failed");
                self.errors = errors.clone();
                self.state = FlowState::Idle;
                return Err(SubmitRejection::Invalid(errors));
            }
        };
        self.errors = FieldErrors::new();
        self.dispatch(submission, mode)
    }

    /// Throttle and plan delivery of a submission validated elsewhere,
    /// such as the multi-step wizard
    pub fn begin_submit_with(
        &mut self,
        submission: RfqSubmission,
        mode: DeliveryMode,
    ) -> Result<Dispatch, SubmitRejection> {
        if self.state == FlowState::Submitting {
            return Err(SubmitRejection::Busy);
        }
        self.source = submission.source.clone();
        self.dispatch(submission, mode)
    }

    fn dispatch(&mut self, submission: RfqSubmission, mode: DeliveryMode) -> Result<Dispatch, SubmitRejection> {
        if let Err(retry_after_ms) = self.throttle.try_acquire(self.clock.now_ms()) {
            debug!(source = %self.source, retry_after_ms, "rfq submission throttled");
            self.state = FlowState::Idle;
            return Err(SubmitRejection::Throttled { retry_after_ms });
        }

        self.prefs.set(RFQ_EMAIL_KEY, &submission.email);
        self.prefs.set(RFQ_NAME_KEY, &submission.name);

        info!(source = %self.source, mode = ?mode, "rfq submission dispatched");

        match mode {
            DeliveryMode::Mailto => Ok(Dispatch::Immediate(self.finish(SubmissionResult::Mailto {
                data: Some(submission),
            }))),
            DeliveryMode::WhatsApp => Ok(Dispatch::Immediate(self.finish(SubmissionResult::WhatsApp {
                data: Some(submission),
            }))),
            DeliveryMode::Api => {
                self.state = FlowState::Submitting;
                self.pending = Some(submission.clone());
                Ok(Dispatch::Post(submission))
            }
        }
    }

    /// Record the answer to a [`Dispatch::Post`]
    pub fn complete(&mut self, response: CoreResult<RfqResponse>) -> SubmissionResult {
        let submission = self.pending.take();
        let result = match response {
            Ok(body) => body.into_result(submission),
            Err(e) => {
                warn!(source = %self.source, error = %e, "rfq submission failed");
                SubmissionResult::error(super::GENERIC_ERROR)
            }
        };
        self.finish(result)
    }

    /// Run a whole attempt, awaiting the transport when the mode needs it
    pub async fn submit<T>(&mut self, mode: DeliveryMode, transport: &T) -> Result<SubmissionResult, SubmitRejection>
    where
        T: RfqTransport + ?Sized,
    {
        match self.begin_submit(mode)? {
            Dispatch::Immediate(result) => Ok(result),
            Dispatch::Post(submission) => {
                let response = transport.send(&submission).await;
                Ok(self.complete(response))
            }
        }
    }

    fn finish(&mut self, result: SubmissionResult) -> SubmissionResult {
        self.state = if result.is_error() {
            FlowState::Error
        } else {
            FlowState::Success
        };
        info!(source = %self.source, status = result.status(), "rfq submission finished");
        self.outcome = Some(result.clone());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::prefs::MemoryPreferences;
    use crate::rfq::{GENERIC_ERROR, RESUBMIT_WINDOW_MS, SUCCESS_MESSAGE};
    use crate::{resolve, ContactAction, CoreError, SiteConfig};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Transport that records every call and replays a canned answer
    struct ScriptedTransport {
        calls: Mutex<Vec<RfqSubmission>>,
        reply: fn() -> CoreResult<RfqResponse>,
    }

    impl ScriptedTransport {
        fn new(reply: fn() -> CoreResult<RfqResponse>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                reply,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait(?Send)]
    impl RfqTransport for ScriptedTransport {
        async fn send(&self, submission: &RfqSubmission) -> CoreResult<RfqResponse> {
            self.calls.lock().unwrap().push(submission.clone());
            (self.reply)()
        }
    }

    fn setup() -> (RfqFlow, Arc<ManualClock>, Arc<MemoryPreferences>) {
        let clock = Arc::new(ManualClock::new(1_000_000));
        let prefs = Arc::new(MemoryPreferences::new());
        let flow = RfqFlow::new(clock.clone(), prefs.clone(), RESUBMIT_WINDOW_MS);
        (flow, clock, prefs)
    }

    fn fill_jane(flow: &mut RfqFlow) {
        flow.set_field(RfqField::Email, "test@example.com");
        flow.set_field(RfqField::Name, "Jane");
        flow.set_field(RfqField::Country, "");
    }

    #[tokio::test]
    async fn test_valid_submit_posts_once_and_succeeds() {
        let (mut flow, _clock, prefs) = setup();
        let transport = ScriptedTransport::new(|| Ok(RfqResponse::success()));

        flow.open("hero_quote");
        fill_jane(&mut flow);
        let result = flow.submit(DeliveryMode::Api, &transport).await.unwrap();

        assert_eq!(result, SubmissionResult::Success);
        assert_eq!(transport.call_count(), 1);
        assert_eq!(flow.state(), FlowState::Success);
        assert_eq!(prefs.get(RFQ_EMAIL_KEY).as_deref(), Some("test@example.com"));
        assert_eq!(prefs.get(RFQ_NAME_KEY).as_deref(), Some("Jane"));

        let sent = &transport.calls.lock().unwrap()[0];
        assert_eq!(sent.source, "hero_quote");
        assert_eq!(sent.country, None);

        let config = SiteConfig::default();
        assert_eq!(resolve(&result, &config), ContactAction::ShowSuccess(SUCCESS_MESSAGE.to_string()));
        assert!(config.success_close_delay_ms <= 2_000);
    }

    #[tokio::test]
    async fn test_empty_name_never_reaches_transport() {
        let (mut flow, _clock, prefs) = setup();
        let transport = ScriptedTransport::new(|| Ok(RfqResponse::success()));

        flow.open("contact_page");
        flow.set_field(RfqField::Email, "test@example.com");
        let rejection = flow.submit(DeliveryMode::Api, &transport).await.unwrap_err();

        match rejection {
            SubmitRejection::Invalid(errors) => assert!(errors.get(RfqField::Name).is_some()),
            other => panic!("expected field errors, got {:?}", other),
        }
        assert_eq!(transport.call_count(), 0);
        assert_eq!(flow.state(), FlowState::Idle);
        assert!(flow.errors().get(RfqField::Name).is_some());
        assert!(prefs.is_empty());

        // Mailto mode is held back the same way
        assert!(matches!(
            flow.begin_submit(DeliveryMode::Mailto),
            Err(SubmitRejection::Invalid(_))
        ));
        assert!(flow.outcome().is_none());
    }

    #[tokio::test]
    async fn test_resubmit_within_window_is_throttled() {
        let (mut flow, clock, _prefs) = setup();
        let transport = ScriptedTransport::new(|| Ok(RfqResponse::success()));

        flow.open("hero_quote");
        fill_jane(&mut flow);
        flow.submit(DeliveryMode::Api, &transport).await.unwrap();

        clock.advance(7_999);
        flow.open("hero_quote");
        fill_jane(&mut flow);
        let rejection = flow.submit(DeliveryMode::Api, &transport).await.unwrap_err();
        assert_eq!(rejection, SubmitRejection::Throttled { retry_after_ms: 1 });
        assert!(matches!(
            flow.begin_submit(DeliveryMode::Mailto),
            Err(SubmitRejection::Throttled { .. })
        ));
        assert_eq!(transport.call_count(), 1);

        clock.advance(1);
        flow.submit(DeliveryMode::Api, &transport).await.unwrap();
        assert_eq!(transport.call_count(), 2);
    }

    #[tokio::test]
    async fn test_invalid_attempt_does_not_start_window() {
        let (mut flow, _clock, _prefs) = setup();
        let transport = ScriptedTransport::new(|| Ok(RfqResponse::success()));

        flow.open("hero_quote");
        flow.set_field(RfqField::Email, "test@example.com");
        assert!(flow.submit(DeliveryMode::Api, &transport).await.is_err());

        flow.set_field(RfqField::Name, "Jane");
        assert!(flow.errors().is_empty());
        assert!(flow.submit(DeliveryMode::Api, &transport).await.is_ok());
    }

    #[tokio::test]
    async fn test_fallback_becomes_mailto() {
        let (mut flow, _clock, _prefs) = setup();
        let transport = ScriptedTransport::new(|| Ok(RfqResponse::fallback()));

        flow.open("product_ff-rc433-4k");
        fill_jane(&mut flow);
        let result = flow.submit(DeliveryMode::Api, &transport).await.unwrap();

        match &result {
            SubmissionResult::Mailto { data: Some(data) } => assert_eq!(data.name, "Jane"),
            other => panic!("expected mailto fallback, got {:?}", other),
        }
        match resolve(&result, &SiteConfig::default()) {
            ContactAction::Redirect(url) => assert!(url.starts_with("mailto:eric@fastfunrc.com?subject=")),
            other => panic!("expected redirect, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transport_failure_is_generic_error() {
        let (mut flow, _clock, _prefs) = setup();
        let transport = ScriptedTransport::new(|| Err(CoreError::Status(502)));

        flow.open("hero_quote");
        fill_jane(&mut flow);
        let result = flow.submit(DeliveryMode::Api, &transport).await.unwrap();

        assert_eq!(result, SubmissionResult::error(GENERIC_ERROR));
        assert_eq!(flow.state(), FlowState::Error);
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_server_error_text_shows_generic_banner() {
        let (mut flow, _clock, _prefs) = setup();
        let transport = ScriptedTransport::new(|| Ok(RfqResponse::error("relation \"leads\" does not exist")));

        flow.open("hero_quote");
        fill_jane(&mut flow);
        let result = flow.submit(DeliveryMode::Api, &transport).await.unwrap();

        assert_eq!(result, SubmissionResult::error(GENERIC_ERROR));
        assert_eq!(flow.state(), FlowState::Error);
    }

    #[test]
    fn test_mailto_mode_is_immediate() {
        let (mut flow, _clock, _prefs) = setup();
        flow.open("footer_email");
        fill_jane(&mut flow);

        match flow.begin_submit(DeliveryMode::Mailto).unwrap() {
            Dispatch::Immediate(SubmissionResult::Mailto { data: Some(data) }) => {
                assert_eq!(data.source, "footer_email")
            }
            other => panic!("unexpected dispatch {:?}", other),
        }
        assert_eq!(flow.state(), FlowState::Success);
    }

    #[test]
    fn test_whatsapp_mode_is_immediate() {
        let (mut flow, _clock, _prefs) = setup();
        flow.open("floating_whatsapp");
        fill_jane(&mut flow);

        let dispatch = flow.begin_submit(DeliveryMode::WhatsApp).unwrap();
        assert!(matches!(
            dispatch,
            Dispatch::Immediate(SubmissionResult::WhatsApp { data: Some(_) })
        ));
    }

    #[test]
    fn test_busy_while_post_in_flight() {
        let (mut flow, clock, _prefs) = setup();
        flow.open("hero_quote");
        fill_jane(&mut flow);

        assert!(matches!(flow.begin_submit(DeliveryMode::Api), Ok(Dispatch::Post(_))));
        assert_eq!(flow.state(), FlowState::Submitting);
        clock.advance(60_000);
        assert_eq!(flow.begin_submit(DeliveryMode::Api), Err(SubmitRejection::Busy));

        flow.complete(Ok(RfqResponse::success()));
        assert_eq!(flow.state(), FlowState::Success);
    }

    #[test]
    fn test_prepared_submission_shares_throttle() {
        let (mut flow, clock, prefs) = setup();
        let mut wizard = crate::rfq::RfqWizard::new();
        wizard.data.product = "FF-RC868-4K".to_string();
        wizard.next().unwrap();
        wizard.data.quantity = "300".to_string();
        wizard.next().unwrap();
        wizard.data.contact.name = "Jane".to_string();
        wizard.data.contact.email = "test@example.com".to_string();
        wizard.next().unwrap();
        let submission = wizard.finish("contact_wizard").unwrap();

        let dispatch = flow.begin_submit_with(submission.clone(), DeliveryMode::Api).unwrap();
        assert_eq!(dispatch, Dispatch::Post(submission.clone()));
        assert_eq!(flow.source(), "contact_wizard");
        assert_eq!(prefs.get(RFQ_NAME_KEY).as_deref(), Some("Jane"));
        flow.complete(Ok(RfqResponse::success()));

        clock.advance(1_000);
        flow.open("hero_quote");
        fill_jane(&mut flow);
        assert_eq!(
            flow.begin_submit(DeliveryMode::Mailto),
            Err(SubmitRejection::Throttled { retry_after_ms: 7_000 })
        );
        assert_eq!(
            flow.begin_submit_with(submission, DeliveryMode::Api),
            Err(SubmitRejection::Throttled { retry_after_ms: 7_000 })
        );
    }

    #[test]
    fn test_open_prefills_from_preferences() {
        let (mut flow, _clock, prefs) = setup();
        prefs.set(RFQ_EMAIL_KEY, "buyer@acme.de");
        prefs.set(RFQ_NAME_KEY, "Max");

        flow.open("nav_quote");
        assert_eq!(flow.form().email, "buyer@acme.de");
        assert_eq!(flow.form().name, "Max");
        assert!(flow.form().message.is_empty());
        assert_eq!(flow.source(), "nav_quote");
    }

    #[test]
    fn test_reopen_during_post_keeps_submission() {
        let (mut flow, _clock, _prefs) = setup();
        flow.open("hero_quote");
        fill_jane(&mut flow);
        assert!(matches!(flow.begin_submit(DeliveryMode::Api), Ok(Dispatch::Post(_))));

        flow.open("nav_quote");
        assert_eq!(flow.state(), FlowState::Submitting);
        assert_eq!(flow.source(), "hero_quote");
        assert_eq!(flow.form().name, "Jane");

        match flow.complete(Ok(RfqResponse::fallback())) {
            SubmissionResult::Mailto { data: Some(data) } => {
                assert_eq!(data.name, "Jane");
                assert_eq!(data.source, "hero_quote");
            }
            other => panic!("expected mailto with the sent submission, got {:?}", other),
        }

        // Once settled, opening resets as usual
        flow.open("nav_quote");
        assert_eq!(flow.state(), FlowState::Idle);
        assert_eq!(flow.source(), "nav_quote");
        assert!(flow.outcome().is_none());
    }

    #[test]
    fn test_prefill_reads_injected_preferences() {
        let (flow, _clock, prefs) = setup();
        assert_eq!(flow.prefill(), RfqForm::default());

        prefs.set(RFQ_NAME_KEY, "Jane");
        prefs.set(RFQ_EMAIL_KEY, "test@example.com");
        let form = flow.prefill();
        assert_eq!(form.name, "Jane");
        assert_eq!(form.email, "test@example.com");
        assert!(form.message.is_empty());
    }
}
