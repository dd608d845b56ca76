// Form interactor - Orchestrates a form submission against the backend

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::*;
use crate::output::view::{busy_label, FormView};
use crate::ports::*;

/// Form state shared between the controller and whoever displays it
pub type SharedView = Arc<Mutex<FormView>>;

fn lock(view: &SharedView) -> MutexGuard<'_, FormView> {
    view.lock().unwrap_or_else(PoisonError::into_inner)
}

/// How a submission ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Clips rendered as cards
    Rendered { mode: String, clips: Vec<Clip> },
    /// Backend succeeded without clips
    NoClips,
    /// Stopped by local validation; nothing was sent
    Rejected(ValidationError),
    /// Backend replied with a failure
    BackendError { status: u16, message: String },
    /// Request never completed
    NetworkError(String),
    /// Another submission is in flight; nothing was sent
    Busy,
}

impl SubmitOutcome {
    pub fn is_failure(&self) -> bool {
        !matches!(self, SubmitOutcome::Rendered { .. } | SubmitOutcome::NoClips)
    }
}

/// Holds the submit control disabled; restores it when dropped
struct SubmitGuard {
    view: SharedView,
    label: String,
}

impl SubmitGuard {
    /// Disable the control. `state` must be the locked contents of `view`.
    fn engage(view: &SharedView, state: &mut FormView, busy: &str) -> Self {
        let label = std::mem::replace(&mut state.submit.label, busy.to_string());
        state.submit.enabled = false;
        Self {
            view: Arc::clone(view),
            label,
        }
    }
}

/// Result of the synchronous part of a submit, decided under one lock
enum Admission {
    Busy,
    Rejected(ValidationError),
    Accepted(SubmissionIntent, SubmitGuard),
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        let mut state = lock(&self.view);
        state.submit.label = std::mem::take(&mut self.label);
        state.submit.enabled = true;
    }
}

/// Interactor behind the clip generation form
pub struct FormController {
    transport: Arc<dyn TransportPort>,
    log_port: Arc<dyn LogPort>,
    view: SharedView,
    backend_url: String,
}

impl FormController {
    /// Create new controller with injected ports, showing `mode`'s inputs
    pub fn new(
        transport: Arc<dyn TransportPort>,
        log_port: Arc<dyn LogPort>,
        backend_url: impl Into<String>,
        mode: Mode,
    ) -> Self {
        Self {
            transport,
            log_port,
            view: Arc::new(Mutex::new(FormView::new(mode))),
            backend_url: backend_url.into(),
        }
    }

    /// Handle to the live view
    pub fn view(&self) -> SharedView {
        Arc::clone(&self.view)
    }

    /// Copy of the current view
    pub fn snapshot(&self) -> FormView {
        lock(&self.view).clone()
    }

    /// Mode selector changed
    pub fn select_mode(&self, mode: Mode) {
        lock(&self.view).show_mode(mode);
    }

    /// Validate, send and render one submission
    pub async fn submit(&self, form: &RawForm) -> SubmitOutcome {
        let (intent, _guard) = match self.admit(form) {
            Admission::Accepted(intent, guard) => (intent, guard),
            Admission::Busy => {
                self.log_port
                    .warn("Submission ignored: another one is in progress")
                    .await;
                return SubmitOutcome::Busy;
            }
            Admission::Rejected(err) => {
                self.log_port
                    .debug(&format!("Form rejected: {}", err))
                    .await;
                return SubmitOutcome::Rejected(err);
            }
        };

        let mode = intent.mode();

        let request = RequestBuilder::build(&intent, &self.backend_url);
        self.log_port
            .info(&format!(
                "Requesting {} clips (max {}s, platform {}) via {}",
                intent.clips_count, intent.max_duration, intent.platform, request.url
            ))
            .await;

        match self.transport.send(&request).await {
            Ok(reply) => self.handle_reply(&reply, mode, &intent.platform).await,
            Err(err) => {
                self.log_port
                    .error(&format!("Backend request failed: {}", err))
                    .await;
                let message = connectivity_message(&self.backend_url);
                lock(&self.view).show_error(message.clone());
                SubmitOutcome::NetworkError(message)
            }
        }
    }

    /// Busy check, feedback reset, validation and disabling the control,
    /// all while holding the view lock so no other submit interleaves
    fn admit(&self, form: &RawForm) -> Admission {
        let mut state = lock(&self.view);
        if !state.submit.enabled {
            return Admission::Busy;
        }
        state.clear_feedback();

        match FormValidator::validate(form) {
            Ok(intent) => {
                let guard = SubmitGuard::engage(&self.view, &mut state, busy_label(intent.mode()));
                Admission::Accepted(intent, guard)
            }
            Err(err) => {
                state.show_error(err.to_string());
                Admission::Rejected(err)
            }
        }
    }

    async fn handle_reply(
        &self,
        reply: &HttpReply,
        mode: Mode,
        platform: &Platform,
    ) -> SubmitOutcome {
        match ResponseInterpreter::interpret(reply, mode) {
            ResponseOutcome::Clips { mode, clips } => {
                self.log_port
                    .info(&format!("Backend returned {} clips", clips.len()))
                    .await;
                lock(&self.view).render_clips(&clips, &mode, platform, &self.backend_url);
                SubmitOutcome::Rendered { mode, clips }
            }
            ResponseOutcome::Empty => {
                self.log_port.info("Backend returned no clips").await;
                lock(&self.view).show_message(NO_CLIPS_MESSAGE);
                SubmitOutcome::NoClips
            }
            ResponseOutcome::Failed { status, message } => {
                self.log_port
                    .warn(&format!("Backend error {}: {}", status, message))
                    .await;
                lock(&self.view).show_error(message.clone());
                SubmitOutcome::BackendError { status, message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::tracing_log::TracingLogAdapter;
    use crate::output::view::{SubmitButton, SUBMIT_LABEL};
    use async_trait::async_trait;
    use tokio::sync::Notify;

    const BACKEND: &str = "http://localhost:8000";

    /// Transport returning a canned result and recording the view mid-flight
    struct MockTransport {
        result: Result<HttpReply, DomainError>,
        requests: Mutex<Vec<OutboundRequest>>,
        seen: Mutex<Vec<FormView>>,
        view: Mutex<Option<SharedView>>,
    }

    impl MockTransport {
        fn new(result: Result<HttpReply, DomainError>) -> Arc<Self> {
            Arc::new(Self {
                result,
                requests: Mutex::new(Vec::new()),
                seen: Mutex::new(Vec::new()),
                view: Mutex::new(None),
            })
        }

        fn reply(status: u16, body: &str) -> Arc<Self> {
            Self::new(Ok(HttpReply::new(status, body)))
        }

        fn watch(&self, view: SharedView) {
            *self.view.lock().unwrap() = Some(view);
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TransportPort for MockTransport {
        async fn send(&self, request: &OutboundRequest) -> Result<HttpReply, DomainError> {
            self.requests.lock().unwrap().push(request.clone());
            if let Some(view) = self.view.lock().unwrap().as_ref() {
                self.seen.lock().unwrap().push(lock(view).clone());
            }
            self.result.clone()
        }

        async fn get(&self, _url: &str) -> Result<HttpReply, DomainError> {
            self.result.clone()
        }

        async fn download(&self, _url: &str) -> Result<Vec<u8>, DomainError> {
            Ok(Vec::new())
        }
    }

    fn controller(transport: Arc<MockTransport>, mode: Mode) -> FormController {
        let controller = FormController::new(
            transport.clone(),
            Arc::new(TracingLogAdapter::new("test")),
            BACKEND,
            mode,
        );
        transport.watch(controller.view());
        controller
    }

    fn url_form(clips: &str) -> RawForm {
        let mut form = RawForm::new(Mode::Url);
        form.clips_count = clips.to_string();
        form.max_duration = "30".to_string();
        form.video_url = "https://example.com/video".to_string();
        form
    }

    const TWO_CLIPS: &str = r#"{"mode":"url","clips":[
        {"id":1,"start":0,"end":30,"downloadUrl":"/clips/j_clip_1.mp4"},
        {"id":2,"start":65,"end":95,"downloadUrl":"/clips/j_clip_2.mp4"}
    ]}"#;

    #[tokio::test]
    async fn test_two_clips_render_two_cards() {
        let transport = MockTransport::reply(200, TWO_CLIPS);
        let controller = controller(transport.clone(), Mode::Url);

        let outcome = controller.submit(&url_form("2")).await;
        assert!(matches!(outcome, SubmitOutcome::Rendered { ref clips, .. } if clips.len() == 2));

        let view = controller.snapshot();
        assert!(view.result_visible);
        assert_eq!(view.cards.len(), 2);
        assert_eq!(view.cards[0].download_url, format!("{}/clips/j_clip_1.mp4", BACKEND));
        assert_eq!(view.cards[1].download_url, format!("{}/clips/j_clip_2.mp4", BACKEND));
        assert_eq!(view.cards[1].time_range, "01:05 → 01:35");
        assert_eq!(view.error, None);
    }

    #[tokio::test]
    async fn test_invalid_form_sends_nothing() {
        let transport = MockTransport::reply(200, TWO_CLIPS);
        let controller = controller(transport.clone(), Mode::Url);

        for clips in ["0", "21", "-3", "many"] {
            let outcome = controller.submit(&url_form(clips)).await;
            assert_eq!(outcome, SubmitOutcome::Rejected(ValidationError::ClipsCount));
            assert_eq!(
                controller.snapshot().error,
                Some(ValidationError::ClipsCount.to_string())
            );
        }
        assert_eq!(transport.request_count(), 0);
        assert_eq!(controller.snapshot().submit, SubmitButton::default());
    }

    #[tokio::test]
    async fn test_upload_without_file_sends_nothing() {
        let transport = MockTransport::reply(200, TWO_CLIPS);
        let controller = controller(transport.clone(), Mode::Upload);

        let mut form = RawForm::new(Mode::Upload);
        form.clips_count = "3".to_string();
        form.max_duration = "30".to_string();

        let outcome = controller.submit(&form).await;
        assert_eq!(outcome, SubmitOutcome::Rejected(ValidationError::MissingFile));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_clips_shows_message() {
        let transport = MockTransport::reply(200, r#"{"mode":"url","clips":[]}"#);
        let controller = controller(transport, Mode::Url);

        assert_eq!(controller.submit(&url_form("3")).await, SubmitOutcome::NoClips);
        let view = controller.snapshot();
        assert!(!view.result_visible);
        assert!(view.cards.is_empty());
        assert_eq!(view.message.as_deref(), Some("Nenhum corte foi gerado."));
    }

    #[tokio::test]
    async fn test_backend_detail_is_displayed() {
        let transport = MockTransport::reply(500, r#"{"detail":"x"}"#);
        let controller = controller(transport, Mode::Url);

        let outcome = controller.submit(&url_form("3")).await;
        assert!(outcome.is_failure());
        let view = controller.snapshot();
        assert_eq!(view.error.as_deref(), Some("x"));
        assert!(!view.result_visible);
    }

    #[tokio::test]
    async fn test_network_failure_shows_connectivity_hint() {
        let transport = MockTransport::new(Err(DomainError::Transport("refused".to_string())));
        let controller = controller(transport, Mode::Url);

        let outcome = controller.submit(&url_form("3")).await;
        assert!(matches!(outcome, SubmitOutcome::NetworkError(_)));
        let error = controller.snapshot().error.unwrap();
        assert!(error.contains(BACKEND));
    }

    #[tokio::test]
    async fn test_submit_disabled_in_flight_and_restored_after() {
        let cases = [
            MockTransport::reply(200, TWO_CLIPS),
            MockTransport::reply(200, "{}"),
            MockTransport::reply(503, ""),
            MockTransport::new(Err(DomainError::Transport("down".to_string()))),
        ];

        for transport in cases {
            let controller = controller(transport.clone(), Mode::Url);
            controller.submit(&url_form("2")).await;

            let seen = transport.seen.lock().unwrap();
            assert_eq!(seen.len(), 1);
            assert!(!seen[0].submit.enabled);
            assert_eq!(seen[0].submit.label, busy_label(Mode::Url));

            let after = controller.snapshot().submit;
            assert!(after.enabled);
            assert_eq!(after.label, SUBMIT_LABEL);
        }
    }

    #[tokio::test]
    async fn test_upload_busy_label() {
        let transport = MockTransport::reply(200, "{}");
        let controller = controller(transport.clone(), Mode::Upload);

        let mut form = RawForm::new(Mode::Upload);
        form.clips_count = "1".to_string();
        form.max_duration = "10".to_string();
        form.file = Some(SelectedFile::new("v.mp4", vec![0, 1]));
        controller.submit(&form).await;

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].submit.label, "Enviando vídeo e gerando cortes...");
        let requests = transport.requests.lock().unwrap();
        assert!(requests[0].url.ends_with(UPLOAD_ENDPOINT));
    }

    #[tokio::test]
    async fn test_busy_controller_ignores_submit() {
        let transport = MockTransport::reply(200, TWO_CLIPS);
        let controller = controller(transport.clone(), Mode::Url);

        let view = controller.view();
        let guard = {
            let mut state = lock(&view);
            state.show_error("earlier failure");
            SubmitGuard::engage(&view, &mut state, "busy")
        };
        assert_eq!(controller.submit(&url_form("2")).await, SubmitOutcome::Busy);
        assert_eq!(controller.submit(&url_form("0")).await, SubmitOutcome::Busy);
        assert_eq!(transport.request_count(), 0);
        assert_eq!(controller.snapshot().error.as_deref(), Some("earlier failure"));
        drop(guard);

        assert!(!controller.submit(&url_form("2")).await.is_failure());
        assert_eq!(transport.request_count(), 1);
    }

    /// Holds every request until released
    #[derive(Default)]
    struct GatedTransport {
        started: Notify,
        release: Notify,
        requests: Mutex<usize>,
    }

    #[async_trait]
    impl TransportPort for GatedTransport {
        async fn send(&self, _request: &OutboundRequest) -> Result<HttpReply, DomainError> {
            *self.requests.lock().unwrap() += 1;
            self.started.notify_one();
            self.release.notified().await;
            Ok(HttpReply::new(200, TWO_CLIPS))
        }

        async fn get(&self, _url: &str) -> Result<HttpReply, DomainError> {
            Ok(HttpReply::new(200, "{}"))
        }

        async fn download(&self, _url: &str) -> Result<Vec<u8>, DomainError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_second_submit_during_flight_leaves_view_alone() {
        let transport = Arc::new(GatedTransport::default());
        let controller = FormController::new(
            transport.clone(),
            Arc::new(TracingLogAdapter::new("test")),
            BACKEND,
            Mode::Url,
        );

        let first_form = url_form("2");
        let (first, (second, mid_flight)) = tokio::join!(controller.submit(&first_form), async {
            transport.started.notified().await;
            let second = controller.submit(&url_form("0")).await;
            let mid_flight = controller.snapshot();
            transport.release.notify_one();
            (second, mid_flight)
        });

        assert_eq!(second, SubmitOutcome::Busy);
        assert_eq!(mid_flight.error, None);
        assert!(!mid_flight.submit.enabled);
        assert_eq!(mid_flight.submit.label, busy_label(Mode::Url));

        assert!(matches!(first, SubmitOutcome::Rendered { .. }));
        assert_eq!(*transport.requests.lock().unwrap(), 1);
        let view = controller.snapshot();
        assert_eq!(view.cards.len(), 2);
        assert_eq!(view.submit, SubmitButton::default());
    }

    #[tokio::test]
    async fn test_next_submission_clears_previous_results() {
        let transport = MockTransport::reply(200, TWO_CLIPS);
        let controller = controller(transport, Mode::Url);
        controller.submit(&url_form("2")).await;
        assert_eq!(controller.snapshot().cards.len(), 2);

        controller.submit(&url_form("99")).await;
        let view = controller.snapshot();
        assert!(view.cards.is_empty());
        assert!(!view.result_visible);
        assert!(view.error.is_some());
    }

    #[tokio::test]
    async fn test_echoed_mode_in_title() {
        let body = r#"{"mode":"upload","clips":[{"id":"z","start":0,"end":5,"downloadUrl":"/clips/z.mp4"}]}"#;
        let controller = controller(MockTransport::reply(200, body), Mode::Url);
        controller.submit(&url_form("1")).await;
        assert_eq!(controller.snapshot().cards[0].title, "Corte #z (upload)");
    }

    #[test]
    fn test_select_mode_toggles_groups() {
        let controller = controller(MockTransport::reply(200, "{}"), Mode::Url);
        controller.select_mode(Mode::Upload);
        controller.select_mode(Mode::Upload);
        let view = controller.snapshot();
        assert!(view.upload_group_visible);
        assert!(!view.url_group_visible);
    }
}
