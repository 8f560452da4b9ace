//! Specification generation flow.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::traits::{Backend, GenerateOutput};
use crate::types::{GenerationRequest, GenerationResult, UploadFile};
use crate::{Error, Result};

/// Shown when the backend is unreachable or gives no error detail.
pub const GENERATION_FALLBACK_MESSAGE: &str =
    "The backend is unavailable or failed to generate specs.";

/// Where the flow is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenerationState {
    #[default]
    Idle,
    Submitting,
    Displaying {
        result: GenerationResult,
        message: Option<String>,
    },
    IdleWithError(String),
}

impl GenerationState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, GenerationState::Submitting)
    }

    /// The generate control is enabled only while nothing is in flight.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        match self {
            GenerationState::Displaying { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            GenerationState::IdleWithError(message) => Some(message),
            _ => None,
        }
    }

    /// Start a submission, discarding any previous result or error.
    pub fn begin(self) -> Self {
        GenerationState::Submitting
    }

    /// Record the outcome of a submission.
    pub fn resolve(self, outcome: Result<GenerateOutput>) -> Self {
        match outcome {
            Ok(output) => GenerationState::Displaying {
                result: output.result,
                message: output.message,
            },
            Err(err) => self.reject(&err),
        }
    }

    /// Fail without a result.
    pub fn reject(self, err: &Error) -> Self {
        GenerationState::IdleWithError(err.user_message(GENERATION_FALLBACK_MESSAGE))
    }
}

/// Orchestrates submissions to the generation endpoint.
pub struct GenerationFlow {
    backend: Arc<dyn Backend>,
    state: GenerationState,
}

impl GenerationFlow {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            state: GenerationState::default(),
        }
    }

    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    /// Validate the input and call the backend.
    ///
    /// With neither text nor a file, no request is made and the flow ends in
    /// [`GenerationState::IdleWithError`]. Calls made while a submission is
    /// in flight are ignored.
    #[instrument(skip_all, fields(has_text = text.as_deref().is_some_and(|t| !t.is_empty()), has_file = file.is_some()))]
    pub async fn generate(
        &mut self,
        text: Option<String>,
        file: Option<UploadFile>,
    ) -> &GenerationState {
        if !self.state.can_submit() {
            debug!("Generation already in flight");
            return &self.state;
        }

        let request = match GenerationRequest::new(text, file) {
            Ok(request) => request,
            Err(err) => {
                debug!(error = %err, "Generation input rejected");
                self.transition(|state| state.reject(&err));
                return &self.state;
            }
        };

        self.transition(GenerationState::begin);

        let outcome = self.backend.generate(&request).await;
        match &outcome {
            Ok(output) => info!(
                user_stories = output.result.user_stories().len(),
                api_specs = output.result.api_specs().len(),
                tables = output.result.db_schema().len(),
                edge_cases = output.result.edge_cases().len(),
                "Specification generated"
            ),
            Err(err) => debug!(error = %err, "Generation failed"),
        }

        self.transition(|state| state.resolve(outcome));
        &self.state
    }

    fn transition(&mut self, f: impl FnOnce(GenerationState) -> GenerationState) {
        self.state = f(std::mem::take(&mut self.state));
    }
}

impl std::fmt::Debug for GenerationFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationFlow")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::testing::FakeBackend;
    use crate::types::{ApiEndpoint, TableSchema};
    use crate::view::{Section, SpecView};

    fn flow(backend: FakeBackend) -> (GenerationFlow, Arc<FakeBackend>) {
        let backend = Arc::new(backend);
        (GenerationFlow::new(backend.clone()), backend)
    }

    fn reset_password_result() -> GenerationResult {
        GenerationResult {
            user_stories: Some(vec![
                "As a user, I want to reset my password via email".into(),
            ]),
            api_specs: Some(vec![ApiEndpoint {
                method: "POST".into(),
                path: "/auth/reset".into(),
                description: "Reset password".into(),
            }]),
            db_schema: Some(vec![TableSchema {
                table: "users".into(),
                columns: Some(vec!["id".into(), "email".into()]),
            }]),
            edge_cases: Some(vec![]),
        }
    }

    #[tokio::test]
    async fn empty_input_makes_no_request() {
        let (mut flow, backend) = flow(FakeBackend::default());

        let state = flow.generate(Some(String::new()), None).await;

        assert_eq!(
            state.error(),
            Some("Add requirement text or a file to generate from.")
        );
        assert!(state.result().is_none());
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn text_only_request_renders_result() {
        let backend = FakeBackend::default().with_result(reset_password_result());
        let (mut flow, backend) = flow(backend);

        let state = flow
            .generate(Some("Users can reset password via email".into()), None)
            .await;

        let result = state.result().expect("result displayed");
        let view = SpecView::from(result);
        assert_eq!(view.sections().len(), 3);
        assert!(matches!(&view.sections()[1], Section::ApiEndpoints(rows) if rows[0].method == "POST"));
        assert!(matches!(&view.sections()[2], Section::DatabaseSchema(tables) if tables[0].table == "users"));
        assert!(!view.sections().iter().any(|s| matches!(s, Section::EdgeCases(_))));

        let sent = backend.last_request().expect("request sent");
        assert_eq!(sent.text(), Some("Users can reset password via email"));
        assert!(sent.file().is_none());
    }

    #[tokio::test]
    async fn unreachable_backend_shows_fallback_without_result() {
        let (mut flow, _) = flow(FakeBackend::unreachable());

        let state = flow.generate(Some("notes".into()), None).await;

        assert_eq!(state.error(), Some(GENERATION_FALLBACK_MESSAGE));
        assert!(state.result().is_none());
    }

    #[tokio::test]
    async fn backend_detail_is_surfaced() {
        let (mut flow, _) = flow(FakeBackend::failing(400, Some("Must provide either a file or raw text.")));

        let state = flow.generate(Some("notes".into()), None).await;

        assert_eq!(state.error(), Some("Must provide either a file or raw text."));
    }

    #[tokio::test]
    async fn new_submission_replaces_previous_result() {
        let backend = FakeBackend::default().with_result(reset_password_result());
        let (mut flow, _) = flow(backend);

        flow.generate(Some("first".into()), None).await;
        assert!(flow.state().result().is_some());

        let state = flow.generate(None, None).await;
        assert!(state.result().is_none());
        assert!(state.error().is_some());
    }

    #[tokio::test]
    async fn file_only_request_is_sent() {
        let (mut flow, backend) = flow(FakeBackend::default());
        let file = UploadFile::new("notes.pdf", vec![0x25, 0x50, 0x44, 0x46]);

        let state = flow.generate(None, Some(file)).await;

        assert!(state.result().is_some());
        let sent = backend.last_request().expect("request sent");
        assert!(sent.text().is_none());
        assert_eq!(sent.file().map(|f| f.file_name()), Some("notes.pdf"));
    }

    #[test]
    fn submitting_disables_the_trigger() {
        let state = GenerationState::Idle.begin();
        assert!(!state.can_submit());
        assert!(state.result().is_none());
    }
}
