use serde_json::Value;
use tradedesk_business::{
    BusinessConfig, ConfirmPrompt, FixedAnswer, Notifier, RecordId, RenderedTable,
    ResourceConfig, ResourceController, TableView,
};
use wiremock::{MockServer, Request};

/// Keeps every message it was asked to show.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub messages: Vec<String>,
}

impl RecordingNotifier {
    #[allow(unused)]
    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}

/// Keeps every table it was asked to show.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub tables: Vec<RenderedTable>,
}

impl RecordingView {
    #[allow(unused)]
    pub fn last_ids(&self) -> Vec<RecordId> {
        self.tables.last().map(RenderedTable::ids).unwrap_or_default()
    }
}

impl TableView for RecordingView {
    fn show(&mut self, table: &RenderedTable) {
        self.tables.push(table.clone());
    }
}

/// Answers with a fixed value and remembers the questions.
#[derive(Debug)]
pub struct RecordingConfirm {
    answer: FixedAnswer,
    pub questions: Vec<String>,
}

impl RecordingConfirm {
    pub fn new(answer: bool) -> Self {
        Self {
            answer: FixedAnswer(answer),
            questions: Vec::new(),
        }
    }
}

impl ConfirmPrompt for RecordingConfirm {
    fn confirm(&mut self, question: &str) -> bool {
        self.questions.push(question.to_owned());
        self.answer.confirm(question)
    }
}

pub type TestController = ResourceController<RecordingNotifier, RecordingConfirm, RecordingView>;

pub struct TestCtx {
    pub mock_server: MockServer,
}

impl TestCtx {
    pub async fn new() -> Self {
        Self {
            mock_server: MockServer::start().await,
        }
    }

    pub fn config(&self) -> BusinessConfig {
        BusinessConfig::new(self.mock_server.uri())
    }

    #[allow(unused)]
    pub fn controller(&self, resource: &'static ResourceConfig, confirm: bool) -> TestController {
        ResourceController::new(
            self.config(),
            resource,
            RecordingNotifier::default(),
            RecordingConfirm::new(confirm),
            RecordingView::default(),
        )
    }

    #[allow(unused)]
    pub async fn requests(&self) -> Vec<Request> {
        self.mock_server
            .received_requests()
            .await
            .unwrap_or_default()
    }

    /// `(method, path)` of every request received so far.
    #[allow(unused)]
    pub async fn calls(&self) -> Vec<(String, String)> {
        self.requests()
            .await
            .iter()
            .map(|r| (r.method.to_string(), r.url.path().to_owned()))
            .collect()
    }

    #[allow(unused)]
    pub async fn last_body(&self) -> Option<Value> {
        self.requests()
            .await
            .iter()
            .rev()
            .find(|r| !r.body.is_empty())
            .and_then(|r| serde_json::from_slice(&r.body).ok())
    }
}
