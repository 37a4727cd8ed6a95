//! Mock completion driver for testing.

use async_trait::async_trait;
use hamartia_core::CompletionRequest;
use hamartia_error::{CompletionError, CompletionErrorKind, HamartiaError, HamartiaResult};
use hamartia_interface::CompletionDriver;
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum MockBehavior {
    /// Always return the given text
    Success(String),
    /// Always return the specified error
    Error(CompletionErrorKind),
    /// Fail N times with the error, then succeed with the text
    FailThenSucceed {
        fail_count: usize,
        error: CompletionErrorKind,
        success_text: String,
    },
    /// Return a sequence of responses; the last one repeats
    Sequence(Vec<MockResponse>),
}

/// A single mock response (success or error).
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum MockResponse {
    Success(String),
    Error(CompletionErrorKind),
}

/// Mock completion driver.
///
/// Records every request it receives so tests can inspect prompts.
pub struct MockDriver {
    behavior: MockBehavior,
    call_count: Arc<Mutex<usize>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

#[allow(dead_code)]
impl MockDriver {
    /// Create a mock driver with custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(Mutex::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock driver that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(text.into()))
    }

    /// Create a mock driver that always fails with the given error.
    pub fn new_error(error: CompletionErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    /// Create a mock driver with a sequence of responses.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self::new_with_behavior(MockBehavior::Sequence(responses))
    }

    /// Number of times complete() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Every request received, in order.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn next_response(&self) -> HamartiaResult<String> {
        let mut count = self.call_count.lock().unwrap();
        let current = *count;
        *count += 1;

        let fail = |kind: &CompletionErrorKind| -> HamartiaResult<String> {
            Err(HamartiaError::from(CompletionError::new(kind.clone())))
        };

        match &self.behavior {
            MockBehavior::Success(text) => Ok(text.clone()),
            MockBehavior::Error(kind) => fail(kind),
            MockBehavior::FailThenSucceed {
                fail_count,
                error,
                success_text,
            } => {
                if current < *fail_count {
                    fail(error)
                } else {
                    Ok(success_text.clone())
                }
            }
            MockBehavior::Sequence(responses) => {
                let response = responses
                    .get(current)
                    .or_else(|| responses.last())
                    .expect("mock sequence must not be empty");
                match response {
                    MockResponse::Success(text) => Ok(text.clone()),
                    MockResponse::Error(kind) => fail(kind),
                }
            }
        }
    }
}

#[async_trait]
impl CompletionDriver for MockDriver {
    async fn complete(&self, req: &CompletionRequest) -> HamartiaResult<String> {
        self.requests.lock().unwrap().push(req.clone());
        self.next_response()
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// A well-formed analysis response for `name`, as a model would send it.
#[allow(dead_code)]
pub fn analysis_json(name: &str, flaw: &str) -> String {
    serde_json::json!({
        "characterName": name,
        "hamartia": flaw,
        "context": "A court in turmoil",
        "phronesisLevel": "low",
        "phronesisTrajectory": "decreasing",
        "telos": "Justice for a murdered father",
        "universe": "Hamlet by William Shakespeare",
        "greatestWin": "Exposes the king with the play",
        "greatestDefeat": "Kills Polonius by mistake",
        "tags": ["tragedy", "revenge"]
    })
    .to_string()
}
