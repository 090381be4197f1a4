//! factgen Text Source Layer
//!
//! Implementations of the `TextSource` trait from `factgen-domain`.
//!
//! # Sources
//!
//! - `OllamaCli`: runs the local `ollama` binary as a subprocess
//! - `MockSource`: scripted responses for deterministic testing
//!
//! # Examples
//!
//! ```
//! use factgen_llm::MockSource;
//! use factgen_domain::TextSource;
//!
//! let source = MockSource::new("Hello from the backend!");
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! let result = rt.block_on(source.generate("test prompt")).unwrap();
//! assert_eq!(result, "Hello from the backend!");
//! ```

#![warn(missing_docs)]

pub mod ollama;

use factgen_domain::TextSource;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use thiserror::Error;

pub use ollama::OllamaCli;

/// Errors that can occur while asking a backend for text
#[derive(Error, Debug)]
pub enum LlmError {
    /// The backend process could not be started
    #[error("Failed to start backend: {0}")]
    Spawn(String),

    /// Reading from or writing to the backend failed
    #[error("Backend I/O error: {0}")]
    Io(String),

    /// The backend exited with a failure status
    #[error("Backend exited with status {}: {stderr}", display_code(.code))]
    NonZeroExit {
        /// Exit code, if the process was not killed by a signal
        code: Option<i32>,
        /// Captured standard error
        stderr: String,
    },

    /// The backend succeeded but wrote nothing
    #[error("No output received from backend")]
    EmptyOutput,

    /// The call did not finish within the bound
    #[error("Backend call timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

/// One scripted reply of a [`MockSource`]
#[derive(Debug)]
pub enum MockResponse {
    /// Return this text
    Text(String),
    /// Fail with this error
    Failure(LlmError),
}

/// Mock text source for deterministic testing
///
/// Scripted responses are consumed in order; once the script runs out every
/// call returns the default response. Clones share the script and counters.
///
/// # Examples
///
/// ```
/// use factgen_llm::{LlmError, MockSource};
///
/// let source = MockSource::default();
/// source.push_lines(&["1. first line", "2. second line"]);
/// source.push_error(LlmError::EmptyOutput);
/// assert_eq!(source.remaining(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MockSource {
    default_response: String,
    script: Arc<Mutex<VecDeque<MockResponse>>>,
    call_count: Arc<Mutex<usize>>,
    last_prompt: Arc<Mutex<Option<String>>>,
}

impl MockSource {
    /// Create a MockSource with a fixed response for all calls
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            script: Arc::new(Mutex::new(VecDeque::new())),
            call_count: Arc::new(Mutex::new(0)),
            last_prompt: Arc::new(Mutex::new(None)),
        }
    }

    /// Queue a raw text response
    pub fn push_text(&self, text: impl Into<String>) {
        lock(&self.script).push_back(MockResponse::Text(text.into()));
    }

    /// Queue a response made of the given lines joined by newlines
    pub fn push_lines<S: AsRef<str>>(&self, lines: &[S]) {
        let text = lines
            .iter()
            .map(|l| l.as_ref())
            .collect::<Vec<_>>()
            .join("\n");
        self.push_text(text);
    }

    /// Queue a failed call
    pub fn push_error(&self, error: LlmError) {
        lock(&self.script).push_back(MockResponse::Failure(error));
    }

    /// Number of scripted responses not yet consumed
    pub fn remaining(&self) -> usize {
        lock(&self.script).len()
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *lock(&self.call_count)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *lock(&self.call_count) = 0;
    }

    /// The prompt passed to the most recent call
    pub fn last_prompt(&self) -> Option<String> {
        lock(&self.last_prompt).clone()
    }

    fn next_response(&self, prompt: &str) -> Result<String, LlmError> {
        *lock(&self.call_count) += 1;
        *lock(&self.last_prompt) = Some(prompt.to_string());

        match lock(&self.script).pop_front() {
            Some(MockResponse::Text(text)) => Ok(text),
            Some(MockResponse::Failure(e)) => Err(e),
            None => Ok(self.default_response.clone()),
        }
    }
}

impl Default for MockSource {
    /// A source whose unscripted calls return empty text
    fn default() -> Self {
        Self::new("")
    }
}

impl TextSource for MockSource {
    type Error = LlmError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.next_response(prompt)
    }
}

fn display_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "unknown".to_string(), |c| c.to_string())
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
