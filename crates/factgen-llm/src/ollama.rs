//! Ollama CLI Source
//!
//! Runs the local `ollama` binary as a subprocess: `ollama run <model>` with
//! the prompt written to standard input.
//!
//! # Features
//!
//! - Bounded wait per call (the child is killed when the bound expires)
//! - Lossy UTF-8 decoding of the model output
//! - Availability check through `ollama list`
//!
//! # Examples
//!
//! ```no_run
//! use factgen_llm::OllamaCli;
//! use std::time::Duration;
//!
//! let source = OllamaCli::new("llama3").with_timeout(Duration::from_secs(60));
//! assert_eq!(source.model(), "llama3");
//! ```

use crate::LlmError;
use factgen_domain::TextSource;
use std::borrow::Cow;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Default backend binary, resolved through `PATH`
pub const DEFAULT_BINARY: &str = "ollama";

/// Default bound for a single generation call (120 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Text source backed by the `ollama` command-line tool
#[derive(Debug, Clone)]
pub struct OllamaCli {
    binary: PathBuf,
    model: String,
    timeout: Duration,
}

impl OllamaCli {
    /// Create a source for `model` using the `ollama` binary on `PATH`
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            binary: PathBuf::from(DEFAULT_BINARY),
            model: model.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Use a different backend binary
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Set the bound for a single call
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The model identifier passed to `ollama run`
    pub fn model(&self) -> &str {
        &self.model
    }

    /// The backend binary
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// The bound for a single call
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run one prompt through `ollama run <model>`
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - the binary cannot be started
    /// - the process exits with a failure status
    /// - the process writes nothing to standard output
    /// - the call exceeds the configured bound
    ///
    /// Every failure is also logged as a warning.
    pub async fn run_prompt(&self, prompt: &str) -> Result<String, LlmError> {
        debug!(
            "Running {} run {} (prompt {} chars)",
            self.binary.display(),
            self.model,
            prompt.len()
        );

        let result = self.run_prompt_inner(prompt).await;
        if let Err(e) = &result {
            warn!("Generation call failed: {}", e);
        }
        result
    }

    async fn run_prompt_inner(&self, prompt: &str) -> Result<String, LlmError> {
        let mut child = Command::new(&self.binary)
            .arg("run")
            .arg(&self.model)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| LlmError::Spawn(format!("{}: {}", self.binary.display(), e)))?;

        let stdin = child.stdin.take();
        let call = async move {
            if let Some(mut pipe) = stdin {
                match pipe.write_all(prompt.as_bytes()).await {
                    Ok(()) => {}
                    // The backend may exit before reading; its status tells the story
                    Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                        debug!("Backend closed stdin early");
                    }
                    Err(e) => return Err(LlmError::Io(format!("Failed to send prompt: {}", e))),
                }
            }
            child
                .wait_with_output()
                .await
                .map_err(|e| LlmError::Io(format!("Failed to read output: {}", e)))
        };

        let output = timeout(self.timeout, call)
            .await
            .map_err(|_| LlmError::Timeout(self.timeout))??;

        text_from_output(&output)
    }

    /// List the models known to the backend (`ollama list`)
    ///
    /// Used as an availability check before a run: a missing binary or a
    /// failure status is an error.
    pub async fn list_models(&self) -> Result<Vec<String>, LlmError> {
        let child = Command::new(&self.binary)
            .arg("list")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| LlmError::Spawn(format!("{}: {}", self.binary.display(), e)))?;

        let output = timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| LlmError::Timeout(self.timeout))?
            .map_err(|e| LlmError::Io(e.to_string()))?;

        if !output.status.success() {
            return Err(LlmError::NonZeroExit {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(parse_model_list(&String::from_utf8_lossy(&output.stdout)))
    }

    /// Check that the backend answers and whether it knows this source's model
    ///
    /// Returns `Ok(false)` when the backend works but the model is not listed
    /// (`ollama run` pulls missing models on demand).
    pub async fn check_available(&self) -> Result<bool, LlmError> {
        let models = self.list_models().await?;
        Ok(model_listed(&models, &self.model))
    }
}

impl TextSource for OllamaCli {
    type Error = LlmError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.run_prompt(prompt).await
    }
}

/// Decode a finished process into generated text
fn text_from_output(output: &Output) -> Result<String, LlmError> {
    if !output.status.success() {
        return Err(LlmError::NonZeroExit {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let text = String::from_utf8_lossy(&output.stdout);
    if let Cow::Owned(_) = text {
        warn!("Backend output contained invalid UTF-8; replaced offending bytes");
    }

    let text = text.trim();
    if text.is_empty() {
        return Err(LlmError::EmptyOutput);
    }
    Ok(text.to_string())
}

/// Model names from `ollama list` output (first column, header skipped)
fn parse_model_list(listing: &str) -> Vec<String> {
    listing
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .filter(|name| !name.eq_ignore_ascii_case("NAME"))
        .map(str::to_string)
        .collect()
}

/// Whether a listed model name refers to `model`, allowing the implicit `:latest` tag
pub fn model_matches(listed: &str, model: &str) -> bool {
    listed == model || listed.strip_suffix(":latest") == Some(model)
}

fn model_listed(models: &[String], model: &str) -> bool {
    models.iter().any(|listed| model_matches(listed, model))
}
