//! Copy feedback state.
//!
//! After a successful copy the controller reports `copied` until a reset
//! fires `reset_delay` later. A newer copy aborts the pending reset and
//! schedules its own, so a stale reset can never clear a fresh "copied".

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::EstimatorError;

use super::sink::ClipboardSink;

/// How long the "copied" state is shown by default.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(2000);

/// What the UI shows next to the copy button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CopyStatus {
    /// True between a successful copy and its reset.
    pub copied: bool,
    /// The message of the last failed copy, cleared on the next attempt.
    pub error: Option<String>,
}

#[derive(Debug, Default)]
struct FeedbackState {
    status: CopyStatus,
    generation: u64,
    pending_reset: Option<JoinHandle<()>>,
}

impl FeedbackState {
    // Invalidates any scheduled reset and returns the new generation.
    fn supersede(&mut self) -> u64 {
        self.generation += 1;
        if let Some(handle) = self.pending_reset.take() {
            handle.abort();
        }
        self.generation
    }
}

/// Copies text to a sink and tracks the transient copy feedback.
///
/// Must be used from within a tokio runtime.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use salary_estimator::clipboard::{ClipboardController, MemoryClipboard};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let controller = ClipboardController::new(Arc::new(MemoryClipboard::new()));
/// assert!(controller.copy("Level: MID").await);
/// assert!(controller.status().await.copied);
/// # });
/// ```
pub struct ClipboardController {
    sink: Arc<dyn ClipboardSink>,
    state: Arc<Mutex<FeedbackState>>,
    reset_delay: Duration,
}

impl ClipboardController {
    /// Creates a controller with the default reset delay.
    pub fn new(sink: Arc<dyn ClipboardSink>) -> Self {
        Self {
            sink,
            state: Arc::new(Mutex::new(FeedbackState::default())),
            reset_delay: DEFAULT_RESET_DELAY,
        }
    }

    /// Overrides how long the "copied" state lasts.
    pub fn with_reset_delay(mut self, reset_delay: Duration) -> Self {
        self.reset_delay = reset_delay;
        self
    }

    /// Returns the configured reset delay.
    pub fn reset_delay(&self) -> Duration {
        self.reset_delay
    }

    /// Copies `text`, returning whether it succeeded.
    ///
    /// The sink runs on the blocking thread pool. Failures are recorded in the
    /// status rather than returned.
    pub async fn copy(&self, text: &str) -> bool {
        self.state.lock().await.status.error = None;

        let sink = Arc::clone(&self.sink);
        let owned = text.to_string();
        let outcome = match tokio::task::spawn_blocking(move || sink.write_text(&owned)).await {
            Ok(outcome) => outcome,
            Err(join_error) => Err(EstimatorError::ClipboardError {
                message: format!("clipboard write task failed: {}", join_error),
            }),
        };

        let mut state = self.state.lock().await;
        let generation = state.supersede();

        match outcome {
            Ok(()) => {
                state.status.copied = true;

                let shared = Arc::clone(&self.state);
                let delay = self.reset_delay;
                state.pending_reset = Some(tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let mut state = shared.lock().await;
                    if state.generation == generation {
                        state.status.copied = false;
                        state.pending_reset = None;
                    }
                }));

                debug!(chars = text.chars().count(), generation, "Copied to clipboard");
                true
            }
            Err(err) => {
                let message = match err {
                    EstimatorError::ClipboardError { message } => message,
                    other => other.to_string(),
                };
                warn!(error = %message, "Copy to clipboard failed");

                state.status.copied = false;
                state.status.error = Some(message);
                false
            }
        }
    }

    /// Returns the current feedback.
    pub async fn status(&self) -> CopyStatus {
        self.state.lock().await.status.clone()
    }
}
