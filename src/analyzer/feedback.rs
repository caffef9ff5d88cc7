use log::{debug, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Progress, log and cancellation channel between the analyzer and its host.
///
/// All methods have no-op defaults. `is_canceled` is polled before each input
/// record.
pub trait Feedback {
    fn set_progress(&mut self, _percent: u8) {}

    fn push_info(&mut self, _message: &str) {}

    fn is_canceled(&self) -> bool {
        false
    }
}

/// Feedback that ignores everything and never cancels.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullFeedback;

impl Feedback for NullFeedback {}

/// Shared cancellation request; clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_canceled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Forwards progress and messages to the `log` facade.
#[derive(Clone, Debug, Default)]
pub struct LogFeedback {
    cancel: Option<CancelFlag>,
    progress: u8,
}

impl LogFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Last reported percentage.
    pub fn progress(&self) -> u8 {
        self.progress
    }
}

impl Feedback for LogFeedback {
    fn set_progress(&mut self, percent: u8) {
        let percent = percent.min(100);
        if percent != self.progress {
            debug!("progress {percent}%");
        }
        self.progress = percent;
    }

    fn push_info(&mut self, message: &str) {
        info!("{message}");
    }

    fn is_canceled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelFlag::is_canceled)
    }
}
