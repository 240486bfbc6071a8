//! Submission attempt state

/// Label of the in-form submit control when idle
pub const SUBMIT_LABEL: &str = "📱 Вызвать врача";
/// Label of the in-form submit control while a submission is in flight
pub const LOADING_LABEL: &str = "📤 Отправка...";

/// Where the current submission attempt is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    /// Payload delivered and the view was asked to close
    Closed,
}

/// Result of one `handle_submit` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; errors are annotated and nothing was sent
    Blocked,
    /// Payload handed to the host and the view closed
    Sent,
    /// Serialization or hand-off failed; the control was restored
    Failed,
    /// A submission was already in flight or the view is closed
    Ignored,
}

/// Visual state of the in-form submit control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub enabled: bool,
    pub loading: bool,
    pub label: String,
    idle_label: String,
    loading_label: String,
}

impl SubmitControl {
    pub fn new(idle_label: impl Into<String>, loading_label: impl Into<String>) -> Self {
        let idle_label = idle_label.into();
        Self {
            enabled: true,
            loading: false,
            label: idle_label.clone(),
            idle_label,
            loading_label: loading_label.into(),
        }
    }

    /// Disable the control and show the loading label
    pub fn begin_loading(&mut self) {
        self.enabled = false;
        self.loading = true;
        self.label = self.loading_label.clone();
    }

    /// Put the control back to its pre-submit state
    pub fn restore(&mut self) {
        self.enabled = true;
        self.loading = false;
        self.label = self.idle_label.clone();
    }
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self::new(SUBMIT_LABEL, LOADING_LABEL)
    }
}

/// Host main button as last configured by the controller
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MainButtonState {
    pub text: String,
    pub color: String,
    pub visible: bool,
}
