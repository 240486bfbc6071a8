//! Form controller
//!
//! Owns the vet-call form, gives per-field feedback, gates submission on
//! validity and hands the finished payload to the host. All platform services
//! go through the injected [`HostEnvironment`].

use crate::bindings::{handlers_for, FormEvent, Handler};
use crate::config::FormConfig;
use crate::error::FormError;
use crate::host::HostEnvironment;
use crate::payload::SubmissionPayload;
use crate::phone::format_phone_input;
use crate::state::{FieldId, SubmitControl, SubmitOutcome, SubmitPhase, VetCallForm};
use crate::theme::Theme;
use chrono::Utc;

/// Shown when the form is submitted with invalid fields
pub const ALERT_FILL_REQUIRED: &str = "Пожалуйста, заполните все обязательные поля корректно";
/// Shown after the payload was handed off
pub const ALERT_SENT: &str = "Заявка отправлена! Врач свяжется с вами в ближайшее время.";
/// Shown when serialization or hand-off failed
pub const ALERT_SEND_FAILED: &str = "Произошла ошибка при отправке заявки. Попробуйте еще раз.";
/// Asked before abandoning the form
pub const CONFIRM_CANCEL: &str = "Вы уверены, что хотите отменить заполнение формы?";
/// Asked before leaving a form that holds data
pub const CONFIRM_LEAVE: &str = "Введённые данные будут потеряны. Закрыть форму?";

pub struct FormController<H: HostEnvironment> {
    host: H,
    config: FormConfig,
    form: VetCallForm,
    submit_control: SubmitControl,
    phase: SubmitPhase,
    theme: Theme,
}

impl<H: HostEnvironment> FormController<H> {
    pub fn new(host: H, config: FormConfig) -> Self {
        let submit_control = SubmitControl::new(config.submit_label(), config.loading_label());
        Self {
            host,
            config,
            form: VetCallForm::new(),
            submit_control,
            phase: SubmitPhase::Idle,
            theme: Theme::default(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn form(&self) -> &VetCallForm {
        &self.form
    }

    /// Focus and button selection; values should go through [`Self::dispatch`]
    pub fn form_mut(&mut self) -> &mut VetCallForm {
        &mut self.form
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn submit_control(&self) -> &SubmitControl {
        &self.submit_control
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Bring the view up: readiness, main button, theme, prefill, lifecycle
    pub fn init(&mut self) -> Result<(), FormError> {
        self.host.ready().map_err(FormError::HostUnavailable)?;

        self.host
            .configure_main_button(self.config.main_button_text(), self.config.main_button_color());
        self.apply_theme();
        self.prefill_user_data();
        self.host.expand();
        self.host.enable_closing_confirmation();
        self.update_main_button();

        tracing::info!("Vet call form initialized");
        Ok(())
    }

    fn apply_theme(&mut self) {
        let params = self.host.theme_params();
        self.theme = Theme::resolve(params.as_ref(), self.host.color_scheme());
        tracing::debug!(dark = self.theme.dark, "Applied host theme");
    }

    /// Put the host user's name into an empty name field
    fn prefill_user_data(&mut self) {
        let Some(user) = self.host.user() else {
            return;
        };
        let name = self.form.field_mut(FieldId::Name);
        if !user.first_name.is_empty() && name.value.is_empty() {
            name.set_text(user.display_name());
            tracing::debug!("Prefilled name from host user");
        }
    }

    /// Validate one field and update its error annotation
    pub fn validate_field(&mut self, id: FieldId) -> bool {
        let field = self.form.field_mut(id);
        let valid = field.validate();
        if let Some(err) = &field.error {
            tracing::debug!(field = %id, reason = %err, "Field invalid");
        }
        valid
    }

    /// Reformat the phone field in place
    fn format_phone(&mut self) {
        let field = self.form.field_mut(FieldId::Phone);
        let formatted = format_phone_input(&field.value);
        field.set_text(formatted);
    }

    /// Check every required field.
    ///
    /// With `show_errors` each field runs its full rules and gets annotated.
    /// Without it a field only has to be non-blank; format rules are skipped.
    /// The light check is what gates the main button, so the button can show
    /// while the phone is still malformed.
    pub fn validate_form(&mut self, show_errors: bool) -> bool {
        if show_errors {
            let ids: Vec<FieldId> = self.form.required_fields().map(|f| f.id).collect();
            ids.into_iter()
                .fold(true, |all_valid, id| self.validate_field(id) && all_valid)
        } else {
            self.form.required_fields().all(|f| !f.is_blank())
        }
    }

    /// Show the host main button while every required field has text
    pub fn update_main_button(&mut self) -> bool {
        let ready = self.validate_form(false);
        self.host.set_main_button_visible(ready);
        ready
    }

    /// Build the payload from the current values and the host user
    pub fn collect_form_data(&self) -> Result<SubmissionPayload, FormError> {
        let user = self.host.user();
        SubmissionPayload::from_form(&self.form, user.as_ref(), Utc::now())
    }

    /// Validate, then hand the payload to the host and close the view
    pub async fn handle_submit(&mut self) -> SubmitOutcome {
        if matches!(self.phase, SubmitPhase::Submitting | SubmitPhase::Closed)
            || !self.submit_control.enabled
        {
            tracing::debug!(phase = ?self.phase, "Submit ignored");
            return SubmitOutcome::Ignored;
        }

        self.phase = SubmitPhase::Validating;
        if !self.validate_form(true) {
            tracing::info!("Submission blocked by invalid fields");
            self.host.show_alert(ALERT_FILL_REQUIRED).await;
            self.phase = SubmitPhase::Idle;
            return SubmitOutcome::Blocked;
        }

        self.phase = SubmitPhase::Submitting;
        self.submit_control.begin_loading();

        match self.deliver() {
            Ok(()) => {
                tracing::info!("Submission handed to host");
                self.host.show_alert(ALERT_SENT).await;
                tokio::time::sleep(self.config.close_delay()).await;
                self.host.close();
                self.phase = SubmitPhase::Closed;
                SubmitOutcome::Sent
            }
            Err(e) => {
                if e.is_submission_error() {
                    tracing::error!("Submission failed: {e}");
                } else {
                    tracing::warn!("Submission rejected before sending: {e}");
                }
                self.host.show_alert(ALERT_SEND_FAILED).await;
                self.submit_control.restore();
                self.phase = SubmitPhase::Idle;
                SubmitOutcome::Failed
            }
        }
    }

    fn deliver(&self) -> Result<(), FormError> {
        let message = self.collect_form_data()?.to_message()?;
        self.host.send_data(&message).map_err(FormError::Delivery)
    }

    /// Close the view after the user confirms; returns whether it closed
    pub async fn handle_cancel(&mut self) -> bool {
        let confirmed = self.host.show_confirm(CONFIRM_CANCEL).await;
        if confirmed {
            tracing::info!("Form cancelled");
            self.host.close();
            self.phase = SubmitPhase::Closed;
        }
        confirmed
    }

    /// Re-expand the view once the new orientation has settled
    pub async fn handle_orientation_change(&self) {
        tokio::time::sleep(self.config.expand_delay()).await;
        self.host.expand();
    }

    /// Whether leaving the view right now should be intercepted
    pub fn should_guard_leave(&self) -> bool {
        self.form.has_data()
    }

    /// Leave the view, asking first if any field holds text; returns whether it closed
    pub async fn handle_navigate_away(&mut self) -> bool {
        if self.should_guard_leave() && !self.host.show_confirm(CONFIRM_LEAVE).await {
            return false;
        }
        self.host.close();
        self.phase = SubmitPhase::Closed;
        true
    }

    /// Route an event through the binding table
    pub async fn dispatch(&mut self, event: FormEvent) {
        if let FormEvent::Input { field, value } = &event {
            self.form.set_value(*field, value.clone());
        }
        let target = event.field();

        for handler in handlers_for(&event) {
            match handler {
                Handler::FormatPhone => self.format_phone(),
                Handler::ValidateField => {
                    if let Some(id) = target {
                        self.validate_field(id);
                    }
                }
                Handler::UpdateMainButton => {
                    self.update_main_button();
                }
                Handler::Submit => {
                    self.handle_submit().await;
                }
                Handler::Cancel => {
                    self.handle_cancel().await;
                }
                Handler::ExpandAfterDelay => self.handle_orientation_change().await,
                Handler::GuardLeave => {
                    self.handle_navigate_away().await;
                }
            }
        }
    }
}
