//! src/component/mod.rs
//!
//! The sign-up form widget: one email field, validated locally and forwarded
//! to the webhook on submit.
//!
//! ```text
//! Editing --valid submit--> Submitting --sent--> Success (terminal)
//!    ^                          |
//!    +------ transport error ---+  (toast raised, value kept)
//! ```
mod toast;
pub use toast::{Toast, Toaster, Variant, TOAST_LIMIT};

mod view;
pub use view::*;

use crate::domain::{Signup, SignupForm, ValidationError};
use crate::webhook::{TransportError, WebhookClient};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitting,
    Success,
}

#[derive(Debug, Default)]
pub struct SignupComponent {
    form: SignupForm,
    field_error: Option<ValidationError>,
    submit_attempted: bool,
    is_submitting: bool,
    is_success: bool,
    toaster: Toaster,
}

impl SignupComponent {
    /// Mounts a fresh component with an empty field.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.is_success {
            Phase::Success
        } else if self.is_submitting {
            Phase::Submitting
        } else {
            Phase::Editing
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn is_success(&self) -> bool {
        self.is_success
    }

    pub fn value(&self) -> &str {
        &self.form.email
    }

    pub fn field_error(&self) -> Option<&ValidationError> {
        self.field_error.as_ref()
    }

    pub fn toaster(&self) -> &Toaster {
        &self.toaster
    }

    pub fn toaster_mut(&mut self) -> &mut Toaster {
        &mut self.toaster
    }

    /// Replaces the field value, as on every keystroke.
    ///
    /// Once a submit has been attempted, each change re-validates the field.
    pub fn input(&mut self, value: impl Into<String>) {
        if self.is_success {
            tracing::debug!("Ignoring input on a completed sign-up");
            return;
        }

        self.form.email = value.into();
        if self.submit_attempted {
            self.revalidate();
        }
    }

    /// Field lost focus: validate anything the user has typed so far.
    pub fn blur(&mut self) {
        if self.is_success || self.form.email.is_empty() {
            return;
        }
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.field_error = self.form.validate().err();
    }

    /// Validates the field and, if it passes, moves to `Submitting` and hands
    /// back the payload to send.
    ///
    /// Returns `None` when the value is invalid (the inline error is updated),
    /// when a request is already in flight, or after success.
    pub fn begin_submit(&mut self) -> Option<Signup> {
        if self.is_success || self.is_submitting {
            tracing::debug!(phase = ?self.phase(), "Submit control is not available");
            return None;
        }

        self.submit_attempted = true;
        match self.form.validate() {
            Ok(signup) => {
                self.field_error = None;
                self.is_submitting = true;
                Some(signup)
            }
            Err(e) => {
                tracing::debug!(error = %e, "Sign-up form failed validation");
                self.field_error = Some(e);
                None
            }
        }
    }

    /// Applies the outcome of the request started by `begin_submit`.
    pub fn finish_submit(&mut self, outcome: Result<(), TransportError>) {
        match outcome {
            Ok(()) => {
                self.is_success = true;
            }
            Err(e) => {
                tracing::error!(error.cause_chain = ?e, "Submission error");
                self.toaster.push(Toast::submission_failed());
            }
        }
        self.is_submitting = false;
    }

    /// Validates and, when valid, posts the sign-up to the webhook.
    #[tracing::instrument(
        name = "Submitting the sign-up form",
        skip(self, client),
        fields(email = %self.form.email)
    )]
    pub async fn submit(&mut self, client: &WebhookClient) -> Phase {
        if let Some(signup) = self.begin_submit() {
            let outcome = client.send(&signup).await;
            self.finish_submit(outcome);
        }
        self.phase()
    }

    pub fn render(&self) -> View {
        if self.is_success {
            return View::Confirmation(ConfirmationView::default());
        }

        let submit = if self.is_submitting {
            SubmitButton::submitting()
        } else {
            SubmitButton::idle()
        };

        View::Form(FormView {
            title: TITLE,
            description: DESCRIPTION,
            label: FIELD_LABEL,
            placeholder: PLACEHOLDER,
            value: self.form.email.clone(),
            error: self.field_error.as_ref().map(ToString::to_string),
            submit,
        })
    }
}
