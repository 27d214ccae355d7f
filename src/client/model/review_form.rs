//! State of the review submission form.
//!
//! `ReviewForm` owns the field values, per-field messages and the pending submission. The
//! `Report` route stores it in a signal and only renders it; every decision about validation,
//! double submits, resets and redirects is made here so it can be tested without a renderer.
//!
//! Validation follows "validate on submit, re-validate on change": nothing is reported while
//! the user types until the first submit attempt, after which each change re-checks the field
//! that changed.

use crate::{
    client::model::error::ApiError,
    model::review::{CreateReviewDto, ReviewField, ValidationErrors},
};

/// What the caller should do after a submission step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was sent: validation failed, a submission is already pending, or there was no
    /// pending submission to finish.
    Blocked,
    /// The create-review call failed; its message is attached to the server field.
    Rejected,
    /// The review was created; navigate to the detail page of `server_id`.
    Redirect { server_id: String },
}

impl SubmitOutcome {
    /// Path of the server detail page to navigate to, for `Redirect` only.
    pub fn redirect_path(&self) -> Option<String> {
        match self {
            SubmitOutcome::Redirect { server_id } => Some(format!("/server/{}", server_id)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewForm {
    values: CreateReviewDto,
    errors: ValidationErrors,
    /// Set by the first submit attempt; enables re-validation on change.
    submit_attempted: bool,
    /// Payload of the in-flight create-review call.
    pending: Option<CreateReviewDto>,
}

impl ReviewForm {
    pub fn values(&self) -> &CreateReviewDto {
        &self.values
    }

    pub fn error(&self, field: ReviewField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Whether a create-review call is in flight; the submit control is disabled meanwhile.
    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn set_server_id(&mut self, server_id: String) {
        self.values.server_id = server_id;
        // A remote error on this field refers to the previous selection.
        self.errors.remove(ReviewField::ServerId);
        self.revalidate(ReviewField::ServerId);
    }

    pub fn set_rating(&mut self, rating: i32) {
        self.values.rating = rating;
        self.revalidate(ReviewField::Rating);
    }

    pub fn set_description(&mut self, description: String) {
        self.values.description = description;
        self.revalidate(ReviewField::Description);
    }

    fn revalidate(&mut self, field: ReviewField) {
        if !self.submit_attempted {
            return;
        }
        match self.values.check(field) {
            Some(message) => self.errors.insert(field, message),
            None => self.errors.remove(field),
        }
    }

    /// Starts a submission.
    ///
    /// Returns the payload to send to the create-review action, or `None` when a submission is
    /// already pending or validation fails. On validation failure every field's message is
    /// stored and nothing must be sent.
    pub fn begin_submit(&mut self) -> Option<CreateReviewDto> {
        if self.pending.is_some() {
            return None;
        }

        self.submit_attempted = true;

        match self.values.validate() {
            Ok(()) => {
                self.errors = ValidationErrors::default();
                let payload = self.values.clone();
                self.pending = Some(payload.clone());
                Some(payload)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Applies the result of the create-review action to the pending submission.
    ///
    /// On failure the action's message is attached to the server field and the entered
    /// values are kept for a retry. On success the form returns to its defaults and the
    /// caller is told to redirect to the submitted server.
    pub fn finish_submit<T>(&mut self, result: Result<T, ApiError>) -> SubmitOutcome {
        let Some(submitted) = self.pending.take() else {
            return SubmitOutcome::Blocked;
        };

        match result {
            Ok(_) => {
                *self = ReviewForm::default();
                SubmitOutcome::Redirect {
                    server_id: submitted.server_id,
                }
            }
            Err(err) => {
                self.errors.insert(ReviewField::ServerId, err.message);
                SubmitOutcome::Rejected
            }
        }
    }
}
