//! Field-level checks shared by the create/update inputs.

use crate::errors::{FieldError, FieldErrors, ModelError};

/// Collects field errors so that one request reports all of its problems at once.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self { Self::default() }

    pub fn check(&mut self, field: &str, ok: bool, message: &str) -> &mut Self {
        if !ok {
            self.errors.push(FieldError { field: field.to_string(), message: message.to_string() });
        }
        self
    }

    pub fn non_blank(&mut self, field: &str, value: &str) -> &mut Self {
        self.check(field, !value.trim().is_empty(), "must not be empty")
    }

    pub fn non_negative_count(&mut self, field: &str, value: i32) -> &mut Self {
        self.check(field, value >= 0, "must be zero or greater")
    }

    pub fn non_negative_amount(&mut self, field: &str, value: f64) -> &mut Self {
        self.check(field, value.is_finite() && value >= 0.0, "must be a finite number, zero or greater")
    }

    pub fn within(&mut self, field: &str, value: f64, min: f64, max: f64) -> &mut Self {
        let ok = value.is_finite() && value >= min && value <= max;
        self.check(field, ok, &format!("must be between {min} and {max}"))
    }

    pub fn finish(&mut self) -> Result<(), ModelError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ModelError::Validation(FieldErrors(std::mem::take(&mut self.errors))))
        }
    }
}
