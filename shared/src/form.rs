//! Required-field checks for the server-rendered forms. The server still
//! validates everything; this only stops an obviously empty submit.

use std::collections::BTreeSet;

use validator::ValidationError;

pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUpdate {
    /// Add `is-invalid` and insert the inline message after the field.
    MarkInvalid(usize),
    /// Remove `is-invalid` and the inline message.
    ClearInvalid(usize),
}

#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub prevent: bool,
    pub updates: Vec<FieldUpdate>,
    pub errors: Vec<(usize, ValidationError)>,
}

/// Tracks which fields of one form currently show an inline error, so each
/// empty field gets exactly one message no matter how often the user submits.
#[derive(Debug, Clone, Default)]
pub struct FormErrors {
    showing: BTreeSet<usize>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// `required` holds `(field index, current value)` for every required
    /// field of the form.
    pub fn on_submit<'a, I>(&mut self, required: I) -> SubmitOutcome
    where
        I: IntoIterator<Item = (usize, &'a str)>,
    {
        let mut updates = Vec::new();
        let mut errors = Vec::new();

        for (field, value) in required {
            match validate_required(value) {
                Ok(()) => {
                    if self.showing.remove(&field) {
                        updates.push(FieldUpdate::ClearInvalid(field));
                    }
                }
                Err(err) => {
                    if self.showing.insert(field) {
                        updates.push(FieldUpdate::MarkInvalid(field));
                    }
                    errors.push((field, err));
                }
            }
        }

        SubmitOutcome {
            prevent: !errors.is_empty(),
            updates,
            errors,
        }
    }

    /// Any edit clears the field's error until the next submit.
    pub fn on_input(&mut self, field: usize) -> Option<FieldUpdate> {
        self.showing
            .remove(&field)
            .then_some(FieldUpdate::ClearInvalid(field))
    }

    pub fn is_showing(&self, field: usize) -> bool {
        self.showing.contains(&field)
    }

    pub fn showing_count(&self) -> usize {
        self.showing.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_counts_as_empty() {
        assert!(validate_required("   \t").is_err());
        assert_eq!(validate_required("").unwrap_err().code, "required");
        assert!(validate_required(" x ").is_ok());
    }

    #[test]
    fn test_all_filled_submits() {
        let mut errors = FormErrors::new();
        let outcome = errors.on_submit([(0, "Ana"), (1, "ana@example.com")]);
        assert!(!outcome.prevent);
        assert!(outcome.updates.is_empty());
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn test_one_indicator_per_empty_field() {
        let mut errors = FormErrors::new();
        let outcome = errors.on_submit([(0, ""), (1, "ok"), (2, "  ")]);
        assert!(outcome.prevent);
        assert_eq!(
            outcome.updates,
            vec![FieldUpdate::MarkInvalid(0), FieldUpdate::MarkInvalid(2)]
        );
        assert_eq!(outcome.errors.len(), 2);

        // Submitting again does not stack a second message.
        let again = errors.on_submit([(0, ""), (1, "ok"), (2, "  ")]);
        assert!(again.prevent);
        assert!(again.updates.is_empty());
        assert_eq!(errors.showing_count(), 2);
    }

    #[test]
    fn test_input_clears_error() {
        let mut errors = FormErrors::new();
        errors.on_submit([(0, ""), (1, "")]);
        assert_eq!(errors.on_input(0), Some(FieldUpdate::ClearInvalid(0)));
        assert_eq!(errors.on_input(0), None);
        assert!(!errors.is_showing(0));
        assert!(errors.is_showing(1));
    }

    #[test]
    fn test_fixed_field_is_cleared_on_next_submit() {
        let mut errors = FormErrors::new();
        errors.on_submit([(0, "")]);
        let outcome = errors.on_submit([(0, "filled")]);
        assert!(!outcome.prevent);
        assert_eq!(outcome.updates, vec![FieldUpdate::ClearInvalid(0)]);
    }
}
