use crate::error::FieldError;
use crate::field::Field;

/// Per-field outcome of validating the form: `None` means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    slots: [Option<FieldError>; 4],
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.slots[field.index()].as_ref()
    }

    /// The message for `field`, if it is invalid.
    pub fn message(&self, field: Field) -> Option<&str> {
        self.error(field).map(|e| e.message.as_str())
    }

    /// Failing fields in display order.
    pub fn errors(&self) -> impl Iterator<Item = &FieldError> {
        self.slots.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.errors().count()
    }

    pub fn is_empty(&self) -> bool {
        self.is_valid()
    }

    /// Replaces the outcome for one field.
    pub(crate) fn set(&mut self, field: Field, error: Option<FieldError>) {
        self.slots[field.index()] = error;
    }

    pub(crate) fn clear(&mut self) {
        self.slots = Default::default();
    }
}
