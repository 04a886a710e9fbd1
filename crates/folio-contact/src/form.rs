use std::time::{Duration, Instant};

use crate::config::ContactConfig;
use crate::delay::Delay;
use crate::field::{ContactValues, Field};
use crate::report::ValidationReport;
use crate::schema::Schema;
use crate::toast::{Notifier, Toast};

/// Where the form is in a submission attempt.
///
/// Validation happens synchronously inside [`ContactForm::submit`], so it
/// never shows up as a resting phase.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
}

/// Result of pressing the submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the report is also kept on the form.
    Rejected(ValidationReport),
    /// Values accepted, the simulated delay has started.
    Sending,
    /// A submission is already in flight; nothing happened.
    Busy,
}

#[derive(Debug, Clone)]
struct Pending {
    delay: Delay,
    values: ContactValues,
}

/// Contact form state: field text, inline errors and the in-flight submission.
///
/// Time is passed in explicitly. The pending submission lives inside the
/// form, so dropping the form drops it too.
#[derive(Debug, Clone)]
pub struct ContactForm {
    schema: Schema,
    delay: Duration,
    values: ContactValues,
    errors: ValidationReport,
    revalidate: bool,
    pending: Option<Pending>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(&ContactConfig::default())
    }
}

impl ContactForm {
    pub fn new(config: &ContactConfig) -> Self {
        Self {
            schema: config.schema.clone(),
            delay: config.delay,
            values: ContactValues::default(),
            errors: ValidationReport::default(),
            revalidate: false,
            pending: None,
        }
    }

    pub fn phase(&self) -> FormPhase {
        if self.pending.is_some() { FormPhase::Submitting } else { FormPhase::Editing }
    }

    #[inline]
    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn values(&self) -> &ContactValues {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    /// Inline errors currently shown.
    pub fn errors(&self) -> &ValidationReport {
        &self.errors
    }

    /// Text of the submit control.
    pub fn submit_label(&self) -> &'static str {
        match self.phase() {
            FormPhase::Editing => "Send Message",
            FormPhase::Submitting => "Sending...",
        }
    }

    /// When the in-flight submission completes.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.delay.deadline())
    }

    /// Updates one field. After a rejected submit the field is re-checked
    /// immediately, so its error clears as soon as the text becomes valid.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
        if self.revalidate {
            let error = self.schema.validate_field(field, &self.values);
            self.errors.set(field, error);
        }
    }

    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        if self.pending.is_some() {
            log::debug!("contact: submit ignored, already sending");
            return SubmitOutcome::Busy;
        }

        let report = self.schema.validate(&self.values);
        if !report.is_valid() {
            log::debug!("contact: submit rejected with {} field error(s)", report.len());
            self.errors = report.clone();
            self.revalidate = true;
            return SubmitOutcome::Rejected(report);
        }

        self.errors.clear();
        self.pending = Some(Pending {
            delay: Delay::new(now, self.delay),
            values: self.values.clone(),
        });
        log::debug!("contact: sending, completes in {:?}", self.delay);
        SubmitOutcome::Sending
    }

    /// Completes the in-flight submission once its delay has elapsed:
    /// raises the success toast, clears every field and returns what was sent.
    pub fn poll<N: Notifier + ?Sized>(&mut self, now: Instant, notifier: &mut N) -> Option<ContactValues> {
        if !self.pending.as_ref().is_some_and(|p| p.delay.is_elapsed(now)) {
            return None;
        }
        let sent = self.pending.take()?.values;

        log::info!("contact form submitted: {:?}", sent);
        notifier.notify(Toast::message_sent(), now);

        self.values.clear();
        self.errors.clear();
        self.revalidate = false;

        Some(sent)
    }

    /// Drops an in-flight submission without completing it.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            log::debug!("contact: pending submission cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastQueue;

    fn ms(v: u64) -> Duration { Duration::from_millis(v) }

    fn fill(form: &mut ContactForm) {
        form.set(Field::Name, "Al");
        form.set(Field::Email, "a@b.com");
        form.set(Field::Subject, "Hello");
        form.set(Field::Message, "Ten chars!");
    }

    // ── submit ────────────────────────────────────────────────────────────

    #[test]
    fn valid_submission_runs_the_full_cycle() {
        let t0 = Instant::now();
        let mut form = ContactForm::default();
        fill(&mut form);
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.submit_label(), "Send Message");

        assert_eq!(form.submit(t0), SubmitOutcome::Sending);
        assert_eq!(form.phase(), FormPhase::Submitting);
        assert_eq!(form.submit_label(), "Sending...");
        assert_eq!(form.deadline(), Some(t0 + ms(1500)));

        let mut toasts: Vec<Toast> = Vec::new();
        assert!(form.poll(t0 + ms(1499), &mut toasts).is_none());
        assert!(toasts.is_empty());

        let sent = form.poll(t0 + ms(1500), &mut toasts).unwrap();
        assert_eq!(sent.name, "Al");
        assert_eq!(toasts, [Toast::message_sent()]);
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.values().is_empty());
        assert!(form.errors().is_valid());

        // Nothing left to complete.
        assert!(form.poll(t0 + ms(5000), &mut toasts).is_none());
        assert_eq!(toasts.len(), 1);
    }

    #[test]
    fn short_subject_aborts_with_only_that_error() {
        let t0 = Instant::now();
        let mut form = ContactForm::default();
        fill(&mut form);
        form.set(Field::Subject, "Hi");

        let SubmitOutcome::Rejected(report) = form.submit(t0) else {
            panic!("expected rejection");
        };
        let failing: Vec<_> = report.errors().map(|e| e.field).collect();
        assert_eq!(failing, [Field::Subject]);
        assert_eq!(
            form.errors().message(Field::Subject),
            Some("Subject must be at least 5 characters.")
        );
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.value(Field::Subject), "Hi");

        let mut toasts: Vec<Toast> = Vec::new();
        assert!(form.poll(t0 + ms(10_000), &mut toasts).is_none());
        assert!(toasts.is_empty());
    }

    #[test]
    fn submitting_twice_is_busy() {
        let t0 = Instant::now();
        let mut form = ContactForm::default();
        fill(&mut form);
        assert_eq!(form.submit(t0), SubmitOutcome::Sending);
        assert_eq!(form.submit(t0 + ms(100)), SubmitOutcome::Busy);
        // The first deadline still holds.
        assert_eq!(form.deadline(), Some(t0 + ms(1500)));
    }

    #[test]
    fn edits_during_delay_are_cleared_on_completion() {
        let t0 = Instant::now();
        let mut form = ContactForm::default();
        fill(&mut form);
        form.submit(t0);
        form.set(Field::Name, "Changed");

        let mut q = ToastQueue::default();
        let sent = form.poll(t0 + ms(1500), &mut q).unwrap();
        assert_eq!(sent.name, "Al");
        assert_eq!(form.value(Field::Name), "");
        assert_eq!(q.visible(t0 + ms(1500)).count(), 1);
    }

    #[test]
    fn custom_delay_is_honoured() {
        let t0 = Instant::now();
        let config = ContactConfig { delay: ms(10), ..ContactConfig::default() };
        let mut form = ContactForm::new(&config);
        fill(&mut form);
        form.submit(t0);
        let mut toasts: Vec<Toast> = Vec::new();
        assert!(form.poll(t0 + ms(10), &mut toasts).is_some());
    }

    #[test]
    fn cancel_drops_the_pending_submission() {
        let t0 = Instant::now();
        let mut form = ContactForm::default();
        fill(&mut form);
        form.submit(t0);
        form.cancel();
        assert_eq!(form.phase(), FormPhase::Editing);
        let mut toasts: Vec<Toast> = Vec::new();
        assert!(form.poll(t0 + ms(2000), &mut toasts).is_none());
        assert!(toasts.is_empty());
        assert_eq!(form.value(Field::Name), "Al");
    }

    // ── set ───────────────────────────────────────────────────────────────

    #[test]
    fn no_inline_errors_before_first_submit() {
        let mut form = ContactForm::default();
        form.set(Field::Name, "A");
        assert!(form.errors().is_valid());
    }

    #[test]
    fn fields_revalidate_after_a_rejected_submit() {
        let t0 = Instant::now();
        let mut form = ContactForm::default();
        form.set(Field::Name, "A");
        assert!(matches!(form.submit(t0), SubmitOutcome::Rejected(_)));
        assert!(form.errors().message(Field::Name).is_some());

        form.set(Field::Name, "Al");
        assert!(form.errors().message(Field::Name).is_none());
        // Untouched fields keep their errors.
        assert!(form.errors().message(Field::Email).is_some());

        form.set(Field::Name, "B");
        assert_eq!(form.errors().message(Field::Name), Some("Name must be at least 2 characters."));
    }

    #[test]
    fn success_resets_revalidation() {
        let t0 = Instant::now();
        let mut form = ContactForm::default();
        assert!(matches!(form.submit(t0), SubmitOutcome::Rejected(_)));
        fill(&mut form);
        assert!(form.errors().is_valid());
        assert_eq!(form.submit(t0), SubmitOutcome::Sending);
        let mut toasts: Vec<Toast> = Vec::new();
        form.poll(t0 + ms(1500), &mut toasts);

        form.set(Field::Name, "A");
        assert!(form.errors().is_valid());
    }
}
