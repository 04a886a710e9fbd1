//! Validation and simulated submission for the portfolio **contact form**.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`field`] | `Field`, `ContactValues` |
//! | [`schema`] | `Rule`, `FieldRule`, `Schema` |
//! | [`report`] | `ValidationReport` |
//! | [`error`] | `FieldError` |
//! | [`form`] | `ContactForm`, `FormPhase`, `SubmitOutcome` |
//! | [`delay`] | `Delay` one-shot deadline |
//! | [`toast`] | `Toast`, `ToastQueue`, `Notifier` |
//! | [`config`] | `ContactConfig` |
//!
//! # Quick start
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use folio_contact::{ContactForm, Field, SubmitOutcome, Toast};
//!
//! let mut form = ContactForm::default();
//! form.set(Field::Name, "Ada");
//! form.set(Field::Email, "ada@example.com");
//! form.set(Field::Subject, "Hello there");
//! form.set(Field::Message, "Just saying hi to you.");
//!
//! let t0 = Instant::now();
//! assert!(matches!(form.submit(t0), SubmitOutcome::Sending));
//!
//! let mut toasts: Vec<Toast> = Vec::new();
//! let sent = form.poll(t0 + Duration::from_millis(1500), &mut toasts);
//! assert!(sent.is_some());
//! assert_eq!(toasts.len(), 1);
//! ```

pub mod config;
pub mod delay;
pub mod error;
pub mod field;
pub mod form;
pub mod report;
pub mod schema;
pub mod toast;

pub use config::ContactConfig;
pub use delay::Delay;
pub use error::FieldError;
pub use field::{ContactValues, Field};
pub use form::{ContactForm, FormPhase, SubmitOutcome};
pub use report::ValidationReport;
pub use schema::{FieldRule, Rule, Schema};
pub use toast::{Notifier, Toast, ToastQueue};
