use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use dialoguer::{Confirm, Input};

use folio_contact::{ContactConfig, ContactForm, Field, SubmitOutcome, ToastQueue};

/// Terminal rendering of the toasts still visible at `now`.
fn toast_lines(toasts: &ToastQueue, now: Instant) -> Vec<String> {
    toasts
        .visible(now)
        .flat_map(|t| [format!("  ✔ {}", t.title), format!("    {}", t.description)])
        .collect()
}

fn prompt(form: &mut ContactForm, field: Field) -> Result<()> {
    let mut input = Input::<String>::new();
    input.with_prompt(field.label()).allow_empty(true);
    if !form.value(field).is_empty() {
        input.with_initial_text(form.value(field));
    }
    let text = input
        .interact_text()
        .with_context(|| format!("failed to read {field}"))?;

    form.set(field, text);
    if let Some(msg) = form.errors().message(field) {
        println!("    {msg}");
    }
    Ok(())
}

/// Re-prompts only the fields that failed the last submit.
fn fix_errors(form: &mut ContactForm) -> Result<()> {
    let failing: Vec<Field> = form.errors().errors().map(|e| e.field).collect();
    for field in failing {
        prompt(form, field)?;
    }
    Ok(())
}

pub fn run(args: crate::cli::ContactArgs) -> Result<()> {
    let config = ContactConfig { delay: Duration::from_millis(args.delay_ms), ..ContactConfig::default() };
    let mut form = ContactForm::new(&config);
    let mut toasts = config.toast_queue();

    println!();
    println!("  Get in touch");
    println!();

    loop {
        for field in Field::ALL {
            prompt(&mut form, field)?;
        }

        loop {
            match form.submit(Instant::now()) {
                SubmitOutcome::Sending | SubmitOutcome::Busy => break,
                SubmitOutcome::Rejected(report) => {
                    println!();
                    for err in report.errors() {
                        println!("  ✘ {}: {}", err.field.label(), err.message);
                    }
                    println!();
                    fix_errors(&mut form)?;
                }
            }
        }

        println!("  [{}]", form.submit_label());
        if let Some(deadline) = form.deadline() {
            thread::sleep(deadline.saturating_duration_since(Instant::now()));
        }
        let now = Instant::now();
        if let Some(sent) = form.poll(now, &mut toasts) {
            log::debug!("contact: {} chars delivered", sent.message.chars().count());
        }
        println!();
        for line in toast_lines(&toasts, now) {
            println!("{line}");
        }
        println!();
        toasts.prune(now);

        let again = Confirm::new()
            .with_prompt("Send another message?")
            .default(false)
            .interact()
            .context("failed to read confirmation")?;
        if !again {
            return Ok(());
        }
    }
}
