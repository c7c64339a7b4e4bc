//! `check` and `submit`

use std::process::ExitCode;

use grok_form::{FormError, TICKET_NUMBER, TicketForm};
use grok_validator::FieldInput;
use serde::Serialize;

/// Outcome of one change event.
#[derive(Debug, Serialize)]
struct Event {
    value: String,
    passed: bool,
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    events: Vec<Event>,
    submittable: bool,
}

/// Applies every value as a change, printing the field state after each.
pub fn check(form: &mut TicketForm, values: &[String], json: bool) -> anyhow::Result<ExitCode> {
    let mut events = Vec::with_capacity(values.len());
    for value in values {
        let passed = form.on_change(FieldInput::new(TICKET_NUMBER, value.as_str()))?;
        events.push(Event {
            value: value.clone(),
            passed,
            error: form.error(TICKET_NUMBER).map(str::to_owned),
        });
    }

    let report = CheckReport {
        events,
        submittable: form.is_valid(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for event in &report.events {
            match &event.error {
                None => println!("ok    {:?}", event.value),
                Some(message) => println!("fail  {:?}: {message}", event.value),
            }
        }
        println!(
            "submittable: {}",
            if report.submittable { "yes" } else { "no" }
        );
    }

    Ok(exit_code(report.submittable))
}

/// Applies `value`, then submits.
pub fn submit(form: &mut TicketForm, value: &str, json: bool) -> anyhow::Result<ExitCode> {
    form.on_change(FieldInput::new(TICKET_NUMBER, value))?;

    match form.submit() {
        Ok(model) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&model)?);
            } else {
                let ticket = model.get(TICKET_NUMBER).map_or("", String::as_str);
                println!("submitted {ticket}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(FormError::Invalid(problems)) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&problems)?);
            } else {
                println!("{problems}");
            }
            Ok(ExitCode::FAILURE)
        }
        Err(other) => Err(other.into()),
    }
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
