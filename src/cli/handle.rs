//! Hook handler entry point shared by `pre-edit` and `post-edit`.
//!
//! Handlers never fail: unreadable or unparseable input is a silent allow.

use std::io::{self, Read, Write};

use tracing::debug;

use crate::config::Config;
use crate::event::EditEvent;
use crate::guard::{self, Advisory, Decision, Phase};

/// Read one event from stdin, print any advisory to stderr.
pub fn run(phase: Phase, config: &Config) -> Decision {
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        debug!(%phase, error = %e, "Failed to read edit event");
        return Decision::Allow;
    }

    let advisory = evaluate_input(phase, config, &input);
    if let Some(message) = &advisory.message {
        let _ = writeln!(io::stderr().lock(), "{}", message);
    }
    advisory.decision
}

/// Evaluate a raw payload without touching stdio.
pub fn evaluate_input(phase: Phase, config: &Config, input: &str) -> Advisory {
    if !config.is_enabled(phase) {
        debug!(%phase, "Handler disabled by config");
        return Advisory::allow();
    }

    let event = match EditEvent::from_json(input) {
        Ok(event) => event,
        Err(e) => {
            debug!(%phase, error = %e, "Ignoring unparseable edit event");
            return Advisory::allow();
        }
    };

    debug!(
        %phase,
        tool = event.tool_name.as_deref().unwrap_or("-"),
        path = %event.file_path,
        "Evaluating edit"
    );
    guard::evaluate(phase, &event)
}
