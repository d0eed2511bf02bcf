//! Edit guards: static rules evaluated against a single edit event.

pub mod post_edit;
pub mod pre_edit;

use crate::event::EditEvent;

/// Point in the edit lifecycle a handler runs at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    PreEdit,
    PostEdit,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::PreEdit => write!(f, "pre-edit"),
            Phase::PostEdit => write!(f, "post-edit"),
        }
    }
}

/// Verdict returned to the host through the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    /// Reserved by the host contract. No rule produces it.
    Block,
}

impl Decision {
    pub fn exit_code(self) -> i32 {
        match self {
            Decision::Allow => 0,
            Decision::Block => 2,
        }
    }
}

/// Result of running one handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub decision: Decision,
    /// Text destined for stderr.
    pub message: Option<String>,
}

impl Advisory {
    /// Allow with nothing to report.
    pub fn allow() -> Self {
        Self {
            decision: Decision::Allow,
            message: None,
        }
    }

    /// Allow, but surface a warning.
    pub fn warn(message: String) -> Self {
        Self {
            decision: Decision::Allow,
            message: Some(message),
        }
    }
}

/// Run the handler for `phase`.
pub fn evaluate(phase: Phase, event: &EditEvent) -> Advisory {
    match phase {
        Phase::PreEdit => pre_edit::evaluate(event),
        Phase::PostEdit => post_edit::evaluate(event),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Decision::Allow.exit_code(), 0);
        assert_eq!(Decision::Block.exit_code(), 2);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::PreEdit.to_string(), "pre-edit");
        assert_eq!(Phase::PostEdit.to_string(), "post-edit");
    }

    #[test]
    fn test_dispatch_never_blocks() {
        let event = EditEvent {
            file_path: "gradle/libs.versions.toml".to_string(),
            ..Default::default()
        };
        for phase in [Phase::PreEdit, Phase::PostEdit] {
            assert_eq!(evaluate(phase, &event).decision, Decision::Allow);
        }
    }
}
