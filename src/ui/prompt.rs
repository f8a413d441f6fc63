//! Confirmation Prompt Port
//!
//! Destructive commands (`undeploy-all`, `destroy-all`) ask before acting.
//! The dispatcher talks to this trait; the binary plugs in the terminal
//! implementation and tests plug in canned answers.

use dialoguer::Confirm;

/// Trait for asking the operator a two-option question.
///
/// Implementations can be:
/// - `TerminalInput`: prompts on the controlling terminal
/// - `CannedInput`: returns a fixed answer (tests, scripting)
pub trait UserInput: Send + Sync {
    /// Ask `message`, offering `yes` and `no`, returning the selected option.
    ///
    /// `default` is returned when the operator just hits enter or when no
    /// interactive terminal is attached.
    fn prompt_with_options(&self, message: &str, default: &str, yes: &str, no: &str) -> String;
}

/// Interactive prompt on the controlling terminal.
pub struct TerminalInput;

impl UserInput for TerminalInput {
    fn prompt_with_options(&self, message: &str, default: &str, yes: &str, no: &str) -> String {
        let default_is_yes = default.eq_ignore_ascii_case(yes);
        let confirmed = Confirm::new()
            .with_prompt(message.to_string())
            .default(default_is_yes)
            .interact()
            .unwrap_or(default_is_yes);
        if confirmed {
            yes.to_string()
        } else {
            no.to_string()
        }
    }
}

/// Fixed-answer input for tests and non-interactive use.
pub struct CannedInput {
    answer: String,
}

impl CannedInput {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}

impl UserInput for CannedInput {
    fn prompt_with_options(&self, _message: &str, _default: &str, _yes: &str, _no: &str) -> String {
        self.answer.clone()
    }
}
