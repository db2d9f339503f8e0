//! Yes/no confirmation prompt

pub const DEFAULT_DELETE_MESSAGE: &str = "Are you sure you want to delete this item?";

/// Blocking yes/no question
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// Ask before deleting; `None` uses `DEFAULT_DELETE_MESSAGE`
pub fn confirm_delete(prompt: &impl Confirm, message: Option<&str>) -> bool {
    prompt.confirm(message.unwrap_or(DEFAULT_DELETE_MESSAGE))
}

/// Interactive prompt on the controlling terminal.
///
/// Defaults to "no". When no terminal is attached or the prompt fails, the
/// answer is "no".
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, message: &str) -> bool {
        match dialoguer::Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, "confirmation prompt failed; declining");
                false
            }
        }
    }
}
