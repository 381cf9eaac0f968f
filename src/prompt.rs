use colored::Colorize;
use inquire::{Confirm, InquireError, Select, Text};

use crate::error::AppError;

/// Sentinel choice appended to profile selections
pub const CANCEL_OPTION: &str = "Cancel";

/// Interactive input capability used by the operations
pub trait Prompter {
    /// Asks for free text. `None` when the user cancels.
    fn input(&self, message: &str) -> Result<Option<String>, AppError>;

    /// Asks the user to pick one of `choices`; `cancel_label` is appended as the last one.
    ///
    /// Returns the index into `choices`, or `None` for the cancel choice.
    fn select(
        &self,
        message: &str,
        choices: &[String],
        cancel_label: &str,
    ) -> Result<Option<usize>, AppError>;

    /// Asks a yes/no question defaulting to no
    fn confirm(&self, message: &str) -> Result<bool, AppError>;
}

/// Terminal prompts rendered with `inquire`
#[derive(Debug, Default, Clone, Copy)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn input(&self, message: &str) -> Result<Option<String>, AppError> {
        match Text::new(&format!("{}", message.blue())).prompt() {
            Ok(input) => Ok(Some(input)),
            Err(InquireError::OperationCanceled) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn select(
        &self,
        message: &str,
        choices: &[String],
        cancel_label: &str,
    ) -> Result<Option<usize>, AppError> {
        let options: Vec<String> = build_choice_list(choices, cancel_label);
        match Select::new(&format!("{}", message.blue()), options).raw_prompt() {
            Ok(selected) if selected.index < choices.len() => Ok(Some(selected.index)),
            Ok(_) | Err(InquireError::OperationCanceled) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn confirm(&self, message: &str) -> Result<bool, AppError> {
        match Confirm::new(&format!("{}", message.blue()))
            .with_default(false)
            .prompt()
        {
            Ok(answer) => Ok(answer),
            Err(InquireError::OperationCanceled) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}

/// Builds the list of choices for the menu to display
pub fn build_choice_list(choices: &[String], cancel_label: &str) -> Vec<String> {
    let mut options: Vec<String> = choices.to_vec();
    options.push(cancel_label.to_string());
    options
}
