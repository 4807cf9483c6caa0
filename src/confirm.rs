//! Confirmation before destructive actions.
//!
//! The store decides *what* to delete; a [`Confirm`] implementation decides
//! whether the user agreed. Anything short of an explicit confirmation is a
//! cancel.

use std::io::{BufRead, Write};

/// Outcome of a confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decision {
    #[default]
    Cancel,
    Confirm,
}

impl Decision {
    /// Interpret a typed answer. Only `y`, `yes`, or the confirm label count
    /// as confirmation.
    pub fn from_answer(answer: &str, confirm_label: &str) -> Self {
        let answer = answer.trim();
        if answer.eq_ignore_ascii_case("y")
            || answer.eq_ignore_ascii_case("yes")
            || answer.eq_ignore_ascii_case(confirm_label)
        {
            Decision::Confirm
        } else {
            Decision::Cancel
        }
    }
}

/// What the user is asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
    pub cancel_label: String,
    pub confirm_label: String,
}

impl ConfirmPrompt {
    pub fn delete_note() -> Self {
        Self {
            title: "Delete Note".to_string(),
            message: "Are you sure you want to delete this note?".to_string(),
            cancel_label: "Cancel".to_string(),
            confirm_label: "Delete".to_string(),
        }
    }
}

pub trait Confirm {
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Decision;
}

/// Always answers the same way. `--force` uses `Decision::Confirm`.
impl Confirm for Decision {
    fn confirm(&mut self, _prompt: &ConfirmPrompt) -> Decision {
        *self
    }
}

/// Writes the prompt to `output` and reads one answer line from `input`.
pub struct LinePrompt<'a, R, W> {
    pub input: &'a mut R,
    pub output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> LinePrompt<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for LinePrompt<'_, R, W> {
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Decision {
        let shown = write!(
            self.output,
            "{}: {} [{} = y / {} = N] ",
            prompt.title, prompt.message, prompt.confirm_label, prompt.cancel_label
        )
        .and_then(|_| self.output.flush());
        if let Err(e) = shown {
            tracing::warn!(error = %e, "could not show confirmation prompt");
            return Decision::Cancel;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(0) => Decision::Cancel,
            Ok(_) => Decision::from_answer(&answer, &prompt.confirm_label),
            Err(e) => {
                tracing::warn!(error = %e, "could not read confirmation answer");
                Decision::Cancel
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_default_is_cancel() {
        assert_eq!(Decision::default(), Decision::Cancel);
    }

    #[test]
    fn test_from_answer() {
        assert_eq!(Decision::from_answer("y\n", "Delete"), Decision::Confirm);
        assert_eq!(Decision::from_answer("YES", "Delete"), Decision::Confirm);
        assert_eq!(Decision::from_answer(" delete ", "Delete"), Decision::Confirm);
        assert_eq!(Decision::from_answer("", "Delete"), Decision::Cancel);
        assert_eq!(Decision::from_answer("n", "Delete"), Decision::Cancel);
        assert_eq!(Decision::from_answer("maybe", "Delete"), Decision::Cancel);
    }

    #[test]
    fn test_line_prompt_confirm() {
        let mut input = Cursor::new(b"y\n".to_vec());
        let mut output = Vec::new();
        let decision =
            LinePrompt::new(&mut input, &mut output).confirm(&ConfirmPrompt::delete_note());

        assert_eq!(decision, Decision::Confirm);
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("Delete Note"));
        assert!(shown.contains("Are you sure"));
    }

    #[test]
    fn test_line_prompt_eof_cancels() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        let decision =
            LinePrompt::new(&mut input, &mut output).confirm(&ConfirmPrompt::delete_note());
        assert_eq!(decision, Decision::Cancel);
    }

    #[test]
    fn test_fixed_decision() {
        let prompt = ConfirmPrompt::delete_note();
        assert_eq!(Decision::Confirm.confirm(&prompt), Decision::Confirm);
        assert_eq!(Decision::Cancel.confirm(&prompt), Decision::Cancel);
    }
}
