//! Line input
//!
//! The menu reads every answer through `Prompt`, backed by a rustyline
//! editor at the terminal and by a fixed script in tests.

use std::borrow::Cow;
use std::collections::VecDeque;

use rustyline::completion::Completer;
use rustyline::config::{ColorMode, Configurer};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Editor, Helper};

use crate::utils::errors::AppError;

pub trait Prompt {
    /// Read one line; `None` when input has ended
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError>;

    /// Read a line that is neither echoed nor kept in history
    fn read_secret(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        self.read_line(prompt)
    }
}

/// Draws every typed character as `*` while `masking` is on
#[derive(Debug, Default)]
pub struct MaskingHelper {
    pub masking: bool,
}

impl Highlighter for MaskingHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if self.masking {
            Cow::Owned("*".repeat(line.chars().count()))
        } else {
            Cow::Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        self.masking
    }
}

impl Completer for MaskingHelper {
    type Candidate = String;
}

impl Hinter for MaskingHelper {
    type Hint = String;
}

impl Validator for MaskingHelper {}

impl Helper for MaskingHelper {}

/// Interactive prompt with line editing and history
pub struct EditorPrompt {
    editor: Editor<MaskingHelper, DefaultHistory>,
}

impl EditorPrompt {
    pub fn new() -> Result<Self, AppError> {
        let mut editor = Editor::new()?;
        editor.set_helper(Some(MaskingHelper::default()));
        // masking is drawn through the highlighter, which only runs with colors on
        editor.set_color_mode(ColorMode::Forced);
        editor.set_auto_add_history(false);
        Ok(Self { editor })
    }

    fn set_masking(&mut self, masking: bool) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.masking = masking;
        }
    }
}

impl Prompt for EditorPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn read_secret(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        self.set_masking(true);
        let read = self.editor.readline(prompt);
        self.set_masking(false);

        match read {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Prompt that answers from a prepared list of lines
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_prompt_ends_with_none() {
        let mut prompt = ScriptedPrompt::new(["a", "b"]);
        assert_eq!(prompt.read_line("1> ").unwrap().as_deref(), Some("a"));
        assert_eq!(prompt.read_line("2> ").unwrap().as_deref(), Some("b"));
        assert_eq!(prompt.read_line("3> ").unwrap(), None);
        assert_eq!(prompt.prompts(), &["1> ", "2> ", "3> "]);
    }

    #[test]
    fn test_masking_helper_hides_secret() {
        let mut helper = MaskingHelper::default();
        assert_eq!(helper.highlight("hunter2", 7), "hunter2");
        assert!(!helper.highlight_char("hunter2", 7, false));

        helper.masking = true;
        assert_eq!(helper.highlight("hunter2", 7), "*******");
        assert!(helper.highlight_char("hunter2", 7, false));
    }
}
