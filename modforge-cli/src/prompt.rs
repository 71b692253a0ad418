//! Operator prompts
//!
//! The reconciler only sees the [`Prompter`] trait. The binary plugs in
//! [`TerminalPrompter`]; tests script answers with [`ScriptedPrompter`].

use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};

use console::Term;
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::Input;

use crate::error::{Result, ScaffoldError};

/// Line-based question/answer channel to the operator
pub trait Prompter {
    /// Ask `prompt` and return the raw answer
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Prompt`] if no answer can be read.
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// Prompts on the controlling terminal
///
/// Falls back to plain line reads from stdin when input is piped.
#[derive(Debug, Clone, Copy)]
pub struct TerminalPrompter {
    colors: bool,
}

impl TerminalPrompter {
    /// Create a terminal prompter
    #[must_use]
    pub const fn new(colors: bool) -> Self {
        Self { colors }
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        if !(io::stdin().is_terminal() && Term::stderr().is_term()) {
            return read_answer(&mut io::stdin().lock(), &mut io::stdout(), prompt);
        }

        let colorful = ColorfulTheme::default();
        let theme: &dyn Theme = if self.colors { &colorful } else { &SimpleTheme };

        Input::<String>::with_theme(theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ScaffoldError::Prompt(e.to_string()))
    }
}

/// Write `prompt` to `output` and read one line from `input`
///
/// The trailing newline is stripped.
///
/// # Errors
///
/// Returns [`ScaffoldError::Prompt`] on end of input or a read failure.
pub fn read_answer(
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    prompt: &str,
) -> Result<String> {
    writeln!(output, "{prompt}")
        .and_then(|()| output.flush())
        .map_err(|e| ScaffoldError::Prompt(e.to_string()))?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| ScaffoldError::Prompt(e.to_string()))?;
    if read == 0 {
        return Err(ScaffoldError::Prompt(format!(
            "no answer to '{prompt}': end of input"
        )));
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Replays canned answers in order
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    /// Create a prompter that answers with `answers`, in order
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts seen so far
    #[must_use]
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.asked.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| ScaffoldError::Prompt(format!("no scripted answer for '{prompt}'")))
    }
}
