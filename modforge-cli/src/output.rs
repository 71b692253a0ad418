//! Styled terminal output
//!
//! Colors are a property of the [`Printer`] value handed to whoever prints,
//! never a global switch.

use std::path::Path;

use console::{Emoji, Style};

static CHECK: Emoji<'_, '_> = Emoji("✓", "+");
static CROSS: Emoji<'_, '_> = Emoji("✗", "x");
static WARN: Emoji<'_, '_> = Emoji("!", "!");

/// Prints operator-facing messages, optionally colored
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    colors: bool,
}

impl Printer {
    /// Create a printer; `colors = false` emits plain text
    #[must_use]
    pub const fn new(colors: bool) -> Self {
        Self { colors }
    }

    fn paint(&self, text: &str, style: &Style) -> String {
        if self.colors {
            style.apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// `CREATE <path> (<n> bytes)`
    #[must_use]
    pub fn created_line(&self, path: &Path, bytes: usize) -> String {
        format!(
            "{} {} {} ({bytes} bytes)",
            self.paint(&CHECK.to_string(), &Style::new().green()),
            self.paint("CREATE", &Style::new().green().bold()),
            self.paint(&path.display().to_string(), &Style::new().dim()),
        )
    }

    /// Report one written file
    pub fn created(&self, path: &Path, bytes: usize) {
        println!("  {}", self.created_line(path, bytes));
    }

    /// Section heading
    pub fn heading(&self, text: &str) {
        println!("\n{}", self.paint(text, &Style::new().cyan().bold()));
    }

    /// Success message
    pub fn success(&self, text: &str) {
        println!(
            "{} {}",
            self.paint(&CHECK.to_string(), &Style::new().green().bold()),
            self.paint(text, &Style::new().green())
        );
    }

    /// Warning message
    pub fn warn(&self, text: &str) {
        println!(
            "{} {}",
            self.paint(&WARN.to_string(), &Style::new().yellow().bold()),
            self.paint(text, &Style::new().yellow())
        );
    }

    /// Error message, on stderr
    pub fn error(&self, text: &str) {
        eprintln!(
            "{} {}",
            self.paint(&CROSS.to_string(), &Style::new().red().bold()),
            self.paint(text, &Style::new().red())
        );
    }

    /// Highlighted inline value (names, commands)
    #[must_use]
    pub fn highlight(&self, text: &str) -> String {
        self.paint(text, &Style::new().yellow())
    }

    /// Plain line
    pub fn line(&self, text: &str) {
        println!("{text}");
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(true)
    }
}
