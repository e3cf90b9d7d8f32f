use std::fmt::Display;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use crossterm::style::Stylize;

use super::app::App;
use super::forms::MenuChoice;

const MENU_PROMPT: &str = "Enter your choice (1-6): ";

/// Line-oriented terminal: prompts go out, one line of input comes back.
/// Generic over the streams so the menu can be driven from tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and wait for a line. `None` means the input was closed.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}").context("failed to write prompt")?;
        self.output.flush().context("failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            writeln!(self.output).context("failed to write output")?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}").context("failed to write output")
    }

    pub fn heading(&mut self, title: &str) -> Result<()> {
        self.say(format!("\n--- {title} ---").cyan())
    }

    pub fn success(&mut self, message: impl Into<String>) -> Result<()> {
        self.say(message.into().green())
    }

    pub fn failure(&mut self, message: impl Into<String>) -> Result<()> {
        self.say(message.into().red())
    }
}

/// Attach the menu to stdin/stdout and keep dispatching until the user exits.
pub fn run_app(app: &mut App) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    run_with(app, &mut console)
}

/// The menu loop itself. Closing the input, at the menu or inside an entry,
/// counts as choosing Exit.
pub fn run_with<R: BufRead, W: Write>(app: &mut App, console: &mut Console<R, W>) -> Result<()> {
    app.draw_intro(console)?;
    loop {
        app.draw_menu(console)?;
        let choice = match console.ask(MENU_PROMPT)? {
            Some(input) => MenuChoice::parse(&input),
            None => Some(MenuChoice::Exit),
        };
        if app.handle_choice(choice, console)? {
            break;
        }
    }
    app.draw_goodbye(console)
}
