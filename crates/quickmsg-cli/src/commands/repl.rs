use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use quickmsg_core::command::texts::COMMAND_NAME;

use crate::app::App;

const OPERATIONS: [&str; 6] = ["help", "list", "send", "create", "edit", "remove"];

/// Completes and hints operation names.
#[derive(Clone)]
struct QuickMessageHelper;

impl QuickMessageHelper {
    /// Start of the operation word under the cursor, if the cursor is on it.
    fn operation_start(line: &str) -> Option<usize> {
        let rest = line.trim_start();
        let offset = line.len() - rest.len();

        let invoked = rest
            .strip_prefix('/')
            .and_then(|r| r.strip_prefix(COMMAND_NAME))
            .filter(|after| after.starts_with(char::is_whitespace));

        let (start, word) = match invoked {
            Some(after) => {
                let after_trimmed = after.trim_start();
                (line.len() - after_trimmed.len(), after_trimmed)
            }
            None => (offset, rest),
        };

        if word.contains(char::is_whitespace) {
            None
        } else {
            Some(start)
        }
    }
}

impl Helper for QuickMessageHelper {}

impl Completer for QuickMessageHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        let Some(start) = Self::operation_start(line) else {
            return Ok((pos, vec![]));
        };
        let word = &line[start..];

        let candidates = OPERATIONS
            .iter()
            .filter(|op| op.starts_with(word))
            .map(|op| Pair {
                display: op.to_string(),
                replacement: op.to_string(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Highlighter for QuickMessageHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for QuickMessageHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        let start = Self::operation_start(line)?;
        let word = &line[start..];

        if word.is_empty() {
            return None;
        }

        OPERATIONS
            .iter()
            .find(|op| op.starts_with(word) && op.len() > word.len())
            .map(|op| op[word.len()..].to_string())
    }
}

impl Validator for QuickMessageHelper {}

pub async fn run(app: &App) -> Result<()> {
    let mut rl = Editor::new()?;
    rl.set_helper(Some(QuickMessageHelper));

    println!("{}", "=== Quick Message ===".bright_magenta().bold());
    println!(
        "{}",
        format!(
            "Signed in as {} in #{}. Type 'help' for operations, 'quit' to exit.",
            app.context.sender, app.context.room
        )
        .bright_black()
    );
    println!();

    loop {
        match rl.readline(&format!("/{}> ", COMMAND_NAME)) {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);

                let tokens = super::tokenize(trimmed);
                if let Err(e) = app.invoke(&tokens).await {
                    eprintln!("{}", format!("Error: {:#}", e).red());
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
