//! Terminal rendering of command output.

use async_trait::async_trait;
use colored::{ColoredString, Colorize};

use quickmsg_core::command::{CommandContext, DisplayKind, DisplayResult, MessageSink};
use quickmsg_core::config::DisplaySettings;
use quickmsg_core::error::Result;

/// Prints notifications under the configured alias and room messages under
/// the sender's name.
pub struct TerminalSink {
    display: DisplaySettings,
}

impl TerminalSink {
    pub fn new(display: DisplaySettings) -> Self {
        Self { display }
    }

    fn paint(kind: DisplayKind, line: &str) -> ColoredString {
        match kind {
            DisplayKind::Info => line.bright_blue(),
            DisplayKind::Success => line.green(),
            DisplayKind::Error => line.red(),
            DisplayKind::Message => line.normal(),
        }
    }
}

#[async_trait]
impl MessageSink for TerminalSink {
    async fn notify_user(&self, _context: &CommandContext, result: &DisplayResult) -> Result<()> {
        println!(
            "{}",
            format!("{} {} (only you can see this)", self.display.emoji_avatar, self.display.sender_alias)
                .bright_black()
        );
        for line in result.text.lines() {
            println!("{}", Self::paint(result.kind, &strip_emphasis(line)));
        }
        Ok(())
    }

    async fn post_message(&self, context: &CommandContext, text: &str) -> Result<()> {
        println!(
            "{}",
            format!("[#{}] {}", context.room, context.sender).bright_magenta()
        );
        for line in text.lines() {
            println!("{}", line);
        }
        Ok(())
    }
}

/// Drops the `**` emphasis markers chat clients render as bold.
fn strip_emphasis(line: &str) -> String {
    line.replace("**", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_emphasis() {
        assert_eq!(
            strip_emphasis("Quick message **hi** created."),
            "Quick message hi created."
        );
        assert_eq!(strip_emphasis("plain"), "plain");
    }
}
