pub mod exec;
pub mod repl;
pub mod verify;

/// Splits a raw invocation into whitespace-delimited tokens, dropping a
/// leading `/quick-message` if present.
pub fn tokenize(line: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.first().is_some_and(|first| {
        first.strip_prefix('/') == Some(quickmsg_core::command::texts::COMMAND_NAME)
    }) {
        tokens.remove(0);
    }
    tokens
}
