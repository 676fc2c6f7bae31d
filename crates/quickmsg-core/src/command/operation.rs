//! Argument parsing for `/quick-message`.

use crate::error::{QuickMessageError, Result};

/// A validated `/quick-message` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Help,
    List,
    Send { id: String },
    Create { id: String, text: String },
    Edit { id: String, text: String },
    Remove { id: String },
}

impl Operation {
    /// Parses whitespace-delimited argument tokens.
    ///
    /// The operation name is matched exactly. Text arguments are the
    /// remaining tokens rejoined with single spaces; that string must start
    /// and end with `"`. Exactly one quote is stripped from each end and
    /// nothing inside is unescaped. Trailing tokens after an id are ignored.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        let Some(operation) = tokens.first().map(AsRef::as_ref) else {
            return Err(QuickMessageError::invalid_arguments("no operation given"));
        };

        match operation {
            "help" => Ok(Self::Help),
            "list" => Ok(Self::List),
            "send" => Ok(Self::Send {
                id: required_id(tokens)?,
            }),
            "remove" => Ok(Self::Remove {
                id: required_id(tokens)?,
            }),
            "create" => Ok(Self::Create {
                id: required_id(tokens)?,
                text: quoted_text(&tokens[2..])?,
            }),
            "edit" => Ok(Self::Edit {
                id: required_id(tokens)?,
                text: quoted_text(&tokens[2..])?,
            }),
            other => Err(QuickMessageError::UnknownOperation(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::List => "list",
            Self::Send { .. } => "send",
            Self::Create { .. } => "create",
            Self::Edit { .. } => "edit",
            Self::Remove { .. } => "remove",
        }
    }
}

fn required_id<S: AsRef<str>>(tokens: &[S]) -> Result<String> {
    tokens
        .get(1)
        .map(AsRef::as_ref)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or_else(|| QuickMessageError::invalid_arguments("missing message id"))
}

fn quoted_text<S: AsRef<str>>(tokens: &[S]) -> Result<String> {
    let joined = tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ");

    let inner = joined
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(|| {
            QuickMessageError::invalid_arguments("message text must be wrapped in double quotes")
        })?;

    if inner.is_empty() {
        return Err(QuickMessageError::invalid_arguments(
            "message text must not be empty",
        ));
    }

    Ok(inner.to_string())
}
