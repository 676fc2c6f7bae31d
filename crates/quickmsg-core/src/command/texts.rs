//! Fixed user-facing texts.

/// Name the command is registered under.
pub const COMMAND_NAME: &str = "quick-message";

/// Shown for every malformed invocation.
pub const INVALID_USAGE: &str = "Invalid format! Usage:\n\
    /quick-message **help**\n\
    /quick-message **list**\n\
    /quick-message **send** id\n\
    /quick-message **create** id \"text\"\n\
    /quick-message **edit** id \"text\"\n\
    /quick-message **remove** id";

pub const HELP: &str = "Quick Message stores short texts you can send again later.\n\
    \n\
    /quick-message **list** shows every stored message\n\
    /quick-message **send** id posts the message into the room\n\
    /quick-message **create** id \"text\" stores a new message\n\
    /quick-message **edit** id \"text\" replaces the text of a message\n\
    /quick-message **remove** id deletes a message\n\
    \n\
    Ids may contain letters, digits and '-'. The text must be wrapped in double quotes.";

pub const EMPTY_LIST: &str = "There are no quick messages yet. Create one with /quick-message **create** id \"text\".";

/// Prefix for storage failures shown to the user.
pub const FAILURE_PREFIX: &str = "Failed to execute the command";

/// Shown instead of the details of an unexpected failure.
pub const UNEXPECTED_FAILURE: &str = "Failed to execute the command: an unexpected error occurred.";
