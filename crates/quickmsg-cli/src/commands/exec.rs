use anyhow::Result;

use crate::app::App;

/// Runs one invocation. Shell-split arguments are rejoined and split again
/// on whitespace, the way a chat host hands arguments over.
pub async fn run(app: &App, args: &[String]) -> Result<()> {
    let line = args.join(" ");
    let tokens = super::tokenize(&line);
    app.invoke(&tokens).await
}
