use anyhow::Context;

/// Resolve the text source for a subcommand: exactly one of an inline
/// `--text` value or an `--in` file path.
pub fn read_text(text: Option<&str>, path: Option<&str>) -> anyhow::Result<String> {
    match (text, path) {
        (Some(t), None) => Ok(t.to_string()),
        (None, Some(p)) => std::fs::read_to_string(p).with_context(|| format!("read {p}")),
        _ => anyhow::bail!("exactly one of --text or --in is required"),
    }
}
