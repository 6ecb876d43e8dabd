//! Command-line argument handling.

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Usage,
    Version,
    /// Inspect the creature named by the joined, trimmed arguments.
    Inspect(String),
}

/// Parses the full argument vector, program name included.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Command {
    let Some(first) = args.get(1) else {
        return Command::Usage;
    };
    if first.as_ref().contains("-version") {
        return Command::Version;
    }
    let target = args[1..]
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ");
    Command::Inspect(target.trim().to_string())
}
