use clap::{CommandFactory, Parser};
use std::ffi::OsString;

use crate::error::{RechoError, Result};
use crate::transform::EchoOptions;

/// Command-line arguments for `recho`.
///
/// Help is declared as an ordinary flag rather than clap's built-in
/// action, so `-h` is honored before any other validation (including
/// the required TEXT argument) and prints our fixed usage text.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "recho",
    about = "Echo text with optional case transformations",
    disable_help_flag = true
)]
pub struct Args {
    /// The text to echo
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Lowercase the text
    #[arg(short, long)]
    pub lower: bool,

    /// Uppercase the text
    #[arg(short, long)]
    pub upper: bool,

    /// Title-case the text
    #[arg(short, long)]
    pub title: bool,

    /// Print the usage text and exit
    #[arg(short = 'h', long)]
    pub help: bool,
}

impl Args {
    /// Validate the parsed arguments into an echo request.
    ///
    /// Fails when TEXT is absent. Callers must check [`Args::help`]
    /// first: `-h` is honored even without TEXT.
    pub fn into_options(self) -> Result<EchoOptions> {
        let text = self.text.ok_or(RechoError::MissingText)?;
        Ok(EchoOptions {
            text,
            lower: self.lower,
            upper: self.upper,
            title: self.title,
        })
    }
}

/// Build the argument parser without running it.
pub fn parser() -> clap::Command {
    Args::command()
}

/// Parse raw command-line tokens, not including the program name.
pub fn parse_tokens<I, T>(tokens: I) -> Result<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv = std::iter::once(OsString::from("recho")).chain(tokens.into_iter().map(Into::into));
    Args::try_parse_from(argv).map_err(usage_error)
}

fn usage_error(err: clap::Error) -> RechoError {
    use clap::error::{ContextKind, ContextValue, ErrorKind};

    if err.kind() == ErrorKind::UnknownArgument {
        if let Some(ContextValue::String(arg)) = err.get(ContextKind::InvalidArg) {
            return RechoError::UnknownArgument(arg.clone());
        }
    }
    RechoError::InvalidArgs(render_parse_error(&err))
}

// Keep only the first line of clap's rendering; the usage block it
// appends is replaced by our own summary line at the reporting site.
fn render_parse_error(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or_default();
    first_line.trim_start_matches("error: ").to_string()
}
