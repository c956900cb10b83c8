mod args;

use std::ffi::OsString;
use tracing::debug;

pub use args::{parse_tokens, parser, Args};

use crate::error::Result;
use crate::transform::transform;
use crate::usage;

/// What a successful invocation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The usage text was printed.
    HelpShown,
    /// The transformed text was printed.
    Echoed(String),
}

/// Parse tokens, apply the requested transformations, and print the result.
///
/// Help output and echoed text go to stdout. Errors are returned to the
/// caller for reporting; nothing is printed here on failure.
pub fn run<I, T>(tokens: I) -> Result<Outcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = parse_tokens(tokens)?;

    if args.help {
        debug!("Help requested, printing usage");
        print!("{}", usage::USAGE);
        return Ok(Outcome::HelpShown);
    }

    let options = args.into_options()?;
    debug!(
        "Echoing with transformations: title={} lower={} upper={}",
        options.title, options.lower, options.upper
    );
    let text = transform(&options);
    println!("{text}");
    Ok(Outcome::Echoed(text))
}
