//! Case transformations applied to echoed text.

/// A validated echo request: the text plus the transformations to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoOptions {
    pub text: String,
    pub lower: bool,
    pub upper: bool,
    pub title: bool,
}

impl EchoOptions {
    /// An echo request with no transformations.
    pub fn plain(text: impl Into<String>) -> Self {
        EchoOptions {
            text: text.into(),
            lower: false,
            upper: false,
            title: false,
        }
    }
}

/// Apply the requested transformations to the text.
///
/// Transformations run in a fixed order regardless of flag position on
/// the command line: title case first, then lowercase, then uppercase.
/// The one applied last wins where they conflict.
pub fn transform(options: &EchoOptions) -> String {
    let mut text = options.text.clone();
    if options.title {
        text = title_case(&text);
    }
    if options.lower {
        text = text.to_lowercase();
    }
    if options.upper {
        text = text.to_uppercase();
    }
    text
}

/// Capitalize the first letter of each whitespace-delimited word and
/// lowercase the rest. Runs of whitespace collapse to a single space.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut capitalized = String::with_capacity(word.len());
    capitalized.extend(first.to_uppercase());
    capitalized.extend(chars.flat_map(char::to_lowercase));
    capitalized
}
