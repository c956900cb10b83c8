//! Canonical usage text for the command-line surface.
//!
//! The help output is a fixed contract: `-h`/`--help` print [`USAGE`]
//! byte-for-byte, and the black-box tests compare it against the committed
//! copy in `tests/fixtures/usage.txt`. Edits here must be mirrored there.

/// Summary line shown above usage-error diagnostics on stderr.
pub const USAGE_LINE: &str = "Usage: recho [-h] [-l] [-u] [-t] <TEXT>";

/// Full usage text printed to stdout for `-h`/`--help`.
pub const USAGE: &str = "\
Usage: recho [-h] [-l] [-u] [-t] <TEXT>

Echo text to standard output, optionally transforming its case.

When more than one transformation is requested, they are applied in a
fixed order regardless of where the flags appear on the command line:
title first, then lower, then upper. The transformation applied last
wins where they conflict.

Arguments:
  <TEXT>       The text to echo

Options:
  -l, --lower  Lowercase the text
  -u, --upper  Uppercase the text
  -t, --title  Title-case the text: capitalize the first letter of each
               whitespace-delimited word and lowercase the rest
  -h, --help   Print this usage text and exit
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_begins_with_summary_line() {
        assert!(USAGE.starts_with(USAGE_LINE));
    }

    #[test]
    fn test_usage_ends_with_single_newline() {
        assert!(USAGE.ends_with('\n'));
        assert!(!USAGE.ends_with("\n\n"));
    }

    #[test]
    fn test_usage_matches_committed_fixture() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/usage.txt");
        let fixture = std::fs::read_to_string(path)
            .expect("usage fixture should be committed at tests/fixtures/usage.txt");
        assert_eq!(USAGE, fixture);
    }
}
