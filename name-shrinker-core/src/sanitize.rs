use regex::Regex;
use std::sync::OnceLock;

/// Sequences replaced with `_` in a stem, applied in this order.
///
/// `".."` can never match once `"."` has been replaced. It is kept so the
/// substitution list stays identical to the one names were shrunk with
/// before.
pub const INVALID_SEQUENCES: [&str; 5] = ["\n", "\r", "/", ".", ".."];

pub const REPLACEMENT: &str = "_";

/// Replace every invalid sequence in `stem` with `_`.
pub fn sanitize_stem(stem: &str) -> String {
    INVALID_SEQUENCES
        .iter()
        .fold(stem.to_string(), |acc, seq| acc.replace(seq, REPLACEMENT))
}

fn non_ascii_run() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^\x00-\x7F]+").expect("non-ASCII pattern is valid"))
}

/// Collapse each maximal run of non-ASCII characters into a single `_`.
///
/// Used for names that were not valid UTF-8 on disk, where the decoded text
/// carries replacement characters next to whatever non-ASCII text survived.
pub fn collapse_non_ascii(stem: &str) -> String {
    non_ascii_run().replace_all(stem, REPLACEMENT).into_owned()
}
