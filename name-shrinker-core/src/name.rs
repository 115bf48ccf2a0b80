use std::fmt;

/// A filename split at its final extension separator.
///
/// Leading dots belong to the stem, so `.bashrc` has no extension while
/// `.config.toml` splits into `.config` and `.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParts<'a> {
    pub stem: &'a str,
    /// Includes the leading `.`, or is empty
    pub extension: &'a str,
}

impl<'a> NameParts<'a> {
    pub fn split(name: &'a str) -> Self {
        // The separator is ASCII, so the byte offset is a char boundary.
        let (stem, _) = split_bytes(name.as_bytes());
        Self {
            stem: &name[..stem.len()],
            extension: &name[stem.len()..],
        }
    }

    pub fn has_extension(&self) -> bool {
        !self.extension.is_empty()
    }
}

/// [`NameParts::split`] over raw bytes, for names that are not valid UTF-8.
pub fn split_bytes(name: &[u8]) -> (&[u8], &[u8]) {
    let Some(dot) = name.iter().rposition(|&b| b == b'.') else {
        return (name, &[][..]);
    };

    // A dot only counts as a separator when something other than
    // leading dots precedes it.
    if name[..dot].iter().all(|&b| b == b'.') {
        return (name, &[][..]);
    }

    name.split_at(dot)
}

impl fmt::Display for NameParts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem, self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(name: &str) -> (&str, &str) {
        let parts = NameParts::split(name);
        (parts.stem, parts.extension)
    }

    #[test]
    fn test_simple_extension() {
        assert_eq!(split("report.pdf"), ("report", ".pdf"));
    }

    #[test]
    fn test_only_last_extension_is_split() {
        assert_eq!(split("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split("a.b.txt"), ("a.b", ".txt"));
    }

    #[test]
    fn test_no_dot() {
        assert_eq!(split("README"), ("README", ""));
        assert!(!NameParts::split("README").has_extension());
    }

    #[test]
    fn test_leading_dot_is_part_of_stem() {
        assert_eq!(split(".bashrc"), (".bashrc", ""));
        assert_eq!(split("..x"), ("..x", ""));
        assert_eq!(split("..."), ("...", ""));
        assert_eq!(split(".config.toml"), (".config", ".toml"));
    }

    #[test]
    fn test_trailing_dot() {
        assert_eq!(split("name."), ("name", "."));
    }

    #[test]
    fn test_multibyte_stem() {
        assert_eq!(split("日本語のファイル.txt"), ("日本語のファイル", ".txt"));
    }

    #[test]
    fn test_split_bytes_keeps_invalid_extension() {
        assert_eq!(
            split_bytes(b"report.t\xffxt"),
            (&b"report"[..], &b".t\xffxt"[..])
        );
        assert_eq!(split_bytes(b"a\xff.\xfe"), (&b"a\xff"[..], &b".\xfe"[..]));
        assert_eq!(split_bytes(b".\xff"), (&b".\xff"[..], &b""[..]));
        assert_eq!(split_bytes(b"\xff"), (&b"\xff"[..], &b""[..]));
    }

    #[test]
    fn test_display_reassembles() {
        let parts = NameParts::split("a.b.txt");
        assert_eq!(parts.to_string(), "a.b.txt");
    }
}
