use crate::name::NameParts;
use crate::sanitize::{collapse_non_ascii, sanitize_stem};
use crate::truncate::{truncate_stem, ELLIPSIS, HEAD_BYTES, MAX_NAME_BYTES, TAIL_BYTES};
use serde::{Deserialize, Serialize};
use std::ffi::{OsStr, OsString};

/// Byte budget and truncation shape used by [`normalize_name`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeOptions {
    /// Names longer than this many UTF-8 bytes are truncated
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,

    #[serde(default = "default_head_bytes")]
    pub head_bytes: usize,

    #[serde(default = "default_tail_bytes")]
    pub tail_bytes: usize,

    /// Inserted between head and tail of a truncated stem
    #[serde(default = "default_ellipsis")]
    pub ellipsis: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            max_bytes: MAX_NAME_BYTES,
            head_bytes: HEAD_BYTES,
            tail_bytes: TAIL_BYTES,
            ellipsis: ELLIPSIS.to_string(),
        }
    }
}

fn default_max_bytes() -> usize {
    MAX_NAME_BYTES
}

fn default_head_bytes() -> usize {
    HEAD_BYTES
}

fn default_tail_bytes() -> usize {
    TAIL_BYTES
}

fn default_ellipsis() -> String {
    ELLIPSIS.to_string()
}

/// Compute the sanitized, length-bounded form of a UTF-8 filename.
///
/// A name that already satisfies every rule is returned unchanged.
pub fn normalize_name(name: &str, options: &NormalizeOptions) -> String {
    let parts = NameParts::split(name);
    let mut out = bound_stem(sanitize_stem(parts.stem), parts.extension.len(), options);
    out.push_str(parts.extension);
    out
}

/// Like [`normalize_name`], for a name read from the filesystem.
///
/// When the name is not valid UTF-8 only the stem is decoded lossily, and
/// every run of non-ASCII characters in it collapses to a single `_`. The
/// extension keeps its bytes as found on disk.
pub fn normalize_os_name(name: &OsStr, options: &NormalizeOptions) -> OsString {
    if let Some(text) = name.to_str() {
        return normalize_name(text, options).into();
    }
    tracing::debug!(name = %name.to_string_lossy(), "name is not valid UTF-8");
    normalize_undecodable(name, options)
}

#[cfg(unix)]
fn normalize_undecodable(name: &OsStr, options: &NormalizeOptions) -> OsString {
    use crate::name::split_bytes;
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let (stem, extension) = split_bytes(name.as_bytes());
    let stem = collapse_non_ascii(&sanitize_stem(&String::from_utf8_lossy(stem)));
    let mut out = bound_stem(stem, extension.len(), options).into_bytes();
    out.extend_from_slice(extension);
    OsString::from_vec(out)
}

// Elsewhere the raw form cannot be sliced safely, so the whole name is
// decoded lossily.
#[cfg(not(unix))]
fn normalize_undecodable(name: &OsStr, options: &NormalizeOptions) -> OsString {
    let text = name.to_string_lossy();
    let parts = NameParts::split(&text);
    let stem = collapse_non_ascii(&sanitize_stem(parts.stem));
    let mut out = bound_stem(stem, parts.extension.len(), options);
    out.push_str(parts.extension);
    out.into()
}

/// Truncate `stem` when it and an extension of `extension_len` bytes would
/// exceed the budget together.
fn bound_stem(stem: String, extension_len: usize, options: &NormalizeOptions) -> String {
    if stem.len() + extension_len <= options.max_bytes {
        return stem;
    }
    truncate_stem(
        &stem,
        options.head_bytes,
        options.tail_bytes,
        &options.ellipsis,
    )
}
