/// Largest filename, in UTF-8 bytes, left untouched by the length bound.
pub const MAX_NAME_BYTES: usize = 143;

/// Bytes kept from the start of an over-long stem.
pub const HEAD_BYTES: usize = 68;

/// Bytes kept from the end of an over-long stem.
pub const TAIL_BYTES: usize = 68;

pub const ELLIPSIS: &str = "...";

/// The first `max` bytes of `s`, dropping a trailing partial character.
pub fn lenient_head(s: &str, max: usize) -> &str {
    if max >= s.len() {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// The last `max` bytes of `s`, dropping a leading partial character.
pub fn lenient_tail(s: &str, max: usize) -> &str {
    if max >= s.len() {
        return s;
    }
    let mut start = s.len() - max;
    while !s.is_char_boundary(start) {
        start += 1;
    }
    &s[start..]
}

/// Build `head + ellipsis + tail` from `stem`.
///
/// Head and tail are taken independently, so a stem shorter than either
/// budget appears on both sides of the ellipsis.
pub fn truncate_stem(stem: &str, head_bytes: usize, tail_bytes: usize, ellipsis: &str) -> String {
    let head = lenient_head(stem, head_bytes);
    let tail = lenient_tail(stem, tail_bytes);

    let mut out = String::with_capacity(head.len() + ellipsis.len() + tail.len());
    out.push_str(head);
    out.push_str(ellipsis);
    out.push_str(tail);
    out
}
