use name_shrinker_core::{normalize_name, sanitize_stem, NameParts, NormalizeOptions};
use proptest::prelude::*;

fn normalize(name: &str) -> String {
    normalize_name(name, &NormalizeOptions::default())
}

const NAME_CHARS: &str = "[a-zA-Z0-9 ._/\\n\\r\u{3042}-\u{3093}\u{1F600}-\u{1F64F}-]";

/// Filenames drawn from a mix of ASCII, dots, separators and multi-byte text
fn filename_of(min: usize, max: usize) -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("{}{{{},{}}}", NAME_CHARS, min, max)).unwrap()
}

fn filename() -> impl Strategy<Value = String> {
    filename_of(0, 260)
}

/// At most 35 characters of at most 4 bytes each always fits the budget
fn short_filename() -> impl Strategy<Value = String> {
    filename_of(0, 35)
}

/// At least 150 characters never fits the budget
fn long_filename() -> impl Strategy<Value = String> {
    filename_of(150, 260)
}

proptest! {
    #[test]
    fn sanitized_stem_has_no_forbidden_characters(stem in filename()) {
        let out = sanitize_stem(&stem);
        prop_assert!(!out.contains('\n'));
        prop_assert!(!out.contains('\r'));
        prop_assert!(!out.contains('/'));
        prop_assert!(!out.contains('.'));
        prop_assert_eq!(out.len(), stem.len());
    }

    #[test]
    fn short_sanitized_names_pass_through(name in short_filename()) {
        let parts = NameParts::split(&name);
        let sanitized = sanitize_stem(parts.stem) + parts.extension;
        prop_assert!(sanitized.len() <= 143);
        prop_assert_eq!(normalize(&name), sanitized.clone());
        prop_assert_eq!(normalize(&sanitized), sanitized);
    }

    #[test]
    fn long_names_get_head_ellipsis_tail(name in long_filename()) {
        let parts = NameParts::split(&name);
        let stem = sanitize_stem(parts.stem);
        prop_assert!(stem.len() + parts.extension.len() > 143);

        let out = normalize(&name);
        prop_assert!(out.ends_with(parts.extension));

        let out_stem = &out[..out.len() - parts.extension.len()];
        let head_len = stem.len().min(68);
        let mut head_end = head_len;
        while !stem.is_char_boundary(head_end) {
            head_end -= 1;
        }
        let mut tail_start = stem.len().saturating_sub(68);
        while !stem.is_char_boundary(tail_start) {
            tail_start += 1;
        }
        let expected = format!("{}...{}", &stem[..head_end], &stem[tail_start..]);
        prop_assert_eq!(out_stem, expected.as_str());
        prop_assert!(out_stem.len() <= 68 + 3 + 68);
    }

    #[test]
    fn bounded_output_for_short_extensions(name in filename()) {
        let parts = NameParts::split(&name);
        prop_assume!(parts.extension.len() <= 4);
        prop_assert!(normalize(&name).len() <= 143);
    }
}
