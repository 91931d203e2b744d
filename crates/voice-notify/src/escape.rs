/// Characters that MarkdownV2 treats as markup and that must be preceded by
/// a backslash when they appear in literal text.
const RESERVED: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Escapes raw text for embedding in a MarkdownV2 message.
///
/// Apply this once to each piece of user or repository supplied text at the
/// point it is substituted into a template. It is not idempotent: escaping an
/// already escaped string adds a second backslash before every reserved char.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if RESERVED.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_version_string() {
        assert_eq!(escape("v1.0-rc!"), "v1\\.0\\-rc\\!");
    }

    #[test]
    fn test_escape_every_reserved_char() {
        for c in RESERVED {
            let input = format!("a{}b", c);
            assert_eq!(escape(&input), format!("a\\{}b", c));
        }
    }

    #[test]
    fn test_escape_leaves_plain_text() {
        assert_eq!(escape("alice/project 42"), "alice/project 42");
        assert_eq!(escape(""), "");
        assert_eq!(escape("héllo wörld"), "héllo wörld");
    }

    #[test]
    fn test_escape_keeps_existing_backslash() {
        assert_eq!(escape("a\\b"), "a\\b");
        assert_eq!(escape("\\."), "\\\\.");
    }

    #[test]
    fn test_escape_is_not_idempotent() {
        let once = escape("a.b");
        assert_eq!(once, "a\\.b");
        assert_eq!(escape(&once), "a\\\\.b");
    }

    #[test]
    fn test_escape_repeated_chars() {
        assert_eq!(escape("**bold**"), "\\*\\*bold\\*\\*");
        assert_eq!(escape("[x](y)"), "\\[x\\]\\(y\\)");
    }
}
