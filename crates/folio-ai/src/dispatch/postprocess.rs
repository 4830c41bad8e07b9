//! Reply clean-up applied before text reaches the visitor.

use std::sync::LazyLock;

use regex::Regex;

static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("bold pattern is valid"));

/// Replace every `**text**` pair with `text`. Other markup is untouched.
pub fn strip_bold(text: &str) -> String {
    BOLD_RE.replace_all(text, "$1").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_bold_keeps_italic() {
        assert_eq!(strip_bold("**Bold** and *not bold*"), "Bold and *not bold*");
    }

    #[test]
    fn strips_every_pair() {
        assert_eq!(
            strip_bold("I know **React** and **TypeScript**."),
            "I know React and TypeScript."
        );
    }

    #[test]
    fn leaves_unmatched_markers() {
        assert_eq!(strip_bold("**unclosed"), "**unclosed");
        assert_eq!(strip_bold("****"), "****");
        assert_eq!(strip_bold("2 ** 3 = 8"), "2 ** 3 = 8");
    }

    #[test]
    fn multiline_text() {
        assert_eq!(
            strip_bold("- **Rust**: 92%\n- **Go**: 70%"),
            "- Rust: 92%\n- Go: 70%"
        );
    }
}
