//! Inline substitutions applied to a single line of text.
//!
//! Passes run in a fixed order: `[[hash]]`, `((strip))`, `**bold**`,
//! `__emphasis__`. The first two see raw text, so `*` or `_` inside them are
//! never read as formatting markers. Every span is matched lazily, left to
//! right, and an opener without a closer is left as literal text.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::HtmlConfig;

static HASH_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\[(.+?)\]\]").unwrap());
static STRIP_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(\((.+?)\)\)").unwrap());
static BOLD_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static EMPHASIS_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__(.+?)__").unwrap());

/// Format a line with the default element names.
pub fn format(line: &str) -> String {
    format_with_config(line, &HtmlConfig::default())
}

/// Format a line, taking the bold and emphasis element names from `config`.
pub fn format_with_config(line: &str, config: &HtmlConfig) -> String {
    let text = HASH_SPAN.replace_all(line, |caps: &Captures| md5_hex(&caps[1]));
    let text = STRIP_SPAN.replace_all(&text, |caps: &Captures| strip_c(&caps[1]));
    let text = wrap_spans(&BOLD_SPAN, &text, &config.bold_tag);
    wrap_spans(&EMPHASIS_SPAN, &text, &config.emphasis_tag)
}

/// Lowercase hex MD5 digest of the UTF-8 bytes of `text`.
fn md5_hex(text: &str) -> String {
    format!("{:x}", md5::compute(text.as_bytes()))
}

/// Drop every `c` and `C`; everything else is kept as is.
fn strip_c(text: &str) -> String {
    text.chars().filter(|ch| !matches!(ch, 'c' | 'C')).collect()
}

fn wrap_spans(pattern: &Regex, text: &str, tag: &str) -> String {
    pattern
        .replace_all(text, |caps: &Captures| format!("<{tag}>{}</{tag}>", &caps[1]))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(format("Hello world"), "Hello world");
        assert_eq!(format(""), "");
    }

    #[test]
    fn hash_span() {
        assert_eq!(format("[[Hello]]"), "8b1a9953c4611296a827abf8c47804d7");
        assert_eq!(
            format("id: [[abc]]!"),
            "id: 900150983cd24fb0d6963f7d28e17f72!"
        );
    }

    #[test]
    fn hash_spans_are_matched_independently() {
        assert_eq!(
            format("[[abc]] and [[Hello]]"),
            "900150983cd24fb0d6963f7d28e17f72 and 8b1a9953c4611296a827abf8c47804d7"
        );
    }

    #[test]
    fn hash_uses_raw_text() {
        // md5("**x**"), not md5("<b>x</b>")
        let expected = format!("{:x}", md5::compute(b"**x**"));
        assert_eq!(format("[[**x**]]"), expected);
        assert!(!format("[[**x**]]").contains("<b>"));
    }

    #[test]
    fn hash_is_over_utf8_bytes() {
        // bytes c3 a9
        assert_eq!(format("[[é]]"), "66ddcd97cfdeabb2f6fb8a999b4bc76f");
    }

    #[test]
    fn strip_span() {
        assert_eq!(format("((Chicago))"), "hiago");
        assert_eq!(format("((cCx))"), "x");
        assert_eq!(format("a ((Cocoa Cake)) b"), "a ooa ake b");
    }

    #[test]
    fn strip_span_keeps_other_characters() {
        assert_eq!(format("((déjà vu!))"), "déjà vu!");
        assert_eq!(format("((Ça cède ç))"), "Ça ède ç");
        assert_eq!(format("((日本c語))"), "日本語");
    }

    #[test]
    fn strip_runs_before_bold() {
        assert_eq!(format("((**cat**))"), "<b>at</b>");
    }

    #[test]
    fn bold_and_emphasis() {
        assert_eq!(format("**bold**"), "<b>bold</b>");
        assert_eq!(format("__em__"), "<em>em</em>");
        assert_eq!(format("**a** and **b**"), "<b>a</b> and <b>b</b>");
    }

    #[test]
    fn bold_and_emphasis_compose() {
        assert_eq!(format("**a__b__c**"), "<b>a<em>b</em>c</b>");
    }

    #[test]
    fn unterminated_spans_are_literal() {
        assert_eq!(format("**open"), "**open");
        assert_eq!(format("__open"), "__open");
        assert_eq!(format("[[open"), "[[open");
        assert_eq!(format("((open"), "((open");
    }

    #[test]
    fn empty_spans_are_literal() {
        assert_eq!(format("[[]]"), "[[]]");
        assert_eq!(format("(())"), "(())");
        assert_eq!(format("****"), "****");
    }

    #[test]
    fn configured_tags() {
        let config = HtmlConfig {
            bold_tag: "strong".to_string(),
            emphasis_tag: "i".to_string(),
            ..HtmlConfig::default()
        };
        assert_eq!(
            format_with_config("**a** __b__", &config),
            "<strong>a</strong> <i>b</i>"
        );
    }
}
