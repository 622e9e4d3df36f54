//! Cleanup for event descriptions exported by TeamUp.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static MARKDOWN_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\(([^)\s]+)\)").expect("link pattern is valid")
});

/// Normalises a TeamUp description into plain Discord markdown.
///
/// Steps run in order: unescape `\[`, `\]` and `\*`, drop non-breaking spaces, decode
/// HTML entities, then collapse self-labelled links `[url](url)` into `url `.
pub fn clean_import_description(text: &str) -> String {
    let unescaped = text
        .replace(r"\[", "[")
        .replace(r"\]", "]")
        .replace(r"\*", "*")
        .replace('\u{a0}', "");

    let decoded = html_escape::decode_html_entities(&unescaped);

    MARKDOWN_LINK
        .replace_all(&decoded, |caps: &Captures| {
            if caps[1] == caps[2] {
                format!("{} ", &caps[2])
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unescapes_markdown_punctuation() {
        assert_eq!(
            clean_import_description(r"\*\*Bold\*\* \[note\]"),
            "**Bold** [note]"
        );
    }

    #[test]
    fn strips_non_breaking_spaces() {
        assert_eq!(clean_import_description("a\u{a0}b"), "ab");
    }

    #[test]
    fn decodes_entities() {
        assert_eq!(
            clean_import_description("Tom &amp; Jerry &lt;3 &#39;hi&#x27;"),
            "Tom & Jerry <3 'hi'"
        );
    }

    #[test]
    fn decodes_typographic_entities() {
        assert_eq!(
            clean_import_description("Don&rsquo;t miss it &ndash; bring friends&hellip; &eacute;"),
            "Don\u{2019}t miss it \u{2013} bring friends\u{2026} \u{e9}"
        );
    }

    #[test]
    fn collapses_self_labelled_links() {
        assert_eq!(
            clean_import_description(
                r"Join: \[https://vrchat.com/i/abc\](https://vrchat.com/i/abc)and more"
            ),
            "Join: https://vrchat.com/i/abc and more"
        );
    }

    #[test]
    fn keeps_labelled_links() {
        assert_eq!(
            clean_import_description("[Discord](https://discord.gg/x)"),
            "[Discord](https://discord.gg/x)"
        );
    }
}
