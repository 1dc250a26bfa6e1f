use once_cell::sync::Lazy;
use regex::Regex;

static EMPHASIS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[*#]+").expect("valid regex"));

/// Strips every `*` and `#` so generated text renders as plain prose.
pub fn clean_markdown(text: &str) -> String {
    EMPHASIS_RE.replace_all(text, "").into_owned()
}
