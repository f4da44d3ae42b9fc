/// Markdown cleanup for raw model output
///
/// The steps run in a fixed order. Changing the order changes the output for
/// list-heavy responses, so keep it as is.

use once_cell::sync::Lazy;
use regex::Regex;

/// A dash and any whitespace after it, anywhere in the text
static DASH_BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"-\s*").unwrap());

/// A newline, optional whitespace, then another newline
static BLANK_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Strip code fences, emphasis markers and bullets, then collapse blank lines
pub fn normalize(raw: &str) -> String {
    let text = raw
        .trim()
        .replace("```", "")
        .replace("**", "")
        .replace('*', "");
    let text = DASH_BULLET.replace_all(&text, "");
    BLANK_LINE.replace_all(&text, "\n").into_owned()
}
