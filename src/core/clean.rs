//! Verse text cleaning.
//!
//! Raw corpus text carries italic markup, superscriptions, stray quotes and
//! uneven spacing around punctuation. [`clean_verse`] runs a fixed sequence of
//! substitutions; later stages depend on the earlier ones having run.

use once_cell::sync::Lazy;
use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("cleaning pattern is a valid regex")
}

/// Leading `<i>...</i>` span, e.g. a psalm superscription
static LEADING_ANNOTATION: Lazy<Regex> = Lazy::new(|| compile(r"(?i)^<i>.*?</i>\s*"));

/// Adjacent italic spans: `</i> <i>`
static ADJACENT_SPANS: Lazy<Regex> = Lazy::new(|| compile(r"(?i)</i>\s*<i>"));

static ITALIC_TAG: Lazy<Regex> = Lazy::new(|| compile(r"(?i)</?i>"));

static QUOTES: Lazy<Regex> = Lazy::new(|| compile("[\"\u{201C}\u{201D}'\u{2018}\u{2019}]"));

static WRAPPING_DOUBLE_QUOTES: Lazy<Regex> =
    Lazy::new(|| compile("^[\"\u{201C}](.*)[\"\u{201D}]$"));

static WRAPPING_SINGLE_QUOTES: Lazy<Regex> =
    Lazy::new(|| compile("^['\u{2018}](.*)['\u{2019}]$"));

static WHITESPACE: Lazy<Regex> = Lazy::new(|| compile(r"\s+"));

/// One spacing rule per mark, applied in this order
static PUNCTUATION_SPACING: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"\s*,\s*", ", "),
        (r"\s*;\s*", "; "),
        (r"\s*:\s*", ": "),
        (r"\s*\.\s*", ". "),
        (r"\s*\?\s*", "? "),
        (r"\s*!\s*", "! "),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (compile(pattern), replacement))
    .collect()
});

static SPACE_BEFORE_PUNCTUATION: Lazy<Regex> = Lazy::new(|| compile(r"\s+([.,;:!?])"));

/// Remove italic tags and quote characters until neither is left.
///
/// Dropping one can join its neighbours into the other (`<"i>` becomes `<i>`,
/// `<<i>i>` becomes `<i>`), so a single pass is not enough. Every change
/// shortens the text, which bounds the loop.
fn strip_markup_and_quotes(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let spans = ADJACENT_SPANS.replace_all(&current, " ");
        let tags = ITALIC_TAG.replace_all(&spans, "");
        let next = QUOTES.replace_all(&tags, "");
        if next == current {
            return current;
        }
        current = next.into_owned();
    }
}

/// Clean raw verse text into plain, consistently punctuated text.
///
/// Empty input yields an empty string.
///
/// # Examples
///
/// ```
/// use verse_solver::core::clean::clean_verse;
///
/// assert_eq!(
///     clean_verse("<i>A Psalm of David.</i> The LORD is my shepherd ;I shall not want."),
///     "The LORD is my shepherd; I shall not want."
/// );
/// ```
#[must_use]
pub fn clean_verse(raw: &str) -> String {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return String::new();
    }

    let cleaned = LEADING_ANNOTATION.replace(cleaned, "");
    let cleaned = strip_markup_and_quotes(&cleaned);

    // No-op once every quote is gone, but kept for text that reaches here with quotes intact
    let cleaned = WRAPPING_DOUBLE_QUOTES.replace(&cleaned, "$1");
    let cleaned = WRAPPING_SINGLE_QUOTES.replace(cleaned.trim(), "$1");
    let cleaned = cleaned.trim();

    let mut cleaned = WHITESPACE.replace_all(cleaned, " ").into_owned();

    for (rule, replacement) in PUNCTUATION_SPACING.iter() {
        cleaned = rule.replace_all(&cleaned, *replacement).into_owned();
    }
    let cleaned = SPACE_BEFORE_PUNCTUATION.replace_all(&cleaned, "$1");

    cleaned.trim().to_string()
}
