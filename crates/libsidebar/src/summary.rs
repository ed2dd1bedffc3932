//! Condensing raw doc comments into one-line sidebar summaries.

use once_cell::sync::Lazy;
use regex::Regex;

/// Default character budget for a summary line.
pub const DEFAULT_MAX_CHARS: usize = 160;

/// Abbreviations whose trailing period does not end a sentence.
const ABBREVIATIONS: &[&str] = &["e.g.", "i.e.", "etc.", "vs.", "cf."];

/// `[text](target)`
static INLINE_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]\[]+)\]\([^)]*\)").expect("valid inline link pattern"));

/// `[text][reference]`
static REFERENCE_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]\[]+)\]\[[^\]]*\]").expect("valid reference link pattern"));

/// `` [`Path`] `` intra-doc shortcut links.
static CODE_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(`[^`\]]+`)\]").expect("valid code link pattern"));

/// How raw documentation is reduced to a sidebar summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryPolicy {
    /// Maximum length of the summary, in characters.
    pub max_chars: usize,
    /// Whether to stop at the end of the first sentence.
    pub first_sentence: bool,
}

impl Default for SummaryPolicy {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            first_sentence: true,
        }
    }
}

impl SummaryPolicy {
    /// Sets the character budget.
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Enables or disables cutting at the first sentence boundary.
    pub fn with_first_sentence(mut self, first_sentence: bool) -> Self {
        self.first_sentence = first_sentence;
        self
    }
}

/// Reduce a doc comment to a single display line according to `policy`.
///
/// The first paragraph is taken, link targets are removed and whitespace is
/// collapsed. The line is then cut at the first sentence (if enabled) and
/// truncated at a word boundary to fit the character budget.
pub fn condense(doc: &str, policy: &SummaryPolicy) -> String {
    let line = collapse_whitespace(&strip_links(&first_paragraph(doc)));
    let line = if policy.first_sentence {
        first_sentence(&line)
    } else {
        line.as_str()
    };
    truncate_at_word(line, policy.max_chars).to_string()
}

/// Lines of the first non-empty prose paragraph, joined by spaces.
///
/// Fenced code blocks are skipped; a fence also ends a paragraph.
pub fn first_paragraph(doc: &str) -> String {
    let mut in_fence = false;
    let mut lines = Vec::new();
    for line in doc.lines().map(str::trim) {
        if is_fence(line) {
            if !lines.is_empty() {
                break;
            }
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if line.is_empty() {
            if lines.is_empty() {
                continue;
            }
            break;
        }
        lines.push(strip_heading(line));
    }
    lines.join(" ")
}

fn is_fence(line: &str) -> bool {
    line.starts_with("```") || line.starts_with("~~~")
}

fn strip_heading(line: &str) -> &str {
    let rest = line.trim_start_matches('#');
    if rest.len() != line.len() && (rest.is_empty() || rest.starts_with(' ')) {
        rest.trim_start()
    } else {
        line
    }
}

fn strip_links(text: &str) -> String {
    let text = INLINE_LINK.replace_all(text, "$1");
    let text = REFERENCE_LINK.replace_all(&text, "$1");
    CODE_LINK.replace_all(&text, "$1").into_owned()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The prefix of `line` up to and including its first sentence terminator.
///
/// A terminator is `.`, `!` or `?` followed by whitespace or the end of the
/// line, outside a backtick code span, and not closing a known abbreviation.
/// Lines without a terminator are returned whole.
pub fn first_sentence(line: &str) -> &str {
    let mut in_code = false;
    let mut word_start = 0;
    let mut chars = line.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        match c {
            '`' => in_code = !in_code,
            c if c.is_whitespace() => word_start = idx + c.len_utf8(),
            '.' | '!' | '?' if !in_code => {
                let at_boundary = chars.peek().is_none_or(|(_, next)| next.is_whitespace());
                let end = idx + c.len_utf8();
                let word = line[word_start..end]
                    .trim_start_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase();
                if at_boundary && !ABBREVIATIONS.contains(&word.as_str()) {
                    return &line[..end];
                }
            }
            _ => {}
        }
    }
    line
}

/// Truncate `line` to at most `max_chars` characters without splitting a word.
///
/// Lines that already fit are returned unchanged. Otherwise the result is the
/// longest prefix followed by whitespace in `line`, with trailing whitespace
/// removed; it is empty when the first word alone exceeds the budget.
pub fn truncate_at_word(line: &str, max_chars: usize) -> &str {
    let Some((cut, _)) = line.char_indices().nth(max_chars) else {
        return line;
    };
    let head = &line[..cut];
    if line[cut..].starts_with(char::is_whitespace) {
        return head.trim_end();
    }
    match head.rfind(char::is_whitespace) {
        Some(pos) => head[..pos].trim_end(),
        None => "",
    }
}
