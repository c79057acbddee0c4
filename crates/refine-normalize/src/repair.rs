//! Passes 2-4: textual repair of almost-JSON.

use std::sync::LazyLock;

use regex::Regex;

// The service sometimes emits phone values as bare number literals. A
// leading zero makes that invalid JSON (and would silently drop the zero
// if it did parse), so re-quote before parsing.
static LEADING_ZERO_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""טלפון"(\s*:\s*)(0\d+)"#).expect("leading-zero phone pattern")
});

// A comma left dangling before a closing bracket, or at the very end of
// truncated output about to receive synthesized closers.
static DANGLING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",(\s*[\]}])").expect("dangling comma pattern"));

/// Re-quote numeric-looking phone values that begin with a leading zero.
#[must_use]
pub fn quote_leading_zero_phones(content: &str) -> String {
    LEADING_ZERO_PHONE
        .replace_all(content, "\"טלפון\"$1\"$2\"")
        .into_owned()
}

/// Drop trailing lines that were cut off mid-value.
///
/// Keeps everything up to the last line ending in `,`, `}`, or `]`. When
/// no line beyond the first qualifies, the input is returned unchanged.
#[must_use]
pub fn trim_incomplete_tail(content: &str) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let last_complete = lines.iter().rposition(|line| {
        let trimmed = line.trim_end();
        trimmed.ends_with(',') || trimmed.ends_with('}') || trimmed.ends_with(']')
    });
    match last_complete {
        Some(index) if index > 0 => lines[..=index].join("\n"),
        _ => content.to_string(),
    }
}

/// Remove dangling commas, both before closing brackets and at the end of
/// truncated content that is about to be balanced.
#[must_use]
pub fn strip_dangling_comma(content: &str) -> String {
    let stripped = DANGLING_COMMA.replace_all(content, "$1");
    stripped.trim_end().trim_end_matches(',').to_string()
}

/// Append the minimum closing characters to balance unmatched `[` and `{`.
///
/// Counting ignores string context, which matches the tolerance of the
/// rest of the ladder: if the count is wrong the final parse simply fails.
#[must_use]
pub fn balance_brackets(content: &str) -> String {
    let mut open_curly = 0usize;
    let mut close_curly = 0usize;
    let mut open_square = 0usize;
    let mut close_square = 0usize;
    for ch in content.chars() {
        match ch {
            '{' => open_curly += 1,
            '}' => close_curly += 1,
            '[' => open_square += 1,
            ']' => close_square += 1,
            _ => {}
        }
    }
    let mut balanced = content.to_string();
    if open_square > close_square {
        balanced.push_str(&"]".repeat(open_square - close_square));
    }
    if open_curly > close_curly {
        balanced.push_str(&"}".repeat(open_curly - close_curly));
    }
    balanced
}
