//! Pass 1: isolate the JSON object from surrounding prose.

/// Strip prose and fenced code-block markers around a JSON object.
///
/// Prefers an explicit ```` ```json ```` fence; without one, takes
/// everything from the first `{`. Returns the input trimmed when neither
/// is present (the later passes will then report failure).
#[must_use]
pub fn strip_fences(raw: &str) -> &str {
    let content = raw.trim();
    if let Some(start) = content.find("```json") {
        let body = &content[start + "```json".len()..];
        if let Some(end) = body.find("```") {
            return body[..end].trim();
        }
        return body.trim();
    }
    if let Some(start) = content.find('{') {
        return &content[start..];
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_fenced_block() {
        let raw = "Sure! ```json\n{\"a\":1}\n``` anything after";
        assert_eq!(strip_fences(raw), "{\"a\":1}");
    }

    #[test]
    fn unterminated_fence_takes_the_rest() {
        let raw = "```json\n{\"a\":1}";
        assert_eq!(strip_fences(raw), "{\"a\":1}");
    }

    #[test]
    fn falls_back_to_first_brace() {
        let raw = "the object is {\"a\":1} thanks";
        assert_eq!(strip_fences(raw), "{\"a\":1} thanks");
    }

    #[test]
    fn plain_text_passes_through_trimmed() {
        assert_eq!(strip_fences("  no json here  "), "no json here");
    }
}
