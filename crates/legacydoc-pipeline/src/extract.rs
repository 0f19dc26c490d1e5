//! Locating the JSON object embedded in a model reply
//!
//! Model replies are not guaranteed to be pure JSON: the answer may sit
//! inside a fenced code block, behind leading commentary, or arrive raw.
//! Extraction tries a ```json fence first, then falls back to the first
//! balanced `{...}` region found by a brace-depth scan. The scan tracks
//! string literals and escapes, so braces inside string values or stray
//! braces in prose do not confuse it.

/// Extract the JSON object substring from a model reply.
///
/// Returns `None` when the reply holds neither a ```json fence nor a
/// balanced `{...}` region.
pub fn extract_json(reply: &str) -> Option<&str> {
    if let Some(inner) = fenced_json_block(reply) {
        return Some(inner);
    }
    first_balanced_object(reply)
}

/// Find the inner content of the first fence labeled as JSON.
fn fenced_json_block(reply: &str) -> Option<&str> {
    let mut search_from = 0;
    while let Some(pos) = reply[search_from..].find("```") {
        let fence_start = search_from + pos;
        let after = &reply[fence_start + 3..];
        let label_is_json = after
            .as_bytes()
            .get(..4)
            .is_some_and(|label| label.eq_ignore_ascii_case(b"json"));
        if label_is_json {
            let body = &after[4..];
            return match body.find("```") {
                Some(end) => Some(body[..end].trim()),
                // Unterminated fence: take everything after the label
                None => Some(body.trim()),
            };
        }
        search_from = fence_start + 3;
    }
    None
}

/// Find the first top-level balanced `{...}` region anywhere in the text.
fn first_balanced_object(reply: &str) -> Option<&str> {
    let mut search_from = 0;
    while let Some(rel) = reply[search_from..].find('{') {
        let start = search_from + rel;
        if let Some(len) = balanced_object_len(&reply[start..]) {
            return Some(&reply[start..start + len]);
        }
        // This opening brace never closes; try the next one
        search_from = start + 1;
    }
    None
}

/// Byte length of the balanced object starting at the first byte of `s`,
/// which must be `{`. Returns `None` if the object never closes.
fn balanced_object_len(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, b) in s.bytes().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_json_is_returned_whole() {
        let reply = r#"{"objectName": "PROG1"}"#;
        assert_eq!(extract_json(reply), Some(reply));
    }

    #[test]
    fn test_fenced_block_takes_priority() {
        let reply = "Here is my analysis { with some notes }:\n```json\n{\"objectName\": \"PROG1\"}\n```\nHope that helps!";
        assert_eq!(extract_json(reply), Some("{\"objectName\": \"PROG1\"}"));
    }

    #[test]
    fn test_fenced_block_uppercase_label() {
        let reply = "```JSON\n{\"a\": 1}\n```";
        assert_eq!(extract_json(reply), Some("{\"a\": 1}"));
    }

    #[test]
    fn test_unterminated_fence_still_yields_content() {
        let reply = "```json\n{\"a\": 1}";
        assert_eq!(extract_json(reply), Some("{\"a\": 1}"));
    }

    #[test]
    fn test_unlabeled_fence_falls_back_to_brace_scan() {
        let reply = "```\n{\"a\": 1}\n```";
        assert_eq!(extract_json(reply), Some("{\"a\": 1}"));
    }

    #[test]
    fn test_prose_prefix_before_raw_json() {
        let reply = "Sure! The analysis follows.\n{\"objectName\": \"PROG1\", \"documentation\": {\"description\": \"x\"}}";
        assert_eq!(
            extract_json(reply),
            Some("{\"objectName\": \"PROG1\", \"documentation\": {\"description\": \"x\"}}")
        );
    }

    #[test]
    fn test_nested_objects_are_balanced() {
        let reply = r#"{"a": {"b": {"c": 1}}, "d": 2} trailing {"e": 3}"#;
        assert_eq!(extract_json(reply), Some(r#"{"a": {"b": {"c": 1}}, "d": 2}"#));
    }

    #[test]
    fn test_braces_inside_string_values() {
        let reply = r#"{"code": "IF x THEN { y } END", "note": "a \" quote"}"#;
        assert_eq!(extract_json(reply), Some(reply));
    }

    #[test]
    fn test_stray_open_brace_in_prose_is_skipped() {
        let reply = "note { unbalanced prose\nthen the answer: {\"a\": 1}";
        assert_eq!(extract_json(reply), Some("{\"a\": 1}"));
    }

    #[test]
    fn test_no_braces_returns_none() {
        assert_eq!(extract_json("I could not produce an analysis."), None);
        assert_eq!(extract_json(""), None);
    }

    #[test]
    fn test_only_unbalanced_braces_returns_none() {
        assert_eq!(extract_json("{ never closed"), None);
    }

    #[test]
    fn test_escaped_quotes_do_not_end_strings() {
        let reply = r#"{"a": "she said \"hi\" { loudly }"}"#;
        assert_eq!(extract_json(reply), Some(reply));
    }
}
