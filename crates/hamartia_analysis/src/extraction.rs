//! Utilities for unwrapping model output before parsing.

/// Strip a surrounding markdown code fence, if the text starts with one.
///
/// Handles "```json" and bare "```" openers, plus any other language tag
/// on the opening line. Text that does not start with a fence is only trimmed.
///
/// # Examples
///
/// ```
/// use hamartia_analysis::strip_code_fence;
///
/// assert_eq!(strip_code_fence("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
/// assert_eq!(strip_code_fence("  {\"a\": 1}  "), "{\"a\": 1}");
/// ```
pub fn strip_code_fence(response: &str) -> &str {
    let trimmed = response.trim();

    let Some(after_fence) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop a language tag such as `json` or `JSON` on the opening line
    let body = match after_fence.find('\n') {
        Some(newline)
            if after_fence[..newline]
                .trim()
                .chars()
                .all(|c| c.is_ascii_alphanumeric()) =>
        {
            &after_fence[newline + 1..]
        }
        _ => after_fence.strip_prefix("json").unwrap_or(after_fence),
    };

    // A missing closing fence means a truncated response; keep what is there
    let body = body.trim();
    body.strip_suffix("```").unwrap_or(body).trim()
}
