use std::borrow::Cow;

const MAX_API_ERROR_CHARS: usize = 300;

const PREFIX_PATTERNS: [&str; 5] = ["AIza", "ya29.", "GOCSPX-", "eyJ", "sk-"];

const MARKER_PATTERNS: [&str; 11] = [
    "Authorization: Bearer ",
    "authorization: bearer ",
    "\"authorization\":\"Bearer ",
    "key=",
    "access_token=",
    "client_secret=",
    "code=",
    "\"api_key\":\"",
    "\"access_token\":\"",
    "\"refresh_token\":\"",
    "\"client_secret\":\"",
];

// Short patterns that also occur inside ordinary words ("task-", "errorcode=").
const WORD_ANCHORED_PATTERNS: [&str; 2] = ["sk-", "code="];

fn is_secret_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':' | '+' | '/' | '=')
}

fn token_end(input: &str, from: usize) -> usize {
    let mut end = from;
    for (i, c) in input[from..].char_indices() {
        if is_secret_char(c) {
            end = from + i + c.len_utf8();
        } else {
            break;
        }
    }
    end
}

fn continues_word(input: &str, at: usize) -> bool {
    input[..at]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
}

fn scrub_after_marker(scrubbed: &mut String, marker: &str) {
    let anchored = WORD_ANCHORED_PATTERNS.contains(&marker);
    let mut search_from = 0;
    while let Some(rel) = scrubbed[search_from..].find(marker) {
        let start = search_from + rel;
        let content_start = start + marker.len();
        if anchored && continues_word(scrubbed, start) {
            search_from = content_start;
            continue;
        }
        let end = token_end(scrubbed, content_start);

        // Skip bare markers without a token value.
        if end == content_start {
            search_from = content_start;
            continue;
        }

        scrubbed.replace_range(start..end, "[REDACTED]");
        search_from = start + "[REDACTED]".len();
    }
}

/// Scrub API keys and bearer tokens from backend error text.
pub fn scrub_secret_patterns(input: &str) -> Cow<'_, str> {
    let needs_scrubbing = PREFIX_PATTERNS
        .iter()
        .chain(MARKER_PATTERNS.iter())
        .any(|pattern| input.contains(pattern));
    if !needs_scrubbing {
        return Cow::Borrowed(input);
    }

    let mut scrubbed = input.to_string();
    for pattern in PREFIX_PATTERNS.iter().chain(MARKER_PATTERNS.iter()) {
        scrub_after_marker(&mut scrubbed, pattern);
    }
    Cow::Owned(scrubbed)
}

/// Sanitize API error text by scrubbing secrets and truncating length.
pub fn sanitize_api_error(input: &str) -> String {
    let scrubbed = scrub_secret_patterns(input);

    if scrubbed.chars().count() <= MAX_API_ERROR_CHARS {
        return scrubbed.into_owned();
    }

    let scrubbed = scrubbed.as_ref();
    let mut end = MAX_API_ERROR_CHARS;
    while end > 0 && !scrubbed.is_char_boundary(end) {
        end -= 1;
    }

    format!("{}...", &scrubbed[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_is_borrowed() {
        let input = "model overloaded, try again";
        assert!(matches!(scrub_secret_patterns(input), Cow::Borrowed(_)));
    }

    #[test]
    fn scrubs_google_api_keys_and_query_keys() {
        let input = "bad key AIzaSyA-1234567890 in ?key=plainsecret123&alt=json";
        let scrubbed = scrub_secret_patterns(input);
        assert!(!scrubbed.contains("AIzaSyA-1234567890"));
        assert!(!scrubbed.contains("plainsecret123"));
        assert_eq!(scrubbed.matches("[REDACTED]").count(), 2);
    }

    #[test]
    fn scrubs_bearer_headers_and_json_tokens() {
        let input = r#"Authorization: Bearer AQVtokenvalue {"access_token":"AQXsecret"}"#;
        let scrubbed = scrub_secret_patterns(input);
        assert!(!scrubbed.contains("AQVtokenvalue"));
        assert!(!scrubbed.contains("AQXsecret"));
    }

    #[test]
    fn short_patterns_only_match_at_word_start() {
        let input = "task-runner failed with errorcode=500";
        assert_eq!(scrub_secret_patterns(input), input);

        let input = "rejected sk-abc123def456 after redirect?code=AQT9xyz";
        let scrubbed = scrub_secret_patterns(input);
        assert!(!scrubbed.contains("sk-abc123def456"));
        assert!(!scrubbed.contains("AQT9xyz"));
        assert_eq!(scrubbed.matches("[REDACTED]").count(), 2);
    }

    #[test]
    fn long_errors_are_truncated_on_char_boundary() {
        let input = "é".repeat(MAX_API_ERROR_CHARS + 10);
        let sanitized = sanitize_api_error(&input);
        assert!(sanitized.ends_with("..."));
        assert!(sanitized.chars().count() <= MAX_API_ERROR_CHARS + 3);
    }
}
