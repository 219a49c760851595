//! Small presentation helpers.

/// Sanitize article rich HTML before it reaches `set_inner_html`.
/// Content comes from the firm's own editors, but it still transits the
/// API; scripts and event handlers are stripped.
pub fn sanitize_html(html: &str) -> String {
    ammonia::clean(html)
}

/// Date part of an RFC 3339 timestamp, `YYYY-MM-DD`.
pub fn display_date(raw: &str) -> &str {
    raw.split('T').next().unwrap_or(raw)
}

/// Parse a comma-separated tag input into trimmed, deduplicated tags.
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',') {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !tags.iter().any(|existing| existing.eq_ignore_ascii_case(trimmed)) {
            tags.push(trimmed.to_string());
        }
    }
    tags
}
