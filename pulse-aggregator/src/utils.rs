/// Text processing utilities
pub mod text {
    /// Default summary cap, in characters
    pub const SUMMARY_MAX_CHARS: usize = 200;

    /// Marker appended to summaries that were cut
    pub const ELLIPSIS: &str = "...";

    /// Remove anything that looks like a markup tag (`<...>`).
    /// An unterminated `<` and whatever follows it are kept as text.
    pub fn strip_tags(html: &str) -> String {
        let mut text = String::with_capacity(html.len());
        let mut pending = String::new();
        let mut in_tag = false;

        for c in html.chars() {
            match c {
                '<' if !in_tag => {
                    in_tag = true;
                    pending.clear();
                    pending.push(c);
                }
                '>' if in_tag => {
                    in_tag = false;
                    pending.clear();
                }
                _ if in_tag => pending.push(c),
                _ => text.push(c),
            }
        }

        if in_tag {
            text.push_str(&pending);
        }
        text
    }

    /// Collapse runs of whitespace (including newlines) into single spaces and trim.
    pub fn collapse_whitespace(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Cap `text` at `max_chars` characters, appending `...` when it was cut.
    /// Counts chars rather than bytes so multi-byte text is never split.
    pub fn truncate_summary(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
            None => text.to_string(),
        }
    }

    /// Markup-free text: tags removed, entities decoded, whitespace collapsed.
    pub fn plain_text(html: &str) -> String {
        collapse_whitespace(&html_escape::decode_html_entities(&strip_tags(html)))
    }

    /// `None` for missing or whitespace-only values.
    pub fn non_empty(value: Option<&str>) -> Option<&str> {
        value.filter(|v| !v.trim().is_empty())
    }
}

/// Time utilities
pub mod time {
    use chrono::{DateTime, Utc};

    /// Parse an upstream timestamp. Accepts RFC 3339 and RFC 2822 (RSS `pubDate`).
    pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        DateTime::parse_from_rfc3339(raw)
            .or_else(|_| DateTime::parse_from_rfc2822(raw))
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
    }

    /// Parse `raw` if present and valid, otherwise use the current instant.
    pub fn timestamp_or_now(raw: Option<&str>) -> DateTime<Utc> {
        match raw.and_then(parse_timestamp) {
            Some(ts) => ts,
            None => {
                if let Some(bad) = raw.filter(|r| !r.trim().is_empty()) {
                    tracing::debug!("Unparseable timestamp {:?}, using current time", bad);
                }
                Utc::now()
            }
        }
    }
}
