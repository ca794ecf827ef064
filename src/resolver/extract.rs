/// Characters that end a URL embedded in decoded meta content.
const DELIMITERS: [char; 6] = ['"', '\'', ' ', ')', ',', '\n'];

/// Extract the first absolute http(s) URL from free text.
///
/// Deliberately naive: find `https://` (preferred) or `http://` and cut at
/// the first delimiter after it. URLs that legitimately contain a delimiter
/// are an accepted false negative. Returns `None` when neither scheme
/// occurs.
pub fn extract_first_url(s: &str) -> Option<&str> {
    let start = ["https://", "http://"]
        .iter()
        .find_map(|scheme| s.find(scheme))?;

    let tail = &s[start..];
    let mut end = tail.len();
    for d in DELIMITERS {
        if let Some(i) = tail.find(d) {
            end = end.min(i);
        }
    }
    // Escaped newlines survive decoding as a literal backslash-n pair.
    if let Some(i) = tail.find("\\n") {
        end = end.min(i);
    }

    Some(&tail[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_scheme_yields_none() {
        assert_eq!(extract_first_url("no urls in here"), None);
        assert_eq!(extract_first_url(""), None);
        assert_eq!(extract_first_url("ftp://example.com/file"), None);
    }

    #[test]
    fn extracts_to_end_of_string() {
        assert_eq!(
            extract_first_url("image at https://example.com/a.png"),
            Some("https://example.com/a.png")
        );
    }

    #[test]
    fn truncates_at_first_delimiter() {
        assert_eq!(
            extract_first_url(r#"url("https://example.com/a.png") no-repeat"#),
            Some("https://example.com/a.png")
        );
        assert_eq!(
            extract_first_url("https://example.com/a.png, https://example.com/b.png"),
            Some("https://example.com/a.png")
        );
    }

    #[test]
    fn truncates_at_literal_backslash_n() {
        assert_eq!(
            extract_first_url("https://example.com/a.png\\nmore text"),
            Some("https://example.com/a.png")
        );
    }

    #[test]
    fn https_wins_over_earlier_http() {
        assert_eq!(
            extract_first_url("http://old.example.com and https://new.example.com"),
            Some("https://new.example.com")
        );
    }

    #[test]
    fn falls_back_to_http() {
        assert_eq!(
            extract_first_url("see http://example.com/a.png here"),
            Some("http://example.com/a.png")
        );
    }
}
