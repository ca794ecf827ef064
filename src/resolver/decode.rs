/// Upper bound on decode passes. Real-world wrapping observed is at most
/// double encoding; three passes covers it with margin while bounding cost.
const MAX_DECODE_PASSES: usize = 3;

/// Does the string still look like it holds an encoded URL? Encoders emit
/// uppercase hex for the reserved characters we care about.
fn has_encoded_marker(s: &str) -> bool {
    s.contains("%3A") || s.contains("%2F") || s.contains("%3A%2F%2F")
}

/// One tolerant percent-decode pass. Malformed escapes pass through
/// unchanged and invalid UTF-8 is replaced, so this never fails.
fn decode_once(s: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(s.as_bytes())).into_owned()
}

/// Iteratively percent-decode `s` while it still carries encoded-URL
/// markers, up to [`MAX_DECODE_PASSES`] passes. Stops early at a fixed
/// point, so the returned string is idempotent under one more pass (unless
/// the pass budget ran out).
pub fn nested_decode(s: &str) -> String {
    let mut decoded = s.to_string();
    for _ in 0..MAX_DECODE_PASSES {
        if !has_encoded_marker(&decoded) {
            break;
        }
        let next = decode_once(&decoded);
        if next == decoded {
            break;
        }
        decoded = next;
    }
    decoded
}
