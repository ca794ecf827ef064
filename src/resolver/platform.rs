use url::Url;

/// Host-gated unwrapping rules for publishing platforms that wrap the
/// original asset URL inside a dynamic-image endpoint.
///
/// Selection is by host predicate in fixed priority order (dev.to → Medium
/// → Substack, first match wins); the predicates are disjoint in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformRule {
    DevTo,
    Medium,
    Substack,
}

impl PlatformRule {
    /// Pick the rule for a candidate host, if any.
    pub fn for_host(host: &str) -> Option<Self> {
        if host.ends_with("dev.to") {
            Some(PlatformRule::DevTo)
        } else if host.contains("miro.medium.com") || host.contains("medium.com") {
            Some(PlatformRule::Medium)
        } else if host.contains("substack") || host.contains("substackcdn.com") {
            Some(PlatformRule::Substack)
        } else {
            None
        }
    }

    /// Recover the platform's original asset URL from its wrapper form.
    /// Absence means "no unwrap available"; rules never error.
    pub fn unwrap(&self, candidate: &str) -> Option<String> {
        let url = Url::parse(candidate).ok()?;
        let path = url.path();

        match self {
            // dev.to serves og:images from /dynamic/image/<transforms>/<double-encoded original>
            PlatformRule::DevTo => {
                if !path.contains("/dynamic/image") {
                    return None;
                }
                let last = last_segment(path)?;
                let once = single_decode(last);
                Some(single_decode(&once))
            }
            // Medium image paths (sizing prefixes included) are served
            // directly by the canonical CDN host.
            PlatformRule::Medium => {
                Some(format!("https://miro.medium.com{}", single_decode(path)))
            }
            // Substack image-fetch paths end in the encoded original URL --
            // or in a plain filename, which is not unwrappable.
            PlatformRule::Substack => {
                let decoded = single_decode(last_segment(path)?);
                decoded.starts_with("http").then_some(decoded)
            }
        }
    }
}

fn last_segment(path: &str) -> Option<&str> {
    path.rsplit('/').next().filter(|s| !s.is_empty())
}

/// One tolerant decode pass, shared by the rules. The nested decoder's
/// marker gate does not apply here; the rules know their segment is encoded.
fn single_decode(s: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(s.as_bytes())).into_owned()
}

/// Apply the highest-priority matching rule to a candidate URL.
pub fn unwrap_candidate(candidate: &str) -> Option<String> {
    let url = Url::parse(candidate).ok()?;
    let rule = PlatformRule::for_host(url.host_str()?)?;
    rule.unwrap(candidate)
}
