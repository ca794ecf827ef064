use std::time::Duration;

use rand::seq::SliceRandom;

use crate::error::AttemptError;

/// Known public CORS relay prefixes. Used both to build page-fetch URLs and
/// to recognise proxy wrapping that leaked into decoded meta content.
/// Order matters for the stripper; keep new entries at the end.
pub const PROXY_PREFIXES: &[&str] = &[
    "https://api.allorigins.win/raw?url=",
    "https://cors-anywhere.herokuapp.com/",
    "https://thingproxy.freeboard.io/fetch/",
    "https://api.codetabs.com/v1/proxy?quest=",
    "https://proxy.cors.sh/",
    "https://corsproxy.io/?",
    "https://api.allorigins.dev/raw?url=",
    "https://cors.isomorphic-git.org/get?url=",
    "https://crossorigin.me/",
];

pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
pub const USER_AGENT: &str =
    "Mozilla/5.0 (compatible; ThumbgrabBot/1.0; +https://github.com/thumbgrab)";

/// Strip known proxy prefixes from the start of `s`.
///
/// Each prefix is tested exactly once, in list order, against the current
/// start of the string, so stacked wrapping by different proxies unwraps in
/// one call. Exact and case-sensitive; once nothing matches the function is
/// a no-op.
pub fn strip_proxy_prefixes<'a>(s: &'a str, prefixes: &[&str]) -> &'a str {
    let mut rest = s;
    for prefix in prefixes {
        if let Some(stripped) = rest.strip_prefix(prefix) {
            rest = stripped;
        }
    }
    rest
}

/// Fetches article pages through a CORS proxy.
///
/// Owns the prefix list its rotation draws from; `new` uses the well-known
/// [`PROXY_PREFIXES`], while callers (and tests) can supply their own.
pub struct ProxyFetcher {
    client: reqwest::Client,
    prefixes: Vec<String>,
}

impl ProxyFetcher {
    pub fn new() -> Self {
        Self::with_prefixes(PROXY_PREFIXES.iter().map(|p| p.to_string()).collect())
    }

    pub fn with_prefixes(prefixes: Vec<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();
        Self { client, prefixes }
    }

    /// The prefix list in a fresh random order for one article's rotation.
    pub fn shuffled_prefixes(&self) -> Vec<&str> {
        let mut prefixes: Vec<&str> = self.prefixes.iter().map(String::as_str).collect();
        prefixes.shuffle(&mut rand::thread_rng());
        prefixes
    }

    /// GET `{proxy_prefix}{article_url}` and return the body as text.
    /// A non-success status is an attempt failure, not a silent empty page.
    pub async fn fetch_page(
        &self,
        proxy_prefix: &str,
        article_url: &str,
    ) -> Result<String, AttemptError> {
        let target = format!("{proxy_prefix}{article_url}");
        let response = self
            .client
            .get(&target)
            .timeout(FETCH_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AttemptError::BadStatus(status));
        }

        Ok(response.text().await?)
    }
}

impl Default for ProxyFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_single_matching_prefix() {
        let wrapped = "https://corsproxy.io/?https://example.com/img.png";
        assert_eq!(
            strip_proxy_prefixes(wrapped, PROXY_PREFIXES),
            "https://example.com/img.png"
        );
    }

    #[test]
    fn strips_stacked_prefixes_in_list_order() {
        // allorigins wrapping corsproxy wrapping the asset
        let wrapped =
            "https://api.allorigins.win/raw?url=https://corsproxy.io/?https://example.com/a.png";
        assert_eq!(
            strip_proxy_prefixes(wrapped, PROXY_PREFIXES),
            "https://example.com/a.png"
        );
    }

    #[test]
    fn leaves_unwrapped_urls_alone() {
        let plain = "https://example.com/img.png";
        assert_eq!(strip_proxy_prefixes(plain, PROXY_PREFIXES), plain);
    }

    #[test]
    fn prefix_match_is_anchored_at_start() {
        let embedded = "see https://corsproxy.io/? for details";
        assert_eq!(strip_proxy_prefixes(embedded, PROXY_PREFIXES), embedded);
    }

    #[test]
    fn stripping_is_idempotent_once_nothing_matches() {
        let wrapped = "https://proxy.cors.sh/https://example.com/img.png";
        let once = strip_proxy_prefixes(wrapped, PROXY_PREFIXES);
        assert_eq!(strip_proxy_prefixes(once, PROXY_PREFIXES), once);
    }

    #[test]
    fn shuffle_preserves_the_full_set() {
        let fetcher = ProxyFetcher::new();
        let mut shuffled = fetcher.shuffled_prefixes();
        shuffled.sort_unstable();
        let mut original = PROXY_PREFIXES.to_vec();
        original.sort_unstable();
        assert_eq!(shuffled, original);
    }

    #[test]
    fn custom_prefix_list_replaces_the_default() {
        let fetcher = ProxyFetcher::with_prefixes(vec!["http://127.0.0.1:9/relay?url=".to_string()]);
        assert_eq!(
            fetcher.shuffled_prefixes(),
            vec!["http://127.0.0.1:9/relay?url="]
        );
    }
}
