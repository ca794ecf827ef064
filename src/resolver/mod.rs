pub mod decode;
pub mod extract;
pub mod meta;
pub mod platform;
pub mod verify;

use std::future::Future;

use reqwest::Client;

use crate::error::AttemptError;
use crate::models::ResolvedThumbnail;
use crate::proxy::{self, ProxyFetcher};

/// Sequences the resolution pipeline for one article: fetch through a proxy,
/// read the meta image, decode, strip proxy wrapping, extract a candidate,
/// unwrap platform endpoints, and verify accessibility.
///
/// Stateless across calls; the only shared piece is the probe client.
pub struct Resolver {
    client: Client,
}

impl Resolver {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(proxy::USER_AGENT)
            .build()
            .unwrap_or_default();
        Self { client }
    }

    /// Resolve the thumbnail for one article, rotating through the fetcher's
    /// shuffled prefix list. Each attempt's failure is logged with its
    /// cause; the first attempt to produce a result wins. `None` after
    /// exhaustion.
    pub async fn resolve_article(
        &self,
        fetcher: &ProxyFetcher,
        article_url: &str,
    ) -> Option<ResolvedThumbnail> {
        for prefix in fetcher.shuffled_prefixes() {
            match self.attempt(fetcher, prefix, article_url).await {
                Ok(resolved) => return Some(resolved),
                Err(e) => {
                    tracing::debug!(proxy = prefix, url = article_url, error = %e, "Proxy attempt failed");
                }
            }
        }
        tracing::debug!(url = article_url, "All proxies exhausted");
        None
    }

    async fn attempt(
        &self,
        fetcher: &ProxyFetcher,
        proxy_prefix: &str,
        article_url: &str,
    ) -> Result<ResolvedThumbnail, AttemptError> {
        let html = fetcher.fetch_page(proxy_prefix, article_url).await?;
        let raw = meta::extract_meta_image(&html).ok_or(AttemptError::NoMetaImage)?;
        Ok(self.resolve_meta_content(&raw, article_url).await)
    }

    /// Run the pipeline over one meta-image value. Always yields a result;
    /// the floor is the decoded string as [`ResolvedThumbnail::LowConfidence`].
    pub async fn resolve_meta_content(
        &self,
        raw_content: &str,
        article_url: &str,
    ) -> ResolvedThumbnail {
        let client = &self.client;
        resolve_with_probe(raw_content, |url| async move {
            verify::is_image_accessible(client, &url, Some(article_url)).await
        })
        .await
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Pipeline core with the accessibility probe abstracted out, so the branch
/// ordering (unwrapped asset → plain candidate → protocol-relative →
/// low-confidence floor) is checkable without sockets.
async fn resolve_with_probe<F, Fut>(raw_content: &str, probe: F) -> ResolvedThumbnail
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = bool>,
{
    let decoded = decode::nested_decode(raw_content);
    let stripped = proxy::strip_proxy_prefixes(&decoded, proxy::PROXY_PREFIXES);

    if let Some(candidate) = extract::extract_first_url(stripped) {
        // A platform unwrap that verifies is the best possible answer:
        // it is the original asset, not the wrapper endpoint.
        if let Some(unwrapped) = platform::unwrap_candidate(candidate) {
            if probe(unwrapped.clone()).await {
                return ResolvedThumbnail::Verified(unwrapped);
            }
        }

        if probe(candidate.to_string()).await {
            return ResolvedThumbnail::Verified(candidate.to_string());
        }
    }

    // Protocol-relative reference: inherit https and re-check.
    if stripped.starts_with("//") {
        let absolute = format!("https:{stripped}");
        if probe(absolute.clone()).await {
            return ResolvedThumbnail::Verified(absolute);
        }
    }

    ResolvedThumbnail::LowConfidence(stripped.to_string())
}
