use std::collections::HashMap;
use std::time::{Duration, Instant};

use futures::stream::{self, StreamExt};
use tokio::sync::Mutex;
use url::Url;

use crate::models::{ArticleRecord, ResolvedThumbnail};
use crate::proxy::ProxyFetcher;
use crate::resolver::Resolver;

/// Per-host fetch pacing: one fetch, then a fixed pause, per target host.
///
/// Workers reserve the host's next slot before fetching; slots are `pause`
/// apart, and hosts never delay each other.
pub struct HostPacer {
    pause: Duration,
    next_slot: Mutex<HashMap<String, Instant>>,
}

impl HostPacer {
    pub fn new(pause: Duration) -> Self {
        Self {
            pause,
            next_slot: Mutex::new(HashMap::new()),
        }
    }

    /// Reserve the next slot for `host` and sleep until it comes up.
    pub async fn wait_turn(&self, host: &str) {
        let wait = {
            let mut slots = self.next_slot.lock().await;
            let now = Instant::now();
            let slot = slots.get(host).copied().map_or(now, |s| s.max(now));
            slots.insert(host.to_string(), slot + self.pause);
            slot.saturating_duration_since(now)
        };
        if !wait.is_zero() {
            tokio::time::sleep(wait).await;
        }
    }
}

/// Resolve thumbnails for every record that lacks one, over a bounded
/// worker pool. Returns resolved thumbnails keyed by article URL; articles
/// that resolved to nothing are absent from the map.
pub async fn run_batch(
    records: &[ArticleRecord],
    concurrency: usize,
    host_pause: Duration,
) -> HashMap<String, ResolvedThumbnail> {
    let resolver = Resolver::new();
    let fetcher = ProxyFetcher::new();
    let pacer = HostPacer::new(host_pause);

    let outcomes: Vec<(String, Option<ResolvedThumbnail>)> =
        stream::iter(records.iter().filter(|r| r.needs_thumbnail()))
            .map(|record| {
                let resolver = &resolver;
                let fetcher = &fetcher;
                let pacer = &pacer;
                async move {
                    let host = Url::parse(&record.url)
                        .ok()
                        .and_then(|u| u.host_str().map(str::to_string))
                        .unwrap_or_default();
                    pacer.wait_turn(&host).await;

                    let resolved = resolver.resolve_article(fetcher, &record.url).await;
                    (record.url.clone(), resolved)
                }
            })
            .buffer_unordered(concurrency.max(1))
            .collect()
            .await;

    let mut resolved = HashMap::new();
    for (url, outcome) in outcomes {
        match outcome {
            Some(thumb) if thumb.is_verified() => {
                tracing::info!(url = %url, thumbnail = thumb.url(), "Resolved thumbnail");
                resolved.insert(url, thumb);
            }
            Some(thumb) => {
                tracing::warn!(
                    url = %url,
                    thumbnail = thumb.url(),
                    "Recording low-confidence thumbnail (unverified)"
                );
                resolved.insert(url, thumb);
            }
            None => {
                tracing::warn!(url = %url, "No thumbnail resolved");
            }
        }
    }
    resolved
}
