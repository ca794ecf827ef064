use std::collections::HashMap;

use tracing::info;
use tracing_subscriber::EnvFilter;

use thumbgrab::config::Config;
use thumbgrab::models::ResolvedThumbnail;
use thumbgrab::{dataset, worker};

/// Batch tallies: (verified, low-confidence, unresolved). Records sharing a
/// URL can make the resolved map apply more broadly than the pending count,
/// so the unresolved tally saturates instead of underflowing.
fn summarize(
    pending: usize,
    resolved: &HashMap<String, ResolvedThumbnail>,
) -> (usize, usize, usize) {
    let verified = resolved.values().filter(|t| t.is_verified()).count();
    let low_confidence = resolved.len() - verified;
    let unresolved = pending.saturating_sub(resolved.len());
    (verified, low_confidence, unresolved)
}

#[tokio::main]
async fn main() {
    // Initialize tracing — JSON in production, human-readable in dev.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "thumbgrab=info,reqwest=warn".parse().unwrap());

    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("🚀 Thumbgrab starting...");

    let config = Config::from_env();
    info!(
        input = %config.input_path.display(),
        output = %config.output_path.display(),
        concurrency = config.concurrency,
        "📝 Configuration loaded"
    );

    let mut records = dataset::load(&config.input_path)
        .await
        .expect("Failed to load article dataset");
    let pending = records.iter().filter(|r| r.needs_thumbnail()).count();
    info!(
        total = records.len(),
        pending, "📚 Dataset loaded"
    );

    let resolved = worker::run_batch(&records, config.concurrency, config.host_pause).await;

    for record in &mut records {
        if let Some(thumb) = resolved.get(&record.url) {
            record.thumbnails = Some(thumb.url().to_string());
        }
    }

    let (verified, low_confidence, unresolved) = summarize(pending, &resolved);
    info!(verified, low_confidence, unresolved, "🏁 Resolution finished");

    dataset::save(&config.output_path, &records)
        .await
        .expect("Failed to save updated dataset");
    info!("✅ Updated dataset written to {}", config.output_path.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_splits_verified_and_low_confidence() {
        let mut resolved = HashMap::new();
        resolved.insert(
            "https://example.com/a".to_string(),
            ResolvedThumbnail::Verified("https://cdn.example.com/a.png".to_string()),
        );
        resolved.insert(
            "https://example.com/b".to_string(),
            ResolvedThumbnail::LowConfidence("/assets/b.png".to_string()),
        );

        assert_eq!(summarize(3, &resolved), (1, 1, 1));
    }

    #[test]
    fn summarize_never_underflows_on_duplicate_urls() {
        // Duplicate dataset URLs can resolve more entries than were pending.
        let mut resolved = HashMap::new();
        resolved.insert(
            "https://example.com/a".to_string(),
            ResolvedThumbnail::Verified("https://cdn.example.com/a.png".to_string()),
        );
        resolved.insert(
            "https://example.com/b".to_string(),
            ResolvedThumbnail::Verified("https://cdn.example.com/b.png".to_string()),
        );

        assert_eq!(summarize(1, &resolved), (2, 0, 0));
    }
}
