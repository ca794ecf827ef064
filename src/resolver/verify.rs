use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, RANGE, REFERER};
use reqwest::Client;

pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Best-effort check that `url` serves image content.
///
/// HEAD first; if that fails, returns a non-success status, or reports a
/// non-image content type, retry as a one-byte ranged GET. Acceptance is the
/// same at both stages: success status and a `Content-Type` starting with
/// `image/`. Network failures are `false`, never errors — this is a
/// heuristic, not a validation.
pub async fn is_image_accessible(client: &Client, url: &str, referer: Option<&str>) -> bool {
    let mut head = client.head(url).timeout(PROBE_TIMEOUT);
    if let Some(r) = referer {
        head = head.header(REFERER, r);
    }

    if let Ok(response) = head.send().await {
        if response.status().is_success() && is_image_content_type(&response) {
            return true;
        }
    }

    // Some hosts reject HEAD or omit its Content-Type; ask for one byte.
    let mut get = client
        .get(url)
        .timeout(PROBE_TIMEOUT)
        .header(RANGE, "bytes=0-0");
    if let Some(r) = referer {
        get = get.header(REFERER, r);
    }

    match get.send().await {
        Ok(response) => response.status().is_success() && is_image_content_type(&response),
        Err(_) => false,
    }
}

fn is_image_content_type(response: &reqwest::Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.starts_with("image/"))
        .unwrap_or(false)
}
