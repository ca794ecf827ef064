use std::path::Path;

use crate::error::AppResult;
use crate::models::ArticleRecord;

/// Load the article dataset: a JSON array of records.
pub async fn load(path: &Path) -> AppResult<Vec<ArticleRecord>> {
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}

/// Write the dataset back out, pretty-printed. Record order and unknown
/// fields are preserved by the caller's `ArticleRecord` values.
pub async fn save(path: &Path, records: &[ArticleRecord]) -> AppResult<()> {
    let out = serde_json::to_string_pretty(records)?;
    tokio::fs::write(path, out).await?;
    Ok(())
}
