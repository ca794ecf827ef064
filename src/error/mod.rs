use thiserror::Error;

/// Errors of the outer batch job (dataset I/O). These are fatal for the run;
/// nothing inside the resolution pipeline produces one.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset parse error: {0}")]
    Dataset(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;

/// Failure of a single proxy attempt for one article.
///
/// The original script swallowed these in a bare `try/except continue`; here
/// each attempt returns a `Result` so the rotation loop can log the cause
/// before moving to the next proxy. None of these abort the batch.
#[derive(Error, Debug)]
pub enum AttemptError {
    #[error("page fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("proxy returned HTTP {0}")]
    BadStatus(reqwest::StatusCode),

    #[error("page has no image meta tag")]
    NoMetaImage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempt_error_messages_name_the_cause() {
        assert_eq!(
            AttemptError::NoMetaImage.to_string(),
            "page has no image meta tag"
        );
        assert_eq!(
            AttemptError::BadStatus(reqwest::StatusCode::FORBIDDEN).to_string(),
            "proxy returned HTTP 403 Forbidden"
        );
    }
}
