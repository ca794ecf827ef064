use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub concurrency: usize,
    pub host_pause: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Config {
            input_path: env::var("INPUT_FILE")
                .unwrap_or_else(|_| "data/tech_articles.json".to_string())
                .into(),
            output_path: env::var("OUTPUT_FILE")
                .unwrap_or_else(|_| "data/tech_articles_updated.json".to_string())
                .into(),
            concurrency: env::var("CONCURRENCY")
                .unwrap_or_else(|_| "8".to_string())
                .parse()
                .unwrap_or(8)
                .max(1),
            host_pause: Duration::from_millis(
                env::var("HOST_PAUSE_MS")
                    .unwrap_or_else(|_| "1000".to_string())
                    .parse()
                    .unwrap_or(1000),
            ),
        }
    }
}
