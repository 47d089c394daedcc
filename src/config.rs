use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Anything shorter than this is a placeholder or a truncated paste, not a
/// real Google API key.
const MIN_API_KEY_LEN: usize = 20;

const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";
const DEFAULT_BATCH_SIZE: usize = 25;
const DEFAULT_DATASET_PATH: &str = "nutrients_csvfile.csv";
const DEFAULT_OUTPUT_PATH: &str = "advice_results.csv";
const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(2);
const DEFAULT_COOLDOWN: Duration = Duration::from_secs(1);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GOOGLE_API_KEY missing. Set it in the environment or .env file")]
    MissingApiKey,

    #[error("GOOGLE_API_KEY looks invalid ({0} chars, expected at least 20)")]
    ApiKeyTooShort(usize),

    #[error("BATCH_SIZE must be a positive integer, got '{0}'")]
    InvalidBatchSize(String),
}

/// Runtime configuration, built once at startup and passed explicitly to
/// the services that need it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub model: String,
    pub batch_size: usize,
    pub dataset_path: PathBuf,
    pub output_path: PathBuf,
    pub max_attempts: u32,
    pub retry_delay: Duration,
    pub cooldown: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("GOOGLE_API_KEY").map_err(|_| ConfigError::MissingApiKey)?;
        validate_api_key(&api_key)?;

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let batch_size = match env::var("BATCH_SIZE") {
            Ok(raw) => parse_batch_size(&raw)?,
            Err(_) => DEFAULT_BATCH_SIZE,
        };

        let dataset_path = env::var("DATASET_PATH")
            .unwrap_or_else(|_| DEFAULT_DATASET_PATH.to_string())
            .into();
        let output_path = env::var("OUTPUT_PATH")
            .unwrap_or_else(|_| DEFAULT_OUTPUT_PATH.to_string())
            .into();

        Ok(Self {
            api_key,
            model,
            batch_size,
            dataset_path,
            output_path,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay: DEFAULT_RETRY_DELAY,
            cooldown: DEFAULT_COOLDOWN,
        })
    }
}

fn validate_api_key(key: &str) -> Result<(), ConfigError> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::MissingApiKey);
    }
    if trimmed.len() < MIN_API_KEY_LEN {
        return Err(ConfigError::ApiKeyTooShort(trimmed.len()));
    }
    Ok(())
}

fn parse_batch_size(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ConfigError::InvalidBatchSize(raw.to_string())),
    }
}
