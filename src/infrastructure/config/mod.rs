use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub aws_region: String,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Conversion pipeline
    pub chunk_size: usize,
    pub over_length_threshold: usize,
    pub max_text_chars: usize,
    pub synthesis_concurrency: usize,
    // Summarizer
    pub summarizer_model: String,
    // History
    pub history_path: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "eu-west-1".to_string()),
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
            chunk_size: env::var("CHUNK_SIZE")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()?,
            over_length_threshold: env::var("OVER_LENGTH_THRESHOLD")
                .unwrap_or_else(|_| "2000".to_string())
                .parse()?,
            max_text_chars: env::var("MAX_TEXT_CHARS")
                .unwrap_or_else(|_| "50000".to_string())
                .parse()?,
            synthesis_concurrency: env::var("SYNTHESIS_CONCURRENCY")
                .unwrap_or_else(|_| "3".to_string())
                .parse()?,
            summarizer_model: env::var("SUMMARIZER_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            history_path: env::var("HISTORY_PATH").unwrap_or_else(|_| "history.json".to_string()),
        };

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.chunk_size == 0 {
            return Err("CHUNK_SIZE must be greater than zero".into());
        }
        if self.synthesis_concurrency == 0 {
            return Err("SYNTHESIS_CONCURRENCY must be greater than zero".into());
        }
        if self.over_length_threshold > self.max_text_chars {
            return Err("OVER_LENGTH_THRESHOLD cannot exceed MAX_TEXT_CHARS".into());
        }
        Ok(())
    }
}
