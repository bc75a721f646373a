//! Server configuration from environment variables

use anyhow::Context;
use quiz::QuizConfig;
use std::path::PathBuf;
use std::{env, fmt::Display, str::FromStr};
use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub quiz_data_path: PathBuf,
    /// `None` uses the synonym table built into the quiz crate
    pub synonyms_path: Option<PathBuf>,
    pub quiz: QuizConfig,
    pub static_dir: PathBuf,
    pub frontend_origins: Vec<String>,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let max_attempts: u32 = try_load("QUIZ_MAX_ATTEMPTS", "3")?;
        let quiz = QuizConfig::with_max_attempts(max_attempts)
            .context("QUIZ_MAX_ATTEMPTS must be at least 1")?;

        let origins: String = try_load(
            "FRONTEND_ORIGINS",
            "http://localhost:3000,http://127.0.0.1:3000",
        )?;

        Ok(Self {
            port: try_load("PORT", "3000")?,
            quiz_data_path: try_load("QUIZ_DATA_PATH", "data/quizzes.json")?,
            synonyms_path: env::var("SYNONYMS_PATH").ok().map(PathBuf::from),
            quiz,
            static_dir: try_load("STATIC_DIR", "public")?,
            frontend_origins: split_origins(&origins),
        })
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

fn try_load<T: FromStr>(key: &str, default: &str) -> anyhow::Result<T>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        anyhow::anyhow!("invalid {key} value {raw:?}: {e}")
    })
}
