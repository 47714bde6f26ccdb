//! Runtime configuration utilities for role2vec.

use std::{env, str::FromStr};

use clap::ValueEnum;

use crate::nlp::{annotator::RoleType, training::TrainingParams};

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Words the tokenizer keeps whole (e.g. contractions).
    pub tokenizer_exceptions: Vec<String>,
    /// Role label construction used when `--r2v-type` is absent.
    pub role_type: RoleType,
    /// Weight of the role vector in the syntactic blend.
    pub alpha: f32,
    /// Weight of the distance vector in the syntactic blend.
    pub beta: f32,
    /// Default embedding trainer hyper-parameters.
    pub training: TrainingParams,
}

fn default_role_type() -> RoleType {
    RoleType::Merged
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let tokenizer_exceptions = env::var("ROLE2VEC_TOKENIZER_EXCEPTIONS")
            .map(|raw| split_list(&raw))
            .unwrap_or_default();
        let role_type = env::var("ROLE2VEC_ROLE_TYPE")
            .ok()
            .and_then(|v| <RoleType as ValueEnum>::from_str(&v, true).ok())
            .unwrap_or_else(default_role_type);
        let alpha = parse_var("ROLE2VEC_ALPHA", 0.8);
        let beta = parse_var("ROLE2VEC_BETA", 0.2);

        let defaults = TrainingParams::default();
        let training = TrainingParams {
            vector_size: parse_var("ROLE2VEC_VECTOR_SIZE", defaults.vector_size),
            window: parse_var("ROLE2VEC_WINDOW", defaults.window),
            min_count: parse_var("ROLE2VEC_MIN_COUNT", defaults.min_count),
            epochs: parse_var("ROLE2VEC_EPOCHS", defaults.epochs),
            negative: parse_var("ROLE2VEC_NEGATIVE", defaults.negative),
            seed: parse_var("ROLE2VEC_SEED", defaults.seed),
            ..defaults
        };

        Ok(Self {
            tokenizer_exceptions,
            role_type,
            alpha,
            beta,
            training,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tokenizer_exceptions: Vec::new(),
            role_type: default_role_type(),
            alpha: 0.8,
            beta: 0.2,
            training: TrainingParams::default(),
        }
    }
}

fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
