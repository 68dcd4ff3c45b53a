use std::{path::PathBuf, str::FromStr};

use entity::prelude::EntityKind;

use crate::{
    error::{config::ConfigError, AppError},
    fake::DEFAULT_MAX_ATTEMPTS,
    service::seed::SeedPlan,
};

/// Prefix of the per-kind count overrides, e.g. `TAPP_COUNT_POSITIONS`.
const COUNT_PREFIX: &str = "TAPP_COUNT_";

pub struct Config {
    /// Seed for a reproducible run; a fresh OS seed when unset.
    pub seed: Option<u64>,
    /// Year of the first session; the current year when unset.
    pub start_year: Option<i32>,
    pub max_attempts: usize,

    /// Directory of `.html` offer templates; the builtin list when unset.
    pub template_dir: Option<PathBuf>,
    /// Payload file; stdout when unset.
    pub output: Option<PathBuf>,

    pub plan: SeedPlan,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from a variable lookup.
    ///
    /// Unset variables fall back to their defaults; set but unparseable ones
    /// are rejected.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let mut plan = SeedPlan::default();
        for kind in EntityKind::ALL {
            let name = count_var(kind);
            if let Some(count) = parse(&lookup, &name)? {
                plan.set(kind, count);
            }
        }

        Ok(Self {
            seed: parse(&lookup, "TAPP_SEED")?,
            start_year: parse(&lookup, "TAPP_START_YEAR")?,
            max_attempts: parse(&lookup, "TAPP_MAX_ATTEMPTS")?.unwrap_or(DEFAULT_MAX_ATTEMPTS),
            template_dir: lookup("TAPP_TEMPLATE_DIR").map(PathBuf::from),
            output: lookup("TAPP_OUTPUT").map(PathBuf::from),
            plan,
        })
    }
}

/// Name of the count override for `kind`.
fn count_var(kind: EntityKind) -> String {
    format!("{}{}", COUNT_PREFIX, kind.as_str().to_uppercase())
}

fn parse<L, T>(lookup: &L, name: &str) -> Result<Option<T>, ConfigError>
where
    L: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = lookup(name) else {
        return Ok(None);
    };

    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            reason: e.to_string(),
        })
}
