//! Environment-based configuration with defaults suitable for local runs.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: String,
    pub budget_path: String,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: var_or("TAXLENS_HOST", "127.0.0.1"),
            port: parse_or("TAXLENS_PORT", 8080),
            db_path: var_or("TAXLENS_DB_PATH", "taxlens.db"),
            budget_path: var_or("TAXLENS_BUDGET_PATH", "budget.json"),
            jwt_secret: var_or("TAXLENS_JWT_SECRET", "development-secret"),
            token_ttl_hours: parse_or("TAXLENS_TOKEN_TTL_HOURS", 24),
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display + Copy,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("invalid {key} value '{raw}': {e}, using default {default}");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable name so parallel tests cannot race.

    #[test]
    fn invalid_numeric_values_fall_back_to_default() {
        unsafe { env::set_var("TAXLENS_TEST_BAD_PORT", "not-a-number") };
        assert_eq!(parse_or("TAXLENS_TEST_BAD_PORT", 8080u16), 8080);
        unsafe { env::remove_var("TAXLENS_TEST_BAD_PORT") };
    }

    #[test]
    fn valid_numeric_values_are_parsed() {
        unsafe { env::set_var("TAXLENS_TEST_GOOD_PORT", "9090") };
        assert_eq!(parse_or("TAXLENS_TEST_GOOD_PORT", 8080u16), 9090);
        unsafe { env::remove_var("TAXLENS_TEST_GOOD_PORT") };
    }

    #[test]
    fn missing_keys_use_the_default() {
        assert_eq!(parse_or("TAXLENS_TEST_UNSET_TTL", 24i64), 24);
    }
}
