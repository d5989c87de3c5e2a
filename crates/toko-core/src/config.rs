use thiserror::Error;

/// Related products shown on a product page when `TOKO_RELATED_LIMIT` is
/// not set.
pub const DEFAULT_RELATED_LIMIT: usize = 4;

/// Currency prefix for display prices when `TOKO_CURRENCY_PREFIX` is not
/// set.
pub const DEFAULT_CURRENCY_PREFIX: &str = "Rp";

/// Storefront tuning knobs read from the environment.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Number of related products rendered on a product page.
    pub related_limit: usize,
    /// Currency prefix for display prices, e.g. `"Rp"`.
    pub currency_prefix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            related_limit: DEFAULT_RELATED_LIMIT,
            currency_prefix: DEFAULT_CURRENCY_PREFIX.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("config validation failed: {0}")]
    Validation(String),
}

/// Load store configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env
/// vars. Every variable is optional; absent ones fall back to the
/// `DEFAULT_*` constants above.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable fails to parse or validate.
pub fn load_store_config() -> Result<StoreConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_store_config_from_env()
}

/// Load store configuration from environment variables already in the
/// process.
///
/// Unlike [`load_store_config`], this does NOT load `.env` files — useful
/// for testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable fails to parse or validate.
pub fn load_store_config_from_env() -> Result<StoreConfig, ConfigError> {
    build_store_config(|key| std::env::var(key))
}

/// Build store configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_store_config<F>(lookup: F) -> Result<StoreConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let related_limit = match lookup("TOKO_RELATED_LIMIT") {
        Ok(raw) => raw
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: "TOKO_RELATED_LIMIT".to_string(),
                reason: e.to_string(),
            })?,
        Err(_) => DEFAULT_RELATED_LIMIT,
    };

    if related_limit == 0 {
        return Err(ConfigError::Validation(
            "TOKO_RELATED_LIMIT must be at least 1".to_string(),
        ));
    }

    let currency_prefix = lookup("TOKO_CURRENCY_PREFIX")
        .unwrap_or_else(|_| DEFAULT_CURRENCY_PREFIX.to_string());

    if currency_prefix.trim().is_empty() {
        return Err(ConfigError::Validation(
            "TOKO_CURRENCY_PREFIX must be non-empty".to_string(),
        ));
    }

    Ok(StoreConfig {
        related_limit,
        currency_prefix,
    })
}
