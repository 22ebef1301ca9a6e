use shared_types::{AppConfig, IntakeConfig};
use std::sync::OnceLock;

static CONFIG: OnceLock<IntakeConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable that overrides `[form] endpoint_url`.
pub const ENDPOINT_ENV: &str = "EARLY_ACCESS_ENDPOINT_URL";

/// Parse the contents of `config.toml`. Unparseable input yields defaults.
pub fn parse_config(contents: &str) -> IntakeConfig {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => config.form.normalized(),
        Err(e) => {
            tracing::warn!(error = %e, path = CONFIG_PATH, "Failed to parse config, using defaults");
            IntakeConfig::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config() -> IntakeConfig {
    let _ = dotenvy::dotenv();

    let config = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse_config(&contents),
        Err(e) => {
            tracing::info!(error = %e, path = CONFIG_PATH, "Config file not found, using defaults");
            IntakeConfig::default()
        }
    };

    match std::env::var(ENDPOINT_ENV) {
        Ok(url) => config.with_endpoint(&url),
        Err(_) => config,
    }
}

// No file system in the browser: the endpoint is fixed at build time.
#[cfg(target_arch = "wasm32")]
fn read_config() -> IntakeConfig {
    let config = IntakeConfig::default();
    match option_env!("EARLY_ACCESS_ENDPOINT_URL") {
        Some(url) => config.with_endpoint(url),
        None => config,
    }
}

/// Load the form config and store it globally. Only the first call reads
/// anything; later calls return the stored value.
pub fn load_config() -> &'static IntakeConfig {
    CONFIG.get_or_init(|| {
        let config = read_config();
        tracing::info!(endpoint = %config.endpoint_url, "Signup endpoint configured");
        config
    })
}
