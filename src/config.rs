use crate::error::ConfigError;

/// Environment variable holding the provider credential.
pub const API_KEY_VAR: &str = "MORALIS_API_KEY";

/// Demo wallet used when the caller supplies no address.
pub const DEFAULT_ADDRESS: &str = "0xcB1C1FdE09f811B294172696404e88E658659905";

/// Default chain identifier.
pub const DEFAULT_CHAIN: &str = "eth";

/// Runtime configuration sourced from the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
}

impl Config {
    /// Load the provider credential from the environment. Missing or blank
    /// credentials are fatal; no request is attempted without one.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_var(API_KEY_VAR)
    }

    fn from_var(var: &'static str) -> Result<Self, ConfigError> {
        let api_key = std::env::var(var).map_err(|_| ConfigError::MissingApiKey(var))?;
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey(var));
        }
        Ok(Self { api_key })
    }
}
