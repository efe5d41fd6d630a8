use crate::{ConfigError, FromEnv, env_optional};

/// Cross-origin policy input: the single frontend origin allowed to call the API.
///
/// Read from `FRONTEND_URL`. When it is unset no cross-origin request is allowed,
/// same-origin and non-browser clients are unaffected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origin: Option<String>,
}

impl CorsConfig {
    pub fn allow(origin: impl Into<String>) -> Self {
        Self {
            allowed_origin: Some(origin.into()),
        }
    }
}

impl FromEnv for CorsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let allowed_origin = env_optional("FRONTEND_URL")
            .map(|origin| origin.trim().trim_end_matches('/').to_string());

        if let Some(origin) = &allowed_origin {
            if !(origin.starts_with("http://") || origin.starts_with("https://")) {
                return Err(ConfigError::ParseError {
                    key: "FRONTEND_URL".to_string(),
                    details: format!("'{}' is not an http(s) origin", origin),
                });
            }
        }

        Ok(Self { allowed_origin })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_config_unset() {
        temp_env::with_var_unset("FRONTEND_URL", || {
            assert_eq!(CorsConfig::from_env().unwrap(), CorsConfig::default());
        });
    }

    #[test]
    fn test_cors_config_strips_trailing_slash() {
        temp_env::with_var("FRONTEND_URL", Some("http://localhost:5173/"), || {
            let config = CorsConfig::from_env().unwrap();
            assert_eq!(config.allowed_origin.as_deref(), Some("http://localhost:5173"));
        });
    }

    #[test]
    fn test_cors_config_rejects_non_http_origin() {
        temp_env::with_var("FRONTEND_URL", Some("localhost:5173"), || {
            let err = CorsConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("FRONTEND_URL"));
        });
    }
}
