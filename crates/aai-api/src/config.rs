use std::env;
use std::net::SocketAddr;

use axum::http::HeaderValue;

/// Log output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Structured JSON for CloudWatch.
    #[default]
    Json,
    Pretty,
}

/// Service configuration, read once at startup from the environment.
#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    /// Serve locally on this address. Unset means run under the Lambda
    /// runtime.
    pub listen_addr: Option<SocketAddr>,
    /// Single origin allowed by CORS. Unset allows any origin.
    pub allowed_origin: Option<HeaderValue>,
    pub log_format: LogFormat,
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let listen_addr = var("AAI_LISTEN_ADDR")
            .map(|v| {
                v.parse::<SocketAddr>()
                    .map_err(|e| eyre::eyre!("invalid AAI_LISTEN_ADDR '{v}': {e}"))
            })
            .transpose()?;

        let allowed_origin = var("AAI_ALLOWED_ORIGIN")
            .map(|v| {
                HeaderValue::from_str(&v)
                    .map_err(|e| eyre::eyre!("invalid AAI_ALLOWED_ORIGIN '{v}': {e}"))
            })
            .transpose()?;

        let log_format = match var("AAI_LOG_FORMAT").as_deref() {
            None | Some("json") => LogFormat::Json,
            Some("pretty") => LogFormat::Pretty,
            Some(other) => {
                return Err(eyre::eyre!(
                    "invalid AAI_LOG_FORMAT '{other}': expected 'json' or 'pretty'"
                ));
            }
        };

        Ok(Self {
            listen_addr,
            allowed_origin,
            log_format,
        })
    }
}
