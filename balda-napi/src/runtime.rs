//! BaldaRuntime: singleton via `OnceLock`, lock-free after initialization.
//!
//! Created lazily by the first exported call. Reads `BALDA_LOG` to install
//! the tracing subscriber and `BALDA_CONFIG` for an optional TOML config file.
//! A config error is returned to the caller and initialization is retried on
//! the next call.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use balda_core::telemetry;
use balda_core::BaldaConfig;

use crate::conversions::error_codes;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "BALDA_LOG";
/// Environment variable holding the path of a TOML config file.
pub const CONFIG_ENV: &str = "BALDA_CONFIG";

static RUNTIME: OnceLock<Arc<BaldaRuntime>> = OnceLock::new();

/// Process-wide state shared by all exported functions. Immutable once built.
#[derive(Debug)]
pub struct BaldaRuntime {
    pub config: BaldaConfig,
}

impl BaldaRuntime {
    fn from_env() -> napi::Result<Self> {
        let log_filter = std::env::var(LOG_ENV).ok();
        telemetry::init_tracing(log_filter.as_deref());

        let config_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let config = match &config_path {
            Some(path) => BaldaConfig::load(path).map_err(error_codes::config_error)?,
            None => BaldaConfig::default(),
        };

        tracing::info!(
            config_path = ?config_path,
            overflow = ?config.arithmetic.overflow,
            coercion = ?config.arguments.coercion,
            "balda runtime initialized"
        );

        Ok(Self { config })
    }
}

/// Get the global runtime, building it on first use.
pub fn get() -> napi::Result<Arc<BaldaRuntime>> {
    if let Some(rt) = RUNTIME.get() {
        return Ok(Arc::clone(rt));
    }
    let built = Arc::new(BaldaRuntime::from_env()?);
    Ok(Arc::clone(RUNTIME.get_or_init(|| built)))
}

