#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, ConfigSource, EffectiveConfig};
pub use toml_config::TomlConfig;

use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range, validate_socket_addr};
use std::time::Duration;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;
pub const MIN_BODY_BYTES: usize = 1024;

pub const LOG_FORMATS: &[&str] = &["compact", "json"];
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// 驗證伺服器設定 (位址、逾時、請求大小)
pub(crate) fn validate_server_settings(
    prefix: &str,
    addr: &str,
    request_timeout: Duration,
    max_body_bytes: usize,
) -> Result<()> {
    validate_socket_addr(&format!("{}addr", prefix), addr)?;
    validate_range(
        &format!("{}request_timeout_seconds", prefix),
        request_timeout.as_secs(),
        1,
        MAX_REQUEST_TIMEOUT_SECS,
    )?;
    validate_positive_number(
        &format!("{}max_body_bytes", prefix),
        max_body_bytes,
        MIN_BODY_BYTES,
    )?;
    Ok(())
}
