use super::{
    validate_server_settings, TomlConfig, DEFAULT_ADDR, DEFAULT_MAX_BODY_BYTES,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "flight-path")]
#[command(about = "Resolves unordered flights into a single itinerary over HTTP")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_ADDR)]
    pub addr: String,

    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,

    #[arg(long, default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,

    /// TOML file replacing the server flags above
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            config: None,
            verbose: false,
            json_logs: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn listen_addr(&self) -> &str {
        &self.addr
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn max_body_bytes(&self) -> usize {
        self.max_body_bytes
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_server_settings(
            "",
            &self.addr,
            self.request_timeout(),
            self.max_body_bytes,
        )
    }
}

/// Where the server settings come from.
#[derive(Debug, Clone)]
pub enum ConfigSource {
    Flags(CliConfig),
    File(TomlConfig),
}

/// Settings the server binary runs with after combining flags and file.
///
/// `--config` replaces the server flags entirely. `--json-logs` wins over the
/// file's log format; the log level only comes from the file.
#[derive(Debug, Clone)]
pub struct EffectiveConfig {
    pub source: ConfigSource,
    pub log_format: LogFormat,
    pub log_level: Option<String>,
    pub verbose: bool,
}

impl EffectiveConfig {
    pub fn from_sources(cli: CliConfig, file: Option<TomlConfig>) -> Self {
        let verbose = cli.verbose;
        let json_logs = cli.json_logs;

        match file {
            Some(file) => Self {
                log_format: if json_logs {
                    LogFormat::Json
                } else {
                    file.log_format()
                },
                log_level: file.log_level().map(str::to_string),
                verbose,
                source: ConfigSource::File(file),
            },
            None => Self {
                log_format: if json_logs {
                    LogFormat::Json
                } else {
                    LogFormat::Compact
                },
                log_level: None,
                verbose,
                source: ConfigSource::Flags(cli),
            },
        }
    }

    fn provider(&self) -> &dyn ConfigProvider {
        match &self.source {
            ConfigSource::Flags(cli) => cli,
            ConfigSource::File(file) => file,
        }
    }
}

impl ConfigProvider for EffectiveConfig {
    fn listen_addr(&self) -> &str {
        self.provider().listen_addr()
    }

    fn request_timeout(&self) -> Duration {
        self.provider().request_timeout()
    }

    fn max_body_bytes(&self) -> usize {
        self.provider().max_body_bytes()
    }
}

impl Validate for EffectiveConfig {
    fn validate(&self) -> Result<()> {
        match &self.source {
            ConfigSource::Flags(cli) => cli.validate(),
            ConfigSource::File(file) => file.validate(),
        }
    }
}
