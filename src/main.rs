use clap::Parser;
use flight_path::domain::ports::ConfigProvider;
use flight_path::utils::error::FlightError;
use flight_path::utils::logger;
use flight_path::utils::validation::Validate;
use flight_path::{server, CliConfig, EffectiveConfig, TomlConfig};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();
    let config_path = cli.config.clone();

    // 載入 TOML 配置 (若有指定)
    let file_config = match &config_path {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(e.exit_code());
            }
        },
        None => None,
    };

    let config = EffectiveConfig::from_sources(cli, file_config);

    // 初始化日誌
    logger::init_logger(config.verbose, config.log_level.as_deref(), config.log_format);

    tracing::info!("🚀 Starting flight-path server");
    if let Some(path) = &config_path {
        tracing::info!("📁 Using configuration from: {}", path);
    }
    tracing::debug!("Effective config: {:?}", config);

    if let Err(e) = run(&config).await {
        tracing::error!(
            "❌ Server failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}

async fn run(config: &EffectiveConfig) -> Result<(), FlightError> {
    // 驗證配置
    config.validate()?;
    tracing::info!(
        "✅ Configuration validated (timeout: {:?}, body limit: {} bytes)",
        config.request_timeout(),
        config.max_body_bytes()
    );

    server::serve(config).await
}
