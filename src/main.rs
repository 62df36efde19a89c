use clap::Parser;
use launch_dash::config::toml_config::{LogFormat, TomlConfig};
use launch_dash::core::ConfigProvider;
use launch_dash::utils::monitor::SystemMonitor;
use launch_dash::utils::{logger, validation::Validate};
use launch_dash::{server, CliConfig, CsvFileSource, DashError, DashboardEngine};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 有設定檔時以設定檔為準，否則使用命令列參數
    let file_config = match cli.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file: {}", e.user_friendly_message());
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    match file_config.as_ref().map(|c| c.log_format()) {
        Some(LogFormat::Json) => logger::init_json_logger(cli.verbose),
        _ => logger::init_cli_logger(cli.verbose),
    }

    tracing::info!("Starting launch-dash");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match &file_config {
        Some(config) => {
            tracing::info!("📁 Using configuration from {}", cli.config.as_deref().unwrap_or_default());
            run(config, &cli).await
        }
        None => run(&cli, &cli).await,
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Dashboard failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(e.exit_code());
    }
}

async fn run<C: ConfigProvider + Validate>(config: &C, cli: &CliConfig) -> Result<(), DashError> {
    config.validate()?;
    let addr = launch_dash::utils::validation::validate_bind_address("bind_address", config.bind_address())?;

    let monitor = SystemMonitor::new(cli.monitor || config.monitor_enabled());
    if monitor.is_enabled() {
        tracing::info!("🔍 System monitoring enabled");
    }

    let source = CsvFileSource::new(config.data_path());
    let engine = DashboardEngine::load_with_monitoring(&source, config, &monitor).await?;

    if cli.dry_run {
        let summary = engine.summary();
        println!("✅ Loaded {} launch records", summary.records);
        println!("🛰️  Sites: {}", summary.sites.join(", "));
        println!("🎯 Successful launches: {}", summary.successes);
        if let (Some(lo), Some(hi)) = (summary.min_payload_kg, summary.max_payload_kg) {
            println!("📦 Payload range: {} - {} kg", lo, hi);
        }
        return Ok(());
    }

    server::serve(engine, addr).await
}
