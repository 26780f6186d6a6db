use clap::Parser;
use example_service::utils::logger;
use example_service::{build_http_client, CliConfig, Service, ServiceError};

fn exit_with_config_error(e: ServiceError) -> ! {
    tracing::error!("❌ Configuration failed: {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    // 載入並驗證配置
    let settings = config
        .client_settings()
        .unwrap_or_else(|e| exit_with_config_error(e));

    // 服務只借用客戶端，客戶端須活到程式結束
    let client = if settings.enabled {
        Some(build_http_client(&settings).unwrap_or_else(|e| exit_with_config_error(e)))
    } else {
        None
    };

    let service = Service::new(client.as_ref());
    println!("{}", service.get());

    Ok(())
}
