use clap::Parser;
use gym_pulse::core::pipeline::scrape_category_boxes;
use gym_pulse::utils::{logger, validation::Validate};
use gym_pulse::{CliConfig, EmbedPipeline, SnapshotEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting gym-pulse");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // Page-scrape mode bypasses the embed API entirely
    if let Some(page_url) = config.page_url.clone() {
        let client = reqwest::Client::new();
        match scrape_category_boxes(&client, &page_url).await {
            Ok(boxes) => {
                for text in &boxes {
                    println!("{}", text);
                }
                tracing::info!("✅ Scraped {} category boxes", boxes.len());
            }
            Err(e) => {
                tracing::error!("❌ Page scrape failed: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 建議: {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    // 創建管道並運行
    let pipeline = EmbedPipeline::new(config);
    let engine = SnapshotEngine::new(pipeline);

    match engine.run().await {
        Ok(_) => {
            tracing::info!("✅ Occupancy snapshot fetched successfully!");
        }
        Err(e) => {
            tracing::error!("❌ Snapshot fetch failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
