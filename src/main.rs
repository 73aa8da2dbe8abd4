use cats_and_owners::core::DisplaySummary;
use cats_and_owners::utils::{logger, validation::Validate};
use cats_and_owners::{CatsPipeline, CliConfig, EtlEngine, Result, StdoutSink};
use clap::Parser;

async fn run(cli: &CliConfig) -> Result<DisplaySummary> {
    let config = cli.resolve()?;
    config.validate()?;
    tracing::debug!("Resolved config: {:?}", config);

    let pipeline = CatsPipeline::new(StdoutSink::new(), config)?;
    EtlEngine::new(pipeline).run().await
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting cats-and-owners");

    match run(&cli).await {
        Ok(summary) => {
            tracing::info!(
                "✅ Done: {} cats across {} gender groups",
                summary.cats,
                summary.genders
            );
        }
        Err(e) => {
            tracing::error!("❌ Run failed: {} (Category: {:?})", e, e.category());
            // 錯誤訊息輸出到標準輸出，與報表同一個串流
            println!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}
