use clap::Parser;
use svgmap_etl::utils::{logger, validation::Validate};
use svgmap_etl::{CliConfig, EtlEngine, EtlError, LocalStorage, SvgMapPipeline};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting svgmap-etl CLI");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(e);
    }

    let dry_run = config.dry_run;
    let output_path = config.output_path.clone();

    let pipeline = SvgMapPipeline::new(LocalStorage::current_dir(), config);
    let engine = EtlEngine::new(pipeline);

    if dry_run {
        match engine.dry_run() {
            Ok(count) => println!("Dry run: would extract {} counties to {}", count, output_path),
            Err(e) => fail(e),
        }
        return;
    }

    match engine.run() {
        Ok(summary) => {
            println!(
                "Successfully extracted {} counties to {}",
                summary.region_count, summary.output_path
            );
        }
        Err(e) => fail(e),
    }
}

fn fail(e: EtlError) -> ! {
    tracing::error!(
        "❌ Extraction failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("{}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
