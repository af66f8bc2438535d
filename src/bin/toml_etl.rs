use anyhow::Context;
use clap::Parser;
use svgmap_etl::core::ConfigProvider;
use svgmap_etl::utils::{logger, validation::Validate};
use svgmap_etl::{EtlEngine, LocalStorage, SvgMapPipeline, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-etl")]
#[command(about = "SVG map extraction with TOML configuration support")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "svgmap-etl.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dry run - show what would be processed without writing
    #[arg(long)]
    dry_run: bool,
}

fn load_config(path: &str) -> anyhow::Result<TomlConfig> {
    let config = TomlConfig::from_file(path)
        .with_context(|| format!("Failed to load config file '{}'", path))?;
    config
        .validate()
        .with_context(|| format!("Invalid configuration in '{}'", path))?;
    Ok(config)
}

fn main() {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入並驗證 TOML 配置
    let config = match load_config(&args.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ {:#}", e);
            eprintln!("Error processing SVG file: {:#}", e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(2);
        }
    };

    display_config_summary(&config, &args);

    let pipeline = SvgMapPipeline::new(LocalStorage::current_dir(), config);
    let engine = EtlEngine::new(pipeline);

    let outcome = if args.dry_run {
        engine.dry_run().map(|count| {
            println!(
                "🔍 Dry run: {} counties would be written to {}",
                count,
                engine.pipeline().config().output_path()
            );
        })
    } else {
        engine.run().map(|summary| {
            println!(
                "Successfully extracted {} counties to {}",
                summary.region_count, summary.output_path
            );
        })
    };

    if let Err(e) = outcome {
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
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Pipeline: {}", config.pipeline_name());
    if let Some(description) = config.pipeline_description() {
        println!("  Description: {}", description);
    }
    println!("  Source: {}", config.input_path());
    println!("  Output: {}", config.output_path());
    println!("  Excluded prefixes: {}", config.exclude_prefixes().join(", "));

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
