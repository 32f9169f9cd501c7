use clap::Parser;
use depcopy::utils::{logger, validation::Validate};
use depcopy::{build_plan, CliConfig, FsReplicator, ReportFormat, StageEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting depcopy");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let plan = match build_plan(&config) {
        Ok(plan) => plan,
        Err(e) => {
            tracing::error!("❌ Plan resolution failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let engine = StageEngine::new(FsReplicator);

    match engine.run(&plan).await {
        Ok(summary) => match config.report {
            ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
            ReportFormat::Text => {
                println!("✅ Dependencies staged successfully!");
                for report in &summary.reports {
                    println!(
                        "📁 {}: {} file(s), {} bytes",
                        report.destination.display(),
                        report.files_copied,
                        report.bytes_copied
                    );
                }
            }
        },
        Err(e) => {
            tracing::error!(
                "❌ Staging failed: {} (Category: {:?}, Severity: {:?})",
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

    Ok(())
}
