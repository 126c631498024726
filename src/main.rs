use anyhow::Context;
use clap::Parser;
use std::io::Write;
use taxi_park::utils::error::ErrorSeverity;
use taxi_park::utils::{logger, validation::Validate};
use taxi_park::{load_park, CliConfig, ParkReport};

fn run(cli: &CliConfig) -> taxi_park::Result<String> {
    let config = cli.report_config()?;
    config.validate()?;

    let park = load_park(&cli.park)?;
    if cli.validate {
        park.validate()?;
        tracing::info!("✅ Park data validated");
    }

    let report = ParkReport::generate(&park, &config);
    report.render(&config)
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting taxi-park report");
    tracing::debug!("CLI config: {:?}", cli);

    match run(&cli) {
        Ok(output) => {
            std::io::stdout()
                .write_all(output.as_bytes())
                .context("failed to write report to stdout")?;
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Report failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2, // park data rejected
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }
}
