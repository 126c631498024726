pub mod toml_config;

pub use toml_config::ReportConfig;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "taxi-park")]
#[command(about = "Answer analytical questions about a taxi park")]
pub struct CliConfig {
    /// Path to the JSON park file
    #[arg(long)]
    pub park: PathBuf,

    /// Path to a TOML report configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override report.min_trips from the configuration
    #[arg(long)]
    pub min_trips: Option<u32>,

    /// Override output.format (text, json, csv)
    #[arg(long)]
    pub format: Option<String>,

    /// Reject parks whose trips reference unknown drivers or passengers
    #[arg(long)]
    pub validate: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the report configuration (or defaults) and applies the
    /// command-line overrides on top.
    pub fn report_config(&self) -> crate::Result<ReportConfig> {
        let mut config = match &self.config {
            Some(path) => ReportConfig::from_file(path)?,
            None => ReportConfig::default(),
        };

        if let Some(min_trips) = self.min_trips {
            config.report.min_trips = min_trips;
            tracing::info!("🔧 min_trips overridden to: {}", min_trips);
        }
        if let Some(format) = &self.format {
            config.output.format = format.clone();
            tracing::info!("🔧 Output format overridden to: {}", format);
        }

        Ok(config)
    }
}
