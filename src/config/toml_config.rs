use crate::utils::error::{Result, TaxiParkError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const OUTPUT_FORMATS: [&str; 3] = ["text", "json", "csv"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ReportConfig {
    #[serde(default)]
    pub report: ReportSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSection {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_min_trips")]
    pub min_trips: u32,
    /// Drivers whose frequent passengers are listed; every driver when unset.
    pub frequent_passengers_of: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default)]
    pub pretty: bool,
}

fn default_name() -> String {
    "taxi-park".to_string()
}

fn default_min_trips() -> u32 {
    1
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            name: default_name(),
            min_trips: default_min_trips(),
            frequent_passengers_of: None,
        }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: default_format(),
            pretty: false,
        }
    }
}

impl ReportConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| TaxiParkError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn min_trips(&self) -> u32 {
        self.report.min_trips
    }

    pub fn format(&self) -> &str {
        &self.output.format
    }
}

/// Replaces `${VAR}` with the value of the environment variable; unknown
/// variables are left untouched.
fn substitute_env_vars(content: &str) -> String {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let re = PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}

impl Validate for ReportConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("report.name", &self.report.name)?;
        validation::validate_one_of("output.format", &self.output.format, &OUTPUT_FORMATS)?;

        if let Some(drivers) = &self.report.frequent_passengers_of {
            for driver in drivers {
                validation::validate_non_empty_string("report.frequent_passengers_of", driver)?;
            }
        }

        Ok(())
    }
}
