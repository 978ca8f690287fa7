pub mod storage;

use crate::domain::model::ElectionType;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};
use clap::Parser;

pub const DEFAULT_BASE_URL: &str = "https://valgresultat.no/api/";
pub const BASE_URL_ENV: &str = "VALGRESULTAT_BASE";

const MIN_INTERVAL_SECONDS: u64 = 30;

#[derive(Debug, Clone, Parser)]
#[command(name = "valghenter")]
#[command(about = "Henter norske valgresultater per kommune og skriver CSV")]
pub struct CliConfig {
    /// Election year
    #[arg(long, default_value = "2021", value_parser = ["2021", "2025"])]
    pub year: String,

    /// Election type: st (storting), fy (fylkesting), kv (kommunestyre)
    #[arg(long, default_value = "st", value_parser = parse_valgtype)]
    pub valgtype: ElectionType,

    /// Polling interval in minutes, reserved for a future refresh loop
    #[arg(long, default_value = "2.0")]
    pub interval_min: f64,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Overrides the VALGRESULTAT_BASE env var and the built-in default
    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

fn parse_valgtype(s: &str) -> std::result::Result<ElectionType, String> {
    ElectionType::from_code(s).ok_or_else(|| "expected one of: st, fy, kv".to_string())
}

impl CliConfig {
    /// Interval in whole seconds, floored at 30. Parsed and clamped but not
    /// yet driving any timer.
    pub fn effective_interval_secs(&self) -> u64 {
        ((self.interval_min * 60.0) as u64).max(MIN_INTERVAL_SECONDS)
    }
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.clone(),
            None => std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn year(&self) -> &str {
        &self.year
    }

    fn valgtype(&self) -> ElectionType {
        self.valgtype
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url())?;
        validate_path("output_path", &self.output_path)?;
        validate_range("interval_min", self.interval_min, 0.5, 60.0)?;
        Ok(())
    }
}
