mod config;
mod error;

use std::process::ExitCode;

use chrono::NaiveDate;
use clap::Parser;
use everland_valet::{EverlandClient, Valet};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::resolve_client_settings;
use crate::error::ToolError;

#[derive(Parser, Debug)]
#[command(name = "valet")]
#[command(about = "Look up Everland valet availability", long_about = None)]
struct Cli {
    /// Single day to look up (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date, conflicts_with = "month")]
    date: Option<NaiveDate>,

    /// Month to list (YYYYMM), defaults to the current month
    #[arg(long, value_parser = parse_month)]
    month: Option<NaiveDate>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

enum Target {
    Month(NaiveDate),
    Day(NaiveDate),
}

impl Cli {
    fn target(&self) -> Target {
        match (self.date, self.month) {
            (Some(date), _) => Target::Day(date),
            (None, Some(month)) => Target::Month(month),
            (None, None) => Target::Month(chrono::Local::now().date_naive()),
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| "expected a date in YYYY-MM-DD format".to_string())
}

fn parse_month(s: &str) -> Result<NaiveDate, String> {
    if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err("expected a month in YYYYMM format".to_string());
    }
    NaiveDate::parse_from_str(&format!("{s}01"), "%Y%m%d")
        .map_err(|_| "expected a month in YYYYMM format".to_string())
}

fn render_month(valets: &[Valet]) -> Result<String, ToolError> {
    Ok(serde_json::to_string_pretty(valets)?)
}

fn render_day(valet: Option<&Valet>) -> Result<Option<String>, ToolError> {
    valet
        .map(serde_json::to_string_pretty)
        .transpose()
        .map_err(ToolError::from)
}

async fn run(target: Target) -> Result<(), ToolError> {
    let settings = resolve_client_settings()?;
    debug!(base_url = %settings.base_url, timeout = ?settings.timeout, "Resolved settings");

    let client = EverlandClient::with_config(settings.base_url, settings.timeout)?;

    let output = match target {
        Target::Month(month) => Some(render_month(&client.fetch_valets(month).await?)?),
        Target::Day(date) => render_day(client.fetch_valet(date).await?.as_ref())?,
    };

    if let Some(output) = output {
        println!("{output}");
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli.target()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:?}", anyhow::Error::from(err));
            ExitCode::FAILURE
        }
    }
}
