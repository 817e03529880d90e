use anyhow::Context;
use chrono::Datelike;
use rmcp::{ServiceExt, transport::stdio};
use tracing::info;

use cncalendar::configuration::Configuration;
use cncalendar::server::HolidayServer;
use cncalendar::tool::adapter::ToolAdapter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(config_path) => Configuration::from_reader(&config_path)
            .with_context(|| format!("loading configuration from {}", config_path))?,
        None => Configuration::new()
    };
    config.init_logging()?;

    let calendar = config.calendar().context("loading holiday calendar")?;
    let this_year = chrono::Local::now().year();
    let (rest_days, makeup_workdays) = calendar.arrangement_count(this_year);
    info!(
        calendar = %calendar.name(),
        start_year = calendar.start_year(),
        end_year = calendar.end_year(),
        this_year,
        rest_days,
        makeup_workdays,
        "holiday calendar ready"
    );

    let server = HolidayServer::new(config.server_name().clone(), ToolAdapter::new(calendar));
    info!(name = %server.name(), "serving MCP tools over stdio");
    let service = server
        .serve(stdio())
        .await
        .context("starting MCP service")?;
    service.waiting().await.context("MCP service terminated")?;
    Ok(())
}
