//! MCP Server Entry Point
//!
//! Parses the command line, loads configuration, initializes logging and
//! either serves MCP over stdin/stdout or runs a one-shot connectivity check.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use ai_developer_guide_mcp::core::{Config, McpServer, StdioTransport};
use ai_developer_guide_mcp::domains::guides::GuideClient;

use crate::cli::{BaseUrlArgs, CliArgs, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level, config.logging.with_timestamps);
    config.report_ignored();

    match args.command {
        Some(Command::Check(opts)) => check(config, opts).await,
        Some(Command::Start(opts)) => start(config, opts).await,
        None => start(config, BaseUrlArgs::default()).await,
    }
}

/// Serve MCP on the standard transport until the client disconnects.
async fn start(config: Config, opts: BaseUrlArgs) -> Result<()> {
    let config = config.with_base_url(opts.base_url);
    config.validate()?;

    info!(
        "Starting {} v{} with base URL: {}",
        config.server.name, config.server.version, config.guide.base_url
    );

    let server = McpServer::new(config).context("Failed to start server")?;
    info!("Server initialized");

    StdioTransport::run(server).await?;

    info!("Server shutting down");
    Ok(())
}

/// Probe the API once and print what was found.
async fn check(config: Config, opts: BaseUrlArgs) -> Result<()> {
    let config = config.with_base_url(opts.base_url);
    config.validate()?;

    let client = GuideClient::from_config(&config.guide)?;
    println!("Testing API connectivity to: {}", client.base_url());

    let report = client
        .check_connectivity()
        .await
        .context("API test failed")?;
    println!("✓ Connected to API version {}", report.version);
    println!("✓ API: {}", report.name);
    println!("✓ Found {} available guides", report.guide_count);
    println!("API test successful!");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout belongs to the MCP protocol.
fn init_logging(level: &str, with_timestamps: bool) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
