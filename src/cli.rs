use clap::{Args, Parser, Subcommand};

/// MCP server for the AI Developer Guide.
#[derive(Parser, Debug)]
#[command(name = "ai-developer-guide-mcp", version, about = "MCP server for the AI Developer Guide")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the MCP server on stdin/stdout
    Start(BaseUrlArgs),

    /// Check API connectivity
    Check(BaseUrlArgs),
}

#[derive(Args, Debug, Default)]
pub struct BaseUrlArgs {
    /// Base URL for the API (default: env AI_DEVELOPER_GUIDE_URL or the public guide)
    #[arg(long)]
    pub base_url: Option<String>,
}
