//! Drift Navigator MCP Server
//!
//! Tells AI agents which drift tools to call, and in what order, for a task described in plain
//! language.
//!
//! ## Tools
//!
//! - `drift_capabilities` - Navigation guide: decision tree, surgical lookups, layers, quick start
//! - `drift_route` - Classify a request and return the recommended tool sequence
//! - `drift_sequence` - Tool sequence for a category tag
//! - `drift_lookup` - Single surgical tool for a one-fact question
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "drift-navigator": {
//!       "command": "drift-mcp"
//!     }
//!   }
//! }
//! ```
//!
//! Set `DRIFT_ROUTER_PROFILE` to a JSON/TOML profile to layer team keywords over the builtin
//! rules.

use anyhow::Result;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

mod tools;

use tools::DriftNavigatorService;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the MCP protocol; logs go to stderr.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    log::info!("Starting Drift Navigator MCP server");

    let service = DriftNavigatorService::new();
    let server = service.serve(stdio()).await?;

    server.waiting().await?;

    log::info!("Drift Navigator MCP server stopped");
    Ok(())
}
