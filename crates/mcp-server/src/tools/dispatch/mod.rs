//! MCP tool dispatch for Drift Navigator.

use super::catalog;
use super::schemas::capabilities::CapabilitiesRequest;
use super::schemas::lookup::LookupRequest;
use super::schemas::route::RouteRequest;
use super::schemas::sequence::SequenceRequest;
use drift_router::profile::profile_path_from_env;
use drift_router::{IntentRouter, RouterProfile};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use std::sync::Arc;

mod router;

/// Drift Navigator MCP Service
#[derive(Clone)]
pub struct DriftNavigatorService {
    /// Keyword router (builtin rules, optionally layered with a profile)
    router: Arc<IntentRouter>,
    /// Tool router
    tool_router: ToolRouter<Self>,
}

impl DriftNavigatorService {
    pub fn new() -> Self {
        Self::with_router(load_router_from_env())
    }

    pub(crate) fn with_router(router: IntentRouter) -> Self {
        Self {
            router: Arc::new(router),
            tool_router: Self::tool_router(),
        }
    }

    pub(crate) fn router(&self) -> &IntentRouter {
        &self.router
    }
}

impl Default for DriftNavigatorService {
    fn default() -> Self {
        Self::new()
    }
}

/// Builtin router, layered with `DRIFT_ROUTER_PROFILE` when it points at a valid profile.
///
/// A broken profile never keeps the server from starting: it is logged and ignored.
fn load_router_from_env() -> IntentRouter {
    let Some(path) = profile_path_from_env() else {
        return IntentRouter::builtin().clone();
    };

    match RouterProfile::from_file(&path) {
        Ok(profile) => {
            log::info!(
                "Using router profile '{}' from {}",
                profile.name(),
                path.display()
            );
            IntentRouter::from_profile(&profile)
        }
        Err(err) => {
            log::warn!(
                "Failed to load router profile from {}: {err:#}; falling back to builtin rules",
                path.display()
            );
            IntentRouter::builtin().clone()
        }
    }
}

#[tool_router]
impl DriftNavigatorService {
    /// Navigation guide for agents.
    #[tool(
        description = "Return the drift navigation guide: decision tree (category → tool sequence), surgical lookups, common mistakes, tool layers and quick start. Call once per session."
    )]
    pub async fn drift_capabilities(
        &self,
        Parameters(request): Parameters<CapabilitiesRequest>,
    ) -> Result<CallToolResult, McpError> {
        router::capabilities::capabilities(self, request).await
    }

    /// Classify a request and recommend a tool sequence.
    #[tool(
        description = "Classify a task description into a category (first matching keyword wins) and return the ordered drift tools to call. Unrecognized requests fall back to drift_status."
    )]
    pub async fn drift_route(
        &self,
        Parameters(request): Parameters<RouteRequest>,
    ) -> Result<CallToolResult, McpError> {
        router::route::route(self, request).await
    }

    /// Tool sequence for a category tag.
    #[tool(
        description = "Return the ordered tool sequence for a category tag (e.g. 'refactor', 'security-review'). Unknown tags return an error listing the valid ones."
    )]
    pub async fn drift_sequence(
        &self,
        Parameters(request): Parameters<SequenceRequest>,
    ) -> Result<CallToolResult, McpError> {
        router::sequence::sequence(self, request).await
    }

    /// Surgical lookup for a single-fact question.
    #[tool(
        description = "Answer a single-fact question (callers, signature, type, imports, ...) with one surgical drift tool and example arguments."
    )]
    pub async fn drift_lookup(
        &self,
        Parameters(request): Parameters<LookupRequest>,
    ) -> Result<CallToolResult, McpError> {
        router::lookup::lookup(self, request).await
    }
}

#[tool_handler]
impl ServerHandler for DriftNavigatorService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(catalog::tool_instructions()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}
