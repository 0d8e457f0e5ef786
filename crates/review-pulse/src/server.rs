//! MCP (Model Context Protocol) server implementation.
//!
//! This module exposes review analytics over the MCP protocol, making them
//! available to AI assistants via stdio transport.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer. It wraps the same core library
//! that the CLI commands use; each `#[tool]` method delegates to
//! `review_pulse_core` and serializes the result as JSON text. The dataset is
//! loaded once at startup and shared read-only across requests.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use review_pulse_core::ingest::Dataset;
use review_pulse_core::review::StoreSelector;
use review_pulse_core::{analytics, extract};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `compute_analytics` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ComputeAnalyticsParams {
    /// Store to analyze: "all" or a numeric store id. Omit for all stores.
    pub store: Option<String>,
}

/// Parameters for the `extract_facets` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ExtractFacetsParams {
    /// Review text to mine for size-fit, colors, fabric quality, and products.
    pub text: String,
}

/// MCP server exposing review analytics to AI assistants.
#[derive(Clone)]
pub struct ProjectServer {
    dataset: Arc<Dataset>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

#[tool_router]
impl ProjectServer {
    /// Create a server over `dataset`.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
            tool_router: Self::tool_router(),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "stores": self.dataset.stores.len(),
            "reviews": self.dataset.reviews.len(),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}\n{} stores, {} reviews loaded",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
                self.dataset.stores.len(),
                self.dataset.reviews.len(),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Compute the analytics report for the loaded dataset.
    #[tool(
        description = "Compute review analytics for one store or all stores: brand health, size-fit distribution, product sentiment, color and fabric mentions, and store/rating demographics."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn compute_analytics(
        &self,
        Parameters(params): Parameters<ComputeAnalyticsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "compute_analytics", store = ?params.store, "executing MCP tool");

        let selector = params
            .store
            .as_deref()
            .map(str::parse::<StoreSelector>)
            .transpose()
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?
            .unwrap_or_default();

        let report = analytics::compute_analytics(
            &self.dataset.reviews,
            &self.dataset.stores,
            selector,
        );

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "compute_analytics",
            total_reviews = report.brand_health.total_reviews,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Run the text extractors over a piece of review text.
    #[tool(
        description = "Extract size-fit, colors, fabric quality, and products mentioned in a piece of review text."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn extract_facets(
        &self,
        Parameters(params): Parameters<ExtractFacetsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "extract_facets", len = params.text.len(), "executing MCP tool");

        let facets = extract::extract_facets(&params.text);

        let json = serde_json::to_string_pretty(&facets)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(tool = "extract_facets", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use compute_analytics for store review summaries and extract_facets to mine a single review's text.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
