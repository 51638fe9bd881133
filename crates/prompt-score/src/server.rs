//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes prompt scoring over stdio so an assistant can rate a student's
//! question before answering it. Each tool delegates to `prompt-score-core`;
//! the server holds only the engine and the input policy built from config.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use prompt_score_core::config::Config;
use prompt_score_core::samples::SAMPLES;
use prompt_score_core::{ConfigResult, InputPolicy, ScoringEngine, validate_prompt};

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

/// Parameters for the `score_prompt` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ScorePromptParams {
    /// The prompt to score.
    pub text: String,
}

/// Parameters for the `list_samples` tool.
#[derive(Debug, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct ListSamplesParams {
    /// Include a full assessment for each sample.
    #[serde(default)]
    pub with_scores: bool,
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

/// MCP server exposing prompt scoring to AI assistants.
#[derive(Clone)]
pub struct ProjectServer {
    engine: Arc<ScoringEngine>,
    policy: InputPolicy,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a server with the built-in lexicon and default input policy.
    pub fn new() -> Self {
        Self::with_engine(ScoringEngine::default(), InputPolicy::default())
    }

    /// Create a server from loaded configuration.
    pub fn from_config(config: &Config) -> ConfigResult<Self> {
        Ok(Self::with_engine(
            config.scoring_engine()?,
            config.input_policy(),
        ))
    }

    fn with_engine(engine: ScoringEngine, policy: InputPolicy) -> Self {
        Self {
            engine: Arc::new(engine),
            policy,
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
        });

        let text = if params.format == "json" {
            to_json(&info)?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score a titration prompt.
    #[tool(
        description = "Score a titration-lab prompt on context, specificity, clarity, objective, \
                       and completeness. Returns sub-scores, total, band, and suggestions."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn score_prompt(
        &self,
        Parameters(params): Parameters<ScorePromptParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "score_prompt", text_len = params.text.len(), "executing MCP tool");

        let prompt = validate_prompt(&params.text, &self.policy)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        let assessment = self.engine.assess(prompt);
        let json = to_json(&assessment)?;

        tracing::info!(
            tool = "score_prompt",
            total = assessment.report.total,
            class = %assessment.class,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// List the built-in sample prompts.
    #[tool(description = "List example prompts that score well, optionally with their assessments.")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn list_samples(
        &self,
        Parameters(params): Parameters<ListSamplesParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "list_samples", with_scores = params.with_scores, "executing MCP tool");

        let samples: Vec<serde_json::Value> = SAMPLES
            .iter()
            .map(|sample| {
                let mut value = serde_json::json!({
                    "title": sample.title,
                    "text": sample.text,
                    "advertised_score": sample.advertised_score,
                });
                if params.with_scores {
                    value["assessment"] = serde_json::to_value(self.engine.assess(sample.text))
                        .unwrap_or(serde_json::Value::Null);
                }
                value
            })
            .collect();

        tracing::info!(tool = "list_samples", count = samples.len(), "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(to_json(&samples)?)]))
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
                "{} MCP server. Call score_prompt with a student's titration question to get \
                 a 0-100 quality score and concrete suggestions; list_samples shows model prompts.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
