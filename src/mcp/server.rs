// src/mcp/server.rs

use std::path::PathBuf;

use serde_json::{json, Map, Value};
use tracing::{debug, info};

use crate::engine::is_success;
use crate::mcp::jsonrpc::{
    json_rpc_error, json_rpc_response, tool_text_content, JsonRpcRequest, INVALID_PARAMS,
    METHOD_NOT_FOUND, NOT_INITIALIZED,
};
use crate::mcp::tools::{call_tool, tool_definitions, ToolCallError};

pub const MCP_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "project-tracker";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

const SERVER_INSTRUCTIONS: &str = "Project progress tracker: read project status and the \
    current task's context, and update task status.";

/// Request handler for the tool server.
///
/// Holds no project state; each `tools/call` names its project and gets a
/// freshly loaded store.
#[derive(Debug, Default)]
pub struct McpServer {
    initialized: bool,
    config_override: Option<PathBuf>,
}

impl McpServer {
    pub fn new(config_override: Option<PathBuf>) -> Self {
        Self {
            initialized: false,
            config_override,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Handle one request. Returns `None` for notifications.
    pub fn handle(&mut self, request: JsonRpcRequest) -> Option<Value> {
        let method = request.method.as_str();
        debug!(method = %method, "request");

        if method == "initialize" {
            return Some(json_rpc_response(
                request.id,
                json!({
                    "protocolVersion": MCP_VERSION,
                    "serverInfo": { "name": SERVER_NAME, "version": SERVER_VERSION },
                    "capabilities": { "tools": {} },
                    "instructions": SERVER_INSTRUCTIONS
                }),
            ));
        }

        if method == "notifications/initialized" {
            info!("client initialized");
            self.initialized = true;
            return None;
        }

        if !self.initialized {
            if request.is_notification() {
                return None;
            }
            return Some(json_rpc_error(request.id, NOT_INITIALIZED, "Server not initialized"));
        }

        match method {
            "ping" => Some(json_rpc_response(request.id, json!({}))),
            "tools/list" => Some(json_rpc_response(
                request.id,
                json!({ "tools": tool_definitions() }),
            )),
            "tools/call" => Some(self.handle_tool_call(request.id, request.params)),
            _ if request.is_notification() => None,
            other => Some(json_rpc_error(
                request.id,
                METHOD_NOT_FOUND,
                &format!("Method not found: {other}"),
            )),
        }
    }

    fn handle_tool_call(&self, id: Option<Value>, params: Option<Value>) -> Value {
        let Some(Value::Object(params)) = params else {
            return json_rpc_error(id, INVALID_PARAMS, "params must be an object");
        };

        let Some(name) = params.get("name").and_then(Value::as_str) else {
            return json_rpc_error(id, INVALID_PARAMS, "params.name must be a string");
        };

        let empty = Map::new();
        let args = match params.get("arguments") {
            None | Some(Value::Null) => &empty,
            Some(Value::Object(args)) => args,
            Some(_) => {
                return json_rpc_error(id, INVALID_PARAMS, "params.arguments must be an object");
            }
        };

        match call_tool(name, args, self.config_override.as_deref()) {
            Ok(envelope) => {
                let is_error = !is_success(&envelope);
                json_rpc_response(id, tool_text_content(&envelope, is_error))
            }
            Err(e @ ToolCallError::UnknownTool(_)) => {
                json_rpc_error(id, INVALID_PARAMS, &e.to_string())
            }
        }
    }
}
