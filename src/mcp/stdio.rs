// src/mcp/stdio.rs

//! Newline-delimited JSON-RPC over stdin/stdout.

use anyhow::Result;
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use crate::mcp::jsonrpc::{json_rpc_error, JsonRpcRequest, INVALID_REQUEST, PARSE_ERROR};
use crate::mcp::server::McpServer;

/// Serve until stdin closes or Ctrl-C is received.
pub async fn serve_stdio(mut server: McpServer) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    info!("tool server listening on stdio");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(raw) = line? else {
                    info!("stdin closed; shutting down");
                    break;
                };
                if raw.trim().is_empty() {
                    continue;
                }
                if let Some(resp) = handle_line(&mut server, &raw) {
                    let mut out = serde_json::to_string(&resp)?;
                    out.push('\n');
                    stdout.write_all(out.as_bytes()).await?;
                    stdout.flush().await?;
                }
            }
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    warn!(error = %e, "failed to listen for Ctrl+C");
                }
                info!("shutdown requested");
                break;
            }
        }
    }

    Ok(())
}

/// Decode one line and dispatch it. Framing errors become JSON-RPC errors.
pub fn handle_line(server: &mut McpServer, raw: &str) -> Option<Value> {
    let data: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => return Some(json_rpc_error(None, PARSE_ERROR, &format!("Parse error: {e}"))),
    };

    let (id, has_method) = match data.as_object() {
        Some(obj) => (obj.get("id").cloned(), obj.contains_key("method")),
        None => return Some(json_rpc_error(None, INVALID_REQUEST, "Invalid Request")),
    };
    if !has_method {
        return Some(json_rpc_error(id, INVALID_REQUEST, "Invalid Request"));
    }

    let request: JsonRpcRequest = match serde_json::from_value(data) {
        Ok(v) => v,
        Err(e) => {
            return Some(json_rpc_error(id, INVALID_REQUEST, &format!("Invalid Request: {e}")));
        }
    };

    server.handle(request)
}
