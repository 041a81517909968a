// src/mcp/mod.rs

//! JSON-RPC tool server exposing the tracker operations.

pub mod jsonrpc;
pub mod server;
pub mod stdio;
pub mod tools;

pub use jsonrpc::JsonRpcRequest;
pub use server::McpServer;
pub use stdio::{handle_line, serve_stdio};
