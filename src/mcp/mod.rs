//! Minimal MCP (Model Context Protocol) runtime over stdio.
//!
//! MCP is a JSON-RPC 2.0 protocol by which a language-model host discovers
//! and invokes typed tools exposed by a server process. The flow:
//!
//! ```text
//! Host (LLM client)                     benchtop
//! ┌──────────────┐                   ┌──────────────────┐
//! │              │  initialize       │                  │
//! │              ├──────────────────►│  handshake       │
//! │              │  tools/list       │                  │
//! │              ├──────────────────►│  ToolRegistry    │
//! │              │  tools/call ──────┼─► handler ─► text│
//! └──────────────┘     (stdio)       └──────────────────┘
//! ```
//!
//! Transport is line-delimited JSON on stdin/stdout. Tool-domain failures
//! are reported in-protocol (`isError` results); only malformed requests
//! become JSON-RPC errors.

pub mod protocol;
pub mod registry;
pub mod server;

pub use registry::{CallError, ToolRegistry};
pub use server::Server;
