//! Drift Navigator MCP tool surface.
//!
//! Schemas, dispatch and per-tool handlers live in separate submodules.

pub(crate) mod catalog;
mod context_doc;
mod dispatch;
mod schemas;

pub use dispatch::DriftNavigatorService;
