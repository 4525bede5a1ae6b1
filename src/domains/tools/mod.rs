//! Tools domain module.
//!
//! Every tool maps 1:1 to a panel HTTP endpoint. A tool declares its name,
//! description, input and output schemas, and an async handler; the shared
//! route adapter in `common` validates input before any network call and
//! shapes handler results into the uniform `{status:"ok"|"error"}` envelope.
//!
//! ## Architecture
//!
//! - `definitions/` - tool implementations, one module per tool group
//! - `common.rs` - tool-model builder and route adapter
//! - `router.rs` - dynamic ToolRouter builder for the stdio transport
//! - `registry.rs` - central tool metadata registry
//! - `error.rs` - tool-specific error types

pub mod common;
pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
