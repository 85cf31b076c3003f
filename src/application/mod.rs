//! Application Layer - Orchestration and host-facing workflows
//!
//! This layer sequences the domain services over a host-owned document:
//! - **Ports**: The document/editing-session interface the host implements
//! - **Services**: The theme engine orchestrator and the global rule manager
//! - **Use Cases**: Read-only catalog workflows for host UIs
//! - **DTOs**: Data transfer objects for layer boundaries
//!
//! # Clean Architecture Rules
//! - Depends only on the domain layer
//! - Defines ports that adapters implement
//! - Contains no host-specific code

pub mod dto;
pub mod ports;
pub mod services;
pub mod use_cases;

// Re-export commonly used types
pub use dto::*;
pub use ports::*;
pub use services::*;
pub use use_cases::*;
