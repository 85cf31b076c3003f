//! Domain Layer - Pure theming logic with zero external dependencies
//!
//! This layer contains:
//! - **Entities**: Core theming objects (ProjectTheme, ThemeCatalog, StyleRule)
//! - **Domain Services**: Pure classification and resolution functions
//! - **Domain Errors**: Error types for theming operations
//!
//! # Clean Architecture Rules
//! - Zero dependencies on any host document representation
//! - 100% testable without mocks
//! - Framework-agnostic theming rules

pub mod entities;
pub mod errors;
pub mod services;

// Re-export commonly used types
pub use entities::*;
pub use errors::DomainError;
