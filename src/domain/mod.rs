//! Domain layer for Tree Warden
//!
//! Architecture: Domain Model - Pure business logic for the quality gate
//! - Contains the core entities and value objects of both scan passes
//! - Independent of infrastructure concerns like file systems or terminals
//! - Expresses the ubiquitous language of banned patterns and naming rules

pub mod violations;

// Re-export main domain types for convenience
pub use violations::*;
