//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → FrameConfig (validated, immutable)
//!     → cloned into the transport and retriever
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::FrameConfig;
pub use schema::LogFormat;
pub use schema::ObservabilityConfig;
pub use schema::RetrievalConfig;
pub use schema::TransportConfig;
