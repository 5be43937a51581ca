//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing macros with structured fields (rule, user, path, error)
//!
//! Consumers:
//!     → logging.rs (fmt layer to stderr, filtered by level)
//! ```
//!
//! # Design Decisions
//! - Structured fields instead of formatted strings
//! - Stdout is reserved for bot replies; logs go to stderr
//! - `RUST_LOG` overrides the configured level

pub mod logging;
