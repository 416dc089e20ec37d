//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: reads a directory, describes every entry and writes one
//!   rendered line per entry
//!
//! Use cases depend on the domain and on ports, never on infrastructure.

pub mod orchestrator;

pub use orchestrator::ListDirectory;
