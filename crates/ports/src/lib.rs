//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: directory enumeration and per-entry metadata queries
//!
//! These ports keep the listing use case independent of the real filesystem.

// crates/ports/src/lib.rs
pub mod filesystem;
