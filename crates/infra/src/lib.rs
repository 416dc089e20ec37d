// crates/infra/src/lib.rs
pub mod filesystem;
pub mod platform;

pub use filesystem::{MetadataDescriber, StdDirectoryReader};
