// crates/shared-kernel/src/value_objects/mod.rs
pub mod entry_info;

pub use entry_info::{EntryName, FileSize, ModificationTime};
