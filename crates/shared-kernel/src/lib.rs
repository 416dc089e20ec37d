// crates/shared-kernel/src/lib.rs
pub use error::{DirlsError, InfrastructureError, Result};

pub mod error;
pub mod value_objects;

pub use value_objects::{EntryName, FileSize, ModificationTime};
