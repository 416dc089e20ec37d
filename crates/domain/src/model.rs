pub mod entry_descriptor;

pub use entry_descriptor::EntryDescriptor;
