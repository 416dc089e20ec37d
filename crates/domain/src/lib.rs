pub mod format;
pub mod model;
pub mod options;

pub use format::{base_name, render_line};
pub use model::EntryDescriptor;
pub use options::DisplayOptions;
