//! Recording value objects

pub mod file_name;
pub mod format;

pub use file_name::RecordFileName;
pub use format::{AudioEncoder, AudioSource, OutputFormat};
