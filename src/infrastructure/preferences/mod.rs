//! Preference store adapters

mod memory;
mod toml_store;

pub use memory::MemoryPreferenceStore;
pub use toml_store::TomlPreferenceStore;
