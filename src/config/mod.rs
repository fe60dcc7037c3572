//! Configuration for project generation.
//!
//! Engine wiring lives in [`engine`], the persistent TOML file in [`file`].

pub mod engine;
pub mod file;

pub use engine::EngineSettings;
pub use file::FileConfig;
