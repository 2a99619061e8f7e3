//! Process configuration: types and environment loading.

pub mod loader;
pub mod types;

pub use loader::{from_env, from_lookup};
pub use types::{AppConfig, JsonFormat};
