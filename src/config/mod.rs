//! Layered configuration for the command line client.

mod defaults;
mod loader;

pub use defaults::{DirectoryConfig, Network};
pub use loader::{ENV_PREFIX, get_default_config, load_configuration, write_config_to};
