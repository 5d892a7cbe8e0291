pub mod loader;

pub use loader::{load_config, parse_config, DEFAULT_CONFIG_PATH};
