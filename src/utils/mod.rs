//! Shared utilities: path handling and logging setup

pub mod logging;
pub mod path;

pub use logging::{init_logging, init_logging_from_config};
#[cfg(feature = "json-logging")]
pub use logging::init_json_logging;
pub use path::{is_absolute, join_all, join_path, normalize_path};
