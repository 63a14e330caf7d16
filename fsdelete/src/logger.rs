// fsdelete/src/logger.rs
//! Logger initialisation for the `fsdelete` binary and its tests.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initialises `env_logger`.
///
/// With `Some(level)` the level is forced for every module. With `None` the
/// `RUST_LOG` environment variable decides, defaulting to `warn`. Calling this
/// more than once is harmless; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = match level {
        Some(level) => {
            let mut builder = Builder::new();
            builder.filter_level(level);
            builder
        }
        None => Builder::from_env(Env::default().default_filter_or("warn")),
    };
    let _ = builder.format_timestamp_millis().try_init();
}
