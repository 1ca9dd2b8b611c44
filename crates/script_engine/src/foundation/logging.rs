//! Logging setup

/// Initialize logging with a fallback level used when `RUST_LOG` is unset
///
/// `RUST_LOG` directives still win over `level`. Returns `false` if a logger
/// was already installed.
pub fn init_with_level(level: log::LevelFilter) -> bool {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .try_init()
        .is_ok()
}
