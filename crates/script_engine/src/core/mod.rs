//! # Core Engine Module
//!
//! Shared configuration types used by the engine and by applications that
//! embed it.

pub mod config;

pub use config::{
    Config,
    ConfigError,
    EngineConfig,
    RunConfig,
    WindowConfig,
};
