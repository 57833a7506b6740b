//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: file access for the declared
//! configuration and relation data, environment settings, and the HTTP client
//! for the workload agent.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod config;
pub mod pebble;
pub mod relation;
pub mod settings;

pub use config::YamlConfigSource;
pub use pebble::PebbleClient;
pub use relation::JsonRelationSource;
pub use settings::load_settings;
