pub mod config;
pub mod layer;
pub mod types;

pub use config::{ENV_PREFIX, OperatorSettings};
pub use layer::{Layer, Override, Service, Startup};
pub use types::*;
