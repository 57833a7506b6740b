//! Domain layer — pure reconciliation logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod action;
pub mod config;
pub mod error;
pub mod layer;
pub mod relation;
pub mod status;

pub use action::{ActionResults, db_info};
pub use config::{Configuration, DEFAULT_SERVER_PORT, RESERVED_SSH_PORT, validate};
pub use error::{ActionError, AgentError, AgentUnavailable, RelationDataError, ValidationError};
pub use layer::{DesiredLayer, LAYER_LABEL, SERVICE_NAME, build};
pub use relation::{RawRelationRecord, RelationCredential, resolve};
pub use status::{ServiceState, Status, aggregate, malformed_relation};
