//! Database relation data and credential resolution.
//!
//! This module is intentionally free of I/O, async, and external layer imports.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::error::RelationDataError;

/// One raw databag as published on the relation.
pub type RawRelationRecord = BTreeMap<String, String>;

/// Connection details resolved from the relation.
#[derive(Clone, PartialEq, Eq)]
pub struct RelationCredential {
    pub host: String,
    pub port: String,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for RelationCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelationCredential")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl RelationCredential {
    /// Parse a non-empty databag.
    ///
    /// # Errors
    ///
    /// Returns [`RelationDataError::Malformed`] if `endpoints`, `username` or
    /// `password` is missing, or if the endpoint is not `host:port`.
    pub fn from_record(record: &RawRelationRecord) -> Result<Self, RelationDataError> {
        let endpoints = required(record, "endpoints")?;
        let (host, port) = parse_endpoint(endpoints)?;
        Ok(Self {
            host,
            port,
            username: required(record, "username")?.to_string(),
            password: required(record, "password")?.to_string(),
        })
    }
}

fn required<'a>(record: &'a RawRelationRecord, key: &str) -> Result<&'a str, RelationDataError> {
    record
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| RelationDataError::Malformed(format!("missing '{key}'")))
}

/// Split the first entry of a comma-separated endpoint list into host and port.
///
/// The port follows the last colon. IPv6 hosts must be bracketed
/// (`[::1]:5432`); the brackets are stripped from the returned host.
fn parse_endpoint(endpoints: &str) -> Result<(String, String), RelationDataError> {
    let first = endpoints.split(',').next().unwrap_or_default().trim();
    let malformed = || RelationDataError::Malformed(format!("endpoint '{first}' is not host:port"));

    let (host, port) = first.rsplit_once(':').ok_or_else(malformed)?;
    let host = match host.strip_prefix('[') {
        Some(inner) => inner.strip_suffix(']').ok_or_else(malformed)?,
        None if host.contains([':', ']']) => return Err(malformed()),
        None => host,
    };
    if host.is_empty() {
        return Err(malformed());
    }
    let port: u16 = port.parse().map_err(|_| {
        RelationDataError::Malformed(format!("endpoint '{first}' has invalid port '{port}'"))
    })?;
    Ok((host.to_string(), port.to_string()))
}

/// Resolve the credential from the relation's databags.
///
/// Databags are scanned in order; the first non-empty one wins. Returns
/// `Ok(None)` when every databag is empty (relation not yet populated).
///
/// # Errors
///
/// Returns [`RelationDataError::Malformed`] when the first non-empty databag
/// cannot be parsed. Malformed data is never treated as absent.
pub fn resolve(
    records: &[RawRelationRecord],
) -> Result<Option<RelationCredential>, RelationDataError> {
    records
        .iter()
        .find(|record| !record.is_empty())
        .map(RelationCredential::from_record)
        .transpose()
}
