//! Command implementations

pub mod action;
pub mod hook;
pub mod status;
