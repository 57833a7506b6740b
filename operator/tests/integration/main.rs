//! Integration tests for fastapi-demo-operator
//!
//! These tests spawn the actual binary or talk HTTP to a fake workload agent.
//! They are slower and should be run separately from unit tests.

mod fake_agent;
