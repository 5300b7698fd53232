//! Shared fixtures for integration tests.

pub mod workspace_fixtures;
