//! Workspace and document cache tests.

pub mod tests_workspace;
