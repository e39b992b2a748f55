//! Error types for the permissions vocabulary.

use thiserror::Error;

/// A role identifier that is not one of the four recognized roles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

/// A resource name that does not match any protected resource.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resource: {0}")]
pub struct UnknownResource(pub String);
