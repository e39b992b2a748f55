//! Permissions SDK
//!
//! This crate provides the public API for the `permissions` module:
//!
//! - [`PermissionResolverClient`] - API trait for consumers and implementations
//! - [`Role`], [`Resource`], [`Capability`] - the fixed vocabulary of the matrix
//! - [`Permission`], [`Capabilities`] - resolved capability records
//! - [`UnknownRole`], [`UnknownResource`] - parse errors for the vocabulary
//!
//! ## Usage
//!
//! ```ignore
//! use permissions_sdk::{Capability, PermissionResolverClient};
//!
//! let permission = resolver.resolve("staff", "complaints").await;
//! if permission.allows(Capability::Edit) {
//!     // render the edit action
//! }
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod error;
pub mod models;

pub use api::PermissionResolverClient;
pub use error::{UnknownResource, UnknownRole};
pub use models::{Capabilities, Capability, Permission, Resource, Role};
