//! HTTP surface owned by the server itself.

mod permissions;

pub use permissions::{Envelope, router as permissions_router};
