mod client;
mod service;
mod table;

pub use service::Service;
pub use table::{DEFAULT_PERMISSIONS, RolePermissions};
