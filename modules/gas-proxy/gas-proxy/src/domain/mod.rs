mod envelope;
mod error;
mod response;
mod service;
mod upstream;

pub use envelope::{ProxyRequest, UpstreamAction, UpstreamEnvelope, api_path};
pub use error::ProxyError;
pub use response::{ProxyResponse, cors_headers};
pub use service::GasProxy;
pub use upstream::{UpstreamClient, UpstreamError, UpstreamReply};
