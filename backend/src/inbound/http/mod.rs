//! HTTP inbound adapter: request extractors, error mapping and OpenAPI
//! schema wrappers for the domain contract.

pub mod authenticated;
pub mod error;
pub mod schemas;

pub use authenticated::AuthenticatedRequest;
pub use error::ApiResult;
