//! Travel planner backend library.
//!
//! Hosts the domain type contract, the support-staff seeding service with its
//! PostgreSQL adapter, and the thin inbound layer that exposes the contract
//! to actix-web handlers.

pub mod contract;
pub mod domain;
pub mod employee_seed;
pub mod inbound;
pub mod outbound;

/// Public OpenAPI surface used by tooling.
pub use contract::ContractDoc;
