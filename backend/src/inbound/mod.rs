//! Inbound adapters that translate external requests into domain values
//! while keeping framework details at the edge.

pub mod http;
