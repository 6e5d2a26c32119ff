//! HTTP adapter for the verification backend

pub mod gateway;
pub mod protocol;

pub use gateway::HttpVerificationGateway;
