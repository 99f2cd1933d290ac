//! KYC assistant backend: lead scoring, verification analyzers, and the HTTP
//! surface that exposes them to the chat layer.

pub mod config;
pub mod error;
pub mod kyc;
pub mod telemetry;
