//! Core library for the personalized insurance policy recommendation service:
//! profile validation, risk scoring, completion-backed recommendations, and
//! the HTTP router, plus the configuration and telemetry scaffolding shared
//! with the service binary.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
