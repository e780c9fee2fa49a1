//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Environment configuration
//! - Tracing subscriber setup
//! - PostgreSQL pool construction

pub mod config;
pub mod database;
pub mod telemetry;
