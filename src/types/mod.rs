//! Core types for the virtwatch adapter.
//!
//! This module provides foundational types used throughout the crate:
//! - **IDs**: Strongly-typed identifiers (InstanceId)
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Configuration structures for the power-state listener

mod config;
mod errors;
mod ids;

pub use config::{Config, ListenerConfig};
pub use errors::{Error, Result};
pub use ids::InstanceId;
