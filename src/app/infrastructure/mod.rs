//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - The editor host seam
//! - File-backed settings store
//! - Error types

pub mod error;
pub mod host;
pub mod settings_store;
