//! # OreCost Common Library
//!
//! Shared code for the OreCost service:
//! - Common error type
//! - Configuration loading
//! - Ore totals model
//! - Tag normalization and polymorphic name extraction helpers

pub mod config;
pub mod error;
pub mod model;
pub mod names;
pub mod tags;

pub use error::{Error, Result};
pub use model::OreTotals;
