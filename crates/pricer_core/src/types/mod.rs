//! Core contract and error types.
//!
//! This module provides:
//! - `contract`: Option contract parameters shared by every pricing method
//! - `error`: The workspace-level error taxonomy
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level:
//! - [`ContractParams`], [`OptionType`] from `contract`
//! - [`PricingError`] from `error`

pub mod contract;
pub mod error;

pub use contract::{ContractParams, OptionType};
pub use error::PricingError;
