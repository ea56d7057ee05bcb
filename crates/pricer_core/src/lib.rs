//! # pricer_core: Foundation Types for the Vanilla Pricing Workspace
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the workspace, providing:
//! - Contract types: `OptionType`, `ContractParams` (`types::contract`)
//! - Error taxonomy: `PricingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal
//! external dependencies:
//! - serde: Serialisation support for the request/response surface
//! - thiserror: Structured error derivation
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::{ContractParams, OptionType};
//!
//! let contract = ContractParams::new(100.0, 0.05, 0.2, 1.0, OptionType::Call).unwrap();
//! assert_eq!(contract.option_type, OptionType::Call);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod types;
