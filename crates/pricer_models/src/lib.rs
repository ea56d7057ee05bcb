//! # pricer_models: Analytic Valuation Layer
//!
//! Closed-form pricing for European options under lognormal dynamics.
//!
//! This crate provides:
//! - The Black-Scholes formula (`analytical::BlackScholes`)
//! - Standard normal distribution helpers (`analytical::distributions`)
//! - Structured analytic errors (`analytical::AnalyticalError`)
//!
//! ## Design Principles
//!
//! - **Deterministic**: No simulation error; exact under the model
//! - **Fail on degenerate inputs**: σ√T = 0 is a reported failure, never a
//!   silent clamp

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod analytical;
