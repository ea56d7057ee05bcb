//! # pricer_pricing: Simulation and Orchestration Layer
//!
//! The root crate of the workspace: Monte Carlo path generation, payoff
//! aggregation, and the pricing service that ties the three pricing
//! methods together.
//!
//! ## Architecture
//!
//! ```text
//! PricingEngine
//! ├── SpotFeed            (adapter_feeds: spot acquisition, once per request)
//! ├── BlackScholes        (pricer_models: analytic method)
//! └── PathScheme          (simulate: lognormal / Euler-Maruyama)
//!          └── payoff     (discounted mean payoff over the terminal column)
//! ```
//!
//! ## Concurrency Model
//!
//! A request is a single, bounded computation: `n_paths × n_steps` normal
//! draws, drawn up front, then a rayon-parallel per-path update loop.
//! Paths are independent by construction; no request shares state with
//! another.
//!
//! ## Usage Example
//!
//! ```rust
//! use adapter_feeds::StaticFeed;
//! use pricer_core::types::{ContractParams, OptionType};
//! use pricer_pricing::{PricingEngine, PricingMethod, PricingRequest};
//!
//! let feed = StaticFeed::new().with_close("NVDA", 120.0);
//! let engine = PricingEngine::new(feed);
//!
//! let request = PricingRequest {
//!     symbol: "NVDA".to_string(),
//!     contract: ContractParams::new(120.0, 0.05, 0.3, 0.5, OptionType::Put).unwrap(),
//!     method: PricingMethod::MonteCarlo { n_paths: 1_000 },
//! };
//!
//! let result = engine.price(&request).unwrap();
//! assert!(result.option_price > 0.0);
//! assert!(result.path_matrix.is_some());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod engine;
pub mod payoff;
pub mod rng;
pub mod simulate;

// Re-export commonly used items for convenience
pub use engine::{PricingEngine, PricingMethod, PricingRequest, PricingResult};
pub use rng::{NormalSource, SimRng};
pub use simulate::{EulerMaruyamaScheme, LognormalScheme, PathMatrix, PathScheme};
