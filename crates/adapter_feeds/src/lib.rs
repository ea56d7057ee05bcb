//! # adapter_feeds: Market-Data Feed Contract
//!
//! ## Adapter Layer Role
//!
//! The pricing engine needs exactly one piece of market data: the most
//! recent closing price for a symbol. This crate defines that narrow
//! contract ([`SpotFeed`]) and a reference in-memory implementation
//! ([`StaticFeed`]) used by tests and demos. Concrete network-backed
//! adapters implement the same trait and live outside the pricing core.
//!
//! The engine treats the returned spot as an opaque positive real; any
//! feed failure maps to [`PricingError::DataUnavailable`] and aborts the
//! request before simulation starts.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use pricer_core::types::PricingError;

/// Feed-level errors.
///
/// # Variants
/// - `UnknownSymbol`: The symbol is not covered by this feed
/// - `NoClose`: The symbol is known but no usable closing price exists
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FeedError {
    /// The requested symbol is not served by this feed.
    #[error("Unknown symbol: {symbol}")]
    UnknownSymbol {
        /// The symbol that was requested.
        symbol: String,
    },

    /// The feed has no usable closing price for the symbol.
    #[error("No closing price for {symbol}: {reason}")]
    NoClose {
        /// The symbol that was requested.
        symbol: String,
        /// Why no price was available (empty series, stale data, ...).
        reason: String,
    },
}

impl From<FeedError> for PricingError {
    fn from(err: FeedError) -> Self {
        PricingError::DataUnavailable(err.to_string())
    }
}

/// Narrow contract for a spot-price provider.
///
/// Given a ticker symbol, a feed returns the most recent closing price as
/// a positive real, or fails. Implementations must be side-effect free
/// from the engine's perspective: one call per pricing request, fully
/// synchronous.
pub trait SpotFeed {
    /// Returns the latest closing price for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError`] if the symbol is unknown or no usable close
    /// exists.
    fn latest_close(&self, symbol: &str) -> Result<f64, FeedError>;
}

/// In-memory feed over a fixed symbol universe.
///
/// Mirrors the fixed-instrument universe of the original service: a small
/// set of symbols with known closes. Used as the test double for the
/// engine and as a template for real adapters.
///
/// # Examples
///
/// ```
/// use adapter_feeds::{SpotFeed, StaticFeed};
///
/// let feed = StaticFeed::new().with_close("AAPL", 187.32);
/// assert_eq!(feed.latest_close("AAPL").unwrap(), 187.32);
/// assert!(feed.latest_close("UNLISTED").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticFeed {
    closes: HashMap<String, f64>,
}

impl StaticFeed {
    /// Creates an empty feed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the closing price for a symbol.
    pub fn with_close(mut self, symbol: &str, close: f64) -> Self {
        self.closes.insert(symbol.to_string(), close);
        self
    }
}

impl SpotFeed for StaticFeed {
    fn latest_close(&self, symbol: &str) -> Result<f64, FeedError> {
        let close = self
            .closes
            .get(symbol)
            .copied()
            .ok_or_else(|| FeedError::UnknownSymbol {
                symbol: symbol.to_string(),
            })?;

        if !close.is_finite() || close <= 0.0 {
            return Err(FeedError::NoClose {
                symbol: symbol.to_string(),
                reason: format!("stored close {} is not a positive price", close),
            });
        }

        debug!(symbol, close, "served static close");
        Ok(close)
    }
}
