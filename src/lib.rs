//! art-shares: Share pricing for fractional artwork investment
//!
//! This library provides:
//! - Daily share price updates driven by net trading volume
//! - Market value and per-share price of a listed artwork
//! - Platform fees and trade settlement
//! - Holding performance since purchase
//! - Price history simulation over daily volumes
//! - pt-BR currency display
//!
//! Every pricing operation is pure and returns a [`ValidationError`] on bad
//! input instead of a non-numeric result.

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod history;
pub mod model;
pub mod portfolio;
pub mod telemetry;
pub mod valuation;

pub use error::ValidationError;
pub use model::{compute_new_price, PriceUpdateInput};
pub use valuation::{
    compute_market_value, compute_platform_fee, compute_share_price, FeeKind, MarketValueInput,
};
