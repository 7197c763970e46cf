//! Exchange-rate resolution: per-provider network adapters normalizing
//! third-party BTC price-feed responses into a single numeric rate.
//!
//! Architecturally independent of the gate: nothing here touches the
//! sensor, the flag or the protected store.

mod errors;
mod providers;
mod registry;
mod types;

pub use errors::RateError;
pub use registry::{fiat_unit, get_fiat_rate, supported_tickers};
pub use types::{FiatUnit, Rate, RateSource};
