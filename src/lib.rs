//! # Stock Trend
//!
//! Closing stock price analysis: loads a daily price series from CSV,
//! smooths it with exponential weighted moving averages at a long and a
//! short time scale, derives a MACD-like oscillator from the two, and
//! renders everything as a two-panel chart.
//!
//! ## Quick Start
//!
//! ```no_run
//! use stock_trend::{load_csv, OscillatorSeries};
//!
//! fn main() -> stock_trend::Result<()> {
//!     let data = load_csv("goog.csv")?;
//!     let prices: Vec<f64> = data.iter().map(|p| p.close).collect();
//!
//!     let series = OscillatorSeries::compute(&prices, 28.0, 14.0)?;
//!     println!("final oscillator value: {}", series.diff[series.len() - 1]);
//!     Ok(())
//! }
//! ```

pub mod chart;
pub mod data;
pub mod error;
pub mod oscillator;
pub mod window;

// Re-export commonly used types
pub use crate::data::{load_csv, PricePoint};
pub use crate::error::{Result, TrendError};
pub use crate::oscillator::{ewma, OscillatorSeries, SMOOTHING_SPAN};
pub use crate::window::parse_window;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
