//! Background processing - the fixed-period publish ticker.

mod ticker;

pub use ticker::{Ticker, TickerConfig};
