//! Reusable observers for the ticker quote feed.
//!
//! This crate provides [`Observer`] implementations that work with any
//! [`QuoteFeed`], plus the identifier source their construction protocol
//! uses:
//!
//! - [`PriceDisplay`] — caches and renders the latest snapshot, tagged
//!   with an [`ObserverId`]
//! - [`Recorder`] — captures every received snapshot, in delivery order
//! - [`IdSource`] — hands out monotonically increasing observer ids
//!
//! [`Observer`]: ticker_core::Observer
//! [`QuoteFeed`]: ticker_core::QuoteFeed

mod display;
mod id;
mod recorder;

pub use display::PriceDisplay;
pub use id::{IdSource, ObserverId};
pub use recorder::Recorder;
