//! Core traits and types for the ticker quote feed.
//!
//! This crate defines the shared abstractions that feeds and observers
//! build on:
//!
//! - [`Quotes`] — the three-symbol price snapshot pushed to observers
//! - [`Symbol`] — names one field of the snapshot
//! - [`Observer`] — receives each pushed snapshot
//! - [`QuoteFeed`] — owns the snapshot and the observer registry, and
//!   broadcasts the full snapshot on every price change
//!
//! # Features
//!
//! - `serde-derive` (default) — enables `Serialize`/`Deserialize` for
//!   [`Quotes`] and [`Symbol`].

mod feed;
mod observer;
mod quotes;

pub use feed::QuoteFeed;
pub use observer::{Observer, SharedObserver};
pub use quotes::{ParseSymbolError, Quotes, Symbol};
