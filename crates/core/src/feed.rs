use std::{cell::RefCell, ptr, rc::Rc};

use crate::{Observer, Quotes, SharedObserver, Symbol};

/// The publishing side of the feed: current prices plus the registry of
/// observers to push them to.
///
/// Every setter overwrites one field of the snapshot and then broadcasts
/// the full snapshot to every registered observer, in registration order,
/// even when the new price equals the old one. Registration is append-only
/// and unchecked: registering the same handle twice yields two deliveries
/// per broadcast, and unregistering a handle that was never registered is
/// a silent no-op.
#[derive(Default)]
pub struct QuoteFeed {
    quotes: Quotes,
    registry: Vec<SharedObserver>,
}

impl QuoteFeed {
    /// Creates a feed with no observers and all prices at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn quotes(&self) -> Quotes {
        self.quotes
    }

    /// Returns the number of registry entries, duplicates included.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.registry.len()
    }

    /// Appends an observer to the end of the registry.
    ///
    /// No uniqueness check is performed: a handle registered twice
    /// receives every broadcast twice, once per entry.
    pub fn register(&mut self, observer: SharedObserver) {
        self.registry.push(observer);
    }

    /// Removes the first registry entry holding the given handle.
    ///
    /// Matching compares allocation addresses, so only clones of the same
    /// `Rc` match. A handle that is not registered is a silent no-op.
    pub fn unregister<O>(&mut self, observer: &Rc<RefCell<O>>)
    where
        O: Observer + ?Sized,
    {
        // Compare addresses only: vtable pointers for the same type can
        // differ across codegen units.
        let position = self
            .registry
            .iter()
            .position(|entry| ptr::addr_eq(Rc::as_ptr(entry), Rc::as_ptr(observer)));

        if let Some(index) = position {
            self.registry.remove(index);
        }
    }

    /// Pushes the current snapshot to every registered observer, in
    /// registration order.
    ///
    /// The registry is snapshotted before the loop, so registrations made
    /// while a broadcast is in flight take effect from the next broadcast.
    /// An empty registry is a no-op.
    pub fn notify(&self) {
        let registry = self.registry.clone();
        for observer in &registry {
            observer.borrow_mut().update(self.quotes);
        }
    }

    /// Overwrites the price for a symbol and broadcasts the snapshot.
    ///
    /// The broadcast is unconditional: setting a price to its current
    /// value still notifies every observer.
    pub fn set(&mut self, symbol: Symbol, price: f64) {
        self.quotes.set(symbol, price);
        self.notify();
    }

    /// Sets the IBM price and broadcasts the snapshot.
    pub fn set_ibm(&mut self, price: f64) {
        self.set(Symbol::Ibm, price);
    }

    /// Sets the AAPL price and broadcasts the snapshot.
    pub fn set_aapl(&mut self, price: f64) {
        self.set(Symbol::Aapl, price);
    }

    /// Sets the GOOG price and broadcasts the snapshot.
    pub fn set_goog(&mut self, price: f64) {
        self.set(Symbol::Goog, price);
    }
}
