use std::{cell::RefCell, rc::Rc};

use crate::Quotes;

/// Receives each snapshot a feed broadcasts.
///
/// Observers let callers watch a [`QuoteFeed`](crate::QuoteFeed) without
/// changing its API: caching, rendering, or recording the pushed values.
/// The snapshot arrives by value, so an implementation may keep or discard
/// it freely; it cannot mutate the feed's stored prices through this call.
///
/// Closures automatically implement `Observer`, and a built-in impl for
/// `()` provides a no-op observer.
pub trait Observer {
    /// Receives the feed's full current snapshot.
    fn update(&mut self, quotes: Quotes);
}

/// Blanket implementation for observer closures.
impl<F> Observer for F
where
    F: FnMut(Quotes),
{
    fn update(&mut self, quotes: Quotes) {
        self(quotes);
    }
}

/// A no-op observer that ignores every snapshot.
impl Observer for () {
    fn update(&mut self, _quotes: Quotes) {}
}

/// A shared, interior-mutable observer handle.
///
/// The feed's registry stores observers behind `Rc<RefCell<…>>` so external
/// code can keep its own handle to an observer it registered, for later
/// inspection or unregistration. `Rc` also pins the feed to a single
/// thread, which is the delivery contract: one broadcast runs to
/// completion before anything else touches the feed.
pub type SharedObserver = Rc<RefCell<dyn Observer>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_implement_observer() {
        let mut seen = None;
        let mut observer = |quotes: Quotes| seen = Some(quotes);

        observer.update(Quotes {
            ibm: 1.0,
            aapl: 2.0,
            goog: 3.0,
        });

        assert_eq!(seen.map(|q| q.aapl), Some(2.0));
    }

    #[test]
    fn unit_is_a_no_op_observer() {
        ().update(Quotes::default());
    }
}
