use ticker_core::{Observer, Quotes};

/// An observer that records every snapshot it receives, in order.
///
/// Useful when the full delivery history matters rather than just the
/// latest value, such as asserting on the partially updated snapshots a
/// run of setter calls produces.
#[derive(Debug, Default)]
pub struct Recorder {
    received: Vec<Quotes>,
}

impl Recorder {
    /// Creates a recorder with an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every snapshot received so far, oldest first.
    #[must_use]
    pub fn received(&self) -> &[Quotes] {
        &self.received
    }

    /// Returns the most recent snapshot, if any arrived.
    #[must_use]
    pub fn last(&self) -> Option<Quotes> {
        self.received.last().copied()
    }
}

impl Observer for Recorder {
    fn update(&mut self, quotes: Quotes) {
        self.received.push(quotes);
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use ticker_core::QuoteFeed;

    use super::*;

    #[test]
    fn records_deliveries_in_order() {
        let mut feed = QuoteFeed::new();
        let recorder = Rc::new(RefCell::new(Recorder::new()));
        feed.register(recorder.clone());

        feed.set_ibm(1.0);
        feed.set_aapl(2.0);

        let recorder = recorder.borrow();
        assert_eq!(recorder.received().len(), 2);
        assert_eq!(recorder.last(), Some(feed.quotes()));
    }

    #[test]
    fn starts_with_no_history() {
        let recorder = Recorder::new();

        assert!(recorder.received().is_empty());
        assert_eq!(recorder.last(), None);
    }
}
