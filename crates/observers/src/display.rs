use std::{cell::RefCell, rc::Rc};

use ticker_core::{Observer, QuoteFeed, Quotes};

use crate::{IdSource, ObserverId};

/// An observer that caches the latest snapshot and prints it on arrival.
///
/// A display subscribes at construction through
/// [`subscribe`](Self::subscribe), which finishes initializing the value
/// before the feed ever sees it. [`render`](Self::render) exposes the
/// printed transcript block, so output can be captured or replaced.
#[derive(Debug)]
pub struct PriceDisplay {
    id: ObserverId,
    last: Quotes,
}

impl PriceDisplay {
    /// Creates a display and registers it with the feed.
    ///
    /// The display draws the next id from `ids`, starts with an all-zero
    /// cached snapshot, and is fully initialized before the returned
    /// handle is appended to the registry, so a broadcast can never reach
    /// a partially built display. Keep the handle to inspect the cache or
    /// to unregister later.
    pub fn subscribe(feed: &mut QuoteFeed, ids: &mut IdSource) -> Rc<RefCell<Self>> {
        let display = Rc::new(RefCell::new(Self {
            id: ids.next_id(),
            last: Quotes::default(),
        }));
        feed.register(display.clone());
        display
    }

    /// Returns this display's id.
    #[must_use]
    pub fn id(&self) -> ObserverId {
        self.id
    }

    /// Returns the last snapshot this display received.
    #[must_use]
    pub fn last_quotes(&self) -> Quotes {
        self.last
    }

    /// Renders the cached snapshot as a transcript block.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "{}\nIBM: {:.2}\nAAPL: {:.2}\nGOOG: {:.2}\n",
            self.id, self.last.ibm, self.last.aapl, self.last.goog
        )
    }
}

impl Observer for PriceDisplay {
    fn update(&mut self, quotes: Quotes) {
        self.last = quotes;
        println!("{}", self.render());
    }
}
