//! The classic stock-ticker transcript: two displays subscribe to a feed,
//! prices change round by round, and one display unsubscribes partway.

use ticker_core::QuoteFeed;
use ticker_observers::{IdSource, PriceDisplay};

fn set_round(feed: &mut QuoteFeed) {
    feed.set_ibm(197.00);
    feed.set_aapl(677.60);
    feed.set_goog(676.40);
}

fn main() {
    let mut feed = QuoteFeed::new();
    let mut ids = IdSource::new();

    println!("Create an observer that is sent updates from the feed");
    let first = PriceDisplay::subscribe(&mut feed, &mut ids);
    println!("New observer {}", first.borrow().id());

    println!("Update the stock prices");
    set_round(&mut feed);

    println!("Create a second observer that is sent updates from the feed");
    let second = PriceDisplay::subscribe(&mut feed, &mut ids);
    println!("New observer {}", second.borrow().id());

    println!("Update the stock prices");
    set_round(&mut feed);

    println!("Remove observer {}", second.borrow().id());
    feed.unregister(&second);

    println!("Update the stock prices");
    set_round(&mut feed);
}
