//! Events
//! Example: a source that notifies subscribed handlers
//!
//! Run with: cargo run --bin p05_events

use language_tour::banner;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Default)]
struct EventArgs {
    message: String,
}

type Handler = Box<dyn FnMut(&EventSource, &EventArgs)>;

struct EventSource {
    name: String,
    handlers: Vec<Handler>,
}

impl EventSource {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handlers: Vec::new(),
        }
    }

    fn subscribe(&mut self, handler: impl FnMut(&EventSource, &EventArgs) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Notify every handler; returns how many ran.
    fn raise(&mut self, args: &EventArgs) -> usize {
        // Take the handlers out so each one can borrow the source.
        let mut handlers = std::mem::take(&mut self.handlers);
        debug!(source = %self.name, count = handlers.len(), "raising event");
        for handler in handlers.iter_mut() {
            handler(&*self, args);
        }
        let count = handlers.len();
        self.handlers = handlers;
        count
    }
}

fn main() {
    banner::start("Events");

    let mut source = EventSource::new("button");
    let args = EventArgs::default();
    println!("handlers run with no subscribers: {}", source.raise(&args));

    source.subscribe(|_, _| println!("Event handled!"));
    source.subscribe(|sender, args| {
        println!("{} raised an event ({:?})", sender.name, args.message)
    });

    let handled = source.raise(&EventArgs {
        message: "clicked".into(),
    });
    println!("handlers run: {handled}");
}
