//! Static Members
//! Example: associated constants, a global instance counter, a lazy table
//!
//! Run with: cargo run --bin p14_static_members

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use lazy_static::lazy_static;
use language_tour::banner;

struct Utilities;

impl Utilities {
    const STATIC_FIELD: i32 = 10;

    fn static_method() -> &'static str {
        "This is a static method."
    }
}

static INSTANCE_COUNT: AtomicUsize = AtomicUsize::new(0);

lazy_static! {
    static ref UNITS: HashMap<&'static str, u32> = {
        let mut m = HashMap::new();
        m.insert("second", 1);
        m.insert("minute", 60);
        m.insert("hour", 3600);
        m
    };
}

#[derive(Debug)]
struct Counted {
    id: usize,
}

impl Counted {
    fn new() -> Self {
        let id = INSTANCE_COUNT.fetch_add(1, Ordering::Relaxed) + 1;
        Self { id }
    }

    fn instance_count() -> usize {
        INSTANCE_COUNT.load(Ordering::Relaxed)
    }
}

fn seconds_in(unit: &str) -> Option<u32> {
    UNITS.get(unit).copied()
}

fn main() {
    banner::start("Static Members");

    println!("Static field in Utilities: {}", Utilities::STATIC_FIELD);
    println!("{}", Utilities::static_method());

    let first = Counted::new();
    let second = Counted::new();
    println!("created ids {} and {}", first.id, second.id);
    println!("Number of instances: {}", Counted::instance_count());

    banner::section("Lazily built table");
    for unit in ["minute", "hour", "fortnight"] {
        match seconds_in(unit) {
            Some(secs) => println!("1 {unit} = {secs}s"),
            None => println!("unknown unit: {unit}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_only_grows() {
        let before = Counted::instance_count();
        let a = Counted::new();
        let b = Counted::new();
        assert!(b.id > a.id);
        assert!(Counted::instance_count() >= before + 2);
    }

    #[test]
    fn test_lazy_table() {
        assert_eq!(seconds_in("hour"), Some(3600));
        assert_eq!(seconds_in("fortnight"), None);
        assert_eq!(Utilities::STATIC_FIELD, 10);
    }
}
